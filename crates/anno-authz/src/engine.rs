//! Access evaluation
//!
//! The entry point callers use: expand the required scope through the
//! resolver registry, then match the caller's granted permissions against
//! the expansion.

use crate::error::AuthzError;
use crate::permission::{Action, Scope, SignedInUser};
use crate::resolver::ResolverRegistry;

/// Access-control evaluator.
///
/// Holds the resolver registry; stateless otherwise. One instance serves the
/// whole process and is shared behind an `Arc`.
#[derive(Debug, Clone, Default)]
pub struct AccessControl {
    registry: ResolverRegistry,
}

impl AccessControl {
    /// Create an evaluator over the given registry.
    #[inline]
    #[must_use]
    pub fn new(registry: ResolverRegistry) -> Self {
        Self { registry }
    }

    /// Whether the caller's permissions satisfy `(action, required_scope)`.
    ///
    /// With no required scope, any permission granting the action matches.
    /// Otherwise the required scope is expanded through the registry and any
    /// granted scope covering any expansion satisfies the check.
    ///
    /// # Errors
    /// Propagates resolution failures ([`AuthzError::InvalidScope`],
    /// [`AuthzError::NotFound`]); a plain mismatch is `Ok(false)`, not an
    /// error.
    pub async fn has_access(
        &self,
        user: &SignedInUser,
        action: Action,
        required_scope: Option<&Scope>,
    ) -> Result<bool, AuthzError> {
        let Some(required) = required_scope else {
            let allowed = user.permissions_for(action).next().is_some();
            tracing::debug!(%action, allowed, "evaluated bare action");
            return Ok(allowed);
        };

        let expanded = self.registry.expand(user.org_id, required).await?;
        let allowed = user.permissions_for(action).any(|p| {
            p.scope
                .as_ref()
                .is_some_and(|granted| expanded.iter().any(|req| granted.covers(req)))
        });
        tracing::debug!(%action, required = %required, allowed, "evaluated scoped action");
        Ok(allowed)
    }
}
