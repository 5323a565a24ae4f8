//! Scope resolvers and the per-prefix registry
//!
//! A required scope like `annotations:id:42` names an instance; authorization
//! works on type-level scopes. Resolvers expand the former into the latter.
//! Each resolver owns one prefix and is registered once, at startup — there
//! is no runtime swapping.

use crate::error::AuthzError;
use crate::permission::Scope;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;

/// Expands an instance-level scope reference into concrete type-level scopes.
///
/// Resolution is a pure read-through lookup: no side effects, safe to invoke
/// concurrently for different requests. The store lookup behind it may block
/// on I/O.
#[async_trait]
pub trait ScopeResolver: Send + Sync {
    /// Resolve `scope` for the given organization.
    ///
    /// # Errors
    /// - [`AuthzError::InvalidScope`] for a malformed reference
    /// - [`AuthzError::NotFound`] when the referenced entity is absent
    async fn resolve(&self, org_id: i64, scope: &str) -> Result<Vec<Scope>, AuthzError>;
}

/// Scope resolvers keyed by the prefix they handle.
///
/// Built at construction time and shared behind an `Arc`; scopes without a
/// registered prefix pass through unchanged.
#[derive(Clone, Default)]
pub struct ResolverRegistry {
    resolvers: HashMap<String, Arc<dyn ScopeResolver>>,
}

impl ResolverRegistry {
    /// Create an empty registry.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            resolvers: HashMap::new(),
        }
    }

    /// Register a resolver for a scope prefix (e.g. `annotations:id:`).
    ///
    /// A later registration for the same prefix replaces the earlier one.
    pub fn register(&mut self, prefix: impl Into<String>, resolver: Arc<dyn ScopeResolver>) {
        self.resolvers.insert(prefix.into(), resolver);
    }

    /// Whether a resolver is registered for exactly this prefix.
    #[inline]
    #[must_use]
    pub fn contains(&self, prefix: &str) -> bool {
        self.resolvers.contains_key(prefix)
    }

    /// Number of registered resolvers.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.resolvers.len()
    }

    /// Whether the registry is empty.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.resolvers.is_empty()
    }

    /// The resolver whose prefix matches the scope, if any.
    #[must_use]
    pub fn resolver_for(&self, scope: &str) -> Option<&Arc<dyn ScopeResolver>> {
        self.resolvers
            .iter()
            .find(|(prefix, _)| scope.starts_with(prefix.as_str()))
            .map(|(_, resolver)| resolver)
    }

    /// Expand a required scope into the concrete scopes to match against.
    ///
    /// Scopes with a registered prefix go through their resolver; everything
    /// else passes through as a single-element expansion.
    pub async fn expand(&self, org_id: i64, scope: &Scope) -> Result<Vec<Scope>, AuthzError> {
        match self.resolver_for(scope.as_str()) {
            Some(resolver) => resolver.resolve(org_id, scope.as_str()).await,
            None => Ok(vec![scope.clone()]),
        }
    }
}

impl std::fmt::Debug for ResolverRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolverRegistry")
            .field("prefixes", &self.resolvers.keys().collect::<Vec<_>>())
            .finish()
    }
}
