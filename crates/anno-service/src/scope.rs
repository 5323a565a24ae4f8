//! Annotation type scope resolver
//!
//! Expands `annotations:id:<n>` into the concrete type-level scope the
//! referenced annotation falls under: dashboard-type when it is tied to a
//! dashboard, organization-type otherwise.

use anno_authz::{
    AuthzError, ResolverRegistry, Scope, ScopeResolver, SCOPE_ANNOTATIONS_TYPE_DASHBOARD,
    SCOPE_ANNOTATIONS_TYPE_ORGANIZATION,
};
use anno_model::{AnnotationStore, StoreError};
use async_trait::async_trait;
use std::sync::Arc;

/// The prefix this resolver owns in the registry.
pub const ANNOTATION_ID_SCOPE_PREFIX: &str = "annotations:id:";

/// Parse the annotation id out of an `annotations:id:<n>` scope reference.
///
/// # Errors
/// [`AuthzError::InvalidScope`] for a wrong prefix, a non-numeric suffix, or
/// a non-positive id.
pub fn parse_annotation_id(scope: &str) -> Result<i64, AuthzError> {
    let suffix = scope
        .strip_prefix(ANNOTATION_ID_SCOPE_PREFIX)
        .ok_or_else(|| AuthzError::invalid_scope(scope))?;
    let id: i64 = suffix
        .parse()
        .map_err(|_| AuthzError::invalid_scope(scope))?;
    if id <= 0 {
        return Err(AuthzError::invalid_scope(scope));
    }
    Ok(id)
}

/// Resolver expanding annotation id references into type-level scopes.
///
/// Pure read-through lookup against the injected store; no state of its own.
pub struct AnnotationTypeScopeResolver {
    store: Arc<dyn AnnotationStore>,
}

impl AnnotationTypeScopeResolver {
    /// Create a resolver over the given store.
    #[inline]
    #[must_use]
    pub fn new(store: Arc<dyn AnnotationStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ScopeResolver for AnnotationTypeScopeResolver {
    async fn resolve(&self, org_id: i64, scope: &str) -> Result<Vec<Scope>, AuthzError> {
        let id = parse_annotation_id(scope)?;

        let item = self.store.get_by_id(org_id, id).await.map_err(|e| match e {
            StoreError::NotFound(id) => AuthzError::NotFound(format!("annotation {id}")),
            StoreError::Internal(msg) => AuthzError::Internal(msg),
        })?;

        let resolved = if item.is_dashboard_annotation() {
            SCOPE_ANNOTATIONS_TYPE_DASHBOARD
        } else {
            SCOPE_ANNOTATIONS_TYPE_ORGANIZATION
        };
        tracing::debug!(scope, resolved, "resolved annotation scope");
        Ok(vec![Scope::new(resolved)])
    }
}

/// Build a resolver registry with the annotation resolver registered under
/// its prefix. Callers with more resolvers register them on the result.
#[must_use]
pub fn annotation_scope_registry(store: Arc<dyn AnnotationStore>) -> ResolverRegistry {
    let mut registry = ResolverRegistry::new();
    registry.register(
        ANNOTATION_ID_SCOPE_PREFIX,
        Arc::new(AnnotationTypeScopeResolver::new(store)),
    );
    registry
}
