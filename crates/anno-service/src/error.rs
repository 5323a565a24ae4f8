//! Error types for the annotation service
//!
//! One taxonomy for every operation, with an HTTP status mapping for the
//! collaborator that owns routing. Validation failures (400) and
//! authorization denials (403) are distinct and never conflated with lookup
//! failures (404).

use anno_authz::AuthzError;
use anno_model::StoreError;

use crate::dashboards::DashboardError;

/// Errors surfaced by annotation operations.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// The request shape is invalid (e.g. unpaired dashboard/panel ids).
    #[error("bad request: {0}")]
    BadRequest(String),

    /// The caller's permissions do not satisfy the required action/scope.
    /// Terminal for the request; never retried.
    #[error("access denied")]
    Forbidden,

    /// Scope resolution failed.
    #[error(transparent)]
    Authz(#[from] AuthzError),

    /// Annotation store failure.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Dashboard lookup failure.
    #[error(transparent)]
    Dashboard(#[from] DashboardError),
}

impl ServiceError {
    /// HTTP status the routing collaborator should answer with.
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            ServiceError::BadRequest(_) => 400,
            ServiceError::Forbidden => 403,
            ServiceError::Authz(AuthzError::InvalidScope(_)) => 400,
            ServiceError::Authz(AuthzError::NotFound(_)) => 404,
            ServiceError::Authz(AuthzError::Internal(_)) => 500,
            ServiceError::Store(StoreError::NotFound(_)) => 404,
            ServiceError::Store(StoreError::Internal(_)) => 500,
            ServiceError::Dashboard(DashboardError::NotFound(_)) => 404,
            ServiceError::Dashboard(DashboardError::Internal(_)) => 500,
        }
    }

    /// Whether the failure is the caller's fault (4xx) rather than ours.
    #[inline]
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status_code())
    }
}
