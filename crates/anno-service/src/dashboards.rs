//! Dashboard lookup collaborator
//!
//! Commands can name a dashboard by uid instead of id; the service resolves
//! the uid to an id through this seam before anything else happens.

use async_trait::async_trait;

/// The slice of a dashboard the annotation service needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dashboard {
    /// Dashboard id.
    pub id: i64,
    /// Dashboard uid.
    pub uid: String,
}

/// Errors from dashboard lookups.
#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    /// No dashboard with the requested uid.
    #[error("dashboard with uid '{0}' not found")]
    NotFound(String),

    /// Underlying lookup failure.
    #[error("dashboard lookup error: {0}")]
    Internal(String),
}

/// Lookup seam for dashboards, injected into the service.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DashboardLookup: Send + Sync {
    /// Fetch a dashboard by uid within an organization.
    async fn get_by_uid(&self, org_id: i64, uid: &str) -> Result<Dashboard, DashboardError>;
}
