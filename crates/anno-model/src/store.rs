//! Annotation store seam
//!
//! The resolver and the service only ever see this trait; the backing store
//! (relational in production, in-memory here and in tests) is injected at
//! construction time.

use crate::item::{Annotation, TagCount};
use async_trait::async_trait;

/// Errors surfaced by annotation stores.
///
/// `NotFound` is kept distinct from everything else so callers can tell
/// "this id doesn't exist" apart from infrastructure failures, which matters
/// for status mapping.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// No annotation exists with the requested id.
    #[error("annotation with id {0} not found")]
    NotFound(i64),

    /// Underlying storage failure.
    #[error("annotation store error: {0}")]
    Internal(String),
}

/// Identifier combination for a bulk delete, as the store understands it.
///
/// Shape validation (dashboard and panel paired, and so on) happens before a
/// filter ever reaches the store; the store just applies it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MassDeleteFilter {
    /// Delete this single annotation, when non-zero.
    pub annotation_id: i64,
    /// Delete annotations on this dashboard, when non-zero.
    pub dashboard_id: i64,
    /// Restrict the dashboard delete to this panel.
    pub panel_id: i64,
}

impl MassDeleteFilter {
    /// Whether the filter selects every annotation in the organization.
    #[inline]
    #[must_use]
    pub fn is_org_wide(&self) -> bool {
        self.annotation_id == 0 && self.dashboard_id == 0
    }
}

/// Persistence seam for annotations.
///
/// Lookups may block on I/O; callers treat every method as a plain awaited
/// call with no retry at this layer.
#[async_trait]
pub trait AnnotationStore: Send + Sync {
    /// Persist a new annotation, assigning `item.id` when it is 0.
    async fn save(&self, item: &mut Annotation) -> Result<(), StoreError>;

    /// Fetch an annotation by id within an organization.
    async fn get_by_id(&self, org_id: i64, id: i64) -> Result<Annotation, StoreError>;

    /// Replace a stored annotation. Fails with `NotFound` if absent.
    async fn update(&self, item: &Annotation) -> Result<(), StoreError>;

    /// Delete a single annotation by id.
    async fn delete_by_id(&self, org_id: i64, id: i64) -> Result<(), StoreError>;

    /// Delete every annotation matched by the filter, returning the count.
    async fn mass_delete(&self, org_id: i64, filter: MassDeleteFilter)
        -> Result<u64, StoreError>;

    /// Tags in use within the organization, with usage counts.
    async fn tags(&self, org_id: i64) -> Result<Vec<TagCount>, StoreError>;
}
