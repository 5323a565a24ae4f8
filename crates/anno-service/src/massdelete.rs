//! Mass-delete request validation and scope derivation
//!
//! A bulk delete names its targets one of three ways: a dashboard+panel pair,
//! a single annotation id, or nothing at all ("every annotation in the
//! organization"). Shape validation runs before authorization, so a malformed
//! request is rejected as a bad request even when the caller also lacks the
//! delete permission.

use crate::error::ServiceError;
use crate::scope::ANNOTATION_ID_SCOPE_PREFIX;
use anno_authz::{Scope, SCOPE_ANNOTATIONS_TYPE_DASHBOARD, SCOPE_ANNOTATIONS_TYPE_ORGANIZATION};
use anno_model::MassDeleteFilter;
use serde::{Deserialize, Serialize};

/// Bulk deletion request.
///
/// Zero-valued identifiers mean "not supplied", matching the wire format.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MassDeleteRequest {
    /// Delete this single annotation.
    #[serde(default)]
    pub annotation_id: i64,
    /// Delete annotations on this dashboard (requires `panel_id` too).
    #[serde(default)]
    pub dashboard_id: i64,
    /// Dashboard named by uid instead of id; resolved before validation.
    #[serde(default)]
    pub dashboard_uid: Option<String>,
    /// Panel on the dashboard (requires `dashboard_id` too).
    #[serde(default)]
    pub panel_id: i64,
}

impl MassDeleteRequest {
    /// Validate the identifier combination.
    ///
    /// Dashboard and panel must be supplied together; an annotation id alone
    /// is valid; all-zero is valid and means "delete every organization
    /// annotation".
    ///
    /// # Errors
    /// [`ServiceError::BadRequest`] when exactly one of dashboard/panel is
    /// supplied.
    pub fn validate(&self) -> Result<(), ServiceError> {
        if (self.dashboard_id != 0 && self.panel_id == 0)
            || (self.dashboard_id == 0 && self.panel_id != 0)
        {
            return Err(ServiceError::BadRequest(
                "both dashboardId and panelId are required for dashboard-scoped deletes"
                    .to_string(),
            ));
        }
        Ok(())
    }

    /// The scope authorization must check for this request.
    ///
    /// An annotation id yields an instance reference for the resolver to
    /// expand; a dashboard id yields the dashboard type scope; nothing yields
    /// the organization type scope.
    #[must_use]
    pub fn required_scope(&self) -> Scope {
        if self.annotation_id != 0 {
            Scope::new(format!(
                "{ANNOTATION_ID_SCOPE_PREFIX}{}",
                self.annotation_id
            ))
        } else if self.dashboard_id != 0 {
            Scope::new(SCOPE_ANNOTATIONS_TYPE_DASHBOARD)
        } else {
            Scope::new(SCOPE_ANNOTATIONS_TYPE_ORGANIZATION)
        }
    }

    /// The store-level filter for this request.
    #[must_use]
    pub fn filter(&self) -> MassDeleteFilter {
        MassDeleteFilter {
            annotation_id: self.annotation_id,
            dashboard_id: self.dashboard_id,
            panel_id: self.panel_id,
        }
    }
}
