//! Authorized annotation operations
//!
//! Every operation follows the same shape: resolve what the request refers
//! to, work out the required scope, ask the access-control engine, then let
//! the store do the work. Validation of request shape happens before
//! authorization, so both failure classes stay independently observable.

use crate::dashboards::DashboardLookup;
use crate::error::ServiceError;
use crate::massdelete::MassDeleteRequest;
use crate::scope::ANNOTATION_ID_SCOPE_PREFIX;
use anno_authz::{
    AccessControl, Action, Scope, SignedInUser, SCOPE_ANNOTATIONS_TYPE_DASHBOARD,
    SCOPE_ANNOTATIONS_TYPE_ORGANIZATION,
};
use anno_model::{
    Annotation, AnnotationStore, GraphiteAnnotationCommand, PatchAnnotationCommand,
    PostAnnotationCommand, TagCount, UpdateAnnotationCommand,
};
use std::sync::Arc;

/// The annotation operation surface.
///
/// All collaborators are injected at construction; the service holds no
/// mutable state of its own and is safe to share across requests.
#[derive(Clone)]
pub struct AnnotationService {
    store: Arc<dyn AnnotationStore>,
    dashboards: Arc<dyn DashboardLookup>,
    access: Arc<AccessControl>,
}

impl AnnotationService {
    /// Create a service over the given collaborators.
    #[inline]
    #[must_use]
    pub fn new(
        store: Arc<dyn AnnotationStore>,
        dashboards: Arc<dyn DashboardLookup>,
        access: Arc<AccessControl>,
    ) -> Self {
        Self {
            store,
            dashboards,
            access,
        }
    }

    /// Create an annotation.
    ///
    /// A dashboard uid in the command is resolved to an id first. The
    /// required create scope follows from whether the annotation targets a
    /// dashboard or the organization.
    pub async fn create(
        &self,
        user: &SignedInUser,
        mut cmd: PostAnnotationCommand,
    ) -> Result<Annotation, ServiceError> {
        if cmd.text.is_empty() {
            return Err(ServiceError::BadRequest(
                "text field should not be empty".to_string(),
            ));
        }

        if cmd.dashboard_id == 0 {
            if let Some(uid) = cmd.dashboard_uid.as_deref() {
                let dashboard = self.dashboards.get_by_uid(user.org_id, uid).await?;
                cmd.dashboard_id = dashboard.id;
            }
        }

        let required = if cmd.dashboard_id != 0 {
            Scope::new(SCOPE_ANNOTATIONS_TYPE_DASHBOARD)
        } else {
            Scope::new(SCOPE_ANNOTATIONS_TYPE_ORGANIZATION)
        };
        self.authorize(user, Action::AnnotationsCreate, Some(&required))
            .await?;

        let mut item = Annotation {
            org_id: user.org_id,
            user_id: user.user_id,
            dashboard_id: cmd.dashboard_id,
            panel_id: cmd.panel_id,
            text: cmd.text,
            tags: cmd.tags,
            epoch: cmd.time,
            epoch_end: if cmd.time_end != 0 { cmd.time_end } else { cmd.time },
            ..Default::default()
        };
        self.store.save(&mut item).await?;
        tracing::info!(id = item.id, dashboard_id = item.dashboard_id, "annotation created");
        Ok(item)
    }

    /// Create an organization annotation from a graphite-style event.
    pub async fn create_graphite(
        &self,
        user: &SignedInUser,
        cmd: GraphiteAnnotationCommand,
    ) -> Result<Annotation, ServiceError> {
        if cmd.what.is_empty() {
            return Err(ServiceError::BadRequest(
                "what field should not be empty".to_string(),
            ));
        }

        let required = Scope::new(SCOPE_ANNOTATIONS_TYPE_ORGANIZATION);
        self.authorize(user, Action::AnnotationsCreate, Some(&required))
            .await?;

        let text = if cmd.data.is_empty() {
            cmd.what
        } else {
            format!("{}\n{}", cmd.what, cmd.data)
        };
        let mut item = Annotation {
            org_id: user.org_id,
            user_id: user.user_id,
            text,
            tags: cmd.tags,
            epoch: cmd.when * 1000,
            ..Default::default()
        };
        self.store.save(&mut item).await?;
        tracing::info!(id = item.id, "graphite annotation created");
        Ok(item)
    }

    /// Replace an annotation's mutable fields.
    ///
    /// The write scope is resolved per annotation: dashboard-type for
    /// dashboard annotations, organization-type otherwise.
    pub async fn update(
        &self,
        user: &SignedInUser,
        id: i64,
        cmd: UpdateAnnotationCommand,
    ) -> Result<(), ServiceError> {
        self.authorize(user, Action::AnnotationsWrite, Some(&Self::id_scope(id)))
            .await?;

        let existing = self.store.get_by_id(user.org_id, id).await?;
        let updated = Annotation {
            text: cmd.text,
            tags: cmd.tags,
            epoch: cmd.time,
            epoch_end: if cmd.time_end != 0 { cmd.time_end } else { cmd.time },
            ..existing
        };
        self.store.update(&updated).await?;
        tracing::info!(id, "annotation updated");
        Ok(())
    }

    /// Partially update an annotation: only fields carried by the patch
    /// change. Authorization is identical to [`Self::update`].
    pub async fn patch(
        &self,
        user: &SignedInUser,
        id: i64,
        cmd: PatchAnnotationCommand,
    ) -> Result<(), ServiceError> {
        self.authorize(user, Action::AnnotationsWrite, Some(&Self::id_scope(id)))
            .await?;

        let mut existing = self.store.get_by_id(user.org_id, id).await?;
        if let Some(time) = cmd.time {
            existing.epoch = time;
        }
        if let Some(time_end) = cmd.time_end {
            existing.epoch_end = time_end;
        }
        if let Some(text) = cmd.text {
            existing.text = text;
        }
        if let Some(tags) = cmd.tags {
            existing.tags = tags;
        }
        self.store.update(&existing).await?;
        tracing::info!(id, "annotation patched");
        Ok(())
    }

    /// Delete a single annotation, delete scope resolved per annotation.
    pub async fn delete_by_id(&self, user: &SignedInUser, id: i64) -> Result<(), ServiceError> {
        self.authorize(user, Action::AnnotationsDelete, Some(&Self::id_scope(id)))
            .await?;
        self.store.delete_by_id(user.org_id, id).await?;
        tracing::info!(id, "annotation deleted");
        Ok(())
    }

    /// Bulk delete annotations.
    ///
    /// A dashboard uid is resolved first, then the identifier combination is
    /// validated, then authorization runs. The ordering matters: a malformed
    /// request answers 400 even when the caller also lacks the permission.
    pub async fn mass_delete(
        &self,
        user: &SignedInUser,
        mut req: MassDeleteRequest,
    ) -> Result<u64, ServiceError> {
        if req.dashboard_id == 0 {
            if let Some(uid) = req.dashboard_uid.as_deref() {
                let dashboard = self.dashboards.get_by_uid(user.org_id, uid).await?;
                req.dashboard_id = dashboard.id;
            }
        }

        req.validate()?;

        self.authorize(user, Action::AnnotationsDelete, Some(&req.required_scope()))
            .await?;

        let deleted = self.store.mass_delete(user.org_id, req.filter()).await?;
        tracing::info!(
            deleted,
            annotation_id = req.annotation_id,
            dashboard_id = req.dashboard_id,
            "mass delete completed"
        );
        Ok(deleted)
    }

    /// List tags in use within the caller's organization.
    ///
    /// Requires the bare read action; no scope resolution involved.
    pub async fn list_tags(&self, user: &SignedInUser) -> Result<Vec<TagCount>, ServiceError> {
        self.authorize(user, Action::AnnotationsRead, None).await?;
        Ok(self.store.tags(user.org_id).await?)
    }

    fn id_scope(id: i64) -> Scope {
        Scope::new(format!("{ANNOTATION_ID_SCOPE_PREFIX}{id}"))
    }

    async fn authorize(
        &self,
        user: &SignedInUser,
        action: Action,
        scope: Option<&Scope>,
    ) -> Result<(), ServiceError> {
        if self.access.has_access(user, action, scope).await? {
            Ok(())
        } else {
            tracing::warn!(user_id = user.user_id, %action, "access denied");
            Err(ServiceError::Forbidden)
        }
    }
}
