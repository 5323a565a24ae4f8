//! Testing utilities for the annotation workspace
//!
//! Shared fixtures: seeded stores, signed-in users with permission sets, and
//! a fake dashboard lookup. Everything is injected through constructors; no
//! global state to reset between tests.

#![allow(missing_docs)]

use anno_authz::{AccessControl, Action, Permission, SignedInUser};
use anno_model::{Annotation, AnnotationStore, MemoryAnnotationStore};
use anno_service::{annotation_scope_registry, AnnotationService, Dashboard, DashboardError, DashboardLookup};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;

/// A dashboard annotation as the Go-era fixtures used it: id 1, dashboard 1.
pub fn dashboard_annotation() -> Annotation {
    Annotation {
        id: 1,
        org_id: 1,
        dashboard_id: 1,
        panel_id: 1,
        text: "annotation text".to_string(),
        tags: vec!["tag1".to_string(), "tag2".to_string()],
        epoch: 1000,
        epoch_end: 1000,
        ..Default::default()
    }
}

/// An organization annotation: id 2, no dashboard.
pub fn organization_annotation() -> Annotation {
    Annotation {
        id: 2,
        org_id: 1,
        text: "annotation text".to_string(),
        tags: vec!["tag1".to_string(), "tag2".to_string()],
        epoch: 1000,
        epoch_end: 1000,
        ..Default::default()
    }
}

/// Store seeded with the given annotations.
pub async fn seeded_store(items: Vec<Annotation>) -> Arc<MemoryAnnotationStore> {
    let store = Arc::new(MemoryAnnotationStore::new());
    for mut item in items {
        store.save(&mut item).await.expect("seed annotation");
    }
    store
}

/// Signed-in user in org 1 with the given permissions.
pub fn user_with_permissions(permissions: Vec<Permission>) -> SignedInUser {
    SignedInUser::new(1, 1, permissions)
}

/// Single scoped permission, as most matrix tests grant.
pub fn scoped_permission(action: Action, scope: &str) -> Vec<Permission> {
    vec![Permission::scoped(action, scope)]
}

/// Install the test tracing subscriber. Safe to call from every test; only
/// the first call in the process installs anything.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Fake dashboard lookup over a fixed uid → dashboard map.
#[derive(Debug, Default)]
pub struct FakeDashboardLookup {
    dashboards: HashMap<String, Dashboard>,
}

impl FakeDashboardLookup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a dashboard under its uid.
    #[must_use]
    pub fn with_dashboard(mut self, uid: &str, id: i64) -> Self {
        self.dashboards.insert(
            uid.to_string(),
            Dashboard {
                id,
                uid: uid.to_string(),
            },
        );
        self
    }
}

#[async_trait]
impl DashboardLookup for FakeDashboardLookup {
    async fn get_by_uid(&self, _org_id: i64, uid: &str) -> Result<Dashboard, DashboardError> {
        self.dashboards
            .get(uid)
            .cloned()
            .ok_or_else(|| DashboardError::NotFound(uid.to_string()))
    }
}

/// Wire a service over a store and dashboard lookup, with the annotation
/// scope resolver registered the way production wiring does it.
pub fn service_over(
    store: Arc<dyn AnnotationStore>,
    dashboards: FakeDashboardLookup,
) -> AnnotationService {
    init_tracing();
    let registry = annotation_scope_registry(store.clone());
    let access = Arc::new(AccessControl::new(registry));
    AnnotationService::new(store, Arc::new(dashboards), access)
}

/// Service over a store seeded with the two standard fixtures and an empty
/// dashboard lookup.
pub async fn seeded_service() -> AnnotationService {
    let store = seeded_store(vec![dashboard_annotation(), organization_annotation()]).await;
    service_over(store, FakeDashboardLookup::new())
}
