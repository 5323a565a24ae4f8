//! Annotation service
//!
//! The operation surface for the annotations subsystem: create, update,
//! patch, delete, mass-delete, and tag listing, each authorized through the
//! access-control engine. Annotation-specific access-control pieces live here
//! too: the `annotations:id:` scope resolver and the mass-delete request
//! validation.
//!
//! HTTP routing is a collaborator's concern; [`ServiceError::status_code`]
//! gives that collaborator the status mapping for every failure class.
//!
//! # Example
//!
//! ```rust,ignore
//! use anno_service::{AnnotationService, annotation_scope_registry};
//! use anno_authz::AccessControl;
//!
//! let registry = annotation_scope_registry(store.clone());
//! let access = Arc::new(AccessControl::new(registry));
//! let service = AnnotationService::new(store, dashboards, access);
//!
//! service.mass_delete(&user, request).await?;
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod dashboards;
mod error;
mod massdelete;
mod scope;
mod service;

pub use dashboards::{Dashboard, DashboardError, DashboardLookup};
pub use error::ServiceError;
pub use massdelete::MassDeleteRequest;
pub use scope::{
    annotation_scope_registry, parse_annotation_id, AnnotationTypeScopeResolver,
    ANNOTATION_ID_SCOPE_PREFIX,
};
pub use service::AnnotationService;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
