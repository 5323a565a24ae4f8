//! Annotation data model
//!
//! Defines the annotation record, the write commands that produce it, and the
//! [`AnnotationStore`] seam the rest of the workspace consumes. An in-memory
//! store backed by a concurrent map is included for embedding and for tests;
//! production deployments plug a relational store into the same trait.
//!
//! # Core Concepts
//!
//! - [`Annotation`]: a point or range event, either dashboard-scoped
//!   (`dashboard_id != 0`) or organization-scoped (`dashboard_id == 0`)
//! - [`AnnotationStore`]: async persistence seam (lookup, save, mass delete)
//! - [`MemoryAnnotationStore`]: DashMap-backed implementation

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod item;
mod memory;
mod store;

pub use item::{
    Annotation, GraphiteAnnotationCommand, PatchAnnotationCommand, PostAnnotationCommand,
    TagCount, UpdateAnnotationCommand,
};
pub use memory::MemoryAnnotationStore;
pub use store::{AnnotationStore, MassDeleteFilter, StoreError};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
