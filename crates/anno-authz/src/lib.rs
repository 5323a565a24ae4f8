//! Access-control engine
//!
//! Evaluates whether a caller's granted permissions satisfy a required
//! `(action, scope)` pair. Instance-level scope references (for example
//! `annotations:id:42`) are expanded into concrete type-level scopes through
//! a per-prefix resolver registry before matching.
//!
//! # Core Concepts
//!
//! - [`Permission`]: a granted `(action, scope)` pair
//! - [`Scope`]: a scope string with granted-side wildcard matching
//! - [`ScopeResolver`]: expands an instance-level reference into concrete scopes
//! - [`ResolverRegistry`]: resolvers keyed by scope prefix, built at startup
//! - [`AccessControl`]: the evaluation entry point
//!
//! # Example
//!
//! ```rust,ignore
//! use anno_authz::{AccessControl, Action, ResolverRegistry, Scope};
//!
//! let mut registry = ResolverRegistry::new();
//! registry.register("annotations:id:", resolver);
//!
//! let access = AccessControl::new(registry);
//! let allowed = access
//!     .has_access(&user, Action::AnnotationsDelete, Some(&Scope::new("annotations:id:42")))
//!     .await?;
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod engine;
mod error;
mod permission;
mod resolver;

pub use engine::AccessControl;
pub use error::AuthzError;
pub use permission::{
    Action, Permission, Scope, SignedInUser, SCOPE_ANNOTATIONS_ALL,
    SCOPE_ANNOTATIONS_TYPE_DASHBOARD, SCOPE_ANNOTATIONS_TYPE_ORGANIZATION,
};
pub use resolver::{ResolverRegistry, ScopeResolver};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
