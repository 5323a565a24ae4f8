//! Permissions, actions, and scope matching
//!
//! The action/scope taxonomy is fixed: `{read, write, create, delete}` over
//! `{dashboard-type, organization-type, all}`. Wildcards are honored on the
//! granted side only; a *required* scope is always concrete (or an
//! instance-level reference that the registry expands into a concrete one).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Scope covering every annotation in the organization, dashboard or not.
pub const SCOPE_ANNOTATIONS_ALL: &str = "annotations:*";
/// Scope covering annotations tied to a dashboard.
pub const SCOPE_ANNOTATIONS_TYPE_DASHBOARD: &str = "annotations:type:dashboard";
/// Scope covering organization-level annotations.
pub const SCOPE_ANNOTATIONS_TYPE_ORGANIZATION: &str = "annotations:type:organization";

/// Actions a permission can grant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Read annotations and their tags.
    AnnotationsRead,
    /// Update existing annotations.
    AnnotationsWrite,
    /// Create new annotations.
    AnnotationsCreate,
    /// Delete annotations.
    AnnotationsDelete,
}

impl Action {
    /// Wire representation of the action.
    #[inline]
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Action::AnnotationsRead => "annotations:read",
            Action::AnnotationsWrite => "annotations:write",
            Action::AnnotationsCreate => "annotations:create",
            Action::AnnotationsDelete => "annotations:delete",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A scope string, e.g. `annotations:type:dashboard` or `annotations:id:42`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Scope(String);

impl Scope {
    /// Create a scope from its string form.
    #[inline]
    pub fn new(scope: impl Into<String>) -> Self {
        Self(scope.into())
    }

    /// String form of the scope.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this *granted* scope covers the required scope.
    ///
    /// Exact match, the global wildcard `*`, or a trailing-wildcard prefix
    /// match (`annotations:*` covers `annotations:type:dashboard`).
    #[must_use]
    pub fn covers(&self, required: &Scope) -> bool {
        if self.0 == required.0 {
            return true;
        }
        match self.0.strip_suffix('*') {
            Some(prefix) => required.0.starts_with(prefix),
            None => false,
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Scope {
    fn from(scope: &str) -> Self {
        Self(scope.to_string())
    }
}

/// A granted `(action, scope)` pair.
///
/// The scope is optional: bare-action permissions (for example tag listing)
/// carry no scope at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Permission {
    /// Granted action.
    pub action: Action,
    /// Granted scope, if the action is scoped.
    #[serde(default)]
    pub scope: Option<Scope>,
}

impl Permission {
    /// Permission for a bare action with no scope.
    #[inline]
    #[must_use]
    pub fn new(action: Action) -> Self {
        Self {
            action,
            scope: None,
        }
    }

    /// Permission for an action over a scope.
    #[inline]
    #[must_use]
    pub fn scoped(action: Action, scope: impl Into<Scope>) -> Self {
        Self {
            action,
            scope: Some(scope.into()),
        }
    }
}

/// The authenticated caller, with the permissions granted in their current
/// organization. Built per request and passed explicitly; there is no global
/// caller state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignedInUser {
    /// Caller's user id.
    pub user_id: i64,
    /// Organization the caller is acting in.
    pub org_id: i64,
    /// Permissions granted in that organization.
    pub permissions: Vec<Permission>,
}

impl SignedInUser {
    /// Create a signed-in user with the given permissions.
    #[inline]
    #[must_use]
    pub fn new(user_id: i64, org_id: i64, permissions: Vec<Permission>) -> Self {
        Self {
            user_id,
            org_id,
            permissions,
        }
    }

    /// Permissions granted for the given action.
    pub fn permissions_for(&self, action: Action) -> impl Iterator<Item = &Permission> {
        self.permissions.iter().filter(move |p| p.action == action)
    }
}
