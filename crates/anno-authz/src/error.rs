//! Error types for the access-control engine
//!
//! A malformed scope reference and a reference to an entity that does not
//! exist are deliberately distinct variants: callers map them to different
//! responses and must never conflate the two.

/// Errors raised while resolving scopes or evaluating access.
#[derive(Debug, thiserror::Error)]
pub enum AuthzError {
    /// The scope reference is malformed (wrong prefix, non-numeric or
    /// non-positive suffix).
    #[error("invalid scope: '{0}'")]
    InvalidScope(String),

    /// The scope reference is well-formed but the referenced entity is absent.
    #[error("scope target not found: {0}")]
    NotFound(String),

    /// Resolution infrastructure failure (store I/O and the like).
    #[error("scope resolution failed: {0}")]
    Internal(String),
}

impl AuthzError {
    /// Convenience constructor carrying the offending scope string.
    #[inline]
    pub fn invalid_scope(scope: impl Into<String>) -> Self {
        Self::InvalidScope(scope.into())
    }
}
