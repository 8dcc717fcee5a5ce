//! # Error Types
//!
//! Recoverable failures of the identifier codec, tenant resolution and
//! tenancy configuration.

use crate::validation::IdSyntaxError;
use thiserror::Error;

/// Coarse classification of a [`CodecError`], for user-facing rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// An argument failed validation.
    InvalidArgument,
    /// The unique ID has no tenant part.
    MissingTenant,
    /// The unique ID is structurally malformed.
    Format,
}

/// Why an argument was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidReason {
    /// A segment failed the identifier syntax rule.
    #[error("{field}: {source}")]
    Syntax {
        field: &'static str,
        #[source]
        source: IdSyntaxError,
    },

    /// The local part is empty.
    #[error("empty identifier")]
    Empty,

    /// The local part starts with the device separator.
    #[error("identifier starts with `.`")]
    StartsWithDot,

    /// The local part ends with the device separator.
    #[error("identifier ends with `.`")]
    EndsWithDot,
}

/// Errors from encoding or decoding unique IDs.
///
/// Every variant carries the offending input string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// An identifier or segment is invalid.
    #[error("Invalid argument `{uid}`: {reason}")]
    InvalidArgument {
        uid: String,
        #[source]
        reason: InvalidReason,
    },

    /// No tenant was supplied or present.
    #[error("Missing tenant in `{uid}`")]
    MissingTenant { uid: String },

    /// The unique ID does not have the expected shape.
    #[error("Invalid format `{uid}`")]
    Format { uid: String },
}

impl CodecError {
    /// The coarse kind of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidArgument { .. } => ErrorKind::InvalidArgument,
            Self::MissingTenant { .. } => ErrorKind::MissingTenant,
            Self::Format { .. } => ErrorKind::Format,
        }
    }

    /// The input string that caused the error.
    #[must_use]
    pub fn input(&self) -> &str {
        match self {
            Self::InvalidArgument { uid, .. }
            | Self::MissingTenant { uid }
            | Self::Format { uid } => uid,
        }
    }

    pub(crate) fn invalid(uid: impl Into<String>, reason: InvalidReason) -> Self {
        Self::InvalidArgument {
            uid: uid.into(),
            reason,
        }
    }

    pub(crate) fn syntax(uid: impl Into<String>, field: &'static str, source: IdSyntaxError) -> Self {
        Self::invalid(uid, InvalidReason::Syntax { field, source })
    }
}

/// Errors from resolving the tenant of an inbound request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TenantError {
    /// No tenant could be determined and empty tenants are not allowed.
    #[error("Missing tenant for `{value}`")]
    MissingTenant { value: String },
}

/// Configuration validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The configured default tenant ID fails the syntax rule.
    #[error("Invalid default tenant `{tenant_id}`: {source}")]
    InvalidDefaultTenant {
        tenant_id: String,
        #[source]
        source: IdSyntaxError,
    },

    /// A base domain entry is empty after trimming.
    #[error("Empty base domain at index {index}")]
    EmptyBaseDomain { index: usize },
}
