// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error kinds shared across every `ctxres` crate.
//!
//! Every fallible operation in the toolkit returns a [`CtxError`]. Leaf
//! functions construct a variant directly; aggregating functions (batch
//! imports, `mapResults`-style folds) propagate the first failure rather
//! than retrying, since the toolkit is pure and deterministic.

use thiserror::Error;

/// The result alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, CtxError>;

/// All error kinds the toolkit can produce.
///
/// Variants embed the offending value verbatim so the message is useful
/// without needing to re-derive context from a log line.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CtxError {
    /// A BCP-47 tag or subtag violates the grammar.
    #[error("not well-formed: {0:?}")]
    NotWellFormed(String),

    /// A well-formed subtag is absent from the IANA registry.
    #[error("not registered: {0:?}")]
    NotRegistered(String),

    /// A valid tag violates a strictly-valid rule (prefix, duplicates).
    #[error("not strictly valid: {0:?}")]
    NotStrictlyValid(String),

    /// A condition value was rejected by its qualifier type.
    #[error("invalid condition value for qualifier {qualifier:?}: {value:?}")]
    InvalidConditionValue { qualifier: String, value: String },

    /// A context value was rejected by its qualifier type.
    #[error("invalid context value for qualifier {qualifier:?}: {value:?}")]
    InvalidContextValue { qualifier: String, value: String },

    /// Two conditions in one condition set named the same qualifier.
    #[error("duplicate qualifier {0:?} in condition set")]
    DuplicateQualifier(String),

    /// An insert attempted to register a differing entity under an
    /// existing content-addressed key.
    #[error("key collision on {0:?}")]
    KeyCollision(String),

    /// A collectible's index was set a second time with a different value.
    #[error("index already set for {0:?}")]
    IndexAlreadySet(String),

    /// A qualifier name was not present in the qualifier collection.
    #[error("unknown qualifier {0:?}")]
    UnknownQualifier(String),

    /// A collector lookup found nothing for the given key.
    #[error("not found: {0:?}")]
    NotFound(String),

    /// Informational: a resource file was skipped (e.g. non-JSON).
    #[error("skipped: {0:?}")]
    Skipped(String),

    /// A literal hierarchy's `parentOf` map contains a cycle.
    #[error("circular reference in literal hierarchy at {0:?}")]
    CircularReference(String),

    /// An internal invariant was violated; this should never surface to a
    /// well-behaved caller and indicates a bug in the toolkit itself.
    #[error("internal invariant violated: {0}")]
    Internal(String),

    /// A subtag or tag failed to parse, with the byte position of the
    /// first offending subtag.
    #[error("parse error at position {position}: {reason}")]
    ParseError { reason: String, position: usize },

    /// IO failure while loading registry data or walking a resource tree.
    /// The core's pure functions never return this; only the loaders
    /// that hand the core in-memory structures do.
    #[error("io error: {0}")]
    Io(String),

    /// Failure decoding registry or catalog JSON.
    #[error("json error: {0}")]
    Json(String),
}

impl From<std::io::Error> for CtxError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}

impl From<serde_json::Error> for CtxError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e.to_string())
    }
}
