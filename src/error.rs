//! Error type shared by every transform.
//!
//! All errors are fatal to the invocation that raised them: callers never
//! get partial output for the failing tag, registry or file.

use std::path::PathBuf;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, DataGenError>;

/// Errors raised while loading reports or transforming them.
#[derive(Debug, thiserror::Error)]
pub enum DataGenError {
    /// A required input file or directory does not exist.
    #[error("input not found: {path}")]
    MissingInput { path: PathBuf },

    /// A report could not be decoded.
    #[error("parse error in {path}: {detail}")]
    Parse { path: PathBuf, detail: String },

    /// A tag references a tag that was never loaded.
    #[error("tag '{tag}' references unknown tag '#{reference}'")]
    UnknownTagReference { tag: String, reference: String },

    /// Expansion came back to a tag that is still being expanded.
    #[error("cyclic tag reference: {}", chain.join(" -> "))]
    CyclicReference { chain: Vec<String> },

    /// A reference chain is deeper than the configured limit.
    #[error("tag '{tag}' exceeds the maximum reference depth of {limit}")]
    MaxDepthExceeded { tag: String, limit: usize },

    /// Two registry entries claim the same position.
    #[error("entries '{first}' and '{second}' share position {position}")]
    DuplicatePosition {
        position: usize,
        first: String,
        second: String,
    },

    /// A registry entry's position falls outside `[0, len)`.
    #[error("entry '{name}' has position {position}, expected 0..{len}")]
    PositionOutOfRange {
        name: String,
        position: i64,
        len: usize,
    },

    /// No entry claimed a position after ordering.
    #[error("no entry has position {position}")]
    MissingPosition { position: usize },

    /// An identifier lacks the expected namespace prefix.
    #[error("identifier '{identifier}' does not start with '{expected_prefix}'")]
    MalformedIdentifier {
        identifier: String,
        expected_prefix: String,
    },

    /// The requested registry is not present in the report.
    #[error("registry '{name}' not found")]
    UnknownRegistry { name: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
