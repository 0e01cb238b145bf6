//! Error types for the foundational value types.

use thiserror::Error;

/// Errors raised while constructing core value types.
#[derive(Error, Debug)]
pub enum CoreError {
    /// A timestamp string was not a UTC RFC 3339 instant.
    #[error("invalid timestamp {input:?}: {reason}")]
    InvalidTimestamp {
        /// The rejected string.
        input: String,
        /// What was wrong with it.
        reason: String,
    },

    /// A severity name was not one of `error`, `warning`, `info`.
    #[error("unknown severity {0:?} (expected error, warning, or info)")]
    UnknownSeverity(String),

    /// A span whose end precedes its start.
    #[error("invalid span: start {start} is after end {end}")]
    InvalidSpan {
        /// Requested start offset.
        start: usize,
        /// Requested end offset.
        end: usize,
    },
}
