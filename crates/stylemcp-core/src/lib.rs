#![deny(missing_docs)]

//! # stylemcp-core — Foundational Types for StyleMCP
//!
//! Defines the value types that flow between the pack store, the
//! validator, and the rewriter. Every other crate in the workspace depends
//! on `stylemcp-core`; it depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Violations are plain values.** A [`Violation`] owns its strings and
//!    is produced fresh per validation call. Nothing here holds a reference
//!    into a pack or into the validated text.
//!
//! 2. **Spans are byte offsets.** A [`Span`] indexes the exact `&str` that
//!    was validated, always on `char` boundaries, so `&text[span.range()]`
//!    is the offending text.
//!
//! 3. **Results serialize as API bodies.** [`ValidationResult`] and
//!    [`RewriteResult`] use camelCase field names and can be returned to a
//!    hosting API without a translation layer.
//!
//! 4. **UTC-only timestamps.** [`Timestamp`] is UTC with a `Z` suffix,
//!    truncated to seconds.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `stylemcp-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod context;
pub mod error;
pub mod result;
pub mod temporal;
pub mod violation;

pub use context::{ContentType, ValidationContext};
pub use error::CoreError;
pub use result::{
    Change, ChangeKind, RewriteResult, ScoreDelta, Summary, ValidationMetadata, ValidationResult,
};
pub use temporal::Timestamp;
pub use violation::{Severity, Span, Violation};
