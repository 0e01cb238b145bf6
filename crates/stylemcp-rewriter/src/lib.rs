//! # stylemcp-rewriter — Automatic Fixes
//!
//! Validates a text, turns the fixable violations into span edits, and
//! applies them without disturbing one another.
//!
//! Only `vocabulary.preferred` violations are fixed: their suggestion is
//! a known safe substitute. Forbidden terms, do-not patterns and CTA
//! findings need a human and are left in place.
//!
//! ## Offset safety
//!
//! Every candidate span refers to the original text. Accepted edits never
//! overlap, and they are applied from the rightmost span leftwards, so no
//! edit moves the bytes of an edit still to come.

pub mod case;
pub mod present;
pub mod rewriter;

pub use case::match_case;
pub use present::{format_changes, generate_diff};
pub use rewriter::{
    rewrite, rewrite_aggressive, rewrite_minimal, RewriteOptions, Rewriter, DEFAULT_FIX_SEVERITY,
    DEFAULT_MAX_CHANGES,
};
