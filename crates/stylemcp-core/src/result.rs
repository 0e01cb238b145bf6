//! # Validation and Rewrite Results
//!
//! Values returned once per call. Nothing here is updated after it is
//! handed to the caller.

use serde::{Deserialize, Serialize};

use crate::temporal::Timestamp;
use crate::violation::{Severity, Span, Violation};

/// Violation counts by severity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    /// Count of `error` violations.
    pub errors: usize,
    /// Count of `warning` violations.
    pub warnings: usize,
    /// Count of `info` violations.
    pub info: usize,
}

impl Summary {
    /// Tally a list of violations.
    pub fn from_violations(violations: &[Violation]) -> Self {
        let mut summary = Self::default();
        for v in violations {
            match v.severity {
                Severity::Error => summary.errors += 1,
                Severity::Warning => summary.warnings += 1,
                Severity::Info => summary.info += 1,
            }
        }
        summary
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.errors + self.warnings + self.info
    }
}

/// Which pack produced a result, and when.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationMetadata {
    /// Manifest name of the pack.
    pub pack_name: String,
    /// Manifest version of the pack.
    pub pack_version: String,
    /// When validation ran.
    pub validated_at: Timestamp,
}

/// Outcome of validating one text against one pack.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    /// Pass/fail under the pack's policy.
    pub valid: bool,
    /// Integer in `[0, 100]`.
    pub score: u8,
    /// The text that was validated.
    pub input: String,
    /// In checker invocation order, then in each checker's emission order.
    pub violations: Vec<Violation>,
    /// Counts of `violations` by severity.
    pub summary: Summary,
    /// Pack identity and timestamp.
    pub metadata: ValidationMetadata,
}

impl ValidationResult {
    /// Whether any violation has `error` severity.
    pub fn has_errors(&self) -> bool {
        self.summary.errors > 0
    }

    /// Violations of one rule path, in order.
    pub fn violations_for<'a>(&'a self, rule: &'a str) -> impl Iterator<Item = &'a Violation> {
        self.violations.iter().filter(move |v| v.rule == rule)
    }
}

/// The shape of an applied edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    /// Non-empty text became other non-empty text.
    Replace,
    /// Text was added at an empty span.
    Insert,
    /// Text was removed.
    Delete,
}

impl ChangeKind {
    /// Classify an edit of `original` into `replacement`.
    pub fn classify(original: &str, replacement: &str) -> Self {
        if replacement.is_empty() {
            Self::Delete
        } else if original.is_empty() {
            Self::Insert
        } else {
            Self::Replace
        }
    }
}

/// One applied edit. `position` is the span in the original text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Change {
    #[serde(rename = "type")]
    /// Serialized as `type`.
    pub kind: ChangeKind,
    /// Text that was replaced.
    pub original: String,
    /// Text written in its place.
    pub replacement: String,
    /// Message of the violation this edit fixes.
    pub reason: String,
    /// Span of `original` in the original text.
    pub position: Span,
}

/// Scores of the text before and after a rewrite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreDelta {
    /// Score of the original text.
    pub before: u8,
    /// Score of the rewritten text.
    pub after: u8,
}

/// Outcome of one rewrite call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewriteResult {
    /// Input text.
    pub original: String,
    /// Text with every accepted edit applied.
    pub rewritten: String,
    /// Ascending by position.
    pub changes: Vec<Change>,
    /// Score movement.
    pub score: ScoreDelta,
}

impl RewriteResult {
    /// Whether no edit was applied.
    pub fn is_unchanged(&self) -> bool {
        self.changes.is_empty()
    }
}
