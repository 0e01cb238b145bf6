//! # Violations
//!
//! A [`Violation`] is one detected deviation from a pack's rules. The
//! `rule` field is a dotted rule path such as `vocabulary.preferred` or
//! `cta.antiPattern`.

use std::fmt;
use std::ops::Range;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// How serious a violation is.
///
/// Ordered from most to least severe so that sorting a list of
/// severities puts errors first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Blocks a pass outside strict mode too.
    Error,
    /// Should be fixed.
    Warning,
    /// Worth a look.
    Info,
}

impl Severity {
    /// All severities, most severe first.
    pub const ALL: [Severity; 3] = [Severity::Error, Severity::Warning, Severity::Info];

    /// Points subtracted from the 100-point score per violation.
    pub fn penalty(self) -> u32 {
        match self {
            Self::Error => 25,
            Self::Warning => 10,
            Self::Info => 3,
        }
    }

    /// The lowercase wire name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "error" => Ok(Self::Error),
            "warning" => Ok(Self::Warning),
            "info" => Ok(Self::Info),
            other => Err(CoreError::UnknownSeverity(other.to_string())),
        }
    }
}

/// A half-open byte range `[start, end)` into the validated text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Span {
    /// First byte, inclusive.
    pub start: usize,
    /// Last byte, exclusive.
    pub end: usize,
}

impl Span {
    /// Build a span, rejecting `start > end`.
    pub fn new(start: usize, end: usize) -> Result<Self, CoreError> {
        if start > end {
            return Err(CoreError::InvalidSpan { start, end });
        }
        Ok(Self { start, end })
    }

    /// Length in bytes.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether the span covers no bytes.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The span as a slice index.
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Whether two spans share at least one byte.
    ///
    /// Two empty spans at the same offset also count as overlapping, since
    /// two insertions at one point have no defined order.
    pub fn overlaps(&self, other: &Span) -> bool {
        if self.start == other.start {
            return true;
        }
        self.start < other.end && other.start < self.end
    }
}

impl From<Range<usize>> for Span {
    fn from(range: Range<usize>) -> Self {
        Self {
            start: range.start,
            end: range.end.max(range.start),
        }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// One detected deviation from a pack's rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Violation {
    /// Deterministic identifier, unique within one checker's output.
    pub id: String,
    /// Dotted rule path, e.g. `vocabulary.preferred`.
    pub rule: String,
    /// How serious the deviation is.
    pub severity: Severity,
    /// Human-readable explanation.
    pub message: String,
    /// Byte span in the validated text, when the violation has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Span>,
    /// The literal offending text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Replacement text, when the rule has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl Violation {
    /// A violation with no location. The id is `<rule>:<ordinal>`.
    pub fn new(
        rule: impl Into<String>,
        severity: Severity,
        message: impl Into<String>,
        ordinal: usize,
    ) -> Self {
        let rule = rule.into();
        Self {
            id: format!("{rule}:{ordinal}"),
            rule,
            severity,
            message: message.into(),
            position: None,
            text: None,
            suggestion: None,
        }
    }

    /// A violation tied to `span` of `source`. The id is
    /// `<rule>:<start>-<end>` and `text` is filled from the source.
    ///
    /// `span` must lie on `char` boundaries of `source`; an out-of-range
    /// span leaves `text` empty rather than panicking.
    pub fn at(
        rule: impl Into<String>,
        severity: Severity,
        message: impl Into<String>,
        source: &str,
        span: Span,
    ) -> Self {
        let rule = rule.into();
        Self {
            id: format!("{rule}:{span}"),
            rule,
            severity,
            message: message.into(),
            position: Some(span),
            text: source.get(span.range()).map(str::to_string),
            suggestion: None,
        }
    }

    /// Attach a suggested replacement.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

}
