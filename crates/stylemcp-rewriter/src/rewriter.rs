//! # Rewriter
//!
//! 1. Validate the input.
//! 2. Keep violations whose severity is in `fix_severity` and that carry
//!    a span.
//! 3. De-duplicate by exact span. A `vocabulary.preferred` violation
//!    replaces a `vocabulary.forbidden` one at the same span; otherwise
//!    the first one wins.
//! 4. Truncate to `max_changes` candidates.
//! 5. Turn each fixable candidate into an edit, skipping any whose span
//!    overlaps an edit already accepted.
//! 6. Apply the edits from the rightmost span leftwards.
//! 7. Re-validate the result for the "after" score.

use std::collections::HashMap;

use stylemcp_core::{
    Change, ChangeKind, RewriteResult, ScoreDelta, Severity, Span, ValidationContext, Violation,
};
use stylemcp_pack::Pack;
use stylemcp_validator::checkers::voice::{FORBIDDEN_RULE, PREFERRED_RULE};
use stylemcp_validator::Validator;

use crate::case::match_case;

pub const DEFAULT_FIX_SEVERITY: [Severity; 2] = [Severity::Error, Severity::Warning];
pub const DEFAULT_MAX_CHANGES: usize = 50;

/// Inputs of one rewrite call.
#[derive(Debug, Clone)]
pub struct RewriteOptions<'a> {
    pub pack: &'a Pack,
    pub text: &'a str,
    pub context: Option<&'a ValidationContext>,
    pub fix_severity: Vec<Severity>,
    pub max_changes: usize,
}

impl<'a> RewriteOptions<'a> {
    pub fn new(pack: &'a Pack, text: &'a str) -> Self {
        Self {
            pack,
            text,
            context: None,
            fix_severity: DEFAULT_FIX_SEVERITY.to_vec(),
            max_changes: DEFAULT_MAX_CHANGES,
        }
    }

    pub fn with_context(mut self, context: &'a ValidationContext) -> Self {
        self.context = Some(context);
        self
    }

    pub fn with_fix_severity(mut self, severities: impl IntoIterator<Item = Severity>) -> Self {
        self.fix_severity = severities.into_iter().collect();
        self
    }

    pub fn with_max_changes(mut self, max_changes: usize) -> Self {
        self.max_changes = max_changes;
        self
    }
}

struct Edit {
    span: Span,
    replacement: String,
    reason: String,
}

/// A rewriter bound to a validator registry.
#[derive(Debug, Default)]
pub struct Rewriter {
    validator: Validator,
}

impl Rewriter {
    pub fn new(validator: Validator) -> Self {
        Self { validator }
    }

    pub fn validator(&self) -> &Validator {
        &self.validator
    }

    pub fn rewrite(&self, options: &RewriteOptions<'_>) -> RewriteResult {
        let text = options.text;
        let before = self.validator.validate(options.pack, text, options.context);

        let candidates = candidates(&before.violations, &options.fix_severity, options.max_changes);
        let mut edits = accept_edits(text, &candidates);

        edits.sort_by(|a, b| b.span.start.cmp(&a.span.start));
        let mut rewritten = text.to_string();
        let mut changes = Vec::with_capacity(edits.len());
        for edit in edits {
            let original = text[edit.span.range()].to_string();
            rewritten.replace_range(edit.span.range(), &edit.replacement);
            changes.push(Change {
                kind: ChangeKind::classify(&original, &edit.replacement),
                original,
                replacement: edit.replacement,
                reason: edit.reason,
                position: edit.span,
            });
        }
        changes.reverse();

        let after = self.validator.validate(options.pack, &rewritten, options.context);
        tracing::debug!(
            pack = options.pack.name(),
            changes = changes.len(),
            before = before.score,
            after = after.score,
            "rewrote text"
        );

        RewriteResult {
            original: text.to_string(),
            rewritten,
            changes,
            score: ScoreDelta {
                before: before.score,
                after: after.score,
            },
        }
    }
}

/// Filter, de-duplicate by span, and truncate, preserving emission order.
fn candidates<'v>(
    violations: &'v [Violation],
    fix_severity: &[Severity],
    max_changes: usize,
) -> Vec<&'v Violation> {
    let mut kept: Vec<&Violation> = Vec::new();
    let mut by_span: HashMap<Span, usize> = HashMap::new();

    for violation in violations {
        if !fix_severity.contains(&violation.severity) {
            continue;
        }
        let Some(span) = violation.position else {
            continue;
        };
        match by_span.get(&span) {
            None => {
                by_span.insert(span, kept.len());
                kept.push(violation);
            }
            Some(&slot) => {
                if violation.rule == PREFERRED_RULE && kept[slot].rule == FORBIDDEN_RULE {
                    kept[slot] = violation;
                }
            }
        }
    }

    kept.truncate(max_changes);
    kept
}

/// Edits for the fixable candidates. The first candidate to claim a span
/// keeps it; later candidates overlapping an accepted edit are dropped.
fn accept_edits(text: &str, candidates: &[&Violation]) -> Vec<Edit> {
    let mut edits: Vec<Edit> = Vec::new();
    for violation in candidates {
        let Some(edit) = edit_for(text, violation) else {
            continue;
        };
        if edits.iter().any(|accepted| accepted.span.overlaps(&edit.span)) {
            tracing::debug!(rule = %violation.rule, span = %edit.span, "skipping overlapping fix");
            continue;
        }
        edits.push(edit);
    }
    edits
}

fn edit_for(text: &str, violation: &Violation) -> Option<Edit> {
    if violation.rule != PREFERRED_RULE {
        return None;
    }
    let span = violation.position?;
    let suggestion = violation.suggestion.as_deref()?;
    let original = text.get(span.range())?;
    Some(Edit {
        span,
        replacement: match_case(original, suggestion),
        reason: violation.message.clone(),
    })
}

/// Rewrite with the reference validator registry.
pub fn rewrite(options: &RewriteOptions<'_>) -> RewriteResult {
    Rewriter::default().rewrite(options)
}

/// Fix only `error`-severity violations.
pub fn rewrite_minimal(options: RewriteOptions<'_>) -> RewriteResult {
    rewrite(&options.with_fix_severity([Severity::Error]))
}

/// Fix violations of every severity.
pub fn rewrite_aggressive(options: RewriteOptions<'_>) -> RewriteResult {
    rewrite(&options.with_fix_severity(Severity::ALL))
}
