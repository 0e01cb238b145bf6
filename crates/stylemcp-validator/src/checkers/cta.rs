//! CTA checks: anti-patterns, call-to-action guidelines, contextual rules.
//!
//! Anti-patterns apply to every text. The guideline checks (`maxWords`,
//! `avoidWords`) apply only when the context marks the text as a call to
//! action, meaning its component name contains `button`, `cta` or `link`.
//! Contextual rules apply when their `context` equals the component or the
//! content type.

use stylemcp_core::{Severity, ValidationContext, Violation};
use stylemcp_pack::schema::cta_rules::CtaRules;
use stylemcp_pack::Pack;

use crate::checker::RuleChecker;
use crate::matching::{find_pattern, find_term, word_count};

pub const ANTI_PATTERN_RULE: &str = "cta.antiPattern";
pub const MAX_WORDS_RULE: &str = "cta.maxWords";
pub const AVOID_WORD_RULE: &str = "cta.avoidWord";
pub const MISSING_REQUIRED_RULE: &str = "cta.missingRequired";
pub const FORBIDDEN_RULE: &str = "cta.forbidden";

const CTA_COMPONENT_MARKERS: [&str; 3] = ["button", "cta", "link"];

#[derive(Debug, Clone, Copy, Default)]
pub struct CtaChecker;

impl RuleChecker for CtaChecker {
    fn name(&self) -> &'static str {
        "cta"
    }

    fn check(&self, text: &str, pack: &Pack, context: Option<&ValidationContext>) -> Vec<Violation> {
        check_cta(text, &pack.cta_rules, context)
    }
}

/// Whether the context's component marks the text as a call to action.
pub fn is_cta_context(context: &ValidationContext) -> bool {
    context.component.as_deref().is_some_and(|component| {
        let component = component.to_lowercase();
        CTA_COMPONENT_MARKERS
            .iter()
            .any(|marker| component.contains(marker))
    })
}

pub fn check_cta(text: &str, rules: &CtaRules, context: Option<&ValidationContext>) -> Vec<Violation> {
    let mut violations = Vec::new();
    let mut ordinal = 0;

    for anti in &rules.anti_patterns {
        let spans = match find_pattern(text, &anti.pattern, anti.is_regex) {
            Ok(spans) => spans,
            Err(e) => {
                tracing::warn!(pattern = %anti.pattern, error = %e, "skipping invalid CTA anti-pattern regex");
                continue;
            }
        };
        for span in spans {
            let mut violation = Violation::at(
                ANTI_PATTERN_RULE,
                Severity::Warning,
                anti.reason.clone(),
                text,
                span,
            );
            if let Some(suggestion) = &anti.suggestion {
                violation = violation.with_suggestion(suggestion.clone());
            }
            violations.push(violation);
        }
    }

    let Some(context) = context else {
        return violations;
    };

    if is_cta_context(context) {
        let guidelines = &rules.guidelines;
        let words = word_count(text);
        if words > guidelines.max_words {
            violations.push(Violation::new(
                MAX_WORDS_RULE,
                Severity::Warning,
                format!(
                    "CTA has {words} words; keep it to {} or fewer",
                    guidelines.max_words
                ),
                ordinal,
            ));
            ordinal += 1;
        }
        for word in &guidelines.avoid_words {
            for span in find_term(text, word) {
                let message = format!("Avoid \"{}\" in calls to action", &text[span.range()]);
                violations.push(Violation::at(
                    AVOID_WORD_RULE,
                    Severity::Warning,
                    message,
                    text,
                    span,
                ));
            }
        }
    }

    for rule in rules.contextual_rules.iter().filter(|r| context.matches(&r.context)) {
        for required in &rule.required {
            if find_term(text, required).is_empty() {
                violations.push(Violation::new(
                    MISSING_REQUIRED_RULE,
                    Severity::Error,
                    format!("Text for {} must include \"{required}\"", rule.context),
                    ordinal,
                ));
                ordinal += 1;
            }
        }
        for forbidden in &rule.forbidden {
            for span in find_term(text, forbidden) {
                let message = format!(
                    "\"{}\" is not allowed for {}",
                    &text[span.range()],
                    rule.context
                );
                violations.push(Violation::at(FORBIDDEN_RULE, Severity::Error, message, text, span));
            }
        }
    }

    violations
}
