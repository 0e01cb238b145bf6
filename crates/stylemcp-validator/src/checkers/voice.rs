//! Voice checks: vocabulary preferences, forbidden terms, do-not patterns.

use stylemcp_core::{Severity, ValidationContext, Violation};
use stylemcp_pack::schema::voice::Voice;
use stylemcp_pack::Pack;

use crate::checker::RuleChecker;
use crate::matching::{find_pattern, find_term};

pub const PREFERRED_RULE: &str = "vocabulary.preferred";
pub const FORBIDDEN_RULE: &str = "vocabulary.forbidden";
pub const DO_NOT_RULE: &str = "doNot.pattern";

#[derive(Debug, Clone, Copy, Default)]
pub struct VoiceChecker;

impl RuleChecker for VoiceChecker {
    fn name(&self) -> &'static str {
        "voice"
    }

    fn check(&self, text: &str, pack: &Pack, _context: Option<&ValidationContext>) -> Vec<Violation> {
        check_voice(text, &pack.voice)
    }
}

pub fn check_voice(text: &str, voice: &Voice) -> Vec<Violation> {
    let mut violations = Vec::new();

    for rule in &voice.vocabulary.rules {
        for term in &rule.avoid {
            for span in find_term(text, term) {
                let found = &text[span.range()];
                let message = match &rule.reason {
                    Some(reason) => format!("Use \"{}\" instead of \"{found}\": {reason}", rule.preferred),
                    None => format!("Use \"{}\" instead of \"{found}\"", rule.preferred),
                };
                violations.push(
                    Violation::at(PREFERRED_RULE, Severity::Warning, message, text, span)
                        .with_suggestion(rule.preferred.clone()),
                );
            }
        }
    }

    for term in &voice.vocabulary.forbidden {
        for span in find_term(text, term) {
            let message = format!("\"{}\" is not allowed in this voice", &text[span.range()]);
            violations.push(Violation::at(
                FORBIDDEN_RULE,
                Severity::Error,
                message,
                text,
                span,
            ));
        }
    }

    for pattern in &voice.do_not {
        let spans = match find_pattern(text, &pattern.pattern, pattern.is_regex) {
            Ok(spans) => spans,
            Err(e) => {
                tracing::warn!(pattern = %pattern.pattern, error = %e, "skipping invalid doNot regex");
                continue;
            }
        };
        for span in spans {
            let mut violation = Violation::at(
                DO_NOT_RULE,
                Severity::Warning,
                pattern.reason.clone(),
                text,
                span,
            );
            if let Some(suggestion) = &pattern.suggestion {
                violation = violation.with_suggestion(suggestion.clone());
            }
            violations.push(violation);
        }
    }

    violations
}
