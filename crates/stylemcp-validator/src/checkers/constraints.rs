//! Length and format limits from `voice.constraints`.

use stylemcp_core::{Severity, Span, ValidationContext, Violation};
use stylemcp_pack::schema::voice::Constraints;
use stylemcp_pack::Pack;

use crate::checker::RuleChecker;
use crate::matching::{is_emoji, paragraphs, sentences, word_count};

pub const MAX_LENGTH_RULE: &str = "constraints.maxLength";
pub const MIN_LENGTH_RULE: &str = "constraints.minLength";
pub const SENTENCE_LENGTH_RULE: &str = "constraints.sentenceLength";
pub const PARAGRAPH_LENGTH_RULE: &str = "constraints.paragraphLength";
pub const EMOJI_RULE: &str = "constraints.emoji";
pub const EXCLAMATION_RULE: &str = "constraints.exclamation";

#[derive(Debug, Clone, Copy, Default)]
pub struct ConstraintsChecker;

impl RuleChecker for ConstraintsChecker {
    fn name(&self) -> &'static str {
        "constraints"
    }

    fn check(&self, text: &str, pack: &Pack, _context: Option<&ValidationContext>) -> Vec<Violation> {
        check_constraints(text, &pack.voice.constraints)
    }
}

/// Lengths are counted in characters, sentence limits in words, and
/// paragraph limits in sentences.
pub fn check_constraints(text: &str, constraints: &Constraints) -> Vec<Violation> {
    let mut violations = Vec::new();
    let mut ordinal = 0;
    let chars = text.chars().count();

    if let Some(max) = constraints.max_length {
        if chars > max {
            violations.push(Violation::new(
                MAX_LENGTH_RULE,
                Severity::Error,
                format!("Text is {chars} characters; the maximum is {max}"),
                ordinal,
            ));
            ordinal += 1;
        }
    }
    if let Some(min) = constraints.min_length {
        if chars < min {
            violations.push(Violation::new(
                MIN_LENGTH_RULE,
                Severity::Warning,
                format!("Text is {chars} characters; the minimum is {min}"),
                ordinal,
            ));
        }
    }

    if let Some(max) = constraints.max_sentence_length {
        for span in sentences(text) {
            let words = word_count(&text[span.range()]);
            if words > max {
                violations.push(Violation::at(
                    SENTENCE_LENGTH_RULE,
                    Severity::Warning,
                    format!("Sentence has {words} words; the maximum is {max}"),
                    text,
                    span,
                ));
            }
        }
    }

    if let Some(max) = constraints.max_paragraph_length {
        for span in paragraphs(text) {
            let count = sentences(&text[span.range()]).len();
            if count > max {
                violations.push(Violation::at(
                    PARAGRAPH_LENGTH_RULE,
                    Severity::Info,
                    format!("Paragraph has {count} sentences; the maximum is {max}"),
                    text,
                    span,
                ));
            }
        }
    }

    if !constraints.allow_emoji {
        for (i, c) in text.char_indices().filter(|&(_, c)| is_emoji(c)) {
            violations.push(Violation::at(
                EMOJI_RULE,
                Severity::Warning,
                "Emoji are not allowed in this voice",
                text,
                Span::from(i..i + c.len_utf8()),
            ));
        }
    }

    if !constraints.allow_exclamation {
        for (i, _) in text.match_indices('!') {
            violations.push(Violation::at(
                EXCLAMATION_RULE,
                Severity::Info,
                "Exclamation marks are not allowed in this voice",
                text,
                Span::from(i..i + 1),
            ));
        }
    }

    violations
}
