//! Text matching shared by the reference checkers.
//!
//! Every function returns byte spans into the searched text, in ascending
//! order, on `char` boundaries. Zero-length matches are dropped.

use regex::{Regex, RegexBuilder};
use stylemcp_core::Span;

/// Case-insensitive matches of `term` as a whole word or phrase.
///
/// Word boundaries are only required on sides of the term that begin or
/// end with a word character, so `sign-up` and `e.g.` still match.
pub(crate) fn find_term(text: &str, term: &str) -> Vec<Span> {
    let term = term.trim();
    if term.is_empty() {
        return Vec::new();
    }
    let mut pattern = String::with_capacity(term.len() + 8);
    if term.starts_with(is_word_char) {
        pattern.push_str(r"\b");
    }
    pattern.push_str(&regex::escape(term));
    if term.ends_with(is_word_char) {
        pattern.push_str(r"\b");
    }
    match build(&pattern) {
        Ok(re) => spans(&re, text),
        Err(e) => {
            tracing::warn!(term, error = %e, "could not build term matcher");
            Vec::new()
        }
    }
}

/// Case-insensitive matches of a pack pattern: a literal substring, or a
/// regular expression when `is_regex` is set.
pub(crate) fn find_pattern(
    text: &str,
    pattern: &str,
    is_regex: bool,
) -> Result<Vec<Span>, regex::Error> {
    if pattern.is_empty() {
        return Ok(Vec::new());
    }
    let re = if is_regex {
        build(pattern)?
    } else {
        build(&regex::escape(pattern))?
    };
    Ok(spans(&re, text))
}

/// Sentences of `text`, trimmed of surrounding whitespace.
///
/// A sentence ends at a run of `.`, `!` or `?` followed by whitespace or
/// the end of the text. Trailing text without a terminator is a sentence.
pub(crate) fn sentences(text: &str) -> Vec<Span> {
    let mut out = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();
    while let Some((i, c)) = chars.next() {
        if !is_terminator(c) {
            continue;
        }
        let mut end = i + c.len_utf8();
        while let Some(&(j, d)) = chars.peek() {
            if !is_terminator(d) {
                break;
            }
            end = j + d.len_utf8();
            chars.next();
        }
        if chars.peek().map_or(true, |&(_, d)| d.is_whitespace()) {
            push_trimmed(text, start, end, &mut out);
            start = end;
        }
    }
    push_trimmed(text, start, text.len(), &mut out);
    out
}

/// Paragraphs of `text`: maximal runs of non-blank lines.
pub(crate) fn paragraphs(text: &str) -> Vec<Span> {
    let mut out = Vec::new();
    let mut current: Option<(usize, usize)> = None;
    let mut offset = 0;
    for line in text.split_inclusive('\n') {
        let line_start = offset;
        offset += line.len();
        if line.trim().is_empty() {
            if let Some((s, e)) = current.take() {
                push_trimmed(text, s, e, &mut out);
            }
        } else {
            current = Some(match current {
                Some((s, _)) => (s, offset),
                None => (line_start, offset),
            });
        }
    }
    if let Some((s, e)) = current {
        push_trimmed(text, s, e, &mut out);
    }
    out
}

pub(crate) fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Whether `c` falls in the pictographic ranges treated as emoji.
pub(crate) fn is_emoji(c: char) -> bool {
    matches!(
        u32::from(c),
        0x1F000..=0x1FAFF | 0x2600..=0x27BF | 0x2B1B | 0x2B1C | 0x2B50 | 0x2B55 | 0x3030 | 0x303D
    )
}

fn build(pattern: &str) -> Result<Regex, regex::Error> {
    RegexBuilder::new(pattern).case_insensitive(true).build()
}

fn spans(re: &Regex, text: &str) -> Vec<Span> {
    re.find_iter(text)
        .filter(|m| !m.is_empty())
        .map(|m| Span::from(m.range()))
        .collect()
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn is_terminator(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

fn push_trimmed(text: &str, start: usize, end: usize, out: &mut Vec<Span>) {
    let slice = &text[start..end];
    let trimmed = slice.trim();
    if trimmed.is_empty() {
        return;
    }
    let lead = slice.len() - slice.trim_start().len();
    let s = start + lead;
    out.push(Span::from(s..s + trimmed.len()));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts<'a>(text: &'a str, spans: &[Span]) -> Vec<&'a str> {
        spans.iter().map(|s| &text[s.range()]).collect()
    }

    #[test]
    fn term_matches_whole_words_ignoring_case() {
        let text = "Assist, assistance, and ASSIST.";
        let found = find_term(text, "assist");
        assert_eq!(texts(text, &found), vec!["Assist", "ASSIST"]);
        assert_eq!(found[0], Span::from(0..6));
    }

    #[test]
    fn term_with_punctuation_edges() {
        let text = "Please sign-up now. Try e.g. this.";
        assert_eq!(texts(text, &find_term(text, "sign-up")), vec!["sign-up"]);
        assert_eq!(texts(text, &find_term(text, "e.g.")), vec!["e.g."]);
    }

    #[test]
    fn term_is_literal_not_regex() {
        assert!(find_term("a+b", "a.b").is_empty());
        assert_eq!(find_term("a+b", "a+b").len(), 1);
    }

    #[test]
    fn blank_term_matches_nothing() {
        assert!(find_term("anything", "  ").is_empty());
    }

    #[test]
    fn multibyte_offsets_are_bytes() {
        let text = "café utilize";
        let found = find_term(text, "utilize");
        assert_eq!(found, vec![Span::from(6..13)]);
    }

    #[test]
    fn literal_pattern_is_substring() {
        let text = "Click here to continue";
        let found = find_pattern(text, "click HERE", false).unwrap();
        assert_eq!(texts(text, &found), vec!["Click here"]);
    }

    #[test]
    fn regex_pattern_and_invalid_regex() {
        let text = "We're sorry for the inconvenience";
        let found = find_pattern(text, r"sorry\s+for", true).unwrap();
        assert_eq!(texts(text, &found), vec!["sorry for"]);
        assert!(find_pattern(text, "(unclosed", true).is_err());
    }

    #[test]
    fn zero_length_regex_matches_are_dropped() {
        assert!(find_pattern("abc", "^", true).unwrap().is_empty());
    }

    #[test]
    fn splits_sentences() {
        let text = "First one. Second?! Third without end";
        let found = sentences(text);
        assert_eq!(
            texts(text, &found),
            vec!["First one.", "Second?!", "Third without end"]
        );
    }

    #[test]
    fn decimal_points_do_not_split() {
        let text = "Version 1.5 is out.";
        assert_eq!(sentences(text).len(), 1);
    }

    #[test]
    fn splits_paragraphs_on_blank_lines() {
        let text = "One.\nStill one.\n\n  \nTwo.\n";
        let found = paragraphs(text);
        assert_eq!(texts(text, &found), vec!["One.\nStill one.", "Two."]);
    }

    #[test]
    fn emoji_detection() {
        assert!(is_emoji('🚀'));
        assert!(is_emoji('☀'));
        assert!(!is_emoji('a'));
        assert!(!is_emoji('é'));
    }
}
