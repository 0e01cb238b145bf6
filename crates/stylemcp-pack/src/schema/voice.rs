//! Voice document: tone, vocabulary, do-not patterns, constraints, examples.

use serde::{Deserialize, Serialize};

use super::{default_document_version, lenient_string, DocumentFormat, PackDocument, RecoverableDocument};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Voice {
    #[serde(default = "default_document_version", deserialize_with = "lenient_string")]
    pub version: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub tone: Tone,
    #[serde(default)]
    pub vocabulary: Vocabulary,
    #[serde(default)]
    pub do_not: Vec<DoNotPattern>,
    #[serde(default)]
    pub constraints: Constraints,
    #[serde(default)]
    pub examples: VoiceExamples,
}

impl Voice {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            version: default_document_version(),
            name: name.into(),
            description: None,
            tone: Tone::default(),
            vocabulary: Vocabulary::default(),
            do_not: Vec::new(),
            constraints: Constraints::default(),
            examples: VoiceExamples::default(),
        }
    }
}

impl PackDocument for Voice {
    const LABEL: &'static str = "voice";
    const FORMAT: DocumentFormat = DocumentFormat::Yaml;

    fn check(&self) -> Result<(), String> {
        for attr in &self.tone.attributes {
            if !(0.0..=1.0).contains(&attr.weight) {
                return Err(format!(
                    "tone attribute {:?} has weight {} outside 0..=1",
                    attr.name, attr.weight
                ));
            }
        }
        for (i, rule) in self.vocabulary.rules.iter().enumerate() {
            if rule.preferred.trim().is_empty() {
                return Err(format!("vocabulary.rules[{i}] has an empty preferred term"));
            }
        }
        Ok(())
    }
}

impl RecoverableDocument for Voice {
    fn fallback() -> Self {
        Self::named("default")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Tone {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default)]
    pub attributes: Vec<ToneAttribute>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToneAttribute {
    pub name: String,
    /// Strength of the attribute, `0.0..=1.0`.
    #[serde(default = "default_weight")]
    pub weight: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

fn default_weight() -> f64 {
    1.0
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vocabulary {
    #[serde(default)]
    pub rules: Vec<VocabularyRule>,
    #[serde(default)]
    pub forbidden: Vec<String>,
}

/// Prefer `preferred` over every term in `avoid`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyRule {
    pub preferred: String,
    #[serde(default)]
    pub avoid: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DoNotPattern {
    /// Literal text, or a regex when `is_regex` is set.
    pub pattern: String,
    #[serde(default)]
    pub is_regex: bool,
    pub reason: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

/// Length and format limits. Absent limits are not checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Constraints {
    /// Maximum length in characters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
    /// Minimum length in characters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,
    /// Maximum words per sentence.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_sentence_length: Option<usize>,
    /// Maximum sentences per paragraph.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_paragraph_length: Option<usize>,
    #[serde(default = "default_true")]
    pub allow_emoji: bool,
    #[serde(default = "default_true")]
    pub allow_exclamation: bool,
}

impl Default for Constraints {
    fn default() -> Self {
        Self {
            max_length: None,
            min_length: None,
            max_sentence_length: None,
            max_paragraph_length: None,
            allow_emoji: true,
            allow_exclamation: true,
        }
    }
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoiceExamples {
    #[serde(default)]
    pub good: Vec<GoodExample>,
    #[serde(default)]
    pub bad: Vec<BadExample>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoodExample {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub why: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BadExample {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub why: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub better: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const VOICE_YAML: &str = r#"
name: saas
tone:
  summary: Friendly and direct.
  attributes:
    - name: confident
      weight: 0.8
      description: Uses direct statements
vocabulary:
  rules:
    - preferred: help
      avoid: [assist, aid]
      reason: More conversational
  forbidden: [synergy, leverage]
doNot:
  - pattern: "!!"
    reason: Double exclamation feels shouty
  - pattern: "\\bvery\\b"
    isRegex: true
    reason: Weak intensifier
    suggestion: Use a stronger word
constraints:
  maxSentenceLength: 25
  allowEmoji: false
examples:
  good:
    - text: We'll help you get started.
  bad:
    - text: We will assist you in your journey!
      better: We'll help you get started.
"#;

    #[test]
    fn parses_full_voice() {
        let v: Voice = serde_yaml::from_str(VOICE_YAML).unwrap();
        assert_eq!(v.version, "1.0");
        assert_eq!(v.tone.attributes[0].weight, 0.8);
        assert_eq!(v.vocabulary.rules[0].avoid, vec!["assist", "aid"]);
        assert_eq!(v.vocabulary.forbidden.len(), 2);
        assert_eq!(v.do_not.len(), 2);
        assert!(!v.do_not[0].is_regex);
        assert!(v.do_not[1].is_regex);
        assert_eq!(v.constraints.max_sentence_length, Some(25));
        assert!(!v.constraints.allow_emoji);
        assert!(v.constraints.allow_exclamation);
        assert_eq!(v.examples.bad[0].better.as_deref(), Some("We'll help you get started."));
        assert!(v.check().is_ok());
    }

    #[test]
    fn name_is_required() {
        assert!(serde_yaml::from_str::<Voice>("tone: {}\n").is_err());
    }

    #[test]
    fn out_of_range_tone_weight_fails_check() {
        let mut v = Voice::fallback();
        v.tone.attributes.push(ToneAttribute {
            name: "playful".to_string(),
            weight: 1.5,
            description: None,
        });
        assert!(v.check().unwrap_err().contains("playful"));
    }

    #[test]
    fn fallback_is_empty_and_valid() {
        let v = Voice::fallback();
        assert_eq!(v.name, "default");
        assert!(v.vocabulary.rules.is_empty());
        assert!(v.do_not.is_empty());
        assert_eq!(v.constraints, Constraints::default());
        assert!(v.check().is_ok());
    }
}
