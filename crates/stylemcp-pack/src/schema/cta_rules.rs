//! CTA rules: approved call-to-action phrasing, guidelines, anti-patterns,
//! and per-context requirements.

use serde::{Deserialize, Serialize};

use super::{default_document_version, lenient_string, DocumentFormat, PackDocument, RecoverableDocument};

/// Maximum words in a CTA when the guidelines do not say.
pub const DEFAULT_MAX_WORDS: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CtaRules {
    #[serde(default = "default_document_version", deserialize_with = "lenient_string")]
    pub version: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub guidelines: CtaGuidelines,
    pub categories: Vec<CtaCategory>,
    #[serde(default)]
    pub anti_patterns: Vec<CtaAntiPattern>,
    #[serde(default)]
    pub contextual_rules: Vec<ContextualRule>,
}

impl CtaRules {
    /// Every approved CTA across all categories.
    pub fn approved(&self) -> impl Iterator<Item = &Cta> {
        self.categories.iter().flat_map(|c| c.ctas.iter())
    }
}

impl PackDocument for CtaRules {
    const LABEL: &'static str = "CTA rules";
    const FORMAT: DocumentFormat = DocumentFormat::Yaml;
}

impl RecoverableDocument for CtaRules {
    fn fallback() -> Self {
        Self {
            version: default_document_version(),
            name: "default".to_string(),
            description: None,
            guidelines: CtaGuidelines::default(),
            categories: Vec::new(),
            anti_patterns: Vec::new(),
            contextual_rules: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerbStyle {
    /// "Save"
    #[default]
    Imperative,
    /// "To save"
    Infinitive,
    /// "Saving"
    Gerund,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Capitalization {
    #[default]
    Sentence,
    Title,
    Uppercase,
    Lowercase,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CtaGuidelines {
    #[serde(default)]
    pub verb_style: VerbStyle,
    #[serde(default = "default_max_words")]
    pub max_words: usize,
    #[serde(default)]
    pub capitalization: Capitalization,
    #[serde(default)]
    pub avoid_words: Vec<String>,
    #[serde(default)]
    pub prefer_words: Vec<String>,
}

impl Default for CtaGuidelines {
    fn default() -> Self {
        Self {
            verb_style: VerbStyle::default(),
            max_words: DEFAULT_MAX_WORDS,
            capitalization: Capitalization::default(),
            avoid_words: Vec::new(),
            prefer_words: Vec::new(),
        }
    }
}

fn default_max_words() -> usize {
    DEFAULT_MAX_WORDS
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CtaCategory {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub ctas: Vec<Cta>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CtaPriority {
    #[default]
    Primary,
    Secondary,
    Tertiary,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cta {
    pub id: String,
    pub text: String,
    /// Contexts where this CTA is appropriate.
    pub context: Vec<String>,
    #[serde(default)]
    pub priority: CtaPriority,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CtaAntiPattern {
    /// Literal text, or a regex when `is_regex` is set.
    pub pattern: String,
    #[serde(default)]
    pub is_regex: bool,
    pub reason: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

/// Requirements that apply when the validation context matches `context`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextualRule {
    pub context: String,
    #[serde(default)]
    pub required: Vec<String>,
    #[serde(default)]
    pub forbidden: Vec<String>,
    #[serde(default)]
    pub preferred: Vec<String>,
}
