//! Pack manifest: identity, file-name mapping, and pass/fail policy.

use serde::{Deserialize, Serialize};

use super::{lenient_string, score_in_range, DocumentFormat, PackDocument};

/// Score a text must reach to pass when the manifest does not say.
pub const DEFAULT_MIN_SCORE: f64 = 70.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackManifest {
    /// Pack name, e.g. `saas` or `fintech`.
    pub name: String,
    /// Semantic version of the pack.
    #[serde(deserialize_with = "lenient_string")]
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,
    #[serde(default)]
    pub files: PackFiles,
    /// Parent pack this one extends. Parsed and exposed, not merged.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extends: Option<String>,
    #[serde(default)]
    pub config: PackConfig,
}

impl PackManifest {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            description: None,
            author: None,
            license: None,
            files: PackFiles::default(),
            extends: None,
            config: PackConfig::default(),
        }
    }
}

impl PackDocument for PackManifest {
    const LABEL: &'static str = "manifest";
    const FORMAT: DocumentFormat = DocumentFormat::Yaml;

    fn check(&self) -> Result<(), String> {
        score_in_range("config.minScore", self.config.min_score)
    }
}

/// File names of the five documents, relative to the pack directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackFiles {
    #[serde(default = "default_voice_file")]
    pub voice: String,
    #[serde(default = "default_copy_patterns_file")]
    pub copy_patterns: String,
    #[serde(default = "default_cta_rules_file")]
    pub cta_rules: String,
    #[serde(default = "default_tokens_file")]
    pub tokens: String,
    #[serde(default = "default_tests_file")]
    pub tests: String,
}

impl Default for PackFiles {
    fn default() -> Self {
        Self {
            voice: default_voice_file(),
            copy_patterns: default_copy_patterns_file(),
            cta_rules: default_cta_rules_file(),
            tokens: default_tokens_file(),
            tests: default_tests_file(),
        }
    }
}

fn default_voice_file() -> String {
    "voice.yaml".to_string()
}

fn default_copy_patterns_file() -> String {
    "copy_patterns.yaml".to_string()
}

fn default_cta_rules_file() -> String {
    "cta_rules.yaml".to_string()
}

fn default_tokens_file() -> String {
    "tokens.json".to_string()
}

fn default_tests_file() -> String {
    "tests.yaml".to_string()
}

/// Pass/fail policy applied by the validator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackConfig {
    /// Fail on any violation, regardless of score.
    #[serde(default)]
    pub strict_mode: bool,
    #[serde(default = "default_min_score")]
    pub min_score: f64,
}

impl Default for PackConfig {
    fn default() -> Self {
        Self {
            strict_mode: false,
            min_score: DEFAULT_MIN_SCORE,
        }
    }
}

fn default_min_score() -> f64 {
    DEFAULT_MIN_SCORE
}
