//! Copy patterns: reusable, templated snippets for recurring UI situations.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{default_document_version, lenient_string, DocumentFormat, PackDocument, RecoverableDocument};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CopyPatterns {
    #[serde(default = "default_document_version", deserialize_with = "lenient_string")]
    pub version: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub patterns: Vec<CopyPattern>,
}

impl CopyPatterns {
    pub fn find(&self, id: &str) -> Option<&CopyPattern> {
        self.patterns.iter().find(|p| p.id == id)
    }

    pub fn in_category(&self, category: PatternCategory) -> impl Iterator<Item = &CopyPattern> {
        self.patterns.iter().filter(move |p| p.category == category)
    }
}

impl PackDocument for CopyPatterns {
    const LABEL: &'static str = "copy patterns";
    const FORMAT: DocumentFormat = DocumentFormat::Yaml;

    fn check(&self) -> Result<(), String> {
        match self.patterns.iter().find(|p| p.variants.is_empty()) {
            Some(p) => Err(format!("pattern {:?} must have at least one variant", p.id)),
            None => Ok(()),
        }
    }
}

impl RecoverableDocument for CopyPatterns {
    fn fallback() -> Self {
        Self {
            version: default_document_version(),
            name: "default".to_string(),
            description: None,
            patterns: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PatternCategory {
    Error,
    EmptyState,
    Success,
    Loading,
    Confirmation,
    Onboarding,
    Tooltip,
    Notification,
    Modal,
    FormValidation,
    Navigation,
    FeatureGate,
    UpgradePrompt,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CopyPattern {
    pub id: String,
    pub name: String,
    pub category: PatternCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub variants: Vec<PatternVariant>,
    #[serde(default)]
    pub guidelines: Vec<String>,
    #[serde(default)]
    pub examples: PatternExamples,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholders: Option<BTreeMap<String, Placeholder>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<PatternMetadata>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternVariant {
    /// Copy template with `{{placeholders}}`.
    pub template: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<VariantLength>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VariantLength {
    Short,
    Medium,
    Long,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternExamples {
    #[serde(default)]
    pub good: Vec<String>,
    #[serde(default)]
    pub bad: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placeholder {
    pub description: String,
    #[serde(default)]
    pub examples: Vec<String>,
    #[serde(default = "default_required")]
    pub required: bool,
}

fn default_required() -> bool {
    true
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,
    /// Whether copy built from this pattern should include a CTA.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requires_action: Option<bool>,
}
