//! # Pack Schemas
//!
//! Strongly-typed structs for the manifest and the five pack documents.
//! Shape is enforced by `serde` derive; constraints that shape alone cannot
//! express (score ranges, non-empty variant lists) are enforced by
//! [`PackDocument::check`] after parsing.

pub mod copy_patterns;
pub mod cta_rules;
pub mod manifest;
pub mod tests;
pub mod tokens;
pub mod voice;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

pub use copy_patterns::CopyPatterns;
pub use cta_rules::CtaRules;
pub use manifest::PackManifest;
pub use tests::TestSuite;
pub use tokens::Tokens;
pub use voice::Voice;

/// On-disk encoding of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Yaml,
    Json,
}

/// A document that can be parsed from a pack directory.
pub trait PackDocument: DeserializeOwned {
    /// Human-readable document name used in error strings.
    const LABEL: &'static str;
    const FORMAT: DocumentFormat;

    /// Constraints beyond what deserialization enforces.
    fn check(&self) -> Result<(), String> {
        Ok(())
    }
}

/// A document that degrades to an empty default when it cannot be loaded.
pub trait RecoverableDocument: PackDocument {
    fn fallback() -> Self;
}

/// A fully assembled style pack. Always structurally complete: documents
/// that failed to load hold their empty default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pack {
    pub manifest: PackManifest,
    pub voice: Voice,
    pub copy_patterns: CopyPatterns,
    pub cta_rules: CtaRules,
    pub tokens: Tokens,
    pub tests: TestSuite,
}

impl Pack {
    /// A pack with the given manifest and every document at its default.
    pub fn with_manifest(manifest: PackManifest) -> Self {
        Self {
            manifest,
            voice: Voice::fallback(),
            copy_patterns: CopyPatterns::fallback(),
            cta_rules: CtaRules::fallback(),
            tokens: Tokens::fallback(),
            tests: TestSuite::fallback(),
        }
    }

    pub fn name(&self) -> &str {
        &self.manifest.name
    }

    pub fn version(&self) -> &str {
        &self.manifest.version
    }
}

fn default_document_version() -> String {
    "1.0".to_string()
}

/// Accept a version written as a bare YAML number (`version: 1.0`) as well
/// as a string.
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Int(i64),
        Float(f64),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(s) => s,
        Raw::Int(i) => i.to_string(),
        Raw::Float(f) => format!("{f:?}"),
    })
}

fn score_in_range(field: &str, value: f64) -> Result<(), String> {
    if (0.0..=100.0).contains(&value) {
        Ok(())
    } else {
        Err(format!("{field} must be within 0..=100, got {value}"))
    }
}
