//! Design tokens (JSON). Loaded and carried with the pack for the
//! rendering layer; the validator does not read them.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{default_document_version, lenient_string, DocumentFormat, PackDocument, RecoverableDocument};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tokens {
    #[serde(default = "default_document_version", deserialize_with = "lenient_string")]
    pub version: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub colors: ColorTokens,
    #[serde(default)]
    pub typography: TypographyTokens,
    #[serde(default)]
    pub spacing: BTreeMap<String, ValueToken>,
    #[serde(default)]
    pub border_radius: BTreeMap<String, ValueToken>,
    #[serde(default)]
    pub shadows: BTreeMap<String, ValueToken>,
    #[serde(default)]
    pub breakpoints: BTreeMap<String, ValueToken>,
    #[serde(default)]
    pub z_index: BTreeMap<String, i64>,
    #[serde(default)]
    pub transitions: TransitionTokens,
}

impl PackDocument for Tokens {
    const LABEL: &'static str = "tokens";
    const FORMAT: DocumentFormat = DocumentFormat::Json;
}

impl RecoverableDocument for Tokens {
    fn fallback() -> Self {
        Self {
            version: default_document_version(),
            name: "default".to_string(),
            description: None,
            colors: ColorTokens::default(),
            typography: TypographyTokens::default(),
            spacing: BTreeMap::new(),
            border_radius: BTreeMap::new(),
            shadows: BTreeMap::new(),
            breakpoints: BTreeMap::new(),
            z_index: BTreeMap::new(),
            transitions: TransitionTokens::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorToken {
    /// Hex, rgb(), or hsl() value.
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub usage: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorTokens {
    #[serde(default)]
    pub primary: BTreeMap<String, ColorToken>,
    #[serde(default)]
    pub secondary: BTreeMap<String, ColorToken>,
    #[serde(default)]
    pub neutral: BTreeMap<String, ColorToken>,
    #[serde(default)]
    pub semantic: SemanticColors,
    #[serde(default)]
    pub background: BTreeMap<String, ColorToken>,
    #[serde(default)]
    pub text: BTreeMap<String, ColorToken>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SemanticColors {
    #[serde(default)]
    pub success: BTreeMap<String, ColorToken>,
    #[serde(default)]
    pub warning: BTreeMap<String, ColorToken>,
    #[serde(default)]
    pub error: BTreeMap<String, ColorToken>,
    #[serde(default)]
    pub info: BTreeMap<String, ColorToken>,
}

/// A CSS value that may be written as a number or a string (`600`, `"1.5"`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumberOrString {
    Number(f64),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypographyStyle {
    pub font_family: String,
    pub font_size: String,
    pub font_weight: NumberOrString,
    pub line_height: NumberOrString,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub letter_spacing: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_transform: Option<TextTransform>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextTransform {
    None,
    Uppercase,
    Lowercase,
    Capitalize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypographyTokens {
    #[serde(default)]
    pub font_families: BTreeMap<String, String>,
    #[serde(default)]
    pub font_weights: BTreeMap<String, NumberOrString>,
    #[serde(default)]
    pub font_sizes: BTreeMap<String, String>,
    #[serde(default)]
    pub line_heights: BTreeMap<String, NumberOrString>,
    /// Composite styles, e.g. `heading1`.
    #[serde(default)]
    pub styles: BTreeMap<String, TypographyStyle>,
}

/// Spacing, radius, shadow, and breakpoint tokens share this shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueToken {
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionTokens {
    #[serde(default)]
    pub duration: BTreeMap<String, String>,
    #[serde(default)]
    pub easing: BTreeMap<String, String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_tokens_json() {
        let json = r##"{
            "name": "saas-tokens",
            "colors": {
                "primary": { "500": { "value": "#3b82f6", "usage": ["buttons"] } },
                "semantic": { "error": { "base": { "value": "#ef4444" } } }
            },
            "typography": {
                "fontWeights": { "bold": 700, "regular": "400" },
                "styles": {
                    "heading1": {
                        "fontFamily": "Inter",
                        "fontSize": "2rem",
                        "fontWeight": 700,
                        "lineHeight": "1.2",
                        "textTransform": "none"
                    }
                }
            },
            "spacing": { "sm": { "value": "8px" } },
            "zIndex": { "modal": 1000 }
        }"##;
        let t: Tokens = serde_json::from_str(json).unwrap();
        assert_eq!(t.colors.primary["500"].value, "#3b82f6");
        assert_eq!(t.colors.semantic.error["base"].value, "#ef4444");
        assert_eq!(t.typography.font_weights["bold"], NumberOrString::Number(700.0));
        assert_eq!(
            t.typography.font_weights["regular"],
            NumberOrString::Text("400".to_string())
        );
        assert_eq!(
            t.typography.styles["heading1"].text_transform,
            Some(TextTransform::None)
        );
        assert_eq!(t.spacing["sm"].value, "8px");
        assert_eq!(t.z_index["modal"], 1000);
    }

    #[test]
    fn name_only_tokens_are_valid() {
        let t: Tokens = serde_json::from_str(r#"{"name":"bare"}"#).unwrap();
        assert!(t.colors.primary.is_empty());
        assert!(t.transitions.duration.is_empty());
    }
}
