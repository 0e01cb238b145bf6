//! Validation context: what kind of text is being checked, and where it
//! will appear.

use serde::{Deserialize, Serialize};

/// The broad kind of content being validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContentType {
    /// Interface strings: buttons, labels, empty states.
    UiCopy,
    /// Landing pages, campaigns, announcements.
    Marketing,
    /// Product documentation.
    Docs,
    /// Help-center and support replies.
    Support,
    /// Anything else.
    General,
}

impl ContentType {
    /// The kebab-case wire name, e.g. `ui-copy`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::UiCopy => "ui-copy",
            Self::Marketing => "marketing",
            Self::Docs => "docs",
            Self::Support => "support",
            Self::General => "general",
        }
    }
}

/// Optional caller-supplied context for a validation or rewrite call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationContext {
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    /// Serialized as `type`.
    pub content_type: Option<ContentType>,
    /// UI component the text is destined for, e.g. `button`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Intended readers, free-form.
    pub audience: Option<String>,
}

impl ValidationContext {
    /// A context carrying only a content type.
    pub fn with_type(content_type: ContentType) -> Self {
        Self {
            content_type: Some(content_type),
            ..Self::default()
        }
    }

    /// A context carrying only a component name.
    pub fn for_component(component: impl Into<String>) -> Self {
        Self {
            component: Some(component.into()),
            ..Self::default()
        }
    }

    /// Whether this context names `label` as either its component or its
    /// content type, ignoring ASCII case.
    pub fn matches(&self, label: &str) -> bool {
        let component = self
            .component
            .as_deref()
            .is_some_and(|c| c.eq_ignore_ascii_case(label));
        let content_type = self
            .content_type
            .is_some_and(|t| t.as_str().eq_ignore_ascii_case(label));
        component || content_type
    }
}
