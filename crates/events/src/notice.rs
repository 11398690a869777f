//! Visitor-facing notices ("toasts").
//!
//! A notice is advisory: it tells the visitor what just happened or why an
//! action was refused. It never carries control flow.

use serde::{Deserialize, Serialize};

/// Visual weight of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeVariant {
    #[default]
    Default,
    /// Refusals and wrong answers.
    Destructive,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub variant: NoticeVariant,
}

impl Notice {
    pub fn info(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            variant: NoticeVariant::Default,
        }
    }

    pub fn destructive(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            variant: NoticeVariant::Destructive,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn is_destructive(&self) -> bool {
        self.variant == NoticeVariant::Destructive
    }
}

/// Events that may surface a notice to the visitor.
pub trait Notify {
    /// The notice to show for this event, if the flow shows one.
    fn notice(&self) -> Option<Notice>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn description_is_omitted_from_json_when_absent() {
        let json = serde_json::to_value(Notice::info("Ajouté au panier")).unwrap();
        assert_eq!(json["title"], "Ajouté au panier");
        assert_eq!(json["variant"], "default");
        assert!(json.get("description").is_none());
    }

    #[test]
    fn destructive_builder_sets_variant() {
        let n = Notice::destructive("Email requis").with_description("x");
        assert!(n.is_destructive());
        assert_eq!(n.description.as_deref(), Some("x"));
    }
}
