use serde::{Deserialize, Serialize};

use crate::registry::BadgeStyle;

pub const SCHEMA_VERSION: u32 = 1;
pub const PLACEHOLDER: &str = "Visit profile";

/// Endpoint document read by the badge renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BadgeDocument {
    pub schema_version: u32,
    pub label: String,
    pub message: String,
    pub color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub named_logo: Option<String>,
}

impl BadgeDocument {
    pub fn new(style: &BadgeStyle, message: impl Into<String>) -> Self {
        BadgeDocument {
            schema_version: SCHEMA_VERSION,
            label: style.label.to_string(),
            message: message.into(),
            color: style.color.to_string(),
            named_logo: style.icon.map(str::to_string),
        }
    }
}

/// Where a badge's message came from.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Provenance { Fresh, Prior, Placeholder }

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_renderer_shape() {
        let style = BadgeStyle { label: "SPOJ", color: "0A0A0A", icon: Some("spoj") };
        let s = serde_json::to_string(&BadgeDocument::new(&style, "Solved 5")).unwrap();
        assert_eq!(s, r#"{"schemaVersion":1,"label":"SPOJ","message":"Solved 5","color":"0A0A0A","namedLogo":"spoj"}"#);
    }

    #[test]
    fn icon_is_optional() {
        let style = BadgeStyle { label: "X", color: "FFFFFF", icon: None };
        let s = serde_json::to_string(&BadgeDocument::new(&style, "m")).unwrap();
        assert!(!s.contains("namedLogo"));
    }
}
