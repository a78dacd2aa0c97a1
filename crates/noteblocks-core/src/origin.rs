//! Block provenance.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Where a block came from: the connector that produced it and the
/// connector-side identifier of the source item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Origin {
    #[serde(default)]
    pub connector_slug: String,
    #[serde(default)]
    pub connector_uniq_source_identifier: String,
    #[serde(default)]
    pub connector_identifier: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified_by: Option<String>,
}

pub const CONNECTOR_GENERIC: &str = "generic";
pub const CONNECTOR_WEBAPP: &str = "webapp";
pub const CONNECTOR_AI: &str = "ai";

impl Origin {
    fn with_slug(slug: &str) -> Self {
        Self {
            connector_slug: slug.to_string(),
            connector_uniq_source_identifier: Uuid::new_v4().to_string(),
            connector_identifier: Uuid::nil(),
            modified_by: None,
        }
    }

    pub fn generic() -> Self {
        Self::with_slug(CONNECTOR_GENERIC)
    }

    pub fn webapp() -> Self {
        Self::with_slug(CONNECTOR_WEBAPP)
    }

    pub fn ai() -> Self {
        Self::with_slug(CONNECTOR_AI)
    }

    /// True for the all-empty value, which partial updates treat as absent.
    pub fn is_unset(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_assign_fresh_source_identifier() {
        let a = Origin::webapp();
        let b = Origin::webapp();
        assert_eq!(a.connector_slug, "webapp");
        assert_eq!(a.connector_identifier, Uuid::nil());
        assert_ne!(a.connector_uniq_source_identifier, b.connector_uniq_source_identifier);
        assert!(Uuid::parse_str(&a.connector_uniq_source_identifier).is_ok());
    }

    #[test]
    fn test_modified_by_omitted_when_none() {
        let json = serde_json::to_value(Origin::ai()).unwrap();
        assert!(json.get("modified_by").is_none());
        assert_eq!(json["connector_slug"], "ai");
    }

    #[test]
    fn test_is_unset() {
        assert!(Origin::default().is_unset());
        assert!(!Origin::generic().is_unset());
    }
}
