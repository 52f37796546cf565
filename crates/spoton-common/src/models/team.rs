//! Team records

use serde::{Deserialize, Serialize};

/// A registered team
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    /// Unique identifier
    #[serde(rename = "_id")]
    pub id: String,
    /// Display name
    pub name: String,
    /// Logo URL
    pub logo: String,
    /// Current roster size
    pub member_count: u32,
    /// Identifier of the captain's user record
    pub captain_id: String,
    /// Competitive level label
    pub level: String,
    /// Free-form description
    pub description: String,
    /// Creation timestamp
    pub created_at: String,
}

/// Query parameters for listing teams
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamListParams {
    /// Page number, 1-based
    pub page: u32,
    /// Records per page
    pub page_size: u32,
    /// Restrict to a single competitive level
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
}

/// Partial team payload for creation
///
/// Server-assigned fields (id, member count, timestamps) are absent; every
/// remaining field is optional and omitted from the body when unset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamDraft {
    /// Display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Logo URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    /// Competitive level label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    /// Free-form description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_omits_unset_fields() {
        let draft = TeamDraft {
            name: Some("Reds".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_string(&draft).expect("serialize");
        assert_eq!(json, r#"{"name":"Reds"}"#);
    }
}
