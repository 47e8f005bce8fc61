//! Shared wire model for award records.
//!
//! The store owns identity: `id` is assigned server-side and passed through
//! opaquely by every client. All display fields default to the empty string
//! so that partially filled records deserialize without errors; the views
//! render blanks as an em-dash placeholder.

use serde::{Deserialize, Serialize};

/// A single award record as exchanged with `/api/awards`.
///
/// Serialized camelCase to match the store's JSON. A freshly created record
/// carries no `id`; serialization skips the field entirely so the store
/// never sees a client-fabricated identifier.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Award {
    /// Opaque store-assigned identifier. Never set or mutated by clients;
    /// used only for list-item identity and deletion targeting.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default)]
    pub location: String,

    #[serde(default)]
    pub category: String,

    /// Wire name `type`, which is a Rust keyword.
    #[serde(default, rename = "type")]
    pub kind: String,

    #[serde(default)]
    pub year: String,

    #[serde(default)]
    pub competition: String,

    #[serde(default)]
    pub award_name: String,

    #[serde(default)]
    pub school: String,

    #[serde(default)]
    pub rank: String,

    #[serde(default)]
    pub participants: String,

    #[serde(default)]
    pub additional_info: String,

    #[serde(default)]
    pub comments: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_fields_deserialize_to_defaults() {
        let award: Award = serde_json::from_str(r#"{"awardName":"Moot Court Champion"}"#).unwrap();
        assert_eq!(award.id, None);
        assert_eq!(award.award_name, "Moot Court Champion");
        assert_eq!(award.competition, "");
        assert_eq!(award.additional_info, "");
    }

    #[test]
    fn store_id_passes_through_opaquely() {
        let json = r#"{"id":"6543f0c2a1","awardName":"Best Brief","year":"2024"}"#;
        let award: Award = serde_json::from_str(json).unwrap();
        assert_eq!(award.id.as_deref(), Some("6543f0c2a1"));

        let back = serde_json::to_string(&award).unwrap();
        let reparsed: Award = serde_json::from_str(&back).unwrap();
        assert_eq!(reparsed, award);
    }

    #[test]
    fn new_record_serializes_without_id_key() {
        let award = Award {
            id: None,
            award_name: "Regional Finalist".into(),
            location: String::new(),
            category: String::new(),
            kind: String::new(),
            year: String::new(),
            competition: String::new(),
            school: String::new(),
            rank: String::new(),
            participants: String::new(),
            additional_info: String::new(),
            comments: String::new(),
        };
        let json = serde_json::to_string(&award).unwrap();
        assert!(!json.contains("\"id\""));
        assert!(json.contains("\"awardName\":\"Regional Finalist\""));
    }

    #[test]
    fn type_key_maps_to_kind_field() {
        let award: Award = serde_json::from_str(r#"{"type":"Team","category":"Trial"}"#).unwrap();
        assert_eq!(award.kind, "Team");

        let json = serde_json::to_string(&award).unwrap();
        assert!(json.contains("\"type\":\"Team\""));
        assert!(!json.contains("\"kind\""));
    }

    #[test]
    fn field_names_are_camel_case_on_the_wire() {
        let award: Award = serde_json::from_str(r#"{"additionalInfo":"Shared with co-counsel"}"#).unwrap();
        assert_eq!(award.additional_info, "Shared with co-counsel");
        let json = serde_json::to_string(&award).unwrap();
        assert!(json.contains("\"additionalInfo\""));
    }
}
