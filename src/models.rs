//! Frontend Models
//!
//! Data structures matching the items REST API.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Backend-assigned item identifier.
///
/// The backend may hand out numeric ids or UUID strings; both are kept in
/// the JSON form they arrived in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemId {
    Number(u64),
    Text(String),
}

impl ItemId {
    /// Parse an id taken from a URL (route parameter, `Location` header).
    ///
    /// Only canonical digit strings become numbers; `"007"` stays text so
    /// it is sent back unchanged.
    pub fn parse(raw: &str) -> Self {
        match raw.parse::<u64>() {
            Ok(n) if n.to_string() == raw => ItemId::Number(n),
            _ => ItemId::Text(raw.to_string()),
        }
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemId::Number(n) => write!(f, "{}", n),
            ItemId::Text(s) => f.write_str(s),
        }
    }
}

/// Item data structure (matches backend)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Absent for a draft that has not been persisted yet
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ItemId>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub colour: String,
}

impl Item {
    /// Empty draft used by the edit form in create mode
    pub fn draft() -> Self {
        Self::default()
    }

    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    pub fn set_field(&mut self, field: ItemField, value: String) {
        match field {
            ItemField::Name => self.name = value,
            ItemField::Colour => self.colour = value,
        }
    }
}

/// Editable item fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemField {
    Name,
    Colour,
}

/// Envelope returned by `GET /v1/items`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemListResponse {
    #[serde(rename = "itemResponses")]
    pub item_responses: Vec<Item>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_serializes_without_id() {
        let mut draft = Item::draft();
        draft.set_field(ItemField::Name, "Red Box".to_string());
        draft.set_field(ItemField::Colour, "Red".to_string());

        let json = serde_json::to_string(&draft).unwrap();
        assert_eq!(json, r#"{"name":"Red Box","colour":"Red"}"#);
        assert!(!draft.is_persisted());
    }

    #[test]
    fn test_ids_keep_their_json_form() {
        let numeric: Item = serde_json::from_str(r#"{"id":1,"name":"a","colour":"b"}"#).unwrap();
        assert_eq!(numeric.id, Some(ItemId::Number(1)));
        assert_eq!(serde_json::to_string(&numeric).unwrap(), r#"{"id":1,"name":"a","colour":"b"}"#);

        let uuid = "3f2a6c1e-8d4b-4a7e-9b1f-0c2d3e4f5a6b";
        let text: Item = serde_json::from_str(&format!(r#"{{"id":"{}","name":"a","colour":"b"}}"#, uuid)).unwrap();
        assert_eq!(text.id, Some(ItemId::Text(uuid.to_string())));
    }

    #[test]
    fn test_parsed_ids_match_decoded_ids() {
        assert_eq!(ItemId::parse("1"), ItemId::Number(1));
        assert_eq!(ItemId::parse("new"), ItemId::Text("new".to_string()));
        assert_eq!(ItemId::parse("42").to_string(), "42");
        assert_eq!(ItemId::parse("007"), ItemId::Text("007".to_string()));
        assert_eq!(ItemId::parse("007").to_string(), "007");
    }

    #[test]
    fn test_null_fields_decode_as_empty() {
        let item: Item = serde_json::from_str(r#"{"id":"x","name":null}"#).unwrap();
        assert_eq!(item.name, "");
        assert_eq!(item.colour, "");
    }

    #[test]
    fn test_list_envelope_requires_item_responses() {
        let ok: ItemListResponse =
            serde_json::from_str(r#"{"itemResponses":[{"id":1,"name":"Red Box","colour":"Red"}]}"#).unwrap();
        assert_eq!(ok.item_responses.len(), 1);
        assert_eq!(ok.item_responses[0].name, "Red Box");

        assert!(serde_json::from_str::<ItemListResponse>(r#"[]"#).is_err());
        assert!(serde_json::from_str::<ItemListResponse>(r#"{"items":[]}"#).is_err());
    }
}
