use super::RecordId;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// `{ id, name }` reference to another record (product, location, category).
/// Other keys of the nested object are kept in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedRef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl NamedRef {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("—")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_numeric_id_and_extra_keys_round_trip() {
        let value = json!({ "id": 3, "name": "Furniture", "icon": "sofa.png" });
        let named: NamedRef = serde_json::from_value(value.clone()).unwrap();
        assert_eq!(named.id.as_ref().map(RecordId::as_str), Some("3"));
        assert_eq!(named.display_name(), "Furniture");
        assert_eq!(serde_json::to_value(&named).unwrap(), value);
    }

    #[test]
    fn test_absent_fields_stay_absent() {
        let named: NamedRef = serde_json::from_value(json!({ "name": "Goa" })).unwrap();
        assert_eq!(serde_json::to_value(&named).unwrap(), json!({ "name": "Goa" }));
    }
}
