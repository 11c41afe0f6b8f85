use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;

/// Record id exactly as the backend sent it, a JSON string or number.
///
/// Serializes back to the original JSON value so records posted back keep
/// their id type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordId {
    text: String,
    raw: Value,
}

impl RecordId {
    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn raw(&self) -> &Value {
        &self.raw
    }
}

impl From<&str> for RecordId {
    fn from(text: &str) -> Self {
        Self {
            text: text.to_string(),
            raw: Value::String(text.to_string()),
        }
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl Serialize for RecordId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.raw.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Value::deserialize(deserializer)?;
        let text = match &raw {
            Value::String(s) => s.clone(),
            Value::Number(n) => n.to_string(),
            other => {
                return Err(D::Error::custom(format!(
                    "expected a string or number id, got {}",
                    other
                )))
            }
        };
        Ok(Self { text, raw })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_numeric_id_keeps_its_type() {
        let id: RecordId = serde_json::from_value(json!(7)).unwrap();
        assert_eq!(id.as_str(), "7");
        assert_eq!(serde_json::to_value(&id).unwrap(), json!(7));

        let id: RecordId = serde_json::from_value(json!("p-1")).unwrap();
        assert_eq!(id.to_string(), "p-1");
        assert_eq!(serde_json::to_value(&id).unwrap(), json!("p-1"));
    }

    #[test]
    fn test_rejects_non_scalar_id() {
        assert!(serde_json::from_value::<RecordId>(json!({ "x": 1 })).is_err());
        assert!(serde_json::from_value::<RecordId>(json!(null)).is_err());
    }
}
