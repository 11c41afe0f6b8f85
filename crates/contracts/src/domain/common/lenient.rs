//! Deserializers for fields the backend sends with inconsistent JSON types.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum IdRepr {
    Text(String),
    Int(i64),
    Float(f64),
}

/// Accept an id given either as a JSON string or a JSON number
pub fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match IdRepr::deserialize(deserializer)? {
        IdRepr::Text(s) => s,
        IdRepr::Int(n) => n.to_string(),
        IdRepr::Float(f) => f.to_string(),
    })
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CountRepr {
    Int(u64),
    Text(String),
}

/// Accept a counter given as a number, a numeric string or null
pub fn deserialize_opt_count<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<CountRepr>::deserialize(deserializer)? {
        Some(CountRepr::Int(n)) => Some(n),
        Some(CountRepr::Text(s)) => s.trim().parse().ok(),
        None => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Row {
        #[serde(deserialize_with = "deserialize_id")]
        id: String,
        #[serde(default, deserialize_with = "deserialize_opt_count")]
        views: Option<u64>,
    }

    #[test]
    fn test_id_from_number_or_string() {
        let row: Row = serde_json::from_str(r#"{ "id": 42, "views": "7" }"#).unwrap();
        assert_eq!(row.id, "42");
        assert_eq!(row.views, Some(7));

        let row: Row = serde_json::from_str(r#"{ "id": "v-1" }"#).unwrap();
        assert_eq!(row.id, "v-1");
        assert_eq!(row.views, None);
    }
}
