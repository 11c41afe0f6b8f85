use crate::domain::common::deserialize_id;
use serde::{Deserialize, Serialize};

/// Input types a subcategory field can be configured with
pub const FIELD_TYPES: &[&str] = &["text", "number", "select", "textarea", "checkbox", "file"];

/// Product category with its subcategories
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub subcategories: Vec<Subcategory>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subcategory {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub name: String,
    /// Custom listing fields (price, area, brand, ...)
    #[serde(default)]
    pub fields: Vec<String>,
}

impl Category {
    pub fn field_count(&self) -> usize {
        self.subcategories.iter().map(|s| s.fields.len()).sum()
    }
}

/// Body of `POST category`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCategoryRequest {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl CreateCategoryRequest {
    /// Trimmed request, or the reason it cannot be sent
    pub fn new(name: &str, description: &str) -> Result<Self, String> {
        let name = name.trim();
        if name.is_empty() {
            return Err("Category name is required".to_string());
        }
        let description = description.trim();
        Ok(Self {
            name: name.to_string(),
            description: (!description.is_empty()).then(|| description.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_decodes_without_subcategories() {
        let category: Category = serde_json::from_str(r#"{ "id": 3, "name": "Furniture" }"#).unwrap();
        assert_eq!(category.id, "3");
        assert!(category.subcategories.is_empty());
        assert_eq!(category.field_count(), 0);
    }

    #[test]
    fn test_create_request_validation() {
        assert!(CreateCategoryRequest::new("  ", "x").is_err());
        let request = CreateCategoryRequest::new(" Electronics ", " ").unwrap();
        assert_eq!(request.name, "Electronics");
        assert_eq!(request.description, None);
    }
}
