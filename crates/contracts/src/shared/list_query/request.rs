use serde::{Deserialize, Serialize};

/// Body of a `PUT <list endpoint>` call.
///
/// Filters set to "all" are omitted from the JSON entirely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListRequest {
    pub search_text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    /// `dd-MM-yyyy`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    /// `dd-MM-yyyy`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    pub page: u32,
    pub size: u32,
}

impl ListRequest {
    /// Unfiltered request for the first `size` rows
    pub fn first_page(size: u32) -> Self {
        Self {
            search_text: String::new(),
            status: None,
            category_id: None,
            start_date: None,
            end_date: None,
            page: 1,
            size,
        }
    }
}

/// Body of a `PUT location/*` call that lists selector options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionsRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_ids: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state_ids: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city_ids: Option<Vec<String>>,
    pub search_text: String,
    pub page: u32,
    pub size: u32,
}

/// Page size used when a selector loads all of its options at once
pub const OPTIONS_PAGE_SIZE: u32 = 1000;

impl OptionsRequest {
    /// Unscoped request for the root level (countries)
    pub fn root() -> Self {
        Self {
            country_ids: None,
            state_ids: None,
            city_ids: None,
            search_text: String::new(),
            page: 0,
            size: OPTIONS_PAGE_SIZE,
        }
    }

    /// Request scoped to the chosen ancestors
    pub fn scoped(
        country_id: Option<&str>,
        state_id: Option<&str>,
        city_id: Option<&str>,
    ) -> Self {
        let wrap = |id: Option<&str>| id.map(|v| vec![v.to_string()]);
        Self {
            country_ids: wrap(country_id),
            state_ids: wrap(state_id),
            city_ids: wrap(city_id),
            search_text: String::new(),
            page: 1,
            size: OPTIONS_PAGE_SIZE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_list_request_wire_shape() {
        let mut request = ListRequest::first_page(10);
        request.status = Some("PENDING".to_string());
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({ "searchText": "", "status": "PENDING", "page": 1, "size": 10 })
        );
    }

    #[test]
    fn test_options_request_wire_shape() {
        let request = OptionsRequest::scoped(Some("in"), Some("ka"), None);
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({
                "countryIds": ["in"],
                "stateIds": ["ka"],
                "searchText": "",
                "page": 1,
                "size": 1000
            })
        );
    }

    #[test]
    fn test_root_options_request() {
        let value = serde_json::to_value(OptionsRequest::root()).unwrap();
        assert_eq!(value, json!({ "searchText": "", "page": 0, "size": 1000 }));
    }
}
