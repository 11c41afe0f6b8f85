use crate::shared::api_utils::put_json;
use crate::shared::http_source::HttpPageSource;
use contracts::domain::a007_notification::Notification;
use contracts::shared::api_error::ApiError;
use contracts::shared::list_query::{ApiEnvelope, ListRequest, PagePayload, PageSource};
use serde::Serialize;
use serde_json::Value;

/// Body of `PUT notification/all`; the feed pages from 0
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ActivityRequest {
    pub page: u32,
    pub size: u32,
}

impl ActivityRequest {
    pub fn latest(size: u32) -> Self {
        Self { page: 0, size }
    }
}

/// Most recent activity-feed entries
pub async fn fetch_recent_activity(size: u32) -> Result<Vec<Notification>, ApiError> {
    let envelope: ApiEnvelope<PagePayload<Notification>> =
        put_json("notification/all", &ActivityRequest::latest(size)).await?;
    Ok(envelope.data.data)
}

/// Row count of a list endpoint, read from the `total` of a one-row page
pub async fn fetch_total(endpoint: &'static str) -> Result<u64, ApiError> {
    let source = HttpPageSource::<Value>::new(endpoint);
    let page = source.fetch_page(&ListRequest::first_page(1)).await?;
    Ok(page.total_count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activity_request_starts_at_page_zero() {
        let body = serde_json::to_value(ActivityRequest::latest(10)).unwrap();
        assert_eq!(body, serde_json::json!({ "page": 0, "size": 10 }));
    }
}
