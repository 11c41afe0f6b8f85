use crate::domain::common::deserialize_id;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Activity-feed entry of `notification/all`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default)]
    pub target_id: Option<String>,
    #[serde(default)]
    pub target_type: Option<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub created_time_stamp: Option<String>,
    #[serde(default)]
    pub read: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Booking,
    Vendor,
    Product,
    Discount,
    Payment,
    System,
    Other,
}

impl NotificationKind {
    pub fn parse(value: &str) -> Self {
        match value.trim().to_uppercase().as_str() {
            "BOOKING" => NotificationKind::Booking,
            "VENDOR" => NotificationKind::Vendor,
            "PRODUCT" => NotificationKind::Product,
            "DISCOUNT" => NotificationKind::Discount,
            "PAYMENT" => NotificationKind::Payment,
            "SYSTEM" => NotificationKind::System,
            _ => NotificationKind::Other,
        }
    }

    /// Accent colour name used by the activity feed
    pub fn color(&self) -> &'static str {
        match self {
            NotificationKind::Booking => "blue",
            NotificationKind::Vendor => "green",
            NotificationKind::Product => "purple",
            NotificationKind::Discount => "orange",
            NotificationKind::Payment => "yellow",
            NotificationKind::System => "gray",
            NotificationKind::Other => "slate",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            NotificationKind::Booking => "calendar",
            NotificationKind::Vendor => "building",
            NotificationKind::Product => "package",
            NotificationKind::Discount => "tag",
            NotificationKind::Payment => "credit-card",
            NotificationKind::System => "settings",
            NotificationKind::Other => "bell",
        }
    }
}

impl Notification {
    pub fn kind(&self) -> NotificationKind {
        NotificationKind::parse(&self.kind)
    }

    /// "Just now", "5m ago", "3h ago", "2d ago", or the date for older entries
    pub fn relative_time(&self, now: DateTime<Utc>) -> String {
        let Some(created) = self
            .created_time_stamp
            .as_deref()
            .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
            .map(|d| d.with_timezone(&Utc))
        else {
            return String::new();
        };

        let minutes = (now - created).num_minutes();
        if minutes < 1 {
            "Just now".to_string()
        } else if minutes < 60 {
            format!("{}m ago", minutes)
        } else if minutes < 1440 {
            format!("{}h ago", minutes / 60)
        } else if minutes / 1440 < 7 {
            format!("{}d ago", minutes / 1440)
        } else {
            created.format("%d.%m.%Y").to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(created: &str) -> Notification {
        serde_json::from_value(serde_json::json!({
            "id": "n1",
            "type": "booking",
            "createdTimeStamp": created
        }))
        .unwrap()
    }

    #[test]
    fn test_relative_time_buckets() {
        let now = Utc.with_ymd_and_hms(2025, 5, 20, 12, 0, 0).unwrap();
        assert_eq!(at("2025-05-20T11:59:30Z").relative_time(now), "Just now");
        assert_eq!(at("2025-05-20T11:15:00Z").relative_time(now), "45m ago");
        assert_eq!(at("2025-05-20T07:00:00Z").relative_time(now), "5h ago");
        assert_eq!(at("2025-05-17T12:00:00Z").relative_time(now), "3d ago");
        assert_eq!(at("2025-04-01T12:00:00Z").relative_time(now), "01.04.2025");
    }

    #[test]
    fn test_kind_parsing() {
        assert_eq!(at("2025-05-20T11:59:30Z").kind(), NotificationKind::Booking);
        assert_eq!(NotificationKind::parse("whatever").color(), "slate");
    }
}
