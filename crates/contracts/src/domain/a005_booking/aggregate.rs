use crate::domain::common::{deserialize_id, ContactDetails, NamedRef};
use crate::enums::BookingStatus;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Booking row of `booking/all`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default = "default_status")]
    pub status: BookingStatus,
    #[serde(default)]
    pub product: Option<NamedRef>,
    #[serde(default)]
    pub location: Option<NamedRef>,
    #[serde(default)]
    pub user_contact_details: Option<ContactDetails>,
    #[serde(default)]
    pub vendor_contact_details: Option<ContactDetails>,
    /// ISO timestamp
    #[serde(default)]
    pub booking_date: Option<String>,
    #[serde(default)]
    pub booking_day: Option<String>,
    #[serde(default)]
    pub time_slot: Option<TimeSlot>,
    #[serde(default)]
    pub reschedule_time: Option<String>,
    #[serde(default)]
    pub user_comment: Option<String>,
    #[serde(default)]
    pub vendor_comment: Option<String>,
    #[serde(default)]
    pub admin_comment: Option<String>,
    #[serde(default)]
    pub created_time_stamp: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSlot {
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub end_time: Option<String>,
}

fn default_status() -> BookingStatus {
    BookingStatus::Pending
}

fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|d| d.with_timezone(&Utc))
        .ok()
        .or_else(|| {
            chrono::NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
                .ok()
                .map(|naive| naive.and_utc())
        })
}

impl Booking {
    pub fn booking_day_date(&self) -> Option<NaiveDate> {
        self.booking_date
            .as_deref()
            .and_then(parse_timestamp)
            .map(|d| d.date_naive())
    }

    /// `dd.mm.yyyy` or a dash
    pub fn date_caption(&self) -> String {
        self.booking_day_date()
            .map(|d| d.format("%d.%m.%Y").to_string())
            .unwrap_or_else(|| "—".to_string())
    }

    /// `hh:mm AM/PM` of the slot start, falling back to the booking timestamp
    pub fn time_caption(&self) -> String {
        self.time_slot
            .as_ref()
            .and_then(|slot| slot.start_time.as_deref())
            .or(self.booking_date.as_deref())
            .and_then(parse_timestamp)
            .map(|d| d.format("%I:%M %p").to_string())
            .unwrap_or_else(|| "—".to_string())
    }

    pub fn product_name(&self) -> &str {
        self.product.as_ref().map(NamedRef::display_name).unwrap_or("—")
    }

    pub fn location_name(&self) -> &str {
        self.location.as_ref().map(NamedRef::display_name).unwrap_or("—")
    }

    pub fn user_name(&self) -> &str {
        self.user_contact_details
            .as_ref()
            .map(ContactDetails::display_name)
            .unwrap_or("—")
    }

    pub fn vendor_name(&self) -> &str {
        self.vendor_contact_details
            .as_ref()
            .map(ContactDetails::display_name)
            .unwrap_or("—")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_captions_prefer_time_slot() {
        let booking: Booking = serde_json::from_value(json!({
            "id": 5,
            "status": "confirmed",
            "bookingDate": "2025-03-07T06:00:00Z",
            "timeSlot": { "startTime": "2025-03-07T14:30:00Z" }
        }))
        .unwrap();
        assert_eq!(booking.status, BookingStatus::Confirmed);
        assert_eq!(booking.date_caption(), "07.03.2025");
        assert_eq!(booking.time_caption(), "02:30 PM");
    }

    #[test]
    fn test_captions_without_dates() {
        let booking: Booking = serde_json::from_value(json!({ "id": "b-1" })).unwrap();
        assert_eq!(booking.date_caption(), "—");
        assert_eq!(booking.time_caption(), "—");
        assert_eq!(booking.user_name(), "—");
        assert_eq!(booking.status, BookingStatus::Pending);
    }

    #[test]
    fn test_naive_timestamp_is_accepted() {
        let booking: Booking = serde_json::from_value(json!({
            "id": "b-2",
            "bookingDate": "2025-11-05T16:52:58.585"
        }))
        .unwrap();
        assert_eq!(booking.booking_day_date(), NaiveDate::from_ymd_opt(2025, 11, 5));
    }

    #[test]
    fn test_nested_refs_accept_numeric_ids() {
        let booking: Booking = serde_json::from_value(json!({
            "id": "b-3",
            "product": { "id": 41, "name": "Teak sofa" },
            "location": { "id": 9, "name": "Goa" }
        }))
        .unwrap();
        assert_eq!(booking.product_name(), "Teak sofa");
        assert_eq!(booking.location_name(), "Goa");
    }

}
