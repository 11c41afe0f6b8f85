use super::ListStatus;
use serde::{Deserialize, Serialize};

/// Booking lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Completed,
    Cancelled,
    /// Anything the backend sends that this console does not know
    Unknown,
}

impl ListStatus for BookingStatus {
    fn wire_value(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "PENDING",
            BookingStatus::Confirmed => "CONFIRMED",
            BookingStatus::Completed => "COMPLETED",
            BookingStatus::Cancelled => "CANCELLED",
            BookingStatus::Unknown => "UNKNOWN",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "Pending",
            BookingStatus::Confirmed => "Confirmed",
            BookingStatus::Completed => "Completed",
            BookingStatus::Cancelled => "Cancelled",
            BookingStatus::Unknown => "Unknown",
        }
    }

    fn all() -> &'static [Self] {
        &[
            BookingStatus::Pending,
            BookingStatus::Confirmed,
            BookingStatus::Completed,
            BookingStatus::Cancelled,
        ]
    }

    fn badge_class(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "badge--warning",
            BookingStatus::Confirmed => "badge--success",
            BookingStatus::Completed => "badge--info",
            BookingStatus::Cancelled => "badge--danger",
            BookingStatus::Unknown => "badge--neutral",
        }
    }
}

impl From<String> for BookingStatus {
    fn from(value: String) -> Self {
        BookingStatus::from_wire(&value).unwrap_or(BookingStatus::Unknown)
    }
}

impl From<BookingStatus> for String {
    fn from(value: BookingStatus) -> Self {
        value.wire_value().to_string()
    }
}
