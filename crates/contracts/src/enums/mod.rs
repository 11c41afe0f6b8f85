pub mod booking_status;
pub mod product_status;
pub mod user_status;
pub mod vendor_status;

pub use booking_status::BookingStatus;
pub use product_status::ProductStatus;
pub use user_status::UserStatus;
pub use vendor_status::VendorStatus;

/// Status enum that can drive the status filter of an admin list.
///
/// `all()` lists the selectable variants in display order; the `Unknown`
/// fallback some enums carry is never part of it.
pub trait ListStatus: Copy + Eq + Send + Sync + 'static {
    /// Upper-case value the backend expects in the `status` field
    fn wire_value(&self) -> &'static str;

    /// Human-readable label for selects and badges
    fn label(&self) -> &'static str;

    /// Selectable variants in display order
    fn all() -> &'static [Self];

    /// Case-insensitive lookup by wire value
    fn from_wire(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::all()
            .iter()
            .copied()
            .find(|status| status.wire_value().eq_ignore_ascii_case(value))
    }

    /// CSS modifier for the status badge
    fn badge_class(&self) -> &'static str;
}

/// Count `items` per selectable status, in `S::all()` order
pub fn count_by_status<S, T, F>(items: &[T], status_of: F) -> Vec<(S, usize)>
where
    S: ListStatus,
    F: Fn(&T) -> S,
{
    S::all()
        .iter()
        .map(|status| {
            let count = items.iter().filter(|item| status_of(item) == *status).count();
            (*status, count)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_wire_ignores_case() {
        assert_eq!(BookingStatus::from_wire("confirmed"), Some(BookingStatus::Confirmed));
        assert_eq!(VendorStatus::from_wire(" Pending "), Some(VendorStatus::Pending));
        assert_eq!(UserStatus::from_wire("banned"), None);
    }

    #[test]
    fn test_all_excludes_unknown() {
        assert!(!ProductStatus::all().contains(&ProductStatus::Unknown));
        assert_eq!(BookingStatus::all().len(), 4);
    }

    #[test]
    fn test_count_by_status() {
        let statuses = [VendorStatus::Approved, VendorStatus::Pending, VendorStatus::Approved];
        let counts = count_by_status(&statuses, |s| *s);
        assert_eq!(counts[0], (VendorStatus::Pending, 1));
        assert_eq!(counts[1], (VendorStatus::Approved, 2));
        assert_eq!(counts[3], (VendorStatus::Disabled, 0));
    }
}
