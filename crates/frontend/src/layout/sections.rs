//! Section registry: the single place that maps a section key to its
//! sidebar entry and its page.

use crate::dashboards::OverviewDashboard;
use crate::domain::a001_category::ui::list::CategoryList;
use crate::domain::a002_vendor::ui::list::VendorList;
use crate::domain::a003_user::ui::list::UserList;
use crate::domain::a004_product::ui::list::ProductList;
use crate::domain::a005_booking::ui::list::BookingList;
use crate::domain::a006_location::ui::list::LocationList;
use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    pub key: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

pub const DEFAULT_SECTION: &str = "d400_overview";

/// Sidebar order
pub const SECTIONS: &[Section] = &[
    Section { key: "d400_overview", label: "Overview", icon: "overview" },
    Section { key: "a001_category", label: "Categories", icon: "categories" },
    Section { key: "a002_vendor", label: "Vendors", icon: "building" },
    Section { key: "a004_product", label: "Products", icon: "package" },
    Section { key: "a005_booking", label: "Bookings", icon: "calendar" },
    Section { key: "a003_user", label: "Users", icon: "users" },
    Section { key: "a006_location", label: "Locations", icon: "map-pin" },
];

pub fn is_known_section(key: &str) -> bool {
    SECTIONS.iter().any(|s| s.key == key)
}

/// Header title of a section; unknown keys fall back to the key itself
pub fn section_label(key: &str) -> String {
    SECTIONS
        .iter()
        .find(|s| s.key == key)
        .map(|s| s.label.to_string())
        .unwrap_or_else(|| key.to_string())
}

pub fn render_section(key: &str) -> AnyView {
    match key {
        "d400_overview" => view! { <OverviewDashboard /> }.into_any(),
        "a001_category" => view! { <CategoryList /> }.into_any(),
        "a002_vendor" => view! { <VendorList /> }.into_any(),
        "a003_user" => view! { <UserList /> }.into_any(),
        "a004_product" => view! { <ProductList /> }.into_any(),
        "a005_booking" => view! { <BookingList /> }.into_any(),
        "a006_location" => view! { <LocationList /> }.into_any(),
        _ => {
            log::warn!("unknown section '{}'", key);
            view! { <div class="page__placeholder">"Section not found"</div> }.into_any()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_are_unique_and_default_is_known() {
        assert!(is_known_section(DEFAULT_SECTION));
        for (i, section) in SECTIONS.iter().enumerate() {
            assert!(SECTIONS[i + 1..].iter().all(|s| s.key != section.key));
        }
    }

    #[test]
    fn test_section_label() {
        assert_eq!(section_label("a005_booking"), "Bookings");
        assert_eq!(section_label("zzz"), "zzz");
    }
}
