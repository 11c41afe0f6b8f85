//! PageFrame — standard root wrapper for every console section.
//!
//! Sets two metadata attributes on the root DOM element:
//!   - `id`                 — `"{entity}--{category}"`, e.g. `"a002_vendor--list"`
//!   - `data-page-category` — one of the PAGE_CAT_* constants
//!
//! The entity part matches the `domain/` directory of the page, so an id
//! copied from the DOM inspector leads straight to its source.

use leptos::prelude::*;

/// Table with filters and pagination
pub const PAGE_CAT_LIST: &str = "list";

/// Cards and summary widgets
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

/// Free-form page (card grids, wizards)
pub const PAGE_CAT_CUSTOM: &str = "custom";

/// Validate that a page id matches the `{entity}--{category}` format.
pub fn is_valid_page_id(id: &str) -> bool {
    match id.split_once("--") {
        Some((entity, category)) => !entity.is_empty() && !category.is_empty(),
        None => false,
    }
}

fn frame_class(category: &str) -> &'static str {
    match category {
        PAGE_CAT_DASHBOARD => "page page--dashboard",
        PAGE_CAT_CUSTOM => "page page--custom",
        _ => "page",
    }
}

#[component]
pub fn PageFrame(
    /// HTML id in format `{entity}--{category}`
    page_id: &'static str,
    /// One of the PAGE_CAT_* constants
    category: &'static str,
    children: Children,
) -> impl IntoView {
    if !is_valid_page_id(page_id) {
        log::warn!("page id '{}' does not follow entity--category", page_id);
    }

    view! {
        <div
            id=page_id
            class=frame_class(category)
            data-page-category=category
        >
            {children()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_id_format() {
        assert!(is_valid_page_id("a002_vendor--list"));
        assert!(!is_valid_page_id("a002_vendor"));
        assert!(!is_valid_page_id("--list"));
        assert!(!is_valid_page_id("a002_vendor--"));
    }

    #[test]
    fn test_frame_class() {
        assert_eq!(frame_class(PAGE_CAT_LIST), "page");
        assert_eq!(frame_class(PAGE_CAT_DASHBOARD), "page page--dashboard");
        assert_eq!(frame_class("unknown"), "page");
    }
}
