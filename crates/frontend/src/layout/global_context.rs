use crate::layout::sections::{is_known_section, DEFAULT_SECTION};
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    /// Key of the section shown in the content area
    pub active: RwSignal<String>,
    pub left_open: RwSignal<bool>,
}

/// Section named by `?active=` in a location search string, if it is known
pub fn active_from_query(search: &str) -> Option<String> {
    let params: HashMap<String, String> =
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
    params
        .get("active")
        .filter(|key| is_known_section(key))
        .cloned()
}

/// `?active=<key>` for the URL bar
pub fn query_for(active: &str) -> String {
    let query = serde_qs::to_string(&HashMap::from([("active".to_string(), active.to_string())]))
        .unwrap_or_default();
    format!("?{}", query)
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(DEFAULT_SECTION.to_string()),
            left_open: RwSignal::new(true),
        }
    }

    /// Take the initial section from the URL and keep the URL in sync with it
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        if let Some(active_key) = active_from_query(&search) {
            self.activate(&active_key);
        }

        let this = *self;
        Effect::new(move |_| {
            let new_url = this.active.with(|key| query_for(key));
            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }

    pub fn activate(&self, key: &str) {
        leptos::logging::log!("activate section: '{}'", key);
        if self.active.with_untracked(|active| active != key) {
            self.active.set(key.to_string());
        }
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_from_query() {
        assert_eq!(active_from_query("?active=a005_booking").as_deref(), Some("a005_booking"));
        assert_eq!(active_from_query("active=a002_vendor&x=1").as_deref(), Some("a002_vendor"));
        assert_eq!(active_from_query("?active=unknown"), None);
        assert_eq!(active_from_query(""), None);
    }

    #[test]
    fn test_query_round_trip() {
        assert_eq!(query_for("a003_user"), "?active=a003_user");
        assert_eq!(active_from_query(&query_for("a003_user")).as_deref(), Some("a003_user"));
    }
}
