use anyhow::Context;
use contracts::shared::list_query::ListControllerConfig;
use once_cell::sync::OnceCell;
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ConsoleConfig {
    pub api: ApiConfig,
    pub lists: ListsConfig,
    pub notifications: NotificationsConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    /// Empty means "same host as the page, port 3000"
    #[serde(default)]
    pub base_url: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ListsConfig {
    pub debounce_ms: u64,
    pub booking_debounce_ms: u64,
    pub booking_page_size: u32,
    pub page_size: u32,
    pub pagination_window: u32,
    pub min_search_len: usize,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct NotificationsConfig {
    pub duration_ms: u64,
    pub recent_activity_size: u32,
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
base_url = ""

[lists]
debounce_ms = 300
booking_debounce_ms = 500
booking_page_size = 10000
page_size = 10
pagination_window = 3
min_search_len = 3

[notifications]
duration_ms = 3000
recent_activity_size = 10
"#;

static CONFIG: OnceCell<ConsoleConfig> = OnceCell::new();

/// Parse a configuration document
pub fn load_config_from(contents: &str) -> anyhow::Result<ConsoleConfig> {
    let config: ConsoleConfig =
        toml::from_str(contents).context("failed to parse console configuration")?;
    anyhow::ensure!(config.lists.page_size > 0, "lists.page_size must be positive");
    anyhow::ensure!(
        config.lists.pagination_window > 0,
        "lists.pagination_window must be positive"
    );
    Ok(config)
}

pub fn load_config() -> anyhow::Result<ConsoleConfig> {
    load_config_from(DEFAULT_CONFIG)
}

/// Install the configuration once at startup. Later calls keep the first value.
pub fn init_config(config: ConsoleConfig) {
    if CONFIG.set(config).is_err() {
        log::warn!("console configuration already installed, keeping the first one");
    }
}

/// Installed configuration, falling back to the embedded default
pub fn config() -> &'static ConsoleConfig {
    CONFIG.get_or_init(|| {
        load_config().unwrap_or_else(|err| {
            log::error!("embedded configuration is invalid: {:#}", err);
            ConsoleConfig::fallback()
        })
    })
}

impl ConsoleConfig {
    fn fallback() -> Self {
        Self {
            api: ApiConfig {
                base_url: String::new(),
            },
            lists: ListsConfig {
                debounce_ms: 300,
                booking_debounce_ms: 500,
                booking_page_size: 10_000,
                page_size: 10,
                pagination_window: 3,
                min_search_len: 3,
            },
            notifications: NotificationsConfig {
                duration_ms: 3000,
                recent_activity_size: 10,
            },
        }
    }
}

impl ListsConfig {
    /// Controller settings for an ordinary list
    pub fn controller(&self) -> ListControllerConfig {
        ListControllerConfig {
            debounce: Duration::from_millis(self.debounce_ms),
            min_search_len: 0,
        }
    }

    /// Controller settings for a list that ignores too-short searches
    pub fn controller_with_min_search(&self) -> ListControllerConfig {
        ListControllerConfig {
            min_search_len: self.min_search_len,
            ..self.controller()
        }
    }

    pub fn booking_controller(&self) -> ListControllerConfig {
        ListControllerConfig {
            debounce: Duration::from_millis(self.booking_debounce_ms),
            min_search_len: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = load_config().unwrap();
        assert_eq!(config.api.base_url, "");
        assert_eq!(config.lists.debounce_ms, 300);
        assert_eq!(config.lists.booking_debounce_ms, 500);
        assert_eq!(config.lists.page_size, 10);
        assert_eq!(config.lists.pagination_window, 3);
        assert_eq!(config.notifications.duration_ms, 3000);
    }

    #[test]
    fn test_default_matches_fallback() {
        assert_eq!(load_config().unwrap(), ConsoleConfig::fallback());
    }

    #[test]
    fn test_zero_page_size_is_rejected() {
        let contents = DEFAULT_CONFIG.replace("page_size = 10\n", "page_size = 0\n");
        assert!(load_config_from(&contents).is_err());
    }

    #[test]
    fn test_missing_section_is_an_error() {
        assert!(load_config_from("[api]\nbase_url = \"\"\n").is_err());
    }

    #[test]
    fn test_controller_settings() {
        let lists = load_config().unwrap().lists;
        assert_eq!(lists.controller().debounce, Duration::from_millis(300));
        assert_eq!(lists.controller().min_search_len, 0);
        assert_eq!(lists.controller_with_min_search().min_search_len, 3);
        assert_eq!(lists.booking_controller().debounce, Duration::from_millis(500));
    }
}
