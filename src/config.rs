//! Client Configuration
//!
//! Values baked in at build time through environment variables.

use std::str::FromStr;

/// Path of the items collection on the backend
pub const ITEMS_PATH: &str = "/v1/items";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Backend origin, empty for same-origin requests
    pub base_url: String,
    pub log_level: log::Level,
}

impl ApiConfig {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            log_level: log::Level::Info,
        }
    }

    /// Read `ITEMS_API_BASE_URL` and `ITEMS_LOG_LEVEL` as set when the app was built.
    pub fn from_env() -> Self {
        Self::from_values(option_env!("ITEMS_API_BASE_URL"), option_env!("ITEMS_LOG_LEVEL"))
    }

    fn from_values(base_url: Option<&str>, log_level: Option<&str>) -> Self {
        let mut config = Self::new(base_url.unwrap_or_default());
        if let Some(level) = log_level.and_then(|raw| log::Level::from_str(raw.trim()).ok()) {
            config.log_level = level;
        }
        config
    }

    /// Full URL of the items collection endpoint
    pub fn collection_url(&self) -> String {
        format!("{}{}", self.base_url, ITEMS_PATH)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new("")
    }
}
