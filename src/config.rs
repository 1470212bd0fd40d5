//! Build-time Configuration
//!
//! Values are baked in by `trunk build` through environment variables:
//! `TODO_API_BASE_URL`, `TODO_TENANT_ID`, `TODO_PAGE_SIZE`, `TODO_LOG_LEVEL`.

use std::str::FromStr;

use tracing::Level;

pub const DEFAULT_TENANT_ID: &str = "demo";
pub const DEFAULT_PAGE_SIZE: u32 = 100;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// API host without trailing slash; empty means same origin
    pub api_base_url: String,
    /// Namespace every item request is scoped to
    pub tenant_id: String,
    /// Fixed page size for the list view
    pub page_size: u32,
    pub log_level: Level,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_values(
            option_env!("TODO_API_BASE_URL"),
            option_env!("TODO_TENANT_ID"),
            option_env!("TODO_PAGE_SIZE"),
            option_env!("TODO_LOG_LEVEL"),
        )
    }

    fn from_values(
        api_base_url: Option<&str>,
        tenant_id: Option<&str>,
        page_size: Option<&str>,
        log_level: Option<&str>,
    ) -> Self {
        let tenant_id = tenant_id
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .unwrap_or(DEFAULT_TENANT_ID);

        Self {
            api_base_url: api_base_url.unwrap_or_default().trim().trim_end_matches('/').to_string(),
            tenant_id: tenant_id.to_string(),
            page_size: page_size
                .and_then(|s| s.trim().parse().ok())
                .filter(|&n| n > 0)
                .unwrap_or(DEFAULT_PAGE_SIZE),
            log_level: log_level
                .and_then(|s| Level::from_str(s.trim()).ok())
                .unwrap_or(Level::INFO),
        }
    }

    /// Same-origin deployments leave the base URL empty; reqwest needs an
    /// absolute URL, so fall back to the page origin.
    pub fn with_origin(mut self, origin: &str) -> Self {
        if self.api_base_url.is_empty() {
            self.api_base_url = origin.trim_end_matches('/').to_string();
        }
        self
    }
}
