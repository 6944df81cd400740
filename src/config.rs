//! Application Configuration
//!
//! Compile-time defaults, handed to components through context.

pub const DEFAULT_API_BASE: &str = "https://openapi.programming-hero.com/api";
pub const DEFAULT_FILTER_DELAY_MS: u32 = 300;

/// Currency prefix for every rendered amount
pub const CURRENCY_SYMBOL: &str = "৳";
/// Card descriptions are cut to this many characters
pub const DESCRIPTION_PREVIEW_CHARS: usize = 120;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Base URL of the catalog API, without trailing slash
    pub api_base: String,
    /// Artificial delay before a category filter is applied
    pub filter_delay_ms: u32,
    pub log_level: log::Level,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            filter_delay_ms: DEFAULT_FILTER_DELAY_MS,
            log_level: if cfg!(debug_assertions) {
                log::Level::Debug
            } else {
                log::Level::Info
            },
        }
    }
}

impl AppConfig {
    pub fn categories_url(&self) -> String {
        format!("{}/categories", self.api_base.trim_end_matches('/'))
    }

    pub fn plants_url(&self) -> String {
        format!("{}/plants", self.api_base.trim_end_matches('/'))
    }
}
