//! Runtime settings baked in at build time.

/// Base URL for the configuration and registration services. Empty means
/// same origin (the dev server proxies `/api`).
pub const API_BASE_ENV: Option<&str> = option_env!("BOT_SETUP_API_BASE");

pub const ASSISTANT_PATH: &str = "/api/chat";
pub const REGISTER_PATH: &str = "/api/auth/register/";

const DEFAULT_ASSETS: [&str; 8] = ["BTC", "ETH", "SOL", "BNB", "XRP", "ADA", "DOGE", "AVAX"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base_url: String,
    /// Assets the setup wizard offers.
    pub assets: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: API_BASE_ENV.unwrap_or_default().trim_end_matches('/').to_string(),
            assets: DEFAULT_ASSETS.iter().map(|a| a.to_string()).collect(),
        }
    }
}

impl AppConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.api_base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn assistant_url(&self) -> String {
        format!("{}{}", self.api_base_url, ASSISTANT_PATH)
    }

    pub fn register_url(&self) -> String {
        format!("{}{}", self.api_base_url, REGISTER_PATH)
    }

    pub fn default_asset(&self) -> String {
        self.assets.first().cloned().unwrap_or_default()
    }
}
