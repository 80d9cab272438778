// ============================================================================
// CONFIG - Compile-time application configuration
// ============================================================================
// Values come from `option_env!`; build.rs forwards `.env` entries so a local
// `.env` file is enough to point the portal at another backend.
// ============================================================================

use serde::{Deserialize, Serialize};

const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api/v1";
const DEFAULT_CALLING_CODE: &str = "234";
const DEFAULT_PAYMENT_CALLBACK_URL: &str = "http://localhost:8080/#/dashboard";
const DEFAULT_TIMEOUT_SECONDS: u32 = 30;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_base_url: String,
    /// Sent as `X-Tenant-Domain` when set
    pub tenant_domain: Option<String>,
    /// Calling code without the leading `+`
    pub country_calling_code: String,
    pub payment_callback_url: String,
    pub network_timeout_seconds: u32,
    pub environment: String,
    pub enable_logging: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            tenant_domain: None,
            country_calling_code: DEFAULT_CALLING_CODE.to_string(),
            payment_callback_url: DEFAULT_PAYMENT_CALLBACK_URL.to_string(),
            network_timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            environment: "development".to_string(),
            enable_logging: true,
        }
    }
}

impl AppConfig {
    /// Load configuration from compile-time environment variables
    pub fn from_env() -> Self {
        Self {
            api_base_url: option_env!("API_BASE_URL")
                .unwrap_or(DEFAULT_API_BASE_URL)
                .trim_end_matches('/')
                .to_string(),
            tenant_domain: option_env!("TENANT_DOMAIN")
                .map(str::trim)
                .filter(|domain| !domain.is_empty())
                .map(str::to_string),
            country_calling_code: option_env!("COUNTRY_CALLING_CODE")
                .unwrap_or(DEFAULT_CALLING_CODE)
                .trim_start_matches('+')
                .to_string(),
            payment_callback_url: option_env!("PAYMENT_CALLBACK_URL")
                .unwrap_or(DEFAULT_PAYMENT_CALLBACK_URL)
                .to_string(),
            network_timeout_seconds: option_env!("NETWORK_TIMEOUT_SECONDS")
                .unwrap_or("30")
                .parse()
                .unwrap_or(DEFAULT_TIMEOUT_SECONDS),
            environment: option_env!("ENVIRONMENT")
                .unwrap_or("development")
                .to_string(),
            enable_logging: option_env!("ENABLE_LOGGING")
                .unwrap_or("true")
                .parse()
                .unwrap_or(true),
        }
    }

    /// Absolute URL for an API path such as `/auth/login/`
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_base_url, path.trim_start_matches('/'))
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Console log level: debug in development, info in production, errors only when disabled
    pub fn log_level(&self) -> log::Level {
        match (self.enable_logging, self.is_production()) {
            (false, _) => log::Level::Error,
            (true, true) => log::Level::Info,
            (true, false) => log::Level::Debug,
        }
    }

    pub fn timeout_millis(&self) -> u32 {
        self.network_timeout_seconds.saturating_mul(1000)
    }
}

lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_without_double_slash() {
        let config = AppConfig {
            api_base_url: "https://api.example.org/v1".to_string(),
            ..AppConfig::default()
        };
        assert_eq!(config.endpoint("/auth/login/"), "https://api.example.org/v1/auth/login/");
        assert_eq!(config.endpoint("ask/"), "https://api.example.org/v1/ask/");
    }

    #[test]
    fn disabled_logging_only_reports_errors() {
        let config = AppConfig {
            enable_logging: false,
            ..AppConfig::default()
        };
        assert_eq!(config.log_level(), log::Level::Error);
        assert_eq!(AppConfig::default().log_level(), log::Level::Debug);
    }
}
