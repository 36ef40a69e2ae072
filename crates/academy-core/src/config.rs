//! Site and server configuration.

use serde::{Deserialize, Serialize};

/// Application-level constants.
pub struct AppConfig;

impl AppConfig {
    pub const APP_NAME: &'static str = "Micro-Academy";
    pub const DEFAULT_HOST: &'static str = "127.0.0.1";
    pub const DEFAULT_PORT: u16 = 4600;
}

/// Site-wide settings threaded through the resolver and shell.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    /// Name shown in the page header and titles.
    pub site_name: String,
    /// Locale used for routes without an explicit locale segment.
    pub default_locale: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_name: AppConfig::APP_NAME.to_string(),
            default_locale: "en".to_string(),
        }
    }
}
