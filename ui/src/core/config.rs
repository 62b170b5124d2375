//! Runtime configuration read from the host page.
//!
//! The page may embed
//! `<script type="application/json" id="dashboard-config">{...}</script>`;
//! every field is optional.

use dioxus::logger::tracing;
use serde::{Deserialize, Serialize};

use super::alerts::{AlertBanner, Severity, ALERT_DISPLAY_MS, ALERT_FADE_MS};
use super::forms::SUBMIT_REVERT_MS;
use super::theme::{DEFAULT_STORAGE_KEY, THEME_SETTLE_MS};

pub const CONFIG_ELEMENT_ID: &str = "dashboard-config";

#[cfg(target_arch = "wasm32")]
const DEFAULT_API_BASE: &str = "";
#[cfg(not(target_arch = "wasm32"))]
const DEFAULT_API_BASE: &str = "http://127.0.0.1:5000";

/// A server-side flash message shown as a banner at load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlashMessage {
    #[serde(default)]
    pub severity: Severity,
    pub message: String,
}

impl FlashMessage {
    pub fn to_banner(&self) -> AlertBanner {
        AlertBanner::new(self.message.clone(), self.severity)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub api_base: String,
    pub storage_key: String,
    pub theme_settle_ms: u64,
    pub alert_display_ms: u64,
    pub alert_fade_ms: u64,
    pub submit_revert_ms: u64,
    pub flash: Vec<FlashMessage>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            theme_settle_ms: THEME_SETTLE_MS,
            alert_display_ms: ALERT_DISPLAY_MS,
            alert_fade_ms: ALERT_FADE_MS,
            submit_revert_ms: SUBMIT_REVERT_MS,
            flash: Vec::new(),
        }
    }
}

impl DashboardConfig {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Configuration embedded in the page, or defaults when absent or invalid.
    pub fn load() -> Self {
        let Some(raw) = super::platform::element_text(CONFIG_ELEMENT_ID) else {
            return Self::default();
        };
        if raw.trim().is_empty() {
            return Self::default();
        }
        match Self::from_json(&raw) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!(error = %err, "malformed dashboard config, using defaults");
                Self::default()
            }
        }
    }

    pub fn api_client(&self) -> api::ApiClient {
        api::ApiClient::new(self.api_base.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let config = DashboardConfig::from_json("{}").unwrap();
        assert_eq!(config, DashboardConfig::default());
        assert_eq!(config.storage_key, "darkMode");
        assert_eq!(config.alert_display_ms, 5_000);
        assert_eq!(config.alert_fade_ms, 300);
        assert_eq!(config.submit_revert_ms, 3_000);
        assert_eq!(config.theme_settle_ms, 100);
    }

    #[test]
    fn partial_document_overrides_named_fields() {
        let config = DashboardConfig::from_json(
            r#"{
                "api_base": "https://churn.example.com",
                "flash": [
                    {"severity": "success", "message": "Prediction saved"},
                    {"message": "Welcome"}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(config.api_base, "https://churn.example.com");
        assert_eq!(config.storage_key, DEFAULT_STORAGE_KEY);
        assert_eq!(config.flash.len(), 2);
        assert_eq!(config.flash[0].severity, Severity::Success);
        assert_eq!(config.flash[1].severity, Severity::Info);
        assert_eq!(config.flash[1].to_banner().message, "Welcome");
    }

    #[test]
    fn server_flash_categories_keep_the_document() {
        let config = DashboardConfig::from_json(
            r#"{
                "api_base": "https://churn.example.com",
                "flash": [
                    {"severity": "error", "message": "Prediction not found"},
                    {"severity": "message", "message": "Welcome"},
                    {"severity": "notice", "message": "Maintenance tonight"}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(config.api_base, "https://churn.example.com");
        let severities: Vec<Severity> = config.flash.iter().map(|f| f.severity).collect();
        assert_eq!(
            severities,
            vec![Severity::Danger, Severity::Info, Severity::Info]
        );
        assert_eq!(
            config.flash[0].to_banner().class_name(),
            "alert alert-danger alert-dismissible fade show"
        );
    }

    #[test]
    fn malformed_document_is_an_error() {
        assert!(DashboardConfig::from_json("{\"flash\": 3}").is_err());
        assert!(DashboardConfig::from_json("not json").is_err());
    }

    #[test]
    fn load_without_host_page_uses_defaults() {
        assert_eq!(DashboardConfig::load(), DashboardConfig::default());
    }
}
