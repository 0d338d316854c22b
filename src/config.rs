//! Runtime configuration.
//!
//! Read once at start-up from an inline
//! `<script id="app-config" type="application/json">` element; anything
//! missing falls back to the defaults below.

use serde::{Deserialize, Serialize};

use crate::domain::errors::AppError;
use crate::domain::logging::LogLevel;

pub const CONFIG_ELEMENT_ID: &str = "app-config";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    #[serde(default = "default_log_level")]
    pub log_level: LogLevel,

    #[serde(default = "default_toast_duration_ms")]
    pub toast_duration_ms: u32,

    #[serde(default = "default_suggestions")]
    pub suggestions: Vec<String>,
}

fn default_api_base_url() -> String {
    // FUND_TRACKER_API_URL=https://host/api at build time overrides the default
    option_env!("FUND_TRACKER_API_URL")
        .unwrap_or("http://localhost:5000/api")
        .to_string()
}

fn default_log_level() -> LogLevel {
    if cfg!(debug_assertions) {
        LogLevel::Debug
    } else {
        LogLevel::Info
    }
}

fn default_toast_duration_ms() -> u32 {
    4000
}

fn default_suggestions() -> Vec<String> {
    ["SBI", "HDFC", "ICICI", "Axis", "Kotak"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            api_base_url: default_api_base_url(),
            log_level: default_log_level(),
            toast_duration_ms: default_toast_duration_ms(),
            suggestions: default_suggestions(),
        }
    }
}

impl AppConfig {
    pub fn from_json_str(json: &str) -> Result<Self, AppError> {
        serde_json::from_str(json).map_err(|e| AppError::Configuration(format!("Invalid app config: {e}")))
    }

    /// Configuration embedded in the page, `Ok(None)` when there is none.
    pub fn from_document() -> Result<Option<Self>, AppError> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| AppError::Browser("Document not available".to_string()))?;

        let Some(element) = document.get_element_by_id(CONFIG_ELEMENT_ID) else {
            return Ok(None);
        };
        let text = element.text_content().unwrap_or_default();
        if text.trim().is_empty() {
            return Ok(None);
        }
        Self::from_json_str(&text).map(Some)
    }
}
