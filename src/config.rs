//! Runtime settings, embedded in `index.html` as
//! `<script id="client-config" type="application/json">`.

use serde::Deserialize;
use web_sys::window;

pub const CONFIG_ELEMENT_ID: &str = "client-config";

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct ClientConfig {
    /// Prefix for every API URL; empty means same origin.
    pub api_base: String,
    pub signup_banner_ms: u64,
    pub unregister_banner_ms: u64,
    /// `tracing_subscriber::EnvFilter` directive, e.g. `"debug"`.
    pub log_level: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            signup_banner_ms: 5000,
            unregister_banner_ms: 4000,
            log_level: "info".to_string(),
        }
    }
}

impl ClientConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        if json.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_str(json)
    }

    /// A page without the config block gets the defaults.
    pub fn from_page() -> Result<Self, serde_json::Error> {
        let json = window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content())
            .unwrap_or_default();
        Self::from_json(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_block_gives_defaults() {
        assert_eq!(ClientConfig::from_json("  \n").unwrap(), ClientConfig::default());
    }

    #[test]
    fn partial_block_fills_the_rest() {
        let cfg = ClientConfig::from_json(r#"{"api_base": "https://api.example.org"}"#).unwrap();
        assert_eq!(cfg.api_base, "https://api.example.org");
        assert_eq!(cfg.signup_banner_ms, 5000);
        assert_eq!(cfg.unregister_banner_ms, 4000);
        assert_eq!(cfg.log_level, "info");
    }

    #[test]
    fn malformed_block_is_an_error() {
        assert!(ClientConfig::from_json("{api_base:").is_err());
    }
}
