//! Runtime configuration read from `window.ENV`
//!
//! `index.html` (or the container serving it) may define
//!
//! ```js
//! window.ENV = { COMPANY_NAME: "...", STATION_CODE: "...", LOGIN_DELAY_MS: 800 };
//! ```
//!
//! Missing or malformed keys fall back to the defaults below.

use leptos::*;

const DEFAULT_COMPANY_NAME: &str = "DSP Manager";
const DEFAULT_STATION_CODE: &str = "DLA7";
const DEFAULT_LOGIN_DELAY_MS: u32 = 800;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub company_name: String,
    pub station_code: String,
    /// How long the login button spins before signing in
    pub login_delay_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            company_name: DEFAULT_COMPANY_NAME.to_string(),
            station_code: DEFAULT_STATION_CODE.to_string(),
            login_delay_ms: DEFAULT_LOGIN_DELAY_MS,
        }
    }
}

impl AppConfig {
    /// Load configuration from `window.ENV`, falling back to defaults
    pub fn from_env() -> Self {
        Self::from_lookup(read_env_key)
    }

    /// Build a config from any key lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let login_delay_ms = match non_empty("LOGIN_DELAY_MS") {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                log::warn!("Ignoring invalid LOGIN_DELAY_MS '{}'", raw);
                defaults.login_delay_ms
            }),
            None => defaults.login_delay_ms,
        };

        Self {
            company_name: non_empty("COMPANY_NAME").unwrap_or(defaults.company_name),
            station_code: non_empty("STATION_CODE").unwrap_or(defaults.station_code),
            login_delay_ms,
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn read_env_key(key: &str) -> Option<String> {
    use wasm_bindgen::JsValue;

    let window = web_sys::window()?;
    let env = js_sys::Reflect::get(&window, &JsValue::from_str("ENV")).ok()?;
    if env.is_undefined() || env.is_null() {
        return None;
    }

    let value = js_sys::Reflect::get(&env, &JsValue::from_str(key)).ok()?;
    value
        .as_string()
        .or_else(|| value.as_f64().map(|n| n.to_string()))
}

#[cfg(not(target_arch = "wasm32"))]
fn read_env_key(_key: &str) -> Option<String> {
    None
}

/// Make the configuration available to every component
pub fn provide_config(config: AppConfig) {
    provide_context(config);
}

/// Hook to access the configuration
pub fn use_config() -> AppConfig {
    use_context::<AppConfig>().expect("AppConfig must be provided by a parent component")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_env() {
        assert_eq!(AppConfig::from_env(), AppConfig::default());
        assert_eq!(AppConfig::default().login_delay_ms, 800);
    }

    #[test]
    fn test_env_overrides() {
        let config = AppConfig::from_lookup(lookup(&[
            ("COMPANY_NAME", "Swift Route Logistics"),
            ("STATION_CODE", "DAU5"),
            ("LOGIN_DELAY_MS", "0"),
        ]));
        assert_eq!(config.company_name, "Swift Route Logistics");
        assert_eq!(config.station_code, "DAU5");
        assert_eq!(config.login_delay_ms, 0);
    }

    #[test]
    fn test_invalid_or_blank_values_fall_back() {
        let config = AppConfig::from_lookup(lookup(&[
            ("COMPANY_NAME", "  "),
            ("LOGIN_DELAY_MS", "soon"),
        ]));
        assert_eq!(config, AppConfig::default());
    }
}
