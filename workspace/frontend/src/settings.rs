use log::Level;
use wasm_bindgen::JsValue;
use web_sys::window;

const DEFAULT_API_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";

/// Global application settings
#[derive(Debug, Clone)]
pub struct AppSettings {
    /// Weather service base URL (e.g., "https://api.openweathermap.org/data/2.5")
    pub api_base_url: String,

    /// OpenWeatherMap API key, required by every endpoint
    pub api_key: String,

    /// Default log level for the application
    pub log_level: Level,

    /// Request timeout in milliseconds
    pub request_timeout_ms: u32,

    /// Enable debug mode
    pub debug_mode: bool,

    /// Toast notification duration in milliseconds
    pub toast_duration_ms: u32,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            api_key: option_env!("OPENWEATHER_API_KEY").unwrap_or_default().to_string(),
            log_level: Level::Info,
            request_timeout_ms: 10_000,
            debug_mode: false,
            toast_duration_ms: 5000,
        }
    }
}

impl AppSettings {
    /// Create settings from the build environment and window location
    pub fn from_environment() -> Self {
        let mut settings = Self::default();

        if let Some(window) = window() {
            if let Ok(hostname) = window.location().hostname() {
                settings.debug_mode = hostname == "localhost" || hostname == "127.0.0.1";

                // In development, use more verbose logging
                if settings.debug_mode {
                    settings.log_level = Level::Debug;
                }
            }

            // Try to read from localStorage for custom settings
            if let Ok(Some(storage)) = window.local_storage() {
                if let Ok(Some(base_url)) = storage.get_item("skycast_api_base_url") {
                    settings.api_base_url = base_url.trim_end_matches('/').to_string();
                }

                if let Ok(Some(api_key)) = storage.get_item("skycast_api_key") {
                    if !api_key.trim().is_empty() {
                        settings.api_key = api_key.trim().to_string();
                    }
                }

                if let Ok(Some(log_level)) = storage.get_item("skycast_log_level") {
                    settings.log_level = parse_level(&log_level).unwrap_or(settings.log_level);
                }

                if let Ok(Some(timeout)) = storage.get_item("skycast_request_timeout_ms") {
                    if let Ok(timeout_val) = timeout.parse::<u32>() {
                        settings.request_timeout_ms = timeout_val;
                    }
                }

                if let Ok(Some(duration)) = storage.get_item("skycast_toast_duration_ms") {
                    if let Ok(duration_val) = duration.parse::<u32>() {
                        settings.toast_duration_ms = duration_val;
                    }
                }
            }
        }

        settings
    }

    /// Save settings to localStorage
    pub fn save_to_storage(&self) -> Result<(), JsValue> {
        if let Some(window) = window() {
            if let Some(storage) = window.local_storage()? {
                storage.set_item("skycast_api_base_url", &self.api_base_url)?;
                storage.set_item("skycast_api_key", &self.api_key)?;
                storage.set_item("skycast_log_level", &self.log_level.as_str().to_lowercase())?;
                storage.set_item("skycast_request_timeout_ms", &self.request_timeout_ms.to_string())?;
                storage.set_item("skycast_toast_duration_ms", &self.toast_duration_ms.to_string())?;
            }
        }
        Ok(())
    }

    /// Get the full API URL for an endpoint
    pub fn api_url(&self, endpoint: &str) -> String {
        format!("{}{}", self.api_base_url, endpoint)
    }

    pub fn has_api_key(&self) -> bool {
        !self.api_key.is_empty()
    }
}

fn parse_level(value: &str) -> Option<Level> {
    match value.to_lowercase().as_str() {
        "error" => Some(Level::Error),
        "warn" => Some(Level::Warn),
        "info" => Some(Level::Info),
        "debug" => Some(Level::Debug),
        "trace" => Some(Level::Trace),
        _ => None,
    }
}

// Global settings instance using thread_local
use std::cell::RefCell;

thread_local! {
    static SETTINGS: RefCell<AppSettings> = RefCell::new(AppSettings::default());
}

/// Get a copy of the current settings
pub fn get_settings() -> AppSettings {
    SETTINGS.with(|s| s.borrow().clone())
}

/// Update the global settings
pub fn update_settings<F>(f: F)
where
    F: FnOnce(&mut AppSettings),
{
    SETTINGS.with(|s| {
        let mut settings = s.borrow_mut();
        f(&mut settings);
    });
}

/// Initialize settings (call this at app startup)
pub fn init_settings() {
    SETTINGS.with(|s| {
        *s.borrow_mut() = AppSettings::from_environment();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_url_joins_endpoint() {
        let settings = AppSettings::default();
        assert_eq!(
            settings.api_url("/weather"),
            "https://api.openweathermap.org/data/2.5/weather"
        );
    }

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("DEBUG"), Some(Level::Debug));
        assert_eq!(parse_level("warn"), Some(Level::Warn));
        assert_eq!(parse_level("loud"), None);
    }

    #[test]
    fn test_update_settings() {
        update_settings(|s| s.request_timeout_ms = 250);
        assert_eq!(get_settings().request_timeout_ms, 250);
    }
}
