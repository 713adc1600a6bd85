use log::Level;
use web_sys::window;

/// API base compiled into the bundle; `MGNREGA_API_BASE` at build time overrides it.
pub const DEFAULT_API_BASE: &str = match option_env!("MGNREGA_API_BASE") {
    Some(base) => base,
    None => "/api",
};

pub const DEFAULT_GEOCODER_URL: &str = "https://nominatim.openstreetmap.org/reverse";

const STORAGE_PREFIX: &str = "mgnrega_";

/// Global application settings
#[derive(Debug, Clone, PartialEq)]
pub struct AppSettings {
    /// Backend API base, absolute or relative to the page (e.g. "/api")
    pub api_base: String,

    /// Reverse geocoding endpoint
    pub geocoder_url: String,

    /// State whose districts are listed
    pub default_state: String,

    /// Months of history requested per district
    pub months: u32,

    /// Budget for the browser position request
    pub geolocation_timeout_ms: u32,

    /// Default log level for the application
    pub log_level: Level,

    /// Enable debug mode
    pub debug_mode: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            geocoder_url: DEFAULT_GEOCODER_URL.to_string(),
            default_state: dashboard::DEFAULT_STATE.to_string(),
            months: 12,
            geolocation_timeout_ms: 10_000,
            log_level: Level::Info,
            debug_mode: false,
        }
    }
}

impl AppSettings {
    /// Create settings from environment/window location
    pub fn from_environment() -> Self {
        let mut settings = Self::default();

        let Some(window) = window() else {
            return settings;
        };

        if let Ok(hostname) = window.location().hostname() {
            settings.debug_mode = hostname == "localhost" || hostname == "127.0.0.1";
            if settings.debug_mode {
                settings.log_level = Level::Debug;
            }
        }

        // Per-browser overrides, handy when pointing a deployed bundle at another backend
        if let Ok(Some(storage)) = window.local_storage() {
            let read = |key: &str| storage.get_item(&format!("{}{}", STORAGE_PREFIX, key)).ok().flatten();

            if let Some(api_base) = read("api_base") {
                settings.api_base = api_base;
            }
            if let Some(geocoder_url) = read("geocoder_url") {
                settings.geocoder_url = geocoder_url;
            }
            if let Some(months) = read("months").and_then(|v| v.parse::<u32>().ok()) {
                settings.months = months;
            }
            if let Some(timeout) = read("geolocation_timeout_ms").and_then(|v| v.parse::<u32>().ok()) {
                settings.geolocation_timeout_ms = timeout;
            }
            if let Some(level) = read("log_level").and_then(|v| parse_level(&v)) {
                settings.log_level = level;
            }
        }

        settings.api_base = normalize_base(&settings.api_base);
        settings
    }

    pub fn controller_config(&self) -> dashboard::ControllerConfig {
        dashboard::ControllerConfig {
            months: self.months,
            geolocation_timeout_ms: self.geolocation_timeout_ms,
        }
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

fn normalize_base(base: &str) -> String {
    base.trim().trim_end_matches('/').to_string()
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

/// Initialize settings (call this at app startup)
pub fn init_settings() {
    SETTINGS.with(|s| {
        *s.borrow_mut() = AppSettings::from_environment();
    });
}
