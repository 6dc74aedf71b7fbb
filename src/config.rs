use thiserror::Error;

use crate::ui::state::DashboardTab;

pub const DEFAULT_TICK_MS: u64 = 200;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {name}: '{value}' is not a number")]
    InvalidNumber { name: &'static str, value: String },
    #[error("{0}")]
    UnknownTab(String),
}

/// Runtime knobs for the TUI, read from the environment with CLI overrides
/// applied on top in main
#[derive(Debug, Clone)]
pub struct Config {
    /// Event poll interval in milliseconds
    pub tick_ms: u64,
    /// Whether to capture mouse events for chart hover
    pub mouse_capture: bool,
    /// Tab shown at startup
    pub start_tab: DashboardTab,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick_ms: DEFAULT_TICK_MS,
            mouse_capture: true,
            start_tab: DashboardTab::Overview,
        }
    }
}

impl Config {
    /// Load configuration from the environment (and .env if present)
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(value) = std::env::var("DASH_TICK_MS") {
            config.tick_ms = value.parse().map_err(|_| ConfigError::InvalidNumber {
                name: "DASH_TICK_MS",
                value,
            })?;
        }

        if let Ok(value) = std::env::var("DASH_MOUSE") {
            config.mouse_capture = !matches!(value.as_str(), "0" | "false" | "off");
        }

        if let Ok(value) = std::env::var("DASH_START_TAB") {
            config.start_tab = value
                .parse()
                .map_err(|message: String| ConfigError::UnknownTab(message))?;
        }

        Ok(config)
    }
}
