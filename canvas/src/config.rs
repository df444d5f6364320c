//! Engine configuration, optionally parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::consts::{DOUBLE_CLICK_MS, FIT_PADDING, HISTORY_CAPACITY, MAX_ZOOM, MIN_ZOOM};

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("history capacity must be at least 1")]
    ZeroHistoryCapacity,
    #[error("invalid zoom range: min {min}, max {max}")]
    InvalidZoomRange { min: f64, max: f64 },
    #[error("fit padding must be non-negative, got {0}")]
    NegativePadding(f64),
}

/// Tunables for [`crate::engine::Engine`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineConfig {
    /// Snapshots kept for undo.
    pub history_capacity: usize,
    pub min_zoom: f64,
    pub max_zoom: f64,
    /// Window in which a second click on the same entity counts as a double-click.
    pub double_click_ms: u64,
    /// World-space margin used by fit-to-content.
    pub fit_padding: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            history_capacity: HISTORY_CAPACITY,
            min_zoom: MIN_ZOOM,
            max_zoom: MAX_ZOOM,
            double_click_ms: DOUBLE_CLICK_MS,
            fit_padding: FIT_PADDING,
        }
    }
}

impl EngineConfig {
    /// Build config from environment variables, falling back to defaults.
    ///
    /// Optional:
    /// - `FLOWBOARD_HISTORY_CAPACITY`: default 50
    /// - `FLOWBOARD_MIN_ZOOM`: default 0.1
    /// - `FLOWBOARD_MAX_ZOOM`: default 5.0
    /// - `FLOWBOARD_DOUBLE_CLICK_MS`: default 300
    /// - `FLOWBOARD_FIT_PADDING`: default 50.0
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            history_capacity: env_parse("FLOWBOARD_HISTORY_CAPACITY", HISTORY_CAPACITY),
            min_zoom: env_parse("FLOWBOARD_MIN_ZOOM", MIN_ZOOM),
            max_zoom: env_parse("FLOWBOARD_MAX_ZOOM", MAX_ZOOM),
            double_click_ms: env_parse("FLOWBOARD_DOUBLE_CLICK_MS", DOUBLE_CLICK_MS),
            fit_padding: env_parse("FLOWBOARD_FIT_PADDING", FIT_PADDING),
        }
    }

    /// Check the invariants the engine relies on.
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.history_capacity == 0 {
            return Err(ConfigError::ZeroHistoryCapacity);
        }
        if !(self.min_zoom > 0.0 && self.min_zoom <= self.max_zoom && self.max_zoom.is_finite()) {
            return Err(ConfigError::InvalidZoomRange { min: self.min_zoom, max: self.max_zoom });
        }
        if self.fit_padding < 0.0 || !self.fit_padding.is_finite() {
            return Err(ConfigError::NegativePadding(self.fit_padding));
        }
        Ok(())
    }
}

pub(crate) fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    std::env::var(key).map_or(default, |raw| raw.trim().parse::<T>().unwrap_or(default))
}
