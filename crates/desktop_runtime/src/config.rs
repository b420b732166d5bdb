//! Desktop tuning knobs and the configuration error type.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{Viewport, WindowRect};

#[derive(Debug, Error)]
/// Failures while loading desktop configuration or an app manifest.
pub enum ConfigError {
    /// TOML input did not parse into the expected shape.
    #[error("invalid TOML: {0}")]
    Parse(#[from] toml::de::Error),
    /// The build-time generated catalog could not be decoded.
    #[error("invalid built-in catalog: {0}")]
    Catalog(#[from] serde_json::Error),
    /// The manifest parsed but violates a catalog rule.
    #[error("invalid app manifest: {0}")]
    InvalidManifest(String),
    /// The desktop configuration parsed but holds an unusable value.
    #[error("invalid desktop config: {0}")]
    InvalidConfig(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// Geometry and timing parameters for the window manager and interaction controller.
///
/// Every field is optional in TOML input; omitted fields take the [`Default`] value.
pub struct DesktopConfig {
    /// Resize floor for window width.
    pub min_window_width: i32,
    /// Resize floor for window height.
    pub min_window_height: i32,
    /// Height reserved at the bottom of the viewport for the taskbar.
    pub taskbar_height: i32,
    /// Width of a newly opened window.
    pub default_window_width: i32,
    /// Height of a newly opened window.
    pub default_window_height: i32,
    /// Position of the first cascaded window.
    pub cascade_origin: (i32, i32),
    /// Offset between consecutive cascaded windows on both axes.
    pub cascade_step: i32,
    /// Number of cascade slots before positions wrap back to the origin.
    pub cascade_wrap: usize,
    /// Length of the maximize/restore transition.
    pub transition_ms: u32,
    /// Stacking counter start; the first window sits just above it.
    pub initial_z_index: u32,
}

impl Default for DesktopConfig {
    fn default() -> Self {
        Self {
            min_window_width: 300,
            min_window_height: 200,
            taskbar_height: 48,
            default_window_width: 800,
            default_window_height: 500,
            cascade_origin: (100, 50),
            cascade_step: 20,
            cascade_wrap: 5,
            transition_ms: 200,
            initial_z_index: 100,
        }
    }
}

impl DesktopConfig {
    /// Parses a TOML document, filling unspecified fields with defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML and [`ConfigError::InvalidConfig`]
    /// when a size floor is not positive.
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(raw)?;
        if config.min_window_width <= 0 || config.min_window_height <= 0 {
            return Err(ConfigError::InvalidConfig(
                "minimum window size must be positive".to_string(),
            ));
        }
        Ok(config)
    }

    /// Initial geometry for a window opened while `open_count` windows already exist.
    pub fn cascade_rect(&self, open_count: usize) -> WindowRect {
        let slot = open_count % self.cascade_wrap.max(1);
        let offset = self.cascade_step * slot as i32;
        WindowRect {
            x: self.cascade_origin.0 + offset,
            y: self.cascade_origin.1 + offset,
            w: self.default_window_width,
            h: self.default_window_height,
        }
    }

    /// Region a maximized window fills.
    pub fn work_area(&self, viewport: Viewport) -> WindowRect {
        viewport.work_area(self.taskbar_height)
    }
}
