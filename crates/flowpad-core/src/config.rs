//! Editor configuration.
//!
//! ## Learning: Serde for Serialization
//!
//! `#[serde(default)]` on every section means a config file only needs the
//! keys it wants to change:
//!
//! ```toml
//! [editor]
//! copy_feedback_ms = 1500
//!
//! [palette]
//! keyword = "#ff79c6"
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use flowpad_syntax::Palette;

use crate::CoreResult;

/// Main configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Widget behavior and metrics
    pub editor: EditorConfig,

    /// Token colors for keywords, nodes and arrows
    pub palette: Palette,
}

impl Config {
    /// Loads config from the default location.
    pub fn load() -> Self {
        Self::load_from_default_path().unwrap_or_else(|e| {
            tracing::warn!("Falling back to default config: {}", e);
            Self::default()
        })
    }

    /// Loads `path` if given, otherwise the default location.
    ///
    /// An explicit path that cannot be read is an error; a missing default
    /// file is not.
    pub fn resolve(path: Option<&Path>) -> CoreResult<Self> {
        match path {
            Some(path) => Ok(Self::load_from(path)?),
            None => Ok(Self::load()),
        }
    }

    /// Loads config from a file.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: Self = toml::from_str(&content)?;
        config.editor.validate()?;
        Ok(config)
    }

    /// Loads from the default config path.
    fn load_from_default_path() -> Result<Self, ConfigError> {
        let path = Self::default_path()?;
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Returns the default config file path.
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(config_dir.join("flowpad").join("config.toml"))
    }

    /// Saves the config to the default location.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(Self::default_path()?)
    }

    /// Saves the config to `path`, creating parent directories.
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

/// Widget behavior configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Shown while the document is empty
    pub placeholder: String,

    /// Font size in points
    pub font_size: f32,

    /// Line height multiplier
    pub line_height: f32,

    /// How long the "Copied!" feedback stays up (ms)
    pub copy_feedback_ms: u64,

    /// Show the line number gutter
    pub line_numbers: bool,
}

impl EditorConfig {
    /// Height of one line in pixels.
    pub fn line_height_px(&self) -> f32 {
        self.font_size * self.line_height
    }

    pub fn copy_feedback_delay(&self) -> Duration {
        Duration::from_millis(self.copy_feedback_ms)
    }

    /// Rejects metrics the widget cannot lay out with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [("font_size", self.font_size), ("line_height", self.line_height)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::InvalidMetric { field, value });
            }
        }
        Ok(())
    }
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            placeholder: "graph TD\n    A[Start] --> B[End]".to_string(),
            font_size: 14.0,
            line_height: 1.5,
            copy_feedback_ms: 2000,
            line_numbers: true,
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config directory not found")]
    NoConfigDir,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Invalid editor.{field}: {value} (must be a positive number)")]
    InvalidMetric { field: &'static str, value: f32 },
}
