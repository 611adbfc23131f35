use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::rendering::palette_strip::{DEFAULT_STRIP_HEIGHT, DEFAULT_STRIP_WIDTH};

/// Environment variable naming a config file when `--config` is not given
pub const CONFIG_ENV: &str = "PALETTESWAP_CONFIG";

/// Application configuration loaded from a YAML file
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct AppConfig {
    /// Where results go
    #[serde(default)]
    pub output: OutputConfig,

    /// Palette strip rendering
    #[serde(default)]
    pub strip: StripConfig,

    /// Transform tuning
    #[serde(default)]
    pub transform: TransformConfig,
}

/// Output settings
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct OutputConfig {
    /// Destination used when `--dest` is not given
    #[serde(default = "default_output_path")]
    pub default_path: PathBuf,
}

fn default_output_path() -> PathBuf {
    PathBuf::from("swapped_image.png")
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_path: default_output_path(),
        }
    }
}

/// Palette strip size
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct StripConfig {
    #[serde(default = "default_strip_width")]
    pub width: usize,

    #[serde(default = "default_strip_height")]
    pub height: usize,
}

fn default_strip_width() -> usize {
    DEFAULT_STRIP_WIDTH
}

fn default_strip_height() -> usize {
    DEFAULT_STRIP_HEIGHT
}

impl Default for StripConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_STRIP_WIDTH,
            height: DEFAULT_STRIP_HEIGHT,
        }
    }
}

/// Transform settings
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct TransformConfig {
    /// Spread rows across worker threads for large images
    #[serde(default = "default_parallel")]
    pub parallel: bool,

    /// Pixel count at which the transform goes parallel
    #[serde(default = "default_parallel_threshold")]
    pub parallel_threshold: usize,
}

fn default_parallel() -> bool {
    true
}

fn default_parallel_threshold() -> usize {
    palette_remap::PARALLEL_THRESHOLD
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self {
            parallel: default_parallel(),
            parallel_threshold: default_parallel_threshold(),
        }
    }
}

impl AppConfig {
    /// Load configuration from an explicit path, the `PALETTESWAP_CONFIG`
    /// environment variable, or fall back to defaults.
    ///
    /// A file that cannot be read or parsed is logged and ignored.
    pub fn load(path: Option<&Path>) -> Self {
        let path = path
            .map(Path::to_path_buf)
            .or_else(|| std::env::var_os(CONFIG_ENV).map(PathBuf::from));

        let Some(path) = path else {
            tracing::debug!("No config file given, using defaults");
            return Self::default();
        };

        match std::fs::read_to_string(&path) {
            Ok(content) => match Self::from_yaml(&content) {
                Ok(config) => {
                    tracing::info!(path = %path.display(), "Loaded configuration");
                    config
                }
                Err(e) => {
                    tracing::warn!(path = %path.display(), %e, "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(path = %path.display(), %e, "Failed to read config, using defaults");
                Self::default()
            }
        }
    }

    /// Parse configuration from YAML text
    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        // An empty document deserializes as unit, not as an empty mapping
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }
}
