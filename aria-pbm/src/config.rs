//! Conversion configuration.
//!
//! The command line tool always runs with [`ConvertConfig::default`]. Library
//! users may tune the parameters or load them from a TOML file:
//!
//! ```toml
//! resolution = 0.05
//! line_threshold = 40
//! parallel = false
//! ```

use crate::error::{Error, Result};
use serde::Deserialize;
use std::path::Path;

/// Default source-units-to-pixel factor (10 source units per pixel).
pub const DEFAULT_RESOLUTION: f64 = 0.1;

/// Default maximum cross-product magnitude for a pixel to lie on a segment.
pub const DEFAULT_LINE_THRESHOLD: i64 = 40;

/// Default marker that opens the line records section.
pub const DEFAULT_LINES_MARKER: &str = "LINES";

/// Parameters for an ARIA map to PBM conversion
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct ConvertConfig {
    /// Scale factor applied to translated source coordinates (default: 0.1)
    #[serde(default = "default_resolution")]
    pub resolution: f64,

    /// Maximum cross-product magnitude counted as "on" a segment (default: 40)
    #[serde(default = "default_line_threshold")]
    pub line_threshold: i64,

    /// Line that starts the segment records, without newline (default: "LINES")
    #[serde(default = "default_lines_marker")]
    pub lines_marker: String,

    /// Rasterize rows on the rayon thread pool (default: true)
    #[serde(default = "default_parallel")]
    pub parallel: bool,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            resolution: default_resolution(),
            line_threshold: default_line_threshold(),
            lines_marker: default_lines_marker(),
            parallel: default_parallel(),
        }
    }
}

impl ConvertConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: ConvertConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check parameter ranges.
    pub fn validate(&self) -> Result<()> {
        if !(self.resolution.is_finite() && self.resolution > 0.0) {
            return Err(Error::Config(format!(
                "resolution must be positive, got {}",
                self.resolution
            )));
        }
        if self.line_threshold < 0 {
            return Err(Error::Config(format!(
                "line_threshold must not be negative, got {}",
                self.line_threshold
            )));
        }
        if self.lines_marker.is_empty() || self.lines_marker.contains('\n') {
            return Err(Error::Config(
                "lines_marker must be a non-empty single line".to_string(),
            ));
        }
        Ok(())
    }
}

fn default_resolution() -> f64 {
    DEFAULT_RESOLUTION
}

fn default_line_threshold() -> i64 {
    DEFAULT_LINE_THRESHOLD
}

fn default_lines_marker() -> String {
    DEFAULT_LINES_MARKER.to_string()
}

fn default_parallel() -> bool {
    true
}
