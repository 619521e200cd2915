//! Render configuration
//!
//! Read from a TOML file; every field has a default so an empty or missing
//! file is a valid configuration.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::color::{palette, ColorPair};
use crate::encode::RasterEncoder;
use crate::errors::{RasterError, Result};
use crate::pattern::Pattern;

/// What to render and where to write it
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Grid width in pixels
    pub width: i32,

    /// Grid height in pixels
    pub height: i32,

    /// Id of the color pair to paint with
    pub pair: String,

    /// Fill pattern
    pub pattern: Pattern,

    /// Side of one pattern cell in pixels
    pub cell_size: i32,

    /// Output file
    pub output: PathBuf,

    /// Extra pairs, looked up before the predefined ones
    pub pairs: Vec<ColorPair>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 64,
            height: 64,
            pair: "black and white".to_string(),
            pattern: Pattern::default(),
            cell_size: 8,
            output: PathBuf::from("out/image.png"),
            pairs: Vec::new(),
        }
    }
}

impl RenderConfig {
    /// Load from `path`, falling back to defaults if the file doesn't exist
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::info!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| {
            RasterError::configuration(format!("Failed to read {}: {e}", path.display()))
        })?;

        let config = Self::from_toml(&content)?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)
            .map_err(|e| RasterError::configuration(format!("Invalid TOML config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values no grid can be built from
    pub fn validate(&self) -> Result<()> {
        if self.width < 1 || self.height < 1 {
            return Err(RasterError::configuration(format!(
                "width and height must be at least 1, got {}x{}",
                self.width, self.height
            )));
        }
        if self.cell_size < 1 {
            return Err(RasterError::configuration(format!(
                "cell_size must be at least 1, got {}",
                self.cell_size
            )));
        }
        Ok(())
    }

    /// The configured pair: config-local pairs first, then the palette
    pub fn resolve_pair(&self) -> Result<ColorPair> {
        self.pairs
            .iter()
            .find(|pair| pair.matches(&self.pair))
            .or_else(|| palette::pair(&self.pair))
            .cloned()
            .ok_or_else(|| RasterError::configuration(format!("Unknown color pair: {}", self.pair)))
    }

    /// Output path, given the encoder's extension when the configured path has none
    pub fn output_path(&self, encoder: &dyn RasterEncoder) -> PathBuf {
        let mut path = self.output.clone();
        if path.extension().is_none() {
            path.set_extension(encoder.extension());
        }
        path
    }
}
