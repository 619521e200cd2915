//! PNG output through the `image` crate's encoder

use image::codecs::png::{CompressionType, FilterType, PngEncoder as ImagePngEncoder};
use image::{ExtendedColorType, ImageEncoder};

use super::RasterEncoder;
use crate::errors::{RasterError, Result};

/// PNG encoder for packed RGBA buffers
#[derive(Debug, Clone, Copy)]
pub struct PngEncoder {
    compression: CompressionType,
    filter: FilterType,
}

impl Default for PngEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl PngEncoder {
    pub fn new() -> Self {
        Self {
            compression: CompressionType::Default,
            filter: FilterType::Adaptive,
        }
    }

    /// Trade size for speed
    #[must_use]
    pub fn with_compression(mut self, compression: CompressionType) -> Self {
        self.compression = compression;
        self
    }

    #[must_use]
    pub fn with_filter(mut self, filter: FilterType) -> Self {
        self.filter = filter;
        self
    }
}

impl RasterEncoder for PngEncoder {
    fn encode(&self, width: u32, height: u32, rgba: &[u8]) -> Result<Vec<u8>> {
        if width == 0 || height == 0 {
            return Err(RasterError::invalid_dimensions(format!(
                "PNG needs a non-empty image, got {width}x{height}"
            )));
        }

        let expected = width as usize * height as usize * 4;
        if rgba.len() != expected {
            return Err(RasterError::invalid_dimensions(format!(
                "RGBA buffer holds {} bytes, a {width}x{height} image needs {expected}",
                rgba.len()
            )));
        }

        let mut output = Vec::new();
        ImagePngEncoder::new_with_quality(&mut output, self.compression, self.filter)
            .write_image(rgba, width, height, ExtendedColorType::Rgba8)
            .map_err(|e| RasterError::encoding(format!("PNG encoding failed: {e}")))?;

        tracing::debug!(width, height, bytes = output.len(), "encoded PNG");
        Ok(output)
    }

    fn extension(&self) -> &'static str {
        "png"
    }
}
