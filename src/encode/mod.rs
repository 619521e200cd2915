//! Image encoders for packed RGBA buffers
//!
//! The grid only knows how to flatten itself into `width * height * 4` bytes.
//! Turning those bytes into a file format happens behind [`RasterEncoder`].

mod png;

pub use png::PngEncoder;

use crate::errors::Result;

/// Trait for encoders that turn a packed RGBA buffer into file bytes
pub trait RasterEncoder: Send + Sync {
    /// Encode `rgba` (row-major, 4 bytes per pixel) as a `width` x `height` image
    fn encode(&self, width: u32, height: u32, rgba: &[u8]) -> Result<Vec<u8>>;

    /// File extension for the encoded format, without the dot
    fn extension(&self) -> &'static str;
}
