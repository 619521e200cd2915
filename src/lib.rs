//! # rgba-grid
//!
//! 8-bit RGBA colors with Porter-Duff compositing, integer coordinates with
//! row-major traversal, and a `PixelGrid` raster that exports to packed RGBA
//! bytes for an image encoder.
//!
//! ```
//! use rgba_grid::{Color, Coordinate, PixelGrid};
//!
//! let mut grid = PixelGrid::new(2, 1)?;
//! grid.set(Coordinate::new(0, 0), Color::RED)?;
//! grid.set(Coordinate::new(1, 0), Color::BLUE)?;
//! assert_eq!(grid.to_byte_buffer(), vec![255, 0, 0, 255, 0, 0, 255, 255]);
//! # Ok::<(), rgba_grid::RasterError>(())
//! ```

pub mod color;
pub mod config;
pub mod encode;
pub mod errors;
pub mod grid;
pub mod pattern;

pub use color::{Color, ColorPair};
pub use config::RenderConfig;
pub use encode::{PngEncoder, RasterEncoder};
pub use errors::{RasterError, Result};
pub use grid::{Coordinate, PixelGrid, RowMajor, BYTES_PER_PIXEL};
pub use pattern::Pattern;
