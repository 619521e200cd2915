//! # Grid
//!
//! Integer coordinates, row-major traversal and the `PixelGrid` raster.

mod coord;
mod pixel_grid;

pub use coord::{Coordinate, RowMajor};
pub use pixel_grid::{PixelGrid, BYTES_PER_PIXEL};
