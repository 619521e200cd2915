//! Row-major raster of RGBA colors

use super::coord::{Coordinate, RowMajor};
use crate::color::Color;
use crate::encode::RasterEncoder;
use crate::errors::{RasterError, Result};

/// Bytes per cell in the exported buffer (R, G, B, A)
pub const BYTES_PER_PIXEL: usize = 4;

/// Fixed-size grid of colors
///
/// Cells are stored row-major: `(x, y)` lives at index `y * width + x`.
/// The grid owns its pixels exclusively; there is no interior mutability.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    width: i32,
    height: i32,
    pixels: Vec<Color>,
}

impl PixelGrid {
    /// Create a grid filled with white
    pub fn new(width: i32, height: i32) -> Result<Self> {
        Self::filled(width, height, Color::WHITE)
    }

    /// Create a grid filled with one color
    pub fn filled(width: i32, height: i32, color: Color) -> Result<Self> {
        Self::from_fn(width, height, |_| color)
    }

    /// Create a grid by asking `color_at` for every cell.
    ///
    /// `color_at` runs exactly once per coordinate, in row-major order.
    /// Zero-area grids are allowed and never call it. Negative dimensions
    /// fail with [`RasterError::InvalidDimensions`].
    pub fn from_fn<F>(width: i32, height: i32, color_at: F) -> Result<Self>
    where
        F: FnMut(Coordinate) -> Color,
    {
        let area = area(width, height)?;
        tracing::trace!(width, height, "building pixel grid");

        let mut pixels = Vec::with_capacity(area);
        pixels.extend(Coordinate::row_major(width, height).map(color_at));
        debug_assert_eq!(pixels.len(), area);

        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Number of cells (`width * height`)
    #[inline]
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Fail with [`RasterError::OutOfBounds`] unless `coord` is a cell of this grid
    pub fn check_bounds(&self, coord: Coordinate) -> Result<()> {
        if coord.x < 0 || coord.x >= self.width || coord.y < 0 || coord.y >= self.height {
            return Err(RasterError::OutOfBounds {
                x: coord.x,
                y: coord.y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }

    /// `true` if `coord` is a cell of this grid
    #[inline]
    pub fn contains(&self, coord: Coordinate) -> bool {
        self.check_bounds(coord).is_ok()
    }

    #[inline]
    fn index_of(&self, coord: Coordinate) -> Result<usize> {
        self.check_bounds(coord)?;
        Ok(coord.y as usize * self.width as usize + coord.x as usize)
    }

    /// Get the color at `coord`
    #[inline]
    pub fn get(&self, coord: Coordinate) -> Result<Color> {
        let idx = self.index_of(coord)?;
        Ok(self.pixels[idx])
    }

    /// Replace the color at `coord`
    #[inline]
    pub fn set(&mut self, coord: Coordinate, color: Color) -> Result<()> {
        let idx = self.index_of(coord)?;
        self.pixels[idx] = color;
        Ok(())
    }

    /// Composite `color` over the cell at `coord`
    #[inline]
    pub fn blend(&mut self, coord: Coordinate, color: Color) -> Result<()> {
        let idx = self.index_of(coord)?;
        self.pixels[idx] = color.composite_over(self.pixels[idx]);
        Ok(())
    }

    /// Set every cell to `color`
    pub fn fill(&mut self, color: Color) {
        self.pixels.fill(color);
    }

    /// Coordinates of every cell in row-major order.
    ///
    /// Independent of content; each call starts again at `(0, 0)`.
    pub fn coords(&self) -> RowMajor {
        Coordinate::row_major(self.width, self.height)
    }

    /// `(coordinate, color)` for every cell in row-major order
    pub fn cells(&self) -> impl Iterator<Item = (Coordinate, Color)> + '_ {
        self.coords().zip(self.pixels.iter().copied())
    }

    /// Raw pixel data, row-major
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// Pack all cells into `width * height * 4` bytes, R, G, B, A per cell
    pub fn to_byte_buffer(&self) -> Vec<u8> {
        let mut rgba_data = Vec::with_capacity(self.pixels.len() * BYTES_PER_PIXEL);
        for color in &self.pixels {
            rgba_data.extend_from_slice(&color.to_rgba8());
        }
        rgba_data
    }

    /// Hand the packed buffer to an image encoder
    pub fn encode<E: RasterEncoder + ?Sized>(&self, encoder: &E) -> Result<Vec<u8>> {
        encoder.encode(
            self.width as u32,
            self.height as u32,
            &self.to_byte_buffer(),
        )
    }
}

/// Largest allocation, in bytes, that `Vec` accepts
const MAX_ALLOCATION: usize = isize::MAX as usize;

/// Cell count for the given dimensions.
///
/// Rejects negative sides and any area whose pixel storage or exported byte
/// buffer would not fit in a single allocation.
fn area(width: i32, height: i32) -> Result<usize> {
    if width < 0 || height < 0 {
        return Err(RasterError::invalid_dimensions(format!(
            "{width}x{height} has a negative side"
        )));
    }
    let bytes_per_cell = BYTES_PER_PIXEL.max(std::mem::size_of::<Color>());
    (width as usize)
        .checked_mul(height as usize)
        .filter(|cells| {
            cells
                .checked_mul(bytes_per_cell)
                .is_some_and(|bytes| bytes <= MAX_ALLOCATION)
        })
        .ok_or_else(|| RasterError::invalid_dimensions(format!("{width}x{height} is too large")))
}
