//! Fill patterns that paint a grid from a color pair

use serde::Deserialize;

use crate::color::{Color, ColorPair};
use crate::errors::Result;
use crate::grid::{Coordinate, PixelGrid};

/// How a pair's two colors are laid out over the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Pattern {
    /// Primary everywhere
    Solid,
    /// Alternating square cells
    #[default]
    Checker,
    /// Vertical bands, one cell wide
    Stripes,
    /// Secondary fades in over primary from left to right
    Gradient,
}

impl Pattern {
    /// Color of one cell
    pub fn color_at(self, coord: Coordinate, pair: &ColorPair, cell_size: i32, width: i32) -> Color {
        let cell_size = cell_size.max(1);
        match self {
            Pattern::Solid => pair.primary(),
            Pattern::Checker => {
                if (coord.x / cell_size + coord.y / cell_size) % 2 == 0 {
                    pair.primary()
                } else {
                    pair.secondary()
                }
            }
            Pattern::Stripes => {
                if (coord.x / cell_size) % 2 == 0 {
                    pair.primary()
                } else {
                    pair.secondary()
                }
            }
            Pattern::Gradient => {
                let span = i64::from((width - 1).max(1));
                let top = pair.secondary();
                let alpha = i64::from(top.a()) * i64::from(coord.x) / span;
                top.with_alpha(alpha as u8).composite_over(pair.primary())
            }
        }
    }

    /// Paint a whole `width` x `height` grid
    pub fn render(self, pair: &ColorPair, width: i32, height: i32, cell_size: i32) -> Result<PixelGrid> {
        tracing::debug!(pattern = ?self, pair = pair.id(), width, height, "rendering pattern");
        PixelGrid::from_fn(width, height, |coord| self.color_at(coord, pair, cell_size, width))
    }
}
