//! # Color
//!
//! 8-bit RGBA colors, Porter-Duff compositing and named color pairs.

mod model;
mod pair;
pub mod palette;

pub use model::Color;
pub use pair::ColorPair;
