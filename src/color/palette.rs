//! Predefined colors and color pairs
//!
//! Both tables are built once per process and are read-only afterwards.

use lazy_static::lazy_static;

use super::model::Color;
use super::pair::ColorPair;

/// Named colors, in display order
static COLORS: &[(&str, Color)] = &[
    ("transparent", Color::TRANSPARENT),
    ("black", Color::BLACK),
    ("white", Color::WHITE),
    ("red", Color::RED),
    ("green", Color::GREEN),
    ("blue", Color::BLUE),
    ("yellow", Color::YELLOW),
    ("cyan", Color::CYAN),
    ("magenta", Color::MAGENTA),
];

lazy_static! {
    static ref PAIRS: Vec<ColorPair> = vec![
        ColorPair::from_colors("Black And White", Color::BLACK, Color::WHITE),
        ColorPair::from_colors("Red And Blue", Color::RED, Color::BLUE),
        ColorPair::from_colors("Cyan And Magenta", Color::CYAN, Color::MAGENTA),
        ColorPair::from_colors("Sunset", Color::rgb(0xff, 0x5e, 0x3a), Color::rgb(0xff, 0xd1, 0x66)),
        ColorPair::from_colors("Deep Sea", Color::rgb(0x00, 0x1f, 0x3f), Color::rgb(0x7f, 0xdb, 0xff)),
        ColorPair::from_colors("Forest", Color::rgb(0x1b, 0x43, 0x32), Color::rgb(0x95, 0xd5, 0xb2)),
        ColorPair::from_colors("Ghost", Color::rgba(0xff, 0xff, 0xff, 0x40), Color::TRANSPARENT),
    ];
}

/// All predefined named colors
pub fn colors() -> &'static [(&'static str, Color)] {
    COLORS
}

/// Look up a predefined color by name, ignoring case
pub fn color(name: &str) -> Option<Color> {
    COLORS
        .iter()
        .find(|(candidate, _)| candidate.eq_ignore_ascii_case(name))
        .map(|(_, color)| *color)
}

/// All predefined color pairs
pub fn pairs() -> &'static [ColorPair] {
    &PAIRS
}

/// Look up a predefined pair by id, ignoring case
pub fn pair(id: &str) -> Option<&'static ColorPair> {
    PAIRS.iter().find(|pair| pair.matches(id))
}
