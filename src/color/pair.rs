//! Named pairs of colors

use serde::Deserialize;

use super::model::Color;
use crate::errors::Result;

/// A named primary/secondary color pair.
///
/// The id is the lowercased name, computed at construction. There are no
/// setters; build a new pair to change anything.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "RawColorPair")]
pub struct ColorPair {
    name: String,
    id: String,
    primary: Color,
    secondary: Color,
}

/// Wire shape of a pair; `id` is never read from input
#[derive(Deserialize)]
struct RawColorPair {
    name: String,
    primary: Color,
    secondary: Color,
}

impl From<RawColorPair> for ColorPair {
    fn from(raw: RawColorPair) -> Self {
        ColorPair::from_colors(raw.name, raw.primary, raw.secondary)
    }
}

impl ColorPair {
    pub fn from_colors(name: impl Into<String>, primary: Color, secondary: Color) -> Self {
        let name = name.into();
        let id = name.to_lowercase();
        Self {
            name,
            id,
            primary,
            secondary,
        }
    }

    /// Parse both colors from hex strings; hex errors are returned as-is
    pub fn from_hex(primary: &str, secondary: &str, name: impl Into<String>) -> Result<Self> {
        let primary = Color::from_hex(primary)?;
        let secondary = Color::from_hex(secondary)?;
        Ok(Self::from_colors(name, primary, secondary))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn primary(&self) -> Color {
        self.primary
    }

    pub fn secondary(&self) -> Color {
        self.secondary
    }

    /// Same name, primary and secondary exchanged
    #[must_use]
    pub fn swapped(&self) -> Self {
        Self {
            name: self.name.clone(),
            id: self.id.clone(),
            primary: self.secondary,
            secondary: self.primary,
        }
    }

    /// `true` if `id` names this pair, ignoring case
    pub fn matches(&self, id: &str) -> bool {
        self.id == id.to_lowercase()
    }
}

impl std::fmt::Display for ColorPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({} / {})",
            self.name,
            self.primary.to_hex8(),
            self.secondary.to_hex8()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::RasterError;

    #[test]
    fn test_id_is_lowercased_name() {
        let pair = ColorPair::from_hex("#000", "#fff", "Black And White").unwrap();
        assert_eq!(pair.name(), "Black And White");
        assert_eq!(pair.id(), "black and white");
        assert_eq!(pair.primary(), Color::BLACK);
        assert_eq!(pair.secondary(), Color::WHITE);
    }

    #[test]
    fn test_from_colors() {
        let pair = ColorPair::from_colors("SUNSET", Color::RED, Color::YELLOW);
        assert_eq!(pair.id(), "sunset");
        assert!(pair.matches("Sunset"));
    }

    #[test]
    fn test_from_hex_propagates_hex_error() {
        let err = ColorPair::from_hex("#000", "#12345", "Broken").unwrap_err();
        assert!(matches!(err, RasterError::InvalidHexFormat(ref input) if input.as_str() == "#12345"));
    }

    #[test]
    fn test_swapped() {
        let pair = ColorPair::from_colors("Ink", Color::BLACK, Color::WHITE).swapped();
        assert_eq!(pair.primary(), Color::WHITE);
        assert_eq!(pair.secondary(), Color::BLACK);
        assert_eq!(pair.id(), "ink");
    }

    #[test]
    fn test_deserialize_recomputes_id() {
        let pair: ColorPair = toml::from_str(
            r##"
            name = "Deep Sea"
            primary = "#001f3f"
            secondary = "#7fdbff"
            id = "ignored"
            "##,
        )
        .unwrap();
        assert_eq!(pair.id(), "deep sea");
        assert_eq!(pair.primary(), Color::rgb(0x00, 0x1f, 0x3f));
    }
}
