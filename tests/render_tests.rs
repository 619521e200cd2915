//! Config loading, pattern rendering and PNG output.

use std::fs;

use rgba_grid::color::palette;
use rgba_grid::{
    Color, Coordinate, Pattern, PixelGrid, PngEncoder, RasterEncoder, RasterError, RenderConfig,
};
use tempfile::TempDir;

#[test]
fn test_missing_config_uses_defaults() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config = RenderConfig::load(&temp_dir.path().join("absent.toml")).unwrap();
    assert_eq!(config.width, 64);
    assert_eq!(config.pair, "black and white");
}

#[test]
fn test_config_file_roundtrip_to_png() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("render.toml");
    fs::write(
        &config_path,
        r##"
width = 6
height = 4
pair = "Mint"
pattern = "checker"
cell_size = 2

[[pairs]]
name = "Mint"
primary = "#3eb489"
secondary = "#f5fffa80"
"##,
    )
    .unwrap();

    let config = RenderConfig::load(&config_path).unwrap();
    let pair = config.resolve_pair().unwrap();
    assert_eq!(pair.id(), "mint");
    assert_eq!(pair.secondary().a(), 0x80);

    let grid = config
        .pattern
        .render(&pair, config.width, config.height, config.cell_size)
        .unwrap();
    assert_eq!(grid.get(Coordinate::new(0, 0)).unwrap(), pair.primary());
    assert_eq!(grid.get(Coordinate::new(2, 0)).unwrap(), pair.secondary());

    let png = grid.encode(&PngEncoder::new()).unwrap();
    let out = temp_dir.path().join("out.png");
    fs::write(&out, &png).unwrap();
    assert_eq!(fs::read(&out).unwrap()[1..4], *b"PNG");
}

#[test]
fn test_malformed_config_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("render.toml");
    fs::write(&config_path, "width = \"wide\"").unwrap();
    assert!(RenderConfig::load(&config_path).is_err());
}

#[test]
fn test_encode_matches_manual_buffer() {
    let grid = Pattern::Stripes
        .render(palette::pair("red and blue").unwrap(), 4, 2, 1)
        .unwrap();
    let encoder = PngEncoder::new();
    let via_grid = grid.encode(&encoder).unwrap();
    let via_buffer = encoder.encode(4, 2, &grid.to_byte_buffer()).unwrap();
    assert_eq!(via_grid, via_buffer);
    assert_eq!(encoder.extension(), "png");
}

#[test]
fn test_png_scanlines_hold_grid_bytes() {
    let grid = PixelGrid::from_fn(2, 1, |c| if c.x == 0 { Color::RED } else { Color::BLUE }).unwrap();
    let png = grid.encode(&PngEncoder::new()).unwrap();

    let decoded = image::load_from_memory(&png).unwrap().into_rgba8();
    assert_eq!(decoded.dimensions(), (2, 1));
    assert_eq!(decoded.into_raw(), grid.to_byte_buffer());
}

#[test]
fn test_empty_grid_cannot_be_encoded() {
    let grid = PixelGrid::new(0, 3).unwrap();
    assert!(matches!(
        grid.encode(&PngEncoder::new()),
        Err(RasterError::InvalidDimensions { .. })
    ));
}
