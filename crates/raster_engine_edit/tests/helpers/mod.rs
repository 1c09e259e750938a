//! Shared test helpers for fill tests

#![allow(dead_code)]

use raster_engine::{Color, Layer, LayerModel, PixelBuffer};
use raster_engine_edit::{EditState, MAX_ABSOLUTE_TOLERANCE};

/// The colors the original fill scenarios are drawn with
pub const TARGET_COLOR: Color = Color::from_argb(0xFFAA_EEAA);
pub const BOUNDARY_COLOR: Color = Color::from_argb(0xFFFF_0000);
pub const BACKGROUND_COLOR: Color = Color::from_argb(0xFFFF_FFFF);

pub const NO_TOLERANCE: f32 = 0.0;
pub const HALF_TOLERANCE: f32 = MAX_ABSOLUTE_TOLERANCE / 2.0;
pub const MAX_TOLERANCE: f32 = MAX_ABSOLUTE_TOLERANCE;

/// Build a buffer from a pattern: '.' is background, 'B' is boundary
pub fn buffer_from_pattern(pattern: &[&str], background: Color, boundary: Color) -> PixelBuffer {
    let rows: Vec<Vec<u32>> = pattern
        .iter()
        .map(|row| {
            row.chars()
                .map(|cell| if cell == 'B' { boundary.to_argb() } else { background.to_argb() })
                .collect()
        })
        .collect();
    PixelBuffer::from_argb_rows(&rows)
}

/// Layer model with the given buffer as its single current layer
pub fn layer_model_with_buffer(buffer: PixelBuffer) -> LayerModel {
    let mut model = LayerModel::new();
    model.add_layer_at(0, Layer::from_buffer("Background", buffer));
    model
}

/// Edit state over a single-layer model with the given buffer
pub fn edit_state_with_buffer(buffer: PixelBuffer) -> EditState {
    EditState::new(layer_model_with_buffer(buffer))
}

/// Assert every pixel cell-by-cell: 'B' cells must be `boundary`, '.'
/// cells must be `expected`
pub fn assert_buffer_matches_pattern(buffer: &PixelBuffer, pattern: &[&str], expected: Color, boundary: Color) {
    assert_eq!(buffer.get_height() as usize, pattern.len(), "height mismatch");
    for (y, row) in pattern.iter().enumerate() {
        assert_eq!(buffer.get_width() as usize, row.len(), "width mismatch at row {y}");
        for (x, cell) in row.chars().enumerate() {
            let want = if cell == 'B' { boundary } else { expected };
            assert_eq!(
                buffer.get(x as i32, y as i32),
                want,
                "wrong pixel color at (x: {x}, y: {y})"
            );
        }
    }
}

/// Count pixels with exactly the given color
pub fn count_pixels(buffer: &PixelBuffer, color: Color) -> usize {
    buffer.pixels().filter(|&pixel| pixel == color).count()
}

/// 10x10 grid with an open one-pixel-wide spiral of boundary pixels
pub fn spiral_pattern() -> Vec<&'static str> {
    vec![
        "..........",
        "..........",
        "...BBB....",
        "..B...B...",
        "..B.B.B...",
        "..B.BB....",
        "..B.......",
        "...BB.....",
        "..........",
        "..........",
    ]
}

/// 16x11 multi-region drawing with boundary squiggles that never close
pub fn complex_drawing_pattern() -> Vec<&'static str> {
    vec![
        "................",
        ".....BBB...BBB..",
        "......B...B...B.",
        "...B..B...B...B.",
        "..B..B.B......B.",
        "..B....B.....B..",
        "..BBB.B...B...B.",
        "..B...B...BBBBB.",
        "B..BBB..........",
        ".B.........BBB..",
        "............B...",
    ]
}

/// 5x5 grid whose pockets force re-scans over partially classified
/// ranges
pub fn skip_range_pattern() -> Vec<&'static str> {
    vec![
        "....B", //
        "..B.B",
        ".B..B",
        "..BB.",
        ".....",
    ]
}
