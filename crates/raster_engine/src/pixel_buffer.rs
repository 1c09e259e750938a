//! Row-major pixel grid and the narrow accessor trait editing code works
//! against.
//!
//! All coordinates handed to this module must already be validated by the
//! caller; out-of-range access is a programming error and asserts instead
//! of returning a recoverable error.

use serde::{Deserialize, Serialize};

use crate::{Color, Position, Size};

/// Narrow read/write surface over a 2-D color grid.
///
/// Editing operations take `&mut dyn PixelAccess` so they work against a
/// bare [`PixelBuffer`] or a [`crate::Layer`] alike.
///
/// # Panics
///
/// Implementations assert that coordinates lie inside the grid.
pub trait PixelAccess {
    fn width(&self) -> i32;
    fn height(&self) -> i32;
    fn pixel(&self, x: i32, y: i32) -> Color;
    fn set_pixel(&mut self, x: i32, y: i32, color: Color);

    fn size(&self) -> Size {
        Size::new(self.width(), self.height())
    }

    fn is_empty(&self) -> bool {
        self.width() <= 0 || self.height() <= 0
    }
}

/// A rectangular grid of [`Color`] values, row-major, mutable in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PixelBuffer {
    size: Size,
    data: Vec<Color>,
}

impl PixelBuffer {
    /// Create a buffer filled with [`Color::TRANSPARENT`]
    pub fn new(size: impl Into<Size>) -> Self {
        Self::filled(size, Color::TRANSPARENT)
    }

    /// Create a buffer filled with the given color
    pub fn filled(size: impl Into<Size>, color: Color) -> Self {
        let size = size.into();
        PixelBuffer {
            size,
            data: vec![color; size.area()],
        }
    }

    /// Build a buffer from rows of packed `0xAARRGGBB` values.
    ///
    /// All rows must have the same length. Mainly useful for fixtures.
    pub fn from_argb_rows(rows: &[Vec<u32>]) -> Self {
        let height = rows.len() as i32;
        let width = rows.first().map_or(0, |row| row.len() as i32);
        let mut data = Vec::with_capacity((width * height).max(0) as usize);
        for row in rows {
            assert!(row.len() as i32 == width, "all rows must have the same length");
            data.extend(row.iter().map(|&packed| Color::from_argb(packed)));
        }
        PixelBuffer {
            size: Size::new(width, height),
            data,
        }
    }

    pub fn get_size(&self) -> Size {
        self.size
    }

    pub fn get_width(&self) -> i32 {
        self.size.width
    }

    pub fn get_height(&self) -> i32 {
        self.size.height
    }

    fn index(&self, x: i32, y: i32) -> usize {
        assert!(self.size.contains(x, y), "pixel access out of bounds: (x: {x}, y: {y}) in {}", self.size);
        (y * self.size.width + x) as usize
    }

    pub fn get(&self, x: i32, y: i32) -> Color {
        self.data[self.index(x, y)]
    }

    pub fn set(&mut self, x: i32, y: i32, color: Color) {
        let idx = self.index(x, y);
        self.data[idx] = color;
    }

    pub fn get_at(&self, pos: Position) -> Color {
        self.get(pos.x, pos.y)
    }

    pub fn set_at(&mut self, pos: Position, color: Color) {
        self.set(pos.x, pos.y, color);
    }

    /// Bulk read access to one row
    pub fn row(&self, y: i32) -> &[Color] {
        assert!(y >= 0 && y < self.size.height, "row out of bounds: {y} in {}", self.size);
        let start = (y * self.size.width) as usize;
        &self.data[start..start + self.size.width as usize]
    }

    /// Bulk write access to one row
    pub fn row_mut(&mut self, y: i32) -> &mut [Color] {
        assert!(y >= 0 && y < self.size.height, "row out of bounds: {y} in {}", self.size);
        let start = (y * self.size.width) as usize;
        let width = self.size.width as usize;
        &mut self.data[start..start + width]
    }

    /// Overwrite every pixel with the given color
    pub fn fill(&mut self, color: Color) {
        self.data.fill(color);
    }

    pub fn pixels(&self) -> impl Iterator<Item = Color> + '_ {
        self.data.iter().copied()
    }
}

impl PixelAccess for PixelBuffer {
    fn width(&self) -> i32 {
        self.size.width
    }

    fn height(&self) -> i32 {
        self.size.height
    }

    fn pixel(&self, x: i32, y: i32) -> Color {
        self.get(x, y)
    }

    fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        self.set(x, y, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_buffer_is_transparent() {
        let buffer = PixelBuffer::new((4, 3));
        assert_eq!(buffer.get_width(), 4);
        assert_eq!(buffer.get_height(), 3);
        assert!(buffer.pixels().all(|color| color == Color::TRANSPARENT));
    }

    #[test]
    fn test_set_and_get() {
        let mut buffer = PixelBuffer::filled((4, 3), Color::WHITE);
        buffer.set(2, 1, Color::RED);
        assert_eq!(buffer.get(2, 1), Color::RED);
        assert_eq!(buffer.get(1, 2), Color::WHITE);
    }

    #[test]
    fn test_row_access() {
        let mut buffer = PixelBuffer::filled((3, 2), Color::BLACK);
        buffer.row_mut(1).fill(Color::GREEN);
        assert!(buffer.row(1).iter().all(|&color| color == Color::GREEN));
        assert!(buffer.row(0).iter().all(|&color| color == Color::BLACK));
    }

    #[test]
    fn test_from_argb_rows() {
        let buffer = PixelBuffer::from_argb_rows(&[vec![0xFFFF_FFFF, 0xFFFF_0000], vec![0, 0xFF00_FF00]]);
        assert_eq!(buffer.get_size(), Size::new(2, 2));
        assert_eq!(buffer.get(1, 0), Color::RED);
        assert_eq!(buffer.get(0, 1), Color::TRANSPARENT);
        assert_eq!(buffer.get(1, 1), Color::GREEN);
    }

    #[test]
    fn test_empty_buffer() {
        let buffer = PixelBuffer::new((0, 0));
        assert!(buffer.is_empty());
        assert_eq!(buffer.pixels().count(), 0);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_out_of_bounds_get_panics() {
        let buffer = PixelBuffer::new((2, 2));
        let _ = buffer.get(2, 0);
    }
}
