//! Naive work-list tolerant flood fill.

use raster_engine::{Color, PixelAccess, Position};

use super::{check_fill_preconditions, is_within_tolerance, FillAlgorithm, FillAlgorithmFactory};

/// One-pixel-at-a-time flood fill with an explicit work list.
///
/// Slower than [`super::ScanlineFill`] on large uniform regions but easy
/// to follow; kept as the reference strategy the scanline variant is
/// checked against.
#[derive(Debug, Default, Clone, Copy)]
pub struct QueueFill;

impl FillAlgorithm for QueueFill {
    fn fill(&self, target: &mut dyn PixelAccess, start: Position, target_color: Color, tolerance: f32) -> usize {
        if !check_fill_preconditions(target, start, target_color, tolerance) {
            return 0;
        }
        let width = target.width();
        let height = target.height();
        let reference = target.pixel(start.x, start.y);
        let mut visited = vec![false; target.size().area()];
        let mut stack = vec![start];
        let mut filled = 0;

        visited[(start.y * width + start.x) as usize] = true;
        while let Some(pos) = stack.pop() {
            target.set_pixel(pos.x, pos.y, target_color);
            filled += 1;

            for (dx, dy) in [(-1, 0), (1, 0), (0, -1), (0, 1)] {
                let x = pos.x + dx;
                let y = pos.y + dy;
                if x < 0 || x >= width || y < 0 || y >= height {
                    continue;
                }
                let idx = (y * width + x) as usize;
                if visited[idx] {
                    continue;
                }
                if is_within_tolerance(reference, target.pixel(x, y), tolerance) {
                    visited[idx] = true;
                    stack.push(Position::new(x, y));
                }
            }
        }
        filled
    }
}

/// Factory for the naive work-list strategy
#[derive(Debug, Default, Clone, Copy)]
pub struct QueueFillFactory;

impl FillAlgorithmFactory for QueueFillFactory {
    fn create(&self) -> Box<dyn FillAlgorithm> {
        Box::new(QueueFill)
    }
}
