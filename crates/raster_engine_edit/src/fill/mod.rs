//! Tolerant flood fill.
//!
//! Two interchangeable traversal strategies behind the [`FillAlgorithm`]
//! seam:
//! - [`ScanlineFill`] — span/range based, skips already classified cells
//!   when re-scanning neighbor rows (the default)
//! - [`QueueFill`] — naive explicit work-list, one pixel at a time
//!
//! Both fix the reference color at the seed pixel's original color for
//! the whole traversal, use strict 4-connectivity and classify a pixel
//! before anything is written to it.

mod tolerance;
pub use tolerance::*;

mod scanline;
pub use scanline::*;

mod queue;
pub use queue::*;

use raster_engine::{Color, PixelAccess, Position};

/// A flood fill strategy.
///
/// `fill` mutates `target` in place and returns the number of pixels
/// written; `0` means the operation was a no-op.
///
/// # Panics
///
/// Asserts that `start` lies inside a non-empty `target` and that
/// `tolerance` is within `0.0..=MAX_ABSOLUTE_TOLERANCE`; both are caller
/// contracts, not runtime conditions. An empty target is a clean no-op.
pub trait FillAlgorithm {
    fn fill(&self, target: &mut dyn PixelAccess, start: Position, target_color: Color, tolerance: f32) -> usize;
}

/// Creates the fill algorithm a command should run with.
///
/// Injected into `FillCommand` at construction time so the strategy can
/// be swapped without touching the command.
pub trait FillAlgorithmFactory: Send + Sync {
    fn create(&self) -> Box<dyn FillAlgorithm>;
}

/// Shared precondition checks for both strategies.
///
/// Returns `false` if the fill is a guaranteed no-op (empty target or
/// seed already at the target color).
pub(crate) fn check_fill_preconditions(target: &dyn PixelAccess, start: Position, target_color: Color, tolerance: f32) -> bool {
    if target.is_empty() {
        return false;
    }
    assert!(
        start.x >= 0 && start.x < target.width() && start.y >= 0 && start.y < target.height(),
        "fill seed out of bounds: {start} in {}",
        target.size()
    );
    assert!(
        (0.0..=MAX_ABSOLUTE_TOLERANCE).contains(&tolerance),
        "tolerance out of range: {tolerance}"
    );
    // Seed already has the target color: the filled region would be
    // rewritten with its own color, so nothing can change.
    target.pixel(start.x, start.y) != target_color
}
