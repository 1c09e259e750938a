//! Span based tolerant flood fill.

use std::collections::VecDeque;

use raster_engine::{Color, PixelAccess, Position};

use super::{check_fill_preconditions, is_within_tolerance, FillAlgorithm, FillAlgorithmFactory};

const UP: i32 = -1;
const DOWN: i32 = 1;

/// A maximal horizontal run of filled pixels plus the vertical direction
/// the run still has to be checked against.
#[derive(Clone, Copy, Debug)]
struct Range {
    line: i32,
    start: i32,
    end: i32,
    direction: i32,
}

/// Scanline flood fill.
///
/// Fills whole horizontal spans at a time and re-scans only the parts of
/// the rows above and below that a previous span has not already
/// classified. Every matching pixel is written exactly once.
#[derive(Debug, Default, Clone, Copy)]
pub struct ScanlineFill;

impl FillAlgorithm for ScanlineFill {
    fn fill(&self, target: &mut dyn PixelAccess, start: Position, target_color: Color, tolerance: f32) -> usize {
        if !check_fill_preconditions(target, start, target_color, tolerance) {
            return 0;
        }
        let reference = target.pixel(start.x, start.y);
        let mut run = FillRun {
            width: target.width(),
            height: target.height(),
            visited: vec![false; target.size().area()],
            target,
            reference,
            target_color,
            tolerance,
            filled: 0,
            ranges: VecDeque::new(),
        };

        let first = run.generate_range(start.y, start.x, UP);
        run.ranges.push_back(Range { direction: DOWN, ..first });
        run.ranges.push_back(first);

        while let Some(range) = run.ranges.pop_front() {
            let row = range.line + range.direction;
            if row >= 0 && row < run.height {
                run.check_range(range, row);
            }
        }
        run.filled
    }
}

/// Per-call traversal state; dropped when the fill returns.
struct FillRun<'a> {
    target: &'a mut dyn PixelAccess,
    reference: Color,
    target_color: Color,
    tolerance: f32,
    width: i32,
    height: i32,
    visited: Vec<bool>,
    filled: usize,
    ranges: VecDeque<Range>,
}

impl FillRun<'_> {
    fn is_visited(&self, x: i32, y: i32) -> bool {
        self.visited[(y * self.width + x) as usize]
    }

    /// Classify an untouched pixel against the fixed reference color.
    /// Visited pixels never match again, so their (already overwritten)
    /// color is never read.
    fn matches(&self, x: i32, y: i32) -> bool {
        !self.is_visited(x, y) && is_within_tolerance(self.reference, self.target.pixel(x, y), self.tolerance)
    }

    fn write(&mut self, x: i32, y: i32) {
        self.target.set_pixel(x, y, self.target_color);
        self.visited[(y * self.width + x) as usize] = true;
        self.filled += 1;
    }

    /// Fill the maximal matching run around (col, row) and return it as a
    /// range to be checked in `direction`.
    fn generate_range(&mut self, row: i32, col: i32, direction: i32) -> Range {
        self.write(col, row);
        let mut start = col;
        while start > 0 && self.matches(start - 1, row) {
            start -= 1;
            self.write(start, row);
        }
        let mut end = col;
        while end + 1 < self.width && self.matches(end + 1, row) {
            end += 1;
            self.write(end, row);
        }
        Range { line: row, start, end, direction }
    }

    /// Scan `row` within the parent range's x extent, fill every new run
    /// found there and queue the follow-up ranges.
    fn check_range(&mut self, range: Range, row: i32) {
        let mut col = range.start;
        while col <= range.end {
            if self.matches(col, row) {
                let new_range = self.generate_range(row, col, range.direction);
                // Runs overhanging the parent range re-seed the row the
                // parent came from, minus the two border cells the parent
                // run already classified while expanding.
                if new_range.start <= range.start - 2 {
                    self.ranges.push_back(Range {
                        line: row,
                        start: new_range.start,
                        end: range.start - 2,
                        direction: -range.direction,
                    });
                }
                if new_range.end >= range.end + 2 {
                    self.ranges.push_back(Range {
                        line: row,
                        start: range.end + 2,
                        end: new_range.end,
                        direction: -range.direction,
                    });
                }
                col = new_range.end + 1;
                self.ranges.push_back(new_range);
            } else {
                col += 1;
            }
        }
    }
}

/// Factory for the default scanline strategy
#[derive(Debug, Default, Clone, Copy)]
pub struct ScanlineFillFactory;

impl FillAlgorithmFactory for ScanlineFillFactory {
    fn create(&self) -> Box<dyn FillAlgorithm> {
        Box::new(ScanlineFill)
    }
}
