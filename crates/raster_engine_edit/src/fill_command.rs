//! The undoable fill unit of work.

use raster_engine::{Color, EngineError, LayerModel, PixelAccess, Position, Result};

use crate::fill::{FillAlgorithmFactory, ScanlineFillFactory, MAX_ABSOLUTE_TOLERANCE};

/// Result of running a fill command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillOutcome {
    /// The buffer was not modified (seed already at the target color, or
    /// an empty buffer).
    NoOp,
    /// The connected region was recolored.
    Filled { pixels: usize },
}

impl FillOutcome {
    pub fn is_no_op(&self) -> bool {
        matches!(self, FillOutcome::NoOp)
    }
}

/// Immutable record of one fill action: clicked point, target color,
/// tolerance and the algorithm to run it with.
///
/// The command resolves the current layer's buffer from the layer model
/// at execution time, so a replay observes whatever buffer state is
/// current for its target layer. No traversal state outlives `run`.
pub struct FillCommand {
    clicked: Position,
    target_color: Color,
    tolerance: f32,
    factory: Box<dyn FillAlgorithmFactory>,
}

impl FillCommand {
    /// Create a command with the default scanline strategy.
    ///
    /// # Panics
    ///
    /// Asserts `tolerance` is within `0.0..=MAX_ABSOLUTE_TOLERANCE`;
    /// callers clamp or reject before constructing a command.
    pub fn new(clicked: Position, target_color: Color, tolerance: f32) -> Self {
        Self::with_factory(clicked, target_color, tolerance, Box::new(ScanlineFillFactory))
    }

    /// Create a command with an injected algorithm factory.
    pub fn with_factory(clicked: Position, target_color: Color, tolerance: f32, factory: Box<dyn FillAlgorithmFactory>) -> Self {
        assert!(
            (0.0..=MAX_ABSOLUTE_TOLERANCE).contains(&tolerance),
            "tolerance out of range: {tolerance}"
        );
        FillCommand {
            clicked,
            target_color,
            tolerance,
            factory,
        }
    }

    pub fn clicked(&self) -> Position {
        self.clicked
    }

    pub fn target_color(&self) -> Color {
        self.target_color
    }

    pub fn tolerance(&self) -> f32 {
        self.tolerance
    }

    /// Run the fill against the model's current layer, mutating its
    /// buffer in place.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::NoCurrentLayer` if the model has no current
    /// layer to resolve.
    pub fn run(&self, layer_model: &mut LayerModel) -> Result<FillOutcome> {
        let layer = layer_model.current_layer_mut().ok_or(EngineError::NoCurrentLayer)?;
        if layer.is_empty() {
            return Ok(FillOutcome::NoOp);
        }
        let algorithm = self.factory.create();
        let pixels = algorithm.fill(layer, self.clicked, self.target_color, self.tolerance);
        log::debug!(
            "flood fill at {} with {} (tolerance {}): {} pixel(s) changed",
            self.clicked,
            self.target_color,
            self.tolerance,
            pixels
        );
        if pixels == 0 {
            Ok(FillOutcome::NoOp)
        } else {
            Ok(FillOutcome::Filled { pixels })
        }
    }
}

impl std::fmt::Debug for FillCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FillCommand")
            .field("clicked", &self.clicked)
            .field("target_color", &self.target_color)
            .field("tolerance", &self.tolerance)
            .finish_non_exhaustive()
    }
}
