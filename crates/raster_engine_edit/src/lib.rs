#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::cast_sign_loss,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_lossless,
    clippy::cast_precision_loss,
    clippy::must_use_candidate,
    clippy::return_self_not_must_use
)]
pub mod fill;
pub use fill::{FillAlgorithm, FillAlgorithmFactory, QueueFill, QueueFillFactory, ScanlineFill, ScanlineFillFactory, MAX_ABSOLUTE_TOLERANCE};

mod fill_command;
pub use fill_command::*;

mod undo_operations;
pub use undo_operations::*;

mod edit_state;
pub use edit_state::*;

// Re-export all necessary types from raster_engine
pub use raster_engine::{Color, EngineError, Layer, LayerModel, LayerProperties, PixelAccess, PixelBuffer, Position, Result, Size};
