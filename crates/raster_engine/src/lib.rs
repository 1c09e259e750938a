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
mod error;
pub use error::*;

mod position;
pub use position::*;

mod size;
pub use size::*;

mod color;
pub use color::*;

mod pixel_buffer;
pub use pixel_buffer::*;

mod layer;
pub use layer::*;
