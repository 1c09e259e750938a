//! Color distance evaluation for tolerant filling.

use raster_engine::Color;

/// Largest meaningful tolerance value: the Euclidean distance between two
/// colors maximally far apart on all four 8 bit channels,
/// `sqrt(4 * 255^2)`. A fill with this tolerance accepts every color.
pub const MAX_ABSOLUTE_TOLERANCE: f32 = 510.0;

/// True iff `candidate` is close enough to `reference` for the given
/// tolerance.
///
/// The metric is squared Euclidean distance over the (alpha, red, green,
/// blue) channel differences, compared inclusively against
/// `tolerance^2`. Symmetric in its color arguments; a tolerance of `0.0`
/// accepts only exact channel equality.
pub fn is_within_tolerance(reference: Color, candidate: Color, tolerance: f32) -> bool {
    reference.distance_squared(candidate) as f32 <= tolerance * tolerance
}
