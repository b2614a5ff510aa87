//! Affine rescaling between arbitrary ranges and the normalized `[-1, 1]` interval.

#![cfg_attr(not(test), no_std)]

mod bounds;
mod error;

pub use bounds::Bounds;
pub use error::DivisionByZero;

use num_traits::float::FloatCore;

/// Maps a value from the range `[var_min, var_max]` onto `[-1, 1]`.
///
/// `var_min` lands on `-1` and `var_max` lands on `1`. Values outside the range are
/// extrapolated along the same line rather than clamped, and NaN or infinite inputs
/// propagate through the arithmetic as usual.
///
/// # Errors
///
/// Returns [`DivisionByZero`] if `var_min == var_max`.
///
/// # Examples
///
/// ```
/// use rescale_math::{normalize, DivisionByZero};
///
/// assert_eq!(normalize(5.0, 0.0, 10.0), Ok(0.0));
/// assert_eq!(normalize(0.0, -1.0, 1.0), Ok(0.0));
///
/// // A range with no width can't be normalized against:
/// assert_eq!(normalize(3.0, 2.0, 2.0), Err(DivisionByZero));
/// ```
pub fn normalize<T: FloatCore>(value: T, var_min: T, var_max: T) -> Result<T, DivisionByZero> {
    Ok(Bounds::new(var_min, var_max)?.normalize(value))
}

/// Maps a value from `[-1, 1]` back onto the range `[var_min, var_max]`.
///
/// This is the inverse of [`normalize`] for the same pair of bounds.
///
/// # Errors
///
/// Returns [`DivisionByZero`] if `var_min == var_max`.
///
/// # Examples
///
/// ```
/// use rescale_math::{denormalize, normalize};
///
/// assert_eq!(denormalize(0.0, 0.0, 10.0), Ok(5.0));
/// assert_eq!(denormalize(-1.0, 4.0, 8.0), Ok(4.0));
///
/// let n = normalize(7.5, 0.0, 10.0)?;
/// assert_eq!(denormalize(n, 0.0, 10.0), Ok(7.5));
/// # Ok::<(), rescale_math::DivisionByZero>(())
/// ```
pub fn denormalize<T: FloatCore>(value: T, var_min: T, var_max: T) -> Result<T, DivisionByZero> {
    Ok(Bounds::new(var_min, var_max)?.denormalize(value))
}
