use num_traits::float::FloatCore;

use crate::DivisionByZero;

/// A range of scalar values with distinct endpoints.
///
/// `min` maps to `-1` and `max` maps to `1` when normalizing. The endpoints may be
/// given in either order; a range with `min > max` simply flips the mapping.
///
/// # Examples
///
/// ```
/// use rescale_math::Bounds;
///
/// let celsius = Bounds::new(0.0, 100.0)?;
/// let fahrenheit = Bounds::new(32.0, 212.0)?;
///
/// assert_eq!(celsius.rescale(212.0, fahrenheit), 100.0);
/// assert_eq!(fahrenheit.normalize(122.0), 0.0);
/// # Ok::<(), rescale_math::DivisionByZero>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds<T> {
    min: T,
    max: T,
}

impl<T: FloatCore> Bounds<T> {
    /// Creates a new range from `min` to `max`.
    ///
    /// # Errors
    ///
    /// Returns [`DivisionByZero`] if `min == max`.
    pub fn new(min: T, max: T) -> Result<Self, DivisionByZero> {
        if min == max {
            return Err(DivisionByZero);
        }

        Ok(Self { min, max })
    }

    /// The normalized interval `[-1, 1]`.
    #[must_use]
    pub fn unit() -> Self {
        Self {
            min: -T::one(),
            max: T::one(),
        }
    }

    /// Returns the endpoint that normalizes to `-1`.
    #[must_use]
    pub const fn min(&self) -> T {
        self.min
    }

    /// Returns the endpoint that normalizes to `1`.
    #[must_use]
    pub const fn max(&self) -> T {
        self.max
    }

    /// Signed width of the range (`max - min`).
    #[must_use]
    pub fn span(&self) -> T {
        self.max - self.min
    }

    /// Maps `value` from this range onto `[-1, 1]`.
    #[must_use]
    pub fn normalize(&self, value: T) -> T {
        let two = T::one() + T::one();

        two * (value - self.min) / (self.max - self.min) - T::one()
    }

    /// Maps `value` from `[-1, 1]` onto this range.
    #[must_use]
    pub fn denormalize(&self, value: T) -> T {
        let two = T::one() + T::one();

        (value + T::one()) * (self.max - self.min) / two + self.min
    }

    /// Maps `value` from the range `from` onto this range.
    #[must_use]
    pub fn rescale(&self, value: T, from: Self) -> T {
        self.denormalize(from.normalize(value))
    }
}

impl<T: FloatCore> Default for Bounds<T> {
    fn default() -> Self {
        Self::unit()
    }
}

impl<T: FloatCore> TryFrom<(T, T)> for Bounds<T> {
    type Error = DivisionByZero;

    fn try_from((min, max): (T, T)) -> Result<Self, Self::Error> {
        Self::new(min, max)
    }
}
