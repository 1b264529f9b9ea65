//! Miscellaneous utility structs and functions.

use std::fmt::Debug;

use cgmath::num_traits::Float;

/// An interval on the real number line.
#[derive(Copy, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Interval<T> {
    pub min: T,
    pub max: T,
}

impl<T> Interval<T> {
    /// Creates a new interval.
    pub const fn new(min: T, max: T) -> Self {
        Self { min, max }
    }
}

impl<T: Float> Interval<T> {
    /// Linearly interpolates from `min` (at `t = 0`) to `max` (at `t = 1`).
    pub fn lerp(&self, t: T) -> T {
        self.min + t * (self.max - self.min)
    }
}

impl<T: Debug> Debug for Interval<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Interval({:?}, {:?})", &self.min, &self.max)
    }
}

#[cfg(test)]
mod test {
    use super::Interval;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn lerp() {
        let range: Interval<f64> = Interval::new(2.0, 6.0);
        assert_approx_eq!(range.lerp(0.0), 2.0);
        assert_approx_eq!(range.lerp(0.25), 3.0);
        assert_approx_eq!(range.lerp(1.0), 6.0);

        let reversed: Interval<f64> = Interval::new(1.0, -1.0);
        assert_approx_eq!(reversed.lerp(0.5), 0.0);
        assert_approx_eq!(reversed.lerp(1.0), -1.0);
    }
}
