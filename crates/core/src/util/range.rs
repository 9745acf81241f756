use derive_more::Display;
use rand::{
    distributions::uniform::{SampleRange, SampleUniform, UniformSampler},
    RngCore,
};

/// A range between two `f64` values, inclusive on both ends.
#[derive(Copy, Clone, Debug, Display, PartialEq)]
#[display(fmt = "[{}, {}]", min, max)]
pub struct NumRange {
    pub min: f64,
    pub max: f64,
}

impl NumRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Get the [0,1] range.
    pub const fn normal_range() -> Self {
        Self::new(0.0, 1.0)
    }

    /// Create a [RangeValue] in this range, which is convenient for chaining
    /// operations on a single value.
    pub fn value(self, value: f64) -> RangeValue {
        RangeValue { value, range: self }
    }

    /// Max minus min
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Check if a value is in this range. Ranges are inclusive on both ends.
    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }

    /// Map a value from this range to the target range. If the span of this
    /// range is zero, we can't properly map the value because we don't know
    /// where on the target range it should fall. In that case, we just always
    /// return the **minimum** of the target range.
    pub fn map_to(&self, dest_range: &Self, value: f64) -> f64 {
        let span = self.span();
        if span > 0.0 {
            // Map down to [0,1], then map back up to the target range
            let normalized = (value - self.min) / span;
            dest_range.min + normalized * dest_range.span()
        } else {
            // Source span is zero, so we can't do a proper mapping (which
            // would just return NaN). Arbitrarily pick the min bound on the
            // target
            dest_range.min
        }
    }

    /// Map a value from this range to the range [0, 1]
    pub fn normalize(&self, value: f64) -> f64 {
        self.map_to(&Self::normal_range(), value)
    }

    /// Force a value into this range. If it's already in the range, return
    /// that value. If it's outside the range, return the bound (lower or
    /// upper) that's closest to the value.
    pub fn clamp(&self, value: f64) -> f64 {
        if value < self.min {
            self.min
        } else if value > self.max {
            self.max
        } else {
            value
        }
    }
}

// allow generating samples in the range
impl SampleRange<f64> for NumRange {
    #[inline]
    fn sample_single<R: RngCore + ?Sized>(self, rng: &mut R) -> f64 {
        <f64 as SampleUniform>::Sampler::sample_single_inclusive(
            self.min, self.max, rng,
        )
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.min > self.max
    }
}

/// An alternative interface for [NumRange] that makes it easy to chain
/// operations on a single value.
///
/// ```
/// use tarn::NumRange;
///
/// let range = NumRange::new(10.0, 20.0);
/// let value = range.value(15.0).normalize().apply(|x| x + 1.0).inner();
/// assert_eq!(value, 1.5);
/// ```
#[derive(Copy, Clone, Debug)]
pub struct RangeValue {
    value: f64,
    range: NumRange,
}

impl RangeValue {
    /// Get the value from this struct
    pub fn inner(self) -> f64 {
        self.value
    }

    /// Map this value to the range [0,1]
    pub fn normalize(self) -> Self {
        self.map_to(NumRange::normal_range())
    }

    /// Map this value from the current range to a new range.
    pub fn map_to(self, range: NumRange) -> Self {
        let new_value = self.range.map_to(&range, self.value);
        Self {
            range,
            value: new_value,
        }
    }

    /// Force the given value into this range. If it falls outside the range,
    /// it will be set to the nearer of the two bounds.
    pub fn clamp(self) -> Self {
        Self {
            value: self.range.clamp(self.value),
            range: self.range,
        }
    }

    /// Apply the given mapping function to this value. The value will be
    /// replaced with the output of the function.
    pub fn apply(self, f: impl FnOnce(f64) -> f64) -> Self {
        Self {
            value: f(self.value),
            range: self.range,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn test_span() {
        let range = NumRange::new(1.0, 3.0);
        assert_approx_eq!(range.span(), 2.0);
    }

    #[test]
    fn test_contains() {
        let range = NumRange::new(1.0, 3.0);
        assert!(!range.contains(0.9));
        assert!(range.contains(1.0));
        assert!(range.contains(2.0));
        assert!(range.contains(3.0));
        assert!(!range.contains(3.1));
    }

    #[test]
    fn test_map_to() {
        let input_range = NumRange::new(1.0, 3.0);
        let output_range = NumRange::new(20.0, 40.0);
        assert_approx_eq!(input_range.map_to(&output_range, 1.0), 20.0);
        assert_approx_eq!(input_range.map_to(&output_range, 2.0), 30.0);
        assert_approx_eq!(input_range.map_to(&output_range, 3.0), 40.0);

        // A zero-length span should always map to the min of the output range
        let input_range = NumRange::new(1.0, 1.0);
        assert_approx_eq!(input_range.map_to(&output_range, 0.0), 20.0);
        assert_approx_eq!(input_range.map_to(&output_range, 1.0), 20.0);
    }

    #[test]
    fn test_normalize() {
        let range = NumRange::new(1.0, 3.0);
        assert_approx_eq!(range.normalize(1.0), 0.0);
        assert_approx_eq!(range.normalize(2.0), 0.5);
        assert_approx_eq!(range.normalize(3.0), 1.0);

        // A zero-length span should always map to zero
        let range = NumRange::new(1.0, 1.0);
        assert_approx_eq!(range.normalize(1.0), 0.0);
        assert_approx_eq!(range.normalize(1.5), 0.0);
    }

    #[test]
    fn test_clamp() {
        let range = NumRange::new(1.0, 3.0);
        assert_approx_eq!(range.clamp(0.0), 1.0);
        assert_approx_eq!(range.clamp(2.0), 2.0);
        assert_approx_eq!(range.clamp(6.0), 3.0);
    }

    #[test]
    fn test_chained_value() {
        let value = NumRange::new(0.0, 4.0)
            .value(2.0)
            .normalize()
            .apply(|v| v * v)
            .map_to(NumRange::new(0.0, 100.0))
            .inner();
        assert_approx_eq!(value, 25.0);
    }
}
