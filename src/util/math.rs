//! Gaussian, rounding and clamping arithmetic

/// Unnormalized gaussian `exp(-x^2 / (2 * sigma^2))`
///
/// Peaks at 1.0 for `x = 0`. `sigma` must be non-zero.
#[inline]
pub fn gaussian(x: f64, sigma: f64) -> f64 {
    (-(x * x) / (2.0 * sigma * sigma)).exp()
}

/// Round to the nearest integer, halves away from zero
#[inline]
pub fn lrint(x: f64) -> i64 {
    x.round() as i64
}

/// Clamp `value` into `[min, max]`
///
/// Works for any ordered type, including `std::time::Duration`.
#[inline]
pub fn clip<T: PartialOrd>(value: T, min: T, max: T) -> T {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}
