//! Two-decimal fixed-point helpers.
//!
//! Money fields round half-away-from-zero; trip times truncate toward zero.
//! The two rules are deliberately different and must not be unified: a
//! package priced at 2047.5049 owes 2047.50, but a trip that takes 1.7857 h
//! is reported as 1.78 h, never 1.79.

/// Rounds to 2 decimal places, half away from zero.
///
/// # Examples
///
/// ```
/// use courier_core::rounding::round2;
///
/// assert_eq!(round2(105.0), 105.0);
/// assert_eq!(round2(0.125), 0.13);
/// assert_eq!(round2(1.994999), 1.99);
/// ```
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Truncates to 2 decimal places (floor for the non-negative values used
/// here), never rounding up.
///
/// # Examples
///
/// ```
/// use courier_core::rounding::trunc2;
///
/// assert_eq!(trunc2(1.7857), 1.78);
/// assert_eq!(trunc2(0.4285714), 0.42);
/// assert_eq!(trunc2(2.0), 2.0);
/// ```
pub fn trunc2(value: f64) -> f64 {
    (value * 100.0).floor() / 100.0
}
