// Copyright 2025 the Letterbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! 16.16 fixed-point ratios.
//!
//! Layout math runs on integers so that the same window produces the same
//! rectangles on every platform. Ratios are stored with [`FRAC_BITS`]
//! fractional bits. Rounding rules:
//!
//! - [`Frac::ratio`] and [`Frac::div_into`] truncate toward zero.
//! - [`Frac::mul_int`] floors.
//! - [`round_scale`] rounds half up.

use core::fmt;

/// Number of fractional bits in a [`Frac`].
pub const FRAC_BITS: u32 = 16;

const FRAC_ONE: i64 = 1 << FRAC_BITS;

/// A fixed-point number with [`FRAC_BITS`] fractional bits.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Frac(i64);

impl Frac {
    /// Zero.
    pub const ZERO: Self = Self(0);
    /// One.
    pub const ONE: Self = Self(FRAC_ONE);
    /// The classic 4:3 display aspect ratio, truncated to fixed point.
    pub const FOUR_THIRDS: Self = Self((4 << FRAC_BITS) / 3);

    /// Creates a fraction from its raw fixed-point representation.
    #[must_use]
    pub const fn from_raw(raw: i64) -> Self {
        Self(raw)
    }

    /// Returns the raw fixed-point representation.
    #[must_use]
    pub const fn raw(self) -> i64 {
        self.0
    }

    /// Converts an integer to fixed point.
    #[must_use]
    pub const fn from_int(n: i32) -> Self {
        Self((n as i64) << FRAC_BITS)
    }

    /// Returns `num / den`, truncated toward zero.
    ///
    /// A zero denominator yields [`Frac::ZERO`].
    #[must_use]
    pub const fn ratio(num: i32, den: i32) -> Self {
        if den == 0 {
            return Self::ZERO;
        }
        Self(Self::from_int(num).0 / den as i64)
    }

    /// Returns `n / self` as an integer, truncated toward zero.
    ///
    /// Dividing by [`Frac::ZERO`] yields zero.
    #[must_use]
    pub fn div_into(self, n: i32) -> i32 {
        if self.0 == 0 {
            return 0;
        }
        saturate(Self::from_int(n).0 / self.0)
    }

    /// Returns `n * self` as an integer, rounded down.
    #[must_use]
    pub fn mul_int(self, n: i32) -> i32 {
        saturate((i64::from(n) * self.0) >> FRAC_BITS)
    }

    /// Integer part, rounded down.
    #[must_use]
    pub fn to_int(self) -> i32 {
        saturate(self.0 >> FRAC_BITS)
    }
}

impl fmt::Debug for Frac {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let int = self.0 >> FRAC_BITS;
        let frac = self.0 & (FRAC_ONE - 1);
        write!(f, "Frac({int} + {frac}/{FRAC_ONE})")
    }
}

/// Scales `value` from a `from`-sized axis to a `to`-sized axis, rounding half up.
///
/// This is `(value * to + from / 2) / from` with floor division, evaluated in
/// 64-bit arithmetic. A non-positive `from` yields zero.
#[must_use]
pub fn round_scale(value: i32, to: i32, from: i32) -> i32 {
    if from <= 0 {
        return 0;
    }
    let from = i64::from(from);
    saturate((i64::from(value) * i64::from(to) + from / 2).div_euclid(from))
}

/// Scales `value` from a `from`-sized axis to a `to`-sized axis, rounding down.
///
/// A non-positive `from` yields zero.
#[must_use]
pub fn floor_scale(value: i32, to: i32, from: i32) -> i32 {
    if from <= 0 {
        return 0;
    }
    saturate((i64::from(value) * i64::from(to)).div_euclid(i64::from(from)))
}

fn saturate(v: i64) -> i32 {
    i32::try_from(v).unwrap_or(if v < 0 { i32::MIN } else { i32::MAX })
}

#[cfg(test)]
mod tests {
    use super::{FRAC_BITS, Frac, floor_scale, round_scale};

    #[test]
    fn four_thirds_truncates() {
        assert_eq!(Frac::FOUR_THIRDS.raw(), 87_381);
        assert_eq!(Frac::ratio(4, 3), Frac::FOUR_THIRDS);
        assert_eq!(Frac::ratio(320, 240), Frac::FOUR_THIRDS);
        // 800x600 and 320x240 compare equal after truncation.
        assert_eq!(Frac::ratio(800, 600), Frac::ratio(320, 240));
    }

    #[test]
    fn div_into_and_mul_int_rounding() {
        // 320 / (4/3) = 240.0009.. truncates to 240.
        assert_eq!(Frac::FOUR_THIRDS.div_into(320), 240);
        // 600 * (4/3) = 799.99.. floors to 799.
        assert_eq!(Frac::FOUR_THIRDS.mul_int(600), 799);
        assert_eq!(Frac::ratio(2, 1).mul_int(500), 1000);
        assert_eq!(Frac::ZERO.div_into(10), 0);
        assert_eq!(Frac::ratio(1, 0), Frac::ZERO);
    }

    #[test]
    fn to_int_floors_negative_values() {
        assert_eq!(Frac::from_raw(-1).to_int(), -1);
        assert_eq!(Frac::from_int(7).to_int(), 7);
        assert_eq!(Frac::ONE.raw(), 1 << FRAC_BITS);
    }

    #[test]
    fn round_scale_rounds_half_up() {
        // 1 * 240 / 480 = 0.5 -> 1
        assert_eq!(round_scale(1, 240, 480), 1);
        // 3 * 1 / 4 = 0.75 -> 1, 1 * 1 / 4 = 0.25 -> 0
        assert_eq!(round_scale(3, 1, 4), 1);
        assert_eq!(round_scale(1, 1, 4), 0);
        // Negative inputs floor after the half offset.
        assert_eq!(round_scale(-3, 1, 4), -1);
        assert_eq!(round_scale(5, 10, 0), 0);
    }

    #[test]
    fn floor_scale_floors() {
        assert_eq!(floor_scale(799, 1024, 800), 1022);
        assert_eq!(floor_scale(-1, 1, 2), -1);
        assert_eq!(floor_scale(5, 10, 0), 0);
    }
}
