// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Square root, logarithms and powers over [`Fix64`].
//!
//! All routines run a fixed or data-bounded number of integer steps; none
//! touch floating point.

use super::fix64::Fix64;
use super::fixed_q32_32::{FRAC_BITS, ONE_RAW};
use crate::DomainError;

/// Digit-by-digit square root of a raw Q31.32 magnitude.
///
/// The first pass resolves the top half of the answer on the integer bits;
/// the remainder is then shifted up by 32 and a second pass resolves the
/// fractional half, which keeps every intermediate inside `u64`. The result
/// rounds up when the next digit would have been 1.
pub(crate) const fn sqrt_raw(value: u64) -> u64 {
    const HALF_WIDTH: u32 = 32;

    let mut num = value;
    let mut result = 0_u64;
    let mut bit = 1_u64 << 62;
    while bit > num {
        bit >>= 2;
    }

    let mut pass = 0;
    while pass < 2 {
        while bit != 0 {
            if num >= result + bit {
                num -= result + bit;
                result = (result >> 1) + bit;
            } else {
                result >>= 1;
            }
            bit >>= 2;
        }

        if pass == 0 {
            if num > (1_u64 << HALF_WIDTH) - 1 {
                // num = a - (result + 0.5)^2 = num - result - 0.5
                num -= result;
                num = (num << HALF_WIDTH).wrapping_sub(0x8000_0000);
                result = (result << HALF_WIDTH) + 0x8000_0000;
            } else {
                num <<= HALF_WIDTH;
                result <<= HALF_WIDTH;
            }
            bit = 1_u64 << (HALF_WIDTH - 2);
        }
        pass += 1;
    }

    if num > result {
        result += 1;
    }
    result
}

impl Fix64 {
    /// Square root.
    ///
    /// `sqrt(0) == 0` and `sqrt(1) == 1` exactly.
    ///
    /// # Errors
    /// [`DomainError::NegativeSqrt`] for negative input.
    pub fn sqrt(self) -> Result<Self, DomainError> {
        if self.is_negative() {
            return Err(DomainError::NegativeSqrt { raw: self.raw() });
        }
        Ok(Self::from_raw(sqrt_raw(self.raw() as u64) as i64))
    }

    /// Base-2 logarithm using Clay S. Turner's binary logarithm algorithm.
    ///
    /// The value is first normalised into `[1, 2)`; each of the 32 fractional
    /// result bits then comes from squaring the mantissa and checking whether
    /// it crossed 2.
    ///
    /// # Errors
    /// [`DomainError::NonPositiveLog`] for zero or negative input.
    pub fn log2(self) -> Result<Self, DomainError> {
        let mut x = self.raw();
        if x <= 0 {
            return Err(DomainError::NonPositiveLog { raw: x });
        }

        let mut y = 0_i64;
        while x < ONE_RAW {
            x <<= 1;
            y -= ONE_RAW;
        }
        while x >= ONE_RAW << 1 {
            x >>= 1;
            y += ONE_RAW;
        }

        let mut z = Self::from_raw(x);
        let mut b = 1_i64 << (FRAC_BITS - 1);
        for _ in 0..FRAC_BITS {
            z = z * z;
            if z.raw() >= ONE_RAW << 1 {
                z = Self::from_raw(z.raw() >> 1);
                y += b;
            }
            b >>= 1;
        }

        Ok(Self::from_raw(y))
    }

    /// Natural logarithm, `log2(x) * ln 2`.
    ///
    /// # Errors
    /// [`DomainError::NonPositiveLog`] for zero or negative input.
    pub fn ln(self) -> Result<Self, DomainError> {
        Ok(self.log2()? * Self::LN2)
    }

    /// `2^x`.
    ///
    /// Exponents at or beyond [`Fix64::LOG2_MAX`] saturate to `MAX` (or to the
    /// reciprocal of `MAX` for negative exponents). Otherwise the integer part
    /// becomes a shift and the fractional part is summed as the power series
    /// of `e^(x ln 2)` until a term underflows to zero.
    pub fn pow2(self) -> Self {
        if self == Self::ZERO {
            return Self::ONE;
        }

        let negative = self.is_negative();
        let x = if negative { -self } else { self };

        if x == Self::ONE {
            return if negative { Self::HALF } else { Self::TWO };
        }
        if x >= Self::LOG2_MAX {
            return if negative {
                Self::ONE / Self::MAX
            } else {
                Self::MAX
            };
        }
        if x <= Self::LOG2_MIN {
            return if negative { Self::MAX } else { Self::ZERO };
        }

        let integer_part = x.to_int();
        let fraction = x.fract();

        let mut result = Self::ONE;
        let mut term = Self::ONE;
        let mut i = 1;
        while term != Self::ZERO {
            term = fraction * term * Self::LN2 / Self::from_int(i);
            result += term;
            i += 1;
        }

        // x < LOG2_MAX keeps integer_part in 0..=30, so the shift cannot overflow.
        let result = Self::from_raw(result.raw() << integer_part);
        if negative {
            Self::ONE / result
        } else {
            result
        }
    }

    /// `self^exponent`, computed as `2^(exponent * log2(self))`.
    ///
    /// `1^e == 1`, `b^0 == 1` and `0^e == 0` short-circuit before the
    /// logarithm.
    ///
    /// # Errors
    /// [`DomainError::NonPositiveLog`] when the base is negative.
    pub fn pow(self, exponent: Self) -> Result<Self, DomainError> {
        if self == Self::ONE || exponent == Self::ZERO {
            return Ok(Self::ONE);
        }
        if self == Self::ZERO {
            return Ok(Self::ZERO);
        }
        let log2 = self.log2()?;
        Ok(exponent.safe_mul(log2).pow2())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fx(v: f64) -> Fix64 {
        Fix64::from_f64(v)
    }

    fn close(actual: Fix64, expected: f64, tol: f64) -> bool {
        (actual.to_f64() - expected).abs() <= tol
    }

    #[test]
    fn sqrt_exact_squares() {
        assert_eq!(Fix64::ZERO.sqrt(), Ok(Fix64::ZERO));
        assert_eq!(Fix64::ONE.sqrt(), Ok(Fix64::ONE));
        assert_eq!(fx(4.0).sqrt(), Ok(fx(2.0)));
        assert_eq!(fx(0.25).sqrt(), Ok(fx(0.5)));
        assert_eq!(fx(1_000_000.0).sqrt(), Ok(fx(1000.0)));
    }

    #[test]
    fn sqrt_rejects_negative_input() {
        assert_eq!(
            Fix64::MINUS_ONE.sqrt(),
            Err(DomainError::NegativeSqrt {
                raw: Fix64::MINUS_ONE.raw()
            })
        );
        assert!(Fix64::from_raw(-1).sqrt().is_err());
    }

    #[test]
    fn sqrt_of_max_is_close() {
        let expected = libm::sqrt(Fix64::MAX.to_f64());
        let s = Fix64::MAX.sqrt().map(Fix64::to_f64);
        assert!(matches!(s, Ok(v) if (v - expected).abs() < 1e-6));
        assert!(matches!(s, Ok(v) if (v - 46_340.950_011_84).abs() < 1e-6));
    }

    #[test]
    fn log2_of_powers_of_two_is_exact() {
        assert_eq!(Fix64::ONE.log2(), Ok(Fix64::ZERO));
        assert_eq!(fx(8.0).log2(), Ok(fx(3.0)));
        assert_eq!(fx(0.125).log2(), Ok(fx(-3.0)));
        assert_eq!(Fix64::PRECISION.log2(), Ok(fx(-32.0)));
    }

    #[test]
    fn log_rejects_non_positive_input() {
        assert_eq!(
            Fix64::ZERO.log2(),
            Err(DomainError::NonPositiveLog { raw: 0 })
        );
        assert!(fx(-2.0).ln().is_err());
        assert!(fx(-2.0).pow(fx(0.5)).is_err());
    }

    #[test]
    fn ln_matches_reference() {
        let ln_e = Fix64::E.ln().map(|v| close(v, 1.0, 1e-7));
        assert_eq!(ln_e, Ok(true));
        let ln_10 = fx(10.0).ln().map(|v| close(v, core::f64::consts::LN_10, 1e-7));
        assert_eq!(ln_10, Ok(true));
    }

    #[test]
    fn pow2_edges_and_values() {
        assert_eq!(Fix64::ZERO.pow2(), Fix64::ONE);
        assert_eq!(Fix64::ONE.pow2(), Fix64::TWO);
        assert_eq!(Fix64::MINUS_ONE.pow2(), Fix64::HALF);
        assert_eq!(fx(31.0).pow2(), Fix64::MAX);
        assert_eq!(fx(100.0).pow2(), Fix64::MAX);
        assert!(close(fx(0.5).pow2(), core::f64::consts::SQRT_2, 1e-7));
        assert!(close(fx(10.25).pow2(), 1_217.748_085_763, 1e-5));
        assert!(close(fx(-2.5).pow2(), 0.176_776_695, 1e-7));
    }

    #[test]
    fn pow_short_circuits_and_values() {
        assert_eq!(Fix64::ONE.pow(fx(123.0)), Ok(Fix64::ONE));
        assert_eq!(fx(-5.0).pow(Fix64::ZERO), Ok(Fix64::ONE));
        assert_eq!(Fix64::ZERO.pow(fx(3.0)), Ok(Fix64::ZERO));
        let cube = fx(3.0).pow(fx(3.0)).map(|v| close(v, 27.0, 1e-5));
        assert_eq!(cube, Ok(true));
        let root = fx(2.0).pow(fx(0.5)).map(|v| close(v, core::f64::consts::SQRT_2, 1e-7));
        assert_eq!(root, Ok(true));
    }
}
