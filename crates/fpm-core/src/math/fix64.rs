// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Deterministic Q31.32 fixed-point scalar.
//!
//! `Fix64` stores a signed 64-bit integer scaled by `2^32`:
//!
//! ```text
//! real_value = raw / 2^32
//! ```
//!
//! Determinism contract:
//! - All arithmetic is integer-only; no operation consults platform floats.
//! - Equality and ordering compare the raw integers.
//! - `+`, `-`, `*` wrap on overflow. They are the fast path for code that
//!   keeps values in range by construction.
//! - `safe_add`, `safe_sub`, `safe_mul` detect overflow from operand signs and
//!   saturate to [`Fix64::MAX`]/[`Fix64::MIN`].
//! - `/` saturates on overflow and returns [`Fix64::MAX`] for a zero divisor.
//! - Unary `-` and [`Fix64::abs`] map `MIN` to `MAX`.

use core::fmt;
use core::iter::Sum;
use core::ops::{
    Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign,
};

use super::fixed_q32_32::{self, FRAC_BITS, ONE_RAW};

const FRAC_MASK: i64 = 0x0000_0000_FFFF_FFFF;
const INT_MASK: i64 = !FRAC_MASK;
const HALF_FRAC: i64 = 0x8000_0000;

/// Deterministic Q31.32 fixed-point number.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Fix64 {
    raw: i64,
}

impl Fix64 {
    /// Additive identity.
    pub const ZERO: Self = Self::from_raw(0);
    /// Multiplicative identity.
    pub const ONE: Self = Self::from_raw(ONE_RAW);
    /// `-1`.
    pub const MINUS_ONE: Self = Self::from_raw(-ONE_RAW);
    /// `2`.
    pub const TWO: Self = Self::from_int(2);
    /// `3`.
    pub const THREE: Self = Self::from_int(3);
    /// `0.5`.
    pub const HALF: Self = Self::from_raw(div_raw(ONE_RAW, 2 * ONE_RAW));
    /// `0.25`.
    pub const QUARTER: Self = Self::from_raw(mul_raw(Self::HALF.raw, Self::HALF.raw));
    /// Largest representable value, `2^31 - 2^-32`.
    pub const MAX: Self = Self::from_raw(i64::MAX);
    /// Smallest representable value, `-2^31`.
    pub const MIN: Self = Self::from_raw(i64::MIN);
    /// Smallest positive increment, `2^-32`.
    pub const PRECISION: Self = Self::from_raw(1);
    /// `1e-7`, the tolerance used for "close enough" comparisons.
    pub const EPSILON: Self = Self::from_raw(div_raw(ONE_RAW, 10_000_000 * ONE_RAW));
    /// `0.1`.
    pub const EN1: Self = Self::from_raw(div_raw(ONE_RAW, 10 * ONE_RAW));
    /// `0.01`.
    pub const EN2: Self = Self::from_raw(div_raw(ONE_RAW, 100 * ONE_RAW));
    /// `0.001`.
    pub const EN3: Self = Self::from_raw(div_raw(ONE_RAW, 1_000 * ONE_RAW));
    /// `0.0001`.
    pub const EN4: Self = Self::from_raw(div_raw(ONE_RAW, 10_000 * ONE_RAW));
    /// π.
    pub const PI: Self = Self::from_raw(PI_RAW);
    /// π / 2.
    pub const PI_OVER_2: Self = Self::from_raw(PI_OVER_2_RAW);
    /// π / 4.
    pub const PI_OVER_4: Self = Self::from_raw(0xC90F_DAA2);
    /// 2π.
    pub const PI_TIMES_2: Self = Self::from_raw(PI_TIMES_2_RAW);
    /// 1 / π.
    pub const PI_INV: Self = Self::from_raw(0x517C_C1B7);
    /// 2 / π.
    pub const PI_OVER_2_INV: Self = Self::from_raw(0xA2F9_836E);
    /// Euler's number.
    pub const E: Self = Self::from_raw(0x2_B7E1_5162);
    /// e⁴.
    pub const E_POW_4: Self = Self::from_raw(0x36_9920_5C4E);
    /// ln 2.
    pub const LN2: Self = Self::from_raw(0xB172_17F7);
    /// `log2(MAX)`, rounded to the exponent where `pow2` saturates.
    pub const LOG2_MAX: Self = Self::from_raw(0x1F_0000_0000);
    /// `log2` of the smallest positive magnitude `pow2` can still represent.
    pub const LOG2_MIN: Self = Self::from_raw(-0x20_0000_0000);
    /// Degrees to radians factor, π / 180.
    pub const DEG_TO_RAD: Self = Self::from_raw(div_raw(PI_RAW, 180 * ONE_RAW));
    /// Radians to degrees factor, 180 / π.
    pub const RAD_TO_DEG: Self = Self::from_raw(div_raw(180 * ONE_RAW, PI_RAW));

    /// Constructs a value from raw Q31.32 bits (no scaling).
    #[must_use]
    pub const fn from_raw(raw: i64) -> Self {
        Self { raw }
    }

    /// Returns the raw Q31.32 bits.
    pub const fn raw(self) -> i64 {
        self.raw
    }

    /// Constructs an exact integer value.
    #[must_use]
    pub const fn from_int(value: i32) -> Self {
        Self::from_raw((value as i64) << FRAC_BITS)
    }

    /// Constructs an integer value, saturating outside the `i32` range.
    #[must_use]
    pub const fn from_i64(value: i64) -> Self {
        if value > i32::MAX as i64 {
            Self::MAX
        } else if value < i32::MIN as i64 {
            Self::MIN
        } else {
            Self::from_raw(value << FRAC_BITS)
        }
    }

    /// Integer part, rounded toward negative infinity.
    pub const fn to_int(self) -> i32 {
        // An arithmetic shift by 32 always lands in the i32 range.
        (self.raw >> FRAC_BITS) as i32
    }

    /// Integer part as `i64`, rounded toward negative infinity.
    pub const fn to_i64(self) -> i64 {
        self.raw >> FRAC_BITS
    }

    /// Converts from `f64`, rounding to nearest (ties to even).
    ///
    /// `NaN` becomes zero and out-of-range values saturate. Intended for
    /// authoring data and tests; simulation code should stay in fixed-point.
    #[must_use]
    pub fn from_f64(value: f64) -> Self {
        Self::from_raw(fixed_q32_32::from_f64(value))
    }

    /// Converts to the nearest `f64`.
    pub fn to_f64(self) -> f64 {
        fixed_q32_32::to_f64(self.raw)
    }

    /// Converts from `f32` with the same policy as [`Fix64::from_f64`].
    #[must_use]
    pub fn from_f32(value: f32) -> Self {
        Self::from_raw(fixed_q32_32::from_f32(value))
    }

    /// Converts to the nearest `f32`.
    pub fn to_f32(self) -> f32 {
        fixed_q32_32::to_f32(self.raw)
    }

    /// Returns `-1`, `0` or `1` according to the sign.
    pub const fn signum_i32(self) -> i32 {
        if self.raw < 0 {
            -1
        } else if self.raw > 0 {
            1
        } else {
            0
        }
    }

    /// Returns `MINUS_ONE`, `ZERO` or `ONE` according to the sign.
    pub const fn sign(self) -> Self {
        Self::from_int(self.signum_i32())
    }

    /// Returns `true` if the value is strictly negative.
    pub const fn is_negative(self) -> bool {
        self.raw < 0
    }

    /// Absolute value. `abs(MIN) == MAX`.
    pub const fn abs(self) -> Self {
        if self.raw == i64::MIN {
            Self::MAX
        } else {
            Self::from_raw(self.raw.abs())
        }
    }

    /// Largest integer not greater than `self` (drops the fractional bits).
    pub const fn floor(self) -> Self {
        Self::from_raw(self.raw & INT_MASK)
    }

    /// Smallest integer not less than `self`. Saturates at `MAX`.
    pub const fn ceil(self) -> Self {
        if self.raw & FRAC_MASK == 0 {
            self
        } else {
            self.floor().safe_add(Self::ONE)
        }
    }

    /// Nearest integer; exact midpoints round to the even neighbour.
    pub const fn round(self) -> Self {
        let fraction = self.raw & FRAC_MASK;
        let integral = self.floor();
        if fraction < HALF_FRAC {
            return integral;
        }
        if fraction > HALF_FRAC {
            return integral.safe_add(Self::ONE);
        }
        if integral.raw & ONE_RAW == 0 {
            integral
        } else {
            integral.safe_add(Self::ONE)
        }
    }

    /// Fractional part, `self - floor(self)`; always in `[0, 1)`.
    pub const fn fract(self) -> Self {
        Self::from_raw(self.raw & FRAC_MASK)
    }

    /// Saturating addition.
    ///
    /// Overflow is detected when both operands share a sign that the wrapped
    /// sum does not.
    pub const fn safe_add(self, rhs: Self) -> Self {
        let x = self.raw;
        let y = rhs.raw;
        let sum = x.wrapping_add(y);
        if (!(x ^ y) & (x ^ sum)) & i64::MIN != 0 {
            return if x > 0 { Self::MAX } else { Self::MIN };
        }
        Self::from_raw(sum)
    }

    /// Saturating subtraction.
    ///
    /// Overflow is detected when the operands differ in sign and the wrapped
    /// difference does not keep the sign of `self`.
    pub const fn safe_sub(self, rhs: Self) -> Self {
        let x = self.raw;
        let y = rhs.raw;
        let diff = x.wrapping_sub(y);
        if ((x ^ y) & (x ^ diff)) & i64::MIN != 0 {
            return if x < 0 { Self::MIN } else { Self::MAX };
        }
        Self::from_raw(diff)
    }

    /// Saturating multiplication.
    pub const fn safe_mul(self, rhs: Self) -> Self {
        Self::from_raw(safe_mul_raw(self.raw, rhs.raw))
    }

    /// Remainder without the `MIN % -1` and zero-divisor guards.
    ///
    /// # Panics
    /// Panics when `rhs` is zero, and on `MIN.fast_rem(Fix64::from_raw(-1))`.
    /// Use `%` unless the operands are known to avoid both cases.
    pub const fn fast_rem(self, rhs: Self) -> Self {
        Self::from_raw(self.raw % rhs.raw)
    }
}

pub(crate) const PI_RAW: i64 = 0x3_243F_6A88;
pub(crate) const PI_OVER_2_RAW: i64 = 0x1_921F_B544;
pub(crate) const PI_TIMES_2_RAW: i64 = 0x6_487E_D511;

/// Splits the 64×64 product into the four 32-bit partial products.
///
/// Returns `(lolo >> 32, lohi, hilo, hihi)`; every term fits in an `i64`.
const fn partial_products(x: i64, y: i64) -> (i64, i64, i64, i64) {
    let xlo = (x & FRAC_MASK) as u64;
    let xhi = x >> FRAC_BITS;
    let ylo = (y & FRAC_MASK) as u64;
    let yhi = y >> FRAC_BITS;

    let lolo = xlo * ylo;
    let lohi = xlo as i64 * yhi;
    let hilo = xhi * ylo as i64;
    let hihi = xhi * yhi;

    ((lolo >> FRAC_BITS) as i64, lohi, hilo, hihi)
}

/// Wrapping Q31.32 multiply: the low 64 bits of `(x * y) >> 32`.
pub(crate) const fn mul_raw(x: i64, y: i64) -> i64 {
    if x == 0 || y == 0 {
        return 0;
    }
    let (lo, lohi, hilo, hihi) = partial_products(x, y);
    lo.wrapping_add(lohi)
        .wrapping_add(hilo)
        .wrapping_add(hihi.wrapping_shl(FRAC_BITS))
}

const fn add_tracking_carry(x: i64, y: i64) -> (i64, bool) {
    let sum = x.wrapping_add(y);
    (sum, ((x ^ y ^ sum) & i64::MIN) != 0)
}

const fn safe_mul_raw(x: i64, y: i64) -> i64 {
    let (lo, lohi, hilo, hihi) = partial_products(x, y);

    let (sum, c1) = add_tracking_carry(lo, lohi);
    let (sum, c2) = add_tracking_carry(sum, hilo);
    let (sum, c3) = add_tracking_carry(sum, hihi.wrapping_shl(FRAC_BITS));
    let carried = c1 || c2 || c3;

    let signs_equal = ((x ^ y) & i64::MIN) == 0;

    // Equal signs must give a non-negative product and vice versa.
    if signs_equal {
        if sum < 0 || (carried && x > 0) {
            return i64::MAX;
        }
    } else if sum > 0 {
        return i64::MIN;
    }

    // The top half of hihi never reaches the result; anything but a sign
    // extension there means the product left the representable range.
    let top_carry = hihi >> FRAC_BITS;
    if top_carry != 0 && top_carry != -1 {
        return if signs_equal { i64::MAX } else { i64::MIN };
    }

    // Opposite signs, both magnitudes above one, and a result above the
    // negative operand: negative overflow.
    if !signs_equal {
        let (pos, neg) = if x > y { (x, y) } else { (y, x) };
        if sum > neg && neg < -ONE_RAW && pos > ONE_RAW {
            return i64::MIN;
        }
    }

    sum
}

/// Bitwise long division of Q31.32 values with saturation.
///
/// Works on magnitudes, shifting the remainder up as far as it goes before
/// each native 64-bit step, so no 128-bit intermediate is needed. The
/// quotient carries one extra bit that rounds the result half away from zero.
pub(crate) const fn div_raw(x: i64, y: i64) -> i64 {
    if y == 0 {
        return i64::MAX;
    }

    let negative = (x ^ y) & i64::MIN != 0;
    let mut remainder = x.unsigned_abs();
    let mut divider = y.unsigned_abs();
    let mut quotient = 0_u64;
    let mut bit_pos: i32 = 64 / 2 + 1;

    // Trailing zero nibbles of the divider only cost iterations.
    while divider & 0xF == 0 && bit_pos >= 4 {
        divider >>= 4;
        bit_pos -= 4;
    }

    while remainder != 0 && bit_pos >= 0 {
        let mut shift = remainder.leading_zeros() as i32;
        if shift > bit_pos {
            shift = bit_pos;
        }
        remainder <<= shift as u32;
        bit_pos -= shift;

        let div = remainder / divider;
        remainder %= divider;
        quotient = quotient.wrapping_add(div << bit_pos as u32);

        if div & !(u64::MAX >> bit_pos as u32) != 0 {
            return if negative { i64::MIN } else { i64::MAX };
        }

        remainder <<= 1;
        bit_pos -= 1;
    }

    let rounded = (quotient.wrapping_add(1) >> 1) as i64;
    if negative {
        rounded.wrapping_neg()
    } else {
        rounded
    }
}

impl fmt::Debug for Fix64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fix64({} / {:#x})", self.to_f64(), self.raw)
    }
}

impl fmt::Display for Fix64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_f64(), f)
    }
}

impl Add for Fix64 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::from_raw(self.raw.wrapping_add(rhs.raw))
    }
}

impl Sub for Fix64 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::from_raw(self.raw.wrapping_sub(rhs.raw))
    }
}

impl Mul for Fix64 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::from_raw(mul_raw(self.raw, rhs.raw))
    }
}

impl Div for Fix64 {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        Self::from_raw(div_raw(self.raw, rhs.raw))
    }
}

/// Remainder with the sign of the dividend.
///
/// `MIN % -ε` (raw `-1`) is defined as zero instead of overflowing, and a zero
/// divisor yields zero instead of trapping.
impl Rem for Fix64 {
    type Output = Self;

    fn rem(self, rhs: Self) -> Self {
        Self::from_raw(self.raw.checked_rem(rhs.raw).unwrap_or(0))
    }
}

impl Neg for Fix64 {
    type Output = Self;

    fn neg(self) -> Self {
        if self.raw == i64::MIN {
            Self::MAX
        } else {
            Self::from_raw(-self.raw)
        }
    }
}

impl AddAssign for Fix64 {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Fix64 {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign for Fix64 {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl DivAssign for Fix64 {
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

impl RemAssign for Fix64 {
    fn rem_assign(&mut self, rhs: Self) {
        *self = *self % rhs;
    }
}

impl Sum for Fix64 {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl From<i32> for Fix64 {
    fn from(value: i32) -> Self {
        Self::from_int(value)
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    fn fx(v: f64) -> Fix64 {
        Fix64::from_f64(v)
    }

    #[test]
    fn derived_constants_have_expected_bits() {
        assert_eq!(Fix64::HALF.raw(), 1_i64 << 31);
        assert_eq!(Fix64::QUARTER.raw(), 1_i64 << 30);
        assert_eq!(Fix64::TWO.raw(), 2_i64 << 32);
        // 2^32 / 1e7 = 429.4967..., rounded.
        assert_eq!(Fix64::EPSILON.raw(), 429);
        assert!((Fix64::DEG_TO_RAD.to_f64() - core::f64::consts::PI / 180.0).abs() < 1e-9);
        assert!((Fix64::RAD_TO_DEG.to_f64() - 180.0 / core::f64::consts::PI).abs() < 1e-7);
    }

    #[test]
    fn default_add_wraps_and_safe_add_saturates() {
        let wrapped = Fix64::MAX + Fix64::ONE;
        assert!(wrapped.is_negative());
        assert_eq!(Fix64::MAX.safe_add(Fix64::ONE), Fix64::MAX);
        assert_eq!(Fix64::MIN.safe_add(Fix64::MINUS_ONE), Fix64::MIN);
        assert_eq!(fx(1.5).safe_add(fx(2.25)), fx(3.75));
    }

    #[test]
    fn default_sub_wraps_and_safe_sub_saturates() {
        assert!(!(Fix64::MIN - Fix64::ONE).is_negative());
        assert_eq!(Fix64::MIN.safe_sub(Fix64::ONE), Fix64::MIN);
        assert_eq!(Fix64::MAX.safe_sub(Fix64::MINUS_ONE), Fix64::MAX);
        assert_eq!(fx(1.0).safe_sub(fx(3.5)), fx(-2.5));
    }

    #[test]
    fn multiplication_of_in_range_values_is_exact() {
        assert_eq!(fx(1.5) * fx(1.5), fx(2.25));
        assert_eq!(fx(-1.5) * fx(1.5), fx(-2.25));
        assert_eq!(fx(-0.5) * fx(-4.0), fx(2.0));
        assert_eq!(fx(-1.5).safe_mul(fx(1.5)), fx(-2.25));
        assert_eq!(Fix64::ZERO * Fix64::MAX, Fix64::ZERO);
    }

    #[test]
    fn safe_mul_saturates_by_operand_signs() {
        assert_eq!(Fix64::MAX.safe_mul(Fix64::TWO), Fix64::MAX);
        assert_eq!(Fix64::MIN.safe_mul(Fix64::TWO), Fix64::MIN);
        assert_eq!(Fix64::MAX.safe_mul(-Fix64::TWO), Fix64::MIN);
        let big = Fix64::from_int(1 << 20);
        assert_eq!(big.safe_mul(big), Fix64::MAX);
        assert_eq!(big.safe_mul(-big), Fix64::MIN);
        // The wrapping operator keeps the low bits instead.
        assert_eq!(big * big, Fix64::ZERO);
    }

    #[test]
    fn division_rounds_and_saturates() {
        assert_eq!(Fix64::ONE / Fix64::TWO, Fix64::HALF);
        assert_eq!(fx(-7.5) / fx(2.5), fx(-3.0));
        assert_eq!(Fix64::MAX / Fix64::ONE, Fix64::MAX);
        assert_eq!(Fix64::MIN / Fix64::ONE, Fix64::MIN);
        assert_eq!(Fix64::MAX / Fix64::HALF, Fix64::MAX);
        assert_eq!(Fix64::MIN / Fix64::HALF, Fix64::MIN);
        assert_eq!(Fix64::MAX / -Fix64::HALF, Fix64::MIN);
    }

    #[test]
    fn division_by_zero_is_max() {
        assert_eq!(Fix64::ONE / Fix64::ZERO, Fix64::MAX);
        assert_eq!(Fix64::MINUS_ONE / Fix64::ZERO, Fix64::MAX);
        assert_eq!(Fix64::ZERO / Fix64::ZERO, Fix64::MAX);
    }

    #[test]
    fn remainder_guards_min_by_minus_epsilon() {
        let minus_eps = Fix64::from_raw(-1);
        assert_eq!(Fix64::MIN % minus_eps, Fix64::ZERO);
        assert_eq!(Fix64::ONE % Fix64::ZERO, Fix64::ZERO);
        assert_eq!(fx(7.5) % fx(2.0), fx(1.5));
        assert_eq!(fx(-7.5) % fx(2.0), fx(-1.5));
        assert_eq!(fx(7.5).fast_rem(fx(2.0)), fx(1.5));
    }

    #[test]
    fn negation_and_abs_saturate_min() {
        assert_eq!(-Fix64::MIN, Fix64::MAX);
        assert_eq!(Fix64::MIN.abs(), Fix64::MAX);
        assert_eq!(fx(-2.5).abs(), fx(2.5));
        assert_eq!(-fx(2.5), fx(-2.5));
    }

    #[test]
    fn rounding_family() {
        assert_eq!(fx(2.75).floor(), fx(2.0));
        assert_eq!(fx(-2.25).floor(), fx(-3.0));
        assert_eq!(fx(2.25).ceil(), fx(3.0));
        assert_eq!(fx(-2.25).ceil(), fx(-2.0));
        assert_eq!(fx(4.0).ceil(), fx(4.0));
        assert_eq!(fx(2.5).round(), fx(2.0));
        assert_eq!(fx(3.5).round(), fx(4.0));
        assert_eq!(fx(-2.5).round(), fx(-2.0));
        assert_eq!(fx(2.4).round(), fx(2.0));
        assert_eq!(fx(2.6).round(), fx(3.0));
        assert_eq!(fx(-2.25).fract(), fx(0.75));
        assert_eq!(Fix64::MAX.ceil(), Fix64::MAX);
    }

    #[test]
    fn integer_conversions() {
        assert_eq!(Fix64::from_int(-3).to_int(), -3);
        assert_eq!(fx(-2.5).to_int(), -3);
        assert_eq!(Fix64::from_i64(i64::MAX), Fix64::MAX);
        assert_eq!(Fix64::from_i64(i64::MIN), Fix64::MIN);
        assert_eq!(Fix64::from_i64(12).to_i64(), 12);
        assert_eq!(Fix64::from(7), Fix64::from_int(7));
    }

    #[test]
    fn sign_helpers() {
        assert_eq!(fx(-0.1).sign(), Fix64::MINUS_ONE);
        assert_eq!(Fix64::ZERO.sign(), Fix64::ZERO);
        assert_eq!(fx(9.0).signum_i32(), 1);
    }

    #[test]
    fn ordering_is_raw_ordering() {
        let mut values = vec![fx(1.0), Fix64::MIN, fx(-0.5), Fix64::MAX, Fix64::ZERO];
        values.sort();
        assert_eq!(
            values,
            vec![Fix64::MIN, fx(-0.5), Fix64::ZERO, fx(1.0), Fix64::MAX]
        );
        assert_eq!(fx(3.0).clamp(Fix64::ZERO, Fix64::ONE), Fix64::ONE);
    }

    #[test]
    fn sum_and_assign_ops() {
        let total: Fix64 = [fx(0.5), fx(0.25), fx(1.25)].into_iter().sum();
        assert_eq!(total, fx(2.0));
        let mut v = fx(3.0);
        v *= fx(2.0);
        v -= fx(1.0);
        v /= fx(2.0);
        v %= fx(2.0);
        assert_eq!(v, fx(0.5));
    }
}
