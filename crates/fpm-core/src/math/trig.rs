// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Deterministic trigonometry over [`Fix64`].
//!
//! `sin`, `cos` and `tan` read quarter-period lookup tables (see
//! `trig_lut`). Strategy:
//! - reduce `|x|` modulo 2π, then peel off π and π/2 with subtraction loops
//! - record which half (vertical flip) and which quarter (horizontal flip)
//!   the angle fell in
//! - look up the two nearest samples and interpolate by the index error
//!
//! Sine is evaluated on `|x|` and the sign applied afterwards, so
//! `sin(-x) == -sin(x)` and `cos(-x) == cos(x)` hold bit-for-bit.
//!
//! The `fast_*` variants skip interpolation and index the table with a
//! shift. `atan` sums an Euler series; `fast_atan2` uses a rational
//! approximation with the constant 0.28.

use super::fix64::{mul_raw, Fix64, PI_OVER_2_RAW, PI_RAW, PI_TIMES_2_RAW};
use super::trig_lut::{LUT_INTERVAL_RAW, LUT_SIZE, SIN_LUT, TAN_LUT};
use crate::DomainError;

const LAST_INDEX: i64 = LUT_SIZE as i64 - 1;

/// `0.28`, the coefficient of the rational `atan` approximation.
const C0P28: Fix64 = Fix64::from_raw(1_202_590_842);

/// A non-negative angle folded into `[0, π/2)`.
struct Reduced {
    angle: i64,
    /// Angle was in `[π/2, π)` of its half-turn: read the table mirrored.
    flip_horizontal: bool,
    /// Angle was in `[π, 2π)`: negate the result.
    flip_vertical: bool,
}

fn reduce(angle: i64) -> Reduced {
    debug_assert!(angle >= 0);
    let clamped_2pi = angle % PI_TIMES_2_RAW;
    let flip_vertical = clamped_2pi >= PI_RAW;

    // PI_TIMES_2 is one raw unit above 2 * PI, hence the loop.
    let mut clamped_pi = clamped_2pi;
    while clamped_pi >= PI_RAW {
        clamped_pi -= PI_RAW;
    }

    let flip_horizontal = clamped_pi >= PI_OVER_2_RAW;
    if flip_horizontal {
        clamped_pi -= PI_OVER_2_RAW;
    }

    Reduced {
        angle: clamped_pi,
        flip_horizontal,
        flip_vertical,
    }
}

fn table(lut: &[i64], index: i64) -> Fix64 {
    // Indices come from a reduced angle and stay in range up to rounding at
    // the table ends; clamp those.
    let i = index.clamp(0, LAST_INDEX) as usize;
    lut.get(i).copied().map_or(Fix64::ZERO, Fix64::from_raw)
}

/// Splits a reduced angle into the nearest table index and the signed
/// distance to it, in table steps.
fn table_position(angle: i64) -> (i64, Fix64) {
    let raw_index = Fix64::from_raw(mul_raw(angle, LUT_INTERVAL_RAW));
    let rounded = raw_index.round();
    (rounded.to_i64(), raw_index - rounded)
}

/// Interpolated sine of a non-negative angle.
fn sin_non_negative(angle: i64) -> i64 {
    let r = reduce(angle);
    let (index, error) = table_position(r.angle);
    let step = i64::from(error.signum_i32());

    let (nearest, second) = if r.flip_horizontal {
        (
            table(&SIN_LUT, LAST_INDEX - index),
            table(&SIN_LUT, LAST_INDEX - index - step),
        )
    } else {
        (table(&SIN_LUT, index), table(&SIN_LUT, index + step))
    };

    let delta = (error * (nearest - second).abs()).raw();
    let value = if r.flip_horizontal {
        nearest.raw() - delta
    } else {
        nearest.raw() + delta
    };
    if r.flip_vertical {
        -value
    } else {
        value
    }
}

fn fast_sin_non_negative(angle: i64) -> i64 {
    let r = reduce(angle);
    // The table has PI_OVER_2 >> 15 entries, so the shift is the index.
    let index = (r.angle >> 15).min(LAST_INDEX);
    let index = if r.flip_horizontal {
        LAST_INDEX - index
    } else {
        index
    };
    let value = table(&SIN_LUT, index).raw();
    if r.flip_vertical {
        -value
    } else {
        value
    }
}

/// `cos(|x|)` rewritten as a sine argument: `sin(|x| - 3π/2)`, or `sin(π/2)`
/// at zero.
fn cos_as_sin_angle(x: Fix64) -> Fix64 {
    let a = x.abs().raw();
    if a > 0 {
        Fix64::from_raw(a - PI_RAW - PI_OVER_2_RAW)
    } else {
        Fix64::PI_OVER_2
    }
}

/// Shared tail of `atan2`/`fast_atan2`: the `x == 0` axis cases.
fn atan2_on_axis(y: Fix64) -> Fix64 {
    match y.signum_i32() {
        1 => Fix64::PI_OVER_2,
        0 => Fix64::ZERO,
        _ => -Fix64::PI_OVER_2,
    }
}

/// `true` when `1 + 0.28 z²` saturates, i.e. `z` is too steep to evaluate.
fn atan_overflows(z: Fix64) -> bool {
    Fix64::ONE.safe_add(C0P28.safe_mul(z).safe_mul(z)) == Fix64::MAX
}

impl Fix64 {
    /// Sine, about nine correct decimals for moderate angles.
    ///
    /// Accuracy degrades as `|x|` grows, since the reduction modulo 2π works
    /// with a 32-bit-fraction π.
    pub fn sin(self) -> Self {
        let value = Self::from_raw(sin_non_negative(self.abs().raw()));
        if self.is_negative() {
            -value
        } else {
            value
        }
    }

    /// Nearest-sample sine, four to five correct decimals.
    pub fn fast_sin(self) -> Self {
        let value = Self::from_raw(fast_sin_non_negative(self.abs().raw()));
        if self.is_negative() {
            -value
        } else {
            value
        }
    }

    /// Cosine. `cos(0) == 1` exactly.
    pub fn cos(self) -> Self {
        cos_as_sin_angle(self).sin()
    }

    /// Nearest-sample cosine; see [`Fix64::fast_sin`].
    pub fn fast_cos(self) -> Self {
        cos_as_sin_angle(self).fast_sin()
    }

    /// Tangent. Values near the poles saturate to `MAX`/`MIN`.
    pub fn tan(self) -> Self {
        let mut clamped_pi = self.raw() % PI_RAW;
        let mut flip = false;
        if clamped_pi < 0 {
            clamped_pi = -clamped_pi;
            flip = true;
        }
        if clamped_pi > PI_OVER_2_RAW {
            flip = !flip;
            clamped_pi = PI_OVER_2_RAW - (clamped_pi - PI_OVER_2_RAW);
        }

        let (index, error) = table_position(clamped_pi);
        let step = i64::from(error.signum_i32());
        let nearest = table(&TAN_LUT, index);
        let second = table(&TAN_LUT, index + step);

        let delta = error.safe_mul(nearest.safe_sub(second).abs());
        let value = nearest.safe_add(delta);
        if flip {
            -value
        } else {
            value
        }
    }

    /// Arctangent via the Euler series
    /// `atan z = z/(1+z²) · Σ ∏ (2k z²)/((2k+1)(1+z²))`.
    ///
    /// Arguments above one use `atan z = π/2 - atan(1/z)` so the series
    /// always runs on `[0, 1]`; the sum stops after 30 terms or once a term
    /// underflows.
    pub fn atan(self) -> Self {
        if self == Self::ZERO {
            return Self::ZERO;
        }

        let negative = self.is_negative();
        let mut z = self.abs();

        let mut result = if z == Self::ONE {
            Self::PI_OVER_4
        } else {
            let invert = z > Self::ONE;
            if invert {
                z = Self::ONE / z;
            }

            let z_sq = z * z;
            let z_sq_2 = z_sq * Self::TWO;
            let z_sq_plus_one = z_sq + Self::ONE;
            let z_sq_12 = z_sq_plus_one * Self::TWO;

            let mut dividend = z_sq_2;
            let mut divisor = z_sq_plus_one * Self::THREE;
            let mut term = Self::ONE;
            let mut sum = Self::ONE;

            for _ in 2..30 {
                term *= dividend / divisor;
                sum += term;
                dividend += z_sq_2;
                divisor += z_sq_12;
                if term == Self::ZERO {
                    break;
                }
            }

            let principal = sum * z / z_sq_plus_one;
            if invert {
                Self::PI_OVER_2 - principal
            } else {
                principal
            }
        };

        if negative {
            result = -result;
        }
        result
    }

    /// Four-quadrant arctangent of `self / x`, in `(-π, π]`.
    ///
    /// Returns `±π/2` when the ratio is too steep for the series.
    pub fn atan2(self, x: Self) -> Self {
        let y = self;
        if x == Self::ZERO {
            return atan2_on_axis(y);
        }

        let z = y / x;
        if atan_overflows(z) {
            return if y.is_negative() {
                -Self::PI_OVER_2
            } else {
                Self::PI_OVER_2
            };
        }

        let atan = z.atan();
        if x.is_negative() {
            if y.is_negative() {
                return atan - Self::PI;
            }
            return atan + Self::PI;
        }
        atan
    }

    /// Cheaper `atan2` using `atan z ≈ z / (1 + 0.28 z²)`; error around
    /// 0.005 rad.
    pub fn fast_atan2(self, x: Self) -> Self {
        let y = self;
        if x == Self::ZERO {
            return atan2_on_axis(y);
        }

        let z = y / x;
        if atan_overflows(z) {
            return if y.is_negative() {
                -Self::PI_OVER_2
            } else {
                Self::PI_OVER_2
            };
        }

        if z.abs() < Self::ONE {
            let atan = z / (Self::ONE + C0P28 * z * z);
            if x.is_negative() {
                if y.is_negative() {
                    return atan - Self::PI;
                }
                return atan + Self::PI;
            }
            atan
        } else {
            let atan = Self::PI_OVER_2 - z / (z * z + C0P28);
            if y.is_negative() {
                return atan - Self::PI;
            }
            atan
        }
    }

    /// Arccosine, `atan(sqrt(1 - x²) / x)`, shifted by π for negative `x`.
    ///
    /// # Errors
    /// [`DomainError::NegativeSqrt`] when `|x| > 1`.
    pub fn acos(self) -> Result<Self, DomainError> {
        if self == Self::ZERO {
            return Ok(Self::PI_OVER_2);
        }
        let root = Self::ONE.safe_sub(self.safe_mul(self)).sqrt()?;
        let result = (root / self).atan();
        Ok(if self.is_negative() {
            result + Self::PI
        } else {
            result
        })
    }
}
