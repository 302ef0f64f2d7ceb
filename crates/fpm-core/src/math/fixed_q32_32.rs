// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Deterministic float boundary helpers for the Q31.32 encoding.
//!
//! The representation is an `i64` storing an integer scaled by `2^32`:
//! `real_value = raw / 2^32`.
//!
//! Conversions are one-directional conveniences for tooling, tests and
//! authoring data. Simulation code never needs them.

/// Number of fractional bits in the Q31.32 fixed-point encoding.
pub(crate) const FRAC_BITS: u32 = 32;

/// The raw integer value corresponding to `1.0`.
pub(crate) const ONE_RAW: i64 = 1_i64 << FRAC_BITS;

/// `2^32` as a float; multiplying or dividing by it is exact.
pub(crate) const SCALE_F64: f64 = 4_294_967_296.0;

fn round_shift_right_u64(value: u64, shift: u32) -> u64 {
    if shift == 0 {
        return value;
    }
    if shift >= 64 {
        return 0;
    }

    let q = value >> shift;
    let r = value & ((1_u64 << shift) - 1);
    let half = 1_u64 << (shift - 1);

    if r > half || (r == half && (q & 1) == 1) {
        q + 1
    } else {
        q
    }
}

/// Converts an `f64` to raw Q31.32.
///
/// - `NaN` maps to `0` (fixed-point has no NaN).
/// - `±∞` and out-of-range magnitudes saturate to `i64::MAX`/`i64::MIN`.
/// - Finite values round to nearest, ties to even.
pub(crate) fn from_f64(value: f64) -> i64 {
    if value.is_nan() {
        return 0;
    }
    // Scaling by a power of two is exact; `as` saturates at the i64 range.
    (value * SCALE_F64).round_ties_even() as i64
}

/// Converts raw Q31.32 to the nearest `f64` (ties to even).
pub(crate) fn to_f64(raw: i64) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    let wide = raw as f64;
    wide / SCALE_F64
}

/// Converts an `f32` to raw Q31.32. Widening to `f64` is exact, so this
/// shares the `f64` rounding policy.
pub(crate) fn from_f32(value: f32) -> i64 {
    from_f64(f64::from(value))
}

/// Converts raw Q31.32 to the nearest `f32` with a single ties-to-even
/// rounding step (no double rounding through `f64`).
pub(crate) fn to_f32(raw: i64) -> f32 {
    if raw == 0 {
        return 0.0;
    }

    let negative = raw.is_negative();
    let abs = raw.unsigned_abs();

    // Highest set bit `k` puts the value in [2^(k-32), 2^(k-31)).
    let k = 63 - abs.leading_zeros();
    let mut exp = k as i32 - FRAC_BITS as i32;

    let mut sig = if k > 23 {
        round_shift_right_u64(abs, k - 23)
    } else {
        abs << (23 - k)
    };

    // Rounding carried into a new binade (1.111.. -> 10.000..).
    if sig >= 1_u64 << 24 {
        sig >>= 1;
        exp += 1;
    }

    // exp lies in -32..=32, always a normal f32 exponent.
    let exp_field = (exp + 127) as u32;
    let mantissa = (sig & ((1_u64 << 23) - 1)) as u32;
    f32::from_bits((u32::from(negative) << 31) | (exp_field << 23) | mantissa)
}
