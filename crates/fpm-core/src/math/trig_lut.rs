// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Quarter-period lookup tables for `sin` and `tan`.
//!
//! Both tables sample `[0, π/2]` at `LUT_SIZE` evenly spaced points, so that
//! a reduced angle shifted right by 15 bits indexes the table directly. They
//! are generated once on first use with `libm`'s software `sin`/`tan` and
//! truncated to Q31.32; `libm` is portable Rust, so every platform builds
//! bit-identical tables.

use once_cell::sync::Lazy;

use super::fix64::{div_raw, PI_OVER_2_RAW};
use super::fixed_q32_32::{ONE_RAW, SCALE_F64};

/// Number of table entries: `PI_OVER_2 >> 15`.
pub(crate) const LUT_SIZE: usize = (PI_OVER_2_RAW >> 15) as usize;

/// `(LUT_SIZE - 1) / (π/2)` in Q31.32; maps a reduced angle to a fractional
/// table index.
pub(crate) const LUT_INTERVAL_RAW: i64 = div_raw((LUT_SIZE as i64 - 1) * ONE_RAW, PI_OVER_2_RAW);

/// `sin` over `[0, π/2]`.
pub(crate) static SIN_LUT: Lazy<Box<[i64]>> = Lazy::new(|| build(libm::sin));

/// `tan` over `[0, π/2]`; entries that overflow the format hold `i64::MAX`.
pub(crate) static TAN_LUT: Lazy<Box<[i64]>> = Lazy::new(|| build(libm::tan));

fn build(f: fn(f64) -> f64) -> Box<[i64]> {
    #[allow(clippy::cast_precision_loss)]
    let last = (LUT_SIZE - 1) as f64;
    (0..LUT_SIZE)
        .map(|i| {
            #[allow(clippy::cast_precision_loss)]
            let angle = i as f64 * core::f64::consts::PI * 0.5 / last;
            truncate_to_raw(f(angle))
        })
        .collect()
}

/// Truncates toward zero; `as` saturates values beyond the format at
/// `i64::MAX`. Negative results only appear where `tan` crosses its pole in
/// double precision and are treated as overflow.
fn truncate_to_raw(value: f64) -> i64 {
    if value < 0.0 {
        return i64::MAX;
    }
    (value * SCALE_F64) as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_geometry() {
        assert_eq!(LUT_SIZE, 205_887);
        assert_eq!(SIN_LUT.len(), LUT_SIZE);
        assert_eq!(TAN_LUT.len(), LUT_SIZE);
    }

    #[test]
    fn sin_table_endpoints() {
        assert_eq!(SIN_LUT[0], 0);
        // sin(π/2) rounds to exactly 1.0 in double precision.
        assert_eq!(SIN_LUT[LUT_SIZE - 1], ONE_RAW);
        assert!(SIN_LUT.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn tan_table_is_monotonic_and_saturates_at_the_pole() {
        assert_eq!(TAN_LUT[0], 0);
        assert_eq!(TAN_LUT[LUT_SIZE - 1], i64::MAX);
        assert!(TAN_LUT.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn interval_maps_quarter_turn_to_last_index() {
        let idx = super::super::fix64::mul_raw(PI_OVER_2_RAW, LUT_INTERVAL_RAW);
        let whole = idx >> 32;
        assert!((whole - (LUT_SIZE as i64 - 1)).abs() <= 1);
    }
}
