// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
use fpm_core::{DomainError, Fix64};
use proptest::prelude::*;

#[test]
fn abs_of_min_saturates_to_max() {
    assert_eq!(Fix64::MIN.abs(), Fix64::MAX);
    assert_eq!(-Fix64::MIN, Fix64::MAX);
}

#[test]
fn both_overflow_policies_are_available() {
    // Wrapping default operators.
    assert_eq!(Fix64::MAX + Fix64::PRECISION, Fix64::MIN);
    assert_eq!(Fix64::MIN - Fix64::PRECISION, Fix64::MAX);
    // Saturating variants.
    assert_eq!(Fix64::MAX.safe_add(Fix64::PRECISION), Fix64::MAX);
    assert_eq!(Fix64::MIN.safe_sub(Fix64::PRECISION), Fix64::MIN);
    assert_eq!(Fix64::MAX.safe_mul(Fix64::TWO), Fix64::MAX);
    assert_eq!(Fix64::MIN.safe_mul(Fix64::TWO), Fix64::MIN);
}

#[test]
fn sqrt_and_log_domain_edges() {
    assert_eq!(Fix64::ZERO.sqrt(), Ok(Fix64::ZERO));
    assert_eq!(Fix64::ONE.sqrt(), Ok(Fix64::ONE));
    assert_eq!(Fix64::ONE.log2(), Ok(Fix64::ZERO));
    assert_eq!(
        Fix64::MIN.sqrt(),
        Err(DomainError::NegativeSqrt { raw: i64::MIN })
    );
    assert_eq!(
        Fix64::MINUS_ONE.log2(),
        Err(DomainError::NonPositiveLog {
            raw: Fix64::MINUS_ONE.raw()
        })
    );
}

#[test]
fn domain_errors_render_raw_bits() {
    let err = DomainError::NegativeSqrt { raw: -1 };
    assert!(err.to_string().contains("square root"));
}

#[test]
fn constants_are_close_to_their_real_values() {
    let cases = [
        (Fix64::PI, core::f64::consts::PI),
        (Fix64::PI_OVER_2, core::f64::consts::FRAC_PI_2),
        (Fix64::PI_OVER_4, core::f64::consts::FRAC_PI_4),
        (Fix64::PI_TIMES_2, core::f64::consts::TAU),
        (Fix64::PI_INV, core::f64::consts::FRAC_1_PI),
        (Fix64::PI_OVER_2_INV, core::f64::consts::FRAC_2_PI),
        (Fix64::E, core::f64::consts::E),
        (Fix64::LN2, core::f64::consts::LN_2),
        (Fix64::EN1, 0.1),
        (Fix64::EN4, 0.0001),
    ];
    for (fixed, real) in cases {
        assert!((fixed.to_f64() - real).abs() < 1e-9, "{fixed:?} vs {real}");
    }
    assert!((Fix64::E_POW_4.to_f64() - libm::exp(4.0)).abs() < 1e-8);
}

#[test]
fn display_prints_decimal_value() {
    assert_eq!(Fix64::from_f64(-2.5).to_string(), "-2.5");
    assert_eq!(Fix64::ONE.to_string(), "1");
}

fn in_f64_exact_range() -> impl Strategy<Value = i64> {
    // |raw| < 2^53 converts to f64 and back without loss.
    -(1_i64 << 53)..(1_i64 << 53)
}

proptest! {
    #[test]
    fn f64_round_trip_is_exact_within_53_bits(raw in in_f64_exact_range()) {
        let x = Fix64::from_raw(raw);
        prop_assert_eq!(Fix64::from_f64(x.to_f64()), x);
    }

    #[test]
    fn f64_round_trip_is_within_one_ulp(raw in any::<i64>()) {
        let x = Fix64::from_raw(raw);
        let back = Fix64::from_f64(x.to_f64());
        // f64 carries 53 significant bits; above that the step is 2^(k-52).
        let k = 63 - raw.unsigned_abs().leading_zeros().min(63);
        let tolerance = if k > 52 { 1_i128 << (k - 52) } else { 0 };
        let diff = (i128::from(back.raw()) - i128::from(raw)).abs();
        prop_assert!(diff <= tolerance, "raw {raw} back {}", back.raw());
    }

    #[test]
    fn safe_add_never_wraps(a in any::<i64>(), b in any::<i64>()) {
        let (x, y) = (Fix64::from_raw(a), Fix64::from_raw(b));
        let expected = a.saturating_add(b);
        prop_assert_eq!(x.safe_add(y).raw(), expected);
        prop_assert_eq!(x.safe_sub(y).raw(), a.saturating_sub(b));
    }

    #[test]
    fn default_add_matches_wrapping_integer_add(a in any::<i64>(), b in any::<i64>()) {
        prop_assert_eq!((Fix64::from_raw(a) + Fix64::from_raw(b)).raw(), a.wrapping_add(b));
    }

    #[test]
    fn mul_matches_wide_reference(
        a in -(1_i64 << 47)..(1_i64 << 47),
        b in -(1_i64 << 47)..(1_i64 << 47),
    ) {
        // Products of these magnitudes fit the format; the result is the
        // floor of the exact 128-bit product shifted down.
        let expected = ((i128::from(a) * i128::from(b)) >> 32) as i64;
        prop_assert_eq!((Fix64::from_raw(a) * Fix64::from_raw(b)).raw(), expected);
        prop_assert_eq!(Fix64::from_raw(a).safe_mul(Fix64::from_raw(b)).raw(), expected);
    }

    #[test]
    fn safe_mul_saturates_like_wide_reference(a in any::<i64>(), b in any::<i64>()) {
        let wide = (i128::from(a) * i128::from(b)) >> 32;
        let got = Fix64::from_raw(a).safe_mul(Fix64::from_raw(b)).raw();
        if wide > i128::from(i64::MAX) {
            prop_assert_eq!(got, i64::MAX);
        } else if wide < i128::from(i64::MIN) {
            prop_assert_eq!(got, i64::MIN);
        } else {
            prop_assert!((i128::from(got) - wide).abs() <= 1, "a {a} b {b}");
        }
    }

    #[test]
    fn div_matches_wide_reference(
        a in any::<i64>(),
        b in any::<i64>().prop_filter("non-zero", |b| *b != 0),
    ) {
        let exact = (i128::from(a) << 32) / i128::from(b);
        let got = (Fix64::from_raw(a) / Fix64::from_raw(b)).raw();
        if exact > i128::from(i64::MAX) {
            prop_assert_eq!(got, i64::MAX);
        } else if exact < i128::from(i64::MIN) {
            prop_assert_eq!(got, i64::MIN);
        } else {
            // Rounded to nearest instead of truncated.
            prop_assert!((i128::from(got) - exact).abs() <= 1, "a {a} b {b}");
        }
    }

    #[test]
    fn sqrt_squares_back(raw in 0_i64..(1_i64 << 62)) {
        let x = Fix64::from_raw(raw);
        let root = x.sqrt().map_err(|e| TestCaseError::fail(e.to_string()))?;
        // (r - ε)² <= x <= (r + ε)² with ε one raw unit.
        let r = i128::from(root.raw());
        let x_wide = i128::from(raw) << 32;
        prop_assert!((r - 1) * (r - 1) <= x_wide);
        prop_assert!((r + 1) * (r + 1) >= x_wide);
    }

    #[test]
    fn floor_ceil_round_bracket_value(raw in (i64::MIN >> 1)..(i64::MAX >> 1)) {
        let x = Fix64::from_raw(raw);
        prop_assert!(x.floor() <= x && x <= x.ceil());
        prop_assert!(x.ceil() - x.floor() <= Fix64::ONE);
        prop_assert!((x.round() - x).abs() <= Fix64::HALF);
        prop_assert_eq!(x.floor() + x.fract(), x);
    }
}
