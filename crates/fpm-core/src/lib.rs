// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! fpm-core: deterministic Q31.32 fixed-point math for lockstep simulation.
//!
//! Every operation in this crate is integer-only at evaluation time, so the
//! same inputs produce bit-identical outputs on every platform. The only
//! floating-point code runs once, when the trigonometric lookup tables are
//! built, and goes through `libm`'s software implementations.
//!
//! Overflow policy, in short:
//! - `+`, `-`, `*` wrap (the fast path); `safe_add`, `safe_sub`, `safe_mul`
//!   saturate to [`Fix64::MAX`]/[`Fix64::MIN`].
//! - `/` always saturates, and division by zero yields [`Fix64::MAX`].
//! - `sqrt`, `log2`, `ln`, `pow` and `acos` return [`DomainError`] for
//!   mathematically undefined inputs.
#![forbid(unsafe_code)]
#![deny(missing_docs, rust_2018_idioms, unused_must_use)]
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro,
    clippy::print_stdout,
    clippy::print_stderr
)]
#![allow(
    clippy::must_use_candidate,
    clippy::return_self_not_must_use,
    clippy::unreadable_literal,
    clippy::missing_const_for_fn,
    clippy::suboptimal_flops,
    clippy::redundant_pub_crate,
    clippy::many_single_char_names,
    clippy::module_name_repetitions,
    clippy::use_self,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_possible_wrap,
    clippy::cast_lossless
)]

pub mod math;

mod error;

pub use error::DomainError;
pub use math::{Fix64, FixVec2, FixVec3};
