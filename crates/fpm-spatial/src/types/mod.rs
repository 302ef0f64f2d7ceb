// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Fixed-point axis-aligned bounds.
//!
//! Determinism notes:
//! - Corners are derived once from `(center, size)` with fixed-point math, so
//!   identical inputs give identical boxes on every platform.
//! - Overlap is inclusive on faces.

#[doc = "Two-dimensional bounds."]
pub mod bounds2;
#[doc = "Three-dimensional bounds."]
pub mod bounds3;
