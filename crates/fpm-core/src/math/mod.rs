// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Fixed-point scalar, transcendental functions and vectors.

mod exp_log;
mod fix64;
mod fixed_q32_32;
mod trig;
mod trig_lut;
mod vec2;
mod vec3;

pub use fix64::Fix64;
pub use vec2::FixVec2;
pub use vec3::FixVec3;
