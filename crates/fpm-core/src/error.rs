// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use thiserror::Error;

/// Input outside the mathematical domain of a fixed-point function.
///
/// Overflow is never reported through this type: arithmetic saturates or
/// wraps instead (see [`crate::Fix64`]). Only functions that are undefined for
/// part of their input range return it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DomainError {
    /// `sqrt` (or a function built on it) received a negative value.
    #[error("square root of negative value (raw {raw:#x})")]
    NegativeSqrt {
        /// Raw Q31.32 bits of the rejected argument.
        raw: i64,
    },
    /// `log2`/`ln`/`pow` received zero or a negative value.
    #[error("logarithm of non-positive value (raw {raw:#x})")]
    NonPositiveLog {
        /// Raw Q31.32 bits of the rejected argument.
        raw: i64,
    },
}
