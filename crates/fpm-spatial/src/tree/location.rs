// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Location ids: root-to-node paths packed four bits per level.
//!
//! The code chosen when stepping from depth `d` to `d + 1` occupies bits
//! `4d..4d + 4`. `NONE` (0) ends a path; `FULL` (`0b1111`) marks a leaf that
//! is not narrowed down any further than the path before it.

use core::fmt;

use thiserror::Error;

/// Code of an unused level.
pub const NONE: u8 = 0b0000;
/// Terminal marker for leaves held at the end of a path.
pub const FULL: u8 = 0b1111;

const LEVEL_BITS: u32 = 4;
const LEVELS: u8 = 8;

/// Stable handle of an inserted entry: `(only_id << 32) | location_id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FullId(u64);

impl FullId {
    /// Packs a unique id and a location id.
    pub const fn new(only_id: u32, location_id: u32) -> Self {
        Self(((only_id as u64) << 32) | location_id as u64)
    }

    /// Wraps raw bits, e.g. a handle stored by the caller as `u64`.
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Raw `u64` bits.
    pub const fn raw(self) -> u64 {
        self.0
    }

    /// Unique creation-order id (upper 32 bits).
    pub const fn only_id(self) -> u32 {
        (self.0 >> 32) as u32
    }

    /// Path of the entry (lower 32 bits).
    pub const fn location_id(self) -> u32 {
        self.0 as u32
    }
}

impl fmt::Display for FullId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{:08x}", self.only_id(), self.location_id())
    }
}

/// Every `u32` id has been issued; the tree accepts no more values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("all 2^32 node ids have been issued")]
pub struct IdsExhausted;

/// Code stored for the step out of `depth`, or [`NONE`] past the last level.
pub(crate) const fn code_at(path: u32, depth: u8) -> u8 {
    if depth >= LEVELS {
        return NONE;
    }
    ((path >> (depth as u32 * LEVEL_BITS)) & 0xF) as u8
}

/// Extends `path` (of length `depth`) with `code`. Paths already at the last
/// level are returned unchanged.
pub(crate) const fn with_code(path: u32, depth: u8, code: u8) -> u32 {
    if depth >= LEVELS {
        return path;
    }
    path | ((code as u32 & 0xF) << (depth as u32 * LEVEL_BITS))
}

/// Longest shared prefix of two paths, with its length.
pub(crate) fn common_prefix(a: (u32, u8), b: (u32, u8)) -> (u32, u8) {
    let limit = a.1.min(b.1);
    let mut depth = 0;
    while depth < limit && code_at(a.0, depth) == code_at(b.0, depth) {
        depth += 1;
    }
    (truncate(a.0, depth), depth)
}

/// Keeps the first `depth` levels of `path`.
pub(crate) const fn truncate(path: u32, depth: u8) -> u32 {
    if depth >= LEVELS {
        return path;
    }
    path & ((1_u32 << (depth as u32 * LEVEL_BITS)) - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_id_packs_both_halves() {
        let id = FullId::new(7, 0x0000_F421);
        assert_eq!(id.raw(), (7_u64 << 32) | 0xF421);
        assert_eq!(id.only_id(), 7);
        assert_eq!(id.location_id(), 0xF421);
        assert_eq!(FullId::from_raw(id.raw()), id);
        assert_eq!(id.to_string(), "7@0000f421");
    }

    #[test]
    fn codes_fill_successive_nibbles() {
        let path = with_code(with_code(with_code(0, 0, 1), 1, 2), 2, 4);
        assert_eq!(path, 0x421);
        assert_eq!(code_at(path, 0), 1);
        assert_eq!(code_at(path, 2), 4);
        assert_eq!(code_at(path, 3), NONE);
        assert_eq!(with_code(path, 3, FULL), 0xF421);
    }

    #[test]
    fn eighth_level_uses_the_top_nibble() {
        let path = with_code(0x0765_4321, 7, 8);
        assert_eq!(path, 0x8765_4321);
        assert_eq!(with_code(path, 8, FULL), path);
        assert_eq!(code_at(path, 8), NONE);
        assert_eq!(truncate(path, 8), path);
    }

    #[test]
    fn common_prefix_stops_at_first_difference() {
        assert_eq!(common_prefix((0x421, 3), (0x821, 3)), (0x21, 2));
        assert_eq!(common_prefix((0x421, 3), (0x21, 2)), (0x21, 2));
        assert_eq!(common_prefix((0x1, 1), (0x2, 1)), (0, 0));
    }
}
