// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use fpm_core::{Fix64, FixVec3};

use super::{ConfigError, Region, SpatialTree, TreeConfig};
use crate::Bounds3;

/// Three-dimensional region tree.
///
/// Octants are indexed with bit 0 selecting `+x`, bit 1 `+y` and bit 2 `+z`.
/// The location code of octant `i` is `i + 1`, leaving `0` and `0b1111` for
/// [`NONE`](super::NONE) and [`FULL`](super::FULL).
pub type Octree<T> = SpatialTree<Bounds3, T>;

fn half_step(center: Fix64, offset: Fix64, positive: bool) -> Fix64 {
    if positive {
        center + offset
    } else {
        center - offset
    }
}

impl Region for Bounds3 {
    const FANOUT: usize = 8;

    fn accepts(&self, other: &Self) -> bool {
        self.intersects_or_contains(other)
    }

    fn subregion(&self, index: usize) -> Self {
        let size = self.size() * Fix64::HALF;
        let offset = size * Fix64::HALF;
        let center = self.center();
        Self::new(
            FixVec3::new(
                half_step(center.x, offset.x, index & 1 != 0),
                half_step(center.y, offset.y, index & 2 != 0),
                half_step(center.z, offset.z, index & 4 != 0),
            ),
            size,
        )
    }

    fn location_code(index: usize) -> u8 {
        (index as u8 & 0b0111) + 1
    }

    fn subregion_index(code: u8) -> Option<usize> {
        match code {
            1..=8 => Some(usize::from(code - 1)),
            _ => None,
        }
    }
}

impl<T> SpatialTree<Bounds3, T> {
    /// Creates an octree over a `width` x `height` x `length` world centered
    /// on the origin.
    ///
    /// # Errors
    /// [`ConfigError::MaxDepthExceeded`] when `max_depth > 8`.
    pub fn new(
        width: Fix64,
        height: Fix64,
        length: Fix64,
        max_depth: u8,
    ) -> Result<Self, ConfigError> {
        Self::with_config(width, height, length, TreeConfig::new(max_depth))
    }

    /// [`Octree::new`] with integer world dimensions.
    ///
    /// # Errors
    /// Same as [`Octree::new`].
    pub fn from_ints(
        width: i32,
        height: i32,
        length: i32,
        max_depth: u8,
    ) -> Result<Self, ConfigError> {
        Self::new(
            Fix64::from_int(width),
            Fix64::from_int(height),
            Fix64::from_int(length),
            max_depth,
        )
    }

    /// Creates an octree with explicit settings.
    ///
    /// # Errors
    /// Any [`ConfigError`] reported by [`TreeConfig::validate`].
    pub fn with_config(
        width: Fix64,
        height: Fix64,
        length: Fix64,
        config: TreeConfig,
    ) -> Result<Self, ConfigError> {
        let world = Bounds3::new(FixVec3::ZERO, FixVec3::new(width, height, length));
        Self::with_region(world, config)
    }
}
