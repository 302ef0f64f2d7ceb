// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use fpm_core::{Fix64, FixVec2};

use super::{ConfigError, Region, SpatialTree, TreeConfig};
use crate::Bounds2;

/// Quadrant codes: one bit per quadrant.
const BOTTOM_LEFT: u8 = 0b0001;
const BOTTOM_RIGHT: u8 = 0b0010;
const TOP_LEFT: u8 = 0b0100;
const TOP_RIGHT: u8 = 0b1000;

/// Two-dimensional region tree.
///
/// Quadrants are indexed with bit 0 selecting `+x` and bit 1 selecting `+y`:
/// bottom-left, bottom-right, top-left, top-right.
pub type QuadTree<T> = SpatialTree<Bounds2, T>;

impl Region for Bounds2 {
    const FANOUT: usize = 4;

    fn accepts(&self, other: &Self) -> bool {
        self.intersects_or_contains(other)
    }

    fn subregion(&self, index: usize) -> Self {
        let size = self.size() * Fix64::HALF;
        let offset = size * Fix64::HALF;
        let center = self.center();
        let x = if index & 1 == 0 {
            center.x - offset.x
        } else {
            center.x + offset.x
        };
        let y = if index & 2 == 0 {
            center.y - offset.y
        } else {
            center.y + offset.y
        };
        Self::new(FixVec2::new(x, y), size)
    }

    fn location_code(index: usize) -> u8 {
        match index {
            0 => BOTTOM_LEFT,
            1 => BOTTOM_RIGHT,
            2 => TOP_LEFT,
            _ => TOP_RIGHT,
        }
    }

    fn subregion_index(code: u8) -> Option<usize> {
        match code {
            BOTTOM_LEFT => Some(0),
            BOTTOM_RIGHT => Some(1),
            TOP_LEFT => Some(2),
            TOP_RIGHT => Some(3),
            _ => None,
        }
    }
}

impl<T> SpatialTree<Bounds2, T> {
    /// Creates a quadtree over a `width` x `height` world centered on the
    /// origin.
    ///
    /// # Errors
    /// [`ConfigError::MaxDepthExceeded`] when `max_depth > 8`.
    pub fn new(width: Fix64, height: Fix64, max_depth: u8) -> Result<Self, ConfigError> {
        Self::with_config(width, height, TreeConfig::new(max_depth))
    }

    /// [`QuadTree::new`] with integer world dimensions.
    ///
    /// # Errors
    /// Same as [`QuadTree::new`].
    pub fn from_ints(width: i32, height: i32, max_depth: u8) -> Result<Self, ConfigError> {
        Self::new(Fix64::from_int(width), Fix64::from_int(height), max_depth)
    }

    /// Creates a quadtree with explicit settings.
    ///
    /// # Errors
    /// Any [`ConfigError`] reported by [`TreeConfig::validate`].
    pub fn with_config(
        width: Fix64,
        height: Fix64,
        config: TreeConfig,
    ) -> Result<Self, ConfigError> {
        let world = Bounds2::new(FixVec2::ZERO, FixVec2::new(width, height));
        Self::with_region(world, config)
    }
}
