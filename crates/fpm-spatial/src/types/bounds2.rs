// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use fpm_core::{Fix64, FixVec2};

/// Axis-aligned rectangle described by its center and full size.
///
/// Invariants:
/// - `min = center - size / 2` and `max = center + size / 2`, computed once
///   at construction.
/// - Sizes are not validated. A negative size yields `min > max`; the
///   predicates below still evaluate consistently on such boxes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bounds2 {
    center: FixVec2,
    size: FixVec2,
    min: FixVec2,
    max: FixVec2,
}

impl Bounds2 {
    /// Builds a box from its center and full size.
    pub fn new(center: FixVec2, size: FixVec2) -> Self {
        let extents = size * Fix64::HALF;
        Self {
            center,
            size,
            min: center - extents,
            max: center + extents,
        }
    }

    /// Builds a box from integer center and size components.
    pub fn from_ints(center: (i32, i32), size: (i32, i32)) -> Self {
        Self::new(
            FixVec2::from_ints(center.0, center.1),
            FixVec2::from_ints(size.0, size.1),
        )
    }

    /// Center point.
    pub fn center(&self) -> FixVec2 {
        self.center
    }

    /// Full size along each axis.
    pub fn size(&self) -> FixVec2 {
        self.size
    }

    /// Half size along each axis.
    pub fn extents(&self) -> FixVec2 {
        self.size * Fix64::HALF
    }

    /// Minimum corner.
    pub fn min(&self) -> FixVec2 {
        self.min
    }

    /// Maximum corner.
    pub fn max(&self) -> FixVec2 {
        self.max
    }

    /// `true` if the boxes overlap on both axes. Intervals are closed, so
    /// touching edges count.
    pub fn intersects(&self, other: &Self) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
    }

    /// `true` if either box fully encloses the other.
    pub fn contains(&self, other: &Self) -> bool {
        self.encloses(other) || other.encloses(self)
    }

    /// `intersects || contains`, the routing predicate of the trees.
    pub fn intersects_or_contains(&self, other: &Self) -> bool {
        self.intersects(other) || self.contains(other)
    }

    /// `true` if `point` lies inside or on the boundary.
    pub fn contains_point(&self, point: FixVec2) -> bool {
        (self.min.x..=self.max.x).contains(&point.x) && (self.min.y..=self.max.y).contains(&point.y)
    }

    fn encloses(&self, other: &Self) -> bool {
        self.min.x <= other.min.x
            && self.max.x >= other.max.x
            && self.min.y <= other.min.y
            && self.max.y >= other.max.y
    }
}
