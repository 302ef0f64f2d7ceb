// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use fpm_core::{Fix64, FixVec3};

/// Axis-aligned box described by its center and full size.
///
/// Same conventions as [`crate::Bounds2`]: derived corners, closed
/// intervals, bidirectional containment, no size validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bounds3 {
    center: FixVec3,
    size: FixVec3,
    min: FixVec3,
    max: FixVec3,
}

impl Bounds3 {
    /// Builds a box from its center and full size.
    pub fn new(center: FixVec3, size: FixVec3) -> Self {
        let extents = size * Fix64::HALF;
        Self {
            center,
            size,
            min: center - extents,
            max: center + extents,
        }
    }

    /// Builds a box from integer center and size components.
    pub fn from_ints(center: (i32, i32, i32), size: (i32, i32, i32)) -> Self {
        Self::new(
            FixVec3::from_ints(center.0, center.1, center.2),
            FixVec3::from_ints(size.0, size.1, size.2),
        )
    }

    /// Center point.
    pub fn center(&self) -> FixVec3 {
        self.center
    }

    /// Full size along each axis.
    pub fn size(&self) -> FixVec3 {
        self.size
    }

    /// Half size along each axis.
    pub fn extents(&self) -> FixVec3 {
        self.size * Fix64::HALF
    }

    /// Minimum corner.
    pub fn min(&self) -> FixVec3 {
        self.min
    }

    /// Maximum corner.
    pub fn max(&self) -> FixVec3 {
        self.max
    }

    /// `true` if the boxes overlap on all three axes (closed intervals).
    pub fn intersects(&self, other: &Self) -> bool {
        !(self.max.x < other.min.x
            || self.min.x > other.max.x
            || self.max.y < other.min.y
            || self.min.y > other.max.y
            || self.max.z < other.min.z
            || self.min.z > other.max.z)
    }

    /// `true` if either box fully encloses the other.
    pub fn contains(&self, other: &Self) -> bool {
        self.encloses(other) || other.encloses(self)
    }

    /// `intersects || contains`.
    pub fn intersects_or_contains(&self, other: &Self) -> bool {
        self.intersects(other) || self.contains(other)
    }

    /// `true` if `point` lies inside or on the boundary.
    pub fn contains_point(&self, point: FixVec3) -> bool {
        (self.min.x..=self.max.x).contains(&point.x)
            && (self.min.y..=self.max.y).contains(&point.y)
            && (self.min.z..=self.max.z).contains(&point.z)
    }

    fn encloses(&self, other: &Self) -> bool {
        self.min.x <= other.min.x
            && self.max.x >= other.max.x
            && self.min.y <= other.min.y
            && self.max.y >= other.max.y
            && self.min.z <= other.min.z
            && self.max.z >= other.max.z
    }
}
