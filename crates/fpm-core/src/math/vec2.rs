// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use core::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

use super::exp_log::sqrt_raw;
use super::Fix64;

/// Two-component fixed-point vector.
///
/// Component arithmetic follows [`Fix64`]'s operator policy: `+`, `-` and
/// scalar `*` wrap, `/` saturates. `length_squared` and `length` saturate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct FixVec2 {
    /// X component.
    pub x: Fix64,
    /// Y component.
    pub y: Fix64,
}

impl FixVec2 {
    /// `(0, 0)`.
    pub const ZERO: Self = Self::new(Fix64::ZERO, Fix64::ZERO);
    /// `(1, 1)`.
    pub const ONE: Self = Self::new(Fix64::ONE, Fix64::ONE);
    /// `(1, 0)`.
    pub const UNIT_X: Self = Self::new(Fix64::ONE, Fix64::ZERO);
    /// `(0, 1)`.
    pub const UNIT_Y: Self = Self::new(Fix64::ZERO, Fix64::ONE);

    /// Creates a vector from components.
    pub const fn new(x: Fix64, y: Fix64) -> Self {
        Self { x, y }
    }

    /// Both components set to `v`.
    pub const fn splat(v: Fix64) -> Self {
        Self::new(v, v)
    }

    /// Creates a vector from integer components.
    pub const fn from_ints(x: i32, y: i32) -> Self {
        Self::new(Fix64::from_int(x), Fix64::from_int(y))
    }

    /// Creates a vector from an `[x, y]` array.
    pub const fn from_array(v: [Fix64; 2]) -> Self {
        Self::new(v[0], v[1])
    }

    /// Returns the components as `[x, y]`.
    pub const fn to_array(self) -> [Fix64; 2] {
        [self.x, self.y]
    }

    /// Dot product (wrapping).
    pub fn dot(self, other: Self) -> Fix64 {
        self.x * other.x + self.y * other.y
    }

    /// Squared length, saturating at [`Fix64::MAX`].
    pub fn length_squared(self) -> Fix64 {
        self.x.safe_mul(self.x).safe_add(self.y.safe_mul(self.y))
    }

    /// Euclidean length, saturating.
    pub fn length(self) -> Fix64 {
        // A saturated sum of squares is never negative.
        Fix64::from_raw(sqrt_raw(self.length_squared().raw() as u64) as i64)
    }

    /// Component-wise minimum.
    pub fn min(self, other: Self) -> Self {
        Self::new(self.x.min(other.x), self.y.min(other.y))
    }

    /// Component-wise maximum.
    pub fn max(self, other: Self) -> Self {
        Self::new(self.x.max(other.x), self.y.max(other.y))
    }

    /// Component-wise absolute value.
    pub fn abs(self) -> Self {
        Self::new(self.x.abs(), self.y.abs())
    }
}

impl Add for FixVec2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for FixVec2 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for FixVec2 {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl Mul<Fix64> for FixVec2 {
    type Output = Self;

    fn mul(self, rhs: Fix64) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl Div<Fix64> for FixVec2 {
    type Output = Self;

    fn div(self, rhs: Fix64) -> Self {
        Self::new(self.x / rhs, self.y / rhs)
    }
}

impl AddAssign for FixVec2 {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for FixVec2 {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}
