// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use core::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

use super::exp_log::sqrt_raw;
use super::Fix64;

/// Three-component fixed-point vector.
///
/// * Components may represent points or directions depending on the caller.
/// * Arithmetic follows [`Fix64`]'s operators: `+`, `-`, scalar `*` and
///   `cross` wrap, `/` saturates, `length_squared`/`length` saturate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct FixVec3 {
    /// X component.
    pub x: Fix64,
    /// Y component.
    pub y: Fix64,
    /// Z component.
    pub z: Fix64,
}

impl FixVec3 {
    /// `(0, 0, 0)`.
    pub const ZERO: Self = Self::splat(Fix64::ZERO);
    /// `(1, 1, 1)`.
    pub const ONE: Self = Self::splat(Fix64::ONE);
    /// Unit vector along +X.
    pub const UNIT_X: Self = Self::new(Fix64::ONE, Fix64::ZERO, Fix64::ZERO);
    /// Unit vector along +Y.
    pub const UNIT_Y: Self = Self::new(Fix64::ZERO, Fix64::ONE, Fix64::ZERO);
    /// Unit vector along +Z.
    pub const UNIT_Z: Self = Self::new(Fix64::ZERO, Fix64::ZERO, Fix64::ONE);

    /// Creates a vector from components.
    pub const fn new(x: Fix64, y: Fix64, z: Fix64) -> Self {
        Self { x, y, z }
    }

    /// All components set to `v`.
    pub const fn splat(v: Fix64) -> Self {
        Self::new(v, v, v)
    }

    /// Creates a vector from integer components.
    pub const fn from_ints(x: i32, y: i32, z: i32) -> Self {
        Self::new(Fix64::from_int(x), Fix64::from_int(y), Fix64::from_int(z))
    }

    /// Creates a vector from an `[x, y, z]` array.
    pub const fn from_array(v: [Fix64; 3]) -> Self {
        Self::new(v[0], v[1], v[2])
    }

    /// Returns the components as `[x, y, z]`.
    pub const fn to_array(self) -> [Fix64; 3] {
        [self.x, self.y, self.z]
    }

    /// Dot product (wrapping).
    pub fn dot(self, other: Self) -> Fix64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Right-handed cross product.
    pub fn cross(self, other: Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Squared length, saturating at [`Fix64::MAX`].
    pub fn length_squared(self) -> Fix64 {
        self.x
            .safe_mul(self.x)
            .safe_add(self.y.safe_mul(self.y))
            .safe_add(self.z.safe_mul(self.z))
    }

    /// Euclidean length, saturating.
    pub fn length(self) -> Fix64 {
        Fix64::from_raw(sqrt_raw(self.length_squared().raw() as u64) as i64)
    }

    /// Component-wise minimum.
    pub fn min(self, other: Self) -> Self {
        Self::new(
            self.x.min(other.x),
            self.y.min(other.y),
            self.z.min(other.z),
        )
    }

    /// Component-wise maximum.
    pub fn max(self, other: Self) -> Self {
        Self::new(
            self.x.max(other.x),
            self.y.max(other.y),
            self.z.max(other.z),
        )
    }

    /// Component-wise absolute value.
    pub fn abs(self) -> Self {
        Self::new(self.x.abs(), self.y.abs(), self.z.abs())
    }
}

impl Add for FixVec3 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for FixVec3 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Neg for FixVec3 {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl Mul<Fix64> for FixVec3 {
    type Output = Self;

    fn mul(self, rhs: Fix64) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Div<Fix64> for FixVec3 {
    type Output = Self;

    fn div(self, rhs: Fix64) -> Self {
        Self::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

impl AddAssign for FixVec3 {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for FixVec3 {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cross_follows_right_hand_rule() {
        assert_eq!(FixVec3::UNIT_X.cross(FixVec3::UNIT_Y), FixVec3::UNIT_Z);
        assert_eq!(FixVec3::UNIT_Y.cross(FixVec3::UNIT_X), -FixVec3::UNIT_Z);
        assert_eq!(FixVec3::UNIT_Z.cross(FixVec3::UNIT_X), FixVec3::UNIT_Y);
    }

    #[test]
    fn lengths_and_dot() {
        let v = FixVec3::from_ints(2, 3, 6);
        assert_eq!(v.length_squared(), Fix64::from_int(49));
        assert_eq!(v.length(), Fix64::from_int(7));
        assert_eq!(v.dot(FixVec3::ONE), Fix64::from_int(11));
        assert_eq!(FixVec3::splat(Fix64::MIN).length_squared(), Fix64::MAX);
    }

    #[test]
    fn arrays_round_trip_components() {
        let v = FixVec3::from_ints(-1, 0, 9);
        assert_eq!(FixVec3::from_array(v.to_array()), v);
        let mut w = v;
        w += FixVec3::ONE;
        w -= FixVec3::UNIT_Z;
        assert_eq!(w, FixVec3::from_ints(0, 1, 9));
        assert_eq!(w / Fix64::ZERO, FixVec3::splat(Fix64::MAX));
    }
}
