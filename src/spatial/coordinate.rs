//! Integer grid coordinates with value semantics

use crate::spatial::direction::Direction;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// Location of a tile on the grid
///
/// `x` and `z` are the horizontal axes and `y` is the vertical layer.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct GridCoordinate {
    /// East-west axis (east is positive)
    pub x: i32,
    /// Vertical layer
    pub y: i32,
    /// North-south axis (north is positive)
    pub z: i32,
}

impl GridCoordinate {
    /// The origin
    pub const ZERO: Self = Self::new(0, 0, 0);
    /// One step east
    pub const UNIT_X: Self = Self::new(1, 0, 0);
    /// One layer up
    pub const UNIT_Y: Self = Self::new(0, 1, 0);
    /// One step north
    pub const UNIT_Z: Self = Self::new(0, 0, 1);

    /// Create a coordinate from its components
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// The neighbouring coordinate on the same layer
    pub const fn offset(self, direction: Direction) -> Self {
        let (dx, dz) = direction.offset();
        Self::new(self.x + dx, self.y, self.z + dz)
    }

    /// The eight same-layer neighbours in clockwise order from north
    pub fn neighbours(self) -> impl Iterator<Item = (Direction, Self)> {
        Direction::ALL
            .into_iter()
            .map(move |direction| (direction, self.offset(direction)))
    }

    /// World-space position for a block of the given size
    pub fn to_world(self, scale: [f32; 3]) -> [f32; 3] {
        [
            self.x as f32 * scale[0],
            self.y as f32 * scale[1],
            self.z as f32 * scale[2],
        ]
    }
}

impl fmt::Display for GridCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{X:{} Y:{} Z:{}}}", self.x, self.y, self.z)
    }
}

impl Add for GridCoordinate {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for GridCoordinate {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Neg for GridCoordinate {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl Mul<i32> for GridCoordinate {
    type Output = Self;

    fn mul(self, factor: i32) -> Self {
        Self::new(self.x * factor, self.y * factor, self.z * factor)
    }
}

impl From<[i32; 3]> for GridCoordinate {
    fn from([x, y, z]: [i32; 3]) -> Self {
        Self::new(x, y, z)
    }
}
