//! Cell coordinates, cube faces, shape bounds and colors shared by the lighting crates.
#![forbid(unsafe_code)]

use core::ops::Add;

mod bounds;
mod face;
mod rgb;

pub use bounds::{BoundsError, FractionalBounds};
pub use face::{Axis, Corner, Face};
pub use rgb::Rgb;

/// Integer position of one unit cell in the world grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub struct CellPos {
    #[cfg_attr(test, proptest(strategy = "-1_000i32..1_000"))]
    pub x: i32,
    #[cfg_attr(test, proptest(strategy = "-1_000i32..1_000"))]
    pub y: i32,
    #[cfg_attr(test, proptest(strategy = "-1_000i32..1_000"))]
    pub z: i32,
}

impl CellPos {
    pub const ORIGIN: CellPos = CellPos { x: 0, y: 0, z: 0 };

    #[inline]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub fn get(self, axis: Axis) -> i32 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    /// Returns this position moved `delta` cells along `axis`.
    #[inline]
    pub fn offset(self, axis: Axis, delta: i32) -> CellPos {
        let mut p = self;
        match axis {
            Axis::X => p.x += delta,
            Axis::Y => p.y += delta,
            Axis::Z => p.z += delta,
        }
        p
    }

    /// The cell across `face`.
    #[inline]
    pub fn step(self, face: Face) -> CellPos {
        self.offset(face.axis(), face.sign())
    }
}

impl Add<(i32, i32, i32)> for CellPos {
    type Output = CellPos;
    #[inline]
    fn add(self, (dx, dy, dz): (i32, i32, i32)) -> CellPos {
        CellPos::new(self.x + dx, self.y + dy, self.z + dz)
    }
}

impl From<(i32, i32, i32)> for CellPos {
    #[inline]
    fn from((x, y, z): (i32, i32, i32)) -> Self {
        CellPos::new(x, y, z)
    }
}
