/// World axis.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub enum Axis {
    X = 0,
    Y = 1,
    Z = 2,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

/// One of the six faces of a unit cell.
///
/// Discriminants are the per-face slot indices used by brightness arrays:
/// bottom, top, north (-Z), south (+Z), west (-X), east (+X).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub enum Face {
    NegY = 0,
    PosY = 1,
    NegZ = 2,
    PosZ = 3,
    NegX = 4,
    PosX = 5,
}

/// Screen-space corner of a face quad.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub enum Corner {
    TopLeft = 0,
    BottomLeft = 1,
    BottomRight = 2,
    TopRight = 3,
}

impl Corner {
    pub const ALL: [Corner; 4] = [
        Corner::TopLeft,
        Corner::BottomLeft,
        Corner::BottomRight,
        Corner::TopRight,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

// Quadrant (sign along the first minor axis, sign along the second) touched by
// each corner, in `Corner` order. Indexed by `Face`.
const CORNER_QUADRANTS: [[(i32, i32); 4]; 6] = [
    [(1, 1), (1, -1), (-1, -1), (-1, 1)], // NegY: X, Z
    [(1, 1), (1, -1), (-1, -1), (-1, 1)], // PosY: X, Z
    [(1, 1), (1, -1), (-1, -1), (-1, 1)], // NegZ: X, Y
    [(-1, 1), (-1, -1), (1, -1), (1, 1)], // PosZ: X, Y
    [(1, -1), (-1, -1), (-1, 1), (1, 1)], // NegX: Y, Z
    [(1, 1), (-1, 1), (-1, -1), (1, -1)], // PosX: Y, Z
];

impl Face {
    pub const ALL: [Face; 6] = [
        Face::NegY,
        Face::PosY,
        Face::NegZ,
        Face::PosZ,
        Face::NegX,
        Face::PosX,
    ];

    /// Returns the `[0..6)` slot index of this face.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Converts a slot index back into a `Face`.
    #[inline]
    pub fn from_index(i: usize) -> Option<Face> {
        Face::ALL.get(i).copied()
    }

    /// Axis the face normal points along.
    #[inline]
    pub fn axis(self) -> Axis {
        match self {
            Face::NegY | Face::PosY => Axis::Y,
            Face::NegZ | Face::PosZ => Axis::Z,
            Face::NegX | Face::PosX => Axis::X,
        }
    }

    /// `+1` for faces pointing along the positive axis, `-1` otherwise.
    #[inline]
    pub fn sign(self) -> i32 {
        if self.is_positive() { 1 } else { -1 }
    }

    #[inline]
    pub fn is_positive(self) -> bool {
        matches!(self, Face::PosY | Face::PosZ | Face::PosX)
    }

    #[inline]
    pub fn opposite(self) -> Face {
        match self {
            Face::NegY => Face::PosY,
            Face::PosY => Face::NegY,
            Face::NegZ => Face::PosZ,
            Face::PosZ => Face::NegZ,
            Face::NegX => Face::PosX,
            Face::PosX => Face::NegX,
        }
    }

    /// Returns the integer grid delta `(dx,dy,dz)` when stepping out of this face.
    #[inline]
    pub fn delta(self) -> (i32, i32, i32) {
        match self {
            Face::NegY => (0, -1, 0),
            Face::PosY => (0, 1, 0),
            Face::NegZ => (0, 0, -1),
            Face::PosZ => (0, 0, 1),
            Face::NegX => (-1, 0, 0),
            Face::PosX => (1, 0, 0),
        }
    }

    /// The two axes spanning the face plane, in the order the corner table uses.
    #[inline]
    pub fn minor_axes(self) -> (Axis, Axis) {
        match self {
            Face::NegY | Face::PosY => (Axis::X, Axis::Z),
            Face::NegZ | Face::PosZ => (Axis::X, Axis::Y),
            Face::NegX | Face::PosX => (Axis::Y, Axis::Z),
        }
    }

    /// Signs along `minor_axes()` of the quadrant that `corner` sits in.
    #[inline]
    pub fn corner_quadrant(self, corner: Corner) -> (i32, i32) {
        CORNER_QUADRANTS[self.index()][corner.index()]
    }

    /// Fixed directional shading factor applied to every vertex of this face.
    #[inline]
    pub fn lightness(self) -> f32 {
        match self {
            Face::NegY => 0.5,
            Face::PosY => 1.0,
            Face::NegZ | Face::PosZ => 0.8,
            Face::NegX | Face::PosX => 0.6,
        }
    }

    /// Parses the kebab-case names used by config files and the CLI.
    pub fn from_name(name: &str) -> Option<Face> {
        match name {
            "neg-y" | "down" | "bottom" => Some(Face::NegY),
            "pos-y" | "up" | "top" => Some(Face::PosY),
            "neg-z" | "north" => Some(Face::NegZ),
            "pos-z" | "south" => Some(Face::PosZ),
            "neg-x" | "west" => Some(Face::NegX),
            "pos-x" | "east" => Some(Face::PosX),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Face::NegY => "neg-y",
            Face::PosY => "pos-y",
            Face::NegZ => "neg-z",
            Face::PosZ => "pos-z",
            Face::NegX => "neg-x",
            Face::PosX => "pos-x",
        }
    }
}
