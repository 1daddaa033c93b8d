use crate::face::Axis;

/// Sub-box of the unit cell that a shape actually occupies, per axis in `[0,1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FractionalBounds {
    min: [f32; 3],
    max: [f32; 3],
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BoundsError {
    OutOfRange { axis: Axis, value: f32 },
    Inverted { axis: Axis, min: f32, max: f32 },
}

impl FractionalBounds {
    pub const FULL: FractionalBounds = FractionalBounds {
        min: [0.0; 3],
        max: [1.0; 3],
    };

    /// Builds bounds from per-axis `[x, y, z]` minimums and maximums.
    pub fn new(min: [f32; 3], max: [f32; 3]) -> Result<Self, BoundsError> {
        for axis in Axis::ALL {
            let (lo, hi) = (min[axis.index()], max[axis.index()]);
            for value in [lo, hi] {
                if !(0.0..=1.0).contains(&value) {
                    return Err(BoundsError::OutOfRange { axis, value });
                }
            }
            if lo > hi {
                return Err(BoundsError::Inverted {
                    axis,
                    min: lo,
                    max: hi,
                });
            }
        }
        Ok(Self { min, max })
    }

    /// Returns a copy with one axis replaced.
    pub fn with_axis(self, axis: Axis, min: f32, max: f32) -> Result<Self, BoundsError> {
        let mut lo = self.min;
        let mut hi = self.max;
        lo[axis.index()] = min;
        hi[axis.index()] = max;
        Self::new(lo, hi)
    }

    #[inline]
    pub fn min(self, axis: Axis) -> f32 {
        self.min[axis.index()]
    }

    #[inline]
    pub fn max(self, axis: Axis) -> f32 {
        self.max[axis.index()]
    }

    /// True when the shape covers the whole cell along `axis`.
    #[inline]
    pub fn spans_full(self, axis: Axis) -> bool {
        self.min(axis) == 0.0 && self.max(axis) == 1.0
    }

    #[inline]
    pub fn is_full(self) -> bool {
        Axis::ALL.into_iter().all(|a| self.spans_full(a))
    }
}

impl Default for FractionalBounds {
    fn default() -> Self {
        Self::FULL
    }
}

impl std::fmt::Display for BoundsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BoundsError::OutOfRange { axis, value } => {
                write!(f, "bound {} on {:?} lies outside [0, 1]", value, axis)
            }
            BoundsError::Inverted { axis, min, max } => {
                write!(f, "inverted bounds on {:?}: min {} > max {}", axis, min, max)
            }
        }
    }
}

impl std::error::Error for BoundsError {}
