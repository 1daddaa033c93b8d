use facelight_geom::{Axis, CellPos};

use crate::brightness::Brightness;
use crate::sampler::NeighborSampler;

/// Dense in-memory light store covering a box of cells.
///
/// Cells outside the box answer with the `outside` values, open sky by default.
#[derive(Clone, Debug)]
pub struct LightGrid {
    origin: CellPos,
    sx: usize,
    sy: usize,
    sz: usize,
    light: Vec<f32>,
    brightness: Vec<Brightness>,
    outside_light: f32,
    outside_brightness: Brightness,
}

/// Grid dimensions that cannot be stored or addressed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GridSizeError {
    TooManyCells { dims: (usize, usize, usize) },
    ExtentOverflow { axis: Axis, origin: i32, size: usize },
}

impl LightGrid {
    /// Creates a grid filled with `light` and `brightness`.
    ///
    /// # Panics
    ///
    /// Panics when the dimensions are rejected by [`try_new`](Self::try_new).
    pub fn new(
        origin: CellPos,
        dims: (usize, usize, usize),
        light: f32,
        brightness: Brightness,
    ) -> Self {
        match Self::try_new(origin, dims, light, brightness) {
            Ok(grid) => grid,
            Err(e) => panic!("{e}"),
        }
    }

    /// Creates a grid, rejecting a cell count that overflows `usize` or a box
    /// whose far edge does not fit in `i32` coordinates.
    pub fn try_new(
        origin: CellPos,
        (sx, sy, sz): (usize, usize, usize),
        light: f32,
        brightness: Brightness,
    ) -> Result<Self, GridSizeError> {
        for (axis, size) in [(Axis::X, sx), (Axis::Y, sy), (Axis::Z, sz)] {
            let o = origin.get(axis);
            let fits = i32::try_from(size)
                .ok()
                .and_then(|s| o.checked_add(s))
                .is_some();
            if !fits {
                return Err(GridSizeError::ExtentOverflow {
                    axis,
                    origin: o,
                    size,
                });
            }
        }
        let n = Self::cell_count((sx, sy, sz)).ok_or(GridSizeError::TooManyCells {
            dims: (sx, sy, sz),
        })?;
        Ok(Self {
            origin,
            sx,
            sy,
            sz,
            light: vec![light; n],
            brightness: vec![brightness; n],
            outside_light: 1.0,
            outside_brightness: Brightness::MAX,
        })
    }

    /// Number of cells in a box of `dims`, or `None` on overflow.
    #[inline]
    pub fn cell_count((sx, sy, sz): (usize, usize, usize)) -> Option<usize> {
        sx.checked_mul(sy)?.checked_mul(sz)
    }

    /// Values reported for cells outside the grid.
    pub fn with_outside(mut self, light: f32, brightness: Brightness) -> Self {
        self.outside_light = light;
        self.outside_brightness = brightness;
        self
    }

    #[inline]
    pub fn origin(&self) -> CellPos {
        self.origin
    }

    #[inline]
    pub fn dims(&self) -> (usize, usize, usize) {
        (self.sx, self.sy, self.sz)
    }

    #[inline]
    fn idx(&self, cell: CellPos) -> Option<usize> {
        let lx = cell.x.checked_sub(self.origin.x)?;
        let ly = cell.y.checked_sub(self.origin.y)?;
        let lz = cell.z.checked_sub(self.origin.z)?;
        if lx < 0 || ly < 0 || lz < 0 {
            return None;
        }
        let (x, y, z) = (lx as usize, ly as usize, lz as usize);
        if x >= self.sx || y >= self.sy || z >= self.sz {
            return None;
        }
        Some((y * self.sz + z) * self.sx + x)
    }

    /// Every cell of the grid in storage order.
    pub fn cells(&self) -> impl Iterator<Item = CellPos> + '_ {
        // extents fit in i32: checked in `try_new`
        let (sx, sy, sz) = (self.sx as i32, self.sy as i32, self.sz as i32);
        (0..sy).flat_map(move |y| {
            (0..sz).flat_map(move |z| (0..sx).map(move |x| self.origin + (x, y, z)))
        })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.light.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.light.is_empty()
    }

    #[inline]
    pub fn contains(&self, cell: CellPos) -> bool {
        self.idx(cell).is_some()
    }

    /// Sets one cell; returns `false` when the cell lies outside the grid.
    pub fn set(&mut self, cell: CellPos, light: f32, brightness: Brightness) -> bool {
        match self.idx(cell) {
            Some(i) => {
                self.light[i] = light;
                self.brightness[i] = brightness;
                true
            }
            None => false,
        }
    }

    pub fn set_light(&mut self, cell: CellPos, light: f32) -> bool {
        match self.idx(cell) {
            Some(i) => {
                self.light[i] = light;
                true
            }
            None => false,
        }
    }

    pub fn set_brightness(&mut self, cell: CellPos, brightness: Brightness) -> bool {
        match self.idx(cell) {
            Some(i) => {
                self.brightness[i] = brightness;
                true
            }
            None => false,
        }
    }
}

impl std::fmt::Display for GridSizeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GridSizeError::TooManyCells { dims } => {
                write!(f, "grid of {:?} cells overflows the cell count", dims)
            }
            GridSizeError::ExtentOverflow { axis, origin, size } => write!(
                f,
                "grid of size {} from {} on {:?} leaves the i32 coordinate range",
                size, origin, axis
            ),
        }
    }
}

impl std::error::Error for GridSizeError {}

impl NeighborSampler for LightGrid {
    #[inline]
    fn sample_light(&self, cell: CellPos) -> f32 {
        self.idx(cell)
            .map(|i| self.light[i])
            .unwrap_or(self.outside_light)
    }

    #[inline]
    fn sample_mixed_brightness(&self, cell: CellPos) -> Brightness {
        self.idx(cell)
            .map(|i| self.brightness[i])
            .unwrap_or(self.outside_brightness)
    }
}
