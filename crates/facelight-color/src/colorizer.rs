use facelight_geom::{CellPos, Face, Rgb};

/// Dense block type id assigned by the block palette.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BlockId(pub u16);

/// Host lookups for block tinting.
pub trait BlockColorizer {
    /// Color multiplier of `block` at `cell` (biome tint, fixed block color, ...).
    fn block_tint(&self, block: BlockId, cell: CellPos) -> Rgb;
    /// Blocks like grass only tint their top and overlay faces.
    fn is_ground_cover(&self, block: BlockId) -> bool;
}

impl<T: BlockColorizer + ?Sized> BlockColorizer for &T {
    #[inline]
    fn block_tint(&self, block: BlockId, cell: CellPos) -> Rgb {
        (**self).block_tint(block, cell)
    }

    #[inline]
    fn is_ground_cover(&self, block: BlockId) -> bool {
        (**self).is_ground_cover(block)
    }
}

/// What to color: one face of one block, plus the caller's per-face flags.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorRequest {
    pub block: BlockId,
    pub cell: CellPos,
    pub face: Face,
    /// Dye multiplied into the tint; `None` renders undyed.
    pub dye: Option<Rgb>,
    /// The face carries the block's side overlay icon.
    pub overlay_icon: bool,
    /// The face is the sloped side of a positively sloped shape.
    pub positive_slope: bool,
}

impl ColorRequest {
    pub fn new(block: BlockId, cell: CellPos, face: Face) -> Self {
        Self {
            block,
            cell,
            face,
            dye: None,
            overlay_icon: false,
            positive_slope: false,
        }
    }

    pub fn with_dye(mut self, dye: Rgb) -> Self {
        self.dye = Some(dye);
        self
    }

    pub fn with_overlay_icon(mut self, on: bool) -> Self {
        self.overlay_icon = on;
        self
    }

    pub fn with_positive_slope(mut self, on: bool) -> Self {
        self.positive_slope = on;
        self
    }

    /// Whether a ground-cover block keeps its tint on this face.
    #[inline]
    pub fn keeps_ground_tint(&self) -> bool {
        self.face == Face::PosY || self.overlay_icon || self.positive_slope
    }
}
