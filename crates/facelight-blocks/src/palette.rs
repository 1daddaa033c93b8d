use std::collections::HashMap;
use std::error::Error;
use std::fs;
use std::path::Path;

use facelight_color::{BlockColorizer, BlockId, ColorRequest};
use facelight_geom::{CellPos, Face, Rgb};

use crate::config::PaletteConfig;
use crate::dye::DyeCatalog;
use crate::hex::parse_rgb;
use crate::slope::SlopeTable;

#[derive(Clone, Debug, PartialEq)]
pub struct BlockTint {
    pub id: BlockId,
    pub name: String,
    pub tint: Rgb,
    pub ground_cover: bool,
    pub overlay_icons: Vec<String>,
}

/// Block tints, dyes and slopes loaded from a palette file.
///
/// Unknown blocks render untinted and are never ground cover.
#[derive(Clone, Debug, Default)]
pub struct TintPalette {
    pub blocks: Vec<BlockTint>,
    pub by_name: HashMap<String, BlockId>,
    pub dyes: DyeCatalog,
    pub slopes: SlopeTable,
}

impl TintPalette {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn get(&self, id: BlockId) -> Option<&BlockTint> {
        self.blocks.get(id.0 as usize)
    }

    pub fn id_by_name(&self, name: &str) -> Option<BlockId> {
        self.by_name.get(name).copied()
    }

    /// Registers a block, replacing any previous entry of the same name.
    pub fn insert(
        &mut self,
        name: &str,
        tint: Rgb,
        ground_cover: bool,
        overlay_icons: Vec<String>,
    ) -> BlockId {
        if let Some(id) = self.id_by_name(name) {
            let entry = &mut self.blocks[id.0 as usize];
            entry.tint = tint;
            entry.ground_cover = ground_cover;
            entry.overlay_icons = overlay_icons;
            return id;
        }
        let id = BlockId(self.blocks.len() as u16);
        self.by_name.insert(name.to_string(), id);
        self.blocks.push(BlockTint {
            id,
            name: name.to_string(),
            tint,
            ground_cover,
            overlay_icons,
        });
        id
    }

    /// True when `icon` is one of the block's side overlay icons.
    pub fn has_overlay_icon(&self, block: BlockId, icon: &str) -> bool {
        self.get(block)
            .map(|b| b.overlay_icons.iter().any(|i| i == icon))
            .unwrap_or(false)
    }

    /// Builds the color request for a face, resolving the dye name, the face's
    /// icon and the shape's slope against this palette.
    pub fn request(
        &self,
        block: BlockId,
        cell: CellPos,
        face: Face,
        dye: Option<&str>,
        icon: Option<&str>,
        slope: Option<u16>,
    ) -> ColorRequest {
        let mut req = ColorRequest::new(block, cell, face)
            .with_overlay_icon(icon.is_some_and(|i| self.has_overlay_icon(block, i)))
            .with_positive_slope(slope.is_some_and(|s| self.slopes.is_positive(s)));
        if let Some(name) = dye {
            match self.dyes.get(name) {
                Some(rgb) => req = req.with_dye(rgb),
                None => log::warn!(target: "color", "unknown dye '{}', rendering undyed", name),
            }
        }
        req
    }

    pub fn from_toml_str(toml_str: &str) -> Result<Self, Box<dyn Error>> {
        let cfg: PaletteConfig = toml::from_str(toml_str)?;
        Self::from_config(cfg)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, Box<dyn Error>> {
        let s = fs::read_to_string(path)?;
        Self::from_toml_str(&s)
    }

    pub fn from_config(cfg: PaletteConfig) -> Result<Self, Box<dyn Error>> {
        let mut palette = TintPalette::new();
        let mut blocks: Vec<_> = cfg.blocks.into_iter().collect();
        // sorted so ids do not depend on map iteration order
        blocks.sort_by(|a, b| a.0.cmp(&b.0));
        for (name, def) in blocks {
            let tint = match def.tint.as_deref() {
                Some(s) => parse_rgb(s).map_err(|e| format!("block '{name}': {e}"))?,
                None => Rgb::WHITE,
            };
            palette.insert(&name, tint, def.ground_cover, def.overlay_icons);
        }
        let mut dyes: Vec<_> = cfg.dyes.into_iter().collect();
        dyes.sort();
        for (name, hex) in dyes {
            let packed = crate::hex::parse_packed(&hex).map_err(|e| format!("dye '{name}': {e}"))?;
            palette.dyes.insert(&name, packed);
        }
        palette.slopes = SlopeTable::from_positive(cfg.slopes.positive);
        log::debug!(
            target: "color",
            "palette: {} blocks, {} dyes, {} positive slopes",
            palette.blocks.len(),
            palette.dyes.len(),
            palette.slopes.len()
        );
        Ok(palette)
    }
}

impl BlockColorizer for TintPalette {
    fn block_tint(&self, block: BlockId, _cell: CellPos) -> Rgb {
        self.get(block).map(|b| b.tint).unwrap_or(Rgb::WHITE)
    }

    fn is_ground_cover(&self, block: BlockId) -> bool {
        self.get(block).map(|b| b.ground_cover).unwrap_or(false)
    }
}
