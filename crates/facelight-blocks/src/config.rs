use std::collections::HashMap;

use serde::Deserialize;

// Palette file:
//
// [blocks.grass]
// tint = "#7fb238"
// ground_cover = true
// overlay_icons = ["grass_side_overlay"]
//
// [dyes]
// rust = "#8a3b12"
//
// [slopes]
// positive = [0, 1, 4, 5]

#[derive(Deserialize, Default)]
pub struct PaletteConfig {
    #[serde(default)]
    pub blocks: HashMap<String, BlockTintDef>,
    #[serde(default)]
    pub dyes: HashMap<String, String>,
    #[serde(default)]
    pub slopes: SlopesConfig,
}

#[derive(Deserialize, Default, Clone)]
pub struct BlockTintDef {
    #[serde(default)]
    pub tint: Option<String>,
    #[serde(default)]
    pub ground_cover: bool,
    #[serde(default)]
    pub overlay_icons: Vec<String>,
}

#[derive(Deserialize, Default)]
pub struct SlopesConfig {
    #[serde(default)]
    pub positive: Vec<u16>,
}
