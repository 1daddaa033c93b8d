use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use facelight_blocks::TintPalette;
use facelight_blocks::config::PaletteConfig;
use facelight_blocks::hex::parse_rgb;
use facelight_color::{BlockId, ColorRequest, OverrideState};
use facelight_geom::{CellPos, Face, FractionalBounds};
use facelight_lighting::{Brightness, LightGrid, LightingSettings};
use serde::Deserialize;

// Scene file:
//
// block = "grass"
// cell = [0, 0, 0]
// palette_path = "palette.toml"   # or an inline [palette] table
//
// [icons]
// sides = "grass_side_overlay"    # also: top, bottom
//
// [bounds]
// min = [0.0, 0.0, 0.0]
// max = [1.0, 0.5, 1.0]
//
// [grid]
// origin = [-2, -2, -2]
// size = [5, 5, 5]
// light = 1.0
// sky = 15
//
// [[cells]]
// pos = [1, 1, 1]
// light = 0.2

#[derive(Deserialize)]
struct SceneConfig {
    block: String,
    #[serde(default)]
    cell: [i32; 3],
    #[serde(default)]
    dye: Option<String>,
    #[serde(default)]
    icons: IconsConfig,
    #[serde(default)]
    slope: Option<u16>,
    #[serde(default)]
    bounds: Option<BoundsConfig>,
    #[serde(default)]
    lighting: LightingSettings,
    #[serde(default)]
    grid: GridConfig,
    #[serde(default)]
    cells: Vec<CellConfig>,
    #[serde(default)]
    palette_path: Option<PathBuf>,
    #[serde(default)]
    palette: Option<PaletteConfig>,
    #[serde(default)]
    overrides: Option<OverridesConfig>,
}

#[derive(Deserialize)]
struct BoundsConfig {
    min: [f32; 3],
    max: [f32; 3],
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct IconsConfig {
    top: Option<String>,
    bottom: Option<String>,
    sides: Option<String>,
}

impl IconsConfig {
    fn per_face(self) -> [Option<String>; 6] {
        Face::ALL.map(|face| match face {
            Face::PosY => self.top.clone(),
            Face::NegY => self.bottom.clone(),
            _ => self.sides.clone(),
        })
    }
}

// Largest grid a scene may ask for.
const MAX_SCENE_CELLS: usize = 1 << 24;

#[derive(Deserialize)]
#[serde(default)]
struct GridConfig {
    origin: [i32; 3],
    size: [usize; 3],
    light: f32,
    sky: u8,
    block_light: u8,
    outside_light: f32,
    outside_sky: u8,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            origin: [-2, -2, -2],
            size: [5, 5, 5],
            light: 1.0,
            sky: 15,
            block_light: 0,
            outside_light: 1.0,
            outside_sky: 15,
        }
    }
}

#[derive(Deserialize)]
struct CellConfig {
    pos: [i32; 3],
    #[serde(default)]
    light: Option<f32>,
    #[serde(default)]
    sky: Option<u8>,
    #[serde(default)]
    block_light: Option<u8>,
}

#[derive(Deserialize)]
struct OverridesConfig {
    #[serde(default)]
    lightness: Option<f32>,
    #[serde(default)]
    brightness: Option<u32>,
    #[serde(default)]
    color: Option<String>,
}

/// A voxel to light, the world around it and how to color it.
pub struct Scene {
    pub grid: LightGrid,
    pub palette: TintPalette,
    pub settings: LightingSettings,
    pub block: BlockId,
    pub block_name: String,
    pub cell: CellPos,
    pub bounds: FractionalBounds,
    pub dye: Option<String>,
    /// Overlay icon per face, in [`Face`] slot order.
    pub icons: [Option<String>; 6],
    pub slope: Option<u16>,
    pub overrides: OverrideState,
}

fn to_cell([x, y, z]: [i32; 3]) -> CellPos {
    CellPos::new(x, y, z)
}

impl Scene {
    /// Loads a scene; a relative `palette_path` resolves against `base_dir`.
    pub fn from_toml_str(toml_str: &str, base_dir: &Path) -> Result<Self, Box<dyn Error>> {
        let cfg: SceneConfig = toml::from_str(toml_str)?;

        let palette = match (cfg.palette_path, cfg.palette) {
            (Some(_), Some(_)) => return Err("scene sets both palette_path and [palette]".into()),
            (Some(p), None) => TintPalette::from_path(base_dir.join(p))?,
            (None, Some(inline)) => TintPalette::from_config(inline)?,
            (None, None) => TintPalette::new(),
        };
        let block = palette
            .id_by_name(&cfg.block)
            .ok_or_else(|| format!("block '{}' is not in the palette", cfg.block))?;

        let g = &cfg.grid;
        let [sx, sy, sz] = g.size;
        match LightGrid::cell_count((sx, sy, sz)) {
            Some(n) if n <= MAX_SCENE_CELLS => {}
            _ => {
                return Err(format!(
                    "grid size {:?} exceeds {} cells",
                    g.size, MAX_SCENE_CELLS
                )
                .into());
            }
        }
        let mut grid = LightGrid::try_new(
            to_cell(g.origin),
            (sx, sy, sz),
            g.light,
            Brightness::from_levels(g.sky, g.block_light),
        )?
        .with_outside(g.outside_light, Brightness::from_levels(g.outside_sky, 0));
        for c in &cfg.cells {
            let pos = to_cell(c.pos);
            let light = c.light.unwrap_or(g.light);
            let level = Brightness::from_levels(
                c.sky.unwrap_or(g.sky),
                c.block_light.unwrap_or(g.block_light),
            );
            if !grid.set(pos, light, level) {
                log::warn!(target: "scene", "cell {:?} lies outside the grid; ignored", pos);
            }
        }

        let bounds = match cfg.bounds {
            Some(b) => FractionalBounds::new(b.min, b.max)?,
            None => FractionalBounds::FULL,
        };

        let mut overrides = OverrideState::NONE;
        if let Some(o) = cfg.overrides {
            overrides.lightness = o.lightness;
            overrides.brightness = o.brightness.map(Brightness);
            overrides.color = o.color.as_deref().map(parse_rgb).transpose()?;
        }

        Ok(Scene {
            grid,
            palette,
            settings: cfg.lighting,
            block,
            block_name: cfg.block,
            cell: to_cell(cfg.cell),
            bounds,
            dye: cfg.dye,
            icons: cfg.icons.per_face(),
            slope: cfg.slope,
            overrides,
        })
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, Box<dyn Error>> {
        let path = path.as_ref();
        let s = fs::read_to_string(path)?;
        let base = path.parent().unwrap_or_else(|| Path::new("."));
        Self::from_toml_str(&s, base)
    }

    /// Color request for `face` of the scene's voxel.
    pub fn request(&self, face: Face) -> ColorRequest {
        self.palette.request(
            self.block,
            self.cell,
            face,
            self.dye.as_deref(),
            self.icons[face.index()].as_deref(),
            self.slope,
        )
    }

    /// Every cell of the grid, each with the scene's bounds.
    pub fn all_cells(&self) -> Vec<(CellPos, FractionalBounds)> {
        self.grid.cells().map(|c| (c, self.bounds)).collect()
    }
}
