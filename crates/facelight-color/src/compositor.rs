use facelight_geom::{Corner, Rgb};
use facelight_lighting::{Brightness, FaceLighting, LightingSettings};

use crate::colorizer::{BlockColorizer, ColorRequest};
use crate::overrides::OverrideState;
use crate::stereo::stereo_filter;

/// Vertex colors of one face.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum VertexColors {
    /// One color per corner, in [`Corner`] order.
    Corners([Rgb; 4]),
    /// Same color on every vertex.
    Flat(Rgb),
}

impl VertexColors {
    #[inline]
    pub fn at(&self, corner: Corner) -> Rgb {
        match self {
            VertexColors::Corners(c) => c[corner.index()],
            VertexColors::Flat(c) => *c,
        }
    }
}

/// Everything the tessellator needs for one face.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FaceColor {
    pub brightness: Brightness,
    pub vertices: VertexColors,
}

/// Turns tint, dye, face lighting and overrides into vertex colors.
pub struct ColorCompositor<'a, C: ?Sized> {
    colorizer: &'a C,
    settings: &'a LightingSettings,
}

impl<'a, C: BlockColorizer + ?Sized> ColorCompositor<'a, C> {
    pub fn new(colorizer: &'a C, settings: &'a LightingSettings) -> Self {
        Self {
            colorizer,
            settings,
        }
    }

    /// Block tint after the ground-cover rule.
    pub fn tint(&self, req: &ColorRequest) -> Rgb {
        if self.colorizer.is_ground_cover(req.block) && !req.keeps_ground_tint() {
            Rgb::WHITE
        } else {
            self.colorizer.block_tint(req.block, req.cell)
        }
    }

    pub fn composite(
        &self,
        req: &ColorRequest,
        lighting: &FaceLighting,
        overrides: &OverrideState,
    ) -> FaceColor {
        let lightness = overrides.lightness.unwrap_or_else(|| req.face.lightness());
        let brightness = overrides.brightness.unwrap_or(lighting.brightness);
        let tint = self.tint(req);

        if self.settings.raw_texture_override {
            return FaceColor {
                brightness,
                vertices: VertexColors::Corners([tint; 4]),
            };
        }

        let base = match overrides.color {
            Some(color) => color,
            None => {
                let dyed = tint * req.dye.unwrap_or(Rgb::WHITE);
                if self.settings.stereo { stereo_filter(dyed) } else { dyed }
            }
        };
        let shaded = base * lightness;
        let vertices = match lighting.corners {
            Some(corners) => VertexColors::Corners(corners.ao.map(|ao| shaded * ao)),
            None => VertexColors::Flat(shaded),
        };
        log::trace!(
            target: "color",
            "{:?} face {} lightness {} brightness {}",
            req.block,
            req.face.name(),
            lightness,
            brightness
        );
        FaceColor {
            brightness,
            vertices,
        }
    }
}
