use facelight_geom::{CellPos, Face, FractionalBounds};

use crate::brightness::Brightness;
use crate::mix;
use crate::sampler::NeighborSampler;

/// Cell whose light a face sees.
///
/// A face flush with the cell wall looks into the adjacent cell. A face inset
/// from the wall (the shape stops short of it) still lies inside the voxel's
/// own cell.
#[inline]
pub fn outer_cell(face: Face, cell: CellPos, bounds: FractionalBounds) -> CellPos {
    let axis = face.axis();
    let inset = if face.is_positive() {
        bounds.max(axis) < 1.0
    } else {
        bounds.min(axis) > 0.0
    };
    if inset { cell } else { cell.step(face) }
}

/// How far the face plane reaches toward the adjacent layer, `1.0` at the wall.
#[inline]
pub fn wall_ratio(face: Face, bounds: FractionalBounds) -> f32 {
    let axis = face.axis();
    if face.is_positive() {
        bounds.max(axis)
    } else {
        1.0 - bounds.min(axis)
    }
}

/// Light and brightness of the 3x3 patch centered on the outer cell, in the
/// plane of the face.
///
/// Off-center light values are blended between the adjacent layer and the
/// voxel's own layer by [`wall_ratio`]; the center holds the outer cell's own
/// unblended light.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NeighborRing {
    light: [f32; 9],
    brightness: [Brightness; 9],
}

#[inline]
fn ring_index(sb: i32, sc: i32) -> usize {
    debug_assert!((-1..=1).contains(&sb) && (-1..=1).contains(&sc));
    ((sb + 1) * 3 + (sc + 1)) as usize
}

impl NeighborRing {
    /// Light at offset `(sb, sc)` along the face's minor axes.
    #[inline]
    pub fn light(&self, sb: i32, sc: i32) -> f32 {
        self.light[ring_index(sb, sc)]
    }

    #[inline]
    pub fn brightness(&self, sb: i32, sc: i32) -> Brightness {
        self.brightness[ring_index(sb, sc)]
    }
}

/// Everything one face needs from the world.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FaceSamples {
    pub outer: CellPos,
    /// Mixed brightness of the outer cell, the face's flat brightness.
    pub brightness: Brightness,
    /// Own light of the outer cell.
    pub light: f32,
    /// Present only when gathered for ambient occlusion.
    pub ring: Option<NeighborRing>,
}

/// Samples the outer cell and, when `with_ring` is set, its eight in-plane neighbors.
pub fn gather<S: NeighborSampler + ?Sized>(
    sampler: &S,
    face: Face,
    cell: CellPos,
    bounds: FractionalBounds,
    with_ring: bool,
) -> FaceSamples {
    let outer = outer_cell(face, cell, bounds);
    let brightness = sampler.sample_mixed_brightness(outer);
    let light = sampler.sample_light(outer);
    let ring = with_ring.then(|| {
        let (axis_b, axis_c) = face.minor_axes();
        let ratio = wall_ratio(face, bounds);
        let mut ring = NeighborRing {
            light: [light; 9],
            brightness: [brightness; 9],
        };
        for sb in -1..=1 {
            for sc in -1..=1 {
                if sb == 0 && sc == 0 {
                    continue;
                }
                let own_layer = cell.offset(axis_b, sb).offset(axis_c, sc);
                let next_layer = own_layer.step(face);
                let i = ring_index(sb, sc);
                ring.light[i] = mix(
                    sampler.sample_light(next_layer),
                    sampler.sample_light(own_layer),
                    ratio,
                );
                ring.brightness[i] = sampler
                    .sample_mixed_brightness(outer.offset(axis_b, sb).offset(axis_c, sc));
            }
        }
        ring
    });
    FaceSamples {
        outer,
        brightness,
        light,
        ring,
    }
}
