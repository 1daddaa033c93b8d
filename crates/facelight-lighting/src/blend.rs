use facelight_geom::{Corner, Face, FractionalBounds};

use crate::brightness::Brightness;
use crate::gather::NeighborRing;
use crate::sampler::BrightnessMixer;

/// Quadrants of the face plane as `(sign along B, sign along C)`.
pub const QUADRANTS: [(i32, i32); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

#[inline]
fn quadrant_index(sb: i32, sc: i32) -> usize {
    (((sb > 0) as usize) << 1) | (sc > 0) as usize
}

/// Final per-corner values of one face, in [`Corner`] order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CornerLighting {
    pub ao: [f32; 4],
    pub brightness: [Brightness; 4],
}

impl CornerLighting {
    #[inline]
    pub fn ao_at(&self, corner: Corner) -> f32 {
        self.ao[corner.index()]
    }

    #[inline]
    pub fn brightness_at(&self, corner: Corner) -> Brightness {
        self.brightness[corner.index()]
    }
}

/// Box-filtered AO and brightness of the four quadrant corners, indexed like [`QUADRANTS`].
pub fn raw_quadrants<M: BrightnessMixer + ?Sized>(
    ring: &NeighborRing,
    mixer: &M,
) -> ([f32; 4], [Brightness; 4]) {
    let mut ao = [0.0; 4];
    let mut brightness = [Brightness::ZERO; 4];
    for (q, &(sb, sc)) in QUADRANTS.iter().enumerate() {
        ao[q] = (ring.light(0, 0) + ring.light(sb, 0) + ring.light(0, sc) + ring.light(sb, sc))
            / 4.0;
        brightness[q] = mixer.combine(
            ring.brightness(sb, 0),
            ring.brightness(0, sc),
            ring.brightness(sb, sc),
            ring.brightness(0, 0),
        );
    }
    (ao, brightness)
}

/// Bilinear weights of the four quadrants for a point at `(u, v)` on the face.
#[inline]
pub fn quadrant_weights(u: f32, v: f32) -> [f32; 4] {
    let mut w = [0.0; 4];
    for (q, &(qb, qc)) in QUADRANTS.iter().enumerate() {
        let wb = if qb > 0 { u } else { 1.0 - u };
        let wc = if qc > 0 { v } else { 1.0 - v };
        w[q] = wb * wc;
    }
    w
}

/// Where `corner` actually sits on the face for the given shape bounds.
#[inline]
pub fn corner_position(face: Face, corner: Corner, bounds: FractionalBounds) -> (f32, f32) {
    let (axis_b, axis_c) = face.minor_axes();
    let (sb, sc) = face.corner_quadrant(corner);
    let u = if sb > 0 { bounds.max(axis_b) } else { bounds.min(axis_b) };
    let v = if sc > 0 { bounds.max(axis_c) } else { bounds.min(axis_c) };
    (u, v)
}

/// Resolves the four screen corners of `face`.
///
/// With full bounds along both minor axes each corner takes its quadrant value
/// directly. Otherwise the corner is moved to the shape's edge and its value is
/// interpolated across all four quadrants.
pub fn blend_corners<M: BrightnessMixer + ?Sized>(
    face: Face,
    bounds: FractionalBounds,
    ring: &NeighborRing,
    mixer: &M,
) -> CornerLighting {
    let (raw_ao, raw_brightness) = raw_quadrants(ring, mixer);
    let (axis_b, axis_c) = face.minor_axes();
    let partial = !(bounds.spans_full(axis_b) && bounds.spans_full(axis_c));

    let mut out = CornerLighting {
        ao: [0.0; 4],
        brightness: [Brightness::ZERO; 4],
    };
    for corner in Corner::ALL {
        let c = corner.index();
        if !partial {
            let (sb, sc) = face.corner_quadrant(corner);
            let q = quadrant_index(sb, sc);
            out.ao[c] = raw_ao[q];
            out.brightness[c] = raw_brightness[q];
            continue;
        }
        let (u, v) = corner_position(face, corner, bounds);
        let w = quadrant_weights(u, v);
        out.ao[c] = raw_ao.iter().zip(w).map(|(a, w)| a * w).sum();
        out.brightness[c] = mixer.mix(raw_brightness, w);
    }
    out
}
