use facelight_geom::CellPos;

use crate::brightness::Brightness;

/// Per-cell light queries against whatever stores the world.
///
/// Cells the store does not know about must still answer deterministically;
/// the lighting math treats every returned sample as ordinary data.
pub trait NeighborSampler {
    /// Ambient-occlusion light value of the cell, in `[0,1]`.
    fn sample_light(&self, cell: CellPos) -> f32;
    /// Packed brightness the cell contributes to faces looking into it.
    fn sample_mixed_brightness(&self, cell: CellPos) -> Brightness;
}

impl<T: NeighborSampler + ?Sized> NeighborSampler for &T {
    #[inline]
    fn sample_light(&self, cell: CellPos) -> f32 {
        (**self).sample_light(cell)
    }

    #[inline]
    fn sample_mixed_brightness(&self, cell: CellPos) -> Brightness {
        (**self).sample_mixed_brightness(cell)
    }
}

/// Packed-brightness combination functions supplied by the host renderer.
pub trait BrightnessMixer {
    /// Combines two edge neighbors, the diagonal and the face's own brightness
    /// into a corner brightness.
    fn combine(&self, adj_b: Brightness, adj_c: Brightness, diag: Brightness, own: Brightness)
    -> Brightness;

    /// Weighted blend of four corner brightnesses. Weights sum to one.
    fn mix(&self, values: [Brightness; 4], weights: [f32; 4]) -> Brightness;
}

impl<T: BrightnessMixer + ?Sized> BrightnessMixer for &T {
    #[inline]
    fn combine(&self, adj_b: Brightness, adj_c: Brightness, diag: Brightness, own: Brightness)
    -> Brightness {
        (**self).combine(adj_b, adj_c, diag, own)
    }

    #[inline]
    fn mix(&self, values: [Brightness; 4], weights: [f32; 4]) -> Brightness {
        (**self).mix(values, weights)
    }
}

/// The classic smooth-lighting combination.
///
/// `combine` replaces unlit (zero) neighbors with the face's own brightness
/// and averages all four; `mix` weights the sky and block fields separately and
/// truncates each back to eight bits.
#[derive(Clone, Copy, Debug, Default)]
pub struct ClassicMixer;

impl BrightnessMixer for ClassicMixer {
    fn combine(&self, adj_b: Brightness, adj_c: Brightness, diag: Brightness, own: Brightness)
    -> Brightness {
        let pick = |b: Brightness| if b.is_zero() { own.raw() } else { b.raw() };
        let sum = pick(adj_b)
            .wrapping_add(pick(adj_c))
            .wrapping_add(pick(diag))
            .wrapping_add(own.raw());
        Brightness((sum >> 2) & 0xff00ff)
    }

    fn mix(&self, values: [Brightness; 4], weights: [f32; 4]) -> Brightness {
        let mut sky = 0.0f64;
        let mut block = 0.0f64;
        for (v, w) in values.iter().zip(weights) {
            sky += v.sky() as f64 * w as f64;
            block += v.block() as f64 * w as f64;
        }
        let sky = (sky as i64 & 0xFF) as u8;
        let block = (block as i64 & 0xFF) as u8;
        Brightness::from_parts(sky, block)
    }
}
