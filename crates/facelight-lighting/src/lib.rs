//! Per-face vertex lighting and ambient occlusion for partial-bounds voxels.
//!
//! A face first picks the cell it looks into (the adjacent cell, or the
//! voxel's own cell when the shape is inset from the wall), samples that cell
//! and its eight in-plane neighbors, box-filters them into four quadrant
//! corners and, for shapes narrower than the cell, bilinearly re-derives the
//! corners at the shape's real edges.
#![forbid(unsafe_code)]

use facelight_geom::{CellPos, Face, FractionalBounds};

pub mod batch;
pub mod blend;
mod brightness;
mod config;
pub mod gather;
mod grid;
mod sampler;

pub use blend::CornerLighting;
pub use brightness::Brightness;
pub use config::LightingSettings;
pub use grid::{GridSizeError, LightGrid};
pub use sampler::{BrightnessMixer, ClassicMixer, NeighborSampler};

/// Linear blend: `a` at `ratio == 1`, `b` at `ratio == 0`.
#[inline]
pub fn mix(a: f32, b: f32, ratio: f32) -> f32 {
    a * ratio + b * (1.0 - ratio)
}

/// Lighting of one face of one voxel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FaceLighting {
    pub face: Face,
    /// Flat brightness of the face, taken from the cell it looks into.
    pub brightness: Brightness,
    /// Smooth per-corner values; `None` when ambient occlusion is off.
    pub corners: Option<CornerLighting>,
}

impl FaceLighting {
    /// Per-corner AO, or all ones when lit flat.
    #[inline]
    pub fn ao(&self) -> [f32; 4] {
        self.corners.map(|c| c.ao).unwrap_or([1.0; 4])
    }
}

/// Computes the brightness and corner lighting of `face` for a voxel at `cell`
/// whose visible shape occupies `bounds`.
pub fn compute_face_lighting<S, M>(
    sampler: &S,
    mixer: &M,
    settings: &LightingSettings,
    face: Face,
    cell: CellPos,
    bounds: FractionalBounds,
) -> FaceLighting
where
    S: NeighborSampler + ?Sized,
    M: BrightnessMixer + ?Sized,
{
    let samples = gather::gather(sampler, face, cell, bounds, settings.ambient_occlusion);
    let corners = samples
        .ring
        .as_ref()
        .map(|ring| blend::blend_corners(face, bounds, ring, mixer));
    log::trace!(
        target: "lighting",
        "face {} of {:?}: outer {:?} brightness {} corners {:?}",
        face.name(),
        cell,
        samples.outer,
        samples.brightness,
        corners.map(|c| c.ao)
    );
    FaceLighting {
        face,
        brightness: samples.brightness,
        corners,
    }
}

#[cfg(test)]
mod tests;
