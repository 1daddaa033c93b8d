use facelight_geom::{CellPos, Face, FractionalBounds};
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuildError, ThreadPoolBuilder};

use crate::config::LightingSettings;
use crate::sampler::{BrightnessMixer, NeighborSampler};
use crate::{FaceLighting, compute_face_lighting};

/// All six faces of one cell, indexed by [`Face::index`].
#[derive(Clone, Debug, PartialEq)]
pub struct CellLighting {
    pub cell: CellPos,
    pub faces: [FaceLighting; 6],
}

impl CellLighting {
    #[inline]
    pub fn face(&self, face: Face) -> &FaceLighting {
        &self.faces[face.index()]
    }
}

fn light_cell<S, M>(
    sampler: &S,
    mixer: &M,
    settings: &LightingSettings,
    cell: CellPos,
    bounds: FractionalBounds,
) -> CellLighting
where
    S: NeighborSampler + ?Sized,
    M: BrightnessMixer + ?Sized,
{
    let faces = Face::ALL.map(|f| compute_face_lighting(sampler, mixer, settings, f, cell, bounds));
    CellLighting { cell, faces }
}

/// Lights every `(cell, bounds)` pair on the global rayon pool.
///
/// Results come back in input order.
pub fn light_cells_par<S, M>(
    sampler: &S,
    mixer: &M,
    settings: &LightingSettings,
    cells: &[(CellPos, FractionalBounds)],
) -> Vec<CellLighting>
where
    S: NeighborSampler + Sync + ?Sized,
    M: BrightnessMixer + Sync + ?Sized,
{
    log::debug!(target: "lighting", "lighting {} cells in parallel", cells.len());
    cells
        .par_iter()
        .map(|&(cell, bounds)| light_cell(sampler, mixer, settings, cell, bounds))
        .collect()
}

/// Same as [`light_cells_par`] but runs inside a caller-owned pool.
pub fn light_cells_in<S, M>(
    pool: &ThreadPool,
    sampler: &S,
    mixer: &M,
    settings: &LightingSettings,
    cells: &[(CellPos, FractionalBounds)],
) -> Vec<CellLighting>
where
    S: NeighborSampler + Sync + ?Sized,
    M: BrightnessMixer + Sync + ?Sized,
{
    pool.install(|| light_cells_par(sampler, mixer, settings, cells))
}

/// Dedicated pool with named worker threads.
pub fn build_pool(threads: usize) -> Result<ThreadPool, ThreadPoolBuildError> {
    ThreadPoolBuilder::new()
        .num_threads(threads)
        .thread_name(|i| format!("facelight-light-{i}"))
        .build()
}
