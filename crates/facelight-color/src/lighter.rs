use std::ops::{Deref, DerefMut};

use facelight_geom::{CellPos, Face, FractionalBounds};
use facelight_lighting::{
    Brightness, BrightnessMixer, FaceLighting, LightingSettings, NeighborSampler,
    compute_face_lighting,
};

use crate::colorizer::{BlockColorizer, ColorRequest};
use crate::compositor::{ColorCompositor, FaceColor};
use crate::overrides::OverrideState;

/// Lighting state for one voxel's render pass.
///
/// Light a face with [`light_face`](Self::light_face), then color it with
/// [`color_face`](Self::color_face). Create one per worker; nothing here is shared.
pub struct VoxelLighter<'a, S: ?Sized, M: ?Sized, C: ?Sized> {
    sampler: &'a S,
    mixer: &'a M,
    colorizer: &'a C,
    settings: &'a LightingSettings,
    brightness: [Brightness; 6],
    last: Option<FaceLighting>,
    overrides: OverrideState,
}

impl<'a, S, M, C> VoxelLighter<'a, S, M, C>
where
    S: NeighborSampler + ?Sized,
    M: BrightnessMixer + ?Sized,
    C: BlockColorizer + ?Sized,
{
    pub fn new(
        sampler: &'a S,
        mixer: &'a M,
        colorizer: &'a C,
        settings: &'a LightingSettings,
    ) -> Self {
        Self {
            sampler,
            mixer,
            colorizer,
            settings,
            brightness: [Brightness::ZERO; 6],
            last: None,
            overrides: OverrideState::NONE,
        }
    }

    /// Lights `face`, recording its brightness slot and corner buffer.
    pub fn light_face(
        &mut self,
        face: Face,
        cell: CellPos,
        bounds: FractionalBounds,
    ) -> FaceLighting {
        let lit = compute_face_lighting(
            self.sampler,
            self.mixer,
            self.settings,
            face,
            cell,
            bounds,
        );
        self.brightness[face.index()] = lit.brightness;
        self.last = Some(lit);
        lit
    }

    /// Colors the face described by `req` using the lighting recorded for it.
    ///
    /// A face that was not the most recently lit one is colored flat with its
    /// recorded brightness slot.
    pub fn color_face(&self, req: &ColorRequest) -> FaceColor {
        let lighting = match self.last {
            Some(lit) if lit.face == req.face => lit,
            _ => {
                log::debug!(
                    target: "color",
                    "face {} colored without fresh lighting; using flat slot",
                    req.face.name()
                );
                FaceLighting {
                    face: req.face,
                    brightness: self.brightness[req.face.index()],
                    corners: None,
                }
            }
        };
        ColorCompositor::new(self.colorizer, self.settings).composite(
            req,
            &lighting,
            &self.overrides,
        )
    }

    /// Brightness recorded for `face` during this pass.
    #[inline]
    pub fn face_brightness(&self, face: Face) -> Brightness {
        self.brightness[face.index()]
    }

    /// Corner AO of the most recently lit face; ones if lit flat or not lit yet.
    #[inline]
    pub fn ao(&self) -> [f32; 4] {
        self.last.map(|l| l.ao()).unwrap_or([1.0; 4])
    }

    #[inline]
    pub fn last_lighting(&self) -> Option<&FaceLighting> {
        self.last.as_ref()
    }

    #[inline]
    pub fn overrides(&self) -> &OverrideState {
        &self.overrides
    }

    /// Installs `state` until the returned guard drops, then restores the previous overrides.
    ///
    /// Channels left unset in `state` keep whatever the enclosing scope set.
    pub fn scoped_overrides(&mut self, state: OverrideState) -> OverrideScope<'_, 'a, S, M, C> {
        let previous = self.overrides;
        self.overrides = state.or(previous);
        OverrideScope {
            lighter: self,
            previous,
        }
    }

    /// Runs `f` with `state` installed.
    pub fn with_overrides<R>(
        &mut self,
        state: OverrideState,
        f: impl FnOnce(&mut Self) -> R,
    ) -> R {
        let mut scope = self.scoped_overrides(state);
        f(&mut *scope)
    }

    /// Starts a new voxel: clears the brightness slots and the corner buffer.
    pub fn reset(&mut self) {
        self.brightness = [Brightness::ZERO; 6];
        self.last = None;
    }
}

/// Restores the lighter's previous overrides when dropped.
pub struct OverrideScope<'l, 'a, S: ?Sized, M: ?Sized, C: ?Sized> {
    lighter: &'l mut VoxelLighter<'a, S, M, C>,
    previous: OverrideState,
}

impl<'l, 'a, S: ?Sized, M: ?Sized, C: ?Sized> Deref for OverrideScope<'l, 'a, S, M, C> {
    type Target = VoxelLighter<'a, S, M, C>;

    fn deref(&self) -> &Self::Target {
        self.lighter
    }
}

impl<'l, 'a, S: ?Sized, M: ?Sized, C: ?Sized> DerefMut for OverrideScope<'l, 'a, S, M, C> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.lighter
    }
}

impl<'l, 'a, S: ?Sized, M: ?Sized, C: ?Sized> Drop for OverrideScope<'l, 'a, S, M, C> {
    fn drop(&mut self) {
        self.lighter.overrides = self.previous;
    }
}
