//! Per-vertex face colors: block tint, dye, directional lightness, ambient
//! occlusion and scoped caller overrides.
#![forbid(unsafe_code)]

mod colorizer;
mod compositor;
mod lighter;
mod overrides;
mod stereo;

pub use colorizer::{BlockColorizer, BlockId, ColorRequest};
pub use compositor::{ColorCompositor, FaceColor, VertexColors};
pub use lighter::{OverrideScope, VoxelLighter};
pub use overrides::OverrideState;
pub use stereo::stereo_filter;
