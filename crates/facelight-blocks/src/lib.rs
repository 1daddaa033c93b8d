//! Data-driven block coloring: tints, ground cover, overlay icons, dyes and slopes.
#![forbid(unsafe_code)]

pub mod config;
pub mod dye;
pub mod hex;
pub mod palette;
pub mod slope;

pub use dye::DyeCatalog;
pub use hex::ColorParseError;
pub use palette::{BlockTint, TintPalette};
pub use slope::SlopeTable;
