use serde::Deserialize;
use std::error::Error;
use std::fs;
use std::path::Path;

/// Renderer switches that change how faces are lit and colored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LightingSettings {
    /// Smooth per-corner lighting. When off, faces are lit flat.
    pub ambient_occlusion: bool,
    /// Red/cyan anaglyph color filter.
    pub stereo: bool,
    /// Texture rendered with its raw tint, ignoring lightness and AO.
    pub raw_texture_override: bool,
}

impl Default for LightingSettings {
    fn default() -> Self {
        Self {
            ambient_occlusion: true,
            stereo: false,
            raw_texture_override: false,
        }
    }
}

impl LightingSettings {
    pub fn from_toml_str(toml_str: &str) -> Result<Self, Box<dyn Error>> {
        Ok(toml::from_str(toml_str)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, Box<dyn Error>> {
        let s = fs::read_to_string(path)?;
        Self::from_toml_str(&s)
    }
}
