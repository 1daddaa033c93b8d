use facelight_geom::Rgb;
use facelight_lighting::Brightness;

/// Caller-imposed replacements for the computed lightness, brightness and color.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct OverrideState {
    pub lightness: Option<f32>,
    pub brightness: Option<Brightness>,
    pub color: Option<Rgb>,
}

impl OverrideState {
    pub const NONE: OverrideState = OverrideState {
        lightness: None,
        brightness: None,
        color: None,
    };

    pub fn lightness(mut self, v: f32) -> Self {
        self.lightness = Some(v);
        self
    }

    pub fn brightness(mut self, v: Brightness) -> Self {
        self.brightness = Some(v);
        self
    }

    pub fn color(mut self, v: Rgb) -> Self {
        self.color = Some(v);
        self
    }

    /// Fills each unset channel from `outer`.
    #[inline]
    pub fn or(self, outer: OverrideState) -> Self {
        OverrideState {
            lightness: self.lightness.or(outer.lightness),
            brightness: self.brightness.or(outer.brightness),
            color: self.color.or(outer.color),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lightness.is_none() && self.brightness.is_none() && self.color.is_none()
    }
}
