use facelight_geom::Rgb;

/// Red/cyan anaglyph filter. Every output channel reads the unfiltered input.
#[inline]
pub fn stereo_filter(c: Rgb) -> Rgb {
    Rgb::new(
        (c.r * 30.0 + c.g * 59.0 + c.b * 11.0) / 100.0,
        (c.r * 30.0 + c.g * 70.0) / 100.0,
        (c.r * 30.0 + c.b * 70.0) / 100.0,
    )
}
