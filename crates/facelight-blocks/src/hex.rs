use facelight_geom::Rgb;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColorParseError {
    pub input: String,
}

impl std::fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid color '{}': expected #rrggbb", self.input)
    }
}

impl std::error::Error for ColorParseError {}

/// Parses `#rrggbb` (the leading `#` is optional) into a packed `0xRRGGBB`.
pub fn parse_packed(s: &str) -> Result<u32, ColorParseError> {
    let err = || ColorParseError {
        input: s.to_string(),
    };
    let digits = s.trim().strip_prefix('#').unwrap_or(s.trim());
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(err());
    }
    u32::from_str_radix(digits, 16).map_err(|_| err())
}

/// Parses `#rrggbb` into a color multiplier.
pub fn parse_rgb(s: &str) -> Result<Rgb, ColorParseError> {
    parse_packed(s).map(Rgb::from_packed)
}
