/// Packed light-map coordinate: sky field in bits 16..24, block field in bits 0..8.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Brightness(pub u32);

impl Brightness {
    pub const ZERO: Brightness = Brightness(0);
    /// Both fields saturated.
    pub const NORMAL: Brightness = Brightness(0xff00ff);
    /// Level 15 sky and block light, the brightest value a light level can encode.
    pub const MAX: Brightness = Brightness(0xf000f0);

    #[inline]
    pub const fn from_parts(sky: u8, block: u8) -> Self {
        Brightness(((sky as u32) << 16) | block as u32)
    }

    /// Encodes 4-bit light levels (0..=15) the way light maps expect them.
    #[inline]
    pub const fn from_levels(sky: u8, block: u8) -> Self {
        Self::from_parts((sky & 0x0F) << 4, (block & 0x0F) << 4)
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn sky(self) -> u8 {
        ((self.0 >> 16) & 0xFF) as u8
    }

    #[inline]
    pub const fn block(self) -> u8 {
        (self.0 & 0xFF) as u8
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Halves each field of the sum independently.
    pub fn average(a: Brightness, b: Brightness) -> Brightness {
        let sky = (a.sky() as u16 + b.sky() as u16) / 2;
        let block = (a.block() as u16 + b.block() as u16) / 2;
        Brightness::from_parts(sky as u8, block as u8)
    }
}

impl std::fmt::Display for Brightness {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:#08x}", self.0)
    }
}
