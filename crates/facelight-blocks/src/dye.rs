use std::collections::HashMap;

use facelight_geom::Rgb;

/// The sixteen standard dyes, in metadata order.
pub const STANDARD_DYES: [(&str, u32); 16] = [
    ("black", 0x1E1B1B),
    ("red", 0xB3312C),
    ("green", 0x3B511A),
    ("brown", 0x51301A),
    ("blue", 0x253192),
    ("purple", 0x7B2FBE),
    ("cyan", 0x287697),
    ("light_gray", 0xABABAB),
    ("gray", 0x434343),
    ("pink", 0xD88198),
    ("lime", 0x41CD34),
    ("yellow", 0xDECF2A),
    ("light_blue", 0x6689D3),
    ("magenta", 0xC354CD),
    ("orange", 0xEB8844),
    ("white", 0xF0F0F0),
];

/// Named dye colors.
#[derive(Clone, Debug)]
pub struct DyeCatalog {
    by_name: HashMap<String, u32>,
}

impl DyeCatalog {
    pub fn empty() -> Self {
        Self {
            by_name: HashMap::new(),
        }
    }

    pub fn standard() -> Self {
        let mut c = Self::empty();
        for (name, color) in STANDARD_DYES {
            c.insert(name, color);
        }
        c
    }

    /// Adds or replaces a dye; returns the color it replaced.
    pub fn insert(&mut self, name: &str, packed: u32) -> Option<u32> {
        self.by_name.insert(name.to_string(), packed & 0xFF_FFFF)
    }

    pub fn packed(&self, name: &str) -> Option<u32> {
        self.by_name.get(name).copied()
    }

    pub fn get(&self, name: &str) -> Option<Rgb> {
        self.packed(name).map(Rgb::from_packed)
    }

    /// Standard dye by metadata index.
    pub fn by_index(index: usize) -> Option<Rgb> {
        STANDARD_DYES.get(index).map(|&(_, c)| Rgb::from_packed(c))
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

impl Default for DyeCatalog {
    fn default() -> Self {
        Self::standard()
    }
}
