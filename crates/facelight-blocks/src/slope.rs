use std::collections::HashSet;

/// Which slope shapes tilt their sloped side upward.
///
/// A ground-cover block keeps its tint on the sloped side of a positive slope.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SlopeTable {
    positive: HashSet<u16>,
}

impl SlopeTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_positive(ids: impl IntoIterator<Item = u16>) -> Self {
        Self {
            positive: ids.into_iter().collect(),
        }
    }

    #[inline]
    pub fn is_positive(&self, slope_id: u16) -> bool {
        self.positive.contains(&slope_id)
    }

    pub fn len(&self) -> usize {
        self.positive.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positive.is_empty()
    }
}
