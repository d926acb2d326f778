//! Colour palettes for particles

use folio_math::Rgba;
use rand::Rng;

/// A fixed set of colours a particle picks from at creation
#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    colors: Vec<Rgba>,
}

impl Default for Palette {
    fn default() -> Self {
        Self::constellation()
    }
}

impl Palette {
    /// Hex codes of the default palette: blue, violet, pink, emerald, amber
    pub const CONSTELLATION_HEX: [&'static str; 5] =
        ["#3b82f6", "#8b5cf6", "#ec4899", "#10b981", "#f59e0b"];

    /// The default palette
    pub fn constellation() -> Self {
        Self {
            colors: Self::CONSTELLATION_HEX
                .iter()
                .filter_map(|hex| Rgba::from_hex(hex))
                .collect(),
        }
    }

    /// Build a palette from hex strings
    ///
    /// Returns None if the list is empty or any entry fails to parse.
    pub fn from_hex_list<S: AsRef<str>>(hex: &[S]) -> Option<Self> {
        let colors = hex
            .iter()
            .map(|h| Rgba::from_hex(h.as_ref()))
            .collect::<Option<Vec<_>>>()?;
        if colors.is_empty() {
            return None;
        }
        Some(Self { colors })
    }

    /// All colours in the palette
    pub fn colors(&self) -> &[Rgba] {
        &self.colors
    }

    /// Pick a colour uniformly at random
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> Rgba {
        self.colors[rng.random_range(0..self.colors.len())]
    }

    /// Whether the palette contains this colour
    pub fn contains(&self, color: &Rgba) -> bool {
        self.colors.contains(color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_constellation_has_five_colors() {
        let palette = Palette::constellation();
        assert_eq!(palette.colors().len(), 5);
        assert_eq!(palette.colors()[0], Rgba::from_rgb8(0x3b, 0x82, 0xf6));
    }

    #[test]
    fn test_from_hex_list() {
        let palette = Palette::from_hex_list(&["#ffffff", "#000000"]).unwrap();
        assert_eq!(palette.colors().len(), 2);
    }

    #[test]
    fn test_from_hex_list_rejects_bad_entries() {
        assert!(Palette::from_hex_list(&["#ffffff", "nope"]).is_none());
        assert!(Palette::from_hex_list::<&str>(&[]).is_none());
    }

    #[test]
    fn test_pick_stays_in_palette() {
        let palette = Palette::constellation();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let color = palette.pick(&mut rng);
            assert!(palette.contains(&color));
        }
    }
}
