//! Gallery tiling for detail pages.

/// Tile shape in the three-column bento gallery.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BentoTile {
    /// Two columns, two rows.
    Large,
    Small,
    /// Two columns, one row.
    Wide,
    /// One column, two rows.
    Tall,
}

const PATTERN: [BentoTile; 5] = [
    BentoTile::Large,
    BentoTile::Small,
    BentoTile::Small,
    BentoTile::Wide,
    BentoTile::Tall,
];

/// Tile for the gallery image at `index`; the pattern repeats every five.
pub fn bento_tile(index: usize) -> BentoTile {
    PATTERN[index % PATTERN.len()]
}

/// Overlay label for a gallery tile ("Asset 01", "Case 03").
pub fn tile_label(prefix: &str, index: usize) -> String {
    format!("{} {:02}", prefix, index + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_cycles() {
        let tiles: Vec<BentoTile> = (0..7).map(bento_tile).collect();
        assert_eq!(
            tiles,
            [
                BentoTile::Large,
                BentoTile::Small,
                BentoTile::Small,
                BentoTile::Wide,
                BentoTile::Tall,
                BentoTile::Large,
                BentoTile::Small,
            ]
        );
    }

    #[test]
    fn test_tile_label() {
        assert_eq!(tile_label("Asset", 0), "Asset 01");
        assert_eq!(tile_label("Case", 11), "Case 12");
    }
}
