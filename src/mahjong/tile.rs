use std::fmt;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Tile code.
///
/// Characters 1–9, dots 11–19, bamboo 21–29, winds 31/33/35/37 and dragons
/// 41/43/45. Codes of different suits (and every honour) are at least two
/// apart, so a numeric run can never cross a suit boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tile(u8);

pub const COPIES_PER_KIND: usize = 4;

const HONOURS: [u8; 7] = [31, 33, 35, 37, 41, 43, 45];

static KINDS: Lazy<Vec<Tile>> = Lazy::new(|| {
    [0u8, 10, 20]
        .into_iter()
        .flat_map(|base| (1..=9).map(move |rank| Tile(base + rank)))
        .chain(HONOURS.into_iter().map(Tile))
        .collect()
});

static FULL_SET: Lazy<Vec<Tile>> = Lazy::new(|| {
    KINDS
        .iter()
        .flat_map(|&tile| std::iter::repeat_n(tile, COPIES_PER_KIND))
        .collect()
});

impl Tile {
    /// Returns `None` for codes that name no tile.
    pub fn new(code: u8) -> Option<Self> {
        let valid = matches!(code, 1..=9 | 11..=19 | 21..=29) || HONOURS.contains(&code);
        valid.then_some(Self(code))
    }

    pub fn code(self) -> u8 {
        self.0
    }

    pub fn glyph(self) -> char {
        const CHARACTERS: [char; 9] = ['🀇', '🀈', '🀉', '🀊', '🀋', '🀌', '🀍', '🀎', '🀏'];
        const DOTS: [char; 9] = ['🀙', '🀚', '🀛', '🀜', '🀝', '🀞', '🀟', '🀠', '🀡'];
        const BAMBOO: [char; 9] = ['🀐', '🀑', '🀒', '🀓', '🀔', '🀕', '🀖', '🀗', '🀘'];
        match self.0 {
            code @ 1..=9 => CHARACTERS[code as usize - 1],
            code @ 11..=19 => DOTS[code as usize - 11],
            code @ 21..=29 => BAMBOO[code as usize - 21],
            31 => '🀀',
            33 => '🀁',
            35 => '🀂',
            37 => '🀃',
            41 => '🀄',
            43 => '🀅',
            45 => '🀆',
            _ => '?',
        }
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/// The 34 distinct tiles.
pub fn kinds() -> &'static [Tile] {
    &KINDS
}

/// All 136 tiles, unshuffled.
pub fn full_set() -> Vec<Tile> {
    FULL_SET.clone()
}

/// Parses a list of raw codes, rejecting any unknown code.
pub fn tiles_from_codes(codes: &[u8]) -> Option<Vec<Tile>> {
    codes.iter().map(|&code| Tile::new(code)).collect()
}
