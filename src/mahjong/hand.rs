use serde::Serialize;

use super::Tile;
use crate::error::MahjongError;

pub const WINNING_HAND_SIZE: usize = 14;

/// Whether a 14-tile hand splits into one pair plus four triplets or runs.
///
/// Every pair candidate is tried; the remainder is split greedily from the
/// lowest tile, preferring a triplet over a run and never backtracking.
/// Special shapes such as seven pairs are not recognised.
pub fn can_win(hand: &[Tile]) -> bool {
    hand.len() == WINNING_HAND_SIZE && is_complete(hand)
}

/// [`can_win`] for a concealed hand of any `3n + 2` length, i.e. a hand
/// whose other sets have already been melded.
pub fn is_complete(tiles: &[Tile]) -> bool {
    if tiles.len() % 3 != 2 {
        return false;
    }
    let mut sorted = tiles.to_vec();
    sorted.sort();

    (0..sorted.len() - 1)
        .filter(|&i| sorted[i] == sorted[i + 1])
        .any(|i| {
            let mut rest = sorted.clone();
            rest.drain(i..i + 2);
            decomposes(&rest)
        })
}

/// Greedy split of a sorted slice into triplets and runs.
fn decomposes(tiles: &[Tile]) -> bool {
    let Some(&first) = tiles.first() else {
        return true;
    };
    if tiles.len() < 3 {
        return false;
    }
    if tiles[1] == first && tiles[2] == first {
        return decomposes(&tiles[3..]);
    }

    let mut rest = tiles[1..].to_vec();
    for step in 1..=2 {
        match rest.iter().position(|tile| tile.code() == first.code() + step) {
            Some(idx) => {
                rest.remove(idx);
            }
            None => return false,
        }
    }
    decomposes(&rest)
}

/// An exposed set claimed from another seat's discard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "tiles")]
pub enum Meld {
    Pong([Tile; 3]),
    Kong([Tile; 4]),
}

/// One seat's concealed tiles and exposed melds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    tiles: Vec<Tile>,
    melds: Vec<Meld>,
}

impl Hand {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_tiles(tiles: Vec<Tile>) -> Self {
        Self {
            tiles,
            melds: Vec::new(),
        }
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn melds(&self) -> &[Meld] {
        &self.melds
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn push(&mut self, tile: Tile) {
        self.tiles.push(tile);
    }

    /// Removes one copy of `tile`.
    pub fn remove(&mut self, tile: Tile) -> Result<(), MahjongError> {
        let idx = self
            .tiles
            .iter()
            .position(|&held| held == tile)
            .ok_or(MahjongError::TileNotInHand { tile: tile.code() })?;
        self.tiles.remove(idx);
        Ok(())
    }

    /// Removes the tile at `idx`, if any.
    pub fn take(&mut self, idx: usize) -> Option<Tile> {
        (idx < self.tiles.len()).then(|| self.tiles.remove(idx))
    }

    pub fn count(&self, tile: Tile) -> usize {
        self.tiles.iter().filter(|&&held| held == tile).count()
    }

    pub fn can_pong(&self, tile: Tile) -> bool {
        self.count(tile) >= 2
    }

    pub fn can_kong(&self, tile: Tile) -> bool {
        self.count(tile) >= 3
    }

    /// Melds a claimed `tile` with two copies from the hand.
    pub fn pong(&mut self, tile: Tile) -> Result<Meld, MahjongError> {
        self.claim(tile, 2)?;
        let meld = Meld::Pong([tile; 3]);
        self.melds.push(meld);
        Ok(meld)
    }

    /// Melds a claimed `tile` with three copies from the hand.
    pub fn kong(&mut self, tile: Tile) -> Result<Meld, MahjongError> {
        self.claim(tile, 3)?;
        let meld = Meld::Kong([tile; 4]);
        self.melds.push(meld);
        Ok(meld)
    }

    fn claim(&mut self, tile: Tile, needed: usize) -> Result<(), MahjongError> {
        let held = self.count(tile);
        if held < needed {
            return Err(MahjongError::CannotClaim {
                tile: tile.code(),
                held,
                needed,
            });
        }
        for _ in 0..needed {
            self.remove(tile)?;
        }
        Ok(())
    }

    /// Whether the concealed tiles complete the hand given the melds already
    /// exposed.
    pub fn is_complete(&self) -> bool {
        self.tiles.len() + 3 * self.melds.len() == WINNING_HAND_SIZE && is_complete(&self.tiles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mahjong::tiles_from_codes;

    fn tiles(codes: &[u8]) -> Vec<Tile> {
        tiles_from_codes(codes).unwrap()
    }

    #[test]
    fn pair_plus_four_runs_wins() {
        let hand = tiles(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 11, 12, 13, 19, 19]);

        assert!(can_win(&hand));
    }

    #[test]
    fn triplets_and_honours_win() {
        let hand = tiles(&[31, 31, 31, 41, 41, 41, 45, 45, 45, 5, 5, 5, 33, 33]);

        assert!(can_win(&hand));
    }

    #[test]
    fn hand_must_hold_exactly_fourteen_tiles() {
        let hand = tiles(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 19, 19]);

        assert!(!can_win(&hand));
        assert!(is_complete(&hand));
    }

    #[test]
    fn runs_do_not_cross_suits_or_honours() {
        assert!(!can_win(&tiles(&[8, 9, 11, 1, 2, 3, 4, 5, 6, 21, 22, 23, 7, 7])));
        assert!(!can_win(&tiles(&[31, 33, 35, 1, 2, 3, 4, 5, 6, 21, 22, 23, 7, 7])));
    }

    #[test]
    fn sample_hand_with_five_nines_is_rejected() {
        let hand = tiles(&[1, 1, 2, 3, 4, 5, 6, 7, 8, 9, 9, 9, 9, 9]);

        assert!(!can_win(&hand));
    }

    #[test]
    fn seven_pairs_is_not_a_winning_shape() {
        let hand = tiles(&[1, 1, 3, 3, 5, 5, 7, 7, 9, 9, 11, 11, 13, 13]);

        assert!(!can_win(&hand));
    }

    #[test]
    fn fourth_copy_of_a_triplet_tile_feeds_a_run() {
        let hand = tiles(&[1, 1, 1, 1, 2, 3, 5, 5, 5, 7, 8, 9, 9, 9]);

        assert!(can_win(&hand));
    }

    #[test]
    fn pong_and_kong_move_tiles_into_melds() {
        let five = Tile::new(5).unwrap();
        let mut hand = Hand::from_tiles(tiles(&[5, 5, 5, 6, 7]));

        assert!(hand.can_kong(five));
        assert_eq!(hand.kong(five), Ok(Meld::Kong([five; 4])));
        assert_eq!(hand.tiles(), tiles(&[6, 7]).as_slice());
        assert_eq!(
            hand.pong(five),
            Err(MahjongError::CannotClaim { tile: 5, held: 0, needed: 2 })
        );
        assert_eq!(hand.melds().len(), 1);
    }

    #[test]
    fn melded_hand_completes_with_fewer_concealed_tiles() {
        let dragon = Tile::new(41).unwrap();
        let mut hand = Hand::from_tiles(tiles(&[9, 9, 1, 2, 3, 4, 5, 6, 21, 22, 23, 41, 41]));
        assert!(!hand.is_complete());

        hand.pong(dragon).unwrap();
        assert_eq!(hand.len(), 11);
        assert!(hand.is_complete());

        hand.push(Tile::new(9).unwrap());
        assert!(!hand.is_complete());
    }
}
