//! Turn scheduler for a four-seat table.
//!
//! The table is a state machine driven by explicit calls: [`Table::advance`]
//! performs the next automatic step (any draw, a computer seat's discard),
//! while the human seat acts through [`Table::discard`] and the claim
//! methods. Nothing here knows about wall-clock time; see
//! [`PacedTable`](super::PacedTable) for that.

use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use serde::Serialize;

use super::hand::{Hand, Meld};
use super::tile::{Tile, full_set};
use crate::config::TableConfig;
use crate::error::MahjongError;
use crate::types::TableState;
use crate::{console_debug, console_log};

pub const SEATS: usize = 4;
pub const DEAL_SIZE: usize = 13;
const DEALER: usize = 0;

/// Picks the tile a computer seat throws away.
pub trait DiscardSelector: Send + Sync {
    /// Index into `hand.tiles()`.
    fn select_discard(&self, hand: &Hand) -> Option<usize>;
}

/// Always throws the first tile in hand.
#[derive(Debug, Default, Clone, Copy)]
pub struct FirstTileDiscard;

impl DiscardSelector for FirstTileDiscard {
    fn select_discard(&self, hand: &Hand) -> Option<usize> {
        if hand.is_empty() { None } else { Some(0) }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum Outcome {
    SelfDrawn { seat: usize },
    WallExhausted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum Phase {
    AwaitDraw { seat: usize },
    AwaitDiscard { seat: usize },
    /// The human seat may claim `tile` just thrown by `discarder`.
    AwaitReaction { discarder: usize, tile: Tile },
    Finished { outcome: Outcome },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Discard {
    pub seat: usize,
    pub tile: Tile,
}

/// What a single step did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum TableEvent {
    Drew { seat: usize, tile: Tile },
    SelfDrawn { seat: usize, tile: Tile },
    WallExhausted,
    Discarded { seat: usize, tile: Tile },
    Claimed { seat: usize, meld: Meld },
    Passed { seat: usize },
}

pub struct Table {
    config: TableConfig,
    wall: Vec<Tile>,
    hands: [Hand; SEATS],
    discards: Vec<Discard>,
    phase: Phase,
    selector: Box<dyn DiscardSelector>,
}

impl Table {
    pub fn new(config: TableConfig) -> Self {
        Self::with_selector(config, Box::new(FirstTileDiscard))
    }

    /// Shuffles a full set and deals.
    pub fn with_selector(config: TableConfig, selector: Box<dyn DiscardSelector>) -> Self {
        let mut rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };
        let mut wall = full_set();
        wall.shuffle(&mut rng);
        Self::with_wall(config, wall, selector)
    }

    /// Deals from a prepared wall; tiles are drawn from the back.
    pub fn with_wall(
        config: TableConfig,
        wall: Vec<Tile>,
        selector: Box<dyn DiscardSelector>,
    ) -> Self {
        let mut table = Self {
            config,
            wall,
            hands: Default::default(),
            discards: Vec::new(),
            phase: Phase::AwaitDiscard { seat: DEALER },
            selector,
        };
        table.deal();
        table
    }

    fn deal(&mut self) {
        for _ in 0..DEAL_SIZE {
            for seat in 0..SEATS {
                if let Some(tile) = self.wall.pop() {
                    self.hands[seat].push(tile);
                }
            }
        }
        if let Some(tile) = self.wall.pop() {
            self.hands[DEALER].push(tile);
        }
        if self.hands[DEALER].is_complete() {
            console_log!("mahjong: dealer wins on the deal");
            self.phase = Phase::Finished {
                outcome: Outcome::SelfDrawn { seat: DEALER },
            };
        }
    }

    /// Performs the next automatic step.
    pub fn advance(&mut self) -> Result<TableEvent, MahjongError> {
        match self.phase {
            Phase::Finished { .. } => Err(MahjongError::Finished),
            Phase::AwaitDraw { seat } => Ok(self.draw(seat)),
            Phase::AwaitDiscard { seat } if seat == self.human_seat() => {
                Err(MahjongError::AwaitingHuman { seat })
            }
            Phase::AwaitDiscard { seat } => {
                let index = self
                    .selector
                    .select_discard(&self.hands[seat])
                    .ok_or(MahjongError::InvalidDiscard { seat, index: 0 })?;
                let tile = self.hands[seat]
                    .take(index)
                    .ok_or(MahjongError::InvalidDiscard { seat, index })?;
                Ok(self.after_discard(seat, tile))
            }
            Phase::AwaitReaction { .. } => Err(MahjongError::AwaitingHuman {
                seat: self.human_seat(),
            }),
        }
    }

    fn draw(&mut self, seat: usize) -> TableEvent {
        let Some(tile) = self.wall.pop() else {
            console_log!("mahjong: wall exhausted");
            self.phase = Phase::Finished {
                outcome: Outcome::WallExhausted,
            };
            return TableEvent::WallExhausted;
        };
        self.hands[seat].push(tile);
        if self.hands[seat].is_complete() {
            console_log!("mahjong: seat {seat} wins on a self-drawn {tile}");
            self.phase = Phase::Finished {
                outcome: Outcome::SelfDrawn { seat },
            };
            return TableEvent::SelfDrawn { seat, tile };
        }
        console_debug!("mahjong: seat {seat} draws");
        self.phase = Phase::AwaitDiscard { seat };
        TableEvent::Drew { seat, tile }
    }

    fn after_discard(&mut self, seat: usize, tile: Tile) -> TableEvent {
        console_debug!("mahjong: seat {seat} discards {tile}");
        self.discards.push(Discard { seat, tile });
        let human = self.human_seat();
        self.phase = if seat != human && self.hands[human].can_pong(tile) {
            Phase::AwaitReaction {
                discarder: seat,
                tile,
            }
        } else {
            Phase::AwaitDraw {
                seat: next_seat(seat),
            }
        };
        TableEvent::Discarded { seat, tile }
    }

    /// The human seat throws `tile`.
    pub fn discard(&mut self, tile: Tile) -> Result<TableEvent, MahjongError> {
        let human = self.human_seat();
        match self.phase {
            Phase::Finished { .. } => Err(MahjongError::Finished),
            Phase::AwaitDiscard { seat } if seat == human => {
                self.hands[human].remove(tile)?;
                Ok(self.after_discard(human, tile))
            }
            _ => Err(MahjongError::OutOfTurn {
                seat: human,
                action: "discard",
            }),
        }
    }

    /// The human seat melds the pending discard with two copies from hand,
    /// then must discard.
    pub fn claim_pong(&mut self) -> Result<TableEvent, MahjongError> {
        let tile = self.pending_discard()?;
        let human = self.human_seat();
        let meld = self.hands[human].pong(tile)?;
        self.discards.pop();
        self.phase = Phase::AwaitDiscard { seat: human };
        Ok(TableEvent::Claimed { seat: human, meld })
    }

    /// The human seat melds the pending discard with three copies from hand
    /// and draws a replacement tile.
    pub fn claim_kong(&mut self) -> Result<TableEvent, MahjongError> {
        let tile = self.pending_discard()?;
        let human = self.human_seat();
        let meld = self.hands[human].kong(tile)?;
        self.discards.pop();
        self.phase = Phase::AwaitDraw { seat: human };
        Ok(TableEvent::Claimed { seat: human, meld })
    }

    /// The human seat declines the pending discard.
    pub fn pass_claim(&mut self) -> Result<TableEvent, MahjongError> {
        let Phase::AwaitReaction { discarder, .. } = self.phase else {
            return Err(MahjongError::NoPendingDiscard);
        };
        self.phase = Phase::AwaitDraw {
            seat: next_seat(discarder),
        };
        Ok(TableEvent::Passed {
            seat: self.human_seat(),
        })
    }

    fn pending_discard(&self) -> Result<Tile, MahjongError> {
        match self.phase {
            Phase::AwaitReaction { tile, .. } => Ok(tile),
            Phase::Finished { .. } => Err(MahjongError::Finished),
            _ => Err(MahjongError::NoPendingDiscard),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    pub fn human_seat(&self) -> usize {
        self.config.human_seat
    }

    pub fn hand(&self, seat: usize) -> Option<&Hand> {
        self.hands.get(seat)
    }

    pub fn discards(&self) -> &[Discard] {
        &self.discards
    }

    pub fn wall_remaining(&self) -> usize {
        self.wall.len()
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.phase, Phase::Finished { .. })
    }

    pub fn to_state(&self) -> TableState {
        let human = &self.hands[self.human_seat()];
        TableState {
            phase: self.phase,
            human_seat: self.human_seat(),
            hand: human.tiles().to_vec(),
            melds: human.melds().to_vec(),
            hand_sizes: std::array::from_fn(|seat| self.hands[seat].len()),
            discards: self.discards.clone(),
            wall_remaining: self.wall.len(),
        }
    }

    #[cfg(test)]
    pub(crate) fn set_for_test(&mut self, hands: [Vec<Tile>; SEATS], wall: Vec<Tile>, phase: Phase) {
        self.hands = hands.map(Hand::from_tiles);
        self.wall = wall;
        self.discards.clear();
        self.phase = phase;
    }
}

fn next_seat(seat: usize) -> usize {
    (seat + 1) % SEATS
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::mahjong::tiles_from_codes;

    pub(crate) fn tiles(codes: &[u8]) -> Vec<Tile> {
        tiles_from_codes(codes).unwrap()
    }

    pub(crate) fn tile(code: u8) -> Tile {
        Tile::new(code).unwrap()
    }

    fn seeded(seed: u64) -> Table {
        Table::new(TableConfig::default().with_seed(seed))
    }

    /// Hands that can never complete by accident.
    pub(crate) fn scattered() -> Vec<Tile> {
        tiles(&[1, 4, 7, 11, 14, 17, 21, 24, 27, 31, 33, 35, 41])
    }

    struct LastTileDiscard;

    impl DiscardSelector for LastTileDiscard {
        fn select_discard(&self, hand: &Hand) -> Option<usize> {
            hand.len().checked_sub(1)
        }
    }

    #[test]
    fn deal_gives_dealer_fourteen_and_others_thirteen() {
        let table = seeded(7);

        assert_eq!(table.hand(0).unwrap().len(), 14);
        for seat in 1..SEATS {
            assert_eq!(table.hand(seat).unwrap().len(), 13);
        }
        assert_eq!(table.wall_remaining(), 136 - 53);
        assert_eq!(table.phase(), Phase::AwaitDiscard { seat: 0 });
    }

    #[test]
    fn same_seed_deals_the_same_tiles() {
        let a = seeded(99);
        let b = seeded(99);

        assert_eq!(a.hand(0), b.hand(0));
        assert_eq!(a.hand(3), b.hand(3));
    }

    #[test]
    fn advance_waits_for_the_human_discard() {
        let mut table = seeded(7);

        assert_eq!(table.advance(), Err(MahjongError::AwaitingHuman { seat: 0 }));
    }

    #[test]
    fn computer_seats_play_round_robin() {
        let mut table = seeded(7);
        table.set_for_test(
            [scattered(), scattered(), scattered(), scattered()],
            tiles(&[2, 3, 5, 6]),
            Phase::AwaitDraw { seat: 1 },
        );

        let mut discarders = Vec::new();
        while table.phase() != (Phase::AwaitDiscard { seat: 0 }) {
            if let TableEvent::Discarded { seat, .. } = table.advance().unwrap() {
                discarders.push(seat);
            }
        }

        assert_eq!(discarders, vec![1, 2, 3]);
        assert_eq!(table.hand(0).unwrap().len(), 14);
        assert_eq!(table.discards().len(), 3);
        assert_eq!(table.wall_remaining(), 0);
    }

    #[test]
    fn discard_rejects_out_of_turn_and_missing_tiles() {
        let mut table = seeded(7);
        table.set_for_test(
            [scattered(), scattered(), scattered(), scattered()],
            tiles(&[9]),
            Phase::AwaitDiscard { seat: 0 },
        );

        assert_eq!(
            table.discard(tile(9)),
            Err(MahjongError::TileNotInHand { tile: 9 })
        );
        table.discard(tile(41)).unwrap();
        assert_eq!(
            table.discard(tile(1)),
            Err(MahjongError::OutOfTurn { seat: 0, action: "discard" })
        );
        assert_eq!(table.phase(), Phase::AwaitDraw { seat: 1 });
    }

    #[test]
    fn matching_pair_opens_a_reaction_and_pong_takes_the_discard() {
        let mut table = seeded(7);
        let mut human = scattered();
        human[0] = tile(5);
        human[1] = tile(5);
        let mut seat1 = scattered();
        seat1[0] = tile(5);
        table.set_for_test(
            [human, seat1, scattered(), scattered()],
            tiles(&[9, 9]),
            Phase::AwaitDiscard { seat: 1 },
        );

        assert_eq!(
            table.advance(),
            Ok(TableEvent::Discarded { seat: 1, tile: tile(5) })
        );
        assert_eq!(
            table.phase(),
            Phase::AwaitReaction { discarder: 1, tile: tile(5) }
        );

        let event = table.claim_pong().unwrap();

        assert_eq!(
            event,
            TableEvent::Claimed { seat: 0, meld: Meld::Pong([tile(5); 3]) }
        );
        assert!(table.discards().is_empty());
        assert_eq!(table.phase(), Phase::AwaitDiscard { seat: 0 });
        assert_eq!(table.hand(0).unwrap().len(), 11);

        table.discard(tile(41)).unwrap();
        assert_eq!(table.phase(), Phase::AwaitDraw { seat: 1 });
    }

    #[test]
    fn kong_draws_a_replacement_before_discarding() {
        let mut table = seeded(7);
        let mut human = scattered();
        human[0] = tile(5);
        human[1] = tile(5);
        human[2] = tile(5);
        let mut seat2 = scattered();
        seat2[0] = tile(5);
        table.set_for_test(
            [human, scattered(), seat2, scattered()],
            tiles(&[45]),
            Phase::AwaitDiscard { seat: 2 },
        );
        table.advance().unwrap();

        table.claim_kong().unwrap();
        assert_eq!(table.phase(), Phase::AwaitDraw { seat: 0 });

        assert_eq!(
            table.advance(),
            Ok(TableEvent::Drew { seat: 0, tile: tile(45) })
        );
        assert_eq!(table.phase(), Phase::AwaitDiscard { seat: 0 });
        assert_eq!(table.hand(0).unwrap().len(), 11);
        assert_eq!(table.hand(0).unwrap().melds().len(), 1);
    }

    #[test]
    fn passing_resumes_after_the_discarder() {
        let mut table = seeded(7);
        let mut human = scattered();
        human[0] = tile(5);
        human[1] = tile(5);
        let mut seat3 = scattered();
        seat3[0] = tile(5);
        table.set_for_test(
            [human, scattered(), scattered(), seat3],
            tiles(&[9]),
            Phase::AwaitDiscard { seat: 3 },
        );
        table.advance().unwrap();

        assert_eq!(table.claim_kong(), Err(MahjongError::CannotClaim { tile: 5, held: 2, needed: 3 }));
        assert_eq!(table.pass_claim(), Ok(TableEvent::Passed { seat: 0 }));
        assert_eq!(table.phase(), Phase::AwaitDraw { seat: 0 });
        assert_eq!(table.pass_claim(), Err(MahjongError::NoPendingDiscard));
    }

    #[test]
    fn completing_draw_finishes_the_hand() {
        let mut table = seeded(7);
        let waiting = tiles(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 11, 12, 13, 19]);
        table.set_for_test(
            [scattered(), scattered(), waiting, scattered()],
            tiles(&[19]),
            Phase::AwaitDraw { seat: 2 },
        );

        assert_eq!(
            table.advance(),
            Ok(TableEvent::SelfDrawn { seat: 2, tile: tile(19) })
        );
        assert_eq!(
            table.phase(),
            Phase::Finished { outcome: Outcome::SelfDrawn { seat: 2 } }
        );
        assert_eq!(table.advance(), Err(MahjongError::Finished));
    }

    #[test]
    fn empty_wall_ends_in_a_draw() {
        let mut table = seeded(7);
        table.set_for_test(
            [scattered(), scattered(), scattered(), scattered()],
            Vec::new(),
            Phase::AwaitDraw { seat: 1 },
        );

        assert_eq!(table.advance(), Ok(TableEvent::WallExhausted));
        assert!(table.is_finished());
        assert_eq!(table.discard(tile(1)), Err(MahjongError::Finished));
    }

    #[test]
    fn custom_selector_chooses_the_discard() {
        let config = TableConfig::default().with_seed(3);
        let mut table = Table::with_selector(config, Box::new(LastTileDiscard));
        table.set_for_test(
            [scattered(), scattered(), scattered(), scattered()],
            tiles(&[9]),
            Phase::AwaitDiscard { seat: 1 },
        );

        assert_eq!(
            table.advance(),
            Ok(TableEvent::Discarded { seat: 1, tile: tile(41) })
        );
        assert_eq!(table.hand(1).unwrap().len(), 12);
    }

    #[test]
    fn state_hides_other_seats_tiles() {
        let table = seeded(11);
        let state = table.to_state();

        assert_eq!(state.hand.len(), 14);
        assert_eq!(state.hand_sizes, [14, 13, 13, 13]);
        assert_eq!(state.wall_remaining, 83);
    }
}
