//! Four-seat Mahjong: tiles, hand validation and the table turn scheduler.

pub mod hand;
pub mod pacing;
pub mod table;
pub mod tile;

pub use hand::{Hand, Meld, can_win, is_complete};
pub use pacing::PacedTable;
pub use table::{
    Discard, DiscardSelector, FirstTileDiscard, Outcome, Phase, SEATS, Table, TableEvent,
};
pub use tile::{Tile, full_set, kinds, tiles_from_codes};
