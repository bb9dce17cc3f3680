//! Xiangqi (Chinese chess).
//!
//! The board is 10 rows × 9 columns of intersection points. Red starts on
//! rows 0–4 and moves towards higher rows; Black starts on rows 5–9.

pub mod game;
pub mod piece;
pub mod rules;

use serde::{Deserialize, Serialize};

use crate::board::Grid;

pub use game::{MoveOutcome, XiangqiGame};
pub use piece::{Piece, PieceKind};
pub use rules::is_legal_move;

pub const ROWS: usize = 10;
pub const COLS: usize = 9;

pub type XiangqiBoard = Grid<Option<Piece>, ROWS, COLS>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Red,
    Black,
}

impl Side {
    pub fn opponent(self) -> Self {
        match self {
            Side::Red => Side::Black,
            Side::Black => Side::Red,
        }
    }

    /// Row delta of a forward soldier step.
    pub fn forward(self) -> i32 {
        match self {
            Side::Red => 1,
            Side::Black => -1,
        }
    }

    /// Whether `row` is on this side's half of the river.
    pub fn owns_row(self, row: u8) -> bool {
        match self {
            Side::Red => row <= 4,
            Side::Black => row >= 5,
        }
    }

    /// Rows of this side's palace; columns are always 3..=5.
    pub fn palace_rows(self) -> std::ops::RangeInclusive<u8> {
        match self {
            Side::Red => 0..=2,
            Side::Black => 7..=9,
        }
    }

    /// Wire code used by the JS side: 0 = red, 1 = black.
    pub fn code(self) -> u8 {
        match self {
            Side::Red => 0,
            Side::Black => 1,
        }
    }
}
