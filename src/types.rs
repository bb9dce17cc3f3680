use serde::{Deserialize, Serialize};

use crate::mahjong::{Discard, Meld, Phase, Tile};
use crate::xiangqi::{Piece, Side};

/// A board coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: u8,
    pub col: u8,
}

impl Position {
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }
}

/// Stone colour shared by Go and Gomoku. Black always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stone {
    Black,
    White,
}

impl Stone {
    pub fn opponent(self) -> Self {
        match self {
            Stone::Black => Stone::White,
            Stone::White => Stone::Black,
        }
    }

    /// Wire code used by the JS side: 1 = black, 2 = white.
    pub fn code(self) -> u8 {
        match self {
            Stone::Black => 1,
            Stone::White => 2,
        }
    }
}

/// Public Xiangqi state returned from WASM APIs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct XiangqiState {
    /// Row-major, 10 rows of 9 points.
    pub board: Vec<Option<Piece>>,
    pub current_player: Side,
    pub selected: Option<Position>,
    pub is_game_over: bool,
    pub winner: Option<Side>,
}

/// Public Go state returned from WASM APIs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GoState {
    /// Row-major, 19 × 19 cells. 0 = empty, 1 = black, 2 = white.
    pub board: Vec<u8>,
    pub current_player: Stone,
    pub move_count: usize,
    pub last_captured: Option<Position>,
    pub black_captures: usize,
    pub white_captures: usize,
}

/// Public Gomoku state returned from WASM APIs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GomokuState {
    /// Row-major by `y`, 15 × 15 cells. 0 = empty, 1 = black, 2 = white.
    pub board: Vec<u8>,
    pub current_player: Stone,
    pub winner: Option<Stone>,
}

/// Public Mahjong table state returned from WASM APIs.
///
/// Only the human seat's concealed tiles are exposed; other seats are
/// reported by hand size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableState {
    pub phase: Phase,
    pub human_seat: usize,
    pub hand: Vec<Tile>,
    pub melds: Vec<Meld>,
    pub hand_sizes: [usize; 4],
    pub discards: Vec<Discard>,
    pub wall_remaining: usize,
}
