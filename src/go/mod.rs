//! Go (Weiqi) on a 19 × 19 board with capture, suicide and simple-ko rules.

pub mod game;
pub mod group;

use crate::board::Grid;
use crate::types::Stone;

pub use game::{GoGame, MoveRecord};

pub const BOARD_SIZE: usize = 19;

pub type GoBoard = Grid<Option<Stone>, BOARD_SIZE, BOARD_SIZE>;
