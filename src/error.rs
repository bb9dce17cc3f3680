//! Rejection reasons for every engine.
//!
//! The UI-facing surface collapses these into `bool`/`Option`; they exist so
//! the engines and their tests can tell *why* a move was ignored.

use serde::Serialize;
use thiserror::Error;

use crate::types::Position;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "type")]
pub enum XiangqiError {
    #[error("game is already over")]
    GameOver,
    #[error("no piece is selected")]
    NothingSelected,
    #[error("destination equals source")]
    NoMovement,
    #[error("destination {to:?} holds a piece of the same side")]
    SameSide { to: Position },
    #[error("piece cannot move from {from:?} to {to:?}")]
    IllegalPieceMove { from: Position, to: Position },
    #[error("point {pos:?} is off the board")]
    OutOfBounds { pos: Position },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "type")]
pub enum GoError {
    #[error("point {pos:?} is off the board")]
    OutOfBounds { pos: Position },
    #[error("point {pos:?} is already occupied")]
    Occupied { pos: Position },
    #[error("playing at {pos:?} would leave the group without liberties")]
    Suicide { pos: Position },
    #[error("playing at {pos:?} retakes a ko immediately")]
    Ko { pos: Position },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "type")]
pub enum GomokuError {
    #[error("game is already over")]
    GameOver,
    #[error("point ({x}, {y}) is off the board")]
    OutOfBounds { x: u8, y: u8 },
    #[error("point ({x}, {y}) is already occupied")]
    Occupied { x: u8, y: u8 },
}

#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "type")]
pub enum MahjongError {
    #[error("the hand is already finished")]
    Finished,
    #[error("seat {seat} must decide before the table can advance")]
    AwaitingHuman { seat: usize },
    #[error("it is not seat {seat}'s turn to {action}")]
    OutOfTurn { seat: usize, action: &'static str },
    #[error("tile {tile} is not in the hand")]
    TileNotInHand { tile: u8 },
    #[error("hand holds {held} of tile {tile}, claim needs {needed}")]
    CannotClaim { tile: u8, held: usize, needed: usize },
    #[error("no discard is waiting for a reaction")]
    NoPendingDiscard,
    #[error("seat {seat} selected discard index {index} outside its hand")]
    InvalidDiscard { seat: usize, index: usize },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid table config json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("human seat {0} is out of range (0..4)")]
    SeatOutOfRange(usize),
}
