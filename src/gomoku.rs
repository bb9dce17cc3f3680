//! Gomoku on a 15 × 15 board: first unbroken line of five wins.

use std::collections::HashMap;

use crate::console_log;
use crate::error::GomokuError;
use crate::types::{GomokuState, Stone};

pub const BOARD_SIZE: u8 = 15;
const WIN_LENGTH: usize = 5;
const AXES: [(i32, i32); 4] = [(1, 0), (0, 1), (1, 1), (1, -1)];

/// Sparse set of played stones keyed by `(x, y)`.
pub type MoveSet = HashMap<(u8, u8), Stone>;

/// Returns `Some(stone)` when the stone just placed at `(x, y)` completes a
/// line of five or more. Only lines through `(x, y)` are scanned.
pub fn check_winner(moves: &MoveSet, x: u8, y: u8, stone: Stone) -> Option<Stone> {
    AXES.into_iter()
        .any(|(dx, dy)| {
            1 + run_length(moves, x, y, dx, dy, stone) + run_length(moves, x, y, -dx, -dy, stone)
                >= WIN_LENGTH
        })
        .then_some(stone)
}

/// [`check_winner`] over parallel coordinate and colour arrays, with the new
/// stone at `(x, y)` added. `None` when the arrays differ in length or any
/// point is off the board.
pub fn check_winner_in(
    xs: &[u8],
    ys: &[u8],
    stones: &[Stone],
    x: u8,
    y: u8,
    stone: Stone,
) -> Option<Stone> {
    if xs.len() != ys.len() || xs.len() != stones.len() {
        return None;
    }
    let on_board = |px: u8, py: u8| px < BOARD_SIZE && py < BOARD_SIZE;
    if !on_board(x, y) || !xs.iter().zip(ys).all(|(&px, &py)| on_board(px, py)) {
        return None;
    }
    let mut moves: MoveSet = xs
        .iter()
        .zip(ys)
        .map(|(&px, &py)| (px, py))
        .zip(stones.iter().copied())
        .collect();
    moves.insert((x, y), stone);
    check_winner(&moves, x, y, stone)
}

/// Contiguous `stone`s starting one step from `(x, y)` in direction `(dx, dy)`.
fn run_length(moves: &MoveSet, x: u8, y: u8, dx: i32, dy: i32, stone: Stone) -> usize {
    let on_board = 0..BOARD_SIZE as i32;
    let (mut nx, mut ny) = (x as i32 + dx, y as i32 + dy);
    let mut count = 0;
    while on_board.contains(&nx) && on_board.contains(&ny) {
        if moves.get(&(nx as u8, ny as u8)) != Some(&stone) {
            break;
        }
        count += 1;
        nx += dx;
        ny += dy;
    }
    count
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GomokuGame {
    moves: MoveSet,
    current_player: Stone,
    winner: Option<Stone>,
}

impl GomokuGame {
    pub fn new() -> Self {
        Self {
            moves: MoveSet::new(),
            current_player: Stone::Black,
            winner: None,
        }
    }

    /// Places the side-to-move's stone. Returns the winner if this move
    /// completed a line.
    pub fn place(&mut self, x: u8, y: u8) -> Result<Option<Stone>, GomokuError> {
        if self.winner.is_some() {
            return Err(GomokuError::GameOver);
        }
        if x >= BOARD_SIZE || y >= BOARD_SIZE {
            return Err(GomokuError::OutOfBounds { x, y });
        }
        if self.moves.contains_key(&(x, y)) {
            return Err(GomokuError::Occupied { x, y });
        }

        let stone = self.current_player;
        self.moves.insert((x, y), stone);
        self.winner = check_winner(&self.moves, x, y, stone);
        if let Some(winner) = self.winner {
            console_log!("gomoku: {winner:?} wins at ({x}, {y})");
        }
        self.current_player = stone.opponent();
        Ok(self.winner)
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn stone_at(&self, x: u8, y: u8) -> Option<Stone> {
        self.moves.get(&(x, y)).copied()
    }

    pub fn moves(&self) -> &MoveSet {
        &self.moves
    }

    pub fn current_player(&self) -> Stone {
        self.current_player
    }

    pub fn winner(&self) -> Option<Stone> {
        self.winner
    }

    pub fn to_state(&self) -> GomokuState {
        let mut board = vec![0u8; BOARD_SIZE as usize * BOARD_SIZE as usize];
        for (&(x, y), stone) in &self.moves {
            board[y as usize * BOARD_SIZE as usize + x as usize] = stone.code();
        }
        GomokuState {
            board,
            current_player: self.current_player,
            winner: self.winner,
        }
    }
}

impl Default for GomokuGame {
    fn default() -> Self {
        Self::new()
    }
}
