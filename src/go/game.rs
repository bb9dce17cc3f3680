use serde::Serialize;

use super::group::{count_liberties, dead_stones, group_at, has_liberty};
use super::GoBoard;
use crate::error::GoError;
use crate::types::{GoState, Position, Stone};
use crate::{console_debug, console_log};

/// One committed move with the exact stones it removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveRecord {
    pub position: Position,
    pub player: Stone,
    pub captured: Vec<Position>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoGame {
    board: GoBoard,
    current_player: Stone,
    /// The single stone removed by the previous move, if it removed exactly one.
    last_captured: Option<Position>,
    history: Vec<MoveRecord>,
}

impl GoGame {
    pub fn new() -> Self {
        Self {
            board: GoBoard::new(),
            current_player: Stone::Black,
            last_captured: None,
            history: Vec::new(),
        }
    }

    pub fn is_valid_move(&self, row: u8, col: u8) -> bool {
        self.check_move(row, col).is_ok()
    }

    /// Evaluates a move for the side to play on a trial copy of the board.
    /// On success returns the opponent stones the move would capture.
    pub fn check_move(&self, row: u8, col: u8) -> Result<Vec<Position>, GoError> {
        let pos = Position::new(row, col);
        if !self.board.contains(pos) {
            return Err(GoError::OutOfBounds { pos });
        }
        if self.board.get(pos).is_some() {
            return Err(GoError::Occupied { pos });
        }

        let mut trial = self.board.clone();
        trial.set(pos, Some(self.current_player));
        let captured = dead_stones(&trial, self.current_player.opponent());
        for &stone in &captured {
            trial.set(stone, None);
        }

        if self.is_ko_retake(pos, &captured) {
            return Err(GoError::Ko { pos });
        }
        if !has_liberty(&trial, &group_at(&trial, pos)) {
            return Err(GoError::Suicide { pos });
        }
        Ok(captured)
    }

    /// Retaking at the point just captured, by capturing only the stone that
    /// captured it, would recreate the previous position.
    fn is_ko_retake(&self, pos: Position, captured: &[Position]) -> bool {
        match (self.last_captured, self.history.last()) {
            (Some(ko_point), Some(previous)) => {
                ko_point == pos && *captured == [previous.position]
            }
            _ => false,
        }
    }

    /// Validates and commits a move for the side to play.
    pub fn process_move(&mut self, row: u8, col: u8) -> Result<&MoveRecord, GoError> {
        let captured = self.check_move(row, col)?;
        let position = Position::new(row, col);
        let player = self.current_player;

        self.board.set(position, Some(player));
        for &stone in &captured {
            self.board.set(stone, None);
        }
        if !captured.is_empty() {
            console_log!("go: {player:?} at {position:?} captures {} stone(s)", captured.len());
        }
        console_debug!("go: {player:?} plays {position:?}");

        self.last_captured = single(&captured);
        self.current_player = player.opponent();
        self.history.push(MoveRecord {
            position,
            player,
            captured,
        });
        Ok(&self.history[self.history.len() - 1])
    }

    /// UI entry point: plays the move if it is legal.
    pub fn play(&mut self, row: u8, col: u8) -> bool {
        match self.process_move(row, col) {
            Ok(_) => true,
            Err(err) => {
                console_debug!("go: {err}");
                false
            }
        }
    }

    /// Takes back the most recent move, restoring the stones it captured.
    pub fn undo_move(&mut self) -> Option<MoveRecord> {
        let record = self.history.pop()?;
        self.board.set(record.position, None);
        for &stone in &record.captured {
            self.board.set(stone, Some(record.player.opponent()));
        }
        self.current_player = record.player;
        self.last_captured = self
            .history
            .last()
            .and_then(|previous| single(&previous.captured));
        Some(record)
    }

    pub fn reset_board(&mut self) {
        *self = Self::new();
    }

    pub fn stone_at(&self, row: u8, col: u8) -> Option<Stone> {
        let pos = Position::new(row, col);
        if self.board.contains(pos) {
            self.board.get(pos)
        } else {
            None
        }
    }

    /// Liberties of the group containing `(row, col)`; `None` on an empty
    /// or off-board point.
    pub fn liberties_at(&self, row: u8, col: u8) -> Option<usize> {
        self.stone_at(row, col)?;
        Some(count_liberties(
            &self.board,
            &group_at(&self.board, Position::new(row, col)),
        ))
    }

    pub fn board(&self) -> &GoBoard {
        &self.board
    }

    pub fn current_player(&self) -> Stone {
        self.current_player
    }

    pub fn last_captured(&self) -> Option<Position> {
        self.last_captured
    }

    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// Prisoners taken so far by `player`.
    pub fn captures_by(&self, player: Stone) -> usize {
        self.history
            .iter()
            .filter(|record| record.player == player)
            .map(|record| record.captured.len())
            .sum()
    }

    pub fn to_state(&self) -> GoState {
        GoState {
            board: self
                .board
                .to_vec()
                .into_iter()
                .map(|cell| cell.map_or(0, Stone::code))
                .collect(),
            current_player: self.current_player,
            move_count: self.history.len(),
            last_captured: self.last_captured,
            black_captures: self.captures_by(Stone::Black),
            white_captures: self.captures_by(Stone::White),
        }
    }

    #[cfg(test)]
    fn set_board_for_test(&mut self, board: GoBoard, current_player: Stone) {
        self.board = board;
        self.current_player = current_player;
        self.last_captured = None;
        self.history.clear();
    }
}

impl Default for GoGame {
    fn default() -> Self {
        Self::new()
    }
}

fn single(captured: &[Position]) -> Option<Position> {
    match captured {
        [only] => Some(*only),
        _ => None,
    }
}
