use super::piece::opening_board;
use super::rules::{is_legal_move, legal_destinations};
use super::{Piece, PieceKind, Side, XiangqiBoard};
use crate::error::XiangqiError;
use crate::types::{Position, XiangqiState};
use crate::{console_debug, console_log};

/// Result of an accepted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    pub from: Position,
    pub to: Position,
    pub captured: Option<Piece>,
    /// Set when the move captured the opposing king.
    pub winner: Option<Side>,
}

pub struct XiangqiGame {
    board: XiangqiBoard,
    current_player: Side,
    selected: Option<Position>,
    winner: Option<Side>,
}

impl XiangqiGame {
    pub fn new() -> Self {
        Self {
            board: opening_board(),
            current_player: Side::Red,
            selected: None,
            winner: None,
        }
    }

    /// UI entry point for a tap on an intersection.
    pub fn handle_click(&mut self, row: u8, col: u8) {
        if self.selected.is_none() {
            self.select(row, col);
        } else if let Err(err) = self.move_selected(row, col) {
            console_debug!("xiangqi: move to ({row}, {col}) rejected: {err}");
        }
    }

    /// Selects the piece at `(row, col)` if it belongs to the side to move.
    /// Returns whether a selection was made.
    pub fn select(&mut self, row: u8, col: u8) -> bool {
        let pos = Position::new(row, col);
        if self.is_game_over() || self.selected.is_some() || !self.board.contains(pos) {
            return false;
        }
        match self.board.get(pos) {
            Some(piece) if piece.side == self.current_player => {
                self.selected = Some(pos);
                true
            }
            _ => false,
        }
    }

    /// Moves the selected piece to `(row, col)`. The selection is cleared
    /// whether or not the move is accepted.
    pub fn move_selected(&mut self, row: u8, col: u8) -> Result<MoveOutcome, XiangqiError> {
        if self.is_game_over() {
            self.selected = None;
            return Err(XiangqiError::GameOver);
        }
        let from = self.selected.take().ok_or(XiangqiError::NothingSelected)?;
        self.try_move(from, Position::new(row, col))
    }

    /// Validates and applies a move from `from` to `to` for the side to move.
    pub fn try_move(&mut self, from: Position, to: Position) -> Result<MoveOutcome, XiangqiError> {
        if self.is_game_over() {
            return Err(XiangqiError::GameOver);
        }
        for pos in [from, to] {
            if !self.board.contains(pos) {
                return Err(XiangqiError::OutOfBounds { pos });
            }
        }
        if from == to {
            return Err(XiangqiError::NoMovement);
        }
        match self.board.get(from) {
            Some(piece) if piece.side == self.current_player => {}
            _ => return Err(XiangqiError::IllegalPieceMove { from, to }),
        }
        if let Some(target) = self.board.get(to)
            && target.side == self.current_player
        {
            return Err(XiangqiError::SameSide { to });
        }
        if !is_legal_move(&self.board, from, to) {
            return Err(XiangqiError::IllegalPieceMove { from, to });
        }

        Ok(self.apply_move(from, to))
    }

    fn apply_move(&mut self, from: Position, to: Position) -> MoveOutcome {
        let mover = self.board.take(from);
        let captured = self.board.get(to);
        self.board.set(to, mover);

        let winner = match captured {
            Some(piece) if piece.kind == PieceKind::King => {
                console_log!("xiangqi: {:?} captures the king and wins", self.current_player);
                self.winner = Some(self.current_player);
                self.winner
            }
            _ => None,
        };
        console_debug!("xiangqi: {:?} {:?} -> {:?}", self.current_player, from, to);
        self.current_player = self.current_player.opponent();

        MoveOutcome {
            from,
            to,
            captured,
            winner,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn piece_at(&self, row: u8, col: u8) -> Option<Piece> {
        let pos = Position::new(row, col);
        if self.board.contains(pos) {
            self.board.get(pos)
        } else {
            None
        }
    }

    pub fn board(&self) -> &XiangqiBoard {
        &self.board
    }

    pub fn current_player(&self) -> Side {
        self.current_player
    }

    pub fn selection(&self) -> Option<Position> {
        self.selected
    }

    pub fn is_game_over(&self) -> bool {
        self.winner.is_some()
    }

    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    /// Destinations the piece at `(row, col)` could move to this turn.
    pub fn legal_destinations(&self, row: u8, col: u8) -> Vec<Position> {
        match self.piece_at(row, col) {
            Some(piece) if piece.side == self.current_player && !self.is_game_over() => {
                legal_destinations(&self.board, Position::new(row, col))
            }
            _ => Vec::new(),
        }
    }

    pub fn to_state(&self) -> XiangqiState {
        XiangqiState {
            board: self.board.to_vec(),
            current_player: self.current_player,
            selected: self.selected,
            is_game_over: self.is_game_over(),
            winner: self.winner,
        }
    }

    #[cfg(test)]
    fn set_board_for_test(&mut self, board: XiangqiBoard, current_player: Side) {
        self.board = board;
        self.current_player = current_player;
        self.selected = None;
        self.winner = None;
    }
}

impl Default for XiangqiGame {
    fn default() -> Self {
        Self::new()
    }
}
