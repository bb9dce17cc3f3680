//! Per-piece movement predicates.
//!
//! Each predicate only checks the geometry of its piece kind. Shared checks
//! (same source and destination, own piece on the destination) live in
//! [`is_legal_move`].

use super::{Piece, PieceKind, Side, XiangqiBoard};
use crate::types::Position;

type MovePredicate = fn(&XiangqiBoard, Piece, Position, Position) -> bool;

/// Indexed by [`PieceKind::index`].
const PREDICATES: [MovePredicate; 7] = [
    car_move,
    horse_move,
    elephant_move,
    advisor_move,
    king_move,
    cannon_move,
    soldier_move,
];

const PALACE_COLS: std::ops::RangeInclusive<u8> = 3..=5;

/// Returns whether the piece at `from` may move to `to`.
/// Caller contract: both points are on the board.
pub fn is_legal_move(board: &XiangqiBoard, from: Position, to: Position) -> bool {
    if from == to {
        return false;
    }
    let Some(piece) = board.get(from) else {
        return false;
    };
    if board.get(to).is_some_and(|target| target.side == piece.side) {
        return false;
    }
    PREDICATES[piece.kind.index()](board, piece, from, to)
}

/// All destinations the piece at `from` may move to.
pub fn legal_destinations(board: &XiangqiBoard, from: Position) -> Vec<Position> {
    board
        .positions()
        .filter(|&to| is_legal_move(board, from, to))
        .collect()
}

fn delta(from: Position, to: Position) -> (i32, i32) {
    (
        to.row as i32 - from.row as i32,
        to.col as i32 - from.col as i32,
    )
}

/// Number of occupied points strictly between `from` and `to`.
/// `None` when the two points do not share a row or column.
fn pieces_between(board: &XiangqiBoard, from: Position, to: Position) -> Option<usize> {
    if from.row == to.row {
        let (lo, hi) = (from.col.min(to.col), from.col.max(to.col));
        Some(
            (lo + 1..hi)
                .filter(|&col| board.get(Position::new(from.row, col)).is_some())
                .count(),
        )
    } else if from.col == to.col {
        let (lo, hi) = (from.row.min(to.row), from.row.max(to.row));
        Some(
            (lo + 1..hi)
                .filter(|&row| board.get(Position::new(row, from.col)).is_some())
                .count(),
        )
    } else {
        None
    }
}

fn in_palace(side: Side, pos: Position) -> bool {
    PALACE_COLS.contains(&pos.col) && side.palace_rows().contains(&pos.row)
}

fn car_move(board: &XiangqiBoard, _piece: Piece, from: Position, to: Position) -> bool {
    pieces_between(board, from, to) == Some(0)
}

fn horse_move(board: &XiangqiBoard, _piece: Piece, from: Position, to: Position) -> bool {
    let (dr, dc) = delta(from, to);
    let leg = match (dr.abs(), dc.abs()) {
        (2, 1) => Position::new((from.row as i32 + dr / 2) as u8, from.col),
        (1, 2) => Position::new(from.row, (from.col as i32 + dc / 2) as u8),
        _ => return false,
    };
    board.get(leg).is_none()
}

fn elephant_move(board: &XiangqiBoard, piece: Piece, from: Position, to: Position) -> bool {
    let (dr, dc) = delta(from, to);
    if dr.abs() != 2 || dc.abs() != 2 {
        return false;
    }
    let eye = Position::new((from.row + to.row) / 2, (from.col + to.col) / 2);
    board.get(eye).is_none() && piece.side.owns_row(to.row)
}

fn advisor_move(_board: &XiangqiBoard, piece: Piece, from: Position, to: Position) -> bool {
    let (dr, dc) = delta(from, to);
    dr.abs() == 1 && dc.abs() == 1 && in_palace(piece.side, to)
}

fn king_move(board: &XiangqiBoard, piece: Piece, from: Position, to: Position) -> bool {
    let (dr, dc) = delta(from, to);
    if dr.abs() + dc.abs() != 1 {
        return false;
    }
    // Facing generals: a step onto the opposing king ignores the palace bound.
    let takes_king = board
        .get(to)
        .is_some_and(|target| target.kind == PieceKind::King && target.side != piece.side);
    takes_king || in_palace(piece.side, to)
}

fn cannon_move(board: &XiangqiBoard, _piece: Piece, from: Position, to: Position) -> bool {
    let screens = if board.get(to).is_some() { 1 } else { 0 };
    pieces_between(board, from, to) == Some(screens)
}

fn soldier_move(_board: &XiangqiBoard, piece: Piece, from: Position, to: Position) -> bool {
    let (dr, dc) = delta(from, to);
    let forward = dr == piece.side.forward() && dc == 0;
    let crossed = !piece.side.owns_row(from.row);
    forward || (crossed && dr == 0 && dc.abs() == 1)
}
