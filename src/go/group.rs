//! Group and liberty analysis.
//!
//! Flood fills are iterative (explicit stack) and track visited points in a
//! bitset sized to the board.

use super::{BOARD_SIZE, GoBoard};
use crate::types::{Position, Stone};

const CELLS: usize = BOARD_SIZE * BOARD_SIZE;
const WORDS: usize = CELLS.div_ceil(64);

#[derive(Debug, Clone)]
pub struct Visited {
    bits: [u64; WORDS],
}

impl Visited {
    pub fn new() -> Self {
        Self { bits: [0; WORDS] }
    }

    /// Marks `pos`; returns `false` when it was already marked.
    pub fn insert(&mut self, pos: Position) -> bool {
        let idx = pos.row as usize * BOARD_SIZE + pos.col as usize;
        let (word, bit) = (idx / 64, 1u64 << (idx % 64));
        let fresh = self.bits[word] & bit == 0;
        self.bits[word] |= bit;
        fresh
    }

    pub fn contains(&self, pos: Position) -> bool {
        let idx = pos.row as usize * BOARD_SIZE + pos.col as usize;
        self.bits[idx / 64] & (1u64 << (idx % 64)) != 0
    }
}

impl Default for Visited {
    fn default() -> Self {
        Self::new()
    }
}

/// Collects the maximal same-colour group containing `seed`, marking every
/// member in `visited`. Returns an empty group for an empty seed point.
pub fn collect_group(board: &GoBoard, seed: Position, visited: &mut Visited) -> Vec<Position> {
    let Some(color) = board.get(seed) else {
        return Vec::new();
    };
    if !visited.insert(seed) {
        return Vec::new();
    }

    let mut group = Vec::new();
    let mut stack = vec![seed];
    while let Some(pos) = stack.pop() {
        group.push(pos);
        for next in board.neighbors(pos) {
            if board.get(next) == Some(color) && visited.insert(next) {
                stack.push(next);
            }
        }
    }
    group
}

/// The group containing `seed`.
pub fn group_at(board: &GoBoard, seed: Position) -> Vec<Position> {
    collect_group(board, seed, &mut Visited::new())
}

/// Whether any member of `group` touches an empty point.
pub fn has_liberty(board: &GoBoard, group: &[Position]) -> bool {
    group
        .iter()
        .any(|&pos| board.neighbors(pos).any(|next| board.get(next).is_none()))
}

/// Number of distinct empty points adjacent to `group`.
pub fn count_liberties(board: &GoBoard, group: &[Position]) -> usize {
    let mut seen = Visited::new();
    group
        .iter()
        .flat_map(|&pos| board.neighbors(pos))
        .filter(|&next| board.get(next).is_none() && seen.insert(next))
        .count()
}

/// Every stone of `color`, anywhere on the board, whose group has no liberties.
pub fn dead_stones(board: &GoBoard, color: Stone) -> Vec<Position> {
    let mut visited = Visited::new();
    let mut dead = Vec::new();
    for pos in board.positions() {
        if board.get(pos) != Some(color) || visited.contains(pos) {
            continue;
        }
        let group = collect_group(board, pos, &mut visited);
        if !has_liberty(board, &group) {
            dead.extend(group);
        }
    }
    dead
}
