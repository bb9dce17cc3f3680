use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::{Side, XiangqiBoard};
use crate::types::Position;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    Car,
    Horse,
    Elephant,
    Advisor,
    King,
    Cannon,
    Soldier,
}

impl PieceKind {
    pub const ALL: [PieceKind; 7] = [
        PieceKind::Car,
        PieceKind::Horse,
        PieceKind::Elephant,
        PieceKind::Advisor,
        PieceKind::King,
        PieceKind::Cannon,
        PieceKind::Soldier,
    ];

    pub fn index(self) -> usize {
        self as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub kind: PieceKind,
    pub side: Side,
}

impl Piece {
    pub const fn new(kind: PieceKind, side: Side) -> Self {
        Self { kind, side }
    }

    /// Traditional character shown on the piece.
    pub fn glyph(self) -> char {
        match (self.side, self.kind) {
            (Side::Red, PieceKind::King) => '帅',
            (Side::Red, PieceKind::Advisor) => '仕',
            (Side::Red, PieceKind::Elephant) => '相',
            (Side::Red, PieceKind::Horse) => '马',
            (Side::Red, PieceKind::Car) => '车',
            (Side::Red, PieceKind::Cannon) => '炮',
            (Side::Red, PieceKind::Soldier) => '兵',
            (Side::Black, PieceKind::King) => '将',
            (Side::Black, PieceKind::Advisor) => '士',
            (Side::Black, PieceKind::Elephant) => '象',
            (Side::Black, PieceKind::Horse) => '馬',
            (Side::Black, PieceKind::Car) => '車',
            (Side::Black, PieceKind::Cannon) => '砲',
            (Side::Black, PieceKind::Soldier) => '卒',
        }
    }
}

const BACK_RANK: [PieceKind; 9] = [
    PieceKind::Car,
    PieceKind::Horse,
    PieceKind::Elephant,
    PieceKind::Advisor,
    PieceKind::King,
    PieceKind::Advisor,
    PieceKind::Elephant,
    PieceKind::Horse,
    PieceKind::Car,
];

static OPENING: Lazy<XiangqiBoard> = Lazy::new(|| {
    let mut board = XiangqiBoard::new();
    for (side, back, cannons, soldiers) in [(Side::Red, 0, 2, 3), (Side::Black, 9, 7, 6)] {
        for (col, kind) in BACK_RANK.into_iter().enumerate() {
            board.set(Position::new(back, col as u8), Some(Piece::new(kind, side)));
        }
        for col in [1, 7] {
            board.set(Position::new(cannons, col), Some(Piece::new(PieceKind::Cannon, side)));
        }
        for col in [0, 2, 4, 6, 8] {
            board.set(Position::new(soldiers, col), Some(Piece::new(PieceKind::Soldier, side)));
        }
    }
    board
});

/// The standard starting position.
pub fn opening_board() -> XiangqiBoard {
    OPENING.clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_has_sixteen_pieces_per_side() {
        let board = opening_board();
        let cells = board.to_vec();

        let red = cells.iter().flatten().filter(|p| p.side == Side::Red).count();
        let black = cells.iter().flatten().filter(|p| p.side == Side::Black).count();

        assert_eq!(red, 16);
        assert_eq!(black, 16);
    }

    #[test]
    fn kings_face_each_other_on_the_center_file() {
        let board = opening_board();

        assert_eq!(
            board.get(Position::new(0, 4)),
            Some(Piece::new(PieceKind::King, Side::Red))
        );
        assert_eq!(
            board.get(Position::new(9, 4)),
            Some(Piece::new(PieceKind::King, Side::Black))
        );
        assert_eq!(
            board.get(Position::new(7, 1)),
            Some(Piece::new(PieceKind::Cannon, Side::Black))
        );
    }

    #[test]
    fn glyphs_differ_between_sides() {
        for kind in PieceKind::ALL {
            let red = Piece::new(kind, Side::Red).glyph();
            let black = Piece::new(kind, Side::Black).glyph();
            assert_ne!(red, black, "{kind:?}");
        }
    }
}
