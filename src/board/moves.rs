// Copyright 2026 Tobin Edwards
//
//    Licensed under the Apache License, Version 2.0 (the "License");
//    you may not use this file except in compliance with the License.
//    You may obtain a copy of the License at
//
//        http://www.apache.org/licenses/LICENSE-2.0
//
//    Unless required by applicable law or agreed to in writing, software
//    distributed under the License is distributed on an "AS IS" BASIS,
//    WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//    See the License for the specific language governing permissions and
//    limitations under the License.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::material::{Color, Material, Piece};
use super::square::Square;

use Piece::*;

#[derive(Error, Debug)]
pub enum MoveError {
    #[error("Not a legal move")]
    InvalidMove,
    #[error("Invalid move: castling from {0}")]
    CastlingColumn(Square),
    #[error("Unknown promotion piece: {0}")]
    UnknownPromotion(String),
}

/// How a classified move mutates the board.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveKind {
    Normal,
    Capture,
    Castling,
}

/// The four piece kinds a pawn may be promoted to.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Promotion {
    Queen,
    Rook,
    Bishop,
    Knight,
}

impl From<Promotion> for Piece {
    fn from(value: Promotion) -> Self {
        match value {
            Promotion::Queen => Queen,
            Promotion::Rook => Rook,
            Promotion::Bishop => Bishop,
            Promotion::Knight => Knight,
        }
    }
}

/// Context flags qualifying a movement-pattern query. Captures change the
/// pawn predicate; castling changes the rook predicate. All other pieces
/// ignore both flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MoveContext {
    pub capture: bool,
    pub castling: bool,
}

impl MoveContext {
    pub const fn capture() -> Self {
        Self {
            capture: true,
            castling: false,
        }
    }
    pub const fn castling() -> Self {
        Self {
            capture: false,
            castling: true,
        }
    }
}

impl Material {
    /// Whether this piece's movement pattern permits `from -> to`,
    /// ignoring board occupancy and check safety (the board's concern).
    pub fn pattern_allows(&self, from: Square, to: Square, ctx: MoveContext) -> bool {
        let offset = to - from;
        match self.piece() {
            // One step horizontally or vertically. Diagonal king steps
            // have Manhattan distance 2 and are deliberately excluded;
            // this engine's king never moves diagonally.
            King => offset.manhattan() == 1,
            Queen => offset.is_diagonal() || offset.is_straight(),
            Bishop => offset.is_diagonal(),
            Knight => {
                offset.manhattan() == 3
                    && matches!(offset.x.abs(), 1 | 2)
                    && matches!(offset.y.abs(), 1 | 2)
            }
            Rook if ctx.castling => self.castling_pattern(from, to),
            Rook => offset.is_straight(),
            Pawn => {
                // Captures step to x == 1 exactly, not |x| == 1.
                let x = if ctx.capture { 1 } else { 0 };
                offset.x == x && offset.y == self.color().forward()
            }
        }
    }

    /// Castling displacement for a rook: along its color's back row,
    /// queenside (col 0 -> 3) or kingside (col 7 -> 5).
    fn castling_pattern(&self, from: Square, to: Square) -> bool {
        if !from.is_back_row(self.color()) || !to.is_back_row(self.color()) {
            return false;
        }
        (from.col() == 0 && to.col() == 3) || (from.col() == 7 && to.col() == 5)
    }
}

/// Immutable record of one applied move, created at apply time and held
/// by the move history so the move can be reversed later. Castling
/// relocates two pieces, so the record optionally carries the king's
/// companion displacement.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Move {
    from: Square,
    to: Square,
    player: Color,
    piece: Material,
    captured: Option<Material>,
    companion: Option<Companion>,
}

/// The second displacement of a castling move (the king's).
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct Companion {
    from: Square,
    to: Square,
    piece: Material,
}

impl Companion {
    pub fn new(from: Square, to: Square, piece: Material) -> Self {
        Self { from, to, piece }
    }
    #[inline]
    pub fn from(&self) -> Square {
        self.from
    }
    #[inline]
    pub fn to(&self) -> Square {
        self.to
    }
    #[inline]
    pub fn piece(&self) -> Material {
        self.piece
    }
}

impl Move {
    /// `piece` and `captured` are pre-move snapshots.
    pub fn new(from: Square, to: Square, piece: Material, captured: Option<Material>) -> Self {
        Self {
            from,
            to,
            player: piece.color(),
            piece,
            captured,
            companion: None,
        }
    }

    pub fn castling(from: Square, to: Square, rook: Material, companion: Companion) -> Self {
        Self {
            from,
            to,
            player: rook.color(),
            piece: rook,
            captured: None,
            companion: Some(companion),
        }
    }

    #[inline]
    pub fn from(&self) -> Square {
        self.from
    }
    #[inline]
    pub fn to(&self) -> Square {
        self.to
    }
    #[inline]
    pub fn player(&self) -> Color {
        self.player
    }
    #[inline]
    pub fn piece(&self) -> Material {
        self.piece
    }
    #[inline]
    pub fn captured(&self) -> Option<Material> {
        self.captured
    }
    #[inline]
    pub fn companion(&self) -> Option<Companion> {
        self.companion
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::MoveContext as Ctx;

    fn allows(material: Material, from: (usize, usize), to: (usize, usize), ctx: Ctx) -> bool {
        material.pattern_allows(
            Square::new(from.0, from.1),
            Square::new(to.0, to.1),
            ctx,
        )
    }

    #[test]
    fn test_king_orthogonal_steps() {
        for to in [(4, 5), (4, 3), (3, 4), (5, 4)] {
            assert!(allows(Material::WK, (4, 4), to, Ctx::default()));
        }
    }
    #[test]
    fn test_king_rejects_diagonal_steps() {
        // Known deviation from standard chess: the single-step rule is a
        // Manhattan-distance check, so diagonal steps (distance 2) fail.
        for to in [(5, 5), (3, 3), (5, 3), (3, 5)] {
            assert!(!allows(Material::WK, (4, 4), to, Ctx::default()));
        }
    }
    #[test]
    fn test_king_rejects_long_moves() {
        assert!(!allows(Material::WK, (4, 4), (4, 6), Ctx::default()));
        assert!(!allows(Material::WK, (4, 4), (6, 4), Ctx::default()));
    }
    #[test]
    fn test_queen_lines() {
        assert!(allows(Material::WQ, (3, 0), (3, 5), Ctx::default()));
        assert!(allows(Material::WQ, (3, 0), (0, 0), Ctx::default()));
        assert!(allows(Material::WQ, (3, 0), (6, 3), Ctx::default()));
        assert!(!allows(Material::WQ, (3, 0), (5, 1), Ctx::default()));
        assert!(!allows(Material::WQ, (3, 0), (3, 0), Ctx::default()));
    }
    #[test]
    fn test_bishop_diagonals_only() {
        assert!(allows(Material::WB, (2, 0), (5, 3), Ctx::default()));
        assert!(allows(Material::BB, (5, 7), (1, 3), Ctx::default()));
        assert!(!allows(Material::WB, (2, 0), (2, 4), Ctx::default()));
        assert!(!allows(Material::WB, (2, 0), (4, 1), Ctx::default()));
    }
    #[test]
    fn test_knight_l_shape() {
        for to in [(2, 5), (2, 3), (6, 5), (6, 3), (3, 6), (5, 6), (3, 2), (5, 2)] {
            assert!(allows(Material::WN, (4, 4), to, Ctx::default()));
        }
        // distance 3 but not an L
        assert!(!allows(Material::WN, (4, 4), (4, 7), Ctx::default()));
        assert!(!allows(Material::WN, (4, 4), (7, 4), Ctx::default()));
        assert!(!allows(Material::WN, (4, 4), (5, 5), Ctx::default()));
    }
    #[test]
    fn test_rook_straight_lines() {
        assert!(allows(Material::WR, (0, 0), (0, 6), Ctx::default()));
        assert!(allows(Material::WR, (0, 0), (5, 0), Ctx::default()));
        assert!(!allows(Material::WR, (0, 0), (3, 3), Ctx::default()));
        assert!(!allows(Material::WR, (0, 0), (0, 0), Ctx::default()));
    }
    #[test]
    fn test_rook_castling_pattern() {
        assert!(allows(Material::WR, (0, 0), (3, 0), Ctx::castling()));
        assert!(allows(Material::WR, (7, 0), (5, 0), Ctx::castling()));
        assert!(allows(Material::BR, (0, 7), (3, 7), Ctx::castling()));
        assert!(allows(Material::BR, (7, 7), (5, 7), Ctx::castling()));
        // wrong destination column
        assert!(!allows(Material::WR, (0, 0), (2, 0), Ctx::castling()));
        // wrong row for the color
        assert!(!allows(Material::WR, (0, 7), (3, 7), Ctx::castling()));
        assert!(!allows(Material::BR, (0, 0), (3, 0), Ctx::castling()));
        // not from an edge column
        assert!(!allows(Material::WR, (3, 0), (5, 0), Ctx::castling()));
    }
    #[test]
    fn test_pawn_single_step_forward() {
        assert!(allows(Material::WP, (0, 1), (0, 2), Ctx::default()));
        assert!(allows(Material::BP, (0, 6), (0, 5), Ctx::default()));
        // no double-step, no backward, no sideways
        assert!(!allows(Material::WP, (0, 1), (0, 3), Ctx::default()));
        assert!(!allows(Material::WP, (0, 2), (0, 1), Ctx::default()));
        assert!(!allows(Material::WP, (0, 1), (1, 1), Ctx::default()));
        assert!(!allows(Material::BP, (0, 6), (0, 4), Ctx::default()));
    }
    #[test]
    fn test_pawn_capture_is_literal_x_plus_one() {
        assert!(allows(Material::WP, (4, 1), (5, 2), Ctx::capture()));
        assert!(allows(Material::BP, (4, 6), (5, 5), Ctx::capture()));
        // x == -1 fails the literal x == 1 comparison
        assert!(!allows(Material::WP, (4, 1), (3, 2), Ctx::capture()));
        assert!(!allows(Material::BP, (4, 6), (3, 5), Ctx::capture()));
        // straight push is not a capture
        assert!(!allows(Material::WP, (4, 1), (4, 2), Ctx::capture()));
    }
    #[test]
    fn test_move_record_snapshots() {
        let mv = Move::new(
            Square::new(0, 1),
            Square::new(1, 2),
            Material::WP,
            Some(Material::BN),
        );
        assert_eq!(mv.player(), Color::White);
        assert_eq!(mv.piece(), Material::WP);
        assert_eq!(mv.captured(), Some(Material::BN));
        assert!(mv.companion().is_none());
    }
}
