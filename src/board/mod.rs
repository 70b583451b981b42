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

//! Two-player chess rules engine
//!
//! A _board_ tracks one game: the position, whose turn it is, the
//! bounded undo history, and the winner once a king is captured. The
//! request-handling layer above it is a thin collaborator: it feeds the
//! board a textual move command and renders the snapshot and status text
//! the board reports back.
//!
//! Some of the key abstractions include:
//!
//! * A `Square` is a (column, row) coordinate with both components in
//!   0..=7. (0,0) is White's queenside rook square; row 7 is rendered at
//!   the top. Subtracting two squares yields an `Offset`, the
//!   displacement the movement predicates are written against.
//!
//! * `Material` is a piece of a specific color plus its moved flag. A
//!   `Piece` has six variants: `King`, `Queen`, `Rook`, `Bishop`,
//!   `Knight` and `Pawn`. `Color` is either `White` or `Black`. Each
//!   material knows its own movement pattern (`pattern_allows`) and its
//!   display glyph; occupancy rules belong to the board. Note that in
//!   order to support pawn promotion there's another type called
//!   `Promotion` with only four variants, convertible to `Piece` via
//!   `From<Promotion>` and parsed from the literal selection names with
//!   `FromStr`.
//!
//! * A `Move` is the immutable record of one applied move: start, end,
//!   mover color and pre-move snapshots of the mover and any captured
//!   piece. Castling relocates two pieces, so its record carries the
//!   king's companion displacement as well. Records live in a
//!   `MoveHistory`, a fixed-capacity ring buffer whose overflow silently
//!   drops the oldest record; undo pops the newest.
//!
//! * `Board` orchestrates everything: `classify_move` sorts a proposed
//!   move into normal/capture/castling or rejects it as a value,
//!   `apply_move` mutates the position and pushes the record, `undo`
//!   narrowly reverses a record's position changes, and `promote_pawns`
//!   probes for or applies promotions on the far ranks. Turn flipping is
//!   a separate, explicit step (`next_turn`) driven by the caller, as is
//!   refusing input once a winner is set.
//!
//! There is deliberately no check, checkmate or draw detection: the game
//! ends when a king is actually captured. The `checkmate` accessor is a
//! display slot only and is never populated.

use anyhow::Result;
use log::debug;

mod command;
mod history;
mod material;
mod moves;
mod position;
mod square;

pub use command::*;
pub use history::*;
pub use material::*;
pub use moves::*;
pub use position::*;
pub use square::*;

use material::Color::*;
use moves::MoveKind::*;

pub trait Turn {
    fn turn(&self) -> Color;
}

/// Undo depth. Older moves fall off the end of the history silently.
pub const HISTORY_CAPACITY: usize = 10;

/// One game of chess. Create a board, call [`Board::start`], then drive
/// it with [`Board::submit`] (or `classify_move`/`apply_move` directly),
/// [`Board::next_turn`], [`Board::promote_pawns`] and
/// [`Board::undo_last`].
#[derive(Debug, Clone)]
pub struct Board {
    position: Position,
    turn: Color,
    winner: Option<Color>,
    checkmate: Option<Color>,
    info: Option<String>,
    history: MoveHistory,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Turn for Board {
    #[inline]
    fn turn(&self) -> Color {
        self.turn
    }
}

impl AsRef<Position> for Board {
    fn as_ref(&self) -> &Position {
        &self.position
    }
}

impl Board {
    /// An empty board. Call [`Board::start`] to lay out a game.
    pub fn new() -> Self {
        Self {
            position: Position::new(),
            turn: White,
            winner: None,
            checkmate: None,
            info: None,
            history: MoveHistory::new(HISTORY_CAPACITY),
        }
    }

    /// Start a game: standard layout, every piece unmoved, White to move.
    /// The move history is not cleared; it lives as long as the board.
    pub fn start(&mut self) {
        self.position.reset_standard();
        self.turn = White;
        self.winner = None;
        self.checkmate = None;
        self.info = None;
    }

    #[inline]
    pub fn get_piece(&self, square: Square) -> Option<&Material> {
        self.position.get(square)
    }
    #[inline]
    pub fn winner(&self) -> Option<Color> {
        self.winner
    }
    /// Display slot only; this engine never computes checkmate.
    #[inline]
    pub fn checkmate(&self) -> Option<Color> {
        self.checkmate
    }
    /// Status text describing the most recent action.
    #[inline]
    pub fn info(&self) -> Option<&str> {
        self.info.as_deref()
    }
    /// Whether there is anything to undo; the caller uses this to decide
    /// whether to offer an undo action.
    #[inline]
    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    pub fn next_turn(&mut self) {
        self.turn = !self.turn;
    }

    /// Sort a proposed move into its kind, or `None` for an invalid move.
    /// Invalid moves are values, not errors; the only hard error here is
    /// the castling-column contract violation.
    ///
    /// Precedence: the mover must exist and belong to the turn color; an
    /// occupied destination is a capture (pattern-checked, with the pawn
    /// capture context) or invalid; an empty destination is castling if
    /// the rook's castling pattern, unmoved king and rook, and a clear
    /// lane all hold, else a normal pattern move, else invalid.
    pub fn classify_move(&self, from: Square, to: Square) -> Result<Option<MoveKind>> {
        let Some(mover) = self.position.get(from) else {
            return Ok(None);
        };
        if mover.color() != self.turn {
            return Ok(None);
        }
        if let Some(target) = self.position.get(to) {
            if target.color() != mover.color()
                && mover.pattern_allows(from, to, MoveContext::capture())
            {
                return Ok(Some(Capture));
            }
            return Ok(None);
        }
        if mover.piece().is_rook()
            && mover.pattern_allows(from, to, MoveContext::castling())
            && self.castling_ready(from)
            && self.castling_lane_clear(from)?
        {
            return Ok(Some(Castling));
        }
        if mover.pattern_allows(from, to, MoveContext::default()) {
            return Ok(Some(Normal));
        }
        Ok(None)
    }

    /// King on its home square and both it and the rook still unmoved.
    fn castling_ready(&self, rook_at: Square) -> bool {
        let king_square = Square::new(4, rook_at.row());
        match (self.position.get(king_square), self.position.get(rook_at)) {
            (Some(king), Some(rook)) => {
                king.piece().is_king() && !king.has_moved() && !rook.has_moved()
            }
            _ => false,
        }
    }

    /// No piece strictly between king and rook on the castling side.
    /// Errors on a rook square off the edge columns; `classify_move`
    /// never produces that, but direct callers can.
    fn castling_lane_clear(&self, rook_at: Square) -> Result<bool> {
        let row = rook_at.row();
        let lane: &[usize] = match rook_at.col() {
            0 => &[1, 2, 3],
            7 => &[5, 6],
            _ => return Err(MoveError::CastlingColumn(rook_at).into()),
        };
        Ok(lane
            .iter()
            .all(|&col| self.position.get(Square::new(col, row)).is_none()))
    }

    /// Apply a validated move: mutate the position, set the status text,
    /// push the undo record and re-evaluate the winner. Errors with
    /// [`MoveError::InvalidMove`] if classification rejects the move.
    pub fn apply_move(&mut self, from: Square, to: Square) -> Result<MoveKind> {
        let kind = self
            .classify_move(from, to)?
            .ok_or(MoveError::InvalidMove)?;
        let mover = *self.position.get(from).ok_or(MoveError::InvalidMove)?;
        let captured = self.position.get(to).copied();
        self.info = Some(describe_move(&mover, from, to, kind, captured.as_ref()));

        let record = match kind {
            Normal => {
                self.position.relocate(from, to);
                Move::new(from, to, mover, None)
            }
            Capture => {
                self.position.remove(to);
                self.position.relocate(from, to);
                Move::new(from, to, mover, captured)
            }
            Castling => {
                let row = from.row();
                let king_from = Square::new(4, row);
                let king_to = match from.col() {
                    0 => Square::new(2, row),
                    _ => Square::new(6, row),
                };
                // snapshot before either piece moves so the record can
                // reverse both relocations
                let king = *self.position.get(king_from).ok_or(MoveError::InvalidMove)?;
                self.position.relocate(from, to);
                self.position.relocate(king_from, king_to);
                Move::castling(from, to, mover, Companion::new(king_from, king_to, king))
            }
        };
        debug!("applied {kind:?}: {}", self.info.as_deref().unwrap_or(""));
        self.history.push(record);
        self.update_winner();
        Ok(kind)
    }

    /// The textual boundary: parse a `"CR CR"` command, reject user
    /// errors as [`CommandError`] values without touching any state, and
    /// apply the move otherwise.
    pub fn submit(&mut self, input: &str) -> Result<MoveKind> {
        let (from, to) = parse_move(input)?;
        if self.classify_move(from, to)?.is_none() {
            return Err(CommandError::Illegal.into());
        }
        self.apply_move(from, to)
    }

    /// Narrow positional reversal of a previously applied move: the mover
    /// returns to its start square, any captured piece is restored at the
    /// end square, and a castling companion is walked back the same way.
    /// Moved flags, the turn and the winner are left alone; flipping the
    /// turn back is the caller's step.
    pub fn undo(&mut self, record: &Move) {
        debug!("undo {} {} -> {}", record.piece(), record.from(), record.to());
        if let Some(companion) = record.companion() {
            self.position.relocate(companion.to(), companion.from());
        }
        self.position.relocate(record.to(), record.from());
        if let Some(captured) = record.captured() {
            self.position.insert(record.to(), captured);
        }
    }

    /// Pop the most recent move off the history and reverse it. Undoing
    /// with an empty history is a contract violation, not a user error.
    pub fn undo_last(&mut self) -> Result<Move> {
        let record = self.history.pop()?;
        self.undo(&record);
        Ok(record)
    }

    /// With `None`: probe, returning whether any pawn stands on its far
    /// rank (row 7 for white, row 0 for black) without mutating. With a
    /// kind: promote every such pawn to that kind, same color, marked
    /// moved, recording a status message per promotion; returns whether
    /// any pawn was promoted.
    pub fn promote_pawns(&mut self, kind: Option<Promotion>) -> bool {
        let eligible: Vec<Square> = self
            .position
            .iter()
            .filter(|(square, material)| {
                material.piece().is_pawn() && square.row() == Square::back_row(!material.color())
            })
            .map(|(square, _)| square)
            .collect();
        let Some(kind) = kind else {
            return !eligible.is_empty();
        };
        for &square in &eligible {
            if let Some(pawn) = self.position.get_mut(square) {
                pawn.promote_to(kind.into());
                self.info = Some(format!(
                    "Promoted pawn at ({},{}) to {}",
                    square.col(),
                    square.row(),
                    Piece::from(kind)
                ));
            }
        }
        !eligible.is_empty()
    }

    /// A color with no king on the board has lost, effective the moment
    /// the capture lands.
    fn update_winner(&mut self) {
        if !self.position.alive(White, Piece::King) {
            self.winner = Some(Black);
        } else if !self.position.alive(Black, Piece::King) {
            self.winner = Some(White);
        }
    }

    /// Display-ready snapshot: a header row of column labels, then rows 7
    /// down to 0, each led by its row label. Cells hold piece glyphs or
    /// the literal absence marker `"None"`.
    pub fn render(&self) -> Vec<Vec<String>> {
        let mut grid = Vec::with_capacity(9);
        let mut header: Vec<String> = vec![" ".to_string()];
        header.extend((0..8).map(|col| col.to_string()));
        grid.push(header);
        for row in (0..8).rev() {
            let mut cells: Vec<String> = vec![row.to_string()];
            for col in 0..8 {
                let cell = match self.position.get(Square::new(col, row)) {
                    Some(material) => material.glyph().to_string(),
                    None => "None".to_string(),
                };
                cells.push(cell);
            }
            grid.push(cells);
        }
        grid
    }
}

#[cfg(test)]
impl Board {
    pub(crate) fn position_mut(&mut self) -> &mut Position {
        &mut self.position
    }
    fn started() -> Self {
        let mut board = Self::new();
        board.start();
        board
    }
    fn set_piece(mut self, square: Square, material: Material) -> Self {
        self.position.insert(square, material);
        self
    }
    fn clear_square(mut self, square: Square) -> Self {
        self.position.remove(square);
        self
    }
    fn set_turn(mut self, turn: Color) -> Self {
        self.turn = turn;
        self
    }
}
