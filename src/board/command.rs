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

use anyhow::Result;
use std::str::FromStr;
use thiserror::Error;

use super::material::Material;
use super::moves::{MoveError, MoveKind, Promotion};
use super::square::Square;

/// User-input rejections. These are reported as values with display text
/// ready for the player; the board is never mutated when one is returned.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CommandError {
    #[error("Invalid move. Please enter your move in the following format: __ __, _ represents a digit.")]
    Format,
    #[error("Invalid move. Move digits should be 0-7.")]
    OutOfRange,
    #[error("Invalid move. Please make a valid move.")]
    Illegal,
}

/// Parse a move command in the exact format `"CR CR"`: two two-character
/// coordinate tokens (column digit then row digit, each '0'..='7')
/// separated by a single space.
pub fn parse_move(input: &str) -> Result<(Square, Square)> {
    let chars: Vec<char> = input.chars().collect();
    if chars.len() != 5 || chars[2] != ' ' {
        return Err(CommandError::Format.into());
    }
    if ![chars[0], chars[1], chars[3], chars[4]]
        .iter()
        .all(char::is_ascii_digit)
    {
        return Err(CommandError::Format.into());
    }
    let from = Square::try_from_chars(chars[0], chars[1]).ok_or(CommandError::OutOfRange)?;
    let to = Square::try_from_chars(chars[3], chars[4]).ok_or(CommandError::OutOfRange)?;
    Ok((from, to))
}

/// Status text for an applied move, e.g. `white pawn 01 -> 02`,
/// `white pawn 41 -> 52 captures black knight`, `white rook 00 -> 30
/// (castling)`. Built from pre-move snapshots.
pub(crate) fn describe_move(
    mover: &Material,
    from: Square,
    to: Square,
    kind: MoveKind,
    captured: Option<&Material>,
) -> String {
    let mut text = format!("{mover} {from} -> {to}");
    match kind {
        MoveKind::Capture => {
            if let Some(captured) = captured {
                text.push_str(&format!(" captures {captured}"));
            }
        }
        MoveKind::Castling => text.push_str(" (castling)"),
        MoveKind::Normal => {}
    }
    text
}

impl FromStr for Promotion {
    type Err = MoveError;

    /// Promotion selection uses the literal piece names; anything else is
    /// a caller-side programming error, not a user-facing rejection.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Queen" => Ok(Promotion::Queen),
            "Rook" => Ok(Promotion::Rook),
            "Bishop" => Ok(Promotion::Bishop),
            "Knight" => Ok(Promotion::Knight),
            other => Err(MoveError::UnknownPromotion(other.to_string())),
        }
    }
}
