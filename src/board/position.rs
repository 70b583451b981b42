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

use once_cell::sync::Lazy;
use std::collections::HashMap;
use strum::IntoEnumIterator;

use super::material::{Color, Material, Piece};
use super::square::Square;

use Piece::*;

/// Back-row piece order from column 0 to column 7, identical for both
/// colors.
const BACK_ROW: [Piece; 8] = [Rook, Knight, Bishop, Queen, King, Bishop, Knight, Rook];

static STARTING_LAYOUT: Lazy<Vec<(Square, Material)>> = Lazy::new(|| {
    let mut layout = Vec::with_capacity(32);
    for color in Color::iter() {
        let back = Square::back_row(color);
        let pawns = back.wrapping_add_signed(color.forward());
        for (col, &piece) in BACK_ROW.iter().enumerate() {
            layout.push((Square::new(col, back), Material::new(color, piece)));
        }
        for col in 0..8 {
            layout.push((Square::new(col, pawns), Material::new(color, Pawn)));
        }
    }
    layout
});

/// The contents of the board: a mapping from squares to pieces, with at
/// most one piece per square. Turn and outcome state live on the board
/// that owns this position.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Position {
    squares: HashMap<Square, Material>,
}

impl Position {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset to the standard starting layout; every piece starts with its
    /// moved flag clear.
    pub fn reset_standard(&mut self) {
        self.squares.clear();
        for &(square, material) in STARTING_LAYOUT.iter() {
            self.squares.insert(square, material);
        }
    }

    #[inline]
    pub fn get(&self, square: Square) -> Option<&Material> {
        self.squares.get(&square)
    }
    #[inline]
    pub fn get_mut(&mut self, square: Square) -> Option<&mut Material> {
        self.squares.get_mut(&square)
    }
    #[inline]
    pub fn insert(&mut self, square: Square, material: Material) {
        self.squares.insert(square, material);
    }
    #[inline]
    pub fn remove(&mut self, square: Square) -> Option<Material> {
        self.squares.remove(&square)
    }
    #[inline]
    pub fn len(&self) -> usize {
        self.squares.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.squares.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Square, &Material)> {
        self.squares.iter().map(|(square, material)| (*square, material))
    }

    /// Move the piece at `from` to `to`, marking it moved. No-op when
    /// `from` is empty; callers validate occupancy beforehand.
    pub fn relocate(&mut self, from: Square, to: Square) {
        if let Some(mut material) = self.squares.remove(&from) {
            material.mark_moved();
            self.squares.insert(to, material);
        }
    }

    /// Whether any piece of the given color and kind remains on the board.
    pub fn alive(&self, color: Color, piece: Piece) -> bool {
        self.squares
            .values()
            .any(|material| material.color() == color && material.piece() == piece)
    }
}
