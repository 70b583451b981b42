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
use std::fmt;
use std::ops::Sub;

use super::material::Color;

use Color::*;

/// A coordinate on the 8-by-8 board. Columns and rows both run 0..=7;
/// (0,0) is White's queenside rook square and row 7 is Black's back row.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    col: usize,
    row: usize,
}

impl Square {
    #[inline]
    pub const fn new(col: usize, row: usize) -> Self {
        debug_assert!(col < 8 && row < 8);
        Self { col, row }
    }
    #[inline]
    pub fn try_from_chars(c: char, r: char) -> Option<Self> {
        let col = Self::try_digit(c)?;
        let row = Self::try_digit(r)?;
        Some(Self::new(col, row))
    }
    #[inline]
    fn try_digit(c: char) -> Option<usize> {
        match c {
            '0'..='7' => Some((c as usize) - ('0' as usize)),
            _ => None,
        }
    }

    #[inline]
    pub const fn col(&self) -> usize {
        self.col
    }
    #[inline]
    pub const fn row(&self) -> usize {
        self.row
    }
    #[inline]
    pub fn is_back_row(&self, color: Color) -> bool {
        self.row == Self::back_row(color)
    }
    #[inline]
    pub const fn back_row(color: Color) -> usize {
        match color {
            White => 0,
            Black => 7,
        }
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.col, self.row)
    }
}

/// The displacement between two squares. Obtained by subtracting one
/// `Square` from another; movement predicates are written in terms of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Offset {
    pub x: isize,
    pub y: isize,
}

impl Offset {
    pub const fn new(x: isize, y: isize) -> Self {
        Self { x, y }
    }

    /// Manhattan distance |x| + |y|.
    #[inline]
    pub const fn manhattan(&self) -> usize {
        (self.x.abs() + self.y.abs()) as usize
    }
    #[inline]
    pub const fn is_diagonal(&self) -> bool {
        self.x != 0 && self.y != 0 && self.x.abs() == self.y.abs()
    }
    #[inline]
    pub const fn is_straight(&self) -> bool {
        (self.x == 0) != (self.y == 0)
    }
}

impl Sub for Square {
    type Output = Offset;
    fn sub(self, rhs: Self) -> Self::Output {
        Offset::new(
            self.col as isize - rhs.col as isize,
            self.row as isize - rhs.row as isize,
        )
    }
}
