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

use thiserror::Error;

use super::moves::Move;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum HistoryError {
    #[error("No move history.")]
    Empty,
}

/// Last-in-first-out log of applied moves with a fixed capacity. Pushing
/// beyond capacity silently overwrites the oldest unpopped record; there
/// is no growth and no push error. Undo depth is therefore bounded by the
/// capacity chosen at construction.
#[derive(Debug, Clone)]
pub struct MoveHistory {
    slots: Box<[Option<Move>]>,
    head: usize,
    len: usize,
}

impl MoveHistory {
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "MoveHistory capacity must be nonzero");
        Self {
            // head pre-positioned so the first push lands in slot 0
            slots: vec![None; capacity].into_boxed_slice(),
            head: capacity - 1,
            len: 0,
        }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Always succeeds; on overflow the oldest unpopped record is lost.
    pub fn push(&mut self, record: Move) {
        self.head = (self.head + 1) % self.capacity();
        self.slots[self.head] = Some(record);
        if self.len < self.capacity() {
            self.len += 1;
        }
    }

    /// Removes and returns the most recently pushed record not yet popped.
    pub fn pop(&mut self) -> Result<Move, HistoryError> {
        if self.len == 0 {
            return Err(HistoryError::Empty);
        }
        let record = self.slots[self.head].take().ok_or(HistoryError::Empty)?;
        self.head = (self.head + self.capacity() - 1) % self.capacity();
        self.len -= 1;
        Ok(record)
    }
}
