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

//! Rules engine for a two-player, hot-seat game of chess.
//!
//! See the [`board`] module for the engine itself and [`game`] for the
//! per-session handles a serving layer owns. The serving layer (web
//! routing, templating) lives outside this crate; its whole contract is
//! a textual move command in and a rendered snapshot plus status text
//! out.

pub mod board;
pub mod game;

pub use board::*;
pub use game::*;
