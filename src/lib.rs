/*
lib.rs

Copyright 2026 The Wordchunk contributors

This file is part of Wordchunk.

Wordchunk is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Wordchunk is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Wordchunk. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Deterministic word-search chunks that tile an infinite plane.
//!
//! See [`generator`] for the generation algorithm, [`api`] for the response served to the
//! puzzle front end, and [`saver`] for storing responses.

pub mod api;
pub mod config;
pub mod generator;
pub mod saver;

pub use generator::chunk::{Chunk, ChunkReport};
pub use generator::dictionary::Dictionary;
pub use generator::grid::ChunkError;
pub use generator::placement::WordRecord;
