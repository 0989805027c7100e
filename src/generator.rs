/*
generator.rs

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

//! Generate word-search chunks.
//!
//! A chunk is a square grid of letters holding hidden words. Chunks tile an infinite plane: the
//! chunk `(x, y)` for a given global seed and size is always the same, and two adjacent chunks
//! share the letters of their common edge.
//!
//! Generating a chunk goes through the following steps:
//!
//! * [`chunk::Chunk::new`] derives the seed streams ([`seed`]) and builds the grid state
//!   ([`grid::ChunkGrid`]): border classification, letters, and available directions.
//! * [`chunk::Chunk::generate`] repeatedly picks a random cell and:
//!   - prunes the directions in which a word of a random length can start
//!     ([`grid::ChunkGrid::vector_set`]),
//!   - builds a key with the letters already fixed along a random direction
//!     ([`grid::ChunkGrid::key_create`]),
//!   - looks for matching words ([`dictionary::Dictionary::pattern_match`]),
//!   - writes a random match into the grid ([`grid::ChunkGrid::add_word`]).
//!
//!   The loop stops when enough words are placed or when the number of failed attempts reaches
//!   the failure budget. Stopping on the failure budget is normal: the chunk simply holds fewer
//!   words.

pub mod chunk;
pub mod constraints;
pub mod dictionary;
pub mod direction;
pub mod grid;
pub mod key;
pub mod letters;
pub mod placement;
pub mod seed;
