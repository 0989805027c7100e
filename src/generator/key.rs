/*
key.rs

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

//! Build the search key for a candidate word.
//!
//! A key is a pattern such as `.A..E`: letters that are already fixed in the grid, and
//! [`WILDCARD`] for the free cells.

use log::debug;
use rand::Rng;
use rand::seq::IteratorRandom;
use rand_chacha::ChaCha8Rng;

use super::direction::Direction;
use super::grid::{BorderClass, ChunkGrid};

/// Character standing for a free cell in a key.
pub const WILDCARD: char = '.';

/// Search key and the direction that was selected for it.
#[derive(Debug, Clone, PartialEq)]
pub struct Key {
    /// Pattern in reading order.
    pub pattern: String,

    /// Direction from the starting cell.
    pub direction: Direction,
}

impl ChunkGrid {
    /// Build a key starting at `cell` with a random length and a random direction.
    ///
    /// Return `None` when no word of the drawn length can start from the cell, or when the grid
    /// is too small for words of `min_length` letters.
    pub fn key_create(
        &mut self,
        rng: &mut ChaCha8Rng,
        cell: (usize, usize),
        min_length: usize,
    ) -> Option<Key> {
        let max_length: usize = self.size - 1;
        if max_length < min_length {
            return None;
        }
        let length: usize = rng.random_range(min_length..=max_length);

        if !self.vector_set(cell, length) {
            debug!("    No direction for length {length} at {cell:?}");
            return None;
        }

        let direction: Direction = self.directions(cell).iter().choose(rng)?;
        Some(self.key_along(cell, direction, length))
    }

    /// Build the key of `length` letters from `cell` along `direction`.
    ///
    /// Cells that belong to a word or to the border keep their letter; the other cells become
    /// wildcards. The pattern is reversed for the directions of the reversed half.
    pub fn key_along(&self, cell: (usize, usize), direction: Direction, length: usize) -> Key {
        let mut pattern: String = (0..length)
            .filter_map(|step| direction.step(cell, step, self.size))
            .map(|c| {
                if self.is_word(c) || self.border(c) != BorderClass::Interior {
                    self.letter(c)
                } else {
                    WILDCARD
                }
            })
            .collect();
        if direction.is_reversed() {
            pattern = pattern.chars().rev().collect();
        }
        Key { pattern, direction }
    }
}
