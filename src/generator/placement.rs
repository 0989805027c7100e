/*
placement.rs

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

//! Commit words into the grid.

use log::debug;
use serde::{Deserialize, Serialize};

use super::direction::{Direction, DirectionSet};
use super::grid::{ChunkError, ChunkGrid};
use super::letters;

/// A word placed in the chunk.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct WordRecord {
    /// Word as it appears in the dictionary.
    pub word: String,

    /// Cell where the placement started.
    pub start: (usize, usize),

    /// Last cell covered by the word: `start + (len - 1) * direction`.
    pub end: (usize, usize),

    /// Direction from `start` to `end`.
    pub direction: Direction,
}

impl WordRecord {
    /// Cells covered by the word, from `start` to `end`.
    pub fn cells(&self) -> Vec<(usize, usize)> {
        let (di, dk) = self.direction.vector();
        (0..self.word.chars().count() as i64)
            .map(|step| {
                (
                    (self.start.0 as i64 + step * di) as usize,
                    (self.start.1 as i64 + step * dk) as usize,
                )
            })
            .collect()
    }
}

impl ChunkGrid {
    /// Write `word` from `cell` along `direction` and consume that axis on every covered cell.
    ///
    /// The letters are written in reverse order for the directions of the reversed half, which
    /// mirrors how the key was built.
    ///
    /// # Errors
    ///
    /// The method returns an error, without modifying the grid, if the word contains other
    /// characters than ASCII letters or if it does not fit in the grid.
    pub fn add_word(
        &mut self,
        cell: (usize, usize),
        word: &str,
        direction: Direction,
    ) -> Result<WordRecord, ChunkError> {
        let mut codes: Vec<u8> = word
            .chars()
            .map(letters::letter_to_code)
            .collect::<Option<Vec<u8>>>()
            .ok_or_else(|| ChunkError::InvalidWord(word.to_string()))?;
        if codes.is_empty() {
            return Err(ChunkError::InvalidWord(word.to_string()));
        }
        if direction.is_reversed() {
            codes.reverse();
        }

        let cells: Vec<(usize, usize)> = (0..codes.len())
            .map(|step| direction.step(cell, step, self.size))
            .collect::<Option<Vec<(usize, usize)>>>()
            .ok_or_else(|| ChunkError::InvalidWord(word.to_string()))?;

        for (c, code) in cells.iter().zip(codes) {
            self.set_letter_code(*c, code);
            self.mark_word(*c);
            let available: &mut DirectionSet = self.directions_mut(*c);
            available.remove(direction);
            available.remove(direction.opposite());
        }

        let record: WordRecord = WordRecord {
            word: word.to_string(),
            start: cell,
            end: cells[cells.len() - 1],
            direction,
        };
        debug!(
            "    Added {:?} from {:?} to {:?} ({})",
            record.word, record.start, record.end, record.direction
        );
        Ok(record)
    }

    /// Read the word stored from `start` along `direction`, undoing the reversal applied when it
    /// was written.
    pub fn read_word(&self, start: (usize, usize), direction: Direction, length: usize) -> String {
        let mut word: String = (0..length)
            .filter_map(|step| direction.step(start, step, self.size))
            .map(|c| self.letter(c))
            .collect();
        if direction.is_reversed() {
            word = word.chars().rev().collect();
        }
        word
    }
}
