/*
grid.rs

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

//! Per-cell state of a chunk.
//!
//! [`ChunkGrid`] groups the tables that the placement pipeline reads and updates:
//!
//! * the border classification of each cell, computed once,
//! * the letter codes, derived from the cell coordinates on the infinite plane,
//! * the set of directions still available for placing words through each cell,
//! * whether a cell is already part of a word,
//! * a weight table, which no placement logic reads. It is kept because generating it consumes
//!   values from the chunk generator, and the following random choices depend on that.

use log::{Level, debug, log_enabled};
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::direction::{Direction, DirectionSet};
use super::letters;
use super::seed;

/// Type of errors.
#[derive(Error, Debug, PartialEq)]
pub enum ChunkError {
    /// The grid is too small to have an interior.
    #[error("chunk size {0} is too small (the minimum is 2)")]
    SizeTooSmall(usize),

    /// The word cannot be written in the grid.
    #[error("cannot write the word {0:?} in the grid")]
    InvalidWord(String),
}

/// Classification of a cell according to its position in the grid.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum BorderClass {
    #[default]
    Interior = 0,
    TopBottom = 1,
    LeftRight = 2,
    Corner = 3,
}

impl BorderClass {
    /// Classify the cell `(i, k)` of a grid of `size` x `size` cells.
    pub fn classify(i: usize, k: usize, size: usize) -> Self {
        let last: usize = size - 1;
        let row_edge: bool = i == 0 || i == last;
        let col_edge: bool = k == 0 || k == last;
        match (row_edge, col_edge) {
            (true, true) => BorderClass::Corner,
            (false, true) => BorderClass::LeftRight,
            (true, false) => BorderClass::TopBottom,
            (false, false) => BorderClass::Interior,
        }
    }
}

/// Grid state of a chunk.
#[derive(Debug, Clone)]
pub struct ChunkGrid {
    /// Number of rows and columns.
    pub size: usize,

    /// Border classification of each cell.
    border_mask: Vec<Vec<BorderClass>>,

    /// Letter codes, between 1 and 26.
    letters: Vec<Vec<u8>>,

    /// Directions still available for placing a word through each cell.
    vectors: Vec<Vec<DirectionSet>>,

    /// Whether each cell belongs to a placed word.
    is_word: Vec<Vec<bool>>,

    /// Vestigial weights between 1 and 9.
    weights: Vec<Vec<u8>>,
}

impl ChunkGrid {
    /// Create the grid of the chunk `(chunk_x, chunk_y)`.
    ///
    /// Letters come from the per-cell streams of `global_seed`. The weights consume `rng`, which
    /// is the chunk generator.
    ///
    /// # Errors
    ///
    /// The method returns an error if `size` is lower than 2.
    pub fn new(
        global_seed: &str,
        chunk_x: i64,
        chunk_y: i64,
        size: usize,
        rng: &mut ChaCha8Rng,
    ) -> Result<Self, ChunkError> {
        if size < 2 {
            return Err(ChunkError::SizeTooSmall(size));
        }

        let mut border_mask: Vec<Vec<BorderClass>> = Vec::with_capacity(size);
        let mut letters: Vec<Vec<u8>> = Vec::with_capacity(size);
        let mut vectors: Vec<Vec<DirectionSet>> = Vec::with_capacity(size);

        for i in 0..size {
            let mut border_row: Vec<BorderClass> = Vec::with_capacity(size);
            let mut letter_row: Vec<u8> = Vec::with_capacity(size);
            let mut vector_row: Vec<DirectionSet> = Vec::with_capacity(size);
            for k in 0..size {
                border_row.push(BorderClass::classify(i, k, size));
                let code: u32 = seed::letter_seed(
                    global_seed,
                    chunk_x,
                    chunk_y,
                    i,
                    k,
                    size,
                    letters::NUM_LETTERS as u32,
                );
                letter_row.push(code as u8);
                vector_row.push(match Self::corner_direction(i, k, size) {
                    Some(d) => DirectionSet::only(d),
                    None => DirectionSet::all(),
                });
            }
            border_mask.push(border_row);
            letters.push(letter_row);
            vectors.push(vector_row);
        }

        let weights: Vec<Vec<u8>> = (0..size)
            .map(|_| (0..size).map(|_| rng.random_range(1..10)).collect())
            .collect();

        let grid: Self = Self {
            size,
            border_mask,
            letters,
            vectors,
            is_word: vec![vec![false; size]; size],
            weights,
        };
        if log_enabled!(Level::Debug) {
            debug!("Initial letters for chunk {global_seed}:{chunk_x},{chunk_y}");
            grid.debug();
        }
        Ok(grid)
    }

    /// The single diagonal pointing into the grid from the given corner, or `None` if the cell is
    /// not a corner.
    pub fn corner_direction(i: usize, k: usize, size: usize) -> Option<Direction> {
        let last: usize = size - 1;
        match (i, k) {
            (0, 0) => Some(Direction::SouthEast),
            (0, c) if c == last => Some(Direction::SouthWest),
            (r, 0) if r == last => Some(Direction::NorthEast),
            (r, c) if r == last && c == last => Some(Direction::NorthWest),
            _ => None,
        }
    }

    pub fn border(&self, (i, k): (usize, usize)) -> BorderClass {
        self.border_mask[i][k]
    }

    /// Letter code of the cell.
    pub fn letter_code(&self, (i, k): (usize, usize)) -> u8 {
        self.letters[i][k]
    }

    /// Uppercase letter of the cell.
    pub fn letter(&self, cell: (usize, usize)) -> char {
        letters::code_to_letter(self.letter_code(cell)).unwrap_or('?')
    }

    pub(crate) fn set_letter_code(&mut self, (i, k): (usize, usize), code: u8) {
        self.letters[i][k] = code;
    }

    pub fn directions(&self, (i, k): (usize, usize)) -> DirectionSet {
        self.vectors[i][k]
    }

    pub(crate) fn directions_mut(&mut self, (i, k): (usize, usize)) -> &mut DirectionSet {
        &mut self.vectors[i][k]
    }

    pub fn is_word(&self, (i, k): (usize, usize)) -> bool {
        self.is_word[i][k]
    }

    pub(crate) fn mark_word(&mut self, (i, k): (usize, usize)) {
        self.is_word[i][k] = true;
    }

    /// Vestigial weight of the cell.
    pub fn weight(&self, (i, k): (usize, usize)) -> u8 {
        self.weights[i][k]
    }

    /// Letter codes, row by row.
    pub fn letter_codes(&self) -> &[Vec<u8>] {
        &self.letters
    }

    /// Letters as they are stored, row by row.
    pub fn rows(&self) -> Vec<String> {
        (0..self.size)
            .map(|i| (0..self.size).map(|k| self.letter((i, k))).collect())
            .collect()
    }

    /// Print the grid, marking word cells with an asterisk.
    pub fn debug(&self) {
        let mut s: String = String::new();
        for i in 0..self.size {
            s.clear();
            for k in 0..self.size {
                let mark: char = if self.is_word((i, k)) { '*' } else { ' ' };
                s.push_str(&format!(" {}{mark}", self.letter((i, k))));
            }
            debug!("{s}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(seed_name: &str, x: i64, y: i64, size: usize) -> ChunkGrid {
        let mut rng: ChaCha8Rng = seed::chunk_rng(seed_name, x, y);
        ChunkGrid::new(seed_name, x, y, size, &mut rng).unwrap()
    }

    #[test]
    fn size_below_two_is_rejected() {
        let mut rng: ChaCha8Rng = seed::chunk_rng("seed", 0, 0);
        assert_eq!(
            ChunkGrid::new("seed", 0, 0, 1, &mut rng).unwrap_err(),
            ChunkError::SizeTooSmall(1)
        );
        assert_eq!(
            ChunkGrid::new("seed", 0, 0, 0, &mut rng).unwrap_err(),
            ChunkError::SizeTooSmall(0)
        );
    }

    #[test]
    fn border_mask_classification() {
        let g: ChunkGrid = grid("seed", 0, 0, 10);
        assert_eq!(g.border((0, 0)), BorderClass::Corner);
        assert_eq!(g.border((0, 9)), BorderClass::Corner);
        assert_eq!(g.border((9, 0)), BorderClass::Corner);
        assert_eq!(g.border((9, 9)), BorderClass::Corner);
        assert_eq!(g.border((0, 4)), BorderClass::TopBottom);
        assert_eq!(g.border((9, 4)), BorderClass::TopBottom);
        assert_eq!(g.border((4, 0)), BorderClass::LeftRight);
        assert_eq!(g.border((4, 9)), BorderClass::LeftRight);
        assert_eq!(g.border((4, 4)), BorderClass::Interior);
    }

    #[test]
    fn two_by_two_grid_is_all_corners() {
        let g: ChunkGrid = grid("seed", 0, 0, 2);
        for i in 0..2 {
            for k in 0..2 {
                assert_eq!(g.border((i, k)), BorderClass::Corner);
                assert_eq!(g.directions((i, k)).len(), 1);
            }
        }
    }

    #[test]
    fn corners_start_with_their_inward_diagonal() {
        let g: ChunkGrid = grid("seed", 0, 0, 12);
        assert_eq!(g.directions((0, 0)), DirectionSet::only(Direction::SouthEast));
        assert_eq!(g.directions((0, 11)), DirectionSet::only(Direction::SouthWest));
        assert_eq!(g.directions((11, 0)), DirectionSet::only(Direction::NorthEast));
        assert_eq!(g.directions((11, 11)), DirectionSet::only(Direction::NorthWest));
        assert_eq!(g.directions((0, 5)), DirectionSet::all());
        assert_eq!(g.directions((6, 6)), DirectionSet::all());
    }

    #[test]
    fn initial_state() {
        let g: ChunkGrid = grid("seed", 2, 3, 12);
        for i in 0..12 {
            for k in 0..12 {
                assert!(!g.is_word((i, k)));
                assert!((1..=26).contains(&g.letter_code((i, k))));
                assert!((1..=9).contains(&g.weight((i, k))));
            }
        }
        assert_eq!(g.rows().len(), 12);
        assert!(g.rows().iter().all(|r| r.len() == 12));
    }

    #[test]
    fn shared_edges_have_the_same_letters() {
        let origin: ChunkGrid = grid("seed", 0, 0, 10);
        let below: ChunkGrid = grid("seed", 1, 0, 10);
        let right: ChunkGrid = grid("seed", 0, 1, 10);
        for n in 0..10 {
            assert_eq!(origin.letter_code((9, n)), below.letter_code((0, n)));
            assert_eq!(origin.letter_code((n, 9)), right.letter_code((n, 0)));
        }
    }
}
