/*
chunk.rs

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

//! Generate a word-search chunk.
//!
//! A [`Chunk`] is identified by the global seed, its coordinates on the infinite plane, and its
//! size.
//! Creating the chunk derives its letters; [`Chunk::generate`] then places words from a
//! [`Dictionary`] until enough words are placed or too many attempts failed.

use log::{Level, debug, log_enabled, warn};
use rand::Rng;
use rand::seq::IndexedRandom;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::thread;

use super::dictionary::Dictionary;
use super::grid::{ChunkError, ChunkGrid};
use super::key::Key;
use super::placement::WordRecord;
use super::seed;
use crate::config::MIN_WORD_LENGTH;

/// Serializable summary of a generated chunk, with the raw coordinates.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ChunkReport {
    pub seed: String,
    pub x: i64,
    pub y: i64,
    pub size: usize,

    /// Display grid (see [`Chunk::display_rows`]).
    pub letters: Vec<String>,

    /// Placed words, in placement order.
    pub words: Vec<WordRecord>,
}

/// Parameters of a chunk to generate with [`generate_many`].
#[derive(Debug, Clone)]
pub struct ChunkSpec {
    pub seed: String,
    pub x: i64,
    pub y: i64,
    pub size: usize,
    pub words_wanted: usize,
    pub fail_budget: usize,
}

/// [`Chunk`] object.
#[derive(Debug, Clone)]
pub struct Chunk {
    /// Global seed.
    pub seed: String,

    /// Chunk coordinates.
    pub x: i64,
    pub y: i64,

    /// Number of rows and columns.
    pub size: usize,

    /// Shortest word that can be placed.
    pub min_length: usize,

    /// Number of loop iterations of the last call to [`Chunk::generate`].
    pub iteration: usize,

    /// Number of failed attempts during the last call to [`Chunk::generate`].
    pub failures: usize,

    /// Grid state.
    grid: ChunkGrid,

    /// Chunk generator, used for every random choice except the letters.
    rng: ChaCha8Rng,

    /// Words placed by the last call to [`Chunk::generate`].
    words: Vec<WordRecord>,
}

impl Chunk {
    /// Create the chunk `(x, y)` of `size` x `size` cells for the global `seed`.
    ///
    /// # Errors
    ///
    /// The method returns an error if `size` is lower than 2.
    pub fn new(x: i64, y: i64, size: usize, seed: &str) -> Result<Self, ChunkError> {
        debug!("Chunk {}", seed::chunk_key(seed, x, y));
        let mut rng: ChaCha8Rng = seed::chunk_rng(seed, x, y);
        let grid: ChunkGrid = ChunkGrid::new(seed, x, y, size, &mut rng)?;
        Ok(Self {
            seed: seed.to_string(),
            x,
            y,
            size,
            min_length: MIN_WORD_LENGTH,
            iteration: 0,
            failures: 0,
            grid,
            rng,
            words: Vec::new(),
        })
    }

    /// Place up to `words_wanted` words, giving up after `fail_budget` failed attempts.
    ///
    /// Each attempt picks a random cell, builds a key from it, and places a random dictionary
    /// word matching the key. Placing fewer words than requested is not an error.
    ///
    /// Return the words placed by this call. Letters written by earlier calls stay in the grid.
    pub fn generate(
        &mut self,
        dictionary: &Dictionary,
        words_wanted: usize,
        fail_budget: usize,
    ) -> &[WordRecord] {
        let mut words_added: usize = 0;
        self.iteration = 0;
        self.failures = 0;
        self.words.clear();

        while words_added < words_wanted && self.failures < fail_budget {
            self.iteration += 1;
            let cell: (usize, usize) = (
                self.rng.random_range(0..self.size),
                self.rng.random_range(0..self.size),
            );

            let key: Key = match self.grid.key_create(&mut self.rng, cell, self.min_length) {
                Some(k) => k,
                None => {
                    self.failures += 1;
                    continue;
                }
            };
            debug!(
                "== Attempt {}: key {:?} at {cell:?} ({})",
                self.iteration, key.pattern, key.direction
            );

            let matches: Vec<&str> = dictionary.pattern_match(&key.pattern);
            let word: &str = match matches.choose(&mut self.rng) {
                Some(w) => *w,
                None => {
                    debug!("    No word matches {:?}", key.pattern);
                    self.failures += 1;
                    continue;
                }
            };

            match self.grid.add_word(cell, word, key.direction) {
                Ok(record) => {
                    self.words.push(record);
                    words_added += 1;
                }
                Err(e) => {
                    warn!("{e}");
                    self.failures += 1;
                }
            }
        }

        debug!(
            "Iterations = {}  Words = {words_added}/{words_wanted}  Failures = {}/{fail_budget}",
            self.iteration, self.failures
        );
        if log_enabled!(Level::Debug) {
            self.grid.debug();
        }
        &self.words
    }

    /// Words placed by the last call to [`Chunk::generate`], in placement order.
    pub fn words(&self) -> &[WordRecord] {
        &self.words
    }

    pub fn grid(&self) -> &ChunkGrid {
        &self.grid
    }

    /// Letters for display.
    ///
    /// The grid is flipped along its second axis: the display cell `(i, j)` shows the stored
    /// cell `(i, size - 1 - j)`.
    pub fn display_grid(&self) -> Vec<Vec<char>> {
        (0..self.size)
            .map(|i| {
                (0..self.size)
                    .rev()
                    .map(|k| self.grid.letter((i, k)))
                    .collect()
            })
            .collect()
    }

    /// Display grid, one string per row.
    pub fn display_rows(&self) -> Vec<String> {
        self.display_grid()
            .into_iter()
            .map(|row| row.into_iter().collect())
            .collect()
    }

    /// Serializable summary of the chunk.
    pub fn report(&self) -> ChunkReport {
        ChunkReport {
            seed: self.seed.clone(),
            x: self.x,
            y: self.y,
            size: self.size,
            letters: self.display_rows(),
            words: self.words.clone(),
        }
    }
}

/// Generate independent chunks in parallel, one thread per chunk.
///
/// The results are in the order of `specs` and are identical to generating the chunks one after
/// the other.
pub fn generate_many(
    specs: &[ChunkSpec],
    dictionary: &Dictionary,
) -> Vec<Result<Chunk, ChunkError>> {
    thread::scope(|scope| {
        let handles: Vec<_> = specs
            .iter()
            .map(|spec| {
                scope.spawn(move || -> Result<Chunk, ChunkError> {
                    let mut chunk: Chunk = Chunk::new(spec.x, spec.y, spec.size, &spec.seed)?;
                    chunk.generate(dictionary, spec.words_wanted, spec.fail_budget);
                    Ok(chunk)
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|h| match h.join() {
                Ok(result) => result,
                Err(panic) => std::panic::resume_unwind(panic),
            })
            .collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::direction::Direction;

    fn dictionary() -> Dictionary {
        Dictionary::builtin()
    }

    #[test]
    fn construction_rejects_tiny_chunks() {
        assert_eq!(
            Chunk::new(0, 0, 1, "seed").unwrap_err(),
            ChunkError::SizeTooSmall(1)
        );
        assert!(Chunk::new(0, 0, 2, "seed").is_ok());
    }

    #[test]
    fn generation_is_bounded() {
        let d: Dictionary = dictionary();
        for (words, budget) in [(0, 10), (5, 0), (20, 100), (50, 30)] {
            let mut chunk: Chunk = Chunk::new(1, -1, 12, "bounds").unwrap();
            let placed: usize = chunk.generate(&d, words, budget).len();
            assert!(placed <= words);
            assert!(chunk.iteration <= words + budget);
            assert!(placed == words || chunk.failures == budget);
        }
    }

    #[test]
    fn tiny_grids_under_fill_quietly() {
        let d: Dictionary = dictionary();
        let mut chunk: Chunk = Chunk::new(0, 0, 3, "seed").unwrap();
        assert!(chunk.generate(&d, 5, 25).is_empty());
        assert_eq!(chunk.failures, 25);
    }

    #[test]
    fn empty_dictionary_places_nothing() {
        let d: Dictionary = Dictionary::default();
        let mut chunk: Chunk = Chunk::new(0, 0, 10, "seed").unwrap();
        assert!(chunk.generate(&d, 5, 40).is_empty());
        assert_eq!(chunk.iteration, 40);
    }

    #[test]
    fn each_call_returns_its_own_words() {
        let d: Dictionary = dictionary();
        let mut chunk: Chunk = Chunk::new(0, 0, 12, "seed").unwrap();
        let first: Vec<WordRecord> = chunk.generate(&d, 3, 100).to_vec();
        assert!(first.len() <= 3);
        let second: Vec<WordRecord> = chunk.generate(&d, 3, 100).to_vec();
        assert!(second.len() <= 3);
        assert_eq!(chunk.words(), second.as_slice());
        for record in &first {
            assert!(!second.contains(record));
            // Earlier words stay written in the grid.
            assert_eq!(
                chunk
                    .grid()
                    .read_word(record.start, record.direction, record.word.len()),
                record.word.to_uppercase()
            );
        }
    }

    #[test]
    fn display_grid_is_flipped() {
        let chunk: Chunk = Chunk::new(3, 4, 10, "seed").unwrap();
        let display: Vec<Vec<char>> = chunk.display_grid();
        for i in 0..10 {
            for j in 0..10 {
                assert_eq!(display[i][j], chunk.grid().letter((i, 9 - j)));
            }
        }
        assert_eq!(chunk.display_rows()[0].len(), 10);
    }

    #[test]
    fn generated_words_are_readable() {
        let d: Dictionary = dictionary();
        let mut chunk: Chunk = Chunk::new(0, 0, 12, "seed").unwrap();
        chunk.generate(&d, 20, 100);
        for record in chunk.words() {
            let length: usize = record.word.len();
            assert_eq!(
                chunk.grid().read_word(record.start, record.direction, length),
                record.word.to_uppercase()
            );
            let (di, dk) = record.direction.vector();
            let last: i64 = length as i64 - 1;
            assert_eq!(
                record.end,
                (
                    (record.start.0 as i64 + last * di) as usize,
                    (record.start.1 as i64 + last * dk) as usize
                )
            );
            assert!(Direction::ALL.contains(&record.direction));
        }
    }

    #[test]
    fn report_matches_chunk() {
        let d: Dictionary = dictionary();
        let mut chunk: Chunk = Chunk::new(-2, 5, 10, "report").unwrap();
        chunk.generate(&d, 8, 60);
        let report: ChunkReport = chunk.report();
        assert_eq!(report.words, chunk.words());
        assert_eq!(report.letters, chunk.display_rows());
        assert_eq!((report.x, report.y, report.size), (-2, 5, 10));
    }
}
