/*
api.rs

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

//! Response served to the puzzle front end.
//!
//! The front end addresses chunks and cells with its own orientation. To serve chunk
//! `(chunk_x, chunk_y)`, the axes are swapped and negated before generating the chunk, and the
//! coordinates of the placed words are remapped to `row`/`col` pairs:
//!
//! * chunk `(chunk_x, chunk_y)` is generated as `Chunk(-chunk_y, -chunk_x)`,
//! * the stored cell `(i, k)` becomes `{ row: i, col: size - k - 1 }`.
//!
//! The letters are sent as the display grid of the chunk (see
//! [`crate::generator::chunk::Chunk::display_grid`]).
//! Both transforms are kept as they are because existing front ends rely on them.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::config::{DEFAULT_FAIL_BUDGET, DEFAULT_SEED, DEFAULT_SIZE, DEFAULT_WORD_COUNT};
use crate::generator::chunk::Chunk;
use crate::generator::dictionary::Dictionary;
use crate::generator::grid::ChunkError;

/// Chunk requested by the front end.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ChunkRequest {
    pub seed: String,

    #[serde(rename = "chunkX")]
    pub chunk_x: i64,

    #[serde(rename = "chunkY")]
    pub chunk_y: i64,

    pub word_count: usize,
}

impl Default for ChunkRequest {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED.to_string(),
            chunk_x: 0,
            chunk_y: 0,
            word_count: DEFAULT_WORD_COUNT,
        }
    }
}

impl ChunkRequest {
    /// Coordinates of the chunk to generate for this request.
    pub fn internal_coordinates(&self) -> (i64, i64) {
        (-self.chunk_y, -self.chunk_x)
    }
}

/// Cell position for the front end.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    /// Remap the stored cell `(i, k)` of a chunk of `size` x `size` cells.
    pub fn from_cell((i, k): (usize, usize), size: usize) -> Self {
        Self {
            row: i,
            col: size - k - 1,
        }
    }
}

/// Word entry of the response.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct WordPosition {
    pub word: String,
    pub start: Position,
    pub end: Position,
}

/// Response to a [`ChunkRequest`].
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ChunkResponse {
    /// Display grid, one letter per cell.
    pub letters: Vec<Vec<String>>,

    /// Placed words.
    pub words: Vec<WordPosition>,
}

impl ChunkResponse {
    /// Build the response from a generated chunk.
    pub fn from_chunk(chunk: &Chunk) -> Self {
        Self {
            letters: chunk
                .display_grid()
                .into_iter()
                .map(|row| row.into_iter().map(String::from).collect())
                .collect(),
            words: chunk
                .words()
                .iter()
                .map(|w| WordPosition {
                    word: w.word.clone(),
                    start: Position::from_cell(w.start, chunk.size),
                    end: Position::from_cell(w.end, chunk.size),
                })
                .collect(),
        }
    }

    /// Generate the chunk for the request and build the response.
    ///
    /// # Errors
    ///
    /// Chunks served to the front end always have [`DEFAULT_SIZE`] cells per side, so the
    /// construction cannot fail in practice.
    pub fn generate(request: &ChunkRequest, dictionary: &Dictionary) -> Result<Self, ChunkError> {
        let (x, y) = request.internal_coordinates();
        debug!(
            "Request {}:{},{} served by chunk {x},{y}",
            request.seed, request.chunk_x, request.chunk_y
        );
        let mut chunk: Chunk = Chunk::new(x, y, DEFAULT_SIZE, &request.seed)?;
        chunk.generate(dictionary, request.word_count, DEFAULT_FAIL_BUDGET);
        Ok(Self::from_chunk(&chunk))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_axes_are_swapped_and_negated() {
        let request: ChunkRequest = ChunkRequest {
            chunk_x: 3,
            chunk_y: -5,
            ..Default::default()
        };
        assert_eq!(request.internal_coordinates(), (5, -3));
    }

    #[test]
    fn request_defaults() {
        let request: ChunkRequest = serde_json::from_str(r#"{"chunkX": 2}"#).unwrap();
        assert_eq!(request.seed, "seed");
        assert_eq!(request.chunk_x, 2);
        assert_eq!(request.chunk_y, 0);
        assert_eq!(request.word_count, 20);
    }

    #[test]
    fn cells_are_mirrored_on_columns() {
        assert_eq!(Position::from_cell((0, 0), 12), Position { row: 0, col: 11 });
        assert_eq!(Position::from_cell((4, 9), 12), Position { row: 4, col: 2 });
        assert_eq!(Position::from_cell((11, 11), 12), Position { row: 11, col: 0 });
    }

    #[test]
    fn response_matches_the_remapped_chunk() {
        let dictionary: Dictionary = Dictionary::builtin();
        let request: ChunkRequest = ChunkRequest {
            seed: "api".to_string(),
            chunk_x: 1,
            chunk_y: 2,
            word_count: 10,
        };
        let response: ChunkResponse = ChunkResponse::generate(&request, &dictionary).unwrap();

        let mut chunk: Chunk = Chunk::new(-2, -1, DEFAULT_SIZE, "api").unwrap();
        chunk.generate(&dictionary, 10, DEFAULT_FAIL_BUDGET);

        assert_eq!(response.letters.len(), DEFAULT_SIZE);
        assert_eq!(response.words.len(), chunk.words().len());
        for (entry, record) in response.words.iter().zip(chunk.words()) {
            assert_eq!(entry.word, record.word);
            assert_eq!(entry.start.row, record.start.0);
            assert_eq!(entry.start.col, DEFAULT_SIZE - record.start.1 - 1);
            assert_eq!(entry.end.row, record.end.0);
            assert_eq!(entry.end.col, DEFAULT_SIZE - record.end.1 - 1);
        }

        // With the display flip, the letter under a remapped position is the stored letter.
        for record in chunk.words() {
            let p: Position = Position::from_cell(record.start, DEFAULT_SIZE);
            assert_eq!(
                response.letters[p.row][p.col],
                chunk.grid().letter(record.start).to_string()
            );
        }
    }

    #[test]
    fn response_json_shape() {
        let response: ChunkResponse = ChunkResponse {
            letters: vec![vec!["A".to_string(), "B".to_string()]],
            words: vec![WordPosition {
                word: "ab".to_string(),
                start: Position { row: 0, col: 0 },
                end: Position { row: 0, col: 1 },
            }],
        };
        let json: serde_json::Value = serde_json::to_value(&response).unwrap();
        assert_eq!(json["letters"][0][1], "B");
        assert_eq!(json["words"][0]["start"]["col"], 0);
        assert_eq!(json["words"][0]["end"]["col"], 1);
    }
}
