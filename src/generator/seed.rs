/*
seed.rs

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

//! Derive deterministic random streams from the global seed and the chunk coordinates.
//!
//! Two kinds of streams exist:
//!
//! * A per-cell stream, keyed by the continuous coordinate of the cell on the infinite plane.
//!   The continuous coordinate of the cell `(i, k)` in chunk `(x, y)` is
//!   `(x + i / (size - 1), y + k / (size - 1))`, so the last row of chunk `x` and the first row of
//!   chunk `x + 1` share the same coordinates and therefore the same letters.
//! * A per-chunk stream, keyed by `seed:x,y`, used for every other random choice made while
//!   generating the chunk.
//!
//! Keys are strings hashed with 64-bit FNV-1a, and the hash seeds a [`ChaCha8Rng`] generator.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// 64-bit FNV-1a hash of the key.
fn hash_key(key: &str) -> u64 {
    key.bytes().fold(FNV_OFFSET_BASIS, |hash, byte| {
        (hash ^ byte as u64).wrapping_mul(FNV_PRIME)
    })
}

/// Build a generator seeded from the given string key.
pub fn rng_from_key(key: &str) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(hash_key(key))
}

/// Continuous coordinate along one axis of the local index `index` in chunk `chunk`.
pub(crate) fn continuous_coordinate(chunk: i64, index: usize, size: usize) -> f64 {
    chunk as f64 + index as f64 / (size - 1) as f64
}

/// Key of the per-cell stream.
pub(crate) fn cell_key(
    global_seed: &str,
    chunk_x: i64,
    chunk_y: i64,
    i: usize,
    k: usize,
    size: usize,
) -> String {
    let cx: f64 = continuous_coordinate(chunk_x, i, size);
    let cy: f64 = continuous_coordinate(chunk_y, k, size);
    format!("{global_seed}:{cx},{cy}")
}

/// Key of the per-chunk stream.
pub fn chunk_key(global_seed: &str, chunk_x: i64, chunk_y: i64) -> String {
    format!("{global_seed}:{chunk_x},{chunk_y}")
}

/// Return a value between 1 and `max_value` (inclusive) for the cell `(i, k)` of the chunk.
///
/// The value only depends on the global seed and on the continuous coordinate of the cell.
///
/// # Panics
///
/// The function panics if `size` is 0. With a `size` of 1, the coordinates are not finite and
/// every cell of every chunk shares the same key.
pub fn letter_seed(
    global_seed: &str,
    chunk_x: i64,
    chunk_y: i64,
    i: usize,
    k: usize,
    size: usize,
    max_value: u32,
) -> u32 {
    let mut rng: ChaCha8Rng = rng_from_key(&cell_key(global_seed, chunk_x, chunk_y, i, k, size));
    rng.random_range(1..=max_value)
}

/// Generator used for all the non-letter random choices of the chunk.
pub fn chunk_rng(global_seed: &str, chunk_x: i64, chunk_y: i64) -> ChaCha8Rng {
    rng_from_key(&chunk_key(global_seed, chunk_x, chunk_y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fnv_reference_values() {
        assert_eq!(hash_key(""), 0xcbf2_9ce4_8422_2325);
        assert_eq!(hash_key("a"), 0xaf63_dc4c_8601_ec8c);
    }

    #[test]
    fn letter_seed_is_deterministic_and_in_range() {
        for i in 0..12 {
            for k in 0..12 {
                let a: u32 = letter_seed("seed", 3, -7, i, k, 12, 26);
                let b: u32 = letter_seed("seed", 3, -7, i, k, 12, 26);
                assert_eq!(a, b);
                assert!((1..=26).contains(&a));
            }
        }
    }

    #[test]
    fn adjacent_chunks_share_edge_keys() {
        for k in 0..10 {
            assert_eq!(
                cell_key("seed", 4, 2, 9, k, 10),
                cell_key("seed", 5, 2, 0, k, 10)
            );
            assert_eq!(
                cell_key("seed", -1, 0, k, 9, 10),
                cell_key("seed", -1, 1, k, 0, 10)
            );
        }
        assert_eq!(cell_key("seed", -1, 0, 9, 0, 10), cell_key("seed", 0, 0, 0, 0, 10));
    }

    #[test]
    fn seed_changes_the_stream() {
        let a: Vec<u32> = (0..12).map(|k| letter_seed("alpha", 0, 0, 5, k, 12, 26)).collect();
        let b: Vec<u32> = (0..12).map(|k| letter_seed("beta", 0, 0, 5, k, 12, 26)).collect();
        assert_ne!(a, b);
    }

    #[test]
    fn chunk_rng_is_reproducible() {
        let mut a: ChaCha8Rng = chunk_rng("seed", 1, 2);
        let mut b: ChaCha8Rng = chunk_rng("seed", 1, 2);
        let va: Vec<u32> = (0..16).map(|_| a.random_range(0..100)).collect();
        let vb: Vec<u32> = (0..16).map(|_| b.random_range(0..100)).collect();
        assert_eq!(va, vb);
        assert_eq!(chunk_key("seed", 1, 2), "seed:1,2");
    }
}
