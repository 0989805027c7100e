/*
direction.rs

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

//! Compass directions in which words are placed, and sets of these directions.
//!
//! Cells are addressed by `(i, k)`: `i` is the row and grows to the south, `k` is the column and
//! grows to the east.

use serde::{Deserialize, Serialize};
use std::fmt;
use strum_macros::FromRepr;

/// The eight compass directions, in cyclic order.
///
/// The discriminant is the direction index. The opposite of a direction is four steps further in
/// the cycle.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, FromRepr)]
#[repr(u8)]
pub enum Direction {
    East = 0,
    SouthEast = 1,
    South = 2,
    SouthWest = 3,
    West = 4,
    NorthWest = 5,
    North = 6,
    NorthEast = 7,
}

impl Direction {
    /// All the directions, ordered by index.
    pub const ALL: [Direction; 8] = [
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
        Direction::North,
        Direction::NorthEast,
    ];

    /// Index of the direction in the cyclic order.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Unit vector `(di, dk)` of the direction.
    pub fn vector(self) -> (i64, i64) {
        match self {
            Direction::East => (0, 1),
            Direction::SouthEast => (1, 1),
            Direction::South => (1, 0),
            Direction::SouthWest => (1, -1),
            Direction::West => (0, -1),
            Direction::NorthWest => (-1, -1),
            Direction::North => (-1, 0),
            Direction::NorthEast => (-1, 1),
        }
    }

    /// Direction pointing the other way along the same axis.
    pub fn opposite(self) -> Self {
        Self::ALL[(self.index() + 4) % 8]
    }

    /// Whether words placed in this direction are stored with their letters reversed.
    ///
    /// Indexes 1 to 5 form the reversed half of the cycle.
    pub fn is_reversed(self) -> bool {
        (1..=5).contains(&self.index())
    }

    /// Cell reached after `steps` moves from `(i, k)`, or `None` if it falls outside a grid of
    /// `size` x `size` cells.
    pub fn step(self, (i, k): (usize, usize), steps: usize, size: usize) -> Option<(usize, usize)> {
        let (di, dk) = self.vector();
        let ni: i64 = i as i64 + di * steps as i64;
        let nk: i64 = k as i64 + dk * steps as i64;
        let limit: i64 = size as i64;
        if (0..limit).contains(&ni) && (0..limit).contains(&nk) {
            Some((ni as usize, nk as usize))
        } else {
            None
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Direction::East => write!(f, "E"),
            Direction::SouthEast => write!(f, "SE"),
            Direction::South => write!(f, "S"),
            Direction::SouthWest => write!(f, "SW"),
            Direction::West => write!(f, "W"),
            Direction::NorthWest => write!(f, "NW"),
            Direction::North => write!(f, "N"),
            Direction::NorthEast => write!(f, "NE"),
        }
    }
}

/// Set of directions stored as eight flags, one bit per direction index.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct DirectionSet(u8);

impl DirectionSet {
    /// Set with all the directions enabled.
    pub fn all() -> Self {
        Self(0xff)
    }

    /// Set with no direction enabled.
    pub fn empty() -> Self {
        Self(0)
    }

    /// Set with only the given direction enabled.
    pub fn only(direction: Direction) -> Self {
        Self(1 << direction.index())
    }

    pub fn contains(&self, direction: Direction) -> bool {
        self.0 & (1 << direction.index()) != 0
    }

    pub fn remove(&mut self, direction: Direction) {
        self.0 &= !(1 << direction.index());
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Number of enabled directions.
    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Enabled directions, ordered by index.
    pub fn iter(&self) -> impl Iterator<Item = Direction> + '_ {
        Direction::ALL
            .into_iter()
            .filter(move |d| self.contains(*d))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_repr_follows_cyclic_order() {
        for (index, direction) in Direction::ALL.iter().enumerate() {
            assert_eq!(Direction::from_repr(index as u8), Some(*direction));
        }
        assert_eq!(Direction::from_repr(8), None);
    }

    #[test]
    fn opposite_vectors_cancel_out() {
        for d in Direction::ALL {
            let (di, dk) = d.vector();
            let (oi, ok) = d.opposite().vector();
            assert_eq!((di + oi, dk + ok), (0, 0), "{d}");
            assert_eq!(d.opposite().opposite(), d);
        }
    }

    #[test]
    fn reversed_half() {
        let reversed: Vec<Direction> = Direction::ALL
            .into_iter()
            .filter(|d| d.is_reversed())
            .collect();
        assert_eq!(
            reversed,
            vec![
                Direction::SouthEast,
                Direction::South,
                Direction::SouthWest,
                Direction::West,
                Direction::NorthWest
            ]
        );
    }

    #[test]
    fn step_stays_inside_grid() {
        assert_eq!(Direction::East.step((0, 0), 9, 10), Some((0, 9)));
        assert_eq!(Direction::East.step((0, 0), 10, 10), None);
        assert_eq!(Direction::NorthWest.step((3, 3), 3, 10), Some((0, 0)));
        assert_eq!(Direction::NorthWest.step((3, 3), 4, 10), None);
        assert_eq!(Direction::SouthWest.step((2, 5), 2, 10), Some((4, 3)));
    }

    #[test]
    fn direction_set_operations() {
        let mut set: DirectionSet = DirectionSet::all();
        assert_eq!(set.len(), 8);
        set.remove(Direction::North);
        set.remove(Direction::South);
        assert!(!set.contains(Direction::North));
        assert!(set.contains(Direction::East));
        assert_eq!(set.len(), 6);

        let mut single: DirectionSet = DirectionSet::only(Direction::NorthEast);
        assert_eq!(single.iter().collect::<Vec<_>>(), vec![Direction::NorthEast]);
        single.remove(Direction::NorthEast);
        assert!(single.is_empty());
        assert!(DirectionSet::empty().is_empty());
    }
}
