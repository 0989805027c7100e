/*
constraints.rs

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

//! Prune the directions in which a word of a given length can start from a cell.

use log::debug;

use super::direction::{Direction, DirectionSet};
use super::grid::{BorderClass, ChunkGrid};

impl ChunkGrid {
    /// Restrict the available directions of `cell` to those that can hold a word of `length`
    /// letters, and return whether at least one direction remains.
    ///
    /// A corner that is not yet part of a word always offers its inward diagonal. A corner that
    /// is already part of a word never offers anything.
    ///
    /// For the other cells, a direction is disabled when the cell `length` steps away is outside
    /// the grid, when a cell on the way has a different border classification, or when a cell
    /// on the way has already lost that direction. Disabled directions stay disabled.
    pub fn vector_set(&mut self, cell: (usize, usize), length: usize) -> bool {
        let origin: BorderClass = self.border(cell);

        if origin == BorderClass::Corner {
            if self.is_word(cell) {
                debug!("    Corner {cell:?} already used by a word");
                return false;
            }
            if let Some(d) = Self::corner_direction(cell.0, cell.1, self.size) {
                *self.directions_mut(cell) = DirectionSet::only(d);
            }
            return true;
        }

        for direction in self.directions(cell).iter().collect::<Vec<Direction>>() {
            if direction.step(cell, length, self.size).is_none()
                || !self.walk_is_clear(cell, direction, length, origin)
            {
                self.directions_mut(cell).remove(direction);
            }
        }

        !self.directions(cell).is_empty()
    }

    /// Whether the cells 1 to `length - 1` along `direction` share the `origin` classification
    /// and still accept `direction`.
    fn walk_is_clear(
        &self,
        cell: (usize, usize),
        direction: Direction,
        length: usize,
        origin: BorderClass,
    ) -> bool {
        (1..length).all(|step| match direction.step(cell, step, self.size) {
            Some(c) => self.border(c) == origin && self.directions(c).contains(direction),
            None => false,
        })
    }
}
