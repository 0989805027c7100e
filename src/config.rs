/*
config.rs

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

//! Build-time settings.

pub const PACKAGE_NAME: &str = env!("CARGO_PKG_NAME");
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const COPYRIGHT_NOTICE: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "\nCopyright 2026 The Wordchunk contributors\n",
    "License GPLv3+: GNU GPL version 3 or later <https://gnu.org/licenses/gpl.html>.\n",
    "This is free software: you are free to change and redistribute it.\n",
    "There is NO WARRANTY, to the extent permitted by law."
);

/// Global seed used when none is given.
pub const DEFAULT_SEED: &str = "seed";

/// Chunk size served to the puzzle front end.
pub const DEFAULT_SIZE: usize = 12;

/// Chunk size of the stand-alone generator.
pub const INTERIOR_SIZE: usize = 10;

/// Number of words requested per chunk.
pub const DEFAULT_WORD_COUNT: usize = 20;

/// Failed placement attempts tolerated before giving up.
pub const DEFAULT_FAIL_BUDGET: usize = 100;

/// Shortest word that can be placed in a chunk.
pub const MIN_WORD_LENGTH: usize = 3;
