/*
letters.rs

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

//! Conversion between letters and letter codes.
//!
//! The grid stores letters as codes between 1 and 26, where 1 is `A` and 26 is `Z`.

/// Number of letters in the alphabet.
pub const NUM_LETTERS: u8 = 26;

/// Letters indexed by `code - 1`.
const CODE_TO_LETTER: [char; NUM_LETTERS as usize] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R',
    'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

/// Codes indexed by `letter - 'A'`.
const LETTER_TO_CODE: [u8; NUM_LETTERS as usize] = [
    1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24, 25, 26,
];

/// Return the code of the given letter, or `None` if the character is not an ASCII letter.
///
/// Lowercase letters are accepted.
pub fn letter_to_code(letter: char) -> Option<u8> {
    if !letter.is_ascii_alphabetic() {
        return None;
    }
    let index: usize = (letter.to_ascii_uppercase() as u8 - b'A') as usize;
    Some(LETTER_TO_CODE[index])
}

/// Return the uppercase letter for the given code, or `None` if the code is not between 1 and 26.
pub fn code_to_letter(code: u8) -> Option<char> {
    if code == 0 || code > NUM_LETTERS {
        None
    } else {
        Some(CODE_TO_LETTER[(code - 1) as usize])
    }
}

/// Whether all the characters of the word can be stored in the grid.
pub fn is_writable(word: &str) -> bool {
    !word.is_empty() && word.chars().all(|c| c.is_ascii_alphabetic())
}
