/*
dictionary.rs

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

//! Word list used to fill the chunks.
//!
//! The source is plain text with one word per line, in any case.
//! When loading the list, the words shorter than [`MIN_WORD_LENGTH`] and the words with
//! characters other than ASCII letters are dropped.
//! A default list is embedded in the binary (see [`Dictionary::builtin`]).

use log::{debug, warn};
use regex::{Regex, RegexBuilder};
use std::collections::HashMap;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;
use thiserror::Error;

use super::key::WILDCARD;
use super::letters;
use crate::config::MIN_WORD_LENGTH;

/// Default word list.
const BUILTIN_WORDS: &str = include_str!("../../data/words.txt");

/// Type of errors.
#[derive(Error, Debug)]
pub enum DictionaryError {
    /// The word list cannot be read or written.
    #[error("cannot access the word list: {0}")]
    Io(#[from] io::Error),

    /// No usable word remains after filtering.
    #[error("the word list does not contain any usable word")]
    Empty,
}

/// Filtered word list.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    /// Retained words, in source order.
    words: Vec<String>,

    /// Indexes into [`Dictionary::words`], grouped by word length.
    by_length: HashMap<usize, Vec<usize>>,
}

impl Dictionary {
    /// Create a [`Dictionary`] from a list of words.
    ///
    /// Unusable words are silently dropped.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut dictionary: Self = Self::default();
        for word in words {
            dictionary.push(word.as_ref());
        }
        dictionary
    }

    /// Read a word list, one word per line.
    ///
    /// # Errors
    ///
    /// The method returns an error if the reader fails or if no usable word is found.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, DictionaryError> {
        let mut dictionary: Self = Self::default();
        let mut dropped: usize = 0;
        for line in reader.lines() {
            if !dictionary.push(&line?) {
                dropped += 1;
            }
        }
        debug!(
            "Word list: {} words kept, {dropped} dropped",
            dictionary.len()
        );
        if dictionary.is_empty() {
            return Err(DictionaryError::Empty);
        }
        Ok(dictionary)
    }

    /// Load the word list from a file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, DictionaryError> {
        debug!("Loading word list {:?}", path.as_ref());
        let file: File = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Word list embedded in the binary.
    pub fn builtin() -> Self {
        Self::from_words(BUILTIN_WORDS.lines())
    }

    /// Add a word if it is usable, and return whether it was kept.
    fn push(&mut self, raw: &str) -> bool {
        let word: &str = raw.trim();
        let length: usize = word.chars().count();
        if length < MIN_WORD_LENGTH || !letters::is_writable(word) {
            return false;
        }
        self.by_length
            .entry(length)
            .or_default()
            .push(self.words.len());
        self.words.push(word.to_string());
        true
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// All the retained words, in source order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Write the retained words, one per line.
    pub fn write_filtered<W: Write>(&self, mut writer: W) -> Result<(), DictionaryError> {
        for word in &self.words {
            writeln!(writer, "{word}")?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Return the words matching the key, in dictionary order.
    ///
    /// The match is anchored at both ends and case-insensitive. [`WILDCARD`] stands for any
    /// letter.
    pub fn pattern_match(&self, pattern: &str) -> Vec<&str> {
        let candidates: &Vec<usize> = match self.by_length.get(&pattern.chars().count()) {
            Some(c) => c,
            None => return Vec::new(),
        };
        let regex: Regex = match Self::compile(pattern) {
            Some(r) => r,
            None => return Vec::new(),
        };
        candidates
            .iter()
            .map(|&index| self.words[index].as_str())
            .filter(|word| regex.is_match(word))
            .collect()
    }

    /// Build the anchored regular expression for the key.
    fn compile(pattern: &str) -> Option<Regex> {
        let body: String = pattern
            .chars()
            .map(|c| {
                if c == WILDCARD {
                    ".".to_string()
                } else {
                    regex::escape(&c.to_string())
                }
            })
            .collect();
        match RegexBuilder::new(&format!("^{body}$"))
            .case_insensitive(true)
            .build()
        {
            Ok(r) => Some(r),
            Err(e) => {
                warn!("Invalid key {pattern:?}: {e}");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Dictionary {
        Dictionary::from_words(["cat", "Dog", "an", "cot", "COAT", "it's", "cut", "  bat  "])
    }

    #[test]
    fn short_and_non_letter_words_are_dropped() {
        let d: Dictionary = sample();
        assert_eq!(d.words(), &["cat", "Dog", "cot", "COAT", "cut", "bat"]);
    }

    #[test]
    fn match_is_anchored_and_exact_length() {
        let d: Dictionary = sample();
        assert_eq!(d.pattern_match("c.t"), vec!["cat", "cot", "cut"]);
        assert_eq!(d.pattern_match("co.t"), vec!["COAT"]);
        assert!(d.pattern_match("c..").contains(&"cat"));
        assert!(d.pattern_match("c....").is_empty());
    }

    #[test]
    fn match_is_case_insensitive() {
        let d: Dictionary = sample();
        assert_eq!(d.pattern_match("DOG"), vec!["Dog"]);
        assert_eq!(d.pattern_match("Coat"), vec!["COAT"]);
        assert_eq!(d.pattern_match("..."), vec!["cat", "Dog", "cot", "cut", "bat"]);
    }

    #[test]
    fn reader_errors() {
        let empty: &[u8] = b"a\nbe\n\n";
        assert!(matches!(
            Dictionary::from_reader(empty),
            Err(DictionaryError::Empty)
        ));
        assert!(matches!(
            Dictionary::load("/nonexistent/words.txt"),
            Err(DictionaryError::Io(_))
        ));
    }

    #[test]
    fn filtered_output() {
        let source: &[u8] = b"to\nword\nSearch\nx\n";
        let d: Dictionary = Dictionary::from_reader(source).unwrap();
        let mut out: Vec<u8> = Vec::new();
        d.write_filtered(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "word\nSearch\n");
    }

    #[test]
    fn builtin_list_is_usable() {
        let d: Dictionary = Dictionary::builtin();
        assert!(d.len() > 500);
        assert!(
            d.words()
                .iter()
                .all(|w| w.len() >= MIN_WORD_LENGTH && letters::is_writable(w))
        );
    }
}
