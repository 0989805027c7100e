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

//! Save and restore chunk responses.
//!
//! The saved object is a serialization of the [`ChunkResponse`] object in JSON format by using
//! [`serde`].

use log::debug;
use std::error::Error;
use std::fs::{File, remove_file};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::PathBuf;

use crate::api::ChunkResponse;

/// Object to save and restore a chunk response.
pub struct SaverChunk {
    /// Path to the save file.
    save_file: PathBuf,
}

impl SaverChunk {
    /// Create a [`SaverChunk`] object for the given file.
    pub fn new(save_file: PathBuf) -> Self {
        debug!("Chunk file: {save_file:?}");
        Self { save_file }
    }

    /// Retrieve the saved [`ChunkResponse`] object.
    ///
    /// Return the [`ChunkResponse`] object or None if the file does not exist.
    pub fn get_response(&self) -> Result<Option<ChunkResponse>, Box<dyn Error>> {
        let file: File = match File::open(&self.save_file) {
            Ok(f) => f,
            Err(error) => match error.kind() {
                ErrorKind::NotFound => return Ok(None),
                _ => return Err(Box::new(error)),
            },
        };
        let reader: BufReader<File> = BufReader::new(file);
        let response: ChunkResponse = serde_json::from_reader(reader)?;
        Ok(Some(response))
    }

    /// Save the provided [`ChunkResponse`] object.
    pub fn save_response(&self, response: &ChunkResponse) -> Result<(), Box<dyn Error>> {
        let file: File = File::create(&self.save_file)?;
        let mut writer: BufWriter<File> = BufWriter::new(file);

        serde_json::to_writer_pretty(&mut writer, response)?;
        writer.flush()?;
        Ok(())
    }

    /// Delete the saved file.
    pub fn delete_save(&self) {
        let _ = remove_file(&self.save_file);
    }
}
