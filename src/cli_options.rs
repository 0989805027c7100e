/*
cli_options.rs

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

//! Process command-line options.
//!
//! # Examples
//!
//! Generate the chunk at the origin for the default seed, with 20 words:
//!
//! ```
//! $ wordchunk
//! Chunk seed:0,0 (12x12), 20 words in 57 iterations
//! ...
//! ```
//!
//! Print the response that the puzzle front end receives for its chunk `(3, -1)`:
//!
//! ```
//! $ wordchunk --api -x 3 -y -1 --seed forest
//! {"letters":[["K","O",...]],"words":[{"word":"table","start":{"row":4,"col":2},...}]}
//! ```
//!
//! Filter a raw word list the way the generator does, and save the result:
//!
//! ```
//! $ wordchunk --dictionary 20k.txt --export-dictionary filtered_words.txt
//! ```

use clap::Parser;
use log::debug;
use std::env;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use wordchunk::api::{ChunkRequest, ChunkResponse};
use wordchunk::config::{
    COPYRIGHT_NOTICE, DEFAULT_FAIL_BUDGET, DEFAULT_SEED, DEFAULT_SIZE, DEFAULT_WORD_COUNT,
    PACKAGE_NAME,
};
use wordchunk::generator::chunk::Chunk;
use wordchunk::generator::dictionary::{Dictionary, DictionaryError};
use wordchunk::saver::chunk::SaverChunk;

/// Generate deterministic word-search chunks.
#[derive(Parser)]
#[command(about, long_about = None, version, long_version = COPYRIGHT_NOTICE)]
struct Args {
    /// Global seed
    #[arg(short, long, default_value_t = DEFAULT_SEED.to_string())]
    seed: String,

    /// First chunk coordinate
    #[arg(short, allow_negative_numbers = true, default_value_t = 0)]
    x: i64,

    /// Second chunk coordinate
    #[arg(short, allow_negative_numbers = true, default_value_t = 0)]
    y: i64,

    /// Number of cells per side
    #[arg(long, default_value_t = DEFAULT_SIZE, conflicts_with = "api")]
    size: usize,

    /// Number of words to place
    #[arg(short, long, default_value_t = DEFAULT_WORD_COUNT)]
    words: usize,

    /// Number of failed placement attempts before giving up
    #[arg(short, long, default_value_t = DEFAULT_FAIL_BUDGET, conflicts_with = "api")]
    fail_budget: usize,

    /// Word list to use instead of the built-in one (one word per line)
    #[arg(long)]
    dictionary: Option<PathBuf>,

    /// Write the filtered word list to this file and exit
    #[arg(long)]
    export_dictionary: Option<PathBuf>,

    /// Print the front end response for chunk (x, y) instead of the raw chunk
    #[arg(long, default_value_t = false)]
    api: bool,

    /// Print the raw chunk in JSON format
    #[arg(long, default_value_t = false, conflicts_with = "api")]
    json: bool,

    /// Save the front end response in this file
    #[arg(short, long, requires = "api")]
    output: Option<PathBuf>,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

/// Parse and process command-line options, and return the exit code.
pub fn parse() -> u8 {
    let args: Args = Args::parse();

    if args.debug {
        unsafe {
            env::set_var("RUST_LOG", "debug");
        }
    }
    env_logger::init();
    debug!("{PACKAGE_NAME} {COPYRIGHT_NOTICE}");

    let dictionary: Dictionary = match &args.dictionary {
        Some(path) => match Dictionary::load(path) {
            Ok(d) => d,
            Err(e) => {
                eprintln!("Error: {}: {e}", path.display());
                return 1;
            }
        },
        None => Dictionary::builtin(),
    };

    //
    // Save the filtered word list
    //
    if let Some(path) = &args.export_dictionary {
        let ret: Result<(), DictionaryError> = File::create(path)
            .map_err(DictionaryError::from)
            .and_then(|f| dictionary.write_filtered(BufWriter::new(f)));
        return match ret {
            Ok(()) => {
                println!("{} words written to {}", dictionary.len(), path.display());
                0
            }
            Err(e) => {
                eprintln!("Error: {}: {e}", path.display());
                1
            }
        };
    }

    //
    // Front end response
    //
    if args.api {
        let request: ChunkRequest = ChunkRequest {
            seed: args.seed,
            chunk_x: args.x,
            chunk_y: args.y,
            word_count: args.words,
        };
        let response: ChunkResponse = match ChunkResponse::generate(&request, &dictionary) {
            Ok(r) => r,
            Err(e) => {
                eprintln!("Error: {e}");
                return 1;
            }
        };
        if let Some(path) = args.output {
            if let Err(e) = SaverChunk::new(path.clone()).save_response(&response) {
                eprintln!("Error: {}: {e}", path.display());
                return 1;
            }
            println!("Response saved to {}", path.display());
            return 0;
        }
        return match serde_json::to_string(&response) {
            Ok(s) => {
                println!("{s}");
                0
            }
            Err(e) => {
                eprintln!("Error: {e}");
                1
            }
        };
    }

    //
    // Raw chunk
    //
    let mut chunk: Chunk = match Chunk::new(args.x, args.y, args.size, &args.seed) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {e}");
            return 1;
        }
    };
    chunk.generate(&dictionary, args.words, args.fail_budget);

    if args.json {
        return match serde_json::to_string_pretty(&chunk.report()) {
            Ok(s) => {
                println!("{s}");
                0
            }
            Err(e) => {
                eprintln!("Error: {e}");
                1
            }
        };
    }

    println!(
        "Chunk {}:{},{} ({}x{}), {} words in {} iterations",
        chunk.seed,
        chunk.x,
        chunk.y,
        chunk.size,
        chunk.size,
        chunk.words().len(),
        chunk.iteration
    );
    for record in chunk.words() {
        println!(
            "  {:<12} {:?} -> {:?} ({})",
            record.word.to_uppercase(),
            record.start,
            record.end,
            record.direction
        );
    }
    println!();
    for row in chunk.display_grid() {
        let line: Vec<String> = row.iter().map(|c| c.to_string()).collect();
        println!("  {}", line.join(" "));
    }
    0
}
