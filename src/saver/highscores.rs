/*
highscores.rs

Copyright 2025 Hervé Quatremain

This file is part of Wordsearch.

Wordsearch is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Wordsearch is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Wordsearch. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Save and restore the best times for the puzzles.
//!
//! The saved object is a serialization of the [`HighScores`] object in JSON format by
//! using [`serde`].
//!
//! This is the only data that outlives a game, and only when the `play` command gets a
//! `--scores` file. Games in progress are not saved.

use log::debug;
use std::error::Error;
use std::fs::{File, remove_file};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::PathBuf;

use crate::highscores::HighScores;

/// Object to save and restore the best times.
#[derive(Debug)]
pub struct SaverHighScores {
    /// Path to the scores file.
    save_file: PathBuf,
}

impl SaverHighScores {
    /// Create a [`SaverHighScores`] object for the given file.
    pub fn new(save_file: PathBuf) -> Self {
        debug!("High scores file: {save_file:?}");
        Self { save_file }
    }

    /// Retrieve the [`HighScores`] object from the scores file.
    ///
    /// Return an empty [`HighScores`] object if the file does not exist yet.
    pub fn get_highscores(&self) -> Result<HighScores, Box<dyn Error>> {
        let file: File = match File::open(&self.save_file) {
            Ok(f) => f,
            Err(error) if error.kind() == ErrorKind::NotFound => return Ok(HighScores::new()),
            Err(error) => return Err(Box::new(error)),
        };
        let reader: BufReader<File> = BufReader::new(file);
        let highscores: HighScores = serde_json::from_reader(reader)?;
        Ok(highscores)
    }

    /// Save the provided [`HighScores`] object.
    pub fn save_highscores(&self, highscores: &HighScores) -> Result<(), Box<dyn Error>> {
        let file: File = File::create(&self.save_file)?;
        let mut writer: BufWriter<File> = BufWriter::new(file);

        serde_json::to_writer(&mut writer, highscores)?;
        writer.flush()?;
        Ok(())
    }

    /// Delete the scores file.
    pub fn delete_save(&self) {
        let _ = remove_file(&self.save_file);
    }
}
