/*
config.rs

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

//! Constants and puzzle definition files.
//!
//! A puzzle definition is a JSON file that the author writes (or that the `create` command
//! builds from the command line). It gives the word pool and the page metadata:
//!
//! ```json
//! {
//!   "title": "Marvel Word Search",
//!   "heading": "Marvel",
//!   "words": ["THOR", "LOKI", "HULK"],
//!   "grid_size": 10,
//!   "word_count": 3
//! }
//! ```

use log::debug;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::generator::direction::DirectionSet;
use crate::generator::word_pool::WordPool;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const COPYRIGHT_NOTICE: &str = "Copyright 2025 Hervé Quatremain
License GPLv3+: GNU GPL version 3 or later <https://gnu.org/licenses/gpl.html>.
This is free software: you are free to change and redistribute it.
There is NO WARRANTY, to the extent permitted by law.";

/// Grid dimension when the puzzle does not give one.
pub const DEFAULT_GRID_SIZE: usize = 15;

/// Number of words drawn from the pool for each game.
pub const DEFAULT_WORD_COUNT: usize = 15;

/// Number of placement attempts for a word before giving up.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 5000;

/// Letters used to fill the cells that no word occupies.
pub const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

pub const DEFAULT_TITLE: &str = "Word Search";
pub const DEFAULT_FILE_NAME: &str = "word-search-puzzle.html";

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

fn default_grid_size() -> usize {
    DEFAULT_GRID_SIZE
}

fn default_word_count() -> usize {
    DEFAULT_WORD_COUNT
}

/// Navigation link at the bottom of the puzzle page.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Link {
    pub text: String,
    pub href: String,
}

/// Puzzle definition.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PuzzleDefinition {
    /// Page title, also used to index the best times.
    #[serde(default = "default_title")]
    pub title: String,

    /// Main heading of the page.
    #[serde(default = "default_title")]
    pub heading: String,

    /// Words that the games draw from.
    pub words: WordPool,

    /// Grid dimension.
    #[serde(default = "default_grid_size")]
    pub grid_size: usize,

    /// Number of words drawn for each game.
    #[serde(default = "default_word_count")]
    pub word_count: usize,

    /// Directions the words can take in the grid.
    #[serde(default)]
    pub directions: DirectionSet,

    /// Navigation links.
    #[serde(default)]
    pub links: Vec<Link>,
}

impl PuzzleDefinition {
    /// Create a [`PuzzleDefinition`] object with the default settings.
    pub fn new(words: WordPool) -> Self {
        Self {
            title: default_title(),
            heading: default_title(),
            words,
            grid_size: DEFAULT_GRID_SIZE,
            word_count: DEFAULT_WORD_COUNT,
            directions: DirectionSet::default(),
            links: Vec::new(),
        }
    }

    /// Read a puzzle definition from a JSON file.
    pub fn load(path: &Path) -> Result<Self, Box<dyn Error>> {
        debug!("Loading puzzle definition {path:?}");
        let file: File = File::open(path)?;
        let reader: BufReader<File> = BufReader::new(file);
        let definition: PuzzleDefinition = serde_json::from_reader(reader)?;
        Ok(definition)
    }
}
