/*
errors.rs

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

//! Errors raised while setting up a game session.
//!
//! All these errors abort the session construction: the player never gets a partially
//! initialized grid.
//! Errors caused by the player input (cells outside the grid, cells already selected, moves
//! outside a straight line) are not errors at this level. The selection engine ignores them.

use std::error::Error;
use std::fmt;

/// Type of setup errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetupError {
    /// A word is longer than the grid dimension and cannot fit in any direction.
    WordTooLong {
        word: String,
        length: usize,
        grid_size: usize,
    },

    /// The placement engine gave up on a word after the maximum number of attempts.
    /// Usually, the grid is too small for the number and the length of the words.
    Placement { word: String, attempts: usize },

    /// An empty string was given as a word.
    EmptyWord,

    /// The word pool does not contain any usable word.
    EmptyPool,

    /// The grid dimension is zero.
    InvalidGridSize,

    /// The number of words to draw for the session is zero.
    InvalidWordCount,
}

impl fmt::Display for SetupError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SetupError::WordTooLong {
                word,
                length,
                grid_size,
            } => write!(
                f,
                "the word {word} ({length} letters) does not fit in a {grid_size}x{grid_size} grid"
            ),
            SetupError::Placement { word, attempts } => {
                write!(f, "cannot place the word {word} after {attempts} attempts")
            }
            SetupError::EmptyWord => write!(f, "cannot place an empty word"),
            SetupError::EmptyPool => write!(f, "the word pool is empty"),
            SetupError::InvalidGridSize => write!(f, "the grid size must be at least 1"),
            SetupError::InvalidWordCount => write!(f, "the word count must be at least 1"),
        }
    }
}

impl Error for SetupError {}
