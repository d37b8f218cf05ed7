/*
generator.rs

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

//! Build the letter grid of a game session.
//!
//! A grid is built in three steps:
//!
//! * A list of session words is drawn from a [`word_pool::WordPool`] object by using its
//!   [`word_pool::WordPool::draw`] method.
//!
//! * The words are laid out in an empty [`grid::Grid`] by a [`placement::WordPlacer`] object.
//!   The [`placement::WordPlacer::place_all`] method returns the list of
//!   [`placement::Placement`] objects, which record the cells of each word.
//!   If a word is longer than the grid, or if the placement of a word takes too many attempts,
//!   then the method returns an error and the grid must be discarded.
//!
//! * The remaining empty cells receive random letters with [`grid::Grid::fill_empty`].

pub mod direction;
pub mod grid;
pub mod placement;
pub mod word_pool;

use log::debug;
use rand::Rng;

use crate::config::ALPHABET;
use crate::errors::SetupError;
use direction::DirectionSet;
use grid::Grid;
use placement::{Placement, WordPlacer};

/// Build a complete grid for the given words.
///
/// # Errors
///
/// See [`placement::WordPlacer::place_all`].
pub fn build_grid<R: Rng + ?Sized>(
    words: &[String],
    grid_size: usize,
    directions: DirectionSet,
    max_attempts: usize,
    rng: &mut R,
) -> Result<(Grid, Vec<Placement>), SetupError> {
    if grid_size == 0 {
        return Err(SetupError::InvalidGridSize);
    }
    let mut grid: Grid = Grid::new(grid_size);
    let mut placer: WordPlacer = WordPlacer::new(directions, max_attempts);
    let placements: Vec<Placement> = placer.place_all(&mut grid, words, rng)?;

    let alphabet: Vec<char> = ALPHABET.chars().collect();
    grid.fill_empty(&alphabet, rng);
    debug!(
        "Grid {grid_size}x{grid_size} built in {} attempts ({}s)",
        placer.attempts, placer.duration
    );
    Ok((grid, placements))
}
