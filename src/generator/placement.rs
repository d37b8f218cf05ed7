/*
placement.rs

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

//! Place the session words in the grid.
//!
//! Each word gets a random direction and a random anchor cell from which the whole word fits in
//! the grid. The attempt is accepted only if every cell along the way is empty or already holds
//! the same letter (crossing words share letters). Rejected attempts are retried with a new
//! direction and a new anchor, up to [`WordPlacer::max_attempts`] times.

use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use std::time::Instant;

use super::direction::{Direction, DirectionSet};
use super::grid::{CellPos, Grid};
use crate::errors::SetupError;

/// Cells occupied by a word.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Placement {
    /// Placed word.
    pub word: String,

    /// Cell of the first letter.
    pub start: CellPos,

    /// Direction in which the word reads.
    pub direction: Direction,

    /// Cells of the word, from the first to the last letter.
    pub cells: Vec<CellPos>,
}

/// Cells covered by a word of `length` letters starting at `start`, or None if the word would
/// leave a grid of dimension `size`.
pub fn word_cells(
    start: CellPos,
    direction: Direction,
    length: usize,
    size: usize,
) -> Option<Vec<CellPos>> {
    let (d_row, d_col) = direction.step();
    let mut cells: Vec<CellPos> = Vec::with_capacity(length);
    let mut pos: CellPos = start;

    for i in 0..length {
        if pos.row >= size || pos.col >= size {
            return None;
        }
        cells.push(pos);
        if i + 1 < length {
            pos = pos.offset(d_row, d_col)?;
        }
    }
    Some(cells)
}

/// Try to write `word` into the grid from `start` along `direction`.
///
/// The grid is checked first and written only if all the cells accept the letter, so a
/// rejected attempt leaves the grid untouched.
pub fn try_place(
    grid: &mut Grid,
    word: &str,
    start: CellPos,
    direction: Direction,
) -> Option<Placement> {
    let letters: Vec<char> = word.chars().collect();
    let cells: Vec<CellPos> = word_cells(start, direction, letters.len(), grid.size())?;

    let fits: bool = cells
        .iter()
        .zip(&letters)
        .all(|(pos, letter)| match grid.letter(*pos) {
            Some(l) => l == *letter,
            None => true,
        });
    if !fits {
        return None;
    }

    for (pos, letter) in cells.iter().zip(&letters) {
        grid.set_letter(*pos, *letter);
    }
    Some(Placement {
        word: word.to_string(),
        start,
        direction,
        cells,
    })
}

/// Range of the anchor coordinate along one axis so that `length` cells stay in the grid.
fn anchor_range(step: isize, length: usize, size: usize) -> RangeInclusive<usize> {
    match step {
        1 => 0..=size - length,
        -1 => length - 1..=size - 1,
        _ => 0..=size - 1,
    }
}

/// Word placement engine.
#[derive(Debug)]
pub struct WordPlacer {
    /// Directions that words can take.
    pub directions: DirectionSet,

    /// Maximum number of attempts for each word. When reached, the placement fails with
    /// [`SetupError::Placement`].
    pub max_attempts: usize,

    /// Total number of attempts made by the last [`WordPlacer::place_all`] call.
    pub attempts: usize,

    /// Duration in seconds of the last [`WordPlacer::place_all`] call.
    pub duration: f32,
}

impl WordPlacer {
    /// Create a [`WordPlacer`] object.
    pub fn new(directions: DirectionSet, max_attempts: usize) -> Self {
        Self {
            directions,
            max_attempts,
            attempts: 0,
            duration: 0.0,
        }
    }

    /// Verify that every word fits in the grid dimension.
    ///
    /// # Errors
    ///
    /// Return [`SetupError::WordTooLong`] for the first word longer than the grid dimension.
    pub fn check_lengths(words: &[String], grid_size: usize) -> Result<(), SetupError> {
        if let Some(word) = words.iter().find(|w| w.chars().count() > grid_size) {
            return Err(SetupError::WordTooLong {
                word: word.clone(),
                length: word.chars().count(),
                grid_size,
            });
        }
        Ok(())
    }

    /// Place all the words in the grid, in the given order, and return their placements.
    ///
    /// The filler letters are not added: call [`Grid::fill_empty`] afterward.
    ///
    /// # Errors
    ///
    /// The lengths are verified before any attempt, and the method returns
    /// [`SetupError::WordTooLong`] if a word cannot fit in the grid.
    /// The method returns [`SetupError::Placement`] if a word could not be placed in
    /// [`WordPlacer::max_attempts`] attempts. In both cases the grid must be discarded.
    pub fn place_all<R: Rng + ?Sized>(
        &mut self,
        grid: &mut Grid,
        words: &[String],
        rng: &mut R,
    ) -> Result<Vec<Placement>, SetupError> {
        let start: Instant = Instant::now();
        self.attempts = 0;
        self.duration = 0.0;

        if grid.size() == 0 {
            return Err(SetupError::InvalidGridSize);
        }
        Self::check_lengths(words, grid.size())?;

        let mut placements: Vec<Placement> = Vec::with_capacity(words.len());
        for word in words {
            placements.push(self.place(grid, word, rng)?);
        }

        self.duration = start.elapsed().as_secs_f32();
        debug!(
            "Placed {} words: attempts = {}  duration = {}",
            placements.len(),
            self.attempts,
            self.duration
        );
        Ok(placements)
    }

    /// Place a single word, retrying with new random directions and anchors.
    fn place<R: Rng + ?Sized>(
        &mut self,
        grid: &mut Grid,
        word: &str,
        rng: &mut R,
    ) -> Result<Placement, SetupError> {
        let length: usize = word.chars().count();
        let size: usize = grid.size();
        if length == 0 {
            return Err(SetupError::EmptyWord);
        }

        for attempt in 1..=self.max_attempts {
            self.attempts += 1;

            let direction: Direction = Direction::random(self.directions, rng);
            let (d_row, d_col) = direction.step();
            let start: CellPos = CellPos::new(
                rng.random_range(anchor_range(d_row, length, size)),
                rng.random_range(anchor_range(d_col, length, size)),
            );

            if let Some(placement) = try_place(grid, word, start, direction) {
                debug!(
                    "Word {word} placed at ({}, {}) going {direction} (attempt {attempt})",
                    start.row, start.col
                );
                return Ok(placement);
            }
        }
        debug!("Giving up on word {word} after {} attempts", self.max_attempts);
        Err(SetupError::Placement {
            word: word.to_string(),
            attempts: self.max_attempts,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn word_cells_stay_in_grid() {
        assert_eq!(
            word_cells(CellPos::new(0, 2), Direction::West, 3, 5),
            Some(vec![
                CellPos::new(0, 2),
                CellPos::new(0, 1),
                CellPos::new(0, 0)
            ])
        );
        assert_eq!(word_cells(CellPos::new(0, 1), Direction::West, 3, 5), None);
        assert_eq!(word_cells(CellPos::new(3, 3), Direction::SouthEast, 3, 5), None);
    }

    #[test]
    fn crossing_words_share_letters() {
        let mut grid = Grid::new(5);
        assert!(try_place(&mut grid, "CAT", CellPos::new(1, 0), Direction::East).is_some());
        // "BAD" crosses "CAT" on the A
        assert!(try_place(&mut grid, "BAD", CellPos::new(0, 1), Direction::South).is_some());
        assert_eq!(grid.letter(CellPos::new(1, 1)), Some('A'));
    }

    #[test]
    fn conflicting_attempt_leaves_grid_untouched() {
        let mut grid = Grid::new(5);
        try_place(&mut grid, "CAT", CellPos::new(1, 0), Direction::East).unwrap();
        let before = grid.clone();
        // "DOG" would overwrite the A of "CAT" with an O
        assert!(try_place(&mut grid, "DOG", CellPos::new(0, 1), Direction::South).is_none());
        assert_eq!(grid, before);
    }

    #[test]
    fn anchor_ranges_keep_words_inside() {
        assert_eq!(anchor_range(1, 4, 10), 0..=6);
        assert_eq!(anchor_range(-1, 4, 10), 3..=9);
        assert_eq!(anchor_range(0, 4, 10), 0..=9);
        assert_eq!(anchor_range(1, 10, 10), 0..=0);
    }

    #[test]
    fn too_long_word_fails_before_any_attempt() {
        let mut grid = Grid::new(1);
        let mut placer = WordPlacer::new(DirectionSet::All, 100);
        let mut rng = StdRng::seed_from_u64(1);
        let ret = placer.place_all(&mut grid, &["AB".to_string()], &mut rng);
        assert_eq!(
            ret,
            Err(SetupError::WordTooLong {
                word: "AB".to_string(),
                length: 2,
                grid_size: 1
            })
        );
        assert_eq!(placer.attempts, 0);
    }

    #[test]
    fn exhausted_attempts_raise_placement_error() {
        // Words without common letters need disjoint lines and a 3x3 grid only has three
        let mut grid = Grid::new(3);
        let words: Vec<String> = ["ABC", "DEF", "GHI", "JKL"]
            .iter()
            .map(|w| w.to_string())
            .collect();
        let mut placer = WordPlacer::new(DirectionSet::Forward, 50);
        let mut rng = StdRng::seed_from_u64(3);
        match placer.place_all(&mut grid, &words, &mut rng) {
            Err(SetupError::Placement { attempts, .. }) => assert_eq!(attempts, 50),
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
