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

//! Manage the best completion times for the puzzles.
//!
//! The main object, [`HighScores`], maintains a list of best times for each puzzle. A puzzle is
//! identified by its title and its grid size.
//! See the [`crate::saver::highscores`] module that saves and restores the [`HighScores`] object.
//!
//! Only completion times are kept. The grid, the words, and the progress of a game in play are
//! never saved, and the best times are written only when the player gives a scores file.

use std::collections::HashMap;
use std::time::{Duration, SystemTime};

use serde::{Deserialize, Serialize};

/// Number of entries per scoreboard (number of top scores to keep).
const BOARD_SIZE: usize = 10;

/// Object that represent a score.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Score {
    /// How long it took to find all the words.
    pub time: Duration,

    /// Number of words in the game.
    pub words: usize,

    /// Completion timestamp, which is used to display the date and time in the scoreboard.
    pub when: SystemTime,
}

/// Sorted list of the top scores for a puzzle.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
struct PuzzleHighScoreBoard {
    /// Scores sorted by time, fastest first.
    /// The number of scores in this list is controlled by the [`BOARD_SIZE`] constant.
    top: Vec<Score>,
}

impl PuzzleHighScoreBoard {
    /// Add a score to the scoreboard and return the position in the board, or None if the
    /// score does not make it to the board.
    ///
    /// The returned position starts at 1 (top score). A new score ranks after the existing
    /// scores with the same time.
    fn add_score(&mut self, score: Score) -> Option<usize> {
        let i: usize = self.top.partition_point(|s| s.time <= score.time);
        if i >= BOARD_SIZE {
            return None;
        }
        self.top.insert(i, score);
        self.top.truncate(BOARD_SIZE);
        Some(i + 1)
    }
}

/// List of the scoreboards for the puzzles.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct HighScores {
    /// Map of the [`PuzzleHighScoreBoard`] scoreboards indexed by the puzzle.
    ///
    /// The puzzle index is a string in the format "<title>@@<grid_size>".
    board: HashMap<String, PuzzleHighScoreBoard>,
}

impl HighScores {
    /// Create a [`HighScores`] object.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the string that is used as an index for the list of scoreboards.
    fn build_key(title: &str, grid_size: usize) -> String {
        format!("{title}@@{grid_size}")
    }

    /// Add a completion time to the scoreboard of the given puzzle and return the position in
    /// the scoreboard, or None if the time does not make it to the board.
    ///
    /// The returned position starts at 1 (top score).
    pub fn add_score(
        &mut self,
        title: &str,
        grid_size: usize,
        time: Duration,
        words: usize,
    ) -> Option<usize> {
        self.board
            .entry(Self::build_key(title, grid_size))
            .or_default()
            .add_score(Score {
                time,
                words,
                when: SystemTime::now(),
            })
    }

    /// Return the scores for the given puzzle, fastest first.
    ///
    /// Return None when the puzzle has no scoreboard.
    pub fn get_score(&self, title: &str, grid_size: usize) -> Option<&[Score]> {
        self.board
            .get(&Self::build_key(title, grid_size))
            .map(|b| b.top.as_slice())
    }

    /// Return whether the list of scoreboard is empty (no scoreboard for any puzzle)
    pub fn is_empty(&self) -> bool {
        self.board.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secs(s: u64) -> Duration {
        Duration::from_secs(s)
    }

    #[test]
    fn scores_are_sorted_and_ranked() {
        let mut hs = HighScores::new();
        assert!(hs.is_empty());
        assert_eq!(hs.add_score("Marvel", 15, secs(90), 15), Some(1));
        assert_eq!(hs.add_score("Marvel", 15, secs(60), 15), Some(1));
        assert_eq!(hs.add_score("Marvel", 15, secs(120), 15), Some(3));
        assert_eq!(hs.add_score("Marvel", 15, secs(90), 15), Some(3));

        let times: Vec<Duration> = hs
            .get_score("Marvel", 15)
            .unwrap()
            .iter()
            .map(|s| s.time)
            .collect();
        assert_eq!(times, [secs(60), secs(90), secs(90), secs(120)]);
        assert!(hs.get_score("Marvel", 10).is_none());
    }

    #[test]
    fn board_keeps_the_best_ten() {
        let mut hs = HighScores::new();
        for s in 1..=BOARD_SIZE as u64 {
            hs.add_score("Animals", 10, secs(s * 10), 5);
        }
        assert_eq!(hs.add_score("Animals", 10, secs(500), 5), None);
        assert_eq!(hs.add_score("Animals", 10, secs(5), 5), Some(1));

        let board = hs.get_score("Animals", 10).unwrap();
        assert_eq!(board.len(), BOARD_SIZE);
        assert_eq!(board.last().unwrap().time, secs(90));
    }
}
