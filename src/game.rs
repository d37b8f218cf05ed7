/*
game.rs

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

//! Manage the status of a game in progress.
//!
//! A [`Game`] object owns everything that lives for the duration of one play-through: the
//! grid, the session words and their placements, the found words, the drag in progress, and
//! the timer. Resetting the game draws new words and rebuilds the grid.

use log::{debug, info};
use rand::Rng;
use std::time::Duration;

use crate::config::{MAX_PLACEMENT_ATTEMPTS, PuzzleDefinition};
use crate::errors::SetupError;
use crate::generator;
use crate::generator::direction::DirectionSet;
use crate::generator::grid::{CellPos, Grid};
use crate::generator::placement::Placement;
use crate::generator::word_pool::WordPool;
use crate::player_input::GridEvent;
use crate::selection::Selection;
use crate::timer::Timer;

/// Parameters for building a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSettings {
    /// Grid dimension.
    pub grid_size: usize,

    /// Number of words drawn from the pool.
    pub word_count: usize,

    /// Directions that the words can take.
    pub directions: DirectionSet,

    /// Number of placement attempts for each word.
    pub max_attempts: usize,
}

impl From<&PuzzleDefinition> for GameSettings {
    fn from(definition: &PuzzleDefinition) -> Self {
        Self {
            grid_size: definition.grid_size,
            word_count: definition.word_count,
            directions: definition.directions,
            max_attempts: MAX_PLACEMENT_ATTEMPTS,
        }
    }
}

/// Notifications produced when the player releases the pointer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// The selection matched a word that was not found yet.
    WordFound { word: String, cells: Vec<CellPos> },

    /// The selection did not match any word still to find.
    Missed { candidate: String },

    /// All the words are found. This event is sent only once per game.
    Completed { elapsed: Duration },
}

/// Game in progress.
#[derive(Debug)]
pub struct Game {
    /// Words to draw from when the game is reset.
    pool: WordPool,

    settings: GameSettings,

    grid: Grid,

    /// Session words, in the order they were drawn.
    words: Vec<String>,

    /// Cells of each session word, in the same order as [`Game::words`].
    placements: Vec<Placement>,

    /// Whether each session word has been found, in the same order as [`Game::words`].
    found: Vec<bool>,

    /// Found words in the order the player found them.
    found_words: Vec<String>,

    selection: Selection,

    timer: Timer,

    /// Whether the completion has been reported.
    completed: bool,
}

impl Game {
    /// Create a game with words drawn from `pool`.
    ///
    /// # Errors
    ///
    /// The game is not created if no word can be drawn, or if the words cannot be placed in the
    /// grid.
    pub fn new(pool: WordPool, settings: GameSettings) -> Result<Self, SetupError> {
        Self::new_with_rng(pool, settings, &mut rand::rng())
    }

    /// Same as [`Game::new`], with the given random number generator.
    pub fn new_with_rng<R: Rng + ?Sized>(
        pool: WordPool,
        settings: GameSettings,
        rng: &mut R,
    ) -> Result<Self, SetupError> {
        let (words, grid, placements) = Self::build(&pool, &settings, rng)?;
        let mut game: Game = Self {
            pool,
            settings,
            grid,
            found: vec![false; words.len()],
            words,
            placements,
            found_words: Vec::new(),
            selection: Selection::new(),
            timer: Timer::new(),
            completed: false,
        };
        game.timer.restart();
        Ok(game)
    }

    /// Create a game from a grid that already contains the words.
    ///
    /// The session words are the words of the placements. Resetting the game draws from these
    /// words.
    pub fn from_grid(grid: Grid, placements: Vec<Placement>) -> Self {
        let words: Vec<String> = placements.iter().map(|p| p.word.clone()).collect();
        let settings: GameSettings = GameSettings {
            grid_size: grid.size(),
            word_count: words.len(),
            directions: DirectionSet::All,
            max_attempts: MAX_PLACEMENT_ATTEMPTS,
        };
        let mut timer: Timer = Timer::new();
        timer.restart();
        Self {
            pool: WordPool::new(&words),
            settings,
            grid,
            found: vec![false; words.len()],
            words,
            placements,
            found_words: Vec::new(),
            selection: Selection::new(),
            timer,
            completed: false,
        }
    }

    /// Draw the words and build the grid. Nothing is returned on error.
    fn build<R: Rng + ?Sized>(
        pool: &WordPool,
        settings: &GameSettings,
        rng: &mut R,
    ) -> Result<(Vec<String>, Grid, Vec<Placement>), SetupError> {
        let words: Vec<String> = pool.draw(settings.word_count, rng)?;
        let (grid, placements) = generator::build_grid(
            &words,
            settings.grid_size,
            settings.directions,
            settings.max_attempts,
            rng,
        )?;
        info!(
            "New game: {} words in a {}x{} grid",
            words.len(),
            settings.grid_size,
            settings.grid_size
        );
        Ok((words, grid, placements))
    }

    /// Draw new words, rebuild the grid, and restart the timer.
    ///
    /// # Errors
    ///
    /// On error, the current game is left unchanged.
    pub fn reset(&mut self) -> Result<(), SetupError> {
        self.reset_with_rng(&mut rand::rng())
    }

    /// Same as [`Game::reset`], with the given random number generator.
    pub fn reset_with_rng<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), SetupError> {
        let (words, grid, placements) = Self::build(&self.pool, &self.settings, rng)?;
        self.found = vec![false; words.len()];
        self.words = words;
        self.grid = grid;
        self.placements = placements;
        self.found_words.clear();
        self.selection.clear();
        self.completed = false;
        self.timer.restart();
        Ok(())
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn settings(&self) -> &GameSettings {
        &self.settings
    }

    /// Return the session words.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// Return the found words, in the order the player found them.
    pub fn found_words(&self) -> &[String] {
        &self.found_words
    }

    /// Whether the session word at the given index has been found.
    pub fn is_word_found(&self, index: usize) -> bool {
        self.found.get(index).copied().unwrap_or(false)
    }

    /// Whether all the words are found.
    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn timer(&self) -> &Timer {
        &self.timer
    }

    /// Count one second on the game timer.
    pub fn tick(&mut self) {
        self.timer.tick();
    }

    /// Process an input event and return the resulting notifications.
    pub fn handle(&mut self, event: GridEvent) -> Vec<GameEvent> {
        match event {
            GridEvent::Begin(cell) => {
                self.begin(cell);
                Vec::new()
            }
            GridEvent::Move(cell) => {
                self.drag_to(cell);
                Vec::new()
            }
            GridEvent::End => self.end(),
        }
    }

    /// Start a drag from the given cell. A None cell (outside the grid) is ignored.
    pub fn begin(&mut self, cell: Option<CellPos>) {
        let Some(pos) = cell.filter(|p| self.grid.contains(*p)) else {
            debug!("Ignoring drag start outside the grid");
            return;
        };
        for p in self.selection.begin(pos) {
            self.set_selected(p, false);
        }
        self.set_selected(pos, true);
    }

    /// Extend the drag to the given cell. A None cell (outside the grid) is ignored.
    pub fn drag_to(&mut self, cell: Option<CellPos>) {
        let Some(pos) = cell.filter(|p| self.grid.contains(*p)) else {
            return;
        };
        for p in self.selection.extend(pos) {
            self.set_selected(p, true);
        }
    }

    /// End the drag and verify whether the selection spells a word to find.
    pub fn end(&mut self) -> Vec<GameEvent> {
        let Some(path) = self.selection.finish() else {
            return Vec::new();
        };
        let candidate: String = self.grid.word_at(&path);

        // With duplicated words, each entry is found separately
        let index: Option<usize> =
            (0..self.words.len()).find(|i| self.words[*i] == candidate && !self.found[*i]);

        let Some(i) = index else {
            debug!("No match for {candidate}");
            for p in &path {
                self.set_selected(*p, false);
            }
            return vec![GameEvent::Missed { candidate }];
        };

        self.found[i] = true;
        self.found_words.push(candidate.clone());
        for p in &path {
            if let Some(cell) = self.grid.get_mut(*p) {
                cell.set_found();
            }
        }
        info!(
            "Found {candidate} ({}/{})",
            self.found_words.len(),
            self.words.len()
        );

        let mut events: Vec<GameEvent> = vec![GameEvent::WordFound {
            word: candidate,
            cells: path,
        }];
        if !self.completed && self.found.iter().all(|f| *f) {
            self.completed = true;
            self.timer.stop();
            info!("All words found in {}", self.timer.display());
            events.push(GameEvent::Completed {
                elapsed: self.timer.elapsed(),
            });
        }
        events
    }

    fn set_selected(&mut self, pos: CellPos, selected: bool) {
        if let Some(cell) = self.grid.get_mut(pos) {
            cell.set_selected(selected);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::direction::Direction;
    use crate::generator::placement::try_place;

    fn pos(row: usize, col: usize) -> CellPos {
        CellPos::new(row, col)
    }

    /// Grid with "CAT" on row 2 from column 0 and "DOG" on column 5 from row 0, the other
    /// cells filled with X.
    fn cat_dog() -> Game {
        let mut grid = Grid::new(10);
        let cat = try_place(&mut grid, "CAT", pos(2, 0), Direction::East).unwrap();
        let dog = try_place(&mut grid, "DOG", pos(0, 5), Direction::South).unwrap();
        let mut rng = rand::rng();
        grid.fill_empty(&['X'], &mut rng);
        Game::from_grid(grid, vec![cat, dog])
    }

    #[test]
    fn drag_over_word_finds_it() {
        let mut game = cat_dog();
        game.begin(Some(pos(2, 0)));
        game.drag_to(Some(pos(2, 1)));
        game.drag_to(Some(pos(2, 2)));
        assert!(game.grid().get(pos(2, 1)).unwrap().is_selected());

        let events = game.end();
        assert_eq!(
            events,
            vec![GameEvent::WordFound {
                word: "CAT".to_string(),
                cells: vec![pos(2, 0), pos(2, 1), pos(2, 2)],
            }]
        );
        assert_eq!(game.found_words(), ["CAT"]);
        for c in 0..3 {
            let cell = game.grid().get(pos(2, c)).unwrap();
            assert!(cell.is_found());
            assert!(!cell.is_selected());
        }
        assert!(game.is_word_found(0));
        assert!(!game.is_word_found(1));
    }

    #[test]
    fn drag_over_filler_is_missed() {
        let mut game = cat_dog();
        game.begin(Some(pos(9, 0)));
        game.drag_to(Some(pos(9, 3)));
        assert_eq!(
            game.end(),
            vec![GameEvent::Missed {
                candidate: "XXXX".to_string()
            }]
        );
        assert!(game.found_words().is_empty());
        assert!(game.grid().cells().all(|c| !c.is_selected() && !c.is_found()));
    }

    #[test]
    fn reversed_word_does_not_match() {
        let mut game = cat_dog();
        game.begin(Some(pos(2, 2)));
        game.drag_to(Some(pos(2, 0)));
        assert_eq!(
            game.end(),
            vec![GameEvent::Missed {
                candidate: "TAC".to_string()
            }]
        );
    }

    #[test]
    fn completion_is_reported_once() {
        let mut game = cat_dog();
        game.tick();
        game.begin(Some(pos(0, 5)));
        game.drag_to(Some(pos(2, 5)));
        assert_eq!(game.end().len(), 1);

        game.begin(Some(pos(2, 0)));
        game.drag_to(Some(pos(2, 2)));
        let events = game.end();
        assert_eq!(
            events.last(),
            Some(&GameEvent::Completed {
                elapsed: Duration::from_secs(1)
            })
        );
        assert!(game.is_completed());
        assert!(!game.timer().is_running());

        // Finding the same word again changes nothing
        game.begin(Some(pos(2, 0)));
        game.drag_to(Some(pos(2, 2)));
        assert_eq!(
            game.end(),
            vec![GameEvent::Missed {
                candidate: "CAT".to_string()
            }]
        );
        assert_eq!(game.found_words().len(), 2);
    }

    #[test]
    fn events_outside_grid_are_ignored() {
        let mut game = cat_dog();
        game.begin(None);
        assert!(!game.selection().is_dragging());
        game.begin(Some(pos(10, 0)));
        assert!(!game.selection().is_dragging());
        assert!(game.end().is_empty());

        game.begin(Some(pos(2, 0)));
        game.drag_to(None);
        game.drag_to(Some(pos(2, 42)));
        assert_eq!(game.selection().path(), [pos(2, 0)]);
    }

    #[test]
    fn restarted_drag_clears_previous_selection() {
        let mut game = cat_dog();
        game.begin(Some(pos(5, 0)));
        game.drag_to(Some(pos(5, 2)));
        game.begin(Some(pos(7, 7)));
        assert!(!game.grid().get(pos(5, 1)).unwrap().is_selected());
        assert!(game.grid().get(pos(7, 7)).unwrap().is_selected());
    }
}
