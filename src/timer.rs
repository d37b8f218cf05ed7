/*
timer.rs

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

//! Game timer.
//!
//! The timer counts the seconds elapsed since the game started. It does not read the clock: the
//! front end calls [`Timer::tick`] once per second. The timer stops when the player finds all
//! the words.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Elapsed time of a game.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Timer {
    /// Number of seconds elapsed.
    seconds: u64,

    /// Whether the timer counts the ticks.
    running: bool,
}

impl Timer {
    /// Create a [`Timer`] object. The timer is stopped.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset the elapsed time to zero and start counting.
    pub fn restart(&mut self) {
        self.seconds = 0;
        self.running = true;
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Add one second if the timer is running.
    pub fn tick(&mut self) {
        if self.running {
            self.seconds += 1;
        }
    }

    pub fn elapsed(&self) -> Duration {
        Duration::from_secs(self.seconds)
    }

    /// Return the elapsed time as `m:ss`.
    pub fn display(&self) -> String {
        format!("{}:{:02}", self.seconds / 60, self.seconds % 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticks_only_count_while_running() {
        let mut t = Timer::new();
        t.tick();
        assert_eq!(t.elapsed(), Duration::ZERO);

        t.restart();
        for _ in 0..75 {
            t.tick();
        }
        assert_eq!(t.display(), "1:15");

        t.stop();
        t.tick();
        assert_eq!(t.elapsed(), Duration::from_secs(75));
    }

    #[test]
    fn restart_goes_back_to_zero() {
        let mut t = Timer::new();
        t.restart();
        t.tick();
        t.restart();
        assert_eq!(t.display(), "0:00");
        assert!(t.is_running());
    }
}
