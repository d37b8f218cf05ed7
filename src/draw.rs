/*
draw.rs

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

//! Draw the game as plain text for the terminal.
//!
//! Letters of found words are shown in lowercase and selected cells are surrounded by brackets.

use chrono::{DateTime, Local};
use std::fmt::Write;
use std::time::Duration;

use crate::game::Game;
use crate::generator::grid::Grid;
use crate::generator::placement::Placement;
use crate::highscores::Score;

/// Render the grid, one line per row.
pub fn grid(grid: &Grid) -> String {
    let mut out: String = String::with_capacity(grid.size() * (grid.size() * 3 + 6));

    out.push_str("    ");
    for col in 0..grid.size() {
        let _ = write!(out, "{col:>3}");
    }
    out.push('\n');

    for row in 0..grid.size() {
        let _ = write!(out, "{row:>3} ");
        for cell in grid.row(row) {
            let letter: char = cell.letter().unwrap_or('.');
            let letter: char = if cell.is_found() {
                letter.to_ascii_lowercase()
            } else {
                letter
            };
            if cell.is_selected() {
                let _ = write!(out, "[{letter}]");
            } else {
                let _ = write!(out, " {letter} ");
            }
        }
        out.push('\n');
    }
    out
}

/// Render the list of the words to find. Found words are marked with a check mark.
pub fn word_list(game: &Game) -> String {
    let mut out: String = String::from("Words to find:\n");
    for (i, word) in game.words().iter().enumerate() {
        let mark: &str = if game.is_word_found(i) { "✓" } else { " " };
        let _ = writeln!(out, "  {mark} {word}");
    }
    out
}

/// Render the game status line: found words count and timer.
pub fn status(game: &Game) -> String {
    format!(
        "{}/{} words  {}",
        game.found_words().len(),
        game.words().len(),
        game.timer().display()
    )
}

/// Render the solution: the position and direction of each word.
pub fn answer_key(placements: &[Placement]) -> String {
    let mut out: String = String::new();
    for p in placements {
        let _ = writeln!(
            out,
            "{:<15} ({}, {}) {}",
            p.word, p.start.row, p.start.col, p.direction
        );
    }
    out
}

/// Render a completion time as `1h 02m 03s`, `02m 03s`, or `03s`.
pub fn duration(duration: Duration) -> String {
    let secs: u64 = duration.as_secs();
    let h: u64 = secs / 3600;
    let m: u64 = (secs % 3600) / 60;
    let s: u64 = secs % 60;
    if h > 0 {
        format!("{h}h {m:02}m {s:02}s")
    } else if m > 0 {
        format!("{m:02}m {s:02}s")
    } else {
        format!("{s:02}s")
    }
}

/// Render a scoreboard. The `highlight` position (starting at 1) is marked with an arrow.
pub fn scoreboard(scores: &[Score], highlight: Option<usize>) -> String {
    let mut out: String = String::new();
    for (i, score) in scores.iter().enumerate() {
        let position: usize = i + 1;
        let mark: &str = if highlight == Some(position) { "->" } else { "  " };
        let dt: DateTime<Local> = DateTime::from(score.when);
        let _ = writeln!(
            out,
            "{mark} {position:>2}. {:>12}  {:>3} words  {}",
            duration(score.time),
            score.words,
            dt.format("%c")
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::direction::Direction;
    use crate::generator::grid::CellPos;
    use crate::generator::placement::try_place;

    #[test]
    fn found_and_selected_cells_are_marked() {
        let mut g = Grid::new(3);
        try_place(&mut g, "ABC", CellPos::new(0, 0), Direction::East).unwrap();
        g.get_mut(CellPos::new(0, 0)).unwrap().set_found();
        g.get_mut(CellPos::new(0, 1)).unwrap().set_selected(true);

        let text = grid(&g);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[1], "  0  a [B] C ");
        assert_eq!(lines[2], "  1  .  .  . ");
    }

    #[test]
    fn durations_drop_empty_units() {
        assert_eq!(duration(Duration::from_secs(7)), "07s");
        assert_eq!(duration(Duration::from_secs(125)), "02m 05s");
        assert_eq!(duration(Duration::from_secs(3723)), "1h 02m 03s");
    }
}
