/*
lib.rs

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

//! Word-search puzzles.
//!
//! The crate places hidden words in a square grid of letters ([`generator`]), tracks the
//! player's drag selection over the grid ([`selection`]), and matches the selections against
//! the words to find ([`game`]).
//! It can also publish a puzzle as a static HTML page ([`page`]) and keep the best completion
//! times ([`highscores`]).

pub mod cli_options;
pub mod config;
pub mod draw;
pub mod errors;
pub mod game;
pub mod generator;
pub mod highscores;
pub mod page;
pub mod player_input;
pub mod saver;
pub mod selection;
pub mod timer;
