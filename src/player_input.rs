/*
player_input.rs

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

//! Normalize the player's pointer and touch input.
//!
//! Pointer devices report the cell under the pointer directly, as a (row, column) pair that
//! can be outside the grid. Touch devices report surface coordinates, which are converted to a
//! cell with a [`BoardLayout`]. Both end up as [`GridEvent`] values that
//! [`crate::game::Game::handle`] processes.

use log::debug;

use crate::generator::grid::{CellPos, Grid};

/// Raw input from the front end.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Pointer button pressed over the given (row, column) cell.
    PointerDown(Option<(i64, i64)>),

    /// Pointer entered the given (row, column) cell while the button is pressed.
    PointerEnter(Option<(i64, i64)>),

    /// Pointer button released.
    PointerUp,

    /// Finger down at the given surface coordinates.
    TouchStart { x: f64, y: f64 },

    /// Finger moved to the given surface coordinates.
    TouchMove { x: f64, y: f64 },

    /// Finger lifted.
    TouchEnd,
}

/// Input for the selection engine. A None cell is a position outside the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridEvent {
    Begin(Option<CellPos>),
    Move(Option<CellPos>),
    End,
}

/// Position and size of the grid on the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoardLayout {
    /// Surface X coordinate of the top left corner of the grid.
    pub origin_x: f64,

    /// Surface Y coordinate of the top left corner of the grid.
    pub origin_y: f64,

    /// Width and height of a cell.
    pub cell_size: f64,
}

impl Default for BoardLayout {
    fn default() -> Self {
        Self {
            origin_x: 0.0,
            origin_y: 0.0,
            cell_size: 1.0,
        }
    }
}

impl BoardLayout {
    /// Return the cell under the given surface coordinates, or None outside the grid.
    pub fn surface_to_cell(&self, grid: &Grid, x: f64, y: f64) -> Option<CellPos> {
        if !x.is_finite() || !y.is_finite() || self.cell_size <= 0.0 {
            return None;
        }
        let col: f64 = ((x - self.origin_x) / self.cell_size).floor();
        let row: f64 = ((y - self.origin_y) / self.cell_size).floor();
        if row < 0.0 || col < 0.0 {
            return None;
        }
        let cell: Option<CellPos> = grid.cell_at(row as i64, col as i64);
        debug!("Surface coordinates ({x}, {y}) => cell {cell:?}");
        cell
    }

    /// Convert an input event to a grid event.
    pub fn normalize(&self, grid: &Grid, event: InputEvent) -> GridEvent {
        let at = |rc: Option<(i64, i64)>| rc.and_then(|(row, col)| grid.cell_at(row, col));

        match event {
            InputEvent::PointerDown(rc) => GridEvent::Begin(at(rc)),
            InputEvent::PointerEnter(rc) => GridEvent::Move(at(rc)),
            InputEvent::TouchStart { x, y } => GridEvent::Begin(self.surface_to_cell(grid, x, y)),
            InputEvent::TouchMove { x, y } => GridEvent::Move(self.surface_to_cell(grid, x, y)),
            InputEvent::PointerUp | InputEvent::TouchEnd => GridEvent::End,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pointer_cells_are_bound_checked() {
        let grid = Grid::new(5);
        let layout = BoardLayout::default();
        assert_eq!(
            layout.normalize(&grid, InputEvent::PointerDown(Some((1, 4)))),
            GridEvent::Begin(Some(CellPos::new(1, 4)))
        );
        assert_eq!(
            layout.normalize(&grid, InputEvent::PointerEnter(Some((1, 5)))),
            GridEvent::Move(None)
        );
        assert_eq!(
            layout.normalize(&grid, InputEvent::PointerEnter(None)),
            GridEvent::Move(None)
        );
        assert_eq!(layout.normalize(&grid, InputEvent::PointerUp), GridEvent::End);
    }

    #[test]
    fn touch_coordinates_map_to_cells() {
        let grid = Grid::new(10);
        let layout = BoardLayout {
            origin_x: 20.0,
            origin_y: 40.0,
            cell_size: 30.0,
        };
        assert_eq!(
            layout.normalize(&grid, InputEvent::TouchStart { x: 20.0, y: 40.0 }),
            GridEvent::Begin(Some(CellPos::new(0, 0)))
        );
        assert_eq!(
            layout.normalize(&grid, InputEvent::TouchMove { x: 115.0, y: 69.9 }),
            GridEvent::Move(Some(CellPos::new(0, 3)))
        );
        assert_eq!(
            layout.normalize(&grid, InputEvent::TouchMove { x: 10.0, y: 50.0 }),
            GridEvent::Move(None)
        );
        assert_eq!(
            layout.normalize(&grid, InputEvent::TouchMove { x: 500.0, y: 50.0 }),
            GridEvent::Move(None)
        );
        assert_eq!(
            layout.normalize(&grid, InputEvent::TouchMove { x: f64::NAN, y: 50.0 }),
            GridEvent::Move(None)
        );
        assert_eq!(layout.normalize(&grid, InputEvent::TouchEnd), GridEvent::End);
    }
}
