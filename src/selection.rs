/*
selection.rs

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

//! Track the cells that the player selects by dragging over the grid.
//!
//! A selection starts at an anchor cell and can only grow along a straight line. The direction
//! of the line is fixed by the first accepted move and every later move is checked again from
//! the anchor, which tolerates pointer jitter. When the pointer skips cells, the missing cells
//! are added so that the path stays contiguous.
//!
//! The object only manages the path. Cell tags and word matching are handled by
//! [`crate::game::Game`].

use log::debug;

use crate::generator::direction::Direction;
use crate::generator::grid::CellPos;

/// Drag in progress.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    /// Selected cells, from the anchor to the current cell.
    path: Vec<CellPos>,

    /// Direction of the line, once the player moved out of the anchor cell.
    direction: Option<Direction>,

    /// Whether a drag is in progress.
    dragging: bool,
}

impl Selection {
    /// Create a [`Selection`] object in the idle state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Return the selected cells.
    pub fn path(&self) -> &[CellPos] {
        &self.path
    }

    /// Return the direction of the line, or None while the path only has the anchor.
    pub fn direction(&self) -> Option<Direction> {
        self.direction
    }

    /// Return the anchor cell.
    pub fn anchor(&self) -> Option<CellPos> {
        self.path.first().copied()
    }

    /// Start a new drag from the given cell.
    ///
    /// A drag already in progress is dropped and its cells are returned so that the caller can
    /// clear their tags.
    pub fn begin(&mut self, cell: CellPos) -> Vec<CellPos> {
        let previous: Vec<CellPos> = if self.dragging {
            debug!("Drag restarted before the previous one ended");
            std::mem::take(&mut self.path)
        } else {
            Vec::new()
        };
        self.path = vec![cell];
        self.direction = None;
        self.dragging = true;
        previous
    }

    /// Extend the drag to the given cell and return the cells added to the path, in order.
    ///
    /// The returned list is empty when the move is ignored: no drag in progress, cell already
    /// in the path, or cell outside the line that goes through the anchor in the selection
    /// direction.
    pub fn extend(&mut self, cell: CellPos) -> Vec<CellPos> {
        if !self.dragging {
            return Vec::new();
        }
        if self.path.contains(&cell) {
            return Vec::new();
        }
        let Some(anchor) = self.anchor() else {
            return Vec::new();
        };

        let direction: Direction = match Direction::between(anchor, cell) {
            Some(d) => d,
            None => {
                debug!(
                    "Ignoring cell ({}, {}): not in line with the anchor",
                    cell.row, cell.col
                );
                return Vec::new();
            }
        };
        match self.direction {
            Some(d) if d != direction => {
                debug!(
                    "Ignoring cell ({}, {}): the selection goes {d}, not {direction}",
                    cell.row, cell.col
                );
                return Vec::new();
            }
            Some(_) => (),
            None => self.direction = Some(direction),
        }

        // The cell is on the ray from the anchor and not in the path, so it lies beyond the
        // current end. Walk from the end to the cell.
        let (d_row, d_col) = direction.step();
        let mut added: Vec<CellPos> = Vec::new();
        let mut pos: CellPos = self.path[self.path.len() - 1];
        while pos != cell {
            pos = match pos.offset(d_row, d_col) {
                Some(p) => p,
                None => break,
            };
            added.push(pos);
        }
        self.path.extend_from_slice(&added);
        added
    }

    /// End the drag and return the selected cells, or None if no drag was in progress.
    ///
    /// The selection goes back to the idle state.
    pub fn finish(&mut self) -> Option<Vec<CellPos>> {
        if !self.dragging {
            return None;
        }
        self.dragging = false;
        self.direction = None;
        Some(std::mem::take(&mut self.path))
    }

    /// Drop the drag in progress, if any, without evaluating it.
    pub fn clear(&mut self) {
        self.path.clear();
        self.direction = None;
        self.dragging = false;
    }
}
