/*
grid.rs

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

//! Letter grid of a word-search puzzle.
//!
//! The grid is a square matrix of [`Cell`] objects stored in a flat vector and addressed by
//! [`CellPos`]. Lookups are direct index computations.

use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Position of a cell in the grid. Rows and columns start at 0.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellPos {
    pub row: usize,
    pub col: usize,
}

impl CellPos {
    /// Create a [`CellPos`] object.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Return the position moved by the given row and column offsets, or None if the result
    /// would have a negative coordinate.
    pub fn offset(self, d_row: isize, d_col: isize) -> Option<Self> {
        Some(Self {
            row: self.row.checked_add_signed(d_row)?,
            col: self.col.checked_add_signed(d_col)?,
        })
    }
}

/// Cell of the grid.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Cell {
    /// Position of the cell in the grid.
    pos: CellPos,

    /// Letter in the cell, or None until a word or a filler letter is written.
    letter: Option<char>,

    /// Whether the cell is part of the drag in progress.
    selected: bool,

    /// Whether the cell belongs to a word that the player found.
    found: bool,
}

impl Cell {
    fn new(pos: CellPos) -> Self {
        Self {
            pos,
            letter: None,
            selected: false,
            found: false,
        }
    }

    pub fn pos(&self) -> CellPos {
        self.pos
    }

    pub fn letter(&self) -> Option<char> {
        self.letter
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub fn is_found(&self) -> bool {
        self.found
    }

    pub fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }

    /// Mark the cell as part of a found word. The `selected` tag is removed.
    pub fn set_found(&mut self) {
        self.found = true;
        self.selected = false;
    }
}

/// Square letter grid.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Grid {
    /// Number of rows, which is also the number of columns.
    size: usize,

    /// Cells in row-major order.
    cells: Vec<Cell>,
}

impl Grid {
    /// Create an empty grid of `size` rows and `size` columns.
    pub fn new(size: usize) -> Self {
        let mut cells: Vec<Cell> = Vec::with_capacity(size * size);
        for row in 0..size {
            for col in 0..size {
                cells.push(Cell::new(CellPos::new(row, col)));
            }
        }
        Self { size, cells }
    }

    /// Return the grid dimension.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether the position is inside the grid.
    pub fn contains(&self, pos: CellPos) -> bool {
        pos.row < self.size && pos.col < self.size
    }

    /// Convert signed coordinates, as received from the input devices, to a position in the
    /// grid. Return None for coordinates outside the grid.
    pub fn cell_at(&self, row: i64, col: i64) -> Option<CellPos> {
        let row: usize = usize::try_from(row).ok()?;
        let col: usize = usize::try_from(col).ok()?;
        let pos: CellPos = CellPos::new(row, col);
        if self.contains(pos) { Some(pos) } else { None }
    }

    fn index(&self, pos: CellPos) -> Option<usize> {
        if self.contains(pos) {
            Some(pos.row * self.size + pos.col)
        } else {
            None
        }
    }

    pub fn get(&self, pos: CellPos) -> Option<&Cell> {
        self.index(pos).map(|i| &self.cells[i])
    }

    pub fn get_mut(&mut self, pos: CellPos) -> Option<&mut Cell> {
        self.index(pos).map(|i| &mut self.cells[i])
    }

    /// Return the letter at the given position, or None for an empty or out of range cell.
    pub fn letter(&self, pos: CellPos) -> Option<char> {
        self.get(pos).and_then(|c| c.letter)
    }

    /// Write a letter into the cell. Out of range positions are ignored.
    pub fn set_letter(&mut self, pos: CellPos, letter: char) {
        if let Some(cell) = self.get_mut(pos) {
            cell.letter = Some(letter);
        }
    }

    /// Return an iterator over the cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Return the cells of the given row.
    pub fn row(&self, row: usize) -> &[Cell] {
        if row >= self.size {
            return &[];
        }
        &self.cells[row * self.size..(row + 1) * self.size]
    }

    /// Concatenate the letters of the given cells. Empty cells are skipped.
    pub fn word_at(&self, cells: &[CellPos]) -> String {
        cells.iter().filter_map(|pos| self.letter(*pos)).collect()
    }

    /// Whether every cell holds a letter.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| c.letter.is_some())
    }

    /// Give a random letter from `alphabet` to every empty cell.
    ///
    /// This must only run after all the words have been placed, so that filler letters never
    /// take part in the overlap checks.
    pub fn fill_empty<R: Rng + ?Sized>(&mut self, alphabet: &[char], rng: &mut R) {
        if alphabet.is_empty() {
            return;
        }
        let mut filled: usize = 0;
        for cell in self.cells.iter_mut().filter(|c| c.letter.is_none()) {
            cell.letter = Some(alphabet[rng.random_range(0..alphabet.len())]);
            filled += 1;
        }
        debug!("Filled {filled} empty cells");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn positions_are_row_major() {
        let grid = Grid::new(4);
        let cell = grid.get(CellPos::new(2, 3)).unwrap();
        assert_eq!(cell.pos(), CellPos::new(2, 3));
        assert_eq!(grid.row(1).len(), 4);
        assert_eq!(grid.row(1)[0].pos(), CellPos::new(1, 0));
        assert!(grid.row(4).is_empty());
    }

    #[test]
    fn out_of_range_coordinates_are_rejected() {
        let grid = Grid::new(3);
        assert_eq!(grid.cell_at(-1, 0), None);
        assert_eq!(grid.cell_at(0, 3), None);
        assert_eq!(grid.cell_at(2, 2), Some(CellPos::new(2, 2)));
        assert!(grid.get(CellPos::new(3, 0)).is_none());
    }

    #[test]
    fn fill_only_touches_empty_cells() {
        let mut grid = Grid::new(5);
        grid.set_letter(CellPos::new(0, 0), 'Q');
        grid.set_letter(CellPos::new(4, 4), 'Z');
        let mut rng = StdRng::seed_from_u64(7);
        grid.fill_empty(&['A', 'B'], &mut rng);

        assert!(grid.is_full());
        assert_eq!(grid.letter(CellPos::new(0, 0)), Some('Q'));
        assert_eq!(grid.letter(CellPos::new(4, 4)), Some('Z'));
        let fillers: usize = grid
            .cells()
            .filter(|c| matches!(c.letter(), Some('A') | Some('B')))
            .count();
        assert_eq!(fillers, 23);
    }

    #[test]
    fn found_clears_selected() {
        let mut grid = Grid::new(2);
        let pos = CellPos::new(1, 1);
        grid.get_mut(pos).unwrap().set_selected(true);
        grid.get_mut(pos).unwrap().set_found();
        let cell = grid.get(pos).unwrap();
        assert!(cell.is_found());
        assert!(!cell.is_selected());
    }
}
