/*
direction.rs

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

//! Directions along which words are laid out and selected.

use clap::ValueEnum;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use strum_macros::FromRepr;

use super::grid::CellPos;

/// The eight unit vectors of the grid.
///
/// The discriminants index [`Direction::ALL`], so that a random direction can be selected with
/// [`Direction::from_repr`].
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, FromRepr)]
#[repr(u8)]
pub enum Direction {
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
    North,
    NorthEast,
}

/// Set of directions that the placement engine can choose from.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Default, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DirectionSet {
    /// Horizontal, vertical, and diagonal, in both orientations.
    #[default]
    All,

    /// Left to right, top to bottom, and top-left to bottom-right only.
    Forward,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
        Direction::North,
        Direction::NorthEast,
    ];

    pub const FORWARD: [Direction; 3] = [Direction::East, Direction::South, Direction::SouthEast];

    /// Return the (row, column) step vector.
    pub fn step(self) -> (isize, isize) {
        match self {
            Direction::East => (0, 1),
            Direction::SouthEast => (1, 1),
            Direction::South => (1, 0),
            Direction::SouthWest => (1, -1),
            Direction::West => (0, -1),
            Direction::NorthWest => (-1, -1),
            Direction::North => (-1, 0),
            Direction::NorthEast => (-1, 1),
        }
    }

    /// Return the direction of a step vector, or None if the vector is not a unit vector.
    pub fn from_step(d_row: isize, d_col: isize) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.step() == (d_row, d_col))
    }

    /// Return the direction of the straight line going from `from` to `to`.
    ///
    /// The line is horizontal when both cells share the row, vertical when they share the
    /// column, and diagonal when the row and column distances are equal. Any other relation,
    /// or identical cells, gives None.
    pub fn between(from: CellPos, to: CellPos) -> Option<Self> {
        let d_row: isize = to.row as isize - from.row as isize;
        let d_col: isize = to.col as isize - from.col as isize;

        if d_row == 0 && d_col == 0 {
            return None;
        }
        if d_row != 0 && d_col != 0 && d_row.abs() != d_col.abs() {
            return None;
        }
        Self::from_step(d_row.signum(), d_col.signum())
    }

    /// Choose a direction uniformly at random from the given set.
    pub fn random<R: Rng + ?Sized>(set: DirectionSet, rng: &mut R) -> Self {
        match set {
            DirectionSet::All => {
                Direction::from_repr(rng.random_range(0..Self::ALL.len()) as u8)
                    .unwrap_or(Direction::East)
            }
            DirectionSet::Forward => Self::FORWARD[rng.random_range(0..Self::FORWARD.len())],
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Direction::East => write!(f, "east"),
            Direction::SouthEast => write!(f, "south-east"),
            Direction::South => write!(f, "south"),
            Direction::SouthWest => write!(f, "south-west"),
            Direction::West => write!(f, "west"),
            Direction::NorthWest => write!(f, "north-west"),
            Direction::North => write!(f, "north"),
            Direction::NorthEast => write!(f, "north-east"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn repr_matches_table_order() {
        for (i, d) in Direction::ALL.iter().enumerate() {
            assert_eq!(Direction::from_repr(i as u8), Some(*d));
        }
        assert_eq!(Direction::from_repr(8), None);
    }

    #[test]
    fn between_classifies_lines() {
        let origin = CellPos::new(3, 3);
        assert_eq!(
            Direction::between(origin, CellPos::new(3, 7)),
            Some(Direction::East)
        );
        assert_eq!(
            Direction::between(origin, CellPos::new(0, 3)),
            Some(Direction::North)
        );
        assert_eq!(
            Direction::between(origin, CellPos::new(5, 1)),
            Some(Direction::SouthWest)
        );
        assert_eq!(
            Direction::between(origin, CellPos::new(1, 1)),
            Some(Direction::NorthWest)
        );
        assert_eq!(Direction::between(origin, CellPos::new(4, 5)), None);
        assert_eq!(Direction::between(origin, origin), None);
    }

    #[test]
    fn forward_set_only_yields_positive_orientations() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let d = Direction::random(DirectionSet::Forward, &mut rng);
            assert!(Direction::FORWARD.contains(&d));
        }
    }
}
