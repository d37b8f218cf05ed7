/*
placement_test.rs

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

//! Tests for the grid builder.

use rand::SeedableRng;
use rand::rngs::StdRng;

use wordsearch::errors::SetupError;
use wordsearch::generator::build_grid;
use wordsearch::generator::direction::{Direction, DirectionSet};
use wordsearch::generator::grid::Grid;
use wordsearch::generator::placement::Placement;
use wordsearch::generator::word_pool::WordPool;

fn marvel() -> Vec<String> {
    WordPool::new([
        "Thor", "Loki", "Hulk", "Odin", "Vision", "Wanda", "Gamora", "Groot", "Rocket", "Nebula",
    ])
    .words()
    .to_vec()
}

fn check_placement(grid: &Grid, placement: &Placement) {
    assert_eq!(placement.cells.len(), placement.word.chars().count());
    assert_eq!(placement.cells[0], placement.start);

    let (d_row, d_col) = placement.direction.step();
    for pair in placement.cells.windows(2) {
        assert_eq!(pair[0].offset(d_row, d_col), Some(pair[1]));
    }
    // Reading the cells after all the words are placed proves that overlaps share letters
    assert_eq!(grid.word_at(&placement.cells), placement.word);
}

#[test]
fn test_every_word_reads_along_its_cells() {
    let words = marvel();
    for seed in 0..50 {
        let mut rng = StdRng::seed_from_u64(seed);
        let (grid, placements) = build_grid(&words, 12, DirectionSet::All, 5000, &mut rng)
            .expect("ten words fit in a 12x12 grid");

        assert_eq!(placements.len(), words.len());
        for (word, placement) in words.iter().zip(&placements) {
            assert_eq!(&placement.word, word);
            check_placement(&grid, placement);
        }
        assert!(grid.is_full());
        assert!(
            grid.cells()
                .all(|c| c.letter().is_some_and(|l| l.is_ascii_uppercase()))
        );
    }
}

#[test]
fn test_forward_directions_only() {
    let words = marvel();
    for seed in 0..20 {
        let mut rng = StdRng::seed_from_u64(seed);
        let (_, placements) =
            build_grid(&words, 12, DirectionSet::Forward, 5000, &mut rng).unwrap();
        for p in &placements {
            assert!(Direction::FORWARD.contains(&p.direction), "{}", p.direction);
        }
    }
}

#[test]
fn test_word_longer_than_grid() {
    let mut rng = StdRng::seed_from_u64(1);
    let ret = build_grid(&["AB".to_string()], 1, DirectionSet::All, 5000, &mut rng);
    assert_eq!(
        ret.unwrap_err(),
        SetupError::WordTooLong {
            word: "AB".to_string(),
            length: 2,
            grid_size: 1
        }
    );
}

#[test]
fn test_word_as_long_as_grid() {
    let mut rng = StdRng::seed_from_u64(3);
    let (grid, placements) =
        build_grid(&["WANDA".to_string()], 5, DirectionSet::All, 5000, &mut rng).unwrap();
    check_placement(&grid, &placements[0]);
}

#[test]
fn test_zero_grid_size() {
    let mut rng = StdRng::seed_from_u64(1);
    let ret = build_grid(&["A".to_string()], 0, DirectionSet::All, 5000, &mut rng);
    assert_eq!(ret.unwrap_err(), SetupError::InvalidGridSize);
}

#[test]
fn test_crowded_grid_gives_up() {
    let words: Vec<String> = ["ABC", "DEF", "GHI", "JKL"]
        .iter()
        .map(|w| w.to_string())
        .collect();
    let mut rng = StdRng::seed_from_u64(7);
    let ret = build_grid(&words, 3, DirectionSet::Forward, 50, &mut rng);
    assert!(matches!(ret, Err(SetupError::Placement { .. })));
}

#[test]
fn test_same_seed_same_grid() {
    let words = marvel();
    let (g1, p1) =
        build_grid(&words, 12, DirectionSet::All, 5000, &mut StdRng::seed_from_u64(42)).unwrap();
    let (g2, p2) =
        build_grid(&words, 12, DirectionSet::All, 5000, &mut StdRng::seed_from_u64(42)).unwrap();
    assert_eq!(p1, p2);
    let letters = |g: &Grid| g.cells().map(|c| c.letter()).collect::<Vec<_>>();
    assert_eq!(letters(&g1), letters(&g2));
}
