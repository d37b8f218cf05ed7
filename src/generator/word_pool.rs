/*
word_pool.rs

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

//! Pool of candidate words and session word draws.

use log::warn;
use rand::Rng;
use rand::seq::index;
use serde::{Deserialize, Serialize};

use crate::errors::SetupError;

/// Normalize a word: uppercase, and only the alphabetic characters are kept.
///
/// Spaces, hyphens, or apostrophes cannot be represented in the grid, so "Spider-Man" becomes
/// "SPIDERMAN".
pub fn normalize(word: &str) -> String {
    word.chars()
        .filter(|c| c.is_alphabetic())
        .flat_map(char::to_uppercase)
        .collect()
}

/// Ordered list of the words that a puzzle can use.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct WordPool {
    words: Vec<String>,
}

impl From<Vec<String>> for WordPool {
    fn from(words: Vec<String>) -> Self {
        Self::new(words)
    }
}

impl From<WordPool> for Vec<String> {
    fn from(pool: WordPool) -> Self {
        pool.words
    }
}

impl WordPool {
    /// Create a [`WordPool`] object from raw words.
    ///
    /// Words are normalized with [`normalize`]. Words that are empty after normalization are
    /// dropped. Duplicated words are kept, each one is a distinct entry for the draws.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut pool: Vec<String> = Vec::new();
        for word in words {
            let w: String = normalize(word.as_ref());
            if w.is_empty() {
                warn!("Ignoring the word {:?}: no letters", word.as_ref());
                continue;
            }
            pool.push(w);
        }
        Self { words: pool }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Draw `count` words without replacement, in random order.
    ///
    /// When the pool has fewer than `count` words, all the words are drawn.
    ///
    /// # Errors
    ///
    /// Return [`SetupError::EmptyPool`] or [`SetupError::InvalidWordCount`] when no word can be
    /// drawn.
    pub fn draw<R: Rng + ?Sized>(
        &self,
        count: usize,
        rng: &mut R,
    ) -> Result<Vec<String>, SetupError> {
        if self.words.is_empty() {
            return Err(SetupError::EmptyPool);
        }
        if count == 0 {
            return Err(SetupError::InvalidWordCount);
        }
        let amount: usize = if count > self.words.len() {
            warn!(
                "Requested {count} words but the pool only has {}: using all the words",
                self.words.len()
            );
            self.words.len()
        } else {
            count
        };
        Ok(index::sample(rng, self.words.len(), amount)
            .into_iter()
            .map(|i| self.words[i].clone())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn words_are_normalized() {
        let pool = WordPool::new(["Thor", " iron man ", "Spider-Man", "--", "hulk"]);
        assert_eq!(pool.words(), ["THOR", "IRONMAN", "SPIDERMAN", "HULK"]);
    }

    #[test]
    fn draw_is_without_replacement() {
        let pool = WordPool::new(["A", "B", "C", "D", "E", "F"]);
        let mut rng = StdRng::seed_from_u64(11);
        let mut drawn = pool.draw(4, &mut rng).unwrap();
        assert_eq!(drawn.len(), 4);
        drawn.sort();
        drawn.dedup();
        assert_eq!(drawn.len(), 4);
    }

    #[test]
    fn duplicates_are_distinct_entries() {
        let pool = WordPool::new(["CAT", "CAT"]);
        let mut rng = StdRng::seed_from_u64(5);
        assert_eq!(pool.draw(2, &mut rng).unwrap(), ["CAT", "CAT"]);
    }

    #[test]
    fn draw_clamps_to_pool_size() {
        let pool = WordPool::new(["ONE", "TWO"]);
        let mut rng = StdRng::seed_from_u64(5);
        assert_eq!(pool.draw(15, &mut rng).unwrap().len(), 2);
    }

    #[test]
    fn draw_errors() {
        let mut rng = StdRng::seed_from_u64(5);
        assert_eq!(
            WordPool::default().draw(3, &mut rng),
            Err(SetupError::EmptyPool)
        );
        assert_eq!(
            WordPool::new(["ONE"]).draw(0, &mut rng),
            Err(SetupError::InvalidWordCount)
        );
    }

    #[test]
    fn pool_deserializes_from_a_list() {
        let pool: WordPool = serde_json::from_str(r#"["loki", "odin"]"#).unwrap();
        assert_eq!(pool.words(), ["LOKI", "ODIN"]);
    }
}
