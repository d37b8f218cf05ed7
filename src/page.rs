/*
page.rs

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

//! Build the static HTML page of a puzzle.
//!
//! The page embeds the word pool as a JSON list and the grid size. The page script draws the
//! session words from the pool when the page loads.

use formatx::formatx;
use log::debug;
use std::error::Error;
use std::fmt;

use crate::config::{Link, PuzzleDefinition};

const PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <meta name="generator" content="wordsearch {version}">
  <title>{title}</title>
  <link rel="stylesheet" href="style.css">
</head>
<body>
  <h1>{heading}</h1>
  <div id="options-container"></div>
  <div id="timer">0:00</div>
  <div id="wordsearch"></div>
  <div id="word-list">
    <div id="words"></div>
    <button id="reset-button">Reset Game</button>
    <div class="nav-links">
{links}    </div>
  </div>

  <div id="word-pool" data-words='{words}' data-count="{word_count}"></div>

  <script>
    const gridSize = {grid_size};
  </script>

  <script src="script.js"></script>
</body>
</html>
"#;

const LINK_TEMPLATE: &str = r#"      <a href="{href}">{text}</a>
"#;

/// Errors while rendering a page.
#[derive(Debug)]
pub enum PageError {
    /// The template engine rejected the template or the values.
    Template(String),

    /// The word pool could not be converted to JSON.
    Json(serde_json::Error),
}

impl fmt::Display for PageError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PageError::Template(msg) => write!(f, "cannot render the page: {msg}"),
            PageError::Json(e) => write!(f, "cannot encode the word pool: {e}"),
        }
    }
}

impl Error for PageError {}

/// Split the author's input into words.
///
/// The input is either a single word, or a list separated by commas or new lines. Quotes
/// around the words are removed, so a list copied from a previous page (`"THOR", "LOKI"`) can
/// be pasted as is.
pub fn parse_word_input(input: &str) -> Vec<String> {
    input
        .split([',', '\n'])
        .map(|w| w.trim().trim_matches(|c: char| c == '"' || c == '\'').trim())
        .filter(|w| !w.is_empty())
        .map(str::to_string)
        .collect()
}

/// Escape the characters that have a meaning in HTML text and attribute values.
pub fn escape_html(text: &str) -> String {
    let mut out: String = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn render_link(link: &Link) -> Result<String, PageError> {
    formatx!(
        LINK_TEMPLATE,
        href = escape_html(&link.href),
        text = escape_html(&link.text)
    )
    .map_err(|e| PageError::Template(format!("{e:?}")))
}

/// Render the HTML page of the puzzle.
pub fn render(definition: &PuzzleDefinition) -> Result<String, PageError> {
    let mut links: String = String::new();
    for link in &definition.links {
        links.push_str(&render_link(link)?);
    }

    // The JSON goes into a single-quoted attribute
    let words: String = serde_json::to_string(definition.words.words())
        .map_err(PageError::Json)?
        .replace('\'', "&#39;");

    debug!(
        "Rendering page {:?} with {} words",
        definition.title,
        definition.words.len()
    );
    formatx!(
        PAGE_TEMPLATE,
        version = crate::config::VERSION,
        title = escape_html(&definition.title),
        heading = escape_html(&definition.heading),
        links = links,
        words = words,
        word_count = definition.word_count,
        grid_size = definition.grid_size
    )
    .map_err(|e| PageError::Template(format!("{e:?}")))
}
