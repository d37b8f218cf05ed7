/*
cli_options.rs

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

//! Process command-line options.
//!
//! # Examples
//!
//! Generate two grids from a puzzle definition and print their answer key:
//!
//! ```text
//! $ wordsearch generate -p marvel.json -c 2 --summary
//! ```
//!
//! Play in the terminal with a 10x10 grid and save the best times:
//!
//! ```text
//! $ wordsearch play -w "THOR, LOKI, HULK, ODIN" -g 10 --scores scores.json
//! > down 2 0
//! > move 2 3
//! > up
//! ```
//!
//! Create the HTML page of a puzzle:
//!
//! ```text
//! $ wordsearch create -w "THOR, LOKI" --title "Marvel Word Search" --heading Marvel \
//!       --link "Once more with feeling!=puzzle1.html" -o marvel.html
//! ```

use clap::{Args as ClapArgs, Parser, Subcommand};
use log::{debug, error, warn};
use std::env;
use std::error::Error;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

use crate::config::{
    ALPHABET, COPYRIGHT_NOTICE, DEFAULT_FILE_NAME, Link, MAX_PLACEMENT_ATTEMPTS,
    PuzzleDefinition,
};
use crate::draw;
use crate::errors::SetupError;
use crate::game::{Game, GameEvent, GameSettings};
use crate::generator::direction::DirectionSet;
use crate::generator::grid::Grid;
use crate::generator::placement::{Placement, WordPlacer};
use crate::generator::word_pool::WordPool;
use crate::highscores::HighScores;
use crate::page;
use crate::player_input::{BoardLayout, InputEvent};
use crate::saver::highscores::SaverHighScores;

/// Width of a cell for the `touch` and `drag` commands, in surface units.
const TOUCH_CELL_SIZE: f64 = 10.0;

/// Generate, play, and publish word-search puzzles.
#[derive(Parser)]
#[command(about, long_about = None, version, long_version = COPYRIGHT_NOTICE)]
struct Args {
    /// Enable debug messages
    #[arg(short, long, default_value_t = false, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate grids and print them with their answer key
    Generate {
        #[command(flatten)]
        puzzle: PuzzleArgs,

        /// Number of grids to generate
        #[arg(short, long, default_value_t = 1)]
        count: usize,

        /// Print some statistics after generating the grids
        #[arg(short, long, default_value_t = false)]
        summary: bool,
    },

    /// Play a game in the terminal
    Play {
        #[command(flatten)]
        puzzle: PuzzleArgs,

        /// JSON file where the best times are kept
        #[arg(long)]
        scores: Option<PathBuf>,
    },

    /// Create the HTML page of a puzzle
    Create {
        #[command(flatten)]
        puzzle: PuzzleArgs,

        /// Page title
        #[arg(long)]
        title: Option<String>,

        /// Main heading of the page
        #[arg(long)]
        heading: Option<String>,

        /// Navigation link, as TEXT=HREF (can be repeated)
        #[arg(long = "link")]
        links: Vec<String>,

        /// Output file
        #[arg(short, long, default_value = DEFAULT_FILE_NAME)]
        output: PathBuf,
    },

    /// Print the best times of a puzzle
    Scores {
        /// JSON file where the best times are kept
        file: PathBuf,

        /// Puzzle title
        #[arg(long)]
        title: String,

        /// Grid size
        #[arg(short, long)]
        grid_size: usize,
    },
}

/// Options that select the puzzle.
#[derive(ClapArgs)]
struct PuzzleArgs {
    /// Puzzle definition file (JSON)
    #[arg(short, long)]
    puzzle: Option<PathBuf>,

    /// Word or comma-separated list of words to add to the pool (can be repeated)
    #[arg(short, long = "word")]
    words: Vec<String>,

    /// Grid size
    #[arg(short, long)]
    grid_size: Option<usize>,

    /// Number of words to find in each game
    #[arg(short = 'n', long)]
    word_count: Option<usize>,

    /// Directions the words can take
    #[arg(value_enum, long)]
    directions: Option<DirectionSet>,
}

impl PuzzleArgs {
    /// Build the puzzle definition from the definition file and the command-line words, and
    /// apply the command-line overrides.
    fn definition(&self) -> Result<PuzzleDefinition, Box<dyn Error>> {
        let extra: Vec<String> = self
            .words
            .iter()
            .flat_map(|w| page::parse_word_input(w))
            .collect();

        let mut definition: PuzzleDefinition = match &self.puzzle {
            Some(path) => {
                let mut d: PuzzleDefinition = PuzzleDefinition::load(path)?;
                if !extra.is_empty() {
                    let mut words: Vec<String> = d.words.words().to_vec();
                    words.extend(extra);
                    d.words = WordPool::new(words);
                }
                d
            }
            None => PuzzleDefinition::new(WordPool::new(extra)),
        };
        if definition.words.is_empty() {
            return Err(Box::new(SetupError::EmptyPool));
        }

        if let Some(size) = self.grid_size {
            definition.grid_size = size;
        }
        if let Some(count) = self.word_count {
            definition.word_count = count;
        }
        if let Some(directions) = self.directions {
            definition.directions = directions;
        }
        Ok(definition)
    }
}

/// Split a `TEXT=HREF` link option on the first equal sign. The href can hold a query string.
fn parse_link(option: &str) -> Option<Link> {
    let (text, href) = option.split_once('=')?;
    let text: &str = text.trim();
    let href: &str = href.trim();
    if text.is_empty() || href.is_empty() {
        return None;
    }
    Some(Link {
        text: text.to_string(),
        href: href.to_string(),
    })
}

/// Parse and process command-line options and return the exit code.
pub fn parse() -> u8 {
    let args: Args = Args::parse();

    if args.debug {
        unsafe {
            env::set_var("RUST_LOG", "debug");
        }
    }
    env_logger::init();

    let ret: Result<(), Box<dyn Error>> = match args.command {
        Command::Generate {
            puzzle,
            count,
            summary,
        } => puzzle
            .definition()
            .and_then(|d| generate(&d, count, summary)),
        Command::Play { puzzle, scores } => puzzle.definition().and_then(|d| play(&d, scores)),
        Command::Create {
            puzzle,
            title,
            heading,
            links,
            output,
        } => puzzle.definition().and_then(|mut d| {
            if let Some(t) = title {
                d.title = t;
            }
            if let Some(h) = heading {
                d.heading = h;
            }
            for l in &links {
                match parse_link(l) {
                    Some(link) => d.links.push(link),
                    None => warn!("Ignoring link {l:?}: expecting TEXT=HREF"),
                }
            }
            create(&d, &output)
        }),
        Command::Scores {
            file,
            title,
            grid_size,
        } => scores(file, &title, grid_size),
    };

    match ret {
        Ok(()) => 0,
        Err(e) => {
            error!("{e}");
            eprintln!("Error: {e}");
            1
        }
    }
}

/// Generate grids and print them with their answer key.
fn generate(
    definition: &PuzzleDefinition,
    count: usize,
    summary: bool,
) -> Result<(), Box<dyn Error>> {
    let mut rng = rand::rng();
    let alphabet: Vec<char> = ALPHABET.chars().collect();
    let mut placer: WordPlacer = WordPlacer::new(definition.directions, MAX_PLACEMENT_ATTEMPTS);
    let mut total: f32 = 0.0;
    let mut max: f32 = 0.0;
    let mut attempts: usize = 0;
    let mut errors: usize = 0;

    for i in 0..count {
        debug!("Iteration {i}");

        let words: Vec<String> = definition.words.draw(definition.word_count, &mut rng)?;
        let mut grid: Grid = Grid::new(definition.grid_size);
        let placements: Vec<Placement> = match placer.place_all(&mut grid, &words, &mut rng) {
            Ok(p) => p,
            // A word that does not fit will never fit: no need to try the other grids
            Err(e @ SetupError::WordTooLong { .. }) => return Err(Box::new(e)),
            Err(e) => {
                errors += 1;
                debug!("ERROR generating grid: {e}");
                continue;
            }
        };
        grid.fill_empty(&alphabet, &mut rng);

        total += placer.duration;
        max = max.max(placer.duration);
        attempts += placer.attempts;

        println!("{}", draw::grid(&grid));
        println!("{}", draw::answer_key(&placements));
    }

    if summary {
        let generated: usize = count - errors;
        println!(
            "
       grids = {generated}
  total time = {total}s
average time = {}s
    max time = {max}s
    attempts = {}
      errors = {errors}",
            total / generated.max(1) as f32,
            attempts / generated.max(1)
        );
    }
    Ok(())
}

/// Messages received by the game loop.
enum PlayMessage {
    /// A line typed by the player.
    Input(String),

    /// One second elapsed.
    Tick,

    /// The standard input is closed.
    Closed,
}

/// Command typed by the player.
#[derive(Debug, PartialEq)]
enum PlayCommand {
    Input(InputEvent),
    Show,
    Reset,
    Quit,
    Help,
}

fn parse_play_command(line: &str) -> Option<PlayCommand> {
    let mut parts = line.split_whitespace();
    let command: String = parts.next()?.to_lowercase();
    let args: Vec<&str> = parts.collect();

    let cell = || -> Option<(i64, i64)> {
        match args.as_slice() {
            [row, col] => Some((row.parse().ok()?, col.parse().ok()?)),
            _ => None,
        }
    };
    let point = || -> Option<(f64, f64)> {
        match args.as_slice() {
            [x, y] => Some((x.parse().ok()?, y.parse().ok()?)),
            _ => None,
        }
    };

    let cmd: PlayCommand = match command.as_str() {
        "down" => PlayCommand::Input(InputEvent::PointerDown(cell())),
        "move" => PlayCommand::Input(InputEvent::PointerEnter(cell())),
        "up" => PlayCommand::Input(InputEvent::PointerUp),
        "touch" => {
            let (x, y) = point()?;
            PlayCommand::Input(InputEvent::TouchStart { x, y })
        }
        "drag" => {
            let (x, y) = point()?;
            PlayCommand::Input(InputEvent::TouchMove { x, y })
        }
        "lift" => PlayCommand::Input(InputEvent::TouchEnd),
        "show" => PlayCommand::Show,
        "reset" => PlayCommand::Reset,
        "quit" | "exit" => PlayCommand::Quit,
        "help" => PlayCommand::Help,
        _ => return None,
    };
    Some(cmd)
}

const PLAY_HELP: &str = "Commands:
  down ROW COL   press the pointer on a cell
  move ROW COL   move the pointer to a cell
  up             release the pointer
  touch X Y      put a finger on the board (cells are 10 units wide)
  drag X Y       move the finger
  lift           lift the finger
  show           print the board
  reset          start a new game
  quit           leave";

fn print_board(game: &Game) {
    println!("{}", draw::grid(game.grid()));
    println!("{}", draw::word_list(game));
    println!("{}", draw::status(game));
}

/// Record the completion time and print the scoreboard.
fn record_score(
    saver: &SaverHighScores,
    definition: &PuzzleDefinition,
    game: &Game,
    elapsed: Duration,
) -> Result<(), Box<dyn Error>> {
    let mut highscores: HighScores = saver.get_highscores()?;
    let position: Option<usize> = highscores.add_score(
        &definition.title,
        game.grid().size(),
        elapsed,
        game.words().len(),
    );
    saver.save_highscores(&highscores)?;
    if let Some(board) = highscores.get_score(&definition.title, game.grid().size()) {
        println!("Best times:\n{}", draw::scoreboard(board, position));
    }
    Ok(())
}

/// Play a game in the terminal.
///
/// The standard input and the one second ticks are read by two threads and serialized through
/// a channel, so the game is only modified from this function.
fn play(definition: &PuzzleDefinition, scores: Option<PathBuf>) -> Result<(), Box<dyn Error>> {
    let mut game: Game = Game::new(definition.words.clone(), GameSettings::from(definition))?;
    let saver: Option<SaverHighScores> = scores.map(SaverHighScores::new);
    let layout: BoardLayout = BoardLayout {
        origin_x: 0.0,
        origin_y: 0.0,
        cell_size: TOUCH_CELL_SIZE,
    };
    let (sender, receiver) = async_channel::unbounded::<PlayMessage>();

    let input_sender = sender.clone();
    thread::spawn(move || {
        for line in io::stdin().lines() {
            let Ok(line) = line else { break };
            if input_sender.send_blocking(PlayMessage::Input(line)).is_err() {
                return;
            }
        }
        let _ = input_sender.send_blocking(PlayMessage::Closed);
    });
    thread::spawn(move || {
        loop {
            thread::sleep(Duration::from_secs(1));
            if sender.send_blocking(PlayMessage::Tick).is_err() {
                break;
            }
        }
    });

    println!("{PLAY_HELP}\n");
    print_board(&game);

    while let Ok(message) = receiver.recv_blocking() {
        let line: String = match message {
            PlayMessage::Tick => {
                game.tick();
                continue;
            }
            PlayMessage::Closed => break,
            PlayMessage::Input(line) => line,
        };
        if line.trim().is_empty() {
            continue;
        }

        let command: PlayCommand = match parse_play_command(&line) {
            Some(c) => c,
            None => {
                println!("Unknown command {:?}. Type help for the list of commands.", line.trim());
                continue;
            }
        };

        match command {
            PlayCommand::Quit => break,
            PlayCommand::Help => println!("{PLAY_HELP}"),
            PlayCommand::Show => print_board(&game),
            PlayCommand::Reset => match game.reset() {
                Ok(()) => print_board(&game),
                Err(e) => println!("Cannot start a new game: {e}"),
            },
            PlayCommand::Input(event) => {
                let is_end: bool = matches!(event, InputEvent::PointerUp | InputEvent::TouchEnd);
                let events: Vec<GameEvent> = game.handle(layout.normalize(game.grid(), event));
                for e in &events {
                    match e {
                        GameEvent::WordFound { word, .. } => println!("Found {word}!"),
                        GameEvent::Missed { candidate } => {
                            println!("{candidate} is not a word to find")
                        }
                        GameEvent::Completed { elapsed } => {
                            println!("You found all the words in {}!", draw::duration(*elapsed));
                            if let Some(s) = &saver {
                                if let Err(err) = record_score(s, definition, &game, *elapsed) {
                                    warn!("Cannot save the best times: {err}");
                                }
                            }
                        }
                    }
                }
                if is_end {
                    print_board(&game);
                } else {
                    println!("{}", draw::grid(game.grid()));
                }
            }
        }
    }
    Ok(())
}

/// Write the HTML page of the puzzle.
fn create(definition: &PuzzleDefinition, output: &Path) -> Result<(), Box<dyn Error>> {
    let html: String = page::render(definition)?;
    fs::write(output, html)?;
    println!(
        "{} words written to {}",
        definition.words.len(),
        output.display()
    );
    Ok(())
}

/// Print the best times of a puzzle.
fn scores(file: PathBuf, title: &str, grid_size: usize) -> Result<(), Box<dyn Error>> {
    let highscores: HighScores = SaverHighScores::new(file).get_highscores()?;
    match highscores.get_score(title, grid_size) {
        Some(board) if !board.is_empty() => print!("{}", draw::scoreboard(board, None)),
        _ => println!("No scores yet for {title} ({grid_size}x{grid_size})"),
    }
    Ok(())
}
