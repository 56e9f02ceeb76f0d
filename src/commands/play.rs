//! Simple interactive play mode
//!
//! Text-based game loop: the player sees the scrambled target and types
//! sub-words until every one is found.

use crate::core::{GameState, GuessOutcome};
use crate::engine::Jumble;
use crate::output::formatters::{create_progress_bar, letter_tiles, masked};
use anyhow::{Result, bail};
use colored::Colorize;
use log::debug;
use rand::Rng;
use std::io::{BufRead, Write};

/// Attempts at dealing a round that has something to find
const MAX_DEALS: usize = 16;

/// A line of player input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayInput {
    Quit,
    NewRound,
    Reveal,
    Shuffle,
    Help,
    Guess(String),
    Nothing,
}

impl PlayInput {
    /// Interpret one input line
    #[must_use]
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        match line.to_lowercase().as_str() {
            "" => Self::Nothing,
            "quit" | "q" | "exit" => Self::Quit,
            "new" | "n" => Self::NewRound,
            "reveal" | "r" => Self::Reveal,
            "shuffle" | "s" => Self::Shuffle,
            "help" | "?" => Self::Help,
            _ => Self::Guess(line.to_string()),
        }
    }
}

/// Totals for one play session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub rounds: usize,
    pub completed: usize,
    pub words_found: usize,
}

/// Run the simple interactive mode over arbitrary input and output
///
/// The session ends on `quit` or at end of input.
///
/// # Errors
///
/// Returns an error if a round cannot be created (bad parameters, no word
/// of the requested length, or no word with any sub-words after repeated
/// deals) or if reading input or writing output fails.
pub fn run_play<R, I, O>(
    engine: &mut Jumble<'_, R>,
    length: Option<usize>,
    min_length: Option<usize>,
    input: I,
    mut out: O,
) -> Result<SessionSummary>
where
    R: Rng,
    I: BufRead,
    O: Write,
{
    let mut summary = SessionSummary::default();
    let mut state = new_round(engine, length, min_length, &mut out, &mut summary)?;
    let mut lines = input.lines();

    loop {
        write!(out, "{} ", "guess>".bright_cyan())?;
        out.flush()?;

        let Some(line) = lines.next() else {
            writeln!(out)?;
            break;
        };

        match PlayInput::parse(&line?) {
            PlayInput::Nothing => {}
            PlayInput::Quit => break,
            PlayInput::Help => print_help(&mut out)?,
            PlayInput::Shuffle => {
                let letters = engine.scramble(state.original());
                writeln!(out, "\n  {}\n", letter_tiles(&letters).bright_yellow().bold())?;
            }
            PlayInput::Reveal => {
                print_board(&state, true, &mut out)?;
                state = new_round(engine, length, min_length, &mut out, &mut summary)?;
            }
            PlayInput::NewRound => {
                state = new_round(engine, length, min_length, &mut out, &mut summary)?;
            }
            PlayInput::Guess(word) => match state.guess(&word) {
                GuessOutcome::Correct => {
                    summary.words_found += 1;
                    writeln!(
                        out,
                        "{} {} ({} left)",
                        "✓".green().bold(),
                        word.to_lowercase().green(),
                        state.remaining()
                    )?;
                    if state.is_complete() {
                        summary.completed += 1;
                        writeln!(
                            out,
                            "\n{}\n",
                            format!("🎉 All {} words found!", state.sub_words().len())
                                .bright_green()
                                .bold()
                        )?;
                        state = new_round(engine, length, min_length, &mut out, &mut summary)?;
                    }
                }
                GuessOutcome::AlreadyGuessed => {
                    writeln!(out, "{} already found", word.yellow())?;
                }
                GuessOutcome::NotASubword if word.eq_ignore_ascii_case(state.original()) => {
                    writeln!(out, "{}", "That's the target word itself!".yellow())?;
                }
                GuessOutcome::NotASubword => {
                    writeln!(out, "{} {} is not a sub-word", "✗".red().bold(), word.red())?;
                }
            },
        }
    }

    writeln!(
        out,
        "\n👋 Thanks for playing! {} words found in {} rounds.\n",
        summary.words_found, summary.rounds
    )?;
    Ok(summary)
}

fn new_round<R: Rng, O: Write>(
    engine: &mut Jumble<'_, R>,
    length: Option<usize>,
    min_length: Option<usize>,
    out: &mut O,
    summary: &mut SessionSummary,
) -> Result<GameState> {
    let mut state = engine.create_game_state(length, min_length)?;
    let mut deals = 1;
    while state.is_complete() {
        if deals == MAX_DEALS {
            bail!("No word with sub-words to find after {MAX_DEALS} deals");
        }
        debug!("Re-dealing round: {} has no sub-words", state.original());
        state = engine.create_game_state(length, min_length)?;
        deals += 1;
    }
    summary.rounds += 1;

    writeln!(out, "{}", "─".repeat(60).cyan())?;
    writeln!(out, "Round {}", summary.rounds)?;
    writeln!(out, "{}", "─".repeat(60).cyan())?;
    writeln!(
        out,
        "\n  {}\n",
        letter_tiles(state.scrambled()).bright_yellow().bold()
    )?;
    print_board(&state, false, out)?;
    Ok(state)
}

fn print_board<O: Write>(state: &GameState, reveal: bool, out: &mut O) -> Result<()> {
    let total = state.sub_words().len();
    let found = state.guessed_count();

    writeln!(
        out,
        "Found {found}/{total} [{}]",
        create_progress_bar(found as f64, total as f64, 20)
    )?;
    for (word, &guessed) in state.sub_words() {
        if guessed {
            writeln!(out, "  {}", word.green())?;
        } else if reveal {
            writeln!(out, "  {}", word.bright_black())?;
        } else {
            writeln!(out, "  {}", masked(word))?;
        }
    }
    if reveal {
        writeln!(out, "The word was {}", state.original().bright_yellow().bold())?;
    }
    writeln!(out)?;
    Ok(())
}

fn print_help<O: Write>(out: &mut O) -> Result<()> {
    writeln!(out, "Type a word made from the letters to guess it.")?;
    writeln!(out, "Commands: 'shuffle' re-mix letters, 'reveal' show answers,")?;
    writeln!(out, "          'new' next round, 'quit' to exit\n")?;
    Ok(())
}
