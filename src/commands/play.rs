//! Manual play mode
//!
//! A human types guesses on stdin against a hidden target.

use crate::dictionary::Dictionary;
use crate::game::{Game, GameConfig, Outcome, Submission};
use crate::output::formatters::colored_feedback;
use anyhow::{Context, Result};
use colored::Colorize;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use std::io::{self, BufRead, Write};

/// How an interactive session stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    Finished(Outcome),
    /// The player typed `quit` or input ran out
    Quit,
}

/// Pick a target from the dictionary
///
/// With a seed the choice is reproducible, otherwise it comes from the
/// thread-local generator.
#[must_use]
pub fn pick_target(dictionary: &dyn Dictionary, seed: Option<u64>) -> Option<String> {
    let words = dictionary.words();
    let chosen = match seed {
        Some(seed) => words.choose(&mut StdRng::seed_from_u64(seed)),
        None => words.choose(&mut rand::rng()),
    };
    chosen.cloned()
}

/// Run a manual game on stdin/stdout
///
/// # Errors
///
/// Returns an error if the target is invalid or the terminal cannot be read.
pub fn run_play(dictionary: &dyn Dictionary, target: &str, config: GameConfig) -> Result<()> {
    let mut game = Game::new(target, dictionary, config)?;
    game.start()?;

    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                    Wordle - Manual Play                      ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    println!(
        "Guess the {}-letter word. Type 'quit' to give up.\n",
        game.word_length()
    );

    let stdin = io::stdin();
    let end = play_session(&mut game, stdin.lock(), io::stdout())?;

    if end == SessionEnd::Quit {
        println!(
            "\n👋 The word was {}",
            target.to_uppercase().bright_yellow().bold()
        );
    }
    Ok(())
}

/// Drive a started game from `input`, writing prompts and feedback to `output`
///
/// # Errors
///
/// Returns an error on I/O failure or if the game was not started.
pub fn play_session<R: BufRead, W: Write>(
    game: &mut Game<'_>,
    mut input: R,
    mut output: W,
) -> Result<SessionEnd> {
    let mut line = String::new();

    loop {
        write!(output, "Guess {}: ", game.guess_count() + 1)?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line).context("failed to read guess")? == 0 {
            return Ok(SessionEnd::Quit);
        }
        let guess = line.trim();
        if matches!(guess, "quit" | "q" | "exit") {
            return Ok(SessionEnd::Quit);
        }

        match game.submit_guess(guess)? {
            Submission::Rejected(reason) => {
                writeln!(output, "{}", format!("✗ {reason}").red())?;
            }
            Submission::Accepted { feedback, ended } => {
                writeln!(output, "{}", colored_feedback(&feedback))?;
                if ended {
                    break;
                }
                writeln!(
                    output,
                    "   {} candidates remaining",
                    game.candidate_words().len()
                )?;
            }
        }
    }

    let outcome = game
        .outcome()
        .context("game stopped accepting guesses without an outcome")?;
    let turns = game.guess_count();
    match outcome {
        Outcome::Success => {
            let noun = if turns == 1 { "guess" } else { "guesses" };
            let message = format!("🎉 Solved in {turns} {noun}!");
            writeln!(output, "\n{}", message.green().bold())?;
        }
        Outcome::Failure => {
            let message = format!("❌ Out of guesses after {turns}.");
            let answer = game.revealed_target().unwrap_or_default().to_uppercase();
            writeln!(output, "\n{} The word was {answer}", message.red().bold())?;
        }
    }
    Ok(SessionEnd::Finished(outcome))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::WordList;
    use std::io::Cursor;

    fn dictionary() -> WordList {
        WordList::from_words(["coals", "cause", "crane", "slate", "chaos"], 5).unwrap()
    }

    fn session(dictionary: &WordList, target: &str, script: &str) -> (SessionEnd, usize, String) {
        colored::control::set_override(false);
        let mut game = Game::new(target, dictionary, GameConfig::default()).unwrap();
        game.start().unwrap();
        let mut out = Vec::new();
        let end = play_session(&mut game, Cursor::new(script), &mut out).unwrap();
        (end, game.guess_count(), String::from_utf8(out).unwrap())
    }

    #[test]
    fn solves_after_rejections() {
        let dict = dictionary();
        let (end, turns, out) = session(&dict, "coals", "abc\nzzzzz\ncause\ncoals\n");

        assert_eq!(end, SessionEnd::Finished(Outcome::Success));
        assert_eq!(turns, 2);
        assert!(out.contains("5 letters"));
        assert!(out.contains("not in the dictionary"));
        assert!(out.contains("Solved in 2 guesses"));
    }

    #[test]
    fn quit_stops_early() {
        let dict = dictionary();
        let (end, turns, _) = session(&dict, "coals", "crane\nquit\n");

        assert_eq!(end, SessionEnd::Quit);
        assert_eq!(turns, 1);
    }

    #[test]
    fn end_of_input_counts_as_quit() {
        let dict = dictionary();
        let (end, turns, _) = session(&dict, "coals", "");

        assert_eq!(end, SessionEnd::Quit);
        assert_eq!(turns, 0);
    }

    #[test]
    fn failure_reveals_target() {
        let dict = dictionary();
        let script = "crane\n".repeat(7);
        let (end, turns, out) = session(&dict, "coals", &script);

        assert_eq!(end, SessionEnd::Finished(Outcome::Failure));
        assert_eq!(turns, 7);
        assert!(out.contains("COALS"));
    }

    #[test]
    fn pick_target_is_reproducible_with_seed() {
        let dict = dictionary();
        let first = pick_target(&dict, Some(7)).unwrap();
        let second = pick_target(&dict, Some(7)).unwrap();

        assert_eq!(first, second);
        assert!(dict.contains(&first));
    }
}
