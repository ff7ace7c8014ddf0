//! Game driver for benchmarks

use super::BenchmarkResult;
use crate::agent::Agent;
use crate::dictionary::Dictionary;
use crate::game::{Game, GameConfig, GameError, Submission};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::time::{Duration, Instant};
use tracing::{info, warn};

/// Default number of consecutive rejected guesses before a game is abandoned
pub const DEFAULT_MAX_REJECTIONS: usize = 10;

/// Benchmark settings
#[derive(Debug, Clone, Copy)]
pub struct BenchmarkConfig {
    pub game: GameConfig,
    /// Spread games over the rayon pool, one agent clone per game
    ///
    /// Either way every game starts with [`Agent::begin_game`] and its target
    /// index, so seeded agents play the same games in both modes.
    pub parallel: bool,
    pub max_rejections: usize,
    pub show_progress: bool,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            game: GameConfig::default(),
            parallel: false,
            max_rejections: DEFAULT_MAX_REJECTIONS,
            show_progress: false,
        }
    }
}

/// Result from playing a single target
#[derive(Debug, Clone)]
pub struct GameRecord {
    pub target: String,
    /// Accepted guesses, in order
    pub guesses: Vec<String>,
    pub turns: usize,
    pub success: bool,
    pub abandoned: bool,
    /// Wall time of `play` + `submit_guess` for each accepted guess
    pub turn_times: Vec<Duration>,
}

/// Play one game to completion
///
/// Rejected guesses are retried; after `max_rejections` in a row the game is
/// abandoned and recorded as a failure.
///
/// # Errors
///
/// Returns a `GameError` if the target is invalid for the dictionary or the
/// engine reports an invariant violation.
pub fn play_game<A: Agent + ?Sized>(
    agent: &mut A,
    dictionary: &dyn Dictionary,
    target: &str,
    config: &BenchmarkConfig,
) -> Result<GameRecord, GameError> {
    info!(target_word = target, agent = agent.name(), "Playing game");

    let mut game = Game::new(target, dictionary, config.game)?;
    game.start()?;

    let mut guesses = Vec::new();
    let mut turn_times = Vec::new();
    let mut rejections = 0;
    let mut abandoned = false;

    while !game.is_finished() {
        let start = Instant::now();
        let guess = agent.play(&game);
        let submission = game.submit_guess(&guess)?;
        let elapsed = start.elapsed();

        match submission {
            Submission::Accepted { .. } => {
                turn_times.push(elapsed);
                guesses.push(guess);
                rejections = 0;
            }
            Submission::Rejected(reason) => {
                rejections += 1;
                warn!(guess = %guess, %reason, rejections, "agent guess rejected");

                if rejections >= config.max_rejections {
                    warn!(
                        target_word = target,
                        rejections,
                        "too many rejected guesses, abandoning game"
                    );
                    abandoned = true;
                    break;
                }
            }
        }
    }

    Ok(GameRecord {
        target: target.to_string(),
        guesses,
        turns: game.guess_count(),
        success: game.is_success(),
        abandoned,
        turn_times,
    })
}

/// Play the game at `index` of a run
///
/// Targets the dictionary cannot host are skipped rather than failing the run.
fn play_target<A: Agent + ?Sized>(
    agent: &mut A,
    dictionary: &dyn Dictionary,
    (index, target): (usize, &str),
    config: &BenchmarkConfig,
) -> Result<Option<GameRecord>, GameError> {
    agent.begin_game(index);

    match play_game(agent, dictionary, target, config) {
        Ok(record) => Ok(Some(record)),
        Err(GameError::InvalidTarget { target, .. }) => {
            let word_length = dictionary.word_length();
            warn!(target_word = %target, word_length, "skipping invalid target");
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

fn progress_bar(len: usize, visible: bool) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(len as u64);
    let template = "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}";
    if let Ok(style) = ProgressStyle::default_bar().template(template) {
        pb.set_style(style.progress_chars("█▓▒░"));
    }
    pb
}

/// Run one game per target and aggregate the results
///
/// The agent is cloned once for a sequential run and once per game for a
/// parallel run. Each game is announced with [`Agent::begin_game`].
///
/// # Errors
///
/// Returns the first `GameError` other than an invalid target.
///
/// # Examples
/// ```
/// use wordle_bench::agent::CandidateAgent;
/// use wordle_bench::benchmark::{BenchmarkConfig, run_benchmark};
/// use wordle_bench::dictionary::WordList;
///
/// let dictionary = WordList::embedded(5).unwrap();
/// let targets = ["coals", "crane", "slate"];
/// let result = run_benchmark(
///     &CandidateAgent::default(),
///     &dictionary,
///     &targets,
///     &BenchmarkConfig::default(),
/// )
/// .unwrap();
///
/// assert_eq!(result.games, 3);
/// assert!(result.success_rate > 0.0);
/// ```
pub fn run_benchmark<A, S>(
    agent: &A,
    dictionary: &dyn Dictionary,
    targets: &[S],
    config: &BenchmarkConfig,
) -> Result<BenchmarkResult, GameError>
where
    A: Agent + Clone + Send + Sync,
    S: AsRef<str> + Sync,
{
    let start = Instant::now();
    let pb = progress_bar(targets.len(), config.show_progress);

    let records: Vec<GameRecord> = if config.parallel {
        targets
            .par_iter()
            .enumerate()
            .map(|(index, target)| {
                let mut agent = agent.clone();
                let game = (index, target.as_ref());
                let record = play_target(&mut agent, dictionary, game, config);
                pb.inc(1);
                record
            })
            .collect::<Result<Vec<_>, _>>()?
            .into_iter()
            .flatten()
            .collect()
    } else {
        let mut agent = agent.clone();
        let mut records = Vec::with_capacity(targets.len());
        let mut wins = 0;

        for (index, target) in targets.iter().enumerate() {
            let game = (index, target.as_ref());
            if let Some(record) = play_target(&mut agent, dictionary, game, config)? {
                wins += usize::from(record.success);
                records.push(record);
                pb.set_message(format!("won {wins}/{}", records.len()));
            }
            pb.inc(1);
        }
        records
    };

    pb.finish_and_clear();

    let duration = start.elapsed();
    Ok(BenchmarkResult::from_records(agent.name(), records, duration))
}
