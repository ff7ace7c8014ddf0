//! Wordle Bench - CLI
//!
//! Play the word-guessing game by hand, watch an agent solve a word, or
//! benchmark agents over many targets.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use wordle_bench::{
    agent::AgentKind,
    benchmark::{BenchmarkConfig, DEFAULT_MAX_REJECTIONS},
    commands::{benchmark_targets, pick_target, run_benchmark_command, run_play, solve_word},
    core::FeedbackRules,
    dictionary::{Dictionary, WordList},
    game::GameConfig,
    output::{print_benchmark_result, print_solve_result},
};

/// Seed used for shuffling and the random agent when `--seed` is absent
const DEFAULT_SEED: u64 = 42;

#[derive(Parser)]
#[command(
    name = "wordle_bench",
    about = "Word-guessing game engine and agent benchmark",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list: 'embedded' (default) or path to a .txt / .json file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Letters per word
    #[arg(short = 'l', long, global = true, default_value_t = 5)]
    word_length: usize,

    /// Seed for dictionary shuffling, target choice and the random agent
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Keep the word list in file order
    #[arg(long, global = true)]
    no_shuffle: bool,

    /// Attempt limit (a game may run one turn past it)
    #[arg(short = 'm', long, global = true, default_value_t = 6)]
    max_attempts: usize,

    /// Feedback rules: positional (default) or standard
    #[arg(short, long, global = true, default_value = "positional")]
    rules: String,

    /// Increase log verbosity (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Guess a hidden word yourself (default)
    Play {
        /// Target word (random from the word list if omitted)
        target: Option<String>,
    },

    /// Let an agent solve a specific target word
    Solve {
        /// The target word to solve
        word: String,

        /// Agent: candidate (default), random, entropy
        #[arg(short, long, default_value = "candidate")]
        agent: String,

        /// Override the agent's first guess
        #[arg(short = 'f', long)]
        opener: Option<String>,

        /// Show candidate counts and entropy per turn
        #[arg(short, long)]
        details: bool,
    },

    /// Benchmark an agent over many targets
    Benchmark {
        /// Explicit target words (default: the first COUNT words of the list)
        targets: Vec<String>,

        /// Number of targets to draw from the word list
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,

        /// Agent: candidate (default), random, entropy
        #[arg(short, long, default_value = "candidate")]
        agent: String,

        /// Override the agent's first guess
        #[arg(short = 'f', long)]
        opener: Option<String>,

        /// Play games on all cores
        #[arg(short, long)]
        parallel: bool,

        /// Consecutive illegal guesses before a game is abandoned
        #[arg(long, default_value_t = DEFAULT_MAX_REJECTIONS)]
        max_rejections: usize,
    },
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Load the word list selected by `-w`
fn load_dictionary(cli: &Cli) -> Result<WordList> {
    let list = match cli.wordlist.as_str() {
        "embedded" => WordList::embedded(cli.word_length),
        path => WordList::load(path, cli.word_length),
    }
    .with_context(|| format!("failed to load word list '{}'", cli.wordlist))?;

    if cli.no_shuffle {
        Ok(list)
    } else {
        Ok(list.shuffled(cli.seed.unwrap_or(DEFAULT_SEED)))
    }
}

fn game_config(cli: &Cli) -> Result<GameConfig> {
    let name = &cli.rules;
    let rules = FeedbackRules::from_name(name)
        .with_context(|| format!("unknown rules '{name}' (expected positional or standard)"))?;
    let config = GameConfig::with_max_attempts(cli.max_attempts)
        .context("--max-attempts must be at least 1")?;
    Ok(config.with_rules(rules))
}

fn build_agent(name: &str, opener: Option<&str>, seed: u64) -> Result<AgentKind> {
    match AgentKind::from_name(name, opener, seed) {
        Some(agent) => Ok(agent),
        None => bail!(
            "unknown agent '{name}' (expected one of: {})",
            AgentKind::NAMES.join(", ")
        ),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let dictionary = load_dictionary(&cli)?;
    let config = game_config(&cli)?;
    let seed = cli.seed.unwrap_or(DEFAULT_SEED);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play { target: None });

    match command {
        Commands::Play { target } => {
            let target = match target {
                Some(target) => target,
                None => pick_target(&dictionary, cli.seed).context("word list is empty")?,
            };
            run_play(&dictionary, &target, config)
        }
        Commands::Solve {
            word,
            agent: name,
            opener,
            details,
        } => {
            let mut agent = build_agent(&name, opener.as_deref(), seed)?;
            let result = solve_word(
                &mut agent,
                &dictionary,
                &word,
                config,
                DEFAULT_MAX_REJECTIONS,
            )?;
            print_solve_result(&result, details);
            Ok(())
        }
        Commands::Benchmark {
            targets,
            count,
            agent: name,
            opener,
            parallel,
            max_rejections,
        } => {
            let agent = build_agent(&name, opener.as_deref(), seed)?;
            let targets = benchmark_targets(&dictionary, &targets, count);
            let bench_config = BenchmarkConfig {
                game: config,
                parallel,
                max_rejections,
                show_progress: true,
            };

            println!(
                "Running benchmark on {} words from a {}-word list...",
                targets.len(),
                dictionary.words().len()
            );
            let result = run_benchmark_command(&agent, &dictionary, &targets, &bench_config)?;
            print_benchmark_result(&result);
            Ok(())
        }
    }
}
