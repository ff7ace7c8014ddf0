//! Display functions for command results

use super::formatters::{colored_feedback, create_progress_bar, percent};
use crate::benchmark::BenchmarkResult;
use crate::commands::SolveResult;
use colored::Colorize;

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, details: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}  (agent: {})",
        result.target.to_uppercase().bright_yellow().bold(),
        result.agent
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.steps.iter().enumerate() {
        println!(
            "\nTurn {}: {} {}",
            i + 1,
            colored_feedback(&step.feedback),
            step.feedback.to_emoji()
        );

        if details {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );

            if let Some(entropy) = step.entropy {
                println!("  Entropy:    {entropy:.3} bits");
                if let Some(expected) = step.expected_remaining {
                    println!("  Expected:   {expected:.1} candidates");
                }

                if step.candidates_after > 0 {
                    let reduction = step.candidates_before as f64 / step.candidates_after as f64;
                    println!(
                        "  Info gained: {:.3} bits ({reduction:.1}x reduction)",
                        reduction.log2()
                    );
                }
            }
        }
    }

    if !result.rejected.is_empty() {
        println!("\n{}", "Rejected guesses:".yellow());
        for (guess, reason) in &result.rejected {
            println!("  {guess}: {reason}");
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.steps.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {} guesses", result.steps.len())
                .red()
                .bold()
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {}",
        "BENCHMARK RESULTS".bright_cyan().bold(),
        format!("({})", result.agent).bright_black()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Games played:     {}", result.games);
    println!(
        "   Success rate:     {}  ({} won, {} lost)",
        percent(result.success_rate).bright_yellow().bold(),
        result.successes,
        result.failures()
    );
    if result.abandoned > 0 {
        println!(
            "   Abandoned:        {}",
            result.abandoned.to_string().red()
        );
    }
    let average = format!("{:.2}", result.average_turns);
    println!("   Average guesses:  {}", average.bright_yellow().bold());
    println!(
        "   Best case:        {}",
        result.min_turns.to_string().green()
    );
    println!(
        "   Worst case:       {}",
        result.max_turns.to_string().yellow()
    );

    println!("\n⏱  {}", "Timing:".bright_cyan().bold());
    println!(
        "   Turn time:        {:.3} ms ± {:.3} ms",
        result.average_turn_time * 1000.0,
        result.std_turn_time * 1000.0
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Games/second:     {:.1}", result.games_per_second());

    if result.distribution.is_empty() {
        return;
    }

    println!("\n📈 {}", "Distribution (wins):".bright_cyan().bold());
    for (&turns, &count) in &result.distribution {
        let bar = create_progress_bar(count as f64, result.games as f64, 40);
        let pct = percent(count as f64 / result.games as f64);
        println!("   {turns}: {} {count:4} ({pct:>6})", bar.green());
    }
}
