//! Display functions for command results

use super::formatters::{describe_guess, entropy_bar};
use crate::commands::{BenchmarkResult, SolveResult};
use crate::solver::{Outcome, Resolution};
use colored::Colorize;

/// Print the end of a game
pub fn print_outcome(outcome: &Outcome) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("Phrase: {}", outcome.phrase.bright_yellow().bold());
    let how = match outcome.resolution {
        Resolution::Letters => "letter by letter",
        Resolution::PhraseGuess => "by guessing the phrase",
    };
    println!(
        "{}",
        format!(
            "✅ Solved {how} in {} guesses ({} rounds)",
            outcome.guesses_used, outcome.rounds
        )
        .green()
        .bold()
    );
}

/// Print the result of solving a known phrase
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("Solving: {}", result.target.bright_yellow().bold());
    println!("{}", "─".repeat(60).cyan());

    for round in &result.rounds {
        let last = round
            .last_guess
            .as_ref()
            .map_or_else(String::new, describe_guess);
        println!("\nRound {}: {}   {}", round.number, round.phrase.bold(), last.dimmed());

        if verbose {
            for slot in &round.slots {
                let mark = if slot.collapsed { " (collapsed)" } else { "" };
                println!(
                    "  Word {} [{}] {:.3} bits, {} left{}",
                    slot.index + 1,
                    entropy_bar(slot.entropy, 20).green(),
                    slot.entropy,
                    slot.remaining,
                    mark
                );
                let top: Vec<String> = slot
                    .top
                    .iter()
                    .take(5)
                    .map(|(w, p)| format!("{w} {p:.3}"))
                    .collect();
                println!("    {}", top.join(", ").bright_black());
            }
            println!("  Joint entropy: {:.3} bits", round.joint_entropy);
            let letters: String = round.ranking.iter().take(5).map(|s| s.letter).collect();
            println!("  Top letters:   {}", letters.bright_cyan());
        }
    }

    if let Some(last) = result.outcome.records.last() {
        println!("\nFinal guess: {}", describe_guess(last));
    }

    println!();
    if result.success() {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.outcome.guesses_used)
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Ended on {} instead", result.outcome.phrase)
                .red()
                .bold()
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Phrases tested:   {} (seed {})", result.total, result.seed);
    println!(
        "   Solved:           {}",
        format!("{}/{}", result.solved, result.total).green()
    );
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_guesses).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_guesses).yellow()
    );
    println!("   Phrase guesses:   {}", result.phrase_guesses);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Phrases/second:   {:.1}", result.phrases_per_second);

    if result.solved > 0 {
        println!("\n📈 {}", "Distribution:".bright_cyan().bold());
        for (&guesses, &count) in &result.distribution {
            let pct = (count as f64 / result.solved as f64) * 100.0;
            let bar_width = (pct / 2.5) as usize;
            let bar = format!(
                "{}{}",
                "█".repeat(bar_width).green(),
                "░"
                    .repeat(40_usize.saturating_sub(bar_width))
                    .bright_black()
            );
            println!("   {guesses:3}: {bar} {count:4} ({pct:5.1}%)");
        }
    }

    if !result.failures.is_empty() {
        println!("\n❌ {}", "Failures:".red().bold());
        for (phrase, reason) in result.failures.iter().take(10) {
            println!("   {phrase}: {}", reason.bright_black());
        }
        if result.failures.len() > 10 {
            println!("   ... and {} more", result.failures.len() - 10);
        }
    }
}
