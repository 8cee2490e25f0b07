//! Display functions for command results

use super::formatters::pattern_to_emoji;
use crate::commands::{AnalysisResult, RunResult};
use colored::Colorize;

/// Print the result of a scripted playthrough
pub fn print_run_result(result: &RunResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("Scripted playthrough");
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.rounds.iter().enumerate() {
        let round = i + 1;
        println!(
            "\nRound {}: {} {}",
            round,
            step.word.to_uppercase(),
            pattern_to_emoji(&step.pattern)
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
        }
    }

    println!();
    if result.solved {
        println!(
            "{}",
            format!("✅ Cornered in {} rounds: Absurdle {}/∞", result.rounds.len(), result.rounds.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Still unsolved after {} rounds", result.rounds.len())
                .red()
                .bold()
        );
    }
}

/// Print the result of guess analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "PARTITION ANALYSIS:".bright_cyan().bold(),
        result.word.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\n📊 {} candidates split into {} pattern groups:\n",
        result.total_candidates,
        result.groups.len()
    );

    for (pattern, size) in &result.groups {
        let line = format!("   {}  {size:5} candidates", pattern_to_emoji(pattern));
        if *pattern == result.winner {
            println!("{}  {}", line.bright_green().bold(), "← adversary's reply".bright_green());
        } else {
            println!("{line}");
        }
    }

    println!(
        "\n   Worst case: {} of {} candidates survive this guess",
        result.winner_size.to_string().bright_yellow().bold(),
        result.total_candidates
    );
}
