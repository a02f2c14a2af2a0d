//! Display functions for command results

use super::formatters::{spaced_letters, word_count};
use crate::commands::CheckResult;
use colored::Colorize;

/// Print the result of a batch check
pub fn print_check_result(result: &CheckResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Root word: {}",
        spaced_letters(&result.root).bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for verdict in &result.verdicts {
        match &verdict.outcome {
            Ok(()) => println!("  {} {}", "✓".green(), verdict.answer.green().bold()),
            Err(rejection) => println!(
                "  {} {} {} {}",
                "✗".red(),
                verdict.answer.red(),
                format!("{}:", rejection.title()).bright_black(),
                rejection.message().bright_black()
            ),
        }
    }

    println!(
        "\n📊 Accepted {} of {}",
        word_count(result.score()).bright_cyan().bold(),
        result.verdicts.len()
    );

    if !result.used_words.is_empty() {
        println!("   Used words: {}", result.used_words.join(", "));
    }
}
