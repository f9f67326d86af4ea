//! Display functions for command results

use super::formatters::{colored_title, create_progress_bar, length_badge, spaced_letters};
use crate::analysis::RoundAnalysis;
use crate::commands::{CheckReport, SurveyStatistics};
use crate::core::{Round, ValidationOutcome};
use colored::Colorize;

/// Print one submission outcome with its explanation
pub fn print_outcome(outcome: &ValidationOutcome, root_word: &str) {
    if *outcome == ValidationOutcome::NoOp {
        return;
    }

    println!("{}", colored_title(outcome));
    println!("  {}", outcome.message(root_word).bright_black());
}

/// Print the round as the player sees it: root, score and accepted words
pub fn print_round(round: &Round) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Root word: {}    Score: {}",
        spaced_letters(round.root_word()).bright_yellow().bold(),
        round.score().to_string().bright_cyan().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    if round.accepted_words().is_empty() {
        println!("  {}", "No words yet".bright_black());
    }
    for word in round.accepted_words() {
        println!(
            "  {} {}",
            length_badge(word).bright_black(),
            word.bright_white()
        );
    }
}

/// Print the results of checking a batch of words
pub fn print_check_report(report: &CheckReport) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Checking against: {}",
        report.root_word.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (word, outcome) in &report.outcomes {
        if *outcome == ValidationOutcome::NoOp {
            continue;
        }
        println!(
            "  {:<16} {}",
            word.bright_white(),
            colored_title(outcome)
        );
    }

    println!(
        "\n{} accepted, {} rejected, score {}",
        report.accepted().to_string().green().bold(),
        report.rejected().to_string().red().bold(),
        report.score.to_string().bright_cyan().bold()
    );
}

/// Print the result of analyzing a root word
pub fn print_analysis_result(analysis: &RoundAnalysis) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "ROUND ANALYSIS:".bright_cyan().bold(),
        analysis.root_word.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\n📊 {} possible words, max score {}",
        analysis.possible_words.len(),
        analysis.max_score.to_string().bright_yellow().bold()
    );

    let mut current_len = 0;
    for word in &analysis.possible_words {
        let len = word.chars().count();
        if len != current_len {
            current_len = len;
            println!("\n   {}", format!("{len} letters").bright_cyan());
        }
        println!("     {word}");
    }
}

/// Print survey statistics over many root words
pub fn print_survey_statistics(stats: &SurveyStatistics) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SURVEY RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Root words:".bright_cyan().bold());
    println!("   Roots analyzed:   {}", stats.total_roots);
    println!(
        "   Average max:      {}",
        format!("{:.2}", stats.average_max_score)
            .bright_yellow()
            .bold()
    );
    if let Some((word, score)) = &stats.best_root {
        println!(
            "   Richest root:     {} ({score})",
            word.to_uppercase().green()
        );
    }
    for (word, score) in &stats.worst_roots {
        println!(
            "   Poorest root:     {} ({score})",
            word.to_uppercase().yellow()
        );
    }
    if !stats.dead_roots.is_empty() {
        println!(
            "   No words at all:  {}",
            stats.dead_roots.join(", ").red()
        );
    }
    println!("   Time taken:       {:.2}s", stats.duration.as_secs_f64());

    let highest = stats
        .best_root
        .as_ref()
        .map_or(0.0, |(_, score)| f64::from(*score));

    println!("\n📈 {}", "Max score by root:".bright_cyan().bold());
    for (word, score) in &stats.scores {
        let bar = create_progress_bar(f64::from(*score), highest, 30);
        println!("   {:<12} {} {score:3}", word, bar.green());
    }
}
