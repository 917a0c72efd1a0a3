//! Display functions for command results

use super::formatters::{colored_row, create_progress_bar};
use crate::commands::{AnalysisResult, CheckResult};
use crate::core::tiles_to_emoji;
use crate::dictionary::DictionaryReport;
use colored::Colorize;

/// Print the result of checking a guess
pub fn print_check_result(result: &CheckResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Target: {}   Guess: {}",
        result.target.shout().bright_yellow().bold(),
        result.guess.shout().bright_white().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    println!(
        "\n  {}  {}",
        colored_row(&result.guess, &result.tiles),
        tiles_to_emoji(&result.tiles)
    );

    let matches: Vec<String> = result
        .score
        .matches()
        .iter()
        .map(ToString::to_string)
        .collect();
    let close: Vec<String> = result
        .score
        .close()
        .iter()
        .map(|(letter, count)| format!("{letter}:{count}"))
        .collect();

    println!("\n  Match indexes: {{{}}}", matches.join(", "));
    println!("  Close letters: {{{}}}", close.join(", "));

    if !result.guess_is_valid {
        println!(
            "\n  {}",
            format!("{} is not a valid word.", result.guess.shout()).red()
        );
    }
}

/// Print the result of analyzing an opening guess
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "GUESS ANALYSIS:".bright_cyan().bold(),
        result.word.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 Against {} possible answers:", result.total_answers);
    println!(
        "   Exact matches:  {}",
        format!("{:.2} per game", result.average_matches).bright_yellow()
    );
    println!(
        "   Close letters:  {}",
        format!("{:.2} per game", result.average_close).bright_yellow()
    );
    println!("   Blank rows:     {}", result.blank_rows);

    println!("\n📈 {}", "Exact matches:".bright_cyan().bold());
    for (matches, &count) in result.match_distribution.iter().enumerate() {
        let pct = if result.total_answers > 0 {
            count as f64 / result.total_answers as f64 * 100.0
        } else {
            0.0
        };
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {matches}: {} {count:5} ({pct:5.1}%)", bar.green());
    }
}

/// Print a dictionary audit report
pub fn print_audit_report(report: &DictionaryReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "DICTIONARY AUDIT".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n   Answer words:     {}", report.answer_count);
    println!("   Valid guesses:    {}", report.valid_count);
    println!("   Playable answers: {}", report.playable);

    if !report.missing.is_empty() {
        println!(
            "\n⚠️  {}",
            "Answers missing from the valid list:".yellow().bold()
        );
        for word in report.missing.iter().take(20) {
            println!("   {}", word.shout().yellow());
        }
        if report.missing.len() > 20 {
            println!("   … and {} more", report.missing.len() - 20);
        }
    }

    if !report.duplicates.is_empty() {
        println!("\n⚠️  {}", "Duplicate answers:".yellow().bold());
        for word in &report.duplicates {
            println!("   {}", word.shout().yellow());
        }
    }

    if report.is_consistent() {
        println!("\n{}", "✅ Every answer can be drawn".green().bold());
    }
}
