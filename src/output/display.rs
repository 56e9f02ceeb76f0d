//! Display functions for command results

use super::formatters::{columns, create_progress_bar, letter_tiles};
use crate::commands::BenchmarkResult;
use crate::commands::benchmark::BUCKET_WIDTH;
use crate::core::GameState;
use colored::Colorize;
use std::collections::BTreeSet;

const WORDS_PER_ROW: usize = 6;

/// Print a titled word collection in columns
pub fn print_word_set(title: &str, words: &BTreeSet<&str>) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "{} {}",
        title.bright_cyan().bold(),
        format!("({} words)", words.len()).bright_black()
    );
    println!("{}", "─".repeat(60).cyan());

    if words.is_empty() {
        println!("  {}", "no matches".yellow());
        return;
    }
    for row in columns(words.iter().copied(), WORDS_PER_ROW) {
        println!("  {row}");
    }
}

/// Print the outcome of a membership check
pub fn print_exists(word: &str, exists: bool) {
    if exists {
        println!("{} {}", "✓".green().bold(), format!("'{word}' is in the dictionary").green());
    } else {
        println!("{} {}", "✗".red().bold(), format!("'{word}' is not in the dictionary").red());
    }
}

/// Print a scrambled word next to its source
pub fn print_scramble(word: &str, scrambled: &str) {
    println!(
        "{} → {}",
        word.bright_white(),
        scrambled.bright_yellow().bold()
    );
}

/// Print a freshly created game round
pub fn print_game_state(state: &GameState) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "NEW ROUND:".bright_cyan().bold(),
        letter_tiles(state.scrambled()).bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n   Target:     {}", state.original().bright_white().bold());
    println!("   Scrambled:  {}", state.scrambled());
    println!("   Sub-words:  {}", state.sub_words().len());

    let words: Vec<&str> = state.sub_words().keys().map(String::as_str).collect();
    for row in columns(words, WORDS_PER_ROW) {
        println!("     {row}");
    }
}

/// Print a game round as JSON
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn print_game_state_json(state: &GameState) -> serde_json::Result<()> {
    println!("{}", serde_json::to_string_pretty(state)?);
    Ok(())
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Rounds:           {}", result.rounds);
    println!(
        "   Avg sub-words:    {}",
        format!("{:.2}", result.average_sub_words)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Fewest:           {}",
        format!("{}", result.min_sub_words).yellow()
    );
    println!(
        "   Most:             {}",
        format!("{}", result.max_sub_words).green()
    );
    if let Some((word, count)) = &result.richest_word {
        println!("   Richest word:     {word} ({count})");
    }
    println!("   Time taken:       {:.3}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    if result.rounds == 0 {
        return;
    }

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for (&bucket, &count) in &result.distribution {
        let pct = (count as f64 / result.rounds as f64) * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!(
            "   {:>3}-{:<3} {} {count:4} ({pct:5.1}%)",
            bucket,
            bucket + BUCKET_WIDTH - 1,
            bar.green()
        );
    }
}
