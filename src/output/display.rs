//! Display functions for command results

use super::formatters::{create_progress_bar, format_path, wrap_words};
use crate::commands::{LocateResult, SolveResult, SurveyResult};
use crate::core::{Board, Tile};
use colored::Colorize;

/// Print the board, highlighting the tiles of `path` in order
pub fn print_board(board: &Board, path: &[Tile]) {
    println!();
    for tile in board.tiles() {
        let letter = board
            .letter(tile)
            .map_or(' ', |c| c.to_ascii_uppercase())
            .to_string();

        let cell = if path.contains(&tile) {
            letter.black().on_bright_yellow().bold()
        } else {
            letter.bright_white()
        };
        print!(" {cell}");

        if tile.col + 1 == board.size() {
            println!();
        }
    }
}

/// Print every word found on a board
pub fn print_solve_result(result: &SolveResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {}×{} ",
        "BOARD SOLUTION".bright_cyan().bold(),
        result.board_size,
        result.board_size
    );
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\nThere are {} possible words ({:.2} ms)",
        result.total().to_string().bright_yellow().bold(),
        result.duration.as_secs_f64() * 1000.0
    );

    let max = result.by_length.values().copied().max().unwrap_or(0);
    println!("\n📈 {}", "By length:".bright_cyan().bold());
    for (&len, &count) in &result.by_length {
        let bar = create_progress_bar(count as f64, max as f64, 30);
        println!("   {len:2}: {} {count:4}", bar.green());
    }

    if !result.words.is_empty() {
        println!("\n📖 {}", "Words:".bright_cyan().bold());
        for line in wrap_words(&result.words, 56) {
            println!("   {line}");
        }
    }
}

/// Print where a word was found
pub fn print_locate_result(result: &LocateResult) {
    match &result.path {
        Some(path) => println!(
            "{} exists in the board: {}",
            result.word.to_uppercase().bright_yellow().bold(),
            format_path(path)
        ),
        None => println!(
            "{} doesn't exist in the board.",
            result.word.to_uppercase().bright_yellow().bold()
        ),
    }

    match result.in_dictionary {
        Some(true) => println!("{}", "✅ Valid dictionary word".green()),
        Some(false) => println!("{}", "❌ Not in the dictionary".red()),
        None => {}
    }
}

/// Print the result of a survey
pub fn print_survey_result(result: &SurveyResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SURVEY RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Words per board:".bright_cyan().bold());
    println!("   Boards tested:    {} ({}×{})", result.boards, result.size, result.size);
    println!(
        "   Average words:    {}",
        format!("{:.2}", result.average_words)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Fewest:           {}",
        result.min_words.to_string().yellow()
    );
    println!(
        "   Most:             {}",
        result.max_words.to_string().green()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Boards/second:    {:.1}", result.boards_per_second);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for (&words, &count) in &result.distribution {
        let pct = (count as f64 / result.boards as f64) * 100.0;
        let bar_width = (pct / 2.5) as usize;
        let bar = format!(
            "{}{}",
            "█".repeat(bar_width).green(),
            "░"
                .repeat(40_usize.saturating_sub(bar_width))
                .bright_black()
        );
        println!("   {words:4}: {bar} {count:4} ({pct:5.1}%)");
    }

    if let Some((board, words)) = &result.best_board {
        println!(
            "\n🏆 {} ({words} words)",
            "Best board:".bright_cyan().bold()
        );
        print_board(board, &[]);
    }
}
