//! Survey command
//!
//! Generates many random boards and reports how many words they hold.

use crate::core::{Board, generate_with_rng};
use crate::dictionary::PrefixOracle;
use crate::search::count_all_words;
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Configuration for a survey run
pub struct SurveyConfig {
    pub size: i64,
    pub count: usize,
    pub seed: u64,
    pub show_progress: bool,
}

impl SurveyConfig {
    #[must_use]
    pub const fn new(size: i64, count: usize) -> Self {
        Self {
            size,
            count,
            seed: 0,
            show_progress: true,
        }
    }

    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub const fn quiet(mut self) -> Self {
        self.show_progress = false;
        self
    }
}

/// Statistics from a survey run
pub struct SurveyResult {
    pub boards: usize,
    pub size: usize,
    pub total_words: usize,
    pub average_words: f64,
    pub min_words: usize,
    pub max_words: usize,
    /// Words per board → number of boards with that count
    pub distribution: BTreeMap<usize, usize>,
    pub best_board: Option<(Board, usize)>,
    pub duration: Duration,
    pub boards_per_second: f64,
}

/// Count words on `config.count` seeded random boards
///
/// # Errors
///
/// Returns an error if the board size is not positive or no boards are requested.
///
/// # Panics
///
/// Panics if the progress bar template is malformed.
pub fn run_survey<O: PrefixOracle + ?Sized>(
    config: &SurveyConfig,
    dictionary: &O,
) -> Result<SurveyResult, String> {
    if config.count == 0 {
        return Err("Survey needs at least one board".to_string());
    }

    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut distribution: BTreeMap<usize, usize> = BTreeMap::new();
    let mut best_board: Option<(Board, usize)> = None;
    let mut total_words = 0;
    let mut min_words = usize::MAX;
    let mut max_words = 0;
    let mut size = 0;

    let pb = if config.show_progress {
        let pb = ProgressBar::new(config.count as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
                .unwrap()
                .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    tracing::info!(
        size = config.size,
        count = config.count,
        seed = config.seed,
        "Starting survey"
    );
    let start = Instant::now();

    for _ in 0..config.count {
        let board = generate_with_rng(config.size, &mut rng)
            .ok_or_else(|| format!("Invalid board size: {}", config.size))?;
        size = board.size();

        let words = count_all_words(&board, dictionary);
        total_words += words;
        min_words = min_words.min(words);
        max_words = max_words.max(words);
        *distribution.entry(words).or_insert(0) += 1;

        if best_board.as_ref().is_none_or(|(_, best)| words > *best) {
            best_board = Some((board, words));
        }

        pb.set_message(format!("best: {max_words} words"));
        pb.inc(1);
    }

    pb.finish_and_clear();
    let duration = start.elapsed();

    Ok(SurveyResult {
        boards: config.count,
        size,
        total_words,
        average_words: total_words as f64 / config.count as f64,
        min_words,
        max_words,
        distribution,
        best_board,
        duration,
        boards_per_second: config.count as f64 / duration.as_secs_f64().max(f64::EPSILON),
    })
}
