//! Formatting utilities for terminal output

use crate::core::Tile;

/// Format a path as `(r,c) → (r,c) → …`
#[must_use]
pub fn format_path(path: &[Tile]) -> String {
    path.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" → ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Group words into lines of at most `width` characters
#[must_use]
pub fn wrap_words(words: &[String], width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();

    for word in words {
        if !line.is_empty() && line.len() + 1 + word.len() > width {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }

    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_path_joins_tiles() {
        let path = [Tile::new(0, 0), Tile::new(0, 1), Tile::new(1, 2)];
        assert_eq!(format_path(&path), "(0,0) → (0,1) → (1,2)");
        assert_eq!(format_path(&[]), "");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }

    #[test]
    fn wrap_words_respects_width() {
        let words: Vec<String> = ["care", "car", "cat", "arc"]
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(wrap_words(&words, 8), vec!["care car", "cat arc"]);
        assert_eq!(wrap_words(&words, 100), vec!["care car cat arc"]);
        assert!(wrap_words(&[], 10).is_empty());
    }
}
