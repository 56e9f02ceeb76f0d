//! Formatting utilities for terminal output

/// Render letters as spaced upper-case tiles
#[must_use]
pub fn letter_tiles(word: &str) -> String {
    word.chars()
        .flat_map(char::to_uppercase)
        .map(|c| format!("[{c}]"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Hide a word behind one underscore per letter
#[must_use]
pub fn masked(word: &str) -> String {
    vec!["_"; word.chars().count()].join(" ")
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

/// Lay words out in left-aligned columns, `per_row` to a line
#[must_use]
pub fn columns<'a, I>(words: I, per_row: usize) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let words: Vec<&str> = words.into_iter().collect();
    let width = words.iter().map(|w| w.chars().count()).max().unwrap_or(0) + 2;

    words
        .chunks(per_row.max(1))
        .map(|row| {
            row.iter()
                .map(|w| format!("{w:<width$}"))
                .collect::<String>()
                .trim_end()
                .to_string()
        })
        .collect()
}
