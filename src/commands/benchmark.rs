//! Benchmark command
//!
//! Measures sub-word generation across many random target words.

use crate::engine::Jumble;
use indicatif::{ProgressBar, ProgressStyle};
use rand::Rng;
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Width of each bucket in the sub-word count histogram
pub const BUCKET_WIDTH: usize = 5;

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub rounds: usize,
    pub total_sub_words: usize,
    pub average_sub_words: f64,
    pub min_sub_words: usize,
    pub max_sub_words: usize,
    /// Rounds per bucket, keyed by the bucket's lower bound
    pub distribution: BTreeMap<usize, usize>,
    pub richest_word: Option<(String, usize)>,
    pub duration: Duration,
    pub words_per_second: f64,
}

/// Generate sub-words for `rounds` random targets
///
/// Targets are drawn with the engine's generator, so seeded engines always
/// benchmark the same words. Generation itself runs on the rayon pool.
pub fn run_benchmark<R: Rng>(
    engine: &mut Jumble<'_, R>,
    rounds: usize,
    length: Option<usize>,
    min_length: Option<usize>,
    show_progress: bool,
) -> BenchmarkResult {
    let targets: Vec<&str> = (0..rounds)
        .filter_map(|_| engine.pick_one_random_word(length))
        .collect();

    let pb = if show_progress {
        ProgressBar::new(targets.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
    );

    let generator = engine.subwords();
    let start = Instant::now();

    let counts: Vec<(&str, usize)> = targets
        .par_iter()
        .map(|&target| {
            let found = generator.generate(target, min_length).len();
            pb.inc(1);
            (target, found)
        })
        .collect();

    let duration = start.elapsed();
    pb.finish_with_message("Complete!");

    summarize(&counts, duration)
}

fn summarize(counts: &[(&str, usize)], duration: Duration) -> BenchmarkResult {
    let rounds = counts.len();
    let total_sub_words: usize = counts.iter().map(|&(_, n)| n).sum();

    let mut distribution: BTreeMap<usize, usize> = BTreeMap::new();
    for &(_, n) in counts {
        *distribution.entry(n / BUCKET_WIDTH * BUCKET_WIDTH).or_insert(0) += 1;
    }

    let richest_word = counts
        .iter()
        .max_by_key(|&&(_, n)| n)
        .map(|&(word, n)| (word.to_string(), n));

    let secs = duration.as_secs_f64();

    BenchmarkResult {
        rounds,
        total_sub_words,
        average_sub_words: if rounds == 0 {
            0.0
        } else {
            total_sub_words as f64 / rounds as f64
        },
        min_sub_words: counts.iter().map(|&(_, n)| n).min().unwrap_or(0),
        max_sub_words: counts.iter().map(|&(_, n)| n).max().unwrap_or(0),
        distribution,
        richest_word,
        duration,
        words_per_second: if secs > 0.0 { rounds as f64 / secs } else { 0.0 },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::WordStore;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn benchmark_runs() {
        let store = WordStore::embedded();
        let mut engine = Jumble::new(&store, StdRng::seed_from_u64(3));
        let result = run_benchmark(&mut engine, 20, Some(6), None, false);

        assert_eq!(result.rounds, 20);
        assert!(result.min_sub_words <= result.max_sub_words);
        assert!(result.average_sub_words >= result.min_sub_words as f64);
        assert!(result.average_sub_words <= result.max_sub_words as f64);
    }

    #[test]
    fn benchmark_distribution_sums_correctly() {
        let store = WordStore::embedded();
        let mut engine = Jumble::new(&store, StdRng::seed_from_u64(4));
        let result = run_benchmark(&mut engine, 15, None, Some(3), false);

        let distribution_sum: usize = result.distribution.values().sum();
        assert_eq!(distribution_sum, result.rounds);
        assert!(result.distribution.keys().all(|k| k % BUCKET_WIDTH == 0));
    }

    #[test]
    fn benchmark_missing_length() {
        let store = WordStore::from_slice(&["owl", "low"]);
        let mut engine = Jumble::new(&store, StdRng::seed_from_u64(5));
        let result = run_benchmark(&mut engine, 10, Some(9), None, false);

        assert_eq!(result.rounds, 0);
        assert_eq!(result.total_sub_words, 0);
        assert!(result.richest_word.is_none());
    }

    #[test]
    fn summarize_counts() {
        let counts = [("yellow", 13), ("owl", 1), ("listen", 7)];
        let result = summarize(&counts, Duration::from_secs(1));

        assert_eq!(result.rounds, 3);
        assert_eq!(result.total_sub_words, 21);
        assert_eq!(result.min_sub_words, 1);
        assert_eq!(result.max_sub_words, 13);
        assert_eq!(result.richest_word, Some(("yellow".to_string(), 13)));
        assert_eq!(result.distribution.get(&0), Some(&1));
        assert_eq!(result.distribution.get(&5), Some(&1));
        assert_eq!(result.distribution.get(&10), Some(&1));
        assert!((result.words_per_second - 3.0).abs() < 1e-9);
    }
}
