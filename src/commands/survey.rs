//! Survey all root words - start list evaluation
//!
//! Analyzes every root word in the start list and ranks them by the best
//! score a round on them can reach.

use crate::analysis::max_score;
use crate::dictionary::StaticDictionary;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::time::{Duration, Instant};

/// How many of the lowest-scoring roots to report
const WORST_ROOTS_SHOWN: usize = 3;

/// Statistics from surveying root words
#[derive(Debug)]
pub struct SurveyStatistics {
    pub total_roots: usize,
    /// Every root with its max score, highest first
    pub scores: Vec<(String, u32)>,
    pub average_max_score: f64,
    pub best_root: Option<(String, u32)>,
    pub worst_roots: Vec<(String, u32)>,
    /// Roots on which no word at all can be accepted
    pub dead_roots: Vec<String>,
    pub duration: Duration,
}

/// Compute the max score of every root (or the first `limit` of them) for
/// rounds played in `locale`
///
/// Progress is drawn to stderr while the roots are analyzed in parallel.
///
/// # Panics
///
/// Panics if the progress bar template is malformed.
#[must_use]
pub fn run_survey(
    roots: &[String],
    dictionary: &StaticDictionary,
    locale: &str,
    limit: Option<usize>,
) -> SurveyStatistics {
    let roots: Vec<&String> = roots
        .iter()
        .take(limit.unwrap_or(roots.len()))
        .collect();

    tracing::info!(roots = roots.len(), "surveying root words");

    let pb = ProgressBar::new(roots.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();

    let scores: Vec<(String, u32)> = roots
        .par_iter()
        .map(|&root| {
            let score = max_score(root, dictionary, locale);
            pb.set_message(root.clone());
            pb.inc(1);
            (root.clone(), score)
        })
        .collect();

    pb.finish_with_message("done");

    let duration = start.elapsed();
    summarize(scores, duration)
}

fn summarize(mut scores: Vec<(String, u32)>, duration: Duration) -> SurveyStatistics {
    scores.sort_by(|(wa, sa), (wb, sb)| sb.cmp(sa).then_with(|| wa.cmp(wb)));

    let total_roots = scores.len();
    let average_max_score = if total_roots == 0 {
        0.0
    } else {
        f64::from(scores.iter().map(|(_, s)| *s).sum::<u32>()) / total_roots as f64
    };

    let best_root = scores.first().cloned();
    let worst_roots = scores
        .iter()
        .rev()
        .take(WORST_ROOTS_SHOWN)
        .cloned()
        .collect();
    let dead_roots = scores
        .iter()
        .filter(|(_, s)| *s == 0)
        .map(|(w, _)| w.clone())
        .collect();

    SurveyStatistics {
        total_roots,
        scores,
        average_max_score,
        best_root,
        worst_roots,
        dead_roots,
        duration,
    }
}
