//! Daily answers across a range of dates
//!
//! Each date's game is started `repeat` times from scratch and the targets are
//! compared, so the report doubles as a determinism check for the seeded stream.

use super::CommandError;
use crate::config::GameConfig;
use crate::core::Word;
use crate::daily::{FixedDate, seed_for};
use crate::game::Game;
use crate::wordlists::TargetPool;
use chrono::NaiveDate;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::time::{Duration, Instant};

/// The answer for one date
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarEntry {
    pub date: NaiveDate,
    pub seed: u32,
    pub target: Word,
    /// Every repeated start produced the same target
    pub stable: bool,
}

/// Answers for consecutive dates
#[derive(Debug)]
pub struct CalendarReport {
    pub entries: Vec<CalendarEntry>,
    pub repeat: usize,
    pub duration: Duration,
}

impl CalendarReport {
    #[must_use]
    pub fn all_stable(&self) -> bool {
        self.entries.iter().all(|entry| entry.stable)
    }

    /// Dates that shared their answer with the previous day
    #[must_use]
    pub fn repeats(&self) -> Vec<NaiveDate> {
        self.entries
            .windows(2)
            .filter(|pair| pair[0].target == pair[1].target)
            .map(|pair| pair[1].date)
            .collect()
    }
}

/// Compute the daily answer for `days` dates starting at `start`
///
/// Seed overrides and random mode in `config` are ignored: every entry is the
/// date's own daily game.
///
/// # Errors
/// Returns [`CommandError`] when no target is eligible or the progress bar
/// cannot be set up.
pub fn run_calendar(
    config: &GameConfig,
    pool: &TargetPool,
    start: NaiveDate,
    days: usize,
    repeat: usize,
    show_progress: bool,
) -> Result<CalendarReport, CommandError> {
    let config = GameConfig {
        seed: None,
        random: false,
        ..config.clone()
    };
    let repeat = repeat.max(1);
    let dates: Vec<NaiveDate> = start.iter_days().take(days).collect();

    let pb = if show_progress {
        let pb = ProgressBar::new(dates.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")?
                .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let started = Instant::now();
    let entries = dates
        .par_iter()
        .map(|&date| -> Result<CalendarEntry, CommandError> {
            let today = FixedDate(date);
            let target = Game::daily(&config, pool, &today)?.target().clone();
            let mut stable = true;
            for _ in 1..repeat {
                stable &= Game::daily(&config, pool, &today)?.target() == &target;
            }
            pb.inc(1);
            Ok(CalendarEntry {
                date,
                seed: seed_for(date),
                target,
                stable,
            })
        })
        .collect::<Result<Vec<_>, CommandError>>()?;
    pb.finish_with_message("Complete!");

    let report = CalendarReport {
        entries,
        repeat,
        duration: started.elapsed(),
    };
    if !report.all_stable() {
        tracing::warn!("daily targets differed between repeated starts");
    }
    Ok(report)
}
