//! Daily seed derivation
//!
//! The seed is the UTC calendar date written as `YYYYMMDD`, so every player
//! gets the same puzzle on the same day.

use chrono::{Datelike, NaiveDate, Utc};

/// Where "today" comes from
///
/// Substitute [`FixedDate`] to make date-dependent behavior deterministic.
pub trait DateSource {
    fn today(&self) -> NaiveDate;
}

/// Current UTC date from the system clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemDate;

impl DateSource for SystemDate {
    fn today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }
}

/// A date pinned at construction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedDate(pub NaiveDate);

impl DateSource for FixedDate {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Seed for a calendar date: `year * 10000 + month * 100 + day`
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use todays_wordle::daily::seed_for;
///
/// let date = NaiveDate::from_ymd_opt(2024, 1, 3).unwrap();
/// assert_eq!(seed_for(date), 20240103);
/// ```
#[must_use]
pub fn seed_for(date: NaiveDate) -> u32 {
    date.year().unsigned_abs() * 10_000 + date.month() * 100 + date.day()
}

/// Seed for today according to `dates`
#[must_use]
pub fn todays_seed(dates: &dyn DateSource) -> u32 {
    seed_for(dates.today())
}

/// Calendar date a seed encodes, for years 2000 through 2100
#[must_use]
pub fn date_for(seed: u32) -> Option<NaiveDate> {
    let year = seed / 10_000;
    let month = (seed / 100) % 100;
    let day = seed % 100;

    if !(2000..=2100).contains(&year) {
        return None;
    }

    NaiveDate::from_ymd_opt(i32::try_from(year).ok()?, month, day)
}

/// Human-readable name for a seed: `"January 3, 2024"` or `"seed 12345"`
#[must_use]
pub fn describe_seed(seed: u32) -> String {
    date_for(seed).map_or_else(
        || format!("seed {seed}"),
        |date| date.format("%B %-d, %Y").to_string(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn seed_is_fixed_width_date() {
        assert_eq!(seed_for(date(2024, 1, 3)), 20_240_103);
        assert_eq!(seed_for(date(2025, 12, 31)), 20_251_231);
    }

    #[test]
    fn fixed_date_source() {
        let dates = FixedDate(date(2024, 2, 29));
        assert_eq!(todays_seed(&dates), 20_240_229);
    }

    #[test]
    fn system_date_is_plausible() {
        assert!(todays_seed(&SystemDate) >= 20_240_101);
    }

    #[test]
    fn date_for_round_trips() {
        let d = date(2024, 1, 3);
        assert_eq!(date_for(seed_for(d)), Some(d));
    }

    #[test]
    fn describe_valid_and_invalid_seeds() {
        assert_eq!(describe_seed(20_240_103), "January 3, 2024");
        assert_eq!(describe_seed(20_240_229), "February 29, 2024");
        assert_eq!(describe_seed(20_230_229), "seed 20230229");
        assert_eq!(describe_seed(19_991_231), "seed 19991231");
        assert_eq!(describe_seed(42), "seed 42");
    }
}
