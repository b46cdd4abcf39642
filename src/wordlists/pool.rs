//! Frequency-ranked target candidates

/// Marks a pool entry that stays guessable but is never chosen as a target
pub const MARKER: char = '*';

/// Least common word still eligible as a target
pub const DEFAULT_CUTOFF: &str = "murky";

/// Target candidates, most common first
///
/// Entries are kept verbatim (lowercased) including any [`MARKER`], so the
/// length filter sees the same strings the frequency list holds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TargetPool {
    entries: Vec<String>,
}

impl TargetPool {
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let entries = entries
            .into_iter()
            .map(|entry| entry.as_ref().trim().to_ascii_lowercase())
            .filter(|entry| !entry.is_empty())
            .collect();
        Self { entries }
    }

    /// Keep the ranked prefix up to and including `cutoff`
    ///
    /// The whole list is kept when `cutoff` does not occur.
    pub fn ranked_prefix<I, S>(ranked: I, cutoff: &str) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut pool = Self::new(ranked);
        if let Some(end) = pool.entries.iter().position(|entry| entry == cutoff) {
            pool.entries.truncate(end + 1);
        } else {
            tracing::warn!(cutoff, "cutoff word not in target list, using the whole list");
        }
        pool
    }

    #[must_use]
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Entries of exactly `length` characters, markers included
    #[must_use]
    pub fn of_length(&self, length: usize) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|entry| entry.chars().count() == length)
            .map(String::as_str)
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Whether a pool entry is flagged as excluded from selection
#[must_use]
pub fn is_marked(entry: &str) -> bool {
    entry.contains(MARKER)
}
