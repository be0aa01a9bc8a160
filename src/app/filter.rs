//! Option filtering by query text.
//!
//! The filter is a pure function over the option list: it never mutates,
//! never re-sorts, and is cheap enough to run on every keystroke. Disabled
//! options are filtered exactly like enabled ones; reachability is the
//! keyboard engine's concern, not the filter's.
//!
//! # Match Modes
//!
//! - [`MatchMode::Substring`]: the label contains the query, ignoring case (default)
//! - [`MatchMode::Fuzzy`]: the query's characters appear in order in the label,
//!   scored by the skim algorithm, ignoring case
//!
//! In both modes the result keeps the input order. Fuzzy scores only decide
//! membership.
//!
//! # Example
//!
//! ```
//! use autoselect::app::filter::filter;
//! use autoselect::domain::SelectOption;
//!
//! let options = vec![
//!     SelectOption::new("a", "Apple"),
//!     SelectOption::new("b", "Banana"),
//!     SelectOption::new("c", "Cherry"),
//! ];
//! let labels: Vec<&str> = filter(&options, "AN").iter().map(|o| o.label.as_str()).collect();
//! assert_eq!(labels, ["Banana"]);
//! ```

use crate::domain::SelectOption;
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

/// How query text is matched against option labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchMode {
    #[default]
    Substring,
    Fuzzy,
}

impl MatchMode {
    /// Parses a configuration name (`substring` or `fuzzy`).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "substring" | "contains" => Some(Self::Substring),
            "fuzzy" => Some(Self::Fuzzy),
            _ => None,
        }
    }
}

/// Filters `options` by case-insensitive substring match on the label.
///
/// An empty query returns every option, in order.
#[must_use]
pub fn filter<'a>(options: &'a [SelectOption], query: &str) -> Vec<&'a SelectOption> {
    filter_with(options, query, MatchMode::Substring)
}

/// Filters `options` with the given match mode, preserving input order.
#[must_use]
pub fn filter_with<'a>(
    options: &'a [SelectOption],
    query: &str,
    mode: MatchMode,
) -> Vec<&'a SelectOption> {
    if query.is_empty() {
        return options.iter().collect();
    }

    let filtered: Vec<&SelectOption> = match mode {
        MatchMode::Substring => {
            let query = query.to_lowercase();
            options
                .iter()
                .filter(|option| option.label.to_lowercase().contains(&query))
                .collect()
        }
        MatchMode::Fuzzy => {
            let matcher = SkimMatcherV2::default().ignore_case();
            options
                .iter()
                .filter(|option| matcher.fuzzy_match(&option.label, query).is_some())
                .collect()
        }
    };

    tracing::trace!(
        total = options.len(),
        matched = filtered.len(),
        query_len = query.len(),
        mode = ?mode,
        "options filtered"
    );

    filtered
}

/// Computes the character ranges of `label` matched by `query`.
///
/// Ranges are `(start, end)` character indices with an exclusive end,
/// coalesced into contiguous runs. Returns an empty list when the query is
/// empty or does not match.
#[must_use]
pub fn match_ranges(label: &str, query: &str, mode: MatchMode) -> Vec<(usize, usize)> {
    if query.is_empty() {
        return vec![];
    }

    match mode {
        MatchMode::Substring => find_ignore_case(label, query)
            .map(|range| vec![range])
            .unwrap_or_default(),
        MatchMode::Fuzzy => SkimMatcherV2::default()
            .ignore_case()
            .fuzzy_indices(label, query)
            .map(|(_score, indices)| coalesce(&indices))
            .unwrap_or_default(),
    }
}

/// Locates the first occurrence of `needle` in the lowercased `haystack`.
///
/// Returns the matched `(start, end)` range in characters of the original
/// `haystack`. A character that lowercases to several characters maps every
/// one of them back to itself.
fn find_ignore_case(haystack: &str, needle: &str) -> Option<(usize, usize)> {
    let mut lowered = String::with_capacity(haystack.len());
    let mut origin = Vec::with_capacity(haystack.len());
    for (index, c) in haystack.chars().enumerate() {
        for lower in c.to_lowercase() {
            lowered.push(lower);
            origin.push(index);
        }
    }

    let needle = needle.to_lowercase();
    let len = needle.chars().count();
    if len == 0 {
        return None;
    }

    let byte_start = lowered.find(&needle)?;
    let start = lowered[..byte_start].chars().count();
    let first = *origin.get(start)?;
    let last = *origin.get(start + len - 1)?;
    Some((first, last + 1))
}

fn coalesce(indices: &[usize]) -> Vec<(usize, usize)> {
    let mut ranges: Vec<(usize, usize)> = Vec::new();
    for &idx in indices {
        match ranges.last_mut() {
            Some((_, end)) if *end == idx => *end = idx + 1,
            _ => ranges.push((idx, idx + 1)),
        }
    }
    ranges
}
