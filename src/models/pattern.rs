//! Digit pattern model for the numbering plan.
//!
//! A [`Pattern`] is either a *range* (fixed prefix plus an inclusive numeric
//! sub-range over the trailing digits), a *simple* pattern (fixed prefix,
//! wildcard fill to full length) or a *digit-set* pattern (fixed prefix plus
//! an explicit set of admissible next digits).

use crate::config;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::error::Error;
use std::fmt;

/// Ordered set of single digits, rendered in insertion order (never sorted).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DigitSet(String);

impl DigitSet {
    /// Create an empty digit set.
    pub fn new() -> DigitSet {
        DigitSet(String::new())
    }

    /// Create a digit set from a string of digits, keeping their order.
    pub fn from_digits(digits: &str) -> Result<DigitSet, Box<dyn Error>> {
        if digits.is_empty() {
            return Err("Digit set must not be empty".into());
        }
        if !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(format!("Digit set contains non-digit characters: {digits}").into());
        }
        Ok(DigitSet(digits.to_string()))
    }

    /// Append a digit, preserving insertion order.
    pub fn push(&mut self, digit: char) {
        self.0.push(digit);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DigitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A numbering-plan digit pattern.
///
/// Exactly one of the `start`/`end` pair and `digit_set` is populated at a
/// time; a pattern with neither is a simple pattern. A digit-set pattern is
/// terminal and never summarized further.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pattern {
    /// Leading fixed digits (routing code + series for raw records).
    pub prefix: String,
    /// Inclusive lower bound of the trailing sub-range ("" for simple).
    #[serde(default)]
    pub start: String,
    /// Inclusive upper bound of the trailing sub-range ("" for simple).
    #[serde(default)]
    pub end: String,
    /// Admissible next digits, in the order they were collected.
    #[serde(default, skip_serializing_if = "DigitSet::is_empty")]
    pub digit_set: DigitSet,
}

impl Pattern {
    /// Create a range pattern, applying the canonical trim.
    ///
    /// While `end` ends in `9` and `start` ends in `0` the trailing digit is
    /// dropped from both: the range already spans "any digit" there and the
    /// shorter representation is the canonical one.
    pub fn range(prefix: &str, start: &str, end: &str) -> Result<Pattern, Box<dyn Error>> {
        for (name, value) in [("prefix", prefix), ("start", start), ("end", end)] {
            if !value.chars().all(|c| c.is_ascii_digit()) {
                return Err(format!("Malformed record: non-numeric {name} '{value}'").into());
            }
        }
        if start.len() != end.len() {
            return Err(
                format!("Malformed record: bounds of unequal width {start}-{end}").into(),
            );
        }
        if start > end {
            return Err(format!("Malformed record: start {start} above end {end}").into());
        }

        let mut start = start.to_string();
        let mut end = end.to_string();
        while end.ends_with('9') && start.ends_with('0') && !start.is_empty() {
            end.pop();
            start.pop();
        }

        Ok(Pattern {
            prefix: prefix.to_string(),
            start,
            end,
            digit_set: DigitSet::new(),
        })
    }

    /// Create a simple pattern: fixed prefix, wildcard fill to full length.
    pub fn simple(prefix: &str) -> Pattern {
        Pattern {
            prefix: prefix.to_string(),
            start: String::new(),
            end: String::new(),
            digit_set: DigitSet::new(),
        }
    }

    /// Create a digit-set pattern.
    pub fn with_digit_set(prefix: &str, digit_set: DigitSet) -> Pattern {
        Pattern {
            prefix: prefix.to_string(),
            start: String::new(),
            end: String::new(),
            digit_set,
        }
    }

    /// Build a range pattern from a raw dataset record.
    ///
    /// Prefix = routing code (NIR) + series, block bounds zero-padded to
    /// [`config::BLOCK_DIGITS`]. A malformed record fails the whole batch.
    pub fn from_record(record: &super::RangeRecord) -> Result<Pattern, Box<dyn Error>> {
        let start: u64 = record.block_start.trim().parse().map_err(|_| {
            format!(
                "Malformed record: block start '{}' is not numeric",
                record.block_start
            )
        })?;
        let end: u64 = record.block_end.trim().parse().map_err(|_| {
            format!(
                "Malformed record: block end '{}' is not numeric",
                record.block_end
            )
        })?;
        let width = config::BLOCK_DIGITS;
        if start >= 10u64.pow(width as u32) || end >= 10u64.pow(width as u32) {
            return Err(format!(
                "Malformed record: block {start}-{end} does not fit {width} digits"
            )
            .into());
        }
        let prefix = format!("{}{}", record.nir, record.serie);
        Pattern::range(
            &prefix,
            &format!("{start:0width$}"),
            &format!("{end:0width$}"),
        )
    }

    /// True if this pattern still carries a numeric sub-range.
    pub fn is_range(&self) -> bool {
        !self.start.is_empty()
    }

    /// True if this pattern is a plain prefix with wildcard fill.
    pub fn is_simple(&self) -> bool {
        self.start.is_empty() && self.digit_set.is_empty()
    }

    /// Render the pattern for the switch: dial prefix, then the fixed
    /// digits, a bracketed digit set if any, and `X` wildcards up to the
    /// full number length.
    pub fn dial_pattern(&self) -> Result<String, Box<dyn Error>> {
        if self.is_range() {
            return Err(format!("Range pattern {self} cannot be rendered for the switch").into());
        }
        let body = if self.digit_set.is_empty() {
            let fill = config::NUMBER_LENGTH - self.prefix.len();
            format!("{}{}", self.prefix, "X".repeat(fill))
        } else {
            let fill = config::NUMBER_LENGTH - 1 - self.prefix.len();
            format!("{}[{}]{}", self.prefix, self.digit_set, "X".repeat(fill))
        };
        Ok(format!("{}{}", config::DIAL_PREFIX, body))
    }

    /// Count of national numbers this pattern matches.
    pub fn covered_numbers(&self) -> u64 {
        if self.is_range() {
            let lo: u64 = self.start.parse().unwrap_or(0);
            let hi: u64 = self.end.parse().unwrap_or(0);
            let free = config::NUMBER_LENGTH - self.prefix.len() - self.start.len();
            (hi - lo + 1) * 10u64.pow(free as u32)
        } else if !self.digit_set.is_empty() {
            let free = config::NUMBER_LENGTH - 1 - self.prefix.len();
            self.digit_set.len() as u64 * 10u64.pow(free as u32)
        } else {
            let free = config::NUMBER_LENGTH - self.prefix.len();
            10u64.pow(free as u32)
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_range() {
            write!(f, "{} {}-{}", self.prefix, self.start, self.end)
        } else if !self.digit_set.is_empty() {
            write!(f, "{}[{}]", self.prefix, self.digit_set)
        } else {
            write!(f, "{}", self.prefix)
        }
    }
}

impl Ord for Pattern {
    /// Total order used by the summarizer grouping pass and the merge diff:
    /// prefix first, then start (empty sorts lowest), then digit set. The
    /// trailing `end` comparison only keeps `Ord` consistent with `Eq`.
    fn cmp(&self, other: &Pattern) -> Ordering {
        self.prefix
            .cmp(&other.prefix)
            .then_with(|| self.start.cmp(&other.start))
            .then_with(|| self.digit_set.cmp(&other.digit_set))
            .then_with(|| self.end.cmp(&other.end))
    }
}

impl PartialOrd for Pattern {
    fn partial_cmp(&self, other: &Pattern) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
