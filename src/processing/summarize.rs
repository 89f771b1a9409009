//! Bottom-up summarization of sorted simple patterns.
//!
//! One pass replaces every maximal run of consecutive patterns that share
//! all but the last digit of their prefix (at the target length) with a
//! single coarser pattern one digit shorter. The driving loop repeats this
//! from prefix length 10 down to 3, re-sorting between passes.

use crate::config;
use crate::models::{DigitSet, Pattern};
use std::error::Error;

/// Pending run of patterns sharing an `L-1`-length prefix stem.
struct Group {
    prefix: String,
    digits: DigitSet,
}

impl Group {
    fn close(self) -> Pattern {
        if self.digits.len() == 1 {
            // Singleton: re-emit the original pattern, nothing to compress
            Pattern::simple(&format!("{}{}", self.prefix, self.digits))
        } else if self.digits.len() == 10 {
            // All ten digits present: full wildcard fill
            Pattern::simple(&self.prefix)
        } else {
            Pattern::with_digit_set(&self.prefix, self.digits)
        }
    }
}

/// Return an error if the slice is not sorted ascending.
pub fn ensure_sorted(patterns: &[Pattern], what: &str) -> Result<(), Box<dyn Error>> {
    for pair in patterns.windows(2) {
        if pair[0] > pair[1] {
            return Err(format!(
                "{what} is not sorted: {} before {}",
                pair[0], pair[1]
            )
            .into());
        }
    }
    Ok(())
}

/// One summarization pass at a fixed target prefix length.
///
/// Input must be sorted under the pattern total order; runs are grouped by
/// strict adjacency in that order, intentionally. Patterns of a different
/// prefix length, and digit-set patterns (terminal), pass through unchanged
/// without closing the pending run.
pub fn summarize(
    patterns: Vec<Pattern>,
    pattern_len: usize,
) -> Result<Vec<Pattern>, Box<dyn Error>> {
    ensure_sorted(&patterns, "Summarizer input")?;

    // Terminator with a prefix no real pattern can carry, so the run still
    // open at the end of the stream gets flushed.
    let sentinel = Pattern::simple(&"x".repeat(pattern_len));

    let mut output = Vec::with_capacity(patterns.len());
    let mut group: Option<Group> = None;

    for pattern in patterns.into_iter().chain(std::iter::once(sentinel)) {
        if pattern.prefix.len() != pattern_len || !pattern.digit_set.is_empty() {
            output.push(pattern);
            continue;
        }

        let stem = &pattern.prefix[..pattern_len - 1];
        let last_digit = pattern
            .prefix
            .chars()
            .next_back()
            .ok_or("Summarizer saw a pattern with an empty prefix")?;

        match &mut group {
            Some(g) if g.prefix == stem => g.digits.push(last_digit),
            g => {
                if let Some(finished) = g.take() {
                    output.push(finished.close());
                }
                let mut digits = DigitSet::new();
                digits.push(last_digit);
                *g = Some(Group {
                    prefix: stem.to_string(),
                    digits,
                });
            }
        }
    }
    // the run left pending here belongs to the sentinel; drop it

    Ok(output)
}

/// Run the full reduction: one summarization pass per prefix length from 10
/// down to 3 inclusive, sorting before every pass (and once after the last,
/// so the result can feed the differencer directly).
pub fn reduce_patterns(mut patterns: Vec<Pattern>) -> Result<Vec<Pattern>, Box<dyn Error>> {
    for pattern_len in (config::MIN_PREFIX_LENGTH..=config::NUMBER_LENGTH).rev() {
        patterns.sort();
        let before = patterns.len();
        patterns = summarize(patterns, pattern_len)?;
        log::info!(
            "Summarize {pattern_len}: {before} -> {after}",
            after = patterns.len()
        );
    }
    patterns.sort();
    Ok(patterns)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn simples(prefixes: &[&str]) -> Vec<Pattern> {
        prefixes.iter().map(|p| Pattern::simple(p)).collect()
    }

    #[test]
    fn test_singleton_reemitted_unchanged() {
        let input = simples(&["55512"]);
        let output = summarize(input.clone(), 5).unwrap();
        assert_eq!(output, input);
    }

    #[test]
    fn test_full_run_collapses_to_wildcard() {
        let input = simples(&[
            "55510", "55511", "55512", "55513", "55514", "55515", "55516", "55517", "55518",
            "55519",
        ]);
        let output = summarize(input, 5).unwrap();
        assert_eq!(output, simples(&["5551"]));
    }

    #[test]
    fn test_partial_run_becomes_digit_set() {
        let input = simples(&["55513", "55514", "55517", "55518"]);
        let output = summarize(input, 5).unwrap();
        assert_eq!(output.len(), 1);
        assert_eq!(output[0].prefix, "5551");
        assert_eq!(output[0].digit_set.as_str(), "3478");
    }

    #[test]
    fn test_two_stems_two_groups() {
        let input = simples(&["55513", "55514", "55613", "55614"]);
        let output = summarize(input, 5).unwrap();
        assert_eq!(output.len(), 2);
        assert_eq!(output[0].prefix, "5551");
        assert_eq!(output[0].digit_set.as_str(), "34");
        assert_eq!(output[1].prefix, "5561");
        assert_eq!(output[1].digit_set.as_str(), "34");
    }

    #[test]
    fn test_wrong_length_passes_through() {
        let input = simples(&["5550", "55513", "55514", "555170"]);
        let output = summarize(input, 5).unwrap();
        assert!(output.contains(&Pattern::simple("5550")));
        assert!(output.contains(&Pattern::simple("555170")));
        assert!(output
            .iter()
            .any(|p| p.prefix == "5551" && p.digit_set.as_str() == "34"));
        assert_eq!(output.len(), 3);
    }

    #[test]
    fn test_digit_set_patterns_are_terminal() {
        let ds = Pattern::with_digit_set("55513", DigitSet::from_digits("12").unwrap());
        let input = vec![
            Pattern::simple("55512"),
            ds.clone(),
            Pattern::simple("55514"),
        ];
        // sorted: 55512 < 55513[12] < 55514
        let output = summarize(input, 5).unwrap();
        // the terminal pattern passes through; the run around it still
        // collects both neighbours (adjacency over groupable patterns only)
        assert!(output.contains(&ds));
        assert!(output
            .iter()
            .any(|p| p.prefix == "5551" && p.digit_set.as_str() == "24"));
        assert_eq!(output.len(), 2);
    }

    #[test]
    fn test_unsorted_input_is_an_error() {
        let input = simples(&["55514", "55513"]);
        assert!(summarize(input, 5).is_err());
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        assert_eq!(summarize(Vec::new(), 5).unwrap(), Vec::new());
        assert_eq!(reduce_patterns(Vec::new()).unwrap(), Vec::new());
    }

    #[test]
    fn test_reduce_ten_block_series() {
        // ten series 5520..5529, each a full block, reduce to one pattern
        let mut input = Vec::new();
        for d in 0..10 {
            input.push(Pattern::simple(&format!("55552{d}")));
        }
        let output = reduce_patterns(input).unwrap();
        assert_eq!(output, simples(&["55552"]));
    }

    #[test]
    fn test_reduce_cascades_and_stays_sorted() {
        let mut input = simples(&["5556", "5553", "81123", "55540", "55541"]);
        input.sort();
        let output = reduce_patterns(input).unwrap();
        // 55540/55541 collapse at length 5, then 5553/5556 at length 4
        assert_eq!(
            output,
            vec![
                Pattern::with_digit_set("555", DigitSet::from_digits("36").unwrap()),
                Pattern::with_digit_set("5554", DigitSet::from_digits("01").unwrap()),
                Pattern::simple("81123"),
            ]
        );
        let mut check = output.clone();
        check.sort();
        assert_eq!(output, check);
    }

    #[test]
    fn test_length_three_is_still_summarized() {
        let mut input: Vec<Pattern> = (0..10).map(|d| Pattern::simple(&format!("55{d}"))).collect();
        input.sort();
        let output = reduce_patterns(input).unwrap();
        assert_eq!(output, simples(&["55"]));
    }

    #[test]
    fn test_no_pass_below_length_three() {
        // length-2 prefixes sit below the provisioning floor and survive
        let mut input: Vec<Pattern> = (0..10).map(|d| Pattern::simple(&format!("5{d}"))).collect();
        input.sort();
        let output = reduce_patterns(input.clone()).unwrap();
        assert_eq!(output, input);
    }
}
