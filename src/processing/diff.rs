//! Merge-join diff between two sorted pattern sets.

use super::summarize::ensure_sorted;
use crate::models::Pattern;
use std::cmp::Ordering;
use std::error::Error;

/// Return an error if the slice is not strictly ascending (sorted and free
/// of duplicates).
pub fn ensure_sorted_unique(patterns: &[Pattern], what: &str) -> Result<(), Box<dyn Error>> {
    ensure_sorted(patterns, what)?;
    for pair in patterns.windows(2) {
        if pair[0] == pair[1] {
            return Err(format!("{what} contains duplicate entry {}", pair[0]).into());
        }
    }
    Ok(())
}

/// Compare two sorted, duplicate-free pattern lists.
///
/// Returns `(deleted, added)`: entries present in `old` but not `new`, and
/// entries present in `new` but not `old`. Both outputs come back sorted
/// ascending. Linear in `|old| + |new|`.
pub fn compare_patterns(
    old: &[Pattern],
    new: &[Pattern],
) -> Result<(Vec<Pattern>, Vec<Pattern>), Box<dyn Error>> {
    ensure_sorted_unique(old, "Differencer old input")?;
    ensure_sorted_unique(new, "Differencer new input")?;

    let mut deleted = Vec::new();
    let mut added = Vec::new();
    let (mut i, mut j) = (0, 0);

    while i < old.len() && j < new.len() {
        match old[i].cmp(&new[j]) {
            Ordering::Equal => {
                i += 1;
                j += 1;
            }
            Ordering::Greater => {
                added.push(new[j].clone());
                j += 1;
            }
            Ordering::Less => {
                deleted.push(old[i].clone());
                i += 1;
            }
        }
    }
    deleted.extend(old[i..].iter().cloned());
    added.extend(new[j..].iter().cloned());

    Ok((deleted, added))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(prefix: &str, start: &str) -> Pattern {
        let end = start; // width-matched dummy bound, enough for ordering
        Pattern::range(prefix, start, end).unwrap()
    }

    #[test]
    fn test_compare_shifted_window() {
        let old = vec![range("555", "12"), range("555", "13")];
        let new = vec![range("555", "13"), range("555", "14")];
        let (deleted, added) = compare_patterns(&old, &new).unwrap();
        assert_eq!(deleted, vec![range("555", "12")]);
        assert_eq!(added, vec![range("555", "14")]);
    }

    #[test]
    fn test_compare_identical() {
        let set = vec![Pattern::simple("5551"), Pattern::simple("5552")];
        let (deleted, added) = compare_patterns(&set, &set).unwrap();
        assert!(deleted.is_empty());
        assert!(added.is_empty());
    }

    #[test]
    fn test_compare_empty_sides() {
        let set = vec![Pattern::simple("5551"), Pattern::simple("5552")];
        let (deleted, added) = compare_patterns(&[], &set).unwrap();
        assert!(deleted.is_empty());
        assert_eq!(added, set);

        let (deleted, added) = compare_patterns(&set, &[]).unwrap();
        assert_eq!(deleted, set);
        assert!(added.is_empty());
    }

    #[test]
    fn test_compare_tail_runs() {
        let old = vec![
            Pattern::simple("5551"),
            Pattern::simple("5552"),
            Pattern::simple("5553"),
        ];
        let new = vec![Pattern::simple("5552")];
        let (deleted, added) = compare_patterns(&old, &new).unwrap();
        assert_eq!(deleted, vec![Pattern::simple("5551"), Pattern::simple("5553")]);
        assert!(added.is_empty());
    }

    #[test]
    fn test_compare_outputs_are_sorted() {
        let old = vec![
            Pattern::simple("111"),
            Pattern::simple("333"),
            Pattern::simple("555"),
        ];
        let new = vec![
            Pattern::simple("222"),
            Pattern::simple("333"),
            Pattern::simple("444"),
        ];
        let (deleted, added) = compare_patterns(&old, &new).unwrap();
        assert_eq!(deleted, vec![Pattern::simple("111"), Pattern::simple("555")]);
        assert_eq!(added, vec![Pattern::simple("222"), Pattern::simple("444")]);
    }

    #[test]
    fn test_unsorted_input_is_an_error() {
        let bad = vec![Pattern::simple("5552"), Pattern::simple("5551")];
        let good = vec![Pattern::simple("5551")];
        assert!(compare_patterns(&bad, &good).is_err());
        assert!(compare_patterns(&good, &bad).is_err());
    }

    #[test]
    fn test_duplicate_input_is_an_error() {
        let bad = vec![Pattern::simple("5551"), Pattern::simple("5551")];
        assert!(compare_patterns(&bad, &[]).is_err());
    }
}
