//! Expansion of range patterns into atomic simple patterns.

use crate::models::Pattern;

/// Iterator over the atomic simple patterns covered by one pattern.
///
/// A range pattern yields one simple pattern per integer in `[start, end]`,
/// rendered as `prefix + zero-padded(i)`. A simple or digit-set pattern
/// yields itself once, unchanged, so summarizer output can pass back through
/// the same pipeline untouched.
pub struct ExpandIter {
    prefix: String,
    width: usize,
    next: u64,
    end: u64,
    passthrough: Option<Pattern>,
    done: bool,
}

impl Iterator for ExpandIter {
    type Item = Pattern;

    fn next(&mut self) -> Option<Pattern> {
        if self.done {
            return None;
        }
        if let Some(pattern) = self.passthrough.take() {
            self.done = true;
            return Some(pattern);
        }
        if self.next > self.end {
            self.done = true;
            return None;
        }
        let i = self.next;
        self.next += 1;
        Some(Pattern::simple(&format!(
            "{}{:0width$}",
            self.prefix,
            i,
            width = self.width
        )))
    }
}

/// Expand a single pattern into its atomic simple patterns.
pub fn expand_pattern(pattern: &Pattern) -> ExpandIter {
    if !pattern.is_range() {
        // Already simple (or a terminal digit-set pattern)
        return ExpandIter {
            prefix: String::new(),
            width: 0,
            next: 1,
            end: 0,
            passthrough: Some(pattern.clone()),
            done: false,
        };
    }

    // Bounds were validated as numeric when the pattern was constructed.
    let start: u64 = pattern
        .start
        .parse()
        .unwrap_or_else(|e| panic!("Invalid range start in {pattern}: {e}"));
    let end: u64 = pattern
        .end
        .parse()
        .unwrap_or_else(|e| panic!("Invalid range end in {pattern}: {e}"));

    ExpandIter {
        prefix: pattern.prefix.clone(),
        width: pattern.start.len(),
        next: start,
        end,
        passthrough: None,
        done: false,
    }
}

/// Expand a whole collection, in order.
pub fn expand_patterns<I>(patterns: I) -> impl Iterator<Item = Pattern>
where
    I: IntoIterator<Item = Pattern>,
{
    patterns.into_iter().flat_map(|p| expand_pattern(&p))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DigitSet;

    #[test]
    fn test_expand_range() {
        let p = Pattern::range("555", "00", "42").unwrap();
        let expanded: Vec<Pattern> = expand_pattern(&p).collect();
        assert_eq!(expanded.len(), 43);
        assert_eq!(expanded[0], Pattern::simple("55500"));
        assert_eq!(expanded[42], Pattern::simple("55542"));
        assert!(expanded.iter().all(|p| p.is_simple()));
    }

    #[test]
    fn test_expand_padding() {
        let p = Pattern::range("81", "0008", "0011").unwrap();
        let expanded: Vec<Pattern> = expand_pattern(&p).collect();
        assert_eq!(
            expanded,
            vec![
                Pattern::simple("810008"),
                Pattern::simple("810009"),
                Pattern::simple("810010"),
                Pattern::simple("810011"),
            ]
        );
    }

    #[test]
    fn test_expand_identity_for_simple() {
        let p = Pattern::simple("5551");
        let expanded: Vec<Pattern> = expand_pattern(&p).collect();
        assert_eq!(expanded, vec![p]);
    }

    #[test]
    fn test_expand_identity_for_digit_set() {
        let p = Pattern::with_digit_set("5551", DigitSet::from_digits("37").unwrap());
        let expanded: Vec<Pattern> = expand_pattern(&p).collect();
        assert_eq!(expanded, vec![p]);
    }

    #[test]
    fn test_expand_trimmed_full_block_is_one_simple() {
        // 00-99 trims to a simple pattern at construction, so expansion is
        // the identity case, not 100 atomic patterns.
        let p = Pattern::range("555512", "00", "99").unwrap();
        let expanded: Vec<Pattern> = expand_pattern(&p).collect();
        assert_eq!(expanded, vec![Pattern::simple("555512")]);
    }

    #[test]
    fn test_expand_is_restartable() {
        let p = Pattern::range("555", "7", "9").unwrap();
        let first: Vec<Pattern> = expand_pattern(&p).collect();
        let second: Vec<Pattern> = expand_pattern(&p).collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), 3);
    }

    #[test]
    fn test_expand_patterns_flattens_in_order() {
        let patterns = vec![
            Pattern::range("555", "8", "9").unwrap(),
            Pattern::simple("556"),
        ];
        let expanded: Vec<Pattern> = expand_patterns(patterns).collect();
        assert_eq!(
            expanded,
            vec![
                Pattern::simple("5558"),
                Pattern::simple("5559"),
                Pattern::simple("556"),
            ]
        );
    }
}
