//! Terminal output utilities.

use crate::models::Pattern;
use itertools::Itertools;
use std::error::Error;

/// Dump the rendered dial patterns, one per line.
pub fn print_patterns(patterns: &[Pattern]) -> Result<(), Box<dyn Error>> {
    let rendered: Vec<String> = patterns
        .iter()
        .map(|p| p.dial_pattern())
        .collect::<Result<_, _>>()?;
    println!("{}", rendered.iter().join("\n"));
    Ok(())
}

/// One-line summary of a compiled snapshot.
pub fn snapshot_summary(name: &str, patterns: &[Pattern]) -> String {
    let covered: u64 = patterns.iter().map(|p| p.covered_numbers()).sum();
    format!(
        "{name}: {count} patterns covering {covered} numbers",
        count = patterns.len(),
        covered = group_thousands(covered)
    )
}

/// Group a number with commas every three digits.
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}
