// cargo watch -x 'fmt' -x 'run'  // 'run -- --some-arg'

pub mod analysis;
pub mod args;
pub mod config;
pub mod ift;
pub mod models;
pub mod output;
pub mod processing;
pub mod ucm;

use models::{Pattern, RangeRecord};
use processing::{expand_patterns, reduce_patterns};
use std::error::Error;

/// Compile the mobile ranges of a record batch into the minimal pattern set.
///
/// Records whose network type is not the mobile designator are discarded; a
/// malformed record fails the whole batch, since it means the upstream data
/// contract is broken. Empty input yields an empty result.
pub fn compile_mobile_patterns(records: &[RangeRecord]) -> Result<Vec<Pattern>, Box<dyn Error>> {
    let mut patterns = Vec::new();
    for record in records.iter().filter(|r| r.is_mobile()) {
        patterns.push(Pattern::from_record(record)?);
    }
    log::info!("Got {} mobile range patterns", patterns.len());

    patterns.sort();
    log::info!("Expanding patterns...");
    let patterns: Vec<Pattern> = expand_patterns(patterns).collect();
    log::info!("Expanded to {} patterns", patterns.len());

    reduce_patterns(patterns)
}
