//! Output formatting.
//!
//! - [`terminal`] - pattern dumps and snapshot summaries for the console

mod terminal;

pub use terminal::{group_thousands, print_patterns, snapshot_summary};
