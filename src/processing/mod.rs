//! Pattern processing logic.
//!
//! This module contains the compiler core:
//! - [`expand`] - expansion of range patterns into atomic simple patterns
//! - [`summarize`] - hierarchical summarization into a minimal pattern set
//! - [`diff`] - merge diff between two sorted pattern sets

mod diff;
mod expand;
mod summarize;

// Re-export public functions
pub use diff::{compare_patterns, ensure_sorted_unique};
pub use expand::{expand_pattern, expand_patterns, ExpandIter};
pub use summarize::{ensure_sorted, reduce_patterns, summarize};
