//! Domain models for the mobile pattern summary.
//!
//! This module contains the core data structures used throughout the
//! application:
//! - [`Pattern`] - a digit pattern (range, simple or digit-set)
//! - [`DigitSet`] - ordered set of admissible next digits
//! - [`RangeRecord`] - raw row of the published numbering-plan CSV

mod pattern;
mod record;

// Re-export public types
pub use pattern::{DigitSet, Pattern};
pub use record::RangeRecord;
