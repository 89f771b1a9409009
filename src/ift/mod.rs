//! Numbering-plan dataset retrieval (IFT, the Mexican numbering authority).
//!
//! This module handles everything between the published dataset and the
//! compiler core:
//! - [`web`] - download of the latest plan ZIP from the authority's site
//! - [`archive`] - reading range records out of a plan ZIP
//! - [`snapshots`] - local snapshot file management
//! - [`cache`] - compiled-pattern cache per snapshot

mod archive;
mod cache;
mod snapshots;
mod web;

// Re-export public functions
pub use archive::read_records;
pub use cache::compiled_patterns;
pub use snapshots::{latest_snapshot, local_snapshots, snapshot_date};
pub use web::download_latest;
