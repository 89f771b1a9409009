//! Compiled-pattern cache per snapshot.
//!
//! Compiling a full plan snapshot expands to a few million atomic patterns,
//! so the analysis over many snapshots caches each compiled set as JSON next
//! to its ZIP.

use super::archive::read_records;
use crate::compile_mobile_patterns;
use crate::models::Pattern;
use std::error::Error;
use std::path::{Path, PathBuf};

/// Cache file belonging to a snapshot ZIP.
fn cache_path(zip_path: &Path) -> PathBuf {
    zip_path.with_extension("patterns.json")
}

/// Compiled mobile patterns of one snapshot, from cache when present.
///
/// On a cache miss the snapshot is read and compiled, and the result is
/// written back for the next run.
pub fn compiled_patterns(zip_path: &Path) -> Result<Vec<Pattern>, Box<dyn Error>> {
    let cache_file = cache_path(zip_path);

    match std::fs::read_to_string(&cache_file) {
        Ok(json) => {
            log::info!("Reading compiled patterns from cache file: {}", cache_file.display());
            let mut deserializer = serde_json::Deserializer::from_str(&json);
            let patterns: Vec<Pattern> = serde_path_to_error::deserialize(&mut deserializer)
                .map_err(|e| {
                    format!(
                        "Error parsing cache {}: path={} error={e}",
                        cache_file.display(),
                        e.path()
                    )
                })?;
            Ok(patterns)
        }
        Err(_) => {
            log::warn!("Cache file not found: {}", cache_file.display());
            let records = read_records(zip_path)?;
            let patterns = compile_mobile_patterns(&records)?;

            let json = serde_json::to_string(&patterns)
                .map_err(|e| format!("Error serializing patterns: {e}"))?;
            log::warn!("Writing compiled patterns to cache file: {}", cache_file.display());
            std::fs::write(&cache_file, json)
                .map_err(|e| format!("Error writing cache file {}: {e}", cache_file.display()))?;
            Ok(patterns)
        }
    }
}
