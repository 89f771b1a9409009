//! Local numbering-plan snapshot files.

use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;
use std::error::Error;
use std::path::{Path, PathBuf};

lazy_static! {
    // File names come from the authority as pnn_Publico_dd_mm_yyyy.zip
    static ref SNAPSHOT_RE: Regex =
        Regex::new(r"^pnn_Publico_(\d{2})_(\d{2})_(\d{4})\.zip$").expect("Invalid Regex");
}

/// Parse the snapshot date out of a plan ZIP file name.
pub fn snapshot_date(file_name: &str) -> Option<NaiveDate> {
    let caps = SNAPSHOT_RE.captures(file_name)?;
    NaiveDate::from_ymd_opt(
        caps[3].parse().ok()?,
        caps[2].parse().ok()?,
        caps[1].parse().ok()?,
    )
}

/// List the plan ZIP files in a directory, newest first.
pub fn local_snapshots(dir: &Path) -> Result<Vec<PathBuf>, Box<dyn Error>> {
    let mut snapshots: Vec<(NaiveDate, PathBuf)> = Vec::new();
    for entry in std::fs::read_dir(dir)
        .map_err(|e| format!("Error listing {}: {e}", dir.display()))?
    {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().to_string();
        if let Some(date) = snapshot_date(&name) {
            snapshots.push((date, entry.path()));
        }
    }

    // newest first; the file names carry dd_mm_yyyy, so sort on the date
    snapshots.sort_by(|a, b| b.0.cmp(&a.0));
    log::debug!("Found {} local snapshots in {}", snapshots.len(), dir.display());
    Ok(snapshots.into_iter().map(|(_, path)| path).collect())
}

/// The most recent local snapshot, if any.
pub fn latest_snapshot(dir: &Path) -> Result<PathBuf, Box<dyn Error>> {
    local_snapshots(dir)?
        .into_iter()
        .next()
        .ok_or_else(|| format!("No pnn_Publico_*.zip snapshot found in {}", dir.display()).into())
}
