//! Snapshot-to-snapshot change analysis.
//!
//! Compiles every local plan snapshot (through the pattern cache) and
//! reports, per consecutive pair, how the provisioned pattern set would
//! change.

use crate::ift;
use crate::models::Pattern;
use crate::output::snapshot_summary;
use crate::processing::compare_patterns;
use colored::Colorize;
use std::error::Error;
use std::path::Path;

/// Compare all local snapshots in `dir`, oldest to newest.
///
/// With `show_patterns` the individual added/removed patterns are printed,
/// merged and sorted, after each pair summary.
pub fn pattern_analysis(dir: &Path, show_patterns: bool) -> Result<(), Box<dyn Error>> {
    let now = chrono::Utc::now().with_timezone(&chrono_tz::America::Mexico_City);
    log::info!("#Start pattern_analysis() at {}", now.format("%Y-%m-%d %H:%M"));

    let mut snapshots = ift::local_snapshots(dir)?;
    if snapshots.len() < 2 {
        log::warn!(
            "Nothing to compare: found {} snapshot(s) in {}",
            snapshots.len(),
            dir.display()
        );
        return Ok(());
    }

    // local_snapshots returns newest first; compare oldest to newest
    snapshots.reverse();

    let mut compiled: Vec<(String, Vec<Pattern>)> = Vec::new();
    for path in &snapshots {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());
        log::info!("{name}");
        compiled.push((name, ift::compiled_patterns(path)?));
    }

    for pair in compiled.windows(2) {
        let (old_name, old_patterns) = &pair[0];
        let (new_name, new_patterns) = &pair[1];

        println!("{old_name} vs. {new_name}");
        let (deleted, added) = compare_patterns(old_patterns, new_patterns)?;
        println!("  {}", snapshot_summary(old_name, old_patterns));
        println!("  {}", snapshot_summary(new_name, new_patterns));
        println!("  {} patterns added", added.len());
        println!("  {} patterns deleted", deleted.len());

        if show_patterns {
            let mut changes: Vec<(&Pattern, colored::ColoredString)> = Vec::new();
            changes.extend(added.iter().map(|p| (p, "  added".green())));
            changes.extend(deleted.iter().map(|p| (p, "removed".red())));
            changes.sort_by(|a, b| a.0.cmp(b.0));
            for (pattern, tag) in changes {
                println!("  {tag} {}", pattern.dial_pattern()?);
            }
        }
    }

    Ok(())
}
