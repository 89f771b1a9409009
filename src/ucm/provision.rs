//! Reconciling the compiled pattern set against the switch.

use super::axl::{AxlClient, PatternKind};
use crate::config;
use crate::models::Pattern;
use std::collections::HashSet;
use std::error::Error;

/// Provisioning options from the command line.
#[derive(Debug, Default)]
pub struct ProvisionOptions {
    /// Read from the switch but never write.
    pub read_only: bool,
    /// Provision route patterns pointing at this route list instead of
    /// blocking translation patterns.
    pub route_list: Option<String>,
}

/// Bring the patterns in the mobile partition in line with the compiled set.
///
/// Creates the partition if needed, then adds every compiled pattern that is
/// not yet provisioned and removes every provisioned pattern no longer in
/// the compiled set. Fire-and-forget per entry; a failed call aborts the run.
pub async fn provision_patterns(
    client: &AxlClient,
    patterns: &[Pattern],
    options: &ProvisionOptions,
) -> Result<(), Box<dyn Error>> {
    let partition = assert_partition(client, config::PARTITION_NAME, options.read_only).await?;

    let kind = match &options.route_list {
        Some(route_list) => {
            if client.get_route_list(route_list).await?.is_none() {
                return Err(format!(
                    "Route list '{route_list}' needs to be created before provisioning"
                )
                .into());
            }
            PatternKind::Route
        }
        None => PatternKind::Translation,
    };

    let provisioned = match partition {
        Some(_) => {
            client
                .list_patterns(kind, config::PARTITION_NAME)
                .await?
        }
        None => Vec::new(),
    };
    log::info!("{} patterns exist on the switch", provisioned.len());

    let desired: Vec<String> = patterns
        .iter()
        .map(|p| p.dial_pattern())
        .collect::<Result<_, _>>()?;
    let desired_set: HashSet<&str> = desired.iter().map(|s| s.as_str()).collect();
    let provisioned_set: HashSet<&str> =
        provisioned.iter().map(|p| p.pattern.as_str()).collect();

    let to_add: Vec<&str> = desired
        .iter()
        .map(|p| p.as_str())
        .filter(|p| !provisioned_set.contains(p))
        .collect();
    let to_remove: Vec<_> = provisioned
        .iter()
        .filter(|p| !desired_set.contains(p.pattern.as_str()))
        .collect();
    log::info!(
        "{} new patterns need to be provisioned, {} need to be removed",
        to_add.len(),
        to_remove.len()
    );

    log::info!("Adding patterns...");
    for (i, pattern) in to_add.iter().copied().enumerate() {
        log::debug!("add {}/{}: {pattern}", i + 1, to_add.len());
        if !options.read_only {
            match kind {
                PatternKind::Translation => {
                    client
                        .add_translation_pattern(pattern, config::PARTITION_NAME)
                        .await?
                }
                PatternKind::Route => {
                    let route_list = options.route_list.as_deref().unwrap_or_default();
                    client
                        .add_route_pattern(pattern, config::PARTITION_NAME, route_list)
                        .await?
                }
            }
            rate_limit_pause().await;
        }
    }

    log::info!("Removing patterns...");
    for (i, entry) in to_remove.iter().enumerate() {
        log::debug!("remove {}/{}: {}", i + 1, to_remove.len(), entry.pattern);
        if !options.read_only {
            client.remove_pattern(kind, &entry.uuid).await?;
            rate_limit_pause().await;
        }
    }

    Ok(())
}

/// Assert existence of the partition, creating it unless read-only.
///
/// Returns the partition UUID, or None when it is missing and may not be
/// created.
async fn assert_partition(
    client: &AxlClient,
    name: &str,
    read_only: bool,
) -> Result<Option<String>, Box<dyn Error>> {
    match client.get_route_partition(name).await? {
        Some(uuid) => {
            log::info!("Partition {name} exists");
            Ok(Some(uuid))
        }
        None => {
            log::info!("Partition {name} does not exist");
            if read_only {
                Ok(None)
            } else {
                let uuid = client.add_route_partition(name).await?;
                log::info!("Partition {name} created");
                Ok(Some(uuid))
            }
        }
    }
}

async fn rate_limit_pause() {
    tokio::time::sleep(std::time::Duration::from_millis(config::SLEEP_MSEC)).await;
}
