//! Provisioning against the UCM configuration API.
//!
//! - [`axl`] - minimal AXL SOAP client
//! - [`provision`] - reconciliation of compiled patterns with the switch

mod axl;
mod provision;

// Re-export public types and functions
pub use axl::{AxlClient, PatternKind, ProvisionedPattern};
pub use provision::{provision_patterns, ProvisionOptions};
