//! Crate-wide constants.

/// Public download page of the Mexican numbering plan authority (IFT).
pub const BASE_URL: &str =
    "https://sns.ift.org.mx:8081/sns-frontend/planes-numeracion/descarga-publica.xhtml";

/// UCM partition holding the provisioned mobile patterns.
pub const PARTITION_NAME: &str = "mobile";

/// Network type classifier marking a record as a mobile range.
pub const MOBILE_NETWORK_TYPE: &str = "MOVIL";

/// Dial prefix prepended to every rendered pattern (escaped for UCM).
pub const DIAL_PREFIX: &str = r"\+52";

/// Total digit length of a national number in the closed numbering plan.
pub const NUMBER_LENGTH: usize = 10;

/// Width of the numbering-block bounds within a series (0000..9999).
pub const BLOCK_DIGITS: usize = 4;

/// Shortest prefix length the summarizer reduces to.
pub const MIN_PREFIX_LENGTH: usize = 3;

/// Pause between provisioning calls, to stay under the AXL rate limit.
pub const SLEEP_MSEC: u64 = 100;
