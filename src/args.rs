//! Command line flags.

use std::error::Error;

/// Usage text printed for unknown or incomplete flags.
pub const USAGE: &str = "\
Usage: mobile-pattern-summary [OPTIONS]

Compile the mobile number ranges of the Mexican numbering plan into a
minimal pattern set, and optionally provision them into UCM.

Options:
  --ucm HOST        IP or FQDN of the UCM publisher. Without it the
                    patterns are only computed (and printed with --patterns)
  --user NAME       AXL user with write access (or AXL_USER env var)
  --pwd PASSWORD    password for the AXL user (or AXL_PASSWORD env var)
  --fromfile NAME   read ranges from a local plan ZIP; '.' takes the
                    latest pnn_Publico_??_??_????.zip
  --readonly        never write to UCM; existing patterns are still read
  --routelist NAME  provision route patterns pointing to this route list
                    instead of blocking translation patterns
  --analysis        compare the local snapshots instead of provisioning
  --patterns        dump resulting patterns to the console
  --debug           enable detailed debug messages";

/// Parsed command line.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Args {
    pub ucm: Option<String>,
    pub user: Option<String>,
    pub password: Option<String>,
    pub from_file: Option<String>,
    pub read_only: bool,
    pub route_list: Option<String>,
    pub analysis: bool,
    pub show_patterns: bool,
    pub debug: bool,
}

impl Args {
    /// Parse flags from an argument iterator (the first entry is the
    /// program name and is skipped).
    pub fn parse<I>(args: I) -> Result<Args, Box<dyn Error>>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter().skip(1);
        let mut parsed = Args::default();

        while let Some(flag) = args.next() {
            match flag.as_str() {
                "--ucm" => parsed.ucm = Some(value(&mut args, &flag)?),
                "--user" => parsed.user = Some(value(&mut args, &flag)?),
                "--pwd" => parsed.password = Some(value(&mut args, &flag)?),
                "--fromfile" => parsed.from_file = Some(value(&mut args, &flag)?),
                "--routelist" => parsed.route_list = Some(value(&mut args, &flag)?),
                "--readonly" => parsed.read_only = true,
                "--analysis" => parsed.analysis = true,
                "--patterns" => parsed.show_patterns = true,
                "--debug" => parsed.debug = true,
                "--help" | "-h" => return Err(USAGE.into()),
                _ => return Err(format!("Unknown flag '{flag}'\n\n{USAGE}").into()),
            }
        }

        // credentials may come from the environment instead
        if parsed.user.is_none() {
            parsed.user = std::env::var("AXL_USER").ok();
        }
        if parsed.password.is_none() {
            parsed.password = std::env::var("AXL_PASSWORD").ok();
        }

        Ok(parsed)
    }
}

fn value<I>(args: &mut I, flag: &str) -> Result<String, Box<dyn Error>>
where
    I: Iterator<Item = String>,
{
    args.next()
        .ok_or_else(|| format!("Flag {flag} needs a value\n\n{USAGE}").into())
}
