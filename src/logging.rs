//! Logging setup, powered by tracing-subscriber.
//!
//! Library events go to stderr so they never mix with command output.
//! The filter comes from `POKEDECK_LOG` (same syntax as `RUST_LOG`).

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

/// Environment variable holding the filter directives.
pub const LOG_ENV: &str = "POKEDECK_LOG";

const DEFAULT_LEVEL: &str = "warn";

/// Noisy dependencies kept at `warn` unless named explicitly.
const QUIET_TARGETS: &[&str] = &["hyper", "hyper_util", "reqwest", "rustls", "h2"];

/// Directive string for `input`, or the default level when absent.
fn filter_directives(input: Option<&str>) -> String {
    let base = match input.map(str::trim) {
        Some(d) if !d.is_empty() => d,
        _ => DEFAULT_LEVEL,
    };

    let mut parts = vec![base.to_string()];
    for target in QUIET_TARGETS {
        if !base.contains(target) {
            parts.push(format!("{}=warn", target));
        }
    }
    parts.join(",")
}

/// Build the `EnvFilter` for `input` directives.
pub fn build_env_filter(input: Option<&str>) -> Result<EnvFilter> {
    let directives = filter_directives(input);
    EnvFilter::try_new(&directives)
        .map_err(|e| anyhow!("Invalid {} filter '{}': {}", LOG_ENV, directives, e))
}

/// Install the global subscriber.
#[cfg(not(tarpaulin_include))]
pub fn init() -> Result<()> {
    let directives = std::env::var(LOG_ENV).ok();
    let filter = build_env_filter(directives.as_deref())?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
    Ok(())
}
