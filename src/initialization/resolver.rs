//! DNS client initialization.

use crate::config::Config;
use crate::dns::DigClient;

/// Builds the `dig` client for a run from its configuration.
///
/// Nothing is executed here; a missing `dig` binary is only detected by the
/// first query, which then aborts the run.
pub fn init_resolver(config: &Config) -> DigClient {
    log::debug!(
        "Using resolver utility '{}' against DNS server {}",
        config.dig_program,
        config.server
    );
    DigClient::new(config.dig_program.clone(), config.server.clone())
}
