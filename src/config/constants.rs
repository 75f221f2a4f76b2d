//! Configuration constants.
//!
//! Defaults for the resolver invocation and the fixed pieces of the report
//! layout.

/// Default DNS server queried by `dig` (Cloudflare public resolver)
pub const DEFAULT_DNS_SERVER: &str = "1.1.1.1";

/// Default name of the external resolver utility, looked up on `PATH`
pub const DEFAULT_DIG_PROGRAM: &str = "dig";

/// Maximum number of `dig` processes running at the same time.
///
/// Sections are still printed in catalog order; this only bounds how many
/// forward queries are in flight while earlier sections are being printed.
pub const DEFAULT_MAX_CONCURRENCY: usize = 4;

/// Upper bound for `--max-concurrency`; there are only nine forward queries
pub const MAX_CONCURRENCY_LIMIT: usize = 9;

/// Environment variable overriding the DNS server
pub const SERVER_ENV_VAR: &str = "DOMAIN_INSPECTOR_SERVER";

/// Environment variable overriding the resolver utility path
pub const DIG_ENV_VAR: &str = "DOMAIN_INSPECTOR_DIG";

// Report layout
/// Title printed at the top of the report
pub const PROGRAM_TITLE: &str = "DIG ANY";
/// Author line printed under the title
pub const PROGRAM_CREDIT: &str = "Made by thesw0rd";
/// Width of the `=` separator lines
pub const SEPARATOR_WIDTH: usize = 60;
/// Domain shown in the usage example
pub const USAGE_EXAMPLE_DOMAIN: &str = "google.com";
