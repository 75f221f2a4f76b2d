//! domain_inspector library: DNS record report for a single domain
//!
//! Queries nine record types (A, AAAA, MX, NS, TXT, CNAME, SOA, CAA, SRV)
//! through the external `dig` utility, prints a colored report, and chains
//! the first IPv4 address into a reverse (PTR) lookup.
//!
//! # Example
//!
//! ```no_run
//! use domain_inspector::{Config, run_inspection};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     domain: "example.com".to_string(),
//!     server: "9.9.9.9".to_string(),
//!     ..Default::default()
//! };
//!
//! let report = run_inspection(config).await?;
//! println!("{} record types answered", report.found_count());
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! `dig` (from `dnsutils` / `bind-tools`) must be installed, and calls must
//! run inside a Tokio runtime.

#![warn(missing_docs)]

pub mod config;
pub mod dns;
mod error_handling;
pub mod initialization;
pub mod report;

// Re-export public API
pub use config::{ColorChoice, Config, ConfigValidationError, LogFormat, LogLevel, Opt};
pub use dns::{DigClient, DnsClient, QueryResult, RecordType, RecordTypeCatalog};
pub use error_handling::{InitializationError, InspectError};
pub use report::{inspect_domain, InspectionReport, Painter, ReverseLookup, Style};
pub use run::run_inspection;

// Internal run module (wires configuration, client and stdout together)
mod run {
    use crate::config::Config;
    use crate::dns::{DnsClient, RecordTypeCatalog};
    use crate::error_handling::InspectError;
    use crate::initialization::init_resolver;
    use crate::report::{inspect_domain, write_banner, InspectionReport, Painter};

    /// Inspects `config.domain` with `dig` and prints the report to stdout.
    ///
    /// The configuration is validated before anything is printed.
    ///
    /// # Errors
    ///
    /// - `InspectError::InvalidConfig` if validation fails
    /// - `InspectError::ResolverUnavailable` if `dig` cannot be executed
    /// - `InspectError::Output` if stdout cannot be written
    pub async fn run_inspection(config: Config) -> Result<InspectionReport, InspectError> {
        config.validate()?;

        let client = init_resolver(&config);
        let catalog = RecordTypeCatalog::standard();
        let painter = Painter::default();
        let mut out = std::io::stdout();

        log::info!(
            "Inspecting {} via {} ({} record types, up to {} concurrent queries)",
            config.domain,
            client.server(),
            catalog.len(),
            config.max_concurrency
        );

        write_banner(&mut out, &config.domain, client.server(), &painter)?;
        let report = inspect_domain(
            &client,
            &config.domain,
            &catalog,
            config.max_concurrency,
            &mut out,
            &painter,
        )
        .await?;

        log::info!(
            "Inspection of {} finished: {}/{} record types answered",
            report.domain,
            report.found_count(),
            report.records.len()
        );
        Ok(report)
    }
}
