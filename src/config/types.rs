//! Configuration types and CLI options.
//!
//! `Opt` is the clap-derived command line; `Config` is the library-facing
//! configuration that can be built without any CLI involvement.

use clap::{Parser, ValueEnum};

use crate::config::constants::{
    DEFAULT_DIG_PROGRAM, DEFAULT_DNS_SERVER, DEFAULT_MAX_CONCURRENCY, DIG_ENV_VAR,
    MAX_CONCURRENCY_LIMIT, SERVER_ENV_VAR,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output on stderr, from most restrictive
/// (Error) to most verbose (Trace).
#[derive(Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: One JSON object per line
#[derive(Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// When to emit ANSI color codes in the report.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Let `colored` decide from `NO_COLOR` / `CLICOLOR` / `CLICOLOR_FORCE`
    Auto,
    /// Always color
    Always,
    /// Never color
    Never,
}

/// Library configuration (no CLI dependencies).
///
/// # Examples
///
/// ```
/// use domain_inspector::Config;
///
/// let config = Config {
///     domain: "example.com".to_string(),
///     max_concurrency: 1,
///     ..Default::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Domain to inspect
    pub domain: String,

    /// DNS server passed to `dig` as `@<server>`
    pub server: String,

    /// Resolver utility to execute
    pub dig_program: String,

    /// Maximum number of forward queries in flight
    pub max_concurrency: usize,

    /// Report coloring
    pub color: ColorChoice,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            domain: String::new(),
            server: DEFAULT_DNS_SERVER.to_string(),
            dig_program: DEFAULT_DIG_PROGRAM.to_string(),
            max_concurrency: DEFAULT_MAX_CONCURRENCY,
            color: ColorChoice::Auto,
            log_level: LogLevel::Warn,
            log_format: LogFormat::Plain,
        }
    }
}

/// A configuration field that failed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigValidationError {
    /// Name of the offending field
    pub field: &'static str,
    /// What is wrong and what is accepted
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid {}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigValidationError {}

impl Config {
    /// Checks field values that clap cannot express as types.
    ///
    /// # Errors
    ///
    /// Returns the first invalid field found.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        // The domain is passed to dig as-is; a blank one just finds no records
        if self.server.trim().is_empty() {
            return Err(ConfigValidationError {
                field: "server",
                message: "must not be empty (e.g. 1.1.1.1)".to_string(),
            });
        }
        if self.dig_program.trim().is_empty() {
            return Err(ConfigValidationError {
                field: "dig_program",
                message: "must name an executable (e.g. dig)".to_string(),
            });
        }
        if self.max_concurrency == 0 || self.max_concurrency > MAX_CONCURRENCY_LIMIT {
            return Err(ConfigValidationError {
                field: "max_concurrency",
                message: format!("must be between 1 and {MAX_CONCURRENCY_LIMIT}"),
            });
        }
        Ok(())
    }
}

/// Command-line options.
///
/// # Examples
///
/// ```bash
/// # Basic usage
/// domain_inspector example.com
///
/// # Query a different resolver, one dig process at a time
/// domain_inspector example.com --server 9.9.9.9 --max-concurrency 1
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "domain_inspector",
    version,
    about = "Queries a domain's DNS records and attempts a reverse lookup of its first IPv4 address."
)]
pub struct Opt {
    /// Domain to analyze
    pub domain: String,

    /// DNS server to query
    #[arg(long, short = 's', env = SERVER_ENV_VAR, default_value = DEFAULT_DNS_SERVER)]
    pub server: String,

    /// Path or name of the dig executable
    #[arg(long, env = DIG_ENV_VAR, default_value = DEFAULT_DIG_PROGRAM)]
    pub dig_path: String,

    /// Maximum number of dig processes running at once (1 = sequential)
    #[arg(long, default_value_t = DEFAULT_MAX_CONCURRENCY)]
    pub max_concurrency: usize,

    /// Report coloring: auto|always|never
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl From<Opt> for Config {
    fn from(opt: Opt) -> Self {
        Self {
            domain: opt.domain,
            server: opt.server,
            dig_program: opt.dig_path,
            max_concurrency: opt.max_concurrency,
            color: opt.color,
            log_level: opt.log_level,
            log_format: opt.log_format,
        }
    }
}
