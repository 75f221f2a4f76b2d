//! Main application entry point (CLI binary).
//!
//! Thin wrapper around the `domain_inspector` library that handles argument
//! parsing, logger setup and exit codes.

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::Parser;
use std::io::Write;
use std::path::Path;
use std::process;

use domain_inspector::initialization::{init_color, init_logger_with};
use domain_inspector::report::write_usage;
use domain_inspector::{run_inspection, Config, InspectError, Opt, Painter, Style};

/// Name shown in usage text, taken from argv[0] like a shell script would.
fn program_name() -> String {
    std::env::args()
        .next()
        .as_deref()
        .and_then(|arg0| Path::new(arg0).file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "domain_inspector".to_string())
}

fn parse_args() -> Opt {
    match Opt::try_parse() {
        Ok(opt) => opt,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            // Any other argument problem is a usage error: stdout, exit 1
            _ => {
                let mut stdout = std::io::stdout();
                let _ = write_usage(&mut stdout, &program_name(), &Painter::default());
                let _ = writeln!(stdout);
                let _ = write!(stdout, "{}", e.render());
                process::exit(1);
            }
        },
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from(parse_args());

    init_color(config.color);
    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    match run_inspection(config).await {
        Ok(_) => Ok(()),
        Err(e) => {
            let painter = Painter::default();
            let message = match &e {
                InspectError::ResolverUnavailable { .. } => format!("Error: {e}"),
                _ => format!("domain_inspector error: {e:#}"),
            };
            eprintln!("{}", painter.paint(&message, Style::Failure));
            log::debug!("{e:?}");
            process::exit(e.exit_code());
        }
    }
}
