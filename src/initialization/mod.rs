//! Application initialization and resource setup.
//!
//! This module provides functions to initialize shared resources:
//! - Logger
//! - DNS client
//! - Report coloring

mod logger;
mod resolver;

use crate::config::ColorChoice;

// Re-export public API
pub use logger::init_logger_with;
pub use resolver::init_resolver;

/// Applies the `--color` choice to the `colored` crate.
///
/// `Auto` leaves `colored`'s own environment detection (`NO_COLOR`,
/// `CLICOLOR`, `CLICOLOR_FORCE`) in charge.
pub fn init_color(choice: ColorChoice) {
    match choice {
        ColorChoice::Auto => colored::control::unset_override(),
        ColorChoice::Always => colored::control::set_override(true),
        ColorChoice::Never => colored::control::set_override(false),
    }
}
