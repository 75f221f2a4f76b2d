//! Terminal style tokens for the report.

use colored::{ColoredString, Colorize};

/// Named presentation styles used by the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    /// Program title, target lines and closing line (bold magenta)
    Banner,
    /// Author line under the title (yellow)
    Credit,
    /// Record section headers (bold cyan)
    Section,
    /// Answer lines (green)
    Found,
    /// Address chosen for the reverse lookup (blue)
    Address,
    /// "No records" notices and usage text (yellow)
    Notice,
    /// Fatal errors (bold red)
    Failure,
}

impl Style {
    fn apply(self, text: &str) -> ColoredString {
        match self {
            Style::Banner => text.bright_magenta().bold(),
            Style::Credit | Style::Notice => text.bright_yellow(),
            Style::Section => text.bright_cyan().bold(),
            Style::Found => text.bright_green(),
            Style::Address => text.bright_blue(),
            Style::Failure => text.bright_red().bold(),
        }
    }
}

/// Renders text in a [`Style`], or leaves it untouched when disabled.
///
/// An enabled painter still defers to `colored`'s global switch, so
/// `--color never` and `NO_COLOR` are honored.
#[derive(Debug, Clone, Copy)]
pub struct Painter {
    enabled: bool,
}

impl Painter {
    /// Creates a painter; `enabled = false` never emits escape codes.
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// A painter that never emits escape codes.
    pub fn plain() -> Self {
        Self::new(false)
    }

    /// Renders `text` in `style`.
    pub fn paint(&self, text: &str, style: Style) -> String {
        if self.enabled {
            style.apply(text).to_string()
        } else {
            text.to_string()
        }
    }
}

impl Default for Painter {
    fn default() -> Self {
        Self::new(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_painter_leaves_text_alone() {
        let painter = Painter::plain();
        for style in [
            Style::Banner,
            Style::Credit,
            Style::Section,
            Style::Found,
            Style::Address,
            Style::Notice,
            Style::Failure,
        ] {
            assert_eq!(painter.paint("  93.184.216.34", style), "  93.184.216.34");
        }
    }

    #[test]
    fn test_enabled_painter_keeps_text() {
        // Escape codes depend on colored's global state; the text must survive either way
        let painted = Painter::new(true).paint("--- IPv4 Address (A) ---", Style::Section);
        assert!(painted.contains("--- IPv4 Address (A) ---"));
    }
}
