//! Short-form query answers.

/// Answer lines for one query, in the order the resolver printed them.
///
/// Empty means "no answer", whatever the cause: NXDOMAIN, a timeout, a
/// failing `dig` exit status and a successful empty answer all look the same.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryResult {
    lines: Vec<String>,
}

impl QueryResult {
    /// A result with no answer lines.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a result from `+short` output.
    ///
    /// Surrounding whitespace is trimmed before splitting, so a trailing
    /// newline does not produce an empty last line.
    pub fn from_short_output(output: &str) -> Self {
        let trimmed = output.trim();
        if trimmed.is_empty() {
            return Self::empty();
        }
        Self {
            lines: trimmed.lines().map(str::to_string).collect(),
        }
    }

    /// Answer lines, verbatim.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// First answer line, used as the reverse lookup target for A records.
    pub fn first(&self) -> Option<&str> {
        self.lines.first().map(String::as_str)
    }

    /// Whether the query produced no answer.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for QueryResult {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            lines: iter.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_output_is_empty() {
        assert!(QueryResult::from_short_output("").is_empty());
        assert!(QueryResult::from_short_output("  \n\n").is_empty());
        assert_eq!(QueryResult::from_short_output("\n").first(), None);
    }

    #[test]
    fn test_multiple_lines_keep_order() {
        let result = QueryResult::from_short_output("10 mx1.example.com.\n20 mx2.example.com.\n");
        assert_eq!(
            result.lines(),
            ["10 mx1.example.com.", "20 mx2.example.com."]
        );
        assert_eq!(result.first(), Some("10 mx1.example.com."));
    }

    #[test]
    fn test_inner_lines_are_verbatim() {
        // only the outer whitespace is trimmed
        let result = QueryResult::from_short_output("  \"v=spf1 -all\"\n  \"google-site-verification=x\"  \n");
        assert_eq!(
            result.lines(),
            ["\"v=spf1 -all\"", "  \"google-site-verification=x\""]
        );
    }

    #[test]
    fn test_windows_line_endings() {
        let result = QueryResult::from_short_output("93.184.216.34\r\n93.184.216.35\r\n");
        assert_eq!(result.lines(), ["93.184.216.34", "93.184.216.35"]);
    }

    #[test]
    fn test_collect_from_strings() {
        let result: QueryResult = ["a.example.", "b.example."].into_iter().collect();
        assert_eq!(result.first(), Some("a.example."));
        assert_eq!(result.lines().len(), 2);
    }
}
