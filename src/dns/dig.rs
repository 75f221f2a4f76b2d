//! `dig` subprocess client.
//!
//! Each query spawns `dig @<server> ... +short` and turns its stdout into a
//! [`QueryResult`]. A non-zero exit status is an empty result; a spawn
//! failure is fatal.

use std::process::Stdio;

use tokio::process::Command;

use super::{DnsClient, QueryResult, RecordType};
use crate::error_handling::InspectError;

/// Runs the external `dig` utility against one DNS server.
#[derive(Debug, Clone)]
pub struct DigClient {
    program: String,
    server: String,
}

impl DigClient {
    /// Creates a client that executes `program` and queries `server`.
    pub fn new(program: impl Into<String>, server: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            server: server.into(),
        }
    }

    /// Executable that is spawned for every query.
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Arguments for a forward query: `@server name TYPE +short`.
    pub fn forward_args(&self, name: &str, record_type: RecordType) -> Vec<String> {
        vec![
            format!("@{}", self.server),
            name.to_string(),
            record_type.code().to_string(),
            "+short".to_string(),
        ]
    }

    /// Arguments for a reverse query: `@server -x address +short`.
    pub fn reverse_args(&self, address: &str) -> Vec<String> {
        vec![
            format!("@{}", self.server),
            "-x".to_string(),
            address.to_string(),
            "+short".to_string(),
        ]
    }

    async fn run(&self, args: Vec<String>) -> Result<QueryResult, InspectError> {
        log::debug!("Running {} {}", self.program, args.join(" "));

        let output = Command::new(&self.program)
            .args(&args)
            .stdin(Stdio::null())
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|source| InspectError::ResolverUnavailable {
                program: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            // NXDOMAIN, timeouts and bad input all end up here and are
            // reported to the user as "no records"
            log::debug!(
                "{} {} exited with {}: {}",
                self.program,
                args.join(" "),
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            );
            return Ok(QueryResult::empty());
        }

        let result = QueryResult::from_short_output(&String::from_utf8_lossy(&output.stdout));
        log::debug!("{} answer line(s) for {}", result.lines().len(), args.join(" "));
        Ok(result)
    }
}

impl DnsClient for DigClient {
    async fn query(
        &self,
        name: &str,
        record_type: RecordType,
    ) -> Result<QueryResult, InspectError> {
        self.run(self.forward_args(name, record_type)).await
    }

    async fn reverse(&self, address: &str) -> Result<QueryResult, InspectError> {
        self.run(self.reverse_args(address)).await
    }

    fn server(&self) -> &str {
        &self.server
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_args() {
        let client = DigClient::new("dig", "1.1.1.1");
        assert_eq!(
            client.forward_args("example.com", RecordType::Aaaa),
            ["@1.1.1.1", "example.com", "AAAA", "+short"]
        );
    }

    #[test]
    fn test_reverse_args() {
        let client = DigClient::new("dig", "9.9.9.9");
        assert_eq!(
            client.reverse_args("93.184.216.34"),
            ["@9.9.9.9", "-x", "93.184.216.34", "+short"]
        );
    }

    #[tokio::test]
    async fn test_missing_program_is_resolver_unavailable() {
        let client = DigClient::new("/nonexistent/definitely-not-dig", "1.1.1.1");
        let err = client
            .query("example.com", RecordType::A)
            .await
            .expect_err("spawn should fail");
        match err {
            InspectError::ResolverUnavailable { program, source } => {
                assert_eq!(program, "/nonexistent/definitely-not-dig");
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_non_executable_program_is_resolver_unavailable() {
        // Temp files are created 0600; without an execute bit even root cannot run them
        let file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
        let path = file.path().to_string_lossy().into_owned();
        let client = DigClient::new(path.clone(), "1.1.1.1");
        let err = client
            .query("example.com", RecordType::A)
            .await
            .expect_err("spawn should fail");
        assert!(matches!(
            &err,
            InspectError::ResolverUnavailable { source, .. }
                if source.kind() == std::io::ErrorKind::PermissionDenied
        ));
        let msg = err.to_string();
        assert!(msg.contains(&format!("'{path}' could not be executed")), "got: {msg}");
        assert!(!msg.contains("command not found"));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_failing_exit_status_is_empty_result() {
        // `false` ignores its arguments and exits 1, like dig on a bad query
        let client = DigClient::new("false", "1.1.1.1");
        let result = client.reverse("not-an-address").await.unwrap();
        assert!(result.is_empty());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_stdout_becomes_answer_lines() {
        // `echo` prints the argument vector back, one line
        let client = DigClient::new("echo", "1.1.1.1");
        let result = client.query("example.com", RecordType::Mx).await.unwrap();
        assert_eq!(result.lines(), ["@1.1.1.1 example.com MX +short"]);
    }
}
