//! Resolver client abstraction.
//!
//! The report driver only talks to a `DnsClient`; the production client runs
//! `dig`, tests substitute an in-memory resolver.

use std::future::Future;

use super::{QueryResult, RecordType};
use crate::error_handling::InspectError;

/// Something that can answer forward and reverse DNS queries.
///
/// Implementations fold every per-query failure into an empty
/// [`QueryResult`]. The only error they may return is one that makes every
/// further query pointless, such as [`InspectError::ResolverUnavailable`].
pub trait DnsClient {
    /// Forward query for `name` and `record_type`.
    fn query(
        &self,
        name: &str,
        record_type: RecordType,
    ) -> impl Future<Output = Result<QueryResult, InspectError>> + Send;

    /// Reverse (PTR) query for `address`.
    fn reverse(
        &self,
        address: &str,
    ) -> impl Future<Output = Result<QueryResult, InspectError>> + Send;

    /// DNS server the client sends its queries to, for display.
    fn server(&self) -> &str;
}
