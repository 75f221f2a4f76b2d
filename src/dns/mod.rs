//! DNS querying through an external resolver utility.
//!
//! This module provides:
//! - The fixed record type catalog (A, AAAA, MX, NS, TXT, CNAME, SOA, CAA, SRV)
//! - `QueryResult`, the short-form answer lines of one query
//! - The `DnsClient` trait and its `dig`-backed implementation

mod catalog;
mod client;
mod dig;
mod result;

// Re-export public API
pub use catalog::{RecordType, RecordTypeCatalog};
pub use client::DnsClient;
pub use dig::DigClient;
pub use result::QueryResult;
