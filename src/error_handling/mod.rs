//! Error handling.
//!
//! Only two conditions stop a run: bad input (usage or configuration) and a
//! resolver utility that cannot be executed. Everything else a query can run
//! into is folded into an empty result by the DNS client.

mod types;

// Re-export public API
pub use types::{InitializationError, InspectError};
