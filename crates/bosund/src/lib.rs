//! Bosun daemon library.
//!
//! Exposes the query API router so integration tests can serve it
//! without going through the binary.

pub mod http;
