//! collector - offline data collector API
//!
//! Clients POST records, the server validates and sanitizes them and keeps
//! the whole collection in one JSON file; a read API lists or fetches them.

pub mod cli;
pub mod http_server;
pub mod observability;
pub mod store;
pub mod submission;
