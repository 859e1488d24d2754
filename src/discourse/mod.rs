//! Discourse integration layer: HTTP transport, rate limiting and the REST
//! client backing the messaging workflows.

pub mod client;
pub mod rate_limit;
pub mod transport;

pub use client::DiscourseClient;
