//! Trait definitions (hexagonal ports). Depend only on the domain and error types.
//!
//! The lifecycle client talks to the orchestrator exclusively through
//! [`Transport`]; [`crate::adapter::http::HttpTransport`] is the production
//! implementation and tests substitute recording fakes.

mod transport;

pub use transport::{Transport, TransportResult};
