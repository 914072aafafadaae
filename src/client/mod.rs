//! Application lifecycle client.
//!
//! [`Client`] is a thin, stateless layer over a [`Transport`]. Every read
//! re-fetches from the orchestrator; nothing is cached between calls.
//!
//! # Existence checks are not atomic
//!
//! Mutating operations check existence first (`create` requires absence;
//! `update`, `delete`, `scale`, `restart` and `is_healthy` require presence)
//! and then issue the mutation as a second, independent request. Another
//! client can change the orchestrator between the two. The pre-check only
//! saves a round-trip in the common case: the mutating request's outcome is
//! authoritative, and a conflict it reports comes back as
//! [`Error::Transport`](crate::error::Error::Transport).

mod health;
mod lifecycle;
pub mod path;
mod versions;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::adapter::http::HttpTransport;
use crate::config::MarathonConfig;
use crate::error::{Error, Result};
use crate::port::Transport;

/// Orchestrator client, generic over the request/response transport.
#[derive(Debug, Clone)]
pub struct Client<T> {
    transport: T,
}

impl<T: Transport> Client<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    async fn fetch<R: DeserializeOwned>(&self, path: &str) -> Result<R> {
        let value = self.transport.get(path).await?;
        decode(value)
    }
}

impl Client<HttpTransport> {
    /// HTTP client for the configured endpoint.
    #[must_use]
    pub fn from_config(config: &MarathonConfig) -> Self {
        Self::new(HttpTransport::from_config(config))
    }
}

fn decode<R: DeserializeOwned>(value: Value) -> Result<R> {
    Ok(serde_json::from_value(value)?)
}

/// Map a 404 from the orchestrator onto [`Error::NotFound`].
fn not_found_as(id: &str) -> impl FnOnce(Error) -> Error + '_ {
    move |err| match err {
        Error::Transport(ref transport) if transport.status() == Some(404) => Error::NotFound {
            id: id.to_string(),
        },
        other => other,
    }
}
