//! Request/response port towards the orchestrator API.
//!
//! Paths are relative to the configured API base (see [`crate::client::path`])
//! and may carry a query string. Bodies and responses are JSON documents; an
//! empty response body is reported as [`Value::Null`].

use async_trait::async_trait;
use serde_json::Value;

use crate::error::TransportError;

/// Outcome of a single exchange.
pub type TransportResult = std::result::Result<Value, TransportError>;

/// Performs one request against the orchestrator.
///
/// Implementations own connection handling, authentication, timeouts and any
/// transport-level retry. Non-2xx responses must be reported as
/// [`TransportError::Status`] so callers can recognise a missing resource.
///
/// Implementations must be `Send + Sync`; the lifecycle client holds no
/// other state and may be shared across tasks.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, path: &str) -> TransportResult;

    async fn post(&self, path: &str, body: Option<&Value>) -> TransportResult;

    async fn put(&self, path: &str, body: &Value) -> TransportResult;

    async fn delete(&self, path: &str) -> TransportResult;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for std::sync::Arc<T> {
    async fn get(&self, path: &str) -> TransportResult {
        (**self).get(path).await
    }

    async fn post(&self, path: &str, body: Option<&Value>) -> TransportResult {
        (**self).post(path, body).await
    }

    async fn put(&self, path: &str, body: &Value) -> TransportResult {
        (**self).put(path, body).await
    }

    async fn delete(&self, path: &str) -> TransportResult {
        (**self).delete(path).await
    }
}
