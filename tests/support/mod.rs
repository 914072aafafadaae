#![allow(dead_code)]

pub mod marathon;

use std::sync::Arc;

use marathon_client::client::Client;

pub use marathon::FakeMarathon;

/// Client over a shared fake so the test keeps a handle for assertions.
pub fn client(fake: &Arc<FakeMarathon>) -> Client<Arc<FakeMarathon>> {
    Client::new(Arc::clone(fake))
}
