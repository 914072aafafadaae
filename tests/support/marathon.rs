//! In-memory stand-in for the Marathon `/apps` API.
//!
//! Serves the same JSON shapes as the real orchestrator and records every
//! request so tests can assert on side effects.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU32, Ordering};

use async_trait::async_trait;
use marathon_client::error::TransportError;
use marathon_client::port::{Transport, TransportResult};
use parking_lot::Mutex;
use serde_json::{json, Value};

/// One recorded exchange.
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    pub method: &'static str,
    pub path: String,
    pub body: Option<Value>,
}

#[derive(Default)]
struct State {
    /// Listed applications keyed by normalized id.
    apps: BTreeMap<String, Value>,
    /// Applications that exist but are not yet listed (a concurrent creator).
    hidden: BTreeMap<String, Value>,
    versions: BTreeMap<String, Vec<String>>,
    fail_next: Option<TransportError>,
    fail_method: Option<(&'static str, TransportError)>,
}

#[derive(Default)]
pub struct FakeMarathon {
    state: Mutex<State>,
    requests: Mutex<Vec<Request>>,
    deployments: AtomicU32,
}

fn key(id: &str) -> String {
    id.trim_matches('/').to_string()
}

fn status(method: &'static str, path: &str, status: u16, message: &str) -> TransportError {
    TransportError::Status {
        method,
        path: path.to_string(),
        status,
        body: json!({ "message": message }).to_string(),
    }
}

impl FakeMarathon {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fake listing the given application ids with minimal descriptors.
    pub fn with_apps(ids: &[&str]) -> Self {
        let fake = Self::new();
        for id in ids {
            fake.insert(json!({ "id": format!("/{}", key(id)) }));
        }
        fake
    }

    /// Register a full application descriptor.
    pub fn insert(&self, app: Value) {
        let id = key(app["id"].as_str().unwrap_or_default());
        self.state.lock().apps.insert(id, app);
    }

    /// Register an application that a concurrent client is creating: it is
    /// missing from the listing but the orchestrator rejects a second create.
    pub fn insert_unlisted(&self, id: &str) {
        self.state
            .lock()
            .hidden
            .insert(key(id), json!({ "id": format!("/{}", key(id)) }));
    }

    pub fn set_versions(&self, id: &str, versions: &[&str]) {
        self.state.lock().versions.insert(
            key(id),
            versions.iter().map(|v| (*v).to_string()).collect(),
        );
    }

    /// Fail the next request with `err`, whatever it is.
    pub fn fail_next(&self, err: TransportError) {
        self.state.lock().fail_next = Some(err);
    }

    /// Fail the next request using `method` with `err`.
    pub fn fail_method(&self, method: &'static str, err: TransportError) {
        self.state.lock().fail_method = Some((method, err));
    }

    pub fn requests(&self) -> Vec<Request> {
        self.requests.lock().clone()
    }

    /// Request lines such as `GET /apps`, in order.
    pub fn request_lines(&self) -> Vec<String> {
        self.requests
            .lock()
            .iter()
            .map(|r| format!("{} {}", r.method, r.path))
            .collect()
    }

    /// Requests other than GET.
    pub fn mutations(&self) -> Vec<Request> {
        self.requests
            .lock()
            .iter()
            .filter(|r| r.method != "GET")
            .cloned()
            .collect()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.state.lock().apps.contains_key(&key(id))
    }

    fn record(&self, method: &'static str, path: &str, body: Option<&Value>) -> Option<TransportError> {
        self.requests.lock().push(Request {
            method,
            path: path.to_string(),
            body: body.cloned(),
        });
        let mut state = self.state.lock();
        if let Some(err) = state.fail_next.take() {
            return Some(err);
        }
        if state.fail_method.as_ref().is_some_and(|(m, _)| *m == method) {
            return state.fail_method.take().map(|(_, err)| err);
        }
        None
    }

    fn deployment(&self) -> Value {
        let n = self.deployments.fetch_add(1, Ordering::SeqCst) + 1;
        json!({
            "deploymentId": format!("deployment-{n}"),
            "version": format!("2014-10-0{n}T12:00:00.000Z"),
        })
    }
}

/// Split `/apps/{id}[/suffix][?query]` into id and suffix.
fn route(path: &str) -> (String, String) {
    let path = path.split('?').next().unwrap_or_default();
    let rest = path.trim_start_matches("/apps").trim_start_matches('/');
    if let Some((id, version)) = rest.split_once("/versions/") {
        return (id.to_string(), format!("versions/{version}"));
    }
    for suffix in ["/versions", "/restart"] {
        if let Some(id) = rest.strip_suffix(suffix) {
            return (id.to_string(), suffix.trim_start_matches('/').to_string());
        }
    }
    (rest.to_string(), String::new())
}

#[async_trait]
impl Transport for FakeMarathon {
    async fn get(&self, path: &str) -> TransportResult {
        if let Some(err) = self.record("GET", path, None) {
            return Err(err);
        }
        let state = self.state.lock();
        if path == "/apps" {
            let apps: Vec<Value> = state.apps.values().cloned().collect();
            return Ok(json!({ "apps": apps }));
        }

        let (id, suffix) = route(path);
        let Some(app) = state.apps.get(&id) else {
            return Err(status("GET", path, 404, &format!("App '/{id}' does not exist")));
        };
        match suffix.as_str() {
            "" => Ok(json!({ "app": app })),
            "versions" => {
                let versions = state.versions.get(&id).cloned().unwrap_or_default();
                Ok(json!({ "versions": versions }))
            }
            other => {
                let version = other.trim_start_matches("versions/");
                let known = state
                    .versions
                    .get(&id)
                    .is_some_and(|vs| vs.iter().any(|v| v == version));
                if known {
                    let mut historical = app.clone();
                    historical["version"] = json!(version);
                    Ok(historical)
                } else {
                    Err(status("GET", path, 404, "version does not exist"))
                }
            }
        }
    }

    async fn post(&self, path: &str, body: Option<&Value>) -> TransportResult {
        if let Some(err) = self.record("POST", path, body) {
            return Err(err);
        }
        if path == "/apps" {
            let app = body.cloned().unwrap_or(Value::Null);
            let id = key(app["id"].as_str().unwrap_or_default());
            let mut state = self.state.lock();
            if state.apps.contains_key(&id) || state.hidden.contains_key(&id) {
                return Err(status("POST", path, 409, &format!("An app with id [/{id}] already exists.")));
            }
            let mut created = app;
            created["version"] = json!("2014-10-01T12:00:00.000Z");
            state.apps.insert(id, created.clone());
            return Ok(created);
        }

        let (id, suffix) = route(path);
        if suffix == "restart" && self.state.lock().apps.contains_key(&id) {
            return Ok(self.deployment());
        }
        Err(status("POST", path, 404, "not found"))
    }

    async fn put(&self, path: &str, body: &Value) -> TransportResult {
        if let Some(err) = self.record("PUT", path, Some(body)) {
            return Err(err);
        }
        let (id, _) = route(path);
        {
            let mut state = self.state.lock();
            if let Some(version) = body.get("version").and_then(Value::as_str) {
                let known = state
                    .versions
                    .get(&id)
                    .is_some_and(|vs| vs.iter().any(|v| v == version));
                if !known {
                    return Err(status("PUT", path, 422, "unknown version"));
                }
            }
            let Some(app) = state.apps.get_mut(&id) else {
                return Err(status("PUT", path, 404, "not found"));
            };
            if let Some(instances) = body.get("instances") {
                app["instances"] = instances.clone();
            }
        }
        Ok(self.deployment())
    }

    async fn delete(&self, path: &str) -> TransportResult {
        if let Some(err) = self.record("DELETE", path, None) {
            return Err(err);
        }
        let (id, _) = route(path);
        if self.state.lock().apps.remove(&id).is_none() {
            return Err(status("DELETE", path, 404, "not found"));
        }
        Ok(self.deployment())
    }
}
