//! Listing, existence checks and mutating operations on applications.

use serde_json::{json, Value};
use tracing::{debug, info, warn};

use super::{decode, not_found_as, path, Client};
use crate::domain::{Application, ApplicationEnvelope, Applications, Deployment};
use crate::error::{Error, Result};
use crate::port::Transport;

impl<T: Transport> Client<T> {
    /// Every application known to the orchestrator, full descriptors.
    pub async fn applications(&self) -> Result<Vec<Application>> {
        let listing: Applications = self.fetch(path::APPS).await?;
        Ok(listing.apps)
    }

    /// Identifiers of every application, in listing order.
    pub async fn list(&self) -> Result<Vec<String>> {
        let apps = self.applications().await?;
        Ok(apps.into_iter().map(|app| app.id).collect())
    }

    /// Whether `id` is currently listed.
    ///
    /// An empty identifier fails with [`Error::InvalidArgument`] before any
    /// request is made. The answer may be stale by the time it is acted on.
    pub async fn exists(&self, id: &str) -> Result<bool> {
        let wanted = path::normalize(id)?;
        debug!(app_id = %id, "Checking if application exists");

        let found = self
            .list()
            .await?
            .iter()
            .any(|listed| path::same_id(listed, wanted));

        debug!(app_id = %id, found, "Existence check complete");
        Ok(found)
    }

    /// Current descriptor for `id`, including tasks and their probe results.
    pub async fn get(&self, id: &str) -> Result<Application> {
        let path = path::app(id)?;
        let envelope: ApplicationEnvelope =
            self.fetch(&path).await.map_err(not_found_as(id))?;
        Ok(envelope.app)
    }

    /// Submit a new application.
    ///
    /// Fails with [`Error::AlreadyExists`] without submitting when the
    /// identifier is already listed. A creator racing this call is reported
    /// by the orchestrator as a transport failure.
    pub async fn create(&self, app: &Application) -> Result<Application> {
        self.require_absent(&app.id).await?;

        let body = serde_json::to_value(app)?;
        let created = match self.transport.post(path::APPS, Some(&body)).await? {
            Value::Null => app.clone(),
            value => decode(value)?,
        };

        info!(app_id = %app.id, "Application created");
        Ok(created)
    }

    /// Replace the configuration of an existing application.
    ///
    /// Only the desired state is sent, so a descriptor obtained from
    /// [`Client::get`] can be edited and passed back unchanged otherwise.
    pub async fn update(&self, app: &Application) -> Result<Deployment> {
        self.require_present(&app.id).await?;

        let body = serde_json::to_value(app.desired_state())?;
        let deployment = self.put_deployment(&app.id, &body).await?;

        info!(app_id = %app.id, deployment = %deployment, "Application updated");
        Ok(deployment)
    }

    /// Destroy an existing application.
    pub async fn delete(&self, id: &str) -> Result<Deployment> {
        self.require_present(id).await?;

        let path = path::app(id)?;
        let deployment: Deployment = decode(self.transport.delete(&path).await?)?;

        info!(app_id = %id, deployment = %deployment, "Application deleted");
        Ok(deployment)
    }

    /// Change the declared instance count. Zero drains the application.
    pub async fn scale(&self, id: &str, instances: u32) -> Result<Deployment> {
        debug!(app_id = %id, instances, "Scaling application");
        self.require_present(id).await?;

        let deployment = self
            .put_deployment(id, &json!({ "instances": instances }))
            .await?;

        info!(app_id = %id, instances, deployment = %deployment, "Scale accepted");
        Ok(deployment)
    }

    /// Restart every task of an existing application.
    ///
    /// `force` overrides a deployment already in flight for the application.
    pub async fn restart(&self, id: &str, force: bool) -> Result<Deployment> {
        debug!(app_id = %id, force, "Restarting application");
        self.require_present(id).await?;

        let path = path::restart(id, force)?;
        let deployment: Deployment = decode(self.transport.post(&path, None).await?)?;

        info!(app_id = %id, force, deployment = %deployment, "Restart accepted");
        Ok(deployment)
    }

    pub(super) async fn put_deployment(&self, id: &str, body: &Value) -> Result<Deployment> {
        let path = path::app(id)?;
        decode(self.transport.put(&path, body).await?)
    }

    pub(super) async fn require_present(&self, id: &str) -> Result<()> {
        if self.exists(id).await? {
            Ok(())
        } else {
            warn!(app_id = %id, "Application does not exist");
            Err(Error::NotFound { id: id.to_string() })
        }
    }

    async fn require_absent(&self, id: &str) -> Result<()> {
        if self.exists(id).await? {
            warn!(app_id = %id, "Application already exists");
            Err(Error::AlreadyExists { id: id.to_string() })
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::error::TransportError;
    use crate::port::TransportResult;

    /// Replays canned responses in order and records each request line.
    #[derive(Default)]
    struct Scripted {
        responses: Mutex<VecDeque<TransportResult>>,
        requests: Mutex<Vec<String>>,
    }

    impl Scripted {
        fn new(responses: Vec<TransportResult>) -> Self {
            Self {
                responses: Mutex::new(responses.into()),
                requests: Mutex::default(),
            }
        }

        fn next(&self, line: String) -> TransportResult {
            self.requests.lock().unwrap().push(line);
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or(Ok(Value::Null))
        }

        fn requests(&self) -> Vec<String> {
            self.requests.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Transport for Scripted {
        async fn get(&self, path: &str) -> TransportResult {
            self.next(format!("GET {path}"))
        }

        async fn post(&self, path: &str, _body: Option<&Value>) -> TransportResult {
            self.next(format!("POST {path}"))
        }

        async fn put(&self, path: &str, _body: &Value) -> TransportResult {
            self.next(format!("PUT {path}"))
        }

        async fn delete(&self, path: &str) -> TransportResult {
            self.next(format!("DELETE {path}"))
        }
    }

    fn listing(ids: &[&str]) -> TransportResult {
        let apps: Vec<Value> = ids.iter().map(|id| json!({ "id": id })).collect();
        Ok(json!({ "apps": apps }))
    }

    #[tokio::test]
    async fn exists_matches_with_or_without_leading_slash() {
        let client = Client::new(Scripted::new(vec![listing(&["/web"]), listing(&["/web"])]));
        assert!(client.exists("web").await.unwrap());
        assert!(client.exists("/web").await.unwrap());
    }

    #[tokio::test]
    async fn get_maps_404_to_not_found() {
        let client = Client::new(Scripted::new(vec![Err(TransportError::Status {
            method: "GET",
            path: "/apps/web".into(),
            status: 404,
            body: r#"{"message":"App '/web' does not exist"}"#.into(),
        })]));
        let err = client.get("web").await.unwrap_err();
        assert!(matches!(err, Error::NotFound { id } if id == "web"));
    }

    #[tokio::test]
    async fn get_passes_other_statuses_through() {
        let client = Client::new(Scripted::new(vec![Err(TransportError::Status {
            method: "GET",
            path: "/apps/web".into(),
            status: 503,
            body: String::new(),
        })]));
        let err = client.get("web").await.unwrap_err();
        assert!(matches!(err, Error::Transport(e) if e.status() == Some(503)));
    }

    #[tokio::test]
    async fn create_echoes_descriptor_on_empty_body() {
        let transport = Scripted::new(vec![listing(&[]), Ok(Value::Null)]);
        let client = Client::new(transport);
        let app = Application::new("/web").with_cmd("sleep 60");
        let created = client.create(&app).await.unwrap();
        assert_eq!(created, app);
        assert_eq!(client.transport().requests(), vec!["GET /apps", "POST /apps"]);
    }

    #[tokio::test]
    async fn update_requires_presence() {
        let client = Client::new(Scripted::new(vec![listing(&[])]));
        let err = client.update(&Application::new("web")).await.unwrap_err();
        assert!(matches!(err, Error::NotFound { .. }));
        assert_eq!(client.transport().requests(), vec!["GET /apps"]);
    }

    #[tokio::test]
    async fn listing_failure_aborts_before_mutation() {
        let client = Client::new(Scripted::new(vec![Err(TransportError::Status {
            method: "GET",
            path: "/apps".into(),
            status: 500,
            body: String::new(),
        })]));
        assert!(matches!(
            client.scale("web", 3).await,
            Err(Error::Transport(_))
        ));
        assert_eq!(client.transport().requests(), vec!["GET /apps"]);
    }
}
