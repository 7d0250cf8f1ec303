//! Request plumbing shared by every endpoint group.
//!
//! [`Client`] wraps [`reqwest`] with the three behaviors the rest of the
//! application relies on:
//!
//! 1. the base address is resolved once, with a documented fallback order;
//! 2. the session's bearer credential is attached to every request for
//!    which one exists;
//! 3. an HTTP 401 clears the session store and fires the injected
//!    session-invalidated hook before the error reaches the caller — the
//!    adapter itself never navigates and has no router dependency.
//!
//! There are no retries, no backoff, and no adapter-level timeout: a
//! request resolves, rejects, or hangs until the transport gives up.

use std::rc::Rc;

use reqwest::{multipart, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use session::SessionService;

use crate::error::ApiError;

/// Compiled-in default for release builds.
pub const PRODUCTION_API_URL: &str = "https://api.campusshare.app/api";
/// Compiled-in default for debug builds (local backend).
pub const DEVELOPMENT_API_URL: &str = "http://localhost:5000/api";

/// Typed session-invalidated event. Installed by the application shell,
/// fired by the adapter when the server rejects the credential.
///
/// `Rc` rather than `Arc`: the client lives on the single-threaded wasm
/// event loop and is cloned into component context, never across threads.
pub type SessionInvalidatedHook = Rc<dyn Fn()>;

/// Resolve the backend base address once at startup.
///
/// Order: explicit compile-time override (`CAMPUSSHARE_API_URL`) → the
/// compiled-in deployment default → the localhost development default.
pub fn resolve_base_url() -> Url {
    resolve_from(option_env!("CAMPUSSHARE_API_URL"), cfg!(debug_assertions))
}

fn resolve_from(explicit: Option<&str>, debug_build: bool) -> Url {
    let fallback = if debug_build {
        DEVELOPMENT_API_URL
    } else {
        PRODUCTION_API_URL
    };
    let raw = explicit.unwrap_or(fallback);
    match Url::parse(raw) {
        Ok(url) => url,
        Err(err) => {
            tracing::warn!(%err, raw, "invalid base address override; using default");
            Url::parse(fallback).expect("compiled-in base address is valid")
        }
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

/// The HTTP client adapter: single choke point for all backend I/O.
#[derive(Clone)]
pub struct Client {
    http: reqwest::Client,
    base: Url,
    session: SessionService,
    on_session_invalidated: Option<SessionInvalidatedHook>,
}

impl Client {
    pub fn new(base: Url, session: SessionService) -> Self {
        Self {
            http: reqwest::Client::new(),
            base,
            session,
            on_session_invalidated: None,
        }
    }

    /// Install the hook fired after a credential rejection has cleared the
    /// session store.
    pub fn with_session_invalidated_hook(mut self, hook: impl Fn() + 'static) -> Self {
        self.on_session_invalidated = Some(Rc::new(hook));
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    pub fn session(&self) -> &SessionService {
        &self.session
    }

    /// Absolute URL for an endpoint path (`path` starts with `/`).
    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base.as_str().trim_end_matches('/'), path)
    }

    /// Plain URL of a stored file, suitable for open-in-new-tab viewing.
    pub fn file_url(&self, file_id: &str) -> String {
        self.endpoint(&format!("/files/{file_id}"))
    }

    /// Attach the bearer credential whenever the session store holds one.
    fn with_credential(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.session.credential() {
            Some(credential) => request.bearer_auth(credential),
            None => request,
        }
    }

    /// Attach the bearer credential (when present), send, and map the
    /// response status into the error taxonomy.
    async fn send(&self, request: reqwest::RequestBuilder) -> Result<Response, ApiError> {
        let response = self.with_credential(request).send().await?;
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED {
            return Err(self.auth_failure(read_message(response).await));
        }
        if !status.is_success() {
            let message = read_message(response).await;
            tracing::debug!(status = status.as_u16(), ?message, "backend request failed");
            return Err(ApiError::Api {
                status: status.as_u16(),
                message,
            });
        }
        Ok(response)
    }

    /// Escalate a credential rejection: clear the session store, fire the
    /// session-invalidated event, hand the failure back to the caller.
    fn auth_failure(&self, message: Option<String>) -> ApiError {
        self.session.invalidate();
        if let Some(hook) = &self.on_session_invalidated {
            hook();
        }
        ApiError::Unauthorized { message }
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.send(self.http.get(self.endpoint(path))).await?;
        Ok(response.json().await?)
    }

    pub(crate) async fn get_json_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let response = self
            .send(self.http.get(self.endpoint(path)).query(query))
            .await?;
        Ok(response.json().await?)
    }

    pub(crate) async fn get_bytes(&self, path: &str) -> Result<Vec<u8>, ApiError> {
        let response = self.send(self.http.get(self.endpoint(path))).await?;
        Ok(response.bytes().await?.to_vec())
    }

    pub(crate) async fn post_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self
            .send(self.http.post(self.endpoint(path)).json(body))
            .await?;
        Ok(response.json().await?)
    }

    /// POST with an empty body (toggle endpoints).
    pub(crate) async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.send(self.http.post(self.endpoint(path))).await?;
        Ok(response.json().await?)
    }

    /// POST a multipart form. No JSON content type is set; the transport
    /// writes the multipart boundary header itself.
    pub(crate) async fn post_multipart(
        &self,
        path: &str,
        form: multipart::Form,
    ) -> Result<(), ApiError> {
        self.send(self.http.post(self.endpoint(path)).multipart(form))
            .await?;
        Ok(())
    }

    pub(crate) async fn put_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self
            .send(self.http.put(self.endpoint(path)).json(body))
            .await?;
        Ok(response.json().await?)
    }

    pub(crate) async fn put_json_ack<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(), ApiError> {
        self.send(self.http.put(self.endpoint(path)).json(body))
            .await?;
        Ok(())
    }

    /// PUT with an empty body, response payload ignored.
    pub(crate) async fn put_empty_ack(&self, path: &str) -> Result<(), ApiError> {
        self.send(self.http.put(self.endpoint(path))).await?;
        Ok(())
    }

    /// PUT with an empty body, response deserialized.
    pub(crate) async fn put_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.send(self.http.put(self.endpoint(path))).await?;
        Ok(response.json().await?)
    }

    pub(crate) async fn delete_ack(&self, path: &str) -> Result<(), ApiError> {
        self.send(self.http.delete(self.endpoint(path))).await?;
        Ok(())
    }
}

async fn read_message(response: Response) -> Option<String> {
    response
        .json::<ErrorBody>()
        .await
        .ok()
        .map(|body| body.message)
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;
    use session::{Identity, MemoryBackend, Role, SessionService};

    fn student() -> Identity {
        serde_json::from_value(serde_json::json!({
            "_id": "u-1",
            "name": "Asha Patel",
            "email": "asha@college.edu",
            "role": Role::Student.as_str(),
        }))
        .unwrap()
    }

    fn client_with_session() -> (Client, SessionService) {
        let session = SessionService::new(MemoryBackend::new());
        session.login("tok".to_string(), student());
        let client = Client::new(
            Url::parse(DEVELOPMENT_API_URL).unwrap(),
            session.clone(),
        );
        (client, session)
    }

    #[test]
    fn test_base_url_fallback_order() {
        // Explicit override wins regardless of build profile.
        assert_eq!(
            resolve_from(Some("https://staging.campusshare.app/api"), true).as_str(),
            "https://staging.campusshare.app/api"
        );
        // Debug builds default to the local backend.
        assert_eq!(resolve_from(None, true).as_str(), DEVELOPMENT_API_URL);
        // Release builds default to the production address.
        assert_eq!(resolve_from(None, false).as_str(), PRODUCTION_API_URL);
        // A malformed override falls back instead of panicking.
        assert_eq!(
            resolve_from(Some("not a url"), true).as_str(),
            DEVELOPMENT_API_URL
        );
    }

    #[test]
    fn test_endpoint_joining_ignores_trailing_slash() {
        let session = SessionService::new(MemoryBackend::new());
        let client = Client::new(
            Url::parse("http://localhost:5000/api/").unwrap(),
            session,
        );
        assert_eq!(
            client.endpoint("/resources"),
            "http://localhost:5000/api/resources"
        );
        assert_eq!(
            client.file_url("f-42"),
            "http://localhost:5000/api/files/f-42"
        );
    }

    #[test]
    fn test_auth_failure_clears_session_and_fires_hook() {
        let (client, session) = client_with_session();
        let fired = Rc::new(Cell::new(false));
        let observed = fired.clone();
        let client = client.with_session_invalidated_hook(move || observed.set(true));

        assert!(session.is_authenticated());
        let err = client.auth_failure(Some("token expired".to_string()));

        assert!(err.is_unauthorized());
        assert!(!session.is_authenticated());
        assert!(session.credential().is_none());
        assert!(fired.get());
    }

    #[test]
    fn test_auth_failure_without_hook_still_clears_session() {
        let (client, session) = client_with_session();
        let err = client.auth_failure(None);
        assert!(err.is_unauthorized());
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_bearer_credential_attached_only_while_session_exists() {
        let (client, session) = client_with_session();

        let request = client
            .with_credential(client.http.get(client.endpoint("/resources")))
            .build()
            .unwrap();
        let header = request.headers().get("authorization").unwrap();
        assert_eq!(header.to_str().unwrap(), "Bearer tok");

        session.logout();
        let request = client
            .with_credential(client.http.get(client.endpoint("/resources")))
            .build()
            .unwrap();
        assert!(request.headers().get("authorization").is_none());
    }

    #[test]
    fn test_multipart_body_does_not_carry_json_content_type() {
        let (client, _session) = client_with_session();

        let form = reqwest::multipart::Form::new().text("title", "DSP notes");
        let request = client
            .http
            .post(client.endpoint("/resources/upload"))
            .multipart(form)
            .build()
            .unwrap();
        let content_type = request
            .headers()
            .get("content-type")
            .unwrap()
            .to_str()
            .unwrap();
        assert!(content_type.starts_with("multipart/form-data"));

        // JSON bodies keep the default JSON content type.
        let request = client
            .http
            .post(client.endpoint("/auth/login"))
            .json(&serde_json::json!({ "email": "a@b.edu", "password": "pw" }))
            .build()
            .unwrap();
        assert_eq!(
            request.headers().get("content-type").unwrap(),
            "application/json"
        );
    }

    #[test]
    fn test_error_messages_prefer_backend_text() {
        let err = ApiError::Api {
            status: 400,
            message: Some("Title is required".to_string()),
        };
        assert_eq!(err.message(), "Title is required");

        let err = ApiError::Api {
            status: 500,
            message: None,
        };
        assert_eq!(err.message(), "Request failed (500). Please try again.");

        let err = ApiError::Unauthorized { message: None };
        assert_eq!(
            err.message(),
            "Your session has expired. Please log in again."
        );
    }
}
