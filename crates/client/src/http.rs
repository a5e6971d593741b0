//! HTTP client for the Fontory API.
//!
//! One [`ApiClient`] per process; every screen-level operation is a
//! [`RequestSpec`] fed to [`ApiClient::send`]. Each call is exactly one
//! network round trip: no retries, no caching, no shared-state mutation.

use std::time::Duration;

use fontory_common::{ApiConfig, ClientError, ClientResult};
use reqwest::{Client, Method};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};
use url::Url;

use crate::envelope;

/// One part of a multipart form-data body.
#[derive(Clone, Debug)]
pub enum FormPart {
    /// A plain text field.
    Text {
        /// Field name.
        name: String,
        /// Field value.
        value: String,
    },
    /// A file field (profile image, post image, handwriting sample).
    File {
        /// Field name.
        name: String,
        /// Original filename.
        filename: String,
        /// MIME type, e.g. `image/png`.
        mime: String,
        /// File contents.
        bytes: bytes::Bytes,
    },
}

impl FormPart {
    /// Convenience constructor for a text field.
    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Text {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Convenience constructor for a file field.
    pub fn file(
        name: impl Into<String>,
        filename: impl Into<String>,
        mime: impl Into<String>,
        bytes: impl Into<bytes::Bytes>,
    ) -> Self {
        Self::File {
            name: name.into(),
            filename: filename.into(),
            mime: mime.into(),
            bytes: bytes.into(),
        }
    }
}

/// Description of a single API call.
#[derive(Debug)]
pub struct RequestSpec {
    method: Method,
    path: String,
    query: Vec<(String, String)>,
    json: Option<Value>,
    form: Vec<FormPart>,
    credentials: bool,
}

impl RequestSpec {
    /// Start a spec for `method` on a path relative to the base endpoint.
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            json: None,
            form: Vec::new(),
            credentials: false,
        }
    }

    /// GET request.
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    /// POST request.
    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    /// PUT request.
    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    /// DELETE request.
    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Append a query parameter.
    #[must_use]
    pub fn query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((name.into(), value.into()));
        self
    }

    /// Attach a JSON body.
    pub fn json<T: Serialize>(mut self, body: &T) -> ClientResult<Self> {
        self.json = Some(serde_json::to_value(body)?);
        Ok(self)
    }

    /// Add a multipart form part; any part switches the body to
    /// multipart form-data encoding.
    #[must_use]
    pub fn part(mut self, part: FormPart) -> Self {
        self.form.push(part);
        self
    }

    /// Attach the session cookie jar to this call.
    #[must_use]
    pub const fn credentials(mut self) -> Self {
        self.credentials = true;
        self
    }
}

/// HTTP client holding the base endpoint and the session cookie jar.
#[derive(Clone, Debug)]
pub struct ApiClient {
    /// Plain client for anonymous calls.
    http: Client,
    /// Cookie-jar client for calls made with `credentials`.
    http_session: Client,
    base: Url,
}

impl ApiClient {
    /// Build a client from configuration.
    pub fn new(config: &ApiConfig) -> ClientResult<Self> {
        let base = config.base_endpoint()?;

        let builder = || {
            Client::builder()
                .timeout(Duration::from_secs(config.timeout_secs))
                .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
                .user_agent(concat!("fontory-client/", env!("CARGO_PKG_VERSION")))
        };

        let http = builder()
            .build()
            .map_err(|e| ClientError::Config(format!("failed to build HTTP client: {e}")))?;
        let http_session = builder()
            .cookie_store(true)
            .build()
            .map_err(|e| ClientError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            http_session,
            base,
        })
    }

    /// Build a client for an explicit base endpoint with default timeouts.
    pub fn from_base_url(base_url: &str) -> ClientResult<Self> {
        let config = ApiConfig {
            base_url: base_url.to_string(),
            ..ApiConfig::default()
        };
        Self::new(&config)
    }

    /// The configured base endpoint.
    #[must_use]
    pub const fn base(&self) -> &Url {
        &self.base
    }

    /// Resolve a server-relative path (e.g. a practice-sheet `imageUrl`)
    /// against the base endpoint.
    pub fn resolve(&self, path: &str) -> ClientResult<Url> {
        self.base.join(path).map_err(ClientError::from)
    }

    /// Issue the request and decode the body into `T`, unwrapping the
    /// `{status, data, message}` envelope when present.
    pub async fn send<T: serde::de::DeserializeOwned>(&self, spec: RequestSpec) -> ClientResult<T> {
        let body = self.round_trip(spec).await?;
        envelope::decode(&body)
    }

    /// Issue the request, expecting no payload (or ignoring one).
    pub async fn send_unit(&self, spec: RequestSpec) -> ClientResult<()> {
        let body = self.round_trip(spec).await?;
        // Some endpoints answer an empty 2xx, others a success envelope.
        if body.trim().is_empty() {
            return Ok(());
        }
        match envelope::decode::<Value>(&body) {
            Ok(_) => Ok(()),
            Err(err @ ClientError::Service { .. }) => Err(err),
            // Bare non-JSON text on a 2xx is fine when no payload is expected.
            Err(_) => Ok(()),
        }
    }

    /// Issue the request and return the raw 2xx body.
    ///
    /// For the few endpoints that answer plain text instead of JSON
    /// (e.g. the pre-signup profile-image upload).
    pub async fn send_raw(&self, spec: RequestSpec) -> ClientResult<String> {
        self.round_trip(spec).await
    }

    /// The single round trip behind every `send_*` variant.
    async fn round_trip(&self, spec: RequestSpec) -> ClientResult<String> {
        let url = self.base.join(&spec.path)?;

        debug!(method = %spec.method, path = %spec.path, credentials = spec.credentials, "Issuing API request");

        let client = if spec.credentials {
            &self.http_session
        } else {
            &self.http
        };

        let mut request = client.request(spec.method.clone(), url);

        if !spec.query.is_empty() {
            request = request.query(&spec.query);
        }

        if let Some(json) = &spec.json {
            request = request.json(json);
        }

        if !spec.form.is_empty() {
            let mut form = reqwest::multipart::Form::new();
            for part in spec.form {
                form = match part {
                    FormPart::Text { name, value } => form.text(name, value),
                    FormPart::File {
                        name,
                        filename,
                        mime,
                        bytes,
                    } => {
                        let file = reqwest::multipart::Part::stream(bytes)
                            .file_name(filename)
                            .mime_str(&mime)
                            .map_err(|e| {
                                ClientError::Validation(format!("invalid MIME type: {e}"))
                            })?;
                        form.part(name, file)
                    }
                };
            }
            request = request.multipart(form);
        }

        let response = request.send().await.map_err(ClientError::Network)?;
        let status = response.status();
        let body = response.text().await.map_err(ClientError::Network)?;

        if !status.is_success() {
            warn!(
                method = %spec.method,
                path = %spec.path,
                status = %status,
                "API request failed"
            );
            return Err(ClientError::Http {
                status: status.as_u16(),
                body,
            });
        }

        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> ApiClient {
        ApiClient::from_base_url("http://ceprj.gachon.ac.kr:60023").unwrap()
    }

    #[test]
    fn test_resolve_relative_path() {
        let url = client().resolve("/backgrounds/1.png").unwrap();
        assert_eq!(
            url.as_str(),
            "http://ceprj.gachon.ac.kr:60023/backgrounds/1.png"
        );
    }

    #[test]
    fn test_invalid_base_url_rejected() {
        assert!(ApiClient::from_base_url("not a url").is_err());
    }

    #[test]
    fn test_spec_builder() {
        let spec = RequestSpec::get("/api/posts")
            .query("type", "TRANSCRIPTION")
            .credentials();
        assert_eq!(spec.method, Method::GET);
        assert_eq!(spec.query, vec![("type".to_string(), "TRANSCRIPTION".to_string())]);
        assert!(spec.credentials);
        assert!(spec.form.is_empty());
    }

    #[test]
    fn test_spec_json_body() {
        let spec = RequestSpec::post("/users/login")
            .json(&serde_json::json!({"userId": "hana", "password": "pw"}))
            .unwrap();
        assert!(spec.json.is_some());
    }
}
