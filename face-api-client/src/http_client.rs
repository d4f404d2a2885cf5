//! HTTP transport for the Face API
//!
//! [`FaceClient`] owns the connection pool and the immutable connection
//! settings, and performs exactly one round trip per call.
//!
//! # Request flow
//! - **URL** - the region is substituted into the endpoint template, then the
//!   path (with a leading `/` added when missing) is appended
//! - **Headers** - defaults, then the subscription key, then per-call overrides
//! - **Response** - any 2xx status is a success and its JSON body is returned
//!   (`Null` when empty); anything else becomes [`FaceError::RemoteService`]

use std::path::Path;
use std::sync::Arc;

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Method, RequestBuilder};
use serde_json::{Map, Value};

use crate::config::ClientConfig;
use crate::error::{FaceError, Result};
use crate::query::{self, QueryParams};
use crate::utils::log_sanitizer::truncate_for_log;

/// Header carrying the subscription key.
pub const SUBSCRIPTION_KEY_HEADER: &str = "Ocp-Apim-Subscription-Key";

/// Shared, cheaply cloneable handle to the Face API.
///
/// Every resource handle built from a client keeps a clone of it, so they all
/// share one connection pool and one configuration.
#[derive(Clone)]
pub struct FaceClient {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    http: reqwest::Client,
    config: ClientConfig,
}

impl FaceClient {
    pub(crate) fn new(http: reqwest::Client, config: ClientConfig) -> Self {
        Self {
            inner: Arc::new(ClientInner { http, config }),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.inner.config
    }

    pub fn region(&self) -> &str {
        &self.inner.config.region
    }

    /// Absolute URL for a path relative to the service root.
    pub fn url(&self, path: &str) -> String {
        let base = self.inner.config.base_url();
        if path.is_empty() {
            base
        } else if path.starts_with('/') {
            format!("{base}{path}")
        } else {
            format!("{base}/{path}")
        }
    }

    /// Default headers, then the subscription key, then `overrides`.
    /// A later entry replaces an earlier one with the same name.
    pub fn headers(&self, overrides: &[(&str, &str)]) -> Result<HeaderMap> {
        let config = &self.inner.config;
        let defaults = [
            ("Accept", "application/json"),
            ("Accept-Charset", "UTF-8"),
            ("Content-Type", "application/json"),
            ("User-Agent", config.user_agent.as_str()),
            (SUBSCRIPTION_KEY_HEADER, config.subscription_key.as_str()),
        ];

        let mut headers = HeaderMap::new();
        for (name, value) in defaults.iter().chain(overrides) {
            let name = HeaderName::from_bytes(name.as_bytes()).map_err(|e| {
                FaceError::invalid_input("header", format!("invalid header name '{name}': {e}"))
            })?;
            let value = HeaderValue::from_str(value).map_err(|e| {
                FaceError::invalid_input("header", format!("invalid value for '{name}': {e}"))
            })?;
            headers.insert(name, value);
        }
        Ok(headers)
    }

    pub async fn get(&self, path: &str, query: &[(String, String)]) -> Result<Value> {
        let url = self.url(path);
        let request = self
            .inner
            .http
            .get(&url)
            .headers(self.headers(&[])?)
            .query(query);
        self.execute(request, &Method::GET, &url).await
    }

    pub async fn delete(&self, path: &str) -> Result<Value> {
        self.send_json(Method::DELETE, path, None).await
    }

    pub async fn post(&self, path: &str, body: Option<&Value>) -> Result<Value> {
        self.send_json(Method::POST, path, body).await
    }

    pub async fn put(&self, path: &str, body: Option<&Value>) -> Result<Value> {
        self.send_json(Method::PUT, path, body).await
    }

    pub async fn patch(&self, path: &str, body: Option<&Value>) -> Result<Value> {
        self.send_json(Method::PATCH, path, body).await
    }

    /// POSTs raw bytes as `application/octet-stream`.
    pub async fn stream(&self, path: &str, bytes: Vec<u8>) -> Result<Value> {
        let url = self.url(path);
        let request = self
            .inner
            .http
            .post(&url)
            .headers(self.headers(&[("Content-Type", "application/octet-stream")])?)
            .body(bytes);
        self.execute(request, &Method::POST, &url).await
    }

    /// POSTs a `multipart/form-data` body.
    ///
    /// Each `(field, path)` in `files` becomes a file part read from disk.
    /// `fields` become text parts after query normalization.
    pub async fn multipart(
        &self,
        path: &str,
        files: &[(&str, &Path)],
        fields: &Map<String, Value>,
    ) -> Result<Value> {
        let mut form = reqwest::multipart::Form::new();
        for (name, value) in query::normalize(fields) {
            form = form.text(name, value);
        }
        for (field, file) in files {
            let bytes = tokio::fs::read(file).await.map_err(|e| {
                FaceError::invalid_input(field, format!("cannot read {}: {e}", file.display()))
            })?;
            let mut part = reqwest::multipart::Part::bytes(bytes);
            if let Some(file_name) = file.file_name() {
                part = part.file_name(file_name.to_string_lossy().into_owned());
            }
            form = form.part((*field).to_string(), part);
        }

        // reqwest sets the multipart content type with its boundary
        let mut headers = self.headers(&[])?;
        headers.remove(CONTENT_TYPE);

        let url = self.url(path);
        let request = self.inner.http.post(&url).headers(headers).multipart(form);
        self.execute(request, &Method::POST, &url).await
    }

    /// GET with parameters taken from a serializable struct.
    pub(crate) async fn get_with<T: serde::Serialize + ?Sized>(
        &self,
        path: &str,
        params: &T,
    ) -> Result<Value> {
        let query: QueryParams = query::normalize_struct(params)?;
        self.get(path, &query).await
    }

    async fn send_json(&self, method: Method, path: &str, body: Option<&Value>) -> Result<Value> {
        let url = self.url(path);
        let mut request = self
            .inner
            .http
            .request(method.clone(), &url)
            .headers(self.headers(&[])?);
        if let Some(body) = body {
            let bytes = serde_json::to_vec(body).map_err(|e| FaceError::Serialization {
                detail: e.to_string(),
            })?;
            log::debug!(
                "[face] Request Body: {}",
                truncate_for_log(&String::from_utf8_lossy(&bytes))
            );
            request = request.body(bytes);
        }
        self.execute(request, &method, &url).await
    }

    async fn execute(&self, request: RequestBuilder, method: &Method, url: &str) -> Result<Value> {
        log::debug!("[face] {method} {url}");

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                FaceError::Timeout {
                    detail: e.to_string(),
                }
            } else {
                FaceError::Network {
                    detail: e.to_string(),
                }
            }
        })?;

        let status = response.status().as_u16();
        log::debug!("[face] Response Status: {status}");

        let text = response.text().await.map_err(|e| FaceError::Network {
            detail: format!("Failed to read response body: {e}"),
        })?;
        log::debug!("[face] Response Body: {}", truncate_for_log(&text));

        if status / 100 != 2 {
            return Err(remote_error(status, &text));
        }
        decode_body(&text)
    }
}

impl std::fmt::Debug for FaceClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FaceClient")
            .field("config", &self.inner.config)
            .finish_non_exhaustive()
    }
}

/// Builds the error for a non-2xx response from `{"error": {"code", "message"}}`.
///
/// The status code stands in for a missing `code`; a missing `message` is empty.
fn remote_error(status: u16, body: &str) -> FaceError {
    let error = serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v.get("error").cloned());
    let field = |name: &str| {
        error.as_ref().and_then(|e| e.get(name)).and_then(|v| match v {
            Value::String(s) => Some(s.clone()),
            Value::Null => None,
            other => Some(other.to_string()),
        })
    };

    FaceError::RemoteService {
        status,
        code: field("code").unwrap_or_else(|| status.to_string()),
        message: field("message").unwrap_or_default(),
    }
}

fn decode_body(text: &str) -> Result<Value> {
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(text).map_err(|e| FaceError::Parse {
        detail: format!("invalid JSON response: {e}"),
    })
}
