//! Client configuration.

use std::time::Duration;

use crate::error::{FaceError, Result};

/// Endpoint template used when none is configured. `{region}` is replaced by
/// the configured region every time a URL is built.
pub const DEFAULT_ENDPOINT: &str = "https://{region}.api.cognitive.microsoft.com/face/v1.0";

/// Placeholder substituted with the region in endpoint templates.
pub const REGION_PLACEHOLDER: &str = "{region}";

/// Default connect timeout (seconds)
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// Default request timeout (seconds)
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Environment variable holding the subscription key.
pub const ENV_KEY: &str = "FACE_API_KEY";
/// Environment variable holding the region, e.g. `westeurope`.
pub const ENV_REGION: &str = "FACE_API_REGION";
/// Optional environment variable overriding the endpoint template.
pub const ENV_ENDPOINT: &str = "FACE_API_ENDPOINT";

/// Everything needed to build a [`FaceClient`](crate::FaceClient).
#[derive(Clone)]
pub struct ClientConfig {
    pub subscription_key: String,
    pub region: String,
    pub endpoint: String,
    pub user_agent: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl ClientConfig {
    pub fn new(subscription_key: impl Into<String>, region: impl Into<String>) -> Self {
        Self {
            subscription_key: subscription_key.into(),
            region: region.into(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            user_agent: concat!("face-api-client/", env!("CARGO_PKG_VERSION")).to_string(),
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }

    /// Reads `FACE_API_KEY`, `FACE_API_REGION` and the optional
    /// `FACE_API_ENDPOINT` from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &str| {
            lookup(name)
                .filter(|v| !v.trim().is_empty())
                .ok_or_else(|| FaceError::Configuration {
                    detail: format!("environment variable {name} is not set"),
                })
        };

        let mut config = Self::new(required(ENV_KEY)?, required(ENV_REGION)?);
        if let Some(endpoint) = lookup(ENV_ENDPOINT).filter(|v| !v.trim().is_empty()) {
            config.endpoint = endpoint;
        }
        Ok(config)
    }

    /// Overrides the endpoint template. It may contain `{region}`.
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    #[must_use]
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    #[must_use]
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Rejects a blank key, region or endpoint.
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("subscription key", &self.subscription_key),
            ("region", &self.region),
            ("endpoint", &self.endpoint),
        ] {
            if value.trim().is_empty() {
                return Err(FaceError::Configuration {
                    detail: format!("{field} must not be empty"),
                });
            }
        }
        Ok(())
    }

    /// Endpoint with the region substituted, without a trailing slash.
    pub fn base_url(&self) -> String {
        self.endpoint
            .replace(REGION_PLACEHOLDER, &self.region)
            .trim_end_matches('/')
            .to_string()
    }
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field(
                "subscription_key",
                &crate::utils::log_sanitizer::mask_secret(&self.subscription_key),
            )
            .field("region", &self.region)
            .field("endpoint", &self.endpoint)
            .field("user_agent", &self.user_agent)
            .field("connect_timeout", &self.connect_timeout)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}
