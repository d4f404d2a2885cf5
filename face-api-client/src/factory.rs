//! Client factory.

use reqwest::Client;

use crate::config::ClientConfig;
use crate::error::{FaceError, Result};
use crate::http_client::FaceClient;
use crate::utils::log_sanitizer::mask_secret;

/// Creates a [`FaceClient`] from an explicit configuration.
///
/// The returned client is cheap to clone; every resource handle created from
/// it shares the same connection pool.
///
/// # Errors
///
/// [`FaceError::Configuration`] when the key, region or endpoint is blank, or
/// when the HTTP client cannot be built.
///
/// # Examples
///
/// ```rust,no_run
/// use face_api_client::{ClientConfig, create_client};
///
/// let client = create_client(ClientConfig::new("your-key", "westeurope")).unwrap();
/// let person_groups = client.person_groups();
/// ```
pub fn create_client(config: ClientConfig) -> Result<FaceClient> {
    config.validate()?;

    let http = Client::builder()
        .connect_timeout(config.connect_timeout)
        .timeout(config.request_timeout)
        .build()
        .map_err(|e| FaceError::Configuration {
            detail: format!("failed to create HTTP client: {e}"),
        })?;

    log::debug!(
        "[face] Client ready for {} (key {})",
        config.base_url(),
        mask_secret(&config.subscription_key)
    );
    Ok(FaceClient::new(http, config))
}

/// Creates a client from `FACE_API_KEY`, `FACE_API_REGION` and the optional
/// `FACE_API_ENDPOINT` environment variables.
pub fn create_client_from_env() -> Result<FaceClient> {
    create_client(ClientConfig::from_env()?)
}
