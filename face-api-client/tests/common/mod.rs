//! Shared test helpers.

#![allow(dead_code)]

use std::io::Write;

use face_api_client::{ClientConfig, FaceClient, create_client};
use tempfile::NamedTempFile;
use wiremock::MockServer;

/// Subscription key used against the mock server.
pub const TEST_KEY: &str = "0123456789abcdef0123456789abcdef";
pub const TEST_REGION: &str = "westus";

/// Skips a live test when an environment variable is missing.
#[macro_export]
macro_rules! skip_if_no_credentials {
    ($($var:expr),+) => {
        $(
            if std::env::var($var).is_err() {
                eprintln!("skipping: environment variable {} is not set", $var);
                return;
            }
        )+
    };
}

/// Asserts that an `Option` is `Some` and unwraps it.
#[macro_export]
macro_rules! require_some {
    ($expr:expr $(,)?) => {{
        let opt = $expr;
        assert!(opt.is_some(), "expected Some(..), got None");
        let Some(val) = opt else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let opt = $expr;
        assert!(opt.is_some(), "{}", format_args!($($msg)+));
        let Some(val) = opt else {
            return;
        };
        val
    }};
}

/// Asserts that a `Result` is `Ok` and unwraps it.
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let res = $expr;
        assert!(
            res.is_ok(),
            "{}: {res:?}",
            format_args!($($msg)+)
        );
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// Client whose endpoint is the mock server.
pub fn mock_client(server: &MockServer) -> FaceClient {
    let config = ClientConfig::new(TEST_KEY, TEST_REGION).with_endpoint(server.uri());
    match create_client(config) {
        Ok(client) => client,
        Err(e) => panic!("mock client: {e}"),
    }
}

/// Temporary local image holding `bytes`.
pub fn image_file(bytes: &[u8]) -> NamedTempFile {
    let mut file = match NamedTempFile::new() {
        Ok(file) => file,
        Err(e) => panic!("temp file: {e}"),
    };
    if let Err(e) = file.write_all(bytes) {
        panic!("temp file write: {e}");
    }
    file
}

/// Unique id for live tests, e.g. `test-1a2b3c4d`.
pub fn unique_id(prefix: &str) -> String {
    let uuid = uuid::Uuid::new_v4();
    format!("{prefix}-{}", &uuid.to_string()[..8])
}
