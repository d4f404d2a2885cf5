use serde::Serialize;
use thiserror::Error;

/// Unified error type for every client operation.
///
/// Caller mistakes are reported before any request goes out:
/// - [`Configuration`](Self::Configuration): the client was built without usable credentials
/// - [`UninitializedResource`](Self::UninitializedResource): an operation needs an identity
///   the resource handle does not have yet
/// - [`InvalidInput`](Self::InvalidInput): an image reference or target face cannot be used
///
/// Everything the remote service rejects becomes [`RemoteService`](Self::RemoteService).
/// Nothing is retried: a failed round trip is final from this layer's point of view.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "code")]
pub enum FaceError {
    /// Credentials are missing or the HTTP client could not be built.
    #[error("Configuration error: {detail}")]
    Configuration {
        /// What is wrong with the configuration.
        detail: String,
    },

    /// The operation needs an identifying attribute that is absent.
    #[error("{resource} has no '{field}': fetch or create it first")]
    UninitializedResource {
        /// Resource type name (e.g. `"FaceList"`).
        resource: String,
        /// Name of the missing identifying attribute.
        field: String,
    },

    /// A caller supplied value cannot be sent.
    #[error("Invalid input '{param}': {detail}")]
    InvalidInput {
        /// Name of the offending parameter.
        param: String,
        /// Description of what's wrong.
        detail: String,
    },

    /// The service answered with a non-2xx status.
    #[error("{code}: {message}")]
    RemoteService {
        /// HTTP status code of the response.
        status: u16,
        /// `error.code` from the response body, or the status code when absent.
        #[serde(rename = "errorCode")]
        code: String,
        /// `error.message` from the response body, empty when absent.
        message: String,
    },

    /// A network-level error occurred (DNS resolution failure, connection refused, etc.).
    #[error("Network error: {detail}")]
    Network {
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out.
    #[error("Request timeout: {detail}")]
    Timeout {
        /// Error details.
        detail: String,
    },

    /// A successful response could not be decoded.
    #[error("Parse error: {detail}")]
    Parse {
        /// Details about the parse failure.
        detail: String,
    },

    /// A request body could not be serialized.
    #[error("Serialization error: {detail}")]
    Serialization {
        /// Details about the serialization failure.
        detail: String,
    },
}

impl FaceError {
    /// Whether the error comes from how the client was used rather than from
    /// the network or the service.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::Configuration { .. }
                | Self::UninitializedResource { .. }
                | Self::InvalidInput { .. }
        )
    }

    /// Machine-readable error code reported by the service, if this is a remote error.
    pub fn remote_code(&self) -> Option<&str> {
        match self {
            Self::RemoteService { code, .. } => Some(code),
            _ => None,
        }
    }

    pub(crate) fn uninitialized(resource: &str, field: &str) -> Self {
        Self::UninitializedResource {
            resource: resource.to_string(),
            field: field.to_string(),
        }
    }

    pub(crate) fn invalid_input(param: &str, detail: impl Into<String>) -> Self {
        Self::InvalidInput {
            param: param.to_string(),
            detail: detail.into(),
        }
    }

    pub(crate) fn parse(detail: impl ToString) -> Self {
        Self::Parse {
            detail: detail.to_string(),
        }
    }
}

/// Convenience type alias for `Result<T, FaceError>`.
pub type Result<T> = std::result::Result<T, FaceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_uninitialized() {
        let e = FaceError::uninitialized("FaceList", "faceListId");
        assert_eq!(
            e.to_string(),
            "FaceList has no 'faceListId': fetch or create it first"
        );
    }

    #[test]
    fn display_remote_service() {
        let e = FaceError::RemoteService {
            status: 404,
            code: "PersonGroupNotFound".to_string(),
            message: "Person group is not found.".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "PersonGroupNotFound: Person group is not found."
        );
        assert_eq!(e.remote_code(), Some("PersonGroupNotFound"));
    }

    #[test]
    fn display_invalid_input() {
        let e = FaceError::invalid_input("image", "not a URL or a local file");
        assert_eq!(
            e.to_string(),
            "Invalid input 'image': not a URL or a local file"
        );
    }

    #[test]
    fn caller_mistakes_are_expected() {
        assert!(FaceError::Configuration { detail: "x".into() }.is_expected());
        assert!(FaceError::uninitialized("Person", "personId").is_expected());
        assert!(FaceError::invalid_input("targetFace", "x").is_expected());
        assert!(!FaceError::Network { detail: "x".into() }.is_expected());
        assert!(
            !FaceError::RemoteService {
                status: 500,
                code: "500".into(),
                message: String::new(),
            }
            .is_expected()
        );
    }

    #[test]
    fn serialize_tags_variant() {
        let e = FaceError::RemoteService {
            status: 429,
            code: "RateLimitExceeded".to_string(),
            message: "slow down".to_string(),
        };
        let json = serde_json::to_value(&e).unwrap();
        assert_eq!(json["code"], "RemoteService");
        assert_eq!(json["errorCode"], "RateLimitExceeded");
        assert_eq!(json["status"], 429);
    }
}
