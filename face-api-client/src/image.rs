//! Image references and target face rectangles.

use std::path::PathBuf;

use serde_json::{Value, json};

use crate::error::{FaceError, Result};
use crate::http_client::FaceClient;
use crate::models::FaceRectangle;

/// Where an image comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    /// Fetched by the service itself.
    Url(String),
    /// Read locally and uploaded as an octet stream.
    File(PathBuf),
}

impl ImageSource {
    /// Classifies a caller string.
    ///
    /// A string that parses as a URL with a host is remote; otherwise a string
    /// naming an existing regular file is local. Anything else is rejected.
    pub fn classify(input: &str) -> Result<Self> {
        if is_remote_url(input) {
            return Ok(Self::Url(input.to_string()));
        }
        let path = PathBuf::from(input);
        if path.is_file() {
            return Ok(Self::File(path));
        }
        Err(FaceError::invalid_input(
            "image",
            format!("'{input}' is neither a URL nor a readable local file"),
        ))
    }

    /// POSTs the image to `path`: a JSON `{"url": ...}` body for remote
    /// images, the raw file bytes for local ones.
    pub(crate) async fn upload(&self, client: &FaceClient, path: &str) -> Result<Value> {
        match self {
            Self::Url(url) => client.post(path, Some(&json!({ "url": url }))).await,
            Self::File(file) => {
                let bytes = tokio::fs::read(file).await.map_err(|e| {
                    FaceError::invalid_input(
                        "image",
                        format!("cannot read {}: {e}", file.display()),
                    )
                })?;
                client.stream(path, bytes).await
            }
        }
    }
}

fn is_remote_url(input: &str) -> bool {
    url::Url::parse(input).is_ok_and(|u| u.host_str().is_some_and(|h| !h.is_empty()))
}

/// Face to use when an image holds several, as `left,top,width,height`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetFace(String);

impl TargetFace {
    /// Builds a target face from a sequence of exactly four values.
    pub fn from_slice(values: &[u32]) -> Result<Self> {
        match values {
            [left, top, width, height] => {
                Ok(FaceRectangle::new(*left, *top, *width, *height).into())
            }
            _ => Err(FaceError::invalid_input(
                "targetFace",
                format!("expected 4 values (left, top, width, height), got {}", values.len()),
            )),
        }
    }

    /// Query parameter value.
    pub fn as_param(&self) -> &str {
        &self.0
    }
}

impl From<FaceRectangle> for TargetFace {
    fn from(rectangle: FaceRectangle) -> Self {
        Self(rectangle.as_param())
    }
}

impl From<[u32; 4]> for TargetFace {
    fn from([left, top, width, height]: [u32; 4]) -> Self {
        FaceRectangle::new(left, top, width, height).into()
    }
}

impl TryFrom<&[u32]> for TargetFace {
    type Error = FaceError;

    fn try_from(values: &[u32]) -> Result<Self> {
        Self::from_slice(values)
    }
}

impl TryFrom<Vec<u32>> for TargetFace {
    type Error = FaceError;

    fn try_from(values: Vec<u32>) -> Result<Self> {
        Self::from_slice(&values)
    }
}

/// Pre-formatted values are sent as given.
impl From<&str> for TargetFace {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for TargetFace {
    fn from(value: String) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn url_with_host_is_remote() {
        assert_eq!(
            ImageSource::classify("https://example.com/face.jpg").unwrap(),
            ImageSource::Url("https://example.com/face.jpg".into())
        );
    }

    #[test]
    fn existing_file_is_local() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"\xff\xd8\xff").unwrap();
        let path = file.path().to_str().unwrap();

        assert_eq!(
            ImageSource::classify(path).unwrap(),
            ImageSource::File(file.path().to_path_buf())
        );
    }

    #[test]
    fn directory_is_not_an_image() {
        let dir = tempfile::tempdir().unwrap();
        let err = ImageSource::classify(dir.path().to_str().unwrap()).unwrap_err();
        assert!(matches!(err, FaceError::InvalidInput { .. }));
    }

    #[test]
    fn neither_url_nor_file_is_rejected() {
        for input in ["not a url", "/definitely/missing/face.jpg", "mailto:someone", ""] {
            let err = ImageSource::classify(input).unwrap_err();
            assert!(matches!(err, FaceError::InvalidInput { .. }), "input {input:?}");
        }
    }

    #[test]
    fn target_face_forms_agree() {
        let expected = "10,20,30,40";
        assert_eq!(TargetFace::from(FaceRectangle::new(10, 20, 30, 40)).as_param(), expected);
        assert_eq!(TargetFace::from([10, 20, 30, 40]).as_param(), expected);
        assert_eq!(TargetFace::try_from(vec![10_u32, 20, 30, 40]).unwrap().as_param(), expected);
        assert_eq!(TargetFace::from(expected).as_param(), expected);
    }

    #[test]
    fn target_face_needs_four_values() {
        let err = TargetFace::from_slice(&[1, 2, 3]).unwrap_err();
        assert!(matches!(err, FaceError::InvalidInput { ref param, .. } if param == "targetFace"));
        assert!(TargetFace::try_from(vec![1_u32, 2, 3, 4, 5]).is_err());
    }
}
