//! # face-api-client
//!
//! An async client for the Azure Face REST API: face detection and
//! comparison, face lists, person groups and the persons inside them.
//!
//! ## Feature Flags
//!
//! - **`native-tls`** *(default)*: use the platform's native TLS implementation.
//! - **`rustls`**: use rustls. Recommended for cross-compilation.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use face_api_client::{ClientConfig, DetectParams, PersonParent, Trainable, create_client};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // 1. One client per process; handles created from it share its pool
//!     let client = create_client(ClientConfig::new("your-key", "westeurope"))?;
//!
//!     // 2. Create a person group and a person with one face
//!     let group = client
//!         .person_groups()
//!         .create("family", "Family", None, None)
//!         .await?;
//!     let person = group.person()?.create("Anna", Some("mum")).await?;
//!     person.add_face("https://example.com/anna.jpg", None, None).await?;
//!
//!     // 3. Train the group and wait for it
//!     group.train().await?;
//!     while group.training_status().await?.is_running() {
//!         tokio::time::sleep(std::time::Duration::from_secs(1)).await;
//!     }
//!
//!     // 4. Detect faces in a local file and verify the first one
//!     let faces = client
//!         .faces()
//!         .detect("./photo.jpg", &DetectParams::default())
//!         .await?;
//!     if let (Some(face), Some(person_id)) = (faces.first(), person.id()) {
//!         let parent = PersonParent::PersonGroup("family".into());
//!         let result = face.verify_person(person_id, &parent).await?;
//!         println!("identical: {}", result.is_identical);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Records
//!
//! Every handle keeps the raw attributes of its payload as a [`Record`],
//! hydrated once with nested records for the known sub-objects. Use
//! [`Resource::info`] or [`Record::decode`] for a typed view.
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, FaceError>`](FaceError):
//!
//! - [`FaceError::Configuration`]: blank credentials
//! - [`FaceError::UninitializedResource`]: the handle has no identity yet
//! - [`FaceError::InvalidInput`]: unusable image reference or target face
//! - [`FaceError::RemoteService`]: the service rejected the request
//!
//! Nothing is retried.

mod config;
mod error;
mod factory;
mod http_client;
mod image;
pub mod models;
pub mod query;
pub mod record;
mod resources;
mod traits;
mod types;
mod utils;

pub use config::{ClientConfig, DEFAULT_ENDPOINT};
pub use error::{FaceError, Result};
pub use factory::{create_client, create_client_from_env};
pub use http_client::{FaceClient, SUBSCRIPTION_KEY_HEADER};
pub use image::{ImageSource, TargetFace};
pub use models::{
    FaceAttributes, FaceInfo, FaceLandmark, FaceLandmarks, FaceRectangle, GroupResult,
    IdentifyCandidate, IdentifyResult, Model, PersistedFace, SimilarFace, TrainingState,
    TrainingStatus, VerifyResult,
};
pub use record::{Record, RecordSchema, Value};
pub use resources::{
    Face, FaceList, FaceLists, Faces, LargeFaceList, LargeFaceLists, LargePersonGroup,
    LargePersonGroups, Person, PersonGroup, PersonGroups, Persons, Resource,
};
pub use traits::{
    FaceLookup, FaceStore, Named, PersonContainer, Registry, ResourceKind, Trainable,
    TrainableKind,
};
pub use types::{
    DetectParams, FaceAttributeType, FindSimilarMode, FindSimilarRequest, IdentifyRequest,
    ListParams, PersonParent, RecognitionModel, SimilarFaceSource,
};
pub use utils::datetime::parse_service_timestamp;
