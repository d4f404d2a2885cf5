use async_trait::async_trait;

use crate::error::Result;
use crate::models::{Model, TrainingStatus};

/// Static description of a kind of remote resource.
///
/// Each kind is a unit type; the operations a [`Resource`](crate::Resource)
/// handle offers depend on which of the marker traits below its kind
/// implements.
pub trait ResourceKind: Send + Sync + 'static {
    /// Collection path segment, e.g. `persongroups`.
    const COLLECTION: &'static str;
    /// Attribute holding the resource identity, e.g. `personGroupId`.
    const ID_FIELD: &'static str;
    /// Typed view of the resource attributes.
    type Payload: Model;

    /// Path of the collection inside `scope`.
    fn collection_path(scope: &str) -> String {
        format!("{scope}/{}", Self::COLLECTION)
    }

    /// Path of the resource itself: the collection path, plus the identity
    /// when it is known.
    fn base_path(scope: &str, id: Option<&str>) -> String {
        let collection = Self::collection_path(scope);
        match id {
            Some(id) => format!("{collection}/{id}"),
            None => collection,
        }
    }
}

/// Resources with a name and user data that can be updated and deleted.
pub trait Named: ResourceKind {}

/// Top-level collections created under a caller-chosen id and listed with paging.
pub trait Registry: Named {}

/// Resources holding persisted faces.
pub trait FaceStore: ResourceKind {
    /// Path segment of the persisted faces, whose casing differs per kind.
    const FACES_SEGMENT: &'static str;
}

/// Face stores whose faces can be read back and annotated one by one.
pub trait FaceLookup: FaceStore {}

/// Resources the service trains before they can be searched.
pub trait TrainableKind: ResourceKind {}

/// Containers of persons.
pub trait PersonContainer: Registry {}

/// Training operations, shared by every trainable handle.
///
/// The trait is object safe, so a single polling loop can drive person
/// groups, large person groups and large face lists alike:
///
/// ```rust,no_run
/// # use face_api_client::{Trainable, Result};
/// # async fn wait(target: &dyn Trainable) -> Result<()> {
/// target.train().await?;
/// while target.training_status().await?.is_running() {
///     tokio::time::sleep(std::time::Duration::from_secs(1)).await;
/// }
/// # Ok(())
/// # }
/// ```
#[async_trait]
pub trait Trainable: Send + Sync {
    /// Queues a training task. Returns once the service accepted it.
    async fn train(&self) -> Result<()>;

    async fn training_status(&self) -> Result<TrainingStatus>;
}
