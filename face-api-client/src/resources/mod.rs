//! Resource handles
//!
//! A [`Resource`] pairs a shared [`FaceClient`] with the attribute [`Record`]
//! of one remote object. Handles created from a client start without an
//! identity; `create`, `get` and `list` return handles that have one.
//! Operations that address the object itself fail with
//! [`FaceError::UninitializedResource`] before any request when the identity
//! is missing.

mod collection;
mod face;
mod face_store;
mod large_face_list;
mod person;
mod training;

use std::fmt;
use std::marker::PhantomData;

use serde_json::Value;

use crate::error::{FaceError, Result};
use crate::http_client::FaceClient;
use crate::models::{
    FaceInfo, FaceListInfo, LargeFaceListInfo, LargePersonGroupInfo, Model, PersonGroupInfo,
    PersonInfo,
};
use crate::record::Record;
use crate::traits::{
    FaceLookup, FaceStore, Named, PersonContainer, Registry, ResourceKind, TrainableKind,
};
use crate::types::PersonParent;

/// Handle on a remote resource of kind `K`.
pub struct Resource<K: ResourceKind> {
    client: FaceClient,
    scope: String,
    record: Record,
    _kind: PhantomData<fn() -> K>,
}

/// Face lists, up to 1,000 faces, used by find-similar.
pub type FaceList = Resource<FaceLists>;
/// Large face lists, up to 1,000,000 faces, trained before use.
pub type LargeFaceList = Resource<LargeFaceLists>;
pub type PersonGroup = Resource<PersonGroups>;
pub type LargePersonGroup = Resource<LargePersonGroups>;
/// A person inside a person group or large person group.
pub type Person = Resource<Persons>;
/// A detected face, addressed by its temporary `faceId`.
pub type Face = Resource<Faces>;

/// Kind of [`FaceList`].
#[derive(Debug)]
pub struct FaceLists;
/// Kind of [`LargeFaceList`].
#[derive(Debug)]
pub struct LargeFaceLists;
/// Kind of [`PersonGroup`].
#[derive(Debug)]
pub struct PersonGroups;
/// Kind of [`LargePersonGroup`].
#[derive(Debug)]
pub struct LargePersonGroups;
/// Kind of [`Person`].
#[derive(Debug)]
pub struct Persons;
/// Kind of [`Face`].
#[derive(Debug)]
pub struct Faces;

impl ResourceKind for FaceLists {
    const COLLECTION: &'static str = "facelists";
    const ID_FIELD: &'static str = "faceListId";
    type Payload = FaceListInfo;
}

impl ResourceKind for LargeFaceLists {
    const COLLECTION: &'static str = "largefacelists";
    const ID_FIELD: &'static str = "largeFaceListId";
    type Payload = LargeFaceListInfo;
}

impl ResourceKind for PersonGroups {
    const COLLECTION: &'static str = "persongroups";
    const ID_FIELD: &'static str = "personGroupId";
    type Payload = PersonGroupInfo;
}

impl ResourceKind for LargePersonGroups {
    const COLLECTION: &'static str = "largepersongroups";
    const ID_FIELD: &'static str = "largePersonGroupId";
    type Payload = LargePersonGroupInfo;
}

impl ResourceKind for Persons {
    const COLLECTION: &'static str = "persons";
    const ID_FIELD: &'static str = "personId";
    type Payload = PersonInfo;
}

impl ResourceKind for Faces {
    const COLLECTION: &'static str = "";
    const ID_FIELD: &'static str = "faceId";
    type Payload = FaceInfo;

    // Face endpoints live at the service root.
    fn collection_path(scope: &str) -> String {
        scope.to_string()
    }

    fn base_path(scope: &str, _id: Option<&str>) -> String {
        scope.to_string()
    }
}

impl Named for FaceLists {}
impl Named for LargeFaceLists {}
impl Named for PersonGroups {}
impl Named for LargePersonGroups {}
impl Named for Persons {}

impl Registry for FaceLists {}
impl Registry for LargeFaceLists {}
impl Registry for PersonGroups {}
impl Registry for LargePersonGroups {}

impl FaceStore for FaceLists {
    const FACES_SEGMENT: &'static str = "persistedFaces";
}
impl FaceStore for LargeFaceLists {
    const FACES_SEGMENT: &'static str = "persistedfaces";
}
impl FaceStore for Persons {
    const FACES_SEGMENT: &'static str = "persistedFaces";
}

impl FaceLookup for LargeFaceLists {}
impl FaceLookup for Persons {}

impl TrainableKind for LargeFaceLists {}
impl TrainableKind for PersonGroups {}
impl TrainableKind for LargePersonGroups {}

impl PersonContainer for PersonGroups {}
impl PersonContainer for LargePersonGroups {}

impl<K: ResourceKind> Resource<K> {
    pub(crate) fn new(client: FaceClient, scope: impl Into<String>) -> Self {
        Self::with_record(client, scope, Record::new(<K::Payload as Model>::SCHEMA))
    }

    pub(crate) fn with_record(
        client: FaceClient,
        scope: impl Into<String>,
        record: Record,
    ) -> Self {
        Self {
            client,
            scope: scope.into(),
            record,
            _kind: PhantomData,
        }
    }

    /// A sibling handle in the same scope holding `record`.
    pub(crate) fn sibling(&self, record: Record) -> Self {
        Self::with_record(self.client.clone(), self.scope.clone(), record)
    }

    /// Hydrates a payload into a sibling handle.
    pub(crate) fn hydrate(&self, raw: Value) -> Result<Self> {
        Ok(self.sibling(Record::hydrate(<K::Payload as Model>::SCHEMA, raw)?))
    }

    /// Hydrates a list payload into sibling handles, preserving order.
    pub(crate) fn hydrate_list(&self, raw: Value) -> Result<Vec<Self>> {
        Ok(Record::hydrate_list(<K::Payload as Model>::SCHEMA, raw)?
            .into_iter()
            .map(|record| self.sibling(record))
            .collect())
    }

    /// Handle on an existing resource known by id, without fetching it.
    #[must_use]
    pub fn with_id(&self, id: &str) -> Self {
        let schema = <K::Payload as Model>::SCHEMA;
        self.sibling(Record::from_pairs(schema, [(K::ID_FIELD, id)]))
    }

    /// Wraps an existing record, e.g. one stored by the application.
    #[must_use]
    pub fn attach(&self, record: Record) -> Self {
        self.sibling(record)
    }

    pub fn client(&self) -> &FaceClient {
        &self.client
    }

    /// Path prefix of the collection, empty for top-level resources.
    pub fn scope(&self) -> &str {
        &self.scope
    }

    pub fn record(&self) -> &Record {
        &self.record
    }

    pub fn into_record(self) -> Record {
        self.record
    }

    /// Shortcut for `record().get(name)`.
    pub fn get_attribute(&self, name: &str) -> Option<&crate::record::Value> {
        self.record.get(name)
    }

    /// Typed view of the attributes.
    pub fn info(&self) -> Result<K::Payload> {
        <K::Payload as Model>::from_record(&self.record)
    }

    /// Identity, when known. An empty id counts as absent.
    pub fn id(&self) -> Option<&str> {
        self.record
            .get_str(K::ID_FIELD)
            .filter(|id| !id.is_empty())
    }

    pub(crate) fn require_id(&self) -> Result<&str> {
        self.id()
            .ok_or_else(|| FaceError::uninitialized(self.record.type_name(), K::ID_FIELD))
    }

    /// Collection path, plus the identity when known.
    pub fn base_path(&self) -> String {
        K::base_path(&self.scope, self.id())
    }

    /// Base path of an initialized handle.
    pub(crate) fn own_path(&self) -> Result<String> {
        let id = self.require_id()?;
        Ok(K::base_path(&self.scope, Some(id)))
    }

    pub(crate) fn collection_path(&self) -> String {
        K::collection_path(&self.scope)
    }

    /// Joins a relative path onto the base path with a single separator.
    pub fn path(&self, relative: &str) -> String {
        join_path(&self.base_path(), relative)
    }
}

impl<K: ResourceKind> Clone for Resource<K> {
    fn clone(&self) -> Self {
        self.sibling(self.record.clone())
    }
}

impl<K: ResourceKind> fmt::Debug for Resource<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct(self.record.type_name())
            .field("scope", &self.scope)
            .field("record", &self.record)
            .finish_non_exhaustive()
    }
}

impl<K: ResourceKind> PartialEq for Resource<K> {
    fn eq(&self, other: &Self) -> bool {
        self.scope == other.scope && self.record == other.record
    }
}

impl FaceClient {
    pub fn face_lists(&self) -> FaceList {
        Resource::new(self.clone(), "")
    }

    pub fn large_face_lists(&self) -> LargeFaceList {
        Resource::new(self.clone(), "")
    }

    pub fn person_groups(&self) -> PersonGroup {
        Resource::new(self.clone(), "")
    }

    pub fn large_person_groups(&self) -> LargePersonGroup {
        Resource::new(self.clone(), "")
    }

    /// Persons of a person group or large person group.
    pub fn persons(&self, parent: &PersonParent) -> Person {
        Resource::new(self.clone(), parent.scope())
    }

    pub fn faces(&self) -> Face {
        Resource::new(self.clone(), "")
    }

    /// Handle on an already detected face.
    pub fn face(&self, face_id: &str) -> Face {
        self.faces().with_id(face_id)
    }
}

/// JSON object of the present, non-empty fields, in order.
pub(crate) fn compact_body<const N: usize>(fields: [(&str, Option<&str>); N]) -> Value {
    Value::Object(
        fields
            .into_iter()
            .filter_map(|(name, value)| {
                value
                    .filter(|v| !v.is_empty())
                    .map(|v| (name.to_string(), Value::from(v)))
            })
            .collect(),
    )
}

pub(crate) fn join_path(base: &str, relative: &str) -> String {
    let relative = relative.trim_start_matches('/');
    if relative.is_empty() {
        base.to_string()
    } else if base.is_empty() {
        format!("/{relative}")
    } else {
        format!("{}/{relative}", base.trim_end_matches('/'))
    }
}
