//! Operations on detected faces.

use serde_json::json;

use super::{Face, Faces, Resource};
use crate::error::Result;
use crate::image::ImageSource;
use crate::models::{GroupResult, IdentifyResult, Model, SimilarFace, VerifyResult};
use crate::query::{normalize_struct, with_query};
use crate::types::{DetectParams, FindSimilarRequest, IdentifyRequest, PersonParent};

impl Resource<Faces> {
    /// Detects faces in an image given as a URL or a local file path.
    ///
    /// Each returned handle is identified by its `faceId` when detection was
    /// asked to return one.
    pub async fn detect(&self, image: &str, params: &DetectParams) -> Result<Vec<Face>> {
        let source = ImageSource::classify(image)?;
        let query = normalize_struct(params)?;
        let raw = source
            .upload(&self.client, &with_query(&self.path("detect"), &query))
            .await?;
        self.hydrate_list(raw)
    }

    /// Finds faces similar to this one, best match first.
    pub async fn find_similar(&self, request: &FindSimilarRequest) -> Result<Vec<SimilarFace>> {
        let body = request.to_body(self.require_id()?);
        let raw = self
            .client
            .post(&self.path("findsimilars"), Some(&body))
            .await?;
        SimilarFace::list_from_json(raw)
    }

    /// Partitions faces into groups of the same person.
    pub async fn group(&self, face_ids: &[String]) -> Result<GroupResult> {
        let body = json!({ "faceIds": face_ids });
        let raw = self.client.post(&self.path("group"), Some(&body)).await?;
        GroupResult::from_json(raw)
    }

    pub async fn identify(&self, request: &IdentifyRequest) -> Result<Vec<IdentifyResult>> {
        let raw = self
            .client
            .post(&self.path("identify"), Some(&request.to_body()))
            .await?;
        IdentifyResult::list_from_json(raw)
    }

    /// Verifies whether this face and another belong to the same person.
    pub async fn verify_face(&self, other_face_id: &str) -> Result<VerifyResult> {
        let body = json!({ "faceId1": self.require_id()?, "faceId2": other_face_id });
        let raw = self.client.post(&self.path("verify"), Some(&body)).await?;
        VerifyResult::from_json(raw)
    }

    /// Verifies whether this face belongs to a person of `group`.
    pub async fn verify_person(
        &self,
        person_id: &str,
        group: &PersonParent,
    ) -> Result<VerifyResult> {
        let mut body = json!({ "faceId": self.require_id()?, "personId": person_id });
        body[group.id_field()] = group.id().into();
        let raw = self.client.post(&self.path("verify"), Some(&body)).await?;
        VerifyResult::from_json(raw)
    }
}
