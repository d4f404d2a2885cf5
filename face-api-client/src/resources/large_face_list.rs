use super::{LargeFaceLists, Resource, join_path};
use crate::error::Result;
use crate::models::{Model, PersistedFace};
use crate::traits::FaceStore;
use crate::types::ListParams;

impl Resource<LargeFaceLists> {
    /// Lists the persisted faces of this large face list.
    pub async fn list_faces(
        &self,
        start: Option<&str>,
        top: Option<u32>,
    ) -> Result<Vec<PersistedFace>> {
        let path = join_path(&self.own_path()?, LargeFaceLists::FACES_SEGMENT);
        let raw = self
            .client
            .get_with(&path, &ListParams::page(start, top))
            .await?;
        PersistedFace::list_from_json(raw)
    }
}
