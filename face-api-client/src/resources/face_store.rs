//! Persisted face operations.

use super::{Resource, compact_body, join_path};
use crate::error::Result;
use crate::image::{ImageSource, TargetFace};
use crate::models::{Model, PERSISTED_FACE, PersistedFace};
use crate::query::{QueryValue, normalize_pairs, with_query};
use crate::record::Record;
use crate::traits::{FaceLookup, FaceStore};

impl<K: FaceStore> Resource<K> {
    /// Adds a face from a URL or a local file.
    ///
    /// `target_face` is required when the image holds more than one face.
    /// The returned face carries the `user_data` that was sent.
    pub async fn add_face(
        &self,
        image: &str,
        user_data: Option<&str>,
        target_face: Option<TargetFace>,
    ) -> Result<PersistedFace> {
        let faces = self.faces_path()?;
        let source = ImageSource::classify(image)?;
        let query = normalize_pairs([
            ("userData", QueryValue::from(user_data)),
            (
                "targetFace",
                QueryValue::from(target_face.as_ref().map(TargetFace::as_param)),
            ),
        ]);

        let raw = source.upload(&self.client, &with_query(&faces, &query)).await?;
        let mut record = Record::hydrate(&PERSISTED_FACE, raw)?;
        record.set("userData", user_data);
        PersistedFace::from_record(&record)
    }

    pub async fn delete_face(&self, persisted_face_id: &str) -> Result<()> {
        let path = join_path(&self.faces_path()?, persisted_face_id);
        self.client.delete(&path).await?;
        Ok(())
    }

    fn faces_path(&self) -> Result<String> {
        Ok(join_path(&self.own_path()?, K::FACES_SEGMENT))
    }
}

impl<K: FaceLookup> Resource<K> {
    pub async fn get_face(&self, persisted_face_id: &str) -> Result<PersistedFace> {
        let path = join_path(&self.faces_path()?, persisted_face_id);
        let raw = self.client.get(&path, &[]).await?;
        PersistedFace::from_json(raw)
    }

    pub async fn update_face(
        &self,
        persisted_face_id: &str,
        user_data: Option<&str>,
    ) -> Result<()> {
        let path = join_path(&self.faces_path()?, persisted_face_id);
        let body = compact_body([("userData", user_data)]);
        self.client.patch(&path, Some(&body)).await?;
        Ok(())
    }
}
