//! Operations shared by named collections.

use serde_json::Value;

use super::{Resource, compact_body};
use crate::error::Result;
use crate::query::{QueryValue, normalize_pairs};
use crate::record::Record;
use crate::traits::{Named, Registry};
use crate::types::{ListParams, RecognitionModel};

impl<K: Named> Resource<K> {
    /// Updates name and/or user data. Absent values are left unchanged.
    pub async fn update(&self, name: Option<&str>, user_data: Option<&str>) -> Result<()> {
        let path = self.own_path()?;
        let body = compact_body([("name", name), ("userData", user_data)]);
        self.client.patch(&path, Some(&body)).await?;
        Ok(())
    }

    /// Deletes the resource and everything stored in it.
    pub async fn delete(&self) -> Result<()> {
        let path = self.own_path()?;
        self.client.delete(&path).await?;
        Ok(())
    }
}

impl<K: Registry> Resource<K> {
    /// Creates a resource under a caller-chosen id.
    ///
    /// The service answers with an empty body, so the returned handle holds
    /// the attributes that were sent, with `null` for absent ones.
    pub async fn create(
        &self,
        id: &str,
        name: &str,
        user_data: Option<&str>,
        recognition_model: Option<RecognitionModel>,
    ) -> Result<Self> {
        let model = recognition_model.map(RecognitionModel::as_str);
        let body = compact_body([
            ("name", Some(name)),
            ("userData", user_data),
            ("recognitionModel", model),
        ]);
        let path = K::base_path(&self.scope, Some(id));
        self.client.put(&path, Some(&body)).await?;

        let record = Record::from_pairs(
            self.record.schema(),
            [
                (K::ID_FIELD, Some(id)),
                ("name", Some(name)),
                ("userData", user_data),
                ("recognitionModel", model),
            ],
        );
        Ok(self.sibling(record))
    }

    /// Fetches a resource by id.
    ///
    /// `returnRecognitionModel` is only sent when asked for.
    pub async fn get(&self, id: &str, return_recognition_model: bool) -> Result<Self> {
        let path = K::base_path(&self.scope, Some(id));
        let query = normalize_pairs([(
            "returnRecognitionModel",
            QueryValue::from(return_recognition_model.then_some(true)),
        )]);
        let raw = self.client.get(&path, &query).await?;
        self.hydrate(raw)
    }

    /// Lists resources in id order.
    pub async fn list(&self, params: &ListParams) -> Result<Vec<Self>> {
        let raw: Value = self
            .client
            .get_with(&self.collection_path(), params)
            .await?;
        self.hydrate_list(raw)
    }
}
