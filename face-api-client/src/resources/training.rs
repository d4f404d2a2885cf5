use async_trait::async_trait;

use super::{Resource, join_path};
use crate::error::Result;
use crate::models::{Model, TrainingStatus};
use crate::traits::{Trainable, TrainableKind};

#[async_trait]
impl<K: TrainableKind> Trainable for Resource<K> {
    async fn train(&self) -> Result<()> {
        let path = join_path(&self.own_path()?, "train");
        self.client.post(&path, None).await?;
        Ok(())
    }

    async fn training_status(&self) -> Result<TrainingStatus> {
        let path = join_path(&self.own_path()?, "training");
        let raw = self.client.get(&path, &[]).await?;
        TrainingStatus::from_json(raw)
    }
}
