use super::{Person, Persons, Resource, compact_body};
use crate::error::Result;
use crate::traits::{PersonContainer, ResourceKind};
use crate::types::ListParams;

impl<K: PersonContainer> Resource<K> {
    /// Handle on the persons of this group.
    pub fn person(&self) -> Result<Person> {
        Ok(Resource::new(self.client.clone(), self.own_path()?))
    }
}

impl Resource<Persons> {
    /// Creates a person. The service assigns the `personId`.
    pub async fn create(&self, name: &str, user_data: Option<&str>) -> Result<Self> {
        let body = compact_body([("name", Some(name)), ("userData", user_data)]);
        let raw = self.client.post(&self.collection_path(), Some(&body)).await?;

        let mut created = self.hydrate(raw)?;
        created.record.set("name", name);
        created.record.set("userData", user_data);
        Ok(created)
    }

    pub async fn get(&self, person_id: &str) -> Result<Self> {
        let path = Persons::base_path(&self.scope, Some(person_id));
        let raw = self.client.get(&path, &[]).await?;
        self.hydrate(raw)
    }

    pub async fn list(&self, start: Option<&str>, top: Option<u32>) -> Result<Vec<Self>> {
        let raw = self
            .client
            .get_with(&self.collection_path(), &ListParams::page(start, top))
            .await?;
        self.hydrate_list(raw)
    }
}
