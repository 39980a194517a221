use std::{path::PathBuf, sync::Arc};

use async_trait::async_trait;
use models::coffee::Coffee;

use super::repository::{CoffeeRepository, UpsertOutcome};
use crate::errors::ServiceError;
use crate::storage::json_map_store::JsonMapStore;

/// Key-value repository persisted as a JSON object `{id: coffee}`.
/// `find_all` order is unspecified.
#[derive(Clone)]
pub struct FileCoffeeRepository {
    store: Arc<JsonMapStore<String, Coffee>>,
}

impl FileCoffeeRepository {
    /// Open the store, creating an empty file if missing.
    pub async fn new<P: Into<PathBuf>>(path: P) -> Result<Self, ServiceError> {
        let store = JsonMapStore::<String, Coffee>::new(path).await?;
        Ok(Self { store })
    }
}

#[async_trait]
impl CoffeeRepository for FileCoffeeRepository {
    async fn find_all(&self) -> Result<Vec<Coffee>, ServiceError> {
        Ok(self.store.list().await.into_iter().map(|(_, v)| v).collect())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Coffee>, ServiceError> {
        Ok(self.store.get(&id.to_string()).await)
    }

    async fn save(&self, coffee: Coffee) -> Result<Coffee, ServiceError> {
        self.store.insert(coffee.id.clone(), coffee.clone()).await?;
        Ok(coffee)
    }

    async fn exists_by_id(&self, id: &str) -> Result<bool, ServiceError> {
        Ok(self.store.contains_key(&id.to_string()).await)
    }

    async fn delete_by_id(&self, id: &str) -> Result<(), ServiceError> {
        self.store.remove(&id.to_string()).await?;
        Ok(())
    }

    async fn save_all(&self, coffees: Vec<Coffee>) -> Result<Vec<Coffee>, ServiceError> {
        // one file write for the whole batch
        self.store
            .update_map(|map| {
                for coffee in &coffees {
                    map.insert(coffee.id.clone(), coffee.clone());
                }
                Ok(())
            })
            .await?;
        Ok(coffees)
    }

    async fn upsert(&self, coffee: Coffee) -> Result<UpsertOutcome, ServiceError> {
        let created = self.store.insert(coffee.id.clone(), coffee.clone()).await?;
        Ok(UpsertOutcome::from_created(coffee, created))
    }
}
