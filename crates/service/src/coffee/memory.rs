use async_trait::async_trait;
use models::coffee::Coffee;
use tokio::sync::RwLock;

use super::repository::{CoffeeRepository, UpsertOutcome};
use crate::errors::ServiceError;

/// In-process list of coffees. Iterates in insertion order; overwriting a
/// record keeps its original position.
#[derive(Default)]
pub struct MemoryCoffeeRepository {
    coffees: RwLock<Vec<Coffee>>,
}

impl MemoryCoffeeRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true when the record was appended rather than replaced.
    fn store(list: &mut Vec<Coffee>, coffee: Coffee) -> bool {
        match list.iter_mut().find(|c| c.id == coffee.id) {
            Some(slot) => {
                *slot = coffee;
                false
            }
            None => {
                list.push(coffee);
                true
            }
        }
    }
}

#[async_trait]
impl CoffeeRepository for MemoryCoffeeRepository {
    async fn find_all(&self) -> Result<Vec<Coffee>, ServiceError> {
        Ok(self.coffees.read().await.clone())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Coffee>, ServiceError> {
        Ok(self.coffees.read().await.iter().find(|c| c.id == id).cloned())
    }

    async fn save(&self, coffee: Coffee) -> Result<Coffee, ServiceError> {
        let mut list = self.coffees.write().await;
        Self::store(&mut list, coffee.clone());
        Ok(coffee)
    }

    async fn exists_by_id(&self, id: &str) -> Result<bool, ServiceError> {
        Ok(self.coffees.read().await.iter().any(|c| c.id == id))
    }

    async fn delete_by_id(&self, id: &str) -> Result<(), ServiceError> {
        self.coffees.write().await.retain(|c| c.id != id);
        Ok(())
    }

    async fn upsert(&self, coffee: Coffee) -> Result<UpsertOutcome, ServiceError> {
        let mut list = self.coffees.write().await;
        let created = Self::store(&mut list, coffee.clone());
        Ok(UpsertOutcome::from_created(coffee, created))
    }
}
