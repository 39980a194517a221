use std::sync::Arc;

use models::coffee::{generate_id, Coffee};
use tracing::{info, instrument};

use super::repository::{CoffeeRepository, UpsertOutcome};
use crate::errors::ServiceError;

/// Names loaded by [`CoffeeService::seed`].
pub const SEED_COFFEES: [&str; 4] = ["Cafe Cereza", "Cafe Ganador", "Cafe Lareno", "Cafe Tres Pontas"];

/// Application service for coffee records.
/// Owns id generation and the PUT addressing policy; storage is delegated.
#[derive(Clone)]
pub struct CoffeeService {
    repo: Arc<dyn CoffeeRepository>,
}

impl CoffeeService {
    pub fn new(repo: Arc<dyn CoffeeRepository>) -> Self { Self { repo } }

    pub async fn list(&self) -> Result<Vec<Coffee>, ServiceError> {
        self.repo.find_all().await
    }

    pub async fn get(&self, id: &str) -> Result<Option<Coffee>, ServiceError> {
        self.repo.find_by_id(id).await
    }

    /// Store a new record, generating an id when the given one is blank.
    /// A caller-supplied id that already exists is overwritten.
    #[instrument(skip(self, coffee), fields(name = %coffee.name))]
    pub async fn create(&self, mut coffee: Coffee) -> Result<Coffee, ServiceError> {
        if coffee.has_blank_id() {
            coffee.id = generate_id();
        }
        let saved = self.repo.save(coffee).await?;
        info!(id = %saved.id, "coffee created");
        Ok(saved)
    }

    /// Upsert at `id`. The path id wins: it replaces whatever id the body carried.
    #[instrument(skip(self, coffee))]
    pub async fn put(&self, id: &str, mut coffee: Coffee) -> Result<UpsertOutcome, ServiceError> {
        coffee.id = id.to_string();
        let outcome = self.repo.upsert(coffee).await?;
        info!(created = outcome.is_created(), "coffee upserted");
        Ok(outcome)
    }

    /// Remove the record at `id`; absent ids are fine.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: &str) -> Result<(), ServiceError> {
        self.repo.delete_by_id(id).await?;
        info!("coffee deleted");
        Ok(())
    }

    /// Load the fixed starter set, each with a fresh id.
    pub async fn seed(&self) -> Result<Vec<Coffee>, ServiceError> {
        let coffees = SEED_COFFEES.iter().map(|name| Coffee::new(*name)).collect();
        let saved = self.repo.save_all(coffees).await?;
        info!(count = saved.len(), "seeded coffees");
        Ok(saved)
    }
}
