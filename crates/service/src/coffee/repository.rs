use async_trait::async_trait;
use models::coffee::Coffee;

use crate::errors::ServiceError;

/// Result of [`CoffeeRepository::upsert`]: the stored record and whether the
/// id was absent before the call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpsertOutcome {
    Created(Coffee),
    Updated(Coffee),
}

impl UpsertOutcome {
    pub fn from_created(coffee: Coffee, created: bool) -> Self {
        if created { Self::Created(coffee) } else { Self::Updated(coffee) }
    }

    pub fn is_created(&self) -> bool {
        matches!(self, Self::Created(_))
    }

    pub fn coffee(&self) -> &Coffee {
        match self {
            Self::Created(c) | Self::Updated(c) => c,
        }
    }

    pub fn into_inner(self) -> Coffee {
        match self {
            Self::Created(c) | Self::Updated(c) => c,
        }
    }
}

/// Persistence contract for coffee records, keyed by `Coffee::id`.
///
/// Every backend must behave identically for each operation; only the order
/// of `find_all` may differ between them.
#[async_trait]
pub trait CoffeeRepository: Send + Sync {
    /// Every stored record. Empty when nothing is stored.
    async fn find_all(&self) -> Result<Vec<Coffee>, ServiceError>;

    async fn find_by_id(&self, id: &str) -> Result<Option<Coffee>, ServiceError>;

    /// Insert when `coffee.id` is absent, overwrite otherwise. Returns the stored record.
    async fn save(&self, coffee: Coffee) -> Result<Coffee, ServiceError>;

    async fn exists_by_id(&self, id: &str) -> Result<bool, ServiceError>;

    /// Remove the record if present. Absent ids are not an error.
    async fn delete_by_id(&self, id: &str) -> Result<(), ServiceError>;

    /// Save each record in order.
    async fn save_all(&self, coffees: Vec<Coffee>) -> Result<Vec<Coffee>, ServiceError> {
        let mut saved = Vec::with_capacity(coffees.len());
        for coffee in coffees {
            saved.push(self.save(coffee).await?);
        }
        Ok(saved)
    }

    /// Existence check followed by `save`. Backends holding a lock override
    /// this so both steps happen under it.
    async fn upsert(&self, coffee: Coffee) -> Result<UpsertOutcome, ServiceError> {
        let existed = self.exists_by_id(&coffee.id).await?;
        let stored = self.save(coffee).await?;
        Ok(UpsertOutcome::from_created(stored, !existed))
    }
}
