use async_trait::async_trait;
use models::coffee::{self, Coffee};
use sea_orm::{
    sea_query::OnConflict, DatabaseConnection, EntityTrait, IntoActiveModel, PaginatorTrait, QueryOrder,
};

use super::repository::{CoffeeRepository, UpsertOutcome};
use crate::errors::ServiceError;

/// SeaORM-backed repository implementation over the `coffee` table.
pub struct SeaOrmCoffeeRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmCoffeeRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

fn db_err(e: sea_orm::DbErr) -> ServiceError {
    ServiceError::Db(e.to_string())
}

#[async_trait]
impl CoffeeRepository for SeaOrmCoffeeRepository {
    async fn find_all(&self) -> Result<Vec<Coffee>, ServiceError> {
        coffee::Entity::find()
            .order_by_asc(coffee::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Coffee>, ServiceError> {
        coffee::Entity::find_by_id(id.to_string()).one(&self.db).await.map_err(db_err)
    }

    async fn save(&self, coffee: Coffee) -> Result<Coffee, ServiceError> {
        // INSERT ... ON CONFLICT (id) DO UPDATE SET name = excluded.name
        coffee::Entity::insert(coffee.clone().into_active_model())
            .on_conflict(
                OnConflict::column(coffee::Column::Id)
                    .update_column(coffee::Column::Name)
                    .to_owned(),
            )
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        Ok(coffee)
    }

    async fn exists_by_id(&self, id: &str) -> Result<bool, ServiceError> {
        let n = coffee::Entity::find_by_id(id.to_string()).count(&self.db).await.map_err(db_err)?;
        Ok(n > 0)
    }

    async fn delete_by_id(&self, id: &str) -> Result<(), ServiceError> {
        coffee::Entity::delete_by_id(id.to_string()).exec(&self.db).await.map_err(db_err)?;
        Ok(())
    }

    async fn upsert(&self, coffee: Coffee) -> Result<UpsertOutcome, ServiceError> {
        // INSERT ... ON CONFLICT (id) DO NOTHING; only the inserting caller sees a row
        let inserted = coffee::Entity::insert(coffee.clone().into_active_model())
            .on_conflict(OnConflict::column(coffee::Column::Id).do_nothing().to_owned())
            .exec_without_returning(&self.db)
            .await
            .map_err(db_err)?;
        if inserted == 1 {
            return Ok(UpsertOutcome::Created(coffee));
        }
        let stored = self.save(coffee).await?;
        Ok(UpsertOutcome::Updated(stored))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::test_support::{assert_repository_contract, assert_single_creation_under_contention, get_db};

    #[tokio::test]
    async fn seaorm_repository_contract() -> Result<(), anyhow::Error> {
        let Some(db) = get_db().await? else { return Ok(()) };
        let repo = SeaOrmCoffeeRepository::new(db);
        assert_repository_contract(&repo).await?;
        Ok(())
    }

    #[tokio::test]
    async fn seaorm_concurrent_upserts_report_one_creation() -> Result<(), anyhow::Error> {
        let Some(db) = get_db().await? else { return Ok(()) };
        assert_single_creation_under_contention(Arc::new(SeaOrmCoffeeRepository::new(db))).await?;
        Ok(())
    }
}
