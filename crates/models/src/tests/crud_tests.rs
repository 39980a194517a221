use crate::coffee::{self, Coffee};
use crate::db::connect;
use anyhow::Result;
use migration::MigratorTrait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, IntoActiveModel, Set};

/// Connect and migrate, or `None` when no database is configured.
async fn setup_test_db() -> Result<Option<DatabaseConnection>> {
    if std::env::var("SKIP_DB_TESTS").is_ok() || std::env::var("DATABASE_URL").is_err() {
        eprintln!("DATABASE_URL missing; skip db tests");
        return Ok(None);
    }
    let db = connect().await?;
    migration::Migrator::up(&db, None).await?;
    Ok(Some(db))
}

#[tokio::test]
async fn test_coffee_crud() -> Result<()> {
    let Some(db) = setup_test_db().await? else { return Ok(()) };

    // Create
    let created = Coffee::new("Cafe Cereza").into_active_model().insert(&db).await?;
    assert_eq!(created.name, "Cafe Cereza");

    // Read
    let found = coffee::Entity::find_by_id(created.id.clone()).one(&db).await?;
    assert_eq!(found.as_ref(), Some(&created));

    // Update
    let mut am: coffee::ActiveModel = created.clone().into();
    am.name = Set("Cafe Ganador".into());
    let updated = am.update(&db).await?;
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.name, "Cafe Ganador");

    // Delete
    coffee::Entity::delete_by_id(created.id.clone()).exec(&db).await?;
    assert!(coffee::Entity::find_by_id(created.id).one(&db).await?.is_none());
    Ok(())
}
