#![cfg(test)]
use std::{path::PathBuf, sync::Arc};

use migration::MigratorTrait;
use models::coffee::Coffee;
use models::db::connect;
use sea_orm::DatabaseConnection;
use tokio::sync::OnceCell;
use uuid::Uuid;

use crate::coffee::repository::{CoffeeRepository, UpsertOutcome};
use crate::errors::ServiceError;

// Ensure migrations run only once across the entire test process
static MIGRATED: OnceCell<()> = OnceCell::const_new();

/// A fresh database connection, or `None` when no database is configured.
pub async fn get_db() -> Result<Option<DatabaseConnection>, anyhow::Error> {
    if std::env::var("SKIP_DB_TESTS").is_ok() || std::env::var("DATABASE_URL").is_err() {
        eprintln!("DATABASE_URL missing; skip db tests");
        return Ok(None);
    }
    MIGRATED
        .get_or_try_init(|| async {
            let db = connect().await?;
            migration::Migrator::up(&db, None).await?;
            Ok::<(), anyhow::Error>(())
        })
        .await?;
    Ok(Some(connect().await?))
}

pub fn temp_store_path() -> PathBuf {
    std::env::temp_dir().join(format!("coffees_{}.json", Uuid::new_v4()))
}

fn unique_id(tag: &str) -> String {
    format!("{tag}-{}", Uuid::new_v4())
}

/// Behaviour every `CoffeeRepository` must share. Uses fresh ids only, so it
/// is safe against a store that already holds data.
pub async fn assert_repository_contract(repo: &dyn CoffeeRepository) -> Result<(), ServiceError> {
    // absent ids
    let ghost = unique_id("ghost");
    assert_eq!(repo.find_by_id(&ghost).await?, None);
    assert!(!repo.exists_by_id(&ghost).await?);
    repo.delete_by_id(&ghost).await?;
    assert!(!repo.exists_by_id(&ghost).await?);

    // save then find returns what was saved
    let id = unique_id("contract");
    let saved = repo.save(Coffee::with_id(&id, "Cafe Cereza")).await?;
    assert_eq!(saved, Coffee::with_id(&id, "Cafe Cereza"));
    assert_eq!(repo.find_by_id(&id).await?, Some(saved.clone()));
    assert!(repo.exists_by_id(&id).await?);
    assert!(repo.find_all().await?.contains(&saved));

    // save on an existing id overwrites in place
    let before = repo.find_all().await?.iter().filter(|c| c.id == id).count();
    repo.save(Coffee::with_id(&id, "Cafe Ganador")).await?;
    let after: Vec<_> = repo.find_all().await?.into_iter().filter(|c| c.id == id).collect();
    assert_eq!(before, 1);
    assert_eq!(after, vec![Coffee::with_id(&id, "Cafe Ganador")]);

    // upsert reports the transition
    let fresh = unique_id("upsert");
    let first = repo.upsert(Coffee::with_id(&fresh, "Mocha")).await?;
    assert_eq!(first, UpsertOutcome::Created(Coffee::with_id(&fresh, "Mocha")));
    let second = repo.upsert(Coffee::with_id(&fresh, "Latte")).await?;
    assert_eq!(second, UpsertOutcome::Updated(Coffee::with_id(&fresh, "Latte")));
    assert_eq!(repo.find_by_id(&fresh).await?.map(|c| c.name).as_deref(), Some("Latte"));

    // save_all keeps every record
    let batch = vec![Coffee::with_id(unique_id("b"), "One"), Coffee::with_id(unique_id("b"), "Two")];
    let stored = repo.save_all(batch.clone()).await?;
    assert_eq!(stored, batch);
    for c in &batch {
        assert!(repo.exists_by_id(&c.id).await?);
    }

    // no length limit on either field
    let long = Coffee::with_id(format!("{}-{}", "x".repeat(200), unique_id("long")), "n".repeat(1000));
    repo.save(long.clone()).await?;
    assert_eq!(repo.find_by_id(&long.id).await?, Some(long.clone()));

    // delete removes
    for victim in [&id, &fresh, &batch[0].id, &batch[1].id, &long.id] {
        repo.delete_by_id(victim).await?;
        assert_eq!(repo.find_by_id(victim).await?, None);
    }
    Ok(())
}

/// Many tasks upsert the same id at once: the final state holds exactly one
/// record and exactly one caller saw it created.
pub async fn assert_single_creation_under_contention<R>(repo: Arc<R>) -> Result<(), ServiceError>
where
    R: CoffeeRepository + 'static,
{
    let id = unique_id("race");
    let mut handles = Vec::new();
    for i in 0..16 {
        let repo = Arc::clone(&repo);
        let id = id.clone();
        handles.push(tokio::spawn(async move { repo.upsert(Coffee::with_id(id, format!("brew {i}"))).await }));
    }
    let mut created = 0;
    for h in handles {
        let outcome = h.await.expect("upsert task panicked")?;
        if outcome.is_created() {
            created += 1;
        }
    }
    assert_eq!(created, 1);
    let copies = repo.find_all().await?.into_iter().filter(|c| c.id == id).count();
    assert_eq!(copies, 1);
    Ok(())
}
