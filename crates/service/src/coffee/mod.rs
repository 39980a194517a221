//! Coffee records: persistence contract, its backends, and the service on top.

pub mod repository;
pub mod memory;
pub mod file;
pub mod seaorm;
pub mod service;

use std::sync::Arc;

use configs::{AppConfig, StorageBackend};
use migration::MigratorTrait;
use tracing::info;

pub use repository::{CoffeeRepository, UpsertOutcome};
pub use service::CoffeeService;

/// Build the backend named by `storage.backend`.
///
/// The postgres backend connects with the `[database]` settings and applies
/// pending migrations before returning.
pub async fn build_repository(cfg: &AppConfig) -> anyhow::Result<Arc<dyn CoffeeRepository>> {
    let repo: Arc<dyn CoffeeRepository> = match cfg.storage.backend {
        StorageBackend::Memory => Arc::new(memory::MemoryCoffeeRepository::new()),
        StorageBackend::File => Arc::new(file::FileCoffeeRepository::new(&cfg.storage.file).await?),
        StorageBackend::Postgres => {
            let db = models::db::connect_with_config(&cfg.database).await?;
            migration::Migrator::up(&db, None).await?;
            Arc::new(seaorm::SeaOrmCoffeeRepository::new(db))
        }
    };
    info!(backend = ?cfg.storage.backend, "coffee repository ready");
    Ok(repo)
}
