use std::sync::Arc;

use label_printer::QueueStore;
use parking_lot::Mutex;
use sqlx::SqlitePool;

use crate::core::Config;
use crate::db::DbService;
use crate::utils::AppResult;

/// Server state shared by every handler
///
/// Cheap to clone: the pool and the queue are reference counted.
///
/// | Field | Meaning |
/// |-------|---------|
/// | config | Immutable configuration |
/// | pool | SQLite pool (label templates) |
/// | queue | Session print queue |
#[derive(Clone)]
pub struct ServerState {
    pub config: Config,
    pub pool: SqlitePool,
    /// Handlers hold the lock only for synchronous queue work
    pub queue: Arc<Mutex<QueueStore>>,
}

impl ServerState {
    pub fn new(config: Config, pool: SqlitePool) -> Self {
        Self {
            config,
            pool,
            queue: Arc::new(Mutex::new(QueueStore::new())),
        }
    }

    /// Open the database (running migrations) and build the state
    pub async fn initialize(config: &Config) -> AppResult<Self> {
        let db = DbService::new(&config.database_path).await?;
        Ok(Self::new(config.clone(), db.pool))
    }
}
