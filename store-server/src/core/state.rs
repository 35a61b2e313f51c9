use crate::core::Config;
use crate::db::DbService;
use crate::utils::AppError;

/// Server state — shared handles for all services
///
/// Cloned into every handler via axum's `State` extractor; both fields are
/// cheap to clone (the pool is internally reference-counted).
#[derive(Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Config,
    /// Database service (SQLite pool)
    pub db: DbService,
}

impl ServerState {
    /// Initialize all services: work directory, database pool, migrations
    pub async fn initialize(config: &Config) -> Result<Self, AppError> {
        std::fs::create_dir_all(&config.work_dir)
            .map_err(|e| AppError::Internal(format!("Failed to create work dir: {e}")))?;

        let db = DbService::new(&config.database_path).await?;

        Ok(Self {
            config: config.clone(),
            db,
        })
    }
}
