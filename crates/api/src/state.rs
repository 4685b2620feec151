use std::sync::Arc;

use roster_core::service::StudentService;
use roster_db::repositories::PgStudentRepo;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via
/// `State<AppState>`.
///
/// Cheaply cloneable: the pool is reference-counted and the service holds a
/// clone of the pool-backed repository.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool (used directly by the health check).
    pub pool: roster_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// The student service, constructed with its repository passed
    /// explicitly.
    pub service: StudentService<PgStudentRepo>,
}

impl AppState {
    /// Build the state for a given pool and configuration.
    pub fn new(pool: roster_db::DbPool, config: ServerConfig) -> Self {
        let service = StudentService::new(PgStudentRepo::new(pool.clone()));
        Self {
            pool,
            config: Arc::new(config),
            service,
        }
    }
}
