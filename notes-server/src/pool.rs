//! Database connection pool management.

use deadpool_postgres::{
    CreatePoolError, ManagerConfig, Pool, PoolConfig, RecyclingMethod, Runtime,
};
use tokio_postgres::NoTls;

use crate::config::DatabaseConfig;

/// Translate the database settings into a pool configuration.
///
/// No acquire timeout is set, so callers queue for a free connection
/// for as long as it takes.
fn pool_config(db: &DatabaseConfig) -> deadpool_postgres::Config {
    let mut cfg = deadpool_postgres::Config::new();
    cfg.host = Some(db.host.clone());
    cfg.user = Some(db.user.clone());
    cfg.password = Some(db.password.clone());
    cfg.dbname = Some(db.name.clone());
    cfg.port = Some(db.port);
    cfg.manager = Some(ManagerConfig {
        recycling_method: RecyclingMethod::Fast,
    });
    cfg.pool = Some(PoolConfig::new(db.max_connections));
    cfg
}

/// Port MySQL listens on; the fallback default when none is configured.
const MYSQL_PORT: u16 = 3306;

/// Create the process-wide connection pool.
///
/// Connections are opened lazily: an unreachable database is reported by
/// the first query, not here.
pub fn create_pool(db: &DatabaseConfig) -> Result<Pool, CreatePoolError> {
    let pool = pool_config(db).create_pool(Some(Runtime::Tokio1), NoTls)?;

    if db.port == MYSQL_PORT {
        tracing::warn!(
            "Database port is {}, the MySQL default; PostgreSQL usually listens on 5432, set DB_PORT",
            db.port
        );
    }

    tracing::info!(
        host = %db.host,
        port = db.port,
        database = %db.name,
        max_connections = pool.status().max_size,
        "Database connection pool created"
    );

    Ok(pool)
}
