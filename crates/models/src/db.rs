use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection};
use migration::MigratorTrait;
use std::time::Duration;
use tracing::info;

/// Pool settings handed to SeaORM. Each request borrows one pooled connection per statement.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub connect_timeout: Duration,
    pub acquire_timeout: Duration,
    pub idle_timeout: Option<Duration>,
    pub max_lifetime: Option<Duration>,
    pub sqlx_logging: bool,
}

impl DatabaseConfig {
    /// A private in-memory SQLite database.
    ///
    /// An in-memory database lives only as long as its connection, so the pool
    /// is pinned to a single connection that is never recycled.
    pub fn in_memory() -> Self {
        Self {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
            min_connections: 1,
            connect_timeout: Duration::from_secs(5),
            acquire_timeout: Duration::from_secs(5),
            idle_timeout: None,
            max_lifetime: None,
            sqlx_logging: false,
        }
    }
}

impl From<&configs::DatabaseConfig> for DatabaseConfig {
    fn from(c: &configs::DatabaseConfig) -> Self {
        if c.url.starts_with("sqlite::memory:") {
            return Self { url: c.url.clone(), sqlx_logging: c.sqlx_logging, ..Self::in_memory() };
        }
        Self {
            url: c.url.clone(),
            max_connections: c.max_connections,
            min_connections: c.min_connections,
            connect_timeout: Duration::from_secs(c.connect_timeout_secs),
            acquire_timeout: Duration::from_secs(c.acquire_timeout_secs),
            idle_timeout: Some(Duration::from_secs(c.idle_timeout_secs)),
            max_lifetime: Some(Duration::from_secs(c.max_lifetime_secs)),
            sqlx_logging: c.sqlx_logging,
        }
    }
}

pub async fn connect_with_config(cfg: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    let mut opt = ConnectOptions::new(cfg.url.clone());
    opt.max_connections(cfg.max_connections)
        .min_connections(cfg.min_connections)
        .connect_timeout(cfg.connect_timeout)
        .acquire_timeout(cfg.acquire_timeout)
        .sqlx_logging(cfg.sqlx_logging);
    if let Some(idle) = cfg.idle_timeout {
        opt.idle_timeout(idle);
    }
    if let Some(lifetime) = cfg.max_lifetime {
        opt.max_lifetime(lifetime);
    }
    let db = Database::connect(opt).await?;
    info!(max_connections = cfg.max_connections, backend = ?db.get_database_backend(), "database pool ready");
    Ok(db)
}

/// Apply all pending schema migrations.
pub async fn run_migrations(db: &DatabaseConnection) -> anyhow::Result<()> {
    migration::Migrator::up(db, None).await?;
    info!(backend = ?db.get_database_backend(), "schema migrations applied");
    Ok(())
}
