use crate::db::{connect_with_config, DatabaseConfig};
use sea_orm::{ConnectionTrait, DatabaseBackend, Statement};
use std::time::Duration;
use anyhow::Result;

#[test]
fn in_memory_pool_is_pinned() {
    let cfg = DatabaseConfig::in_memory();
    assert_eq!(cfg.max_connections, 1);
    assert!(cfg.idle_timeout.is_none());
    assert!(cfg.max_lifetime.is_none());
}

#[test]
fn converts_from_app_config() {
    let app = configs::DatabaseConfig {
        url: "postgres://u:p@localhost/pigs".into(),
        max_connections: 7,
        min_connections: 3,
        connect_timeout_secs: 11,
        ..configs::DatabaseConfig::default()
    };
    let cfg = DatabaseConfig::from(&app);
    assert_eq!(cfg.max_connections, 7);
    assert_eq!(cfg.min_connections, 3);
    assert_eq!(cfg.connect_timeout, Duration::from_secs(11));
    assert_eq!(cfg.idle_timeout, Some(Duration::from_secs(600)));

    let mem = DatabaseConfig::from(&configs::DatabaseConfig {
        url: "sqlite::memory:".into(),
        ..configs::DatabaseConfig::default()
    });
    assert_eq!(mem.max_connections, 1);
}

#[tokio::test]
async fn sqlite_connection_answers_queries() -> Result<()> {
    let db = connect_with_config(&DatabaseConfig::in_memory()).await?;
    assert_eq!(db.get_database_backend(), DatabaseBackend::Sqlite);

    let stmt = Statement::from_string(DatabaseBackend::Sqlite, "SELECT 1 AS test".to_string());
    let row = db.query_one(stmt).await?.expect("one row");
    let value: i32 = row.try_get("", "test")?;
    assert_eq!(value, 1);
    Ok(())
}
