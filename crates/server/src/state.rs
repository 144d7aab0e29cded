use sea_orm::DatabaseConnection;

/// Shared handler state. The connection is a pool; every statement checks out
/// its own connection and hands it back when done.
#[derive(Clone)]
pub struct ServerState {
    pub db: DatabaseConnection,
}
