use gemini::conf::config_types::DatabaseConfiguration;
use gemini::store::FriendsStore;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};


/// Fresh in-memory store with the schema in place.
///
/// The pool is bounded to one connection so every query sees the same
/// in-memory database.
pub async fn memory_store() -> FriendsStore {
    let config = DatabaseConfiguration {
        url: "sqlite::memory:".to_string(),
        max_connections: Some(1),
        sqlx_logging: false,
    };

    let store = FriendsStore::connect(&config).await.unwrap();
    store.create_schema().await.unwrap();
    store
}

/// Bare in-memory connection with the `friends` table created directly by
/// the `migration` crate.
#[allow(dead_code)]
pub async fn migrated_connection() -> DatabaseConnection {
    let mut opts = ConnectOptions::new("sqlite::memory:");
    opts.max_connections(1).sqlx_logging(false);

    let conn = Database::connect(opts).await.unwrap();
    migration::create_all(&migration::SchemaManager::new(&conn)).await.unwrap();
    conn
}
