use migration::sea_orm::{ConnectOptions, Database, DatabaseConnection};
use migration::{create_all, drop_all, SchemaManager};


async fn memory_db() -> DatabaseConnection {
    let mut opts = ConnectOptions::new("sqlite::memory:");
    opts.max_connections(1).sqlx_logging(false);
    Database::connect(opts).await.unwrap()
}

#[tokio::test]
async fn create_all_is_idempotent() {
    let conn = memory_db().await;
    let manager = SchemaManager::new(&conn);

    create_all(&manager).await.unwrap();
    create_all(&manager).await.unwrap();

    assert!(manager.has_table("friends").await.unwrap());
}

#[tokio::test]
async fn drop_all_is_idempotent() {
    let conn = memory_db().await;
    let manager = SchemaManager::new(&conn);

    create_all(&manager).await.unwrap();
    drop_all(&manager).await.unwrap();
    drop_all(&manager).await.unwrap();

    assert!(!manager.has_table("friends").await.unwrap());
}

#[tokio::test]
async fn no_migration_history_is_recorded() {
    let conn = memory_db().await;
    let manager = SchemaManager::new(&conn);

    create_all(&manager).await.unwrap();

    assert!(!manager.has_table("seaql_migrations").await.unwrap());
}
