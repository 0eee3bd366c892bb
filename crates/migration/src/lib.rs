pub use sea_orm_migration::prelude::*;
pub use sea_orm_migration::sea_orm;

mod m20240101_000001_create_friends_table;



/// Creates every table the service owns.
///
/// Runs the table definitions directly against the schema manager, so no
/// `seaql_migrations` bookkeeping table is written.
pub async fn create_all(manager: &SchemaManager<'_>) -> Result<(), DbErr> {
    m20240101_000001_create_friends_table::Migration.up(manager).await
}

/// Drops every table the service owns.
pub async fn drop_all(manager: &SchemaManager<'_>) -> Result<(), DbErr> {
    m20240101_000001_create_friends_table::Migration.down(manager).await
}
