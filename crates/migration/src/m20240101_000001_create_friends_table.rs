use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // user1 > user2 is a write-path contract of the store, not a CHECK constraint
        manager
            .create_table(
                Table::create()
                    .table(Friends::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Friends::User1).big_integer().not_null())
                    .col(ColumnDef::new(Friends::User2).big_integer().not_null())
                    .primary_key(
                        Index::create()
                            .name("pk-friends")
                            .col(Friends::User1)
                            .col(Friends::User2),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Friends::Table).if_exists().to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Friends {
    Table,
    #[sea_orm(iden = "user1")]
    User1,
    #[sea_orm(iden = "user2")]
    User2,
}
