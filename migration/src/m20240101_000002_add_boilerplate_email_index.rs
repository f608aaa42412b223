use sea_orm_migration::prelude::*;

use crate::m20240101_000001_create_boilerplate_table::Boilerplate;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // email は全レコードで一意（大文字小文字は区別する）
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .table(Boilerplate::Table)
                    .name("idx_boilerplate_email")
                    .col(Boilerplate::Email)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .if_exists()
                    .table(Boilerplate::Table)
                    .name("idx_boilerplate_email")
                    .to_owned(),
            )
            .await
    }
}
