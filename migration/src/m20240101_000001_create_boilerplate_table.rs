use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Boilerplate::Table)
                    .if_not_exists() // テーブルが存在しない場合のみ作成
                    .col(
                        ColumnDef::new(Boilerplate::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Boilerplate::Email).string().not_null())
                    .col(ColumnDef::new(Boilerplate::FirstName).string())
                    .col(ColumnDef::new(Boilerplate::LastName).string())
                    .col(
                        ColumnDef::new(Boilerplate::CreateDate)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()), // DEFAULT NOW()
                    )
                    .col(
                        ColumnDef::new(Boilerplate::UpdateDate)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()), // DEFAULT NOW()
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Boilerplate::Table).to_owned())
            .await
    }
}

/// Iden Enum for the 'boilerplate' table and its columns
#[derive(DeriveIden)]
pub(crate) enum Boilerplate {
    Table,
    Id,
    Email,
    FirstName,
    LastName,
    CreateDate,
    UpdateDate,
}
