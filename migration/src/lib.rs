// migration/src/lib.rs
pub use sea_orm_migration::prelude::*;

// マイグレーションモジュール
mod m20240101_000001_create_boilerplate_table;
mod m20240101_000002_add_boilerplate_email_index;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            // 1. テーブル作成
            Box::new(m20240101_000001_create_boilerplate_table::Migration),
            // 2. email のユニークインデックス
            Box::new(m20240101_000002_add_boilerplate_email_index::Migration),
        ]
    }
}
