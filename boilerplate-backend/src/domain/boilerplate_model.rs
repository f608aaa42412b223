// src/domain/boilerplate_model.rs
use chrono::Utc;
use sea_orm::entity::prelude::*;
use sea_orm::{ConnectionTrait, DbErr, Set};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "boilerplate")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub email: String,
    #[sea_orm(nullable)]
    pub first_name: Option<String>,
    #[sea_orm(nullable)]
    pub last_name: Option<String>,
    pub create_date: DateTimeUtc,
    pub update_date: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    fn new() -> Self {
        // 作成時は create_date と update_date を同一時刻にそろえる
        let now = Utc::now();
        Self {
            create_date: Set(now),
            update_date: Set(now),
            ..ActiveModelTrait::default()
        }
    }

    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        if !insert {
            // 更新の場合のみ update_date を更新
            self.update_date = Set(Utc::now());
        }
        Ok(self)
    }
}

/// 部分更新の内容。`None` のフィールドは既存の値を保持する。
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BoilerplatePatch {
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl BoilerplatePatch {
    /// 値のあるフィールドだけを ActiveModel に反映し、何か反映したかを返す
    pub fn apply(self, active_model: &mut ActiveModel) -> bool {
        let mut changed = false;

        if let Some(email) = self.email {
            active_model.email = Set(email);
            changed = true;
        }

        if let Some(first_name) = self.first_name {
            active_model.first_name = Set(Some(first_name));
            changed = true;
        }

        if let Some(last_name) = self.last_name {
            active_model.last_name = Set(Some(last_name));
            changed = true;
        }

        changed
    }
}
