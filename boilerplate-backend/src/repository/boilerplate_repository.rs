// src/repository/boilerplate_repository.rs
use crate::api::dto::boilerplate_dto::CreateBoilerplateDto;
use crate::domain::boilerplate_model::{
    self, ActiveModel as BoilerplateActiveModel, BoilerplatePatch, Entity as BoilerplateEntity,
};
use crate::domain::boilerplate_sort::BoilerplateSort;
use crate::types::SortOrder;
use sea_orm::{entity::*, query::*, DbConn, DbErr, DeleteResult, Order, Set};
use sea_orm::{
    AccessMode, IsolationLevel, PaginatorTrait, QueryOrder, QuerySelect, TransactionTrait,
};

/// 一覧取得の条件
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub offset: u64,
    pub limit: u64,
    pub sort: BoilerplateSort,
    pub order: SortOrder,
}

pub struct BoilerplateRepository {
    db: DbConn,
}

impl BoilerplateRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<boilerplate_model::Model>, DbErr> {
        BoilerplateEntity::find_by_id(id).one(&self.db).await
    }

    /// ソート済みの一覧から指定範囲を取得し、全件数と合わせて返す
    pub async fn find_page(
        &self,
        window: PageWindow,
    ) -> Result<(Vec<boilerplate_model::Model>, u64), DbErr> {
        // REPEATABLE READ で件数と一覧を同じスナップショットから読む
        let txn = self
            .db
            .begin_with_config(
                Some(IsolationLevel::RepeatableRead),
                Some(AccessMode::ReadOnly),
            )
            .await?;

        let total = BoilerplateEntity::find().count(&txn).await?;

        if window.limit == 0 {
            txn.commit().await?;
            return Ok((Vec::new(), total));
        }

        let order: Order = window.order.into();
        let mut query = BoilerplateEntity::find().order_by(window.sort.column(), order.clone());
        if window.sort.needs_tie_breaker() {
            query = query.order_by(boilerplate_model::Column::Id, order);
        }

        let items = query
            .offset(window.offset)
            .limit(window.limit)
            .all(&txn)
            .await?;

        txn.commit().await?;

        Ok((items, total))
    }

    pub async fn create(
        &self,
        payload: CreateBoilerplateDto,
    ) -> Result<boilerplate_model::Model, DbErr> {
        let txn = self.db.begin().await?;

        let new_boilerplate = BoilerplateActiveModel {
            email: Set(payload.email),
            first_name: Set(payload.first_name),
            last_name: Set(payload.last_name),
            ..Default::default()
        };

        // 一意制約違反などで失敗した場合、txn は commit されずに drop され rollback される
        let model = new_boilerplate.insert(&txn).await?;
        txn.commit().await?;

        Ok(model)
    }

    pub async fn update(
        &self,
        id: i32,
        patch: BoilerplatePatch,
    ) -> Result<Option<boilerplate_model::Model>, DbErr> {
        let txn = self.db.begin().await?;

        // 行ロックを取り、更新までの間に削除されないようにする
        let boilerplate = match BoilerplateEntity::find_by_id(id)
            .lock_exclusive()
            .one(&txn)
            .await?
        {
            Some(b) => b,
            None => return Ok(None),
        };

        let mut active_model: BoilerplateActiveModel = boilerplate.clone().into();

        if !patch.apply(&mut active_model) {
            // 何も変更がなければ元のレコードを返す (update_date は更新されない)
            txn.commit().await?;
            return Ok(Some(boilerplate));
        }

        let updated = match active_model.update(&txn).await {
            Ok(updated) => updated,
            // 対象行が 0 件なら存在しないものとして扱う
            Err(DbErr::RecordNotUpdated) => return Ok(None),
            Err(e) => return Err(e),
        };
        txn.commit().await?;

        Ok(Some(updated))
    }

    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        let txn = self.db.begin().await?;
        let result = BoilerplateEntity::delete_by_id(id).exec(&txn).await?;
        txn.commit().await?;
        Ok(result)
    }
}
