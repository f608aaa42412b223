// src/service/boilerplate_service.rs

use crate::api::dto::boilerplate_dto::{
    BoilerplateDto, BoilerplatePageDto, BoilerplatePaginationQuery, CreateBoilerplateDto,
    UpdateBoilerplateDto,
};
use crate::db::DbPool;
use crate::domain::boilerplate_model::BoilerplatePatch;
use crate::error::{AppError, AppResult};
use crate::repository::boilerplate_repository::{BoilerplateRepository, PageWindow};
use crate::types::{pagination, PageMeta};
use sea_orm::{DbErr, SqlErr};
use std::sync::Arc;
use tracing::{debug, info, warn};

pub struct BoilerplateService {
    repo: Arc<BoilerplateRepository>,
}

impl BoilerplateService {
    pub fn new(db_pool: DbPool) -> Self {
        Self {
            repo: Arc::new(BoilerplateRepository::new(db_pool)),
        }
    }

    pub async fn get_boilerplate(&self, id: i32) -> AppResult<BoilerplateDto> {
        let boilerplate = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))?;
        Ok(boilerplate.into())
    }

    pub async fn list_boilerplate(
        &self,
        query: BoilerplatePaginationQuery,
    ) -> AppResult<BoilerplatePageDto> {
        let window = PageWindow {
            offset: pagination::offset(query.page, query.size),
            limit: query.size.min(pagination::MAX_SQL_WINDOW),
            sort: query.sort,
            order: query.order,
        };

        let (items, total) = self.repo.find_page(window).await?;

        Ok(BoilerplatePageDto {
            boilerplate: items.into_iter().map(Into::into).collect(),
            meta: PageMeta::new(query.page, query.size, total),
        })
    }

    pub async fn create_boilerplate(
        &self,
        payload: CreateBoilerplateDto,
    ) -> AppResult<BoilerplateDto> {
        let email = payload.email.clone();

        match self.repo.create(payload).await {
            Ok(created) => {
                info!(boilerplate_id = created.id, "Boilerplate created");
                Ok(created.into())
            }
            Err(e) if is_unique_violation(&e) => {
                warn!("Boilerplate email already exists");
                debug!(email = %email, "Rejected duplicate email on create");
                Err(already_exists(&email))
            }
            Err(e) => Err(e.into()),
        }
    }

    pub async fn update_boilerplate(
        &self,
        id: i32,
        payload: UpdateBoilerplateDto,
    ) -> AppResult<BoilerplateDto> {
        let patch = BoilerplatePatch::from(payload);
        let email = patch.email.clone();

        match self.repo.update(id, patch).await {
            Ok(Some(updated)) => {
                info!(boilerplate_id = id, "Boilerplate updated");
                Ok(updated.into())
            }
            Ok(None) => Err(not_found(id)),
            Err(e) if is_unique_violation(&e) => {
                // 一意制約違反を起こしうるのは email だけ
                let email = email.unwrap_or_default();
                warn!(boilerplate_id = id, "Boilerplate email already exists");
                debug!(boilerplate_id = id, email = %email, "Rejected duplicate email on update");
                Err(already_exists(&email))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// 削除できたかどうかを返す。存在しない場合はエラーではなく false。
    pub async fn delete_boilerplate(&self, id: i32) -> AppResult<bool> {
        let result = self.repo.delete(id).await?;
        let deleted = result.rows_affected > 0;

        if deleted {
            info!(boilerplate_id = id, "Boilerplate deleted");
        }
        Ok(deleted)
    }
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Boilerplate '{}' not found", id))
}

fn already_exists(email: &str) -> AppError {
    AppError::Conflict(format!("Boilerplate '{}' already exists", email))
}

fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}
