// src/api/dto/boilerplate_dto.rs
use crate::domain::boilerplate_model::{self, BoilerplatePatch};
use crate::domain::boilerplate_sort::BoilerplateSort;
use crate::types::{PageMeta, SortOrder, DEFAULT_PAGE, DEFAULT_PAGE_SIZE};
use crate::utils::validation::{boilerplate, pagination};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

// --- Request DTOs ---

#[derive(Deserialize, Serialize, Debug, Clone, Validate)]
pub struct CreateBoilerplateDto {
    #[validate(
        email(message = "Email must be a valid email address"),
        length(
            max = boilerplate::EMAIL_MAX_LENGTH,
            message = "Email must not exceed 320 characters"
        )
    )]
    pub email: String,

    #[validate(length(
        max = boilerplate::NAME_MAX_LENGTH,
        message = "First name must not exceed 255 characters"
    ))]
    pub first_name: Option<String>,

    #[validate(length(
        max = boilerplate::NAME_MAX_LENGTH,
        message = "Last name must not exceed 255 characters"
    ))]
    pub last_name: Option<String>,
}

/// 部分更新リクエスト。省略または null のフィールドは変更しない。
#[derive(Deserialize, Serialize, Debug, Clone, Default, Validate)]
pub struct UpdateBoilerplateDto {
    #[validate(
        email(message = "Email must be a valid email address"),
        length(
            max = boilerplate::EMAIL_MAX_LENGTH,
            message = "Email must not exceed 320 characters"
        )
    )]
    pub email: Option<String>,

    #[validate(length(
        max = boilerplate::NAME_MAX_LENGTH,
        message = "First name must not exceed 255 characters"
    ))]
    pub first_name: Option<String>,

    #[validate(length(
        max = boilerplate::NAME_MAX_LENGTH,
        message = "Last name must not exceed 255 characters"
    ))]
    pub last_name: Option<String>,
}

impl From<UpdateBoilerplateDto> for BoilerplatePatch {
    fn from(dto: UpdateBoilerplateDto) -> Self {
        Self {
            email: dto.email,
            first_name: dto.first_name,
            last_name: dto.last_name,
        }
    }
}

fn default_page() -> u64 {
    DEFAULT_PAGE
}

fn default_size() -> u64 {
    DEFAULT_PAGE_SIZE
}

/// 一覧取得のクエリパラメータ
#[derive(Deserialize, Serialize, Debug, Clone, Validate)]
pub struct BoilerplatePaginationQuery {
    #[serde(default = "default_page")]
    #[validate(range(min = pagination::PAGE_MIN, message = "Page must be at least 1"))]
    pub page: u64,

    #[serde(default = "default_size")]
    pub size: u64,

    #[serde(default)]
    pub sort: BoilerplateSort,

    #[serde(default)]
    pub order: SortOrder,
}

impl Default for BoilerplatePaginationQuery {
    fn default() -> Self {
        Self {
            page: default_page(),
            size: default_size(),
            sort: BoilerplateSort::default(),
            order: SortOrder::default(),
        }
    }
}

// --- Response DTOs ---

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct BoilerplateDto {
    pub id: i32,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub create_date: DateTime<Utc>,
    pub update_date: DateTime<Utc>,
}

// SeaORM の Model から BoilerplateDto への変換
impl From<boilerplate_model::Model> for BoilerplateDto {
    fn from(model: boilerplate_model::Model) -> Self {
        Self {
            id: model.id,
            email: model.email,
            first_name: model.first_name,
            last_name: model.last_name,
            create_date: model.create_date,
            update_date: model.update_date,
        }
    }
}

/// ページ単位の一覧レスポンス
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct BoilerplatePageDto {
    pub boilerplate: Vec<BoilerplateDto>,
    #[serde(flatten)]
    pub meta: PageMeta,
}
