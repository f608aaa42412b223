// src/domain/boilerplate_sort.rs
use crate::domain::boilerplate_model::Column;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 一覧取得でソート可能なカラム
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoilerplateSort {
    #[default]
    Id,
    Email,
    FirstName,
    LastName,
    CreateDate,
    UpdateDate,
}

impl BoilerplateSort {
    pub fn column(self) -> Column {
        match self {
            BoilerplateSort::Id => Column::Id,
            BoilerplateSort::Email => Column::Email,
            BoilerplateSort::FirstName => Column::FirstName,
            BoilerplateSort::LastName => Column::LastName,
            BoilerplateSort::CreateDate => Column::CreateDate,
            BoilerplateSort::UpdateDate => Column::UpdateDate,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BoilerplateSort::Id => "id",
            BoilerplateSort::Email => "email",
            BoilerplateSort::FirstName => "first_name",
            BoilerplateSort::LastName => "last_name",
            BoilerplateSort::CreateDate => "create_date",
            BoilerplateSort::UpdateDate => "update_date",
        }
    }

    /// 同値のソートキー同士は id で順序を確定させる必要があるか
    pub fn needs_tie_breaker(self) -> bool {
        self != BoilerplateSort::Id
    }
}

impl fmt::Display for BoilerplateSort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
