// src/types/pagination.rs

use serde::{Deserialize, Serialize};

/// デフォルトページ番号 (1始まり)
pub const DEFAULT_PAGE: u64 = 1;

/// デフォルトページサイズ
pub const DEFAULT_PAGE_SIZE: u64 = 50;

/// ページネーション情報
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    pub page: u64,
    pub size: u64,
    pub total: u64,
    pub pages: u64,
}

impl PageMeta {
    /// `size == 0` のときは 0 除算を避けるため pages を 1 と定める
    pub fn new(page: u64, size: u64, total: u64) -> Self {
        let pages = if size == 0 { 1 } else { total.div_ceil(size) };

        Self {
            page,
            size,
            total,
            pages,
        }
    }
}

/// PostgreSQL の LIMIT / OFFSET は bigint
pub const MAX_SQL_WINDOW: u64 = i64::MAX as u64;

/// 1始まりのページ番号とページサイズからオフセットを計算
pub fn offset(page: u64, size: u64) -> u64 {
    page.saturating_sub(1)
        .saturating_mul(size)
        .min(MAX_SQL_WINDOW)
}
