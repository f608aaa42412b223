// src/utils/validation.rs

//! 共通バリデーション定数

/// Boilerplate 関連の制約
pub mod boilerplate {
    /// RFC 5321 のアドレス長上限
    pub const EMAIL_MAX_LENGTH: u64 = 320;
    pub const NAME_MAX_LENGTH: u64 = 255;
}

/// ページネーションの制約
pub mod pagination {
    pub const PAGE_MIN: u64 = 1;
}
