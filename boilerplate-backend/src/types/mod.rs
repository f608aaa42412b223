pub mod pagination;
pub mod query;

pub use pagination::{PageMeta, DEFAULT_PAGE, DEFAULT_PAGE_SIZE};
pub use query::SortOrder;
