pub mod api;
pub mod pagination;
pub mod product;

pub use self::api::{ApiResponse, ApiResponsePagination};
pub use self::pagination::Pagination;
pub use self::product::ProductResponse;
