use crate::{
    domain::requests::product::PageRequest, errors::RepositoryError,
    model::product::Product as ProductModel,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynProductQueryRepository = Arc<dyn ProductQueryRepositoryTrait + Send + Sync>;

/// Paged lookups return the window of rows plus the total count reported by
/// the same filtered query.
#[async_trait]
pub trait ProductQueryRepositoryTrait {
    async fn find_all(
        &self,
        page: &PageRequest,
    ) -> Result<(Vec<ProductModel>, i64), RepositoryError>;
    async fn find_by_name_containing(
        &self,
        partial_name: &str,
        page: &PageRequest,
    ) -> Result<(Vec<ProductModel>, i64), RepositoryError>;
    async fn find_by_name_containing_with_min_quantity(
        &self,
        partial_name: &str,
        min_quantity: i32,
        page: &PageRequest,
    ) -> Result<(Vec<ProductModel>, i64), RepositoryError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<ProductModel>, RepositoryError>;
}
