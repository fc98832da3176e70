use crate::{
    abstract_trait::product::{
        repository::DynProductQueryRepository, service::ProductQueryServiceTrait,
    },
    domain::{
        requests::product::{GetProductsRequest, PageRequest},
        response::{
            api::{ApiResponse, ApiResponsePagination},
            pagination::Pagination,
            product::ProductResponse,
        },
    },
    errors::ServiceError,
};
use async_trait::async_trait;
use tracing::{error, info};

#[derive(Clone)]
pub struct ProductQueryService {
    pub query: DynProductQueryRepository,
}

impl ProductQueryService {
    pub fn new(query: DynProductQueryRepository) -> Self {
        Self { query }
    }
}

#[async_trait]
impl ProductQueryServiceTrait for ProductQueryService {
    async fn find_all(
        &self,
        filter: Option<&GetProductsRequest>,
        page: &PageRequest,
    ) -> Result<ApiResponsePagination<Vec<ProductResponse>>, ServiceError> {
        info!(
            "🔍 Finding products | Page: {}, Size: {}, Filter: {:?}",
            page.page, page.page_size, filter
        );

        let page_num = if page.page > 0 { page.page } else { 1 };
        let page_size = if page.page_size > 0 { page.page_size } else { 10 };
        let window = PageRequest {
            page: page_num,
            page_size,
        };

        // Decision table, first match wins:
        //   partial_name + min_quantity -> combined filter
        //   partial_name only           -> name filter
        //   anything else               -> unfiltered
        // min_quantity without partial_name is NOT a standalone filter.
        let result = match filter {
            Some(req) => match (req.partial_name.as_deref(), req.min_quantity) {
                (Some(partial_name), Some(min_quantity)) => {
                    self.query
                        .find_by_name_containing_with_min_quantity(
                            partial_name,
                            min_quantity,
                            &window,
                        )
                        .await
                }
                (Some(partial_name), None) => {
                    self.query.find_by_name_containing(partial_name, &window).await
                }
                (None, _) => self.query.find_all(&window).await,
            },
            None => self.query.find_all(&window).await,
        };

        let (products, total) = result.map_err(|e| {
            error!("❌ Failed to fetch products: {e:?}");
            ServiceError::Repo(e)
        })?;

        let data: Vec<ProductResponse> = products.into_iter().map(ProductResponse::from).collect();
        let total_pages = if total == 0 {
            0
        } else {
            ((total - 1) / page_size as i64) + 1
        };

        let pagination = Pagination {
            page: page_num,
            page_size,
            total_items: total,
            total_pages,
        };

        info!("✅ Found {} products (total: {total})", data.len());

        Ok(ApiResponsePagination {
            status: "success".to_string(),
            message: "Products retrieved successfully".to_string(),
            data,
            pagination,
        })
    }

    async fn find_by_id(&self, id: i64) -> Result<ApiResponse<ProductResponse>, ServiceError> {
        info!("🆔 Finding product by ID: {id}");

        let product = self
            .query
            .find_by_id(id)
            .await
            .map_err(|e| {
                error!("❌ Failed to fetch product {id}: {e:?}");
                ServiceError::Repo(e)
            })?
            .ok_or(ServiceError::NotFound(id))?;

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Product retrieved successfully".to_string(),
            data: ProductResponse::from(product),
        })
    }
}
