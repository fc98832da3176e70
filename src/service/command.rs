use crate::{
    abstract_trait::product::{
        repository::{DynProductCommandRepository, DynProductQueryRepository},
        service::ProductCommandServiceTrait,
    },
    domain::{
        requests::product::SaveProductRequest,
        response::{api::ApiResponse, product::ProductResponse},
    },
    errors::ServiceError,
};
use async_trait::async_trait;
use tracing::{error, info};

#[derive(Clone)]
pub struct ProductCommandService {
    pub query: DynProductQueryRepository,
    pub command: DynProductCommandRepository,
}

impl ProductCommandService {
    pub fn new(query: DynProductQueryRepository, command: DynProductCommandRepository) -> Self {
        Self { query, command }
    }
}

#[async_trait]
impl ProductCommandServiceTrait for ProductCommandService {
    async fn create_product(
        &self,
        req: &SaveProductRequest,
    ) -> Result<ApiResponse<ProductResponse>, ServiceError> {
        info!("📦 Creating product: {}", req.name);

        let product = self.command.create_product(req).await.map_err(|e| {
            error!("❌ Failed to create product {}: {e:?}", req.name);
            ServiceError::Repo(e)
        })?;

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Product created successfully".to_string(),
            data: ProductResponse::from(product),
        })
    }

    async fn update_product(
        &self,
        id: i64,
        req: &SaveProductRequest,
    ) -> Result<ApiResponse<ProductResponse>, ServiceError> {
        info!("🔄 Updating product {id}: {}", req.name);

        // Load first so a missing id fails the same way a plain lookup does.
        self.query
            .find_by_id(id)
            .await
            .map_err(ServiceError::Repo)?
            .ok_or(ServiceError::NotFound(id))?;

        let product = self.command.update_product(id, req).await.map_err(|e| {
            error!("❌ Failed to update product {id}: {e:?}");
            ServiceError::Repo(e)
        })?;

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Product updated successfully".to_string(),
            data: ProductResponse::from(product),
        })
    }

    async fn delete_product(&self, id: i64) -> Result<ApiResponse<()>, ServiceError> {
        info!("🗑️ Deleting product {id}");

        // No existence check; deleting a missing id is a no-op.
        self.command.delete_product(id).await.map_err(|e| {
            error!("❌ Failed to delete product {id}: {e:?}");
            ServiceError::Repo(e)
        })?;

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Product deleted successfully".to_string(),
            data: (),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        abstract_trait::product::service::ProductQueryServiceTrait,
        service::{query::ProductQueryService, test_support::InMemoryProductRepository},
    };
    use std::sync::Arc;

    fn services() -> (ProductCommandService, ProductQueryService) {
        let repo = Arc::new(InMemoryProductRepository::new());
        (
            ProductCommandService::new(repo.clone(), repo.clone()),
            ProductQueryService::new(repo),
        )
    }

    fn save_request(name: &str, quantity: i32) -> SaveProductRequest {
        SaveProductRequest {
            name: name.to_string(),
            description: format!("{name} description"),
            price: 19.99,
            image_url: format!("https://cdn.example.com/{quantity}.png"),
            quantity,
        }
    }

    #[tokio::test]
    async fn create_assigns_id_and_copies_all_fields() {
        let (command, _) = services();
        let req = save_request("Blue mug", 7);

        let response = command.create_product(&req).await.unwrap();
        let product = response.data;

        assert!(product.id > 0);
        assert_eq!(product.name, req.name);
        assert_eq!(product.description, req.description);
        assert_eq!(product.price, req.price);
        assert_eq!(product.image_url, req.image_url);
        assert_eq!(product.quantity, req.quantity);
    }

    #[tokio::test]
    async fn created_product_is_retrievable() {
        let (command, query) = services();

        let created = command
            .create_product(&save_request("Blue mug", 7))
            .await
            .unwrap()
            .data;

        let fetched = query.find_by_id(created.id).await.unwrap().data;

        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn update_overwrites_fields_but_keeps_id() {
        let (command, _) = services();

        let created = command
            .create_product(&save_request("Blue mug", 7))
            .await
            .unwrap()
            .data;

        let updated = command
            .update_product(created.id, &save_request("Red mug", 3))
            .await
            .unwrap()
            .data;

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name, "Red mug");
        assert_eq!(updated.quantity, 3);
    }

    #[tokio::test]
    async fn update_of_unknown_id_is_not_found() {
        let (command, _) = services();

        let err = command
            .update_product(99, &save_request("Ghost", 1))
            .await
            .unwrap_err();

        match err {
            ServiceError::NotFound(id) => assert_eq!(id, 99),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn delete_removes_product() {
        let (command, query) = services();

        let created = command
            .create_product(&save_request("Blue mug", 7))
            .await
            .unwrap()
            .data;

        command.delete_product(created.id).await.unwrap();

        let err = query.find_by_id(created.id).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }

    #[tokio::test]
    async fn delete_of_unknown_id_is_a_noop() {
        let (command, _) = services();

        let response = command.delete_product(123).await.unwrap();

        assert_eq!(response.status, "success");
    }
}
