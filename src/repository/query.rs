use crate::{
    abstract_trait::product::repository::ProductQueryRepositoryTrait,
    config::ConnectionPool,
    domain::requests::product::PageRequest,
    errors::RepositoryError,
    model::product::Product as ProductModel,
};
use async_trait::async_trait;
use chrono::NaiveDateTime;
use sqlx::FromRow;
use tracing::{error, info};

#[derive(Clone)]
pub struct ProductQueryRepository {
    db: ConnectionPool,
}

impl ProductQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

/// Row shape for paged listings. total_count is the window-function count over
/// the filtered set, repeated on every row.
#[derive(FromRow)]
struct ProductPageRow {
    product_id: i64,
    name: String,
    description: String,
    price: f64,
    image_url: String,
    quantity: i32,
    created_at: Option<NaiveDateTime>,
    updated_at: Option<NaiveDateTime>,
    total_count: i64,
}

impl ProductPageRow {
    fn into_parts(rows: Vec<Self>) -> (Vec<ProductModel>, i64) {
        let total = rows.first().map(|r| r.total_count).unwrap_or(0);

        let products = rows
            .into_iter()
            .map(|r| ProductModel {
                product_id: r.product_id,
                name: r.name,
                description: r.description,
                price: r.price,
                image_url: r.image_url,
                quantity: r.quantity,
                created_at: r.created_at,
                updated_at: r.updated_at,
            })
            .collect();

        (products, total)
    }
}

fn page_window(page: &PageRequest) -> (i64, i64) {
    let limit = page.page_size as i64;
    let offset = (page.page as i64 - 1).max(0) * page.page_size as i64;
    (limit, offset)
}

#[async_trait]
impl ProductQueryRepositoryTrait for ProductQueryRepository {
    async fn find_all(
        &self,
        page: &PageRequest,
    ) -> Result<(Vec<ProductModel>, i64), RepositoryError> {
        info!(
            "🔍 Fetching all products | page: {}, size: {}",
            page.page, page.page_size
        );

        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {:?}", e);
            RepositoryError::from(e)
        })?;

        let (limit, offset) = page_window(page);

        let rows = sqlx::query_as::<_, ProductPageRow>(
            r#"
            SELECT
                product_id,
                name,
                description,
                price,
                image_url,
                quantity,
                created_at,
                updated_at,
                COUNT(*) OVER() AS total_count
            FROM products
            ORDER BY product_id
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch products: {:?}", e);
            RepositoryError::from(e)
        })?;

        let (products, total) = ProductPageRow::into_parts(rows);

        // A window past the last row carries no window count; re-count so the
        // reported total still reflects the whole set.
        let total = if total == 0 {
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM products")
                .fetch_one(&mut *conn)
                .await
                .map_err(RepositoryError::from)?
        } else {
            total
        };

        Ok((products, total))
    }

    async fn find_by_name_containing(
        &self,
        partial_name: &str,
        page: &PageRequest,
    ) -> Result<(Vec<ProductModel>, i64), RepositoryError> {
        info!(
            "🔍 Fetching products by name fragment '{}' | page: {}, size: {}",
            partial_name, page.page, page.page_size
        );

        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {:?}", e);
            RepositoryError::from(e)
        })?;

        let (limit, offset) = page_window(page);

        let rows = sqlx::query_as::<_, ProductPageRow>(
            r#"
            SELECT
                product_id,
                name,
                description,
                price,
                image_url,
                quantity,
                created_at,
                updated_at,
                COUNT(*) OVER() AS total_count
            FROM products
            WHERE name ILIKE '%' || $1 || '%'
            ORDER BY product_id
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(partial_name)
        .bind(limit)
        .bind(offset)
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch products by name: {:?}", e);
            RepositoryError::from(e)
        })?;

        let (products, total) = ProductPageRow::into_parts(rows);

        let total = if total == 0 {
            sqlx::query_scalar::<_, i64>(
                "SELECT COUNT(*) FROM products WHERE name ILIKE '%' || $1 || '%'",
            )
            .bind(partial_name)
            .fetch_one(&mut *conn)
            .await
            .map_err(RepositoryError::from)?
        } else {
            total
        };

        Ok((products, total))
    }

    async fn find_by_name_containing_with_min_quantity(
        &self,
        partial_name: &str,
        min_quantity: i32,
        page: &PageRequest,
    ) -> Result<(Vec<ProductModel>, i64), RepositoryError> {
        info!(
            "🔍 Fetching products by name fragment '{}' with quantity >= {} | page: {}, size: {}",
            partial_name, min_quantity, page.page, page.page_size
        );

        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {:?}", e);
            RepositoryError::from(e)
        })?;

        let (limit, offset) = page_window(page);

        let rows = sqlx::query_as::<_, ProductPageRow>(
            r#"
            SELECT
                product_id,
                name,
                description,
                price,
                image_url,
                quantity,
                created_at,
                updated_at,
                COUNT(*) OVER() AS total_count
            FROM products
            WHERE name ILIKE '%' || $1 || '%'
              AND quantity >= $2
            ORDER BY product_id
            LIMIT $3 OFFSET $4
            "#,
        )
        .bind(partial_name)
        .bind(min_quantity)
        .bind(limit)
        .bind(offset)
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch products by name and quantity: {:?}", e);
            RepositoryError::from(e)
        })?;

        let (products, total) = ProductPageRow::into_parts(rows);

        let total = if total == 0 {
            sqlx::query_scalar::<_, i64>(
                "SELECT COUNT(*) FROM products WHERE name ILIKE '%' || $1 || '%' AND quantity >= $2",
            )
            .bind(partial_name)
            .bind(min_quantity)
            .fetch_one(&mut *conn)
            .await
            .map_err(RepositoryError::from)?
        } else {
            total
        };

        Ok((products, total))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<ProductModel>, RepositoryError> {
        info!("🆔 Fetching product by ID: {}", id);

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query_as::<_, ProductModel>(
            r#"
            SELECT
                product_id,
                name,
                description,
                price,
                image_url,
                quantity,
                created_at,
                updated_at
            FROM products
            WHERE product_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_window_computes_limit_and_offset() {
        let (limit, offset) = page_window(&PageRequest {
            page: 3,
            page_size: 20,
        });

        assert_eq!(limit, 20);
        assert_eq!(offset, 40);
    }

    #[test]
    fn page_window_clamps_non_positive_pages() {
        let (_, offset) = page_window(&PageRequest {
            page: 0,
            page_size: 10,
        });

        assert_eq!(offset, 0);
    }

    #[test]
    fn page_window_handles_huge_page_numbers() {
        let (limit, offset) = page_window(&PageRequest {
            page: i32::MAX,
            page_size: 100,
        });

        assert_eq!(limit, 100);
        assert_eq!(offset, (i32::MAX as i64 - 1) * 100);
    }
}
