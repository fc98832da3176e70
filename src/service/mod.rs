pub mod command;
pub mod query;

pub use self::command::ProductCommandService;
pub use self::query::ProductQueryService;

#[cfg(test)]
pub(crate) mod test_support {
    use crate::{
        abstract_trait::product::repository::{
            ProductCommandRepositoryTrait, ProductQueryRepositoryTrait,
        },
        domain::requests::product::{PageRequest, SaveProductRequest},
        errors::RepositoryError,
        model::product::Product,
    };
    use async_trait::async_trait;
    use std::sync::{
        Mutex,
        atomic::{AtomicI64, Ordering},
    };

    /// Stand-in for the Postgres repositories: a Vec behind a mutex with the
    /// same paging and matching behavior as the SQL (ILIKE, quantity >=,
    /// window count over the filtered set).
    pub struct InMemoryProductRepository {
        products: Mutex<Vec<Product>>,
        next_id: AtomicI64,
    }

    impl InMemoryProductRepository {
        pub fn new() -> Self {
            Self {
                products: Mutex::new(Vec::new()),
                next_id: AtomicI64::new(1),
            }
        }

        pub fn seeded(products: Vec<(&str, i32)>) -> Self {
            let repo = Self::new();
            for (name, quantity) in products {
                let id = repo.next_id.fetch_add(1, Ordering::SeqCst);
                repo.products.lock().unwrap().push(Product {
                    product_id: id,
                    name: name.to_string(),
                    description: format!("{name} description"),
                    price: 1.0,
                    image_url: String::new(),
                    quantity,
                    created_at: None,
                    updated_at: None,
                });
            }
            repo
        }

        fn page_slice(products: Vec<Product>, page: &PageRequest) -> (Vec<Product>, i64) {
            let total = products.len() as i64;
            let offset = ((page.page as i64 - 1).max(0) * page.page_size as i64) as usize;
            let window = products
                .into_iter()
                .skip(offset)
                .take(page.page_size as usize)
                .collect();
            (window, total)
        }
    }

    #[async_trait]
    impl ProductQueryRepositoryTrait for InMemoryProductRepository {
        async fn find_all(
            &self,
            page: &PageRequest,
        ) -> Result<(Vec<Product>, i64), RepositoryError> {
            let products = self.products.lock().unwrap().clone();
            Ok(Self::page_slice(products, page))
        }

        async fn find_by_name_containing(
            &self,
            partial_name: &str,
            page: &PageRequest,
        ) -> Result<(Vec<Product>, i64), RepositoryError> {
            let needle = partial_name.to_lowercase();
            let products = self
                .products
                .lock()
                .unwrap()
                .iter()
                .filter(|p| p.name.to_lowercase().contains(&needle))
                .cloned()
                .collect();
            Ok(Self::page_slice(products, page))
        }

        async fn find_by_name_containing_with_min_quantity(
            &self,
            partial_name: &str,
            min_quantity: i32,
            page: &PageRequest,
        ) -> Result<(Vec<Product>, i64), RepositoryError> {
            let needle = partial_name.to_lowercase();
            let products = self
                .products
                .lock()
                .unwrap()
                .iter()
                .filter(|p| p.name.to_lowercase().contains(&needle) && p.quantity >= min_quantity)
                .cloned()
                .collect();
            Ok(Self::page_slice(products, page))
        }

        async fn find_by_id(&self, id: i64) -> Result<Option<Product>, RepositoryError> {
            let found = self
                .products
                .lock()
                .unwrap()
                .iter()
                .find(|p| p.product_id == id)
                .cloned();
            Ok(found)
        }
    }

    #[async_trait]
    impl ProductCommandRepositoryTrait for InMemoryProductRepository {
        async fn create_product(
            &self,
            req: &SaveProductRequest,
        ) -> Result<Product, RepositoryError> {
            let id = self.next_id.fetch_add(1, Ordering::SeqCst);
            let product = Product {
                product_id: id,
                name: req.name.clone(),
                description: req.description.clone(),
                price: req.price,
                image_url: req.image_url.clone(),
                quantity: req.quantity,
                created_at: None,
                updated_at: None,
            };
            self.products.lock().unwrap().push(product.clone());
            Ok(product)
        }

        async fn update_product(
            &self,
            id: i64,
            req: &SaveProductRequest,
        ) -> Result<Product, RepositoryError> {
            let mut products = self.products.lock().unwrap();
            let product = products
                .iter_mut()
                .find(|p| p.product_id == id)
                .ok_or(RepositoryError::NotFound)?;

            product.name = req.name.clone();
            product.description = req.description.clone();
            product.price = req.price;
            product.image_url = req.image_url.clone();
            product.quantity = req.quantity;

            Ok(product.clone())
        }

        async fn delete_product(&self, id: i64) -> Result<(), RepositoryError> {
            self.products.lock().unwrap().retain(|p| p.product_id != id);
            Ok(())
        }
    }
}
