pub mod product;

pub use self::product::{FindAllProducts, GetProductsRequest, PageRequest, SaveProductRequest};
