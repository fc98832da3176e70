pub mod product;

pub use self::product::Product;
