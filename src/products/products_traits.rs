use crate::errors::Result;
use crate::products::products_model::{NewProduct, Product};

/// Trait for product catalog repository operations
pub trait ProductRepositoryTrait: Send + Sync {
    fn get_product(&self, product_id: &str) -> Result<Product>;
    fn load_products(&self) -> Result<Vec<Product>>;
    fn insert_new_product(&self, new_product: NewProduct) -> Result<Product>;
    fn update_product(&self, product_update: Product) -> Result<Product>;
}
