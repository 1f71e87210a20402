pub(crate) mod products_errors;
pub(crate) mod products_model;
pub(crate) mod products_repository;
pub(crate) mod products_traits;

pub use products_errors::ProductError;
pub use products_model::{NewProduct, Product};
pub use products_repository::ProductRepository;
pub use products_traits::ProductRepositoryTrait;

pub type Result<T> = std::result::Result<T, ProductError>;
