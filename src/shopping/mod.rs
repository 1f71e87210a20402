pub(crate) mod shopping_constants;
pub(crate) mod shopping_errors;
pub(crate) mod shopping_model;
pub(crate) mod shopping_repository;
pub(crate) mod shopping_service;
pub(crate) mod shopping_traits;


pub use shopping_constants::*;
pub use shopping_errors::ShoppingError;
pub use shopping_model::{
    ImportOutcome, NewShoppingListItem, ShoppingListItem, SyncOutcome, TopUpOutcome,
};
pub use shopping_repository::ShoppingRepository;
pub use shopping_service::ShoppingService;
pub use shopping_traits::{ShoppingRepositoryTrait, ShoppingServiceTrait};

pub type Result<T> = std::result::Result<T, ShoppingError>;
