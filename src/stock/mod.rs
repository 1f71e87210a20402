pub(crate) mod stock_constants;
pub(crate) mod stock_errors;
pub(crate) mod stock_model;
pub(crate) mod stock_repository;
pub(crate) mod stock_service;
pub(crate) mod stock_traits;


pub use stock_constants::*;
pub use stock_errors::StockError;
pub use stock_model::{
    ConsumeResult, NewPurchase, NewStockLot, NewStockTransaction, StockLot, StockTransaction,
};
pub use stock_repository::StockRepository;
pub use stock_service::StockService;
pub use stock_traits::{StockRepositoryTrait, StockServiceTrait};

pub type Result<T> = std::result::Result<T, StockError>;
