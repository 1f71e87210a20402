use async_trait::async_trait;
use std::collections::HashMap;

use crate::errors::Result;
use crate::stock::stock_model::{
    ConsumeResult, NewPurchase, NewStockLot, NewStockTransaction, StockLot, StockTransaction,
};

/// Trait for stock ledger repository operations
pub trait StockRepositoryTrait: Send + Sync {
    fn load_lots_for_product(&self, product: &str) -> Result<Vec<StockLot>>;
    fn insert_lot(&self, new_lot: NewStockLot) -> Result<StockLot>;
    fn update_lot_amount(&self, lot_id: &str, new_amount: f64) -> Result<StockLot>;
    fn delete_lot(&self, lot_id: &str) -> Result<usize>;
    fn delete_lots_for_product(&self, product: &str) -> Result<usize>;
    fn total_stock(&self, product: &str) -> Result<f64>;
    fn aggregate_stock(&self, product_ids: &[String]) -> Result<HashMap<String, f64>>;
    fn insert_transaction(&self, new_tx: NewStockTransaction) -> Result<StockTransaction>;
}

/// Trait for stock ledger service operations
#[async_trait]
pub trait StockServiceTrait: Send + Sync {
    async fn purchase(&self, new_purchase: NewPurchase) -> Result<StockLot>;
    async fn consume(&self, product_id: &str, amount: f64) -> Result<ConsumeResult>;
    async fn consume_all(&self, product_id: &str) -> Result<usize>;
    /// Adds to the first existing lot for the product, or opens a new lot.
    /// Used by the cart import, where per-lot traceability is not required.
    async fn restock(&self, product_id: &str, amount: f64) -> Result<()>;
    fn current_stock(&self, product_id: &str) -> Result<f64>;
    fn aggregate_stock_by_product(&self, product_ids: &[String]) -> Result<HashMap<String, f64>>;
}
