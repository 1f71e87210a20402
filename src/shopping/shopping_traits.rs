use async_trait::async_trait;

use crate::errors::Result;
use crate::shopping::shopping_model::{
    ImportOutcome, ShoppingListItem, SyncOutcome, TopUpOutcome,
};

/// Trait for shopping list repository operations
pub trait ShoppingRepositoryTrait: Send + Sync {
    fn load_open_items(&self) -> Result<Vec<ShoppingListItem>>;
    fn open_amount_for_product(&self, product: &str) -> Result<f64>;
    /// The one write path for open rows: merges `delta` into the open item
    /// for the product, creating it when absent. Every caller that adds to
    /// the list goes through here, which is what keeps the
    /// one-open-item-per-product invariant from drifting.
    fn upsert_open_item(
        &self,
        product: &str,
        delta: f64,
        note: Option<&str>,
    ) -> Result<ShoppingListItem>;
    fn delete_item(&self, item_id: &str) -> Result<usize>;
    fn mark_done(&self, item_id: &str) -> Result<ShoppingListItem>;
    fn clear_done(&self) -> Result<usize>;
}

/// Trait for cart reconciliation operations
#[async_trait]
pub trait ShoppingServiceTrait: Send + Sync {
    async fn sync_demand_to_cart(&self, days_ahead: i64) -> Result<SyncOutcome>;
    async fn add_to_cart(
        &self,
        product_id: &str,
        amount: f64,
        note: Option<&str>,
    ) -> Result<ShoppingListItem>;
    async fn import_cart_to_stock(&self) -> Result<ImportOutcome>;
    async fn auto_top_up_below_minimum(&self) -> Result<TopUpOutcome>;
    async fn mark_done(&self, item_id: &str) -> Result<ShoppingListItem>;
    async fn clear_done(&self) -> Result<usize>;
}
