use async_trait::async_trait;
use chrono::{Duration, Local};
use log::{error, info, warn};
use std::sync::Arc;

use crate::errors::Result;
use crate::planner::PlannerServiceTrait;
use crate::products::ProductRepositoryTrait;
use crate::shopping::shopping_constants::{NOTE_AUTO_ADDED, NOTE_BELOW_MINIMUM};
use crate::shopping::shopping_errors::ShoppingError;
use crate::shopping::shopping_model::{
    ImportOutcome, ShoppingListItem, SyncOutcome, TopUpOutcome,
};
use crate::shopping::shopping_traits::{ShoppingRepositoryTrait, ShoppingServiceTrait};
use crate::stock::StockServiceTrait;

/// Keeps the shopping list consistent with demand, current stock, and
/// purchase-to-stock transfers. Batch operations never abort on a single
/// product; they log, skip, and report how many items fully succeeded.
pub struct ShoppingService<T: ShoppingRepositoryTrait, P: ProductRepositoryTrait> {
    shopping_repo: Arc<T>,
    product_repo: Arc<P>,
    stock_service: Arc<dyn StockServiceTrait>,
    planner_service: Arc<dyn PlannerServiceTrait>,
}

impl<T: ShoppingRepositoryTrait, P: ProductRepositoryTrait> ShoppingService<T, P> {
    pub fn new(
        shopping_repo: Arc<T>,
        product_repo: Arc<P>,
        stock_service: Arc<dyn StockServiceTrait>,
        planner_service: Arc<dyn PlannerServiceTrait>,
    ) -> Self {
        ShoppingService {
            shopping_repo,
            product_repo,
            stock_service,
            planner_service,
        }
    }

    fn top_up_product(&self, product_id: &str, needed: f64, note: &str) -> Result<bool> {
        let current_stock = self.stock_service.current_stock(product_id)?;
        let current_cart = self.shopping_repo.open_amount_for_product(product_id)?;

        let shortfall = (needed - current_stock).max(0.0);
        // Partial containers cannot be purchased.
        let target_cart = shortfall.ceil();
        let to_add = (target_cart - current_cart).max(0.0);

        if to_add > 0.0 {
            self.shopping_repo
                .upsert_open_item(product_id, to_add, Some(note))?;
            return Ok(true);
        }

        Ok(false)
    }
}

#[async_trait]
impl<T: ShoppingRepositoryTrait, P: ProductRepositoryTrait> ShoppingServiceTrait
    for ShoppingService<T, P>
{
    /// Monotonic top-up against the current demand snapshot: never removes
    /// cart quantity, and a second call with no state change adds nothing.
    async fn sync_demand_to_cart(&self, days_ahead: i64) -> Result<SyncOutcome> {
        let today = Local::now().date_naive();
        let end_day = today + Duration::days(days_ahead);

        let requirements = self.planner_service.aggregate_requirements(today, end_day)?;

        let mut added = 0;
        for (product_id, needed) in requirements {
            match self.top_up_product(&product_id, needed, NOTE_AUTO_ADDED) {
                Ok(true) => added += 1,
                Ok(false) => {}
                Err(e) => {
                    warn!("Demand sync skipped product {}: {}", product_id, e);
                }
            }
        }

        info!("Demand sync added {} shopping list items", added);
        Ok(SyncOutcome { added })
    }

    async fn add_to_cart(
        &self,
        product_id: &str,
        amount: f64,
        note: Option<&str>,
    ) -> Result<ShoppingListItem> {
        if amount <= 0.0 {
            return Err(ShoppingError::InvalidData(
                "Amount to add must be positive".to_string(),
            )
            .into());
        }

        self.shopping_repo.upsert_open_item(product_id, amount, note)
    }

    async fn import_cart_to_stock(&self) -> Result<ImportOutcome> {
        let items = self.shopping_repo.load_open_items()?;

        let mut imported = 0;
        for item in items {
            // Free-text rows have no catalog backing and stay in the list.
            let product_id = match &item.product_id {
                Some(product_id) => product_id.clone(),
                None => continue,
            };

            let import_result: Result<()> = async {
                let product = self.product_repo.get_product(&product_id)?;
                if product.is_placeholder {
                    return Ok(());
                }

                self.stock_service.restock(&product_id, item.amount).await?;
                self.shopping_repo.delete_item(&item.id)?;
                imported += 1;
                Ok(())
            }
            .await;

            // The failed item stays in the list; the batch moves on.
            if let Err(e) = import_result {
                error!("Failed to import shopping list item {}: {}", item.id, e);
            }
        }

        info!("Imported {} shopping list items to stock", imported);
        Ok(ImportOutcome { imported })
    }

    async fn auto_top_up_below_minimum(&self) -> Result<TopUpOutcome> {
        let products = self.product_repo.load_products()?;
        let product_ids: Vec<String> = products.iter().map(|p| p.id.clone()).collect();
        let stock_by_product = self.stock_service.aggregate_stock_by_product(&product_ids)?;

        let mut added_count = 0;
        for product in products {
            if product.min_stock_amount <= 0.0 || product.is_placeholder {
                continue;
            }

            let current_stock = stock_by_product.get(&product.id).copied().unwrap_or(0.0);
            if current_stock >= product.min_stock_amount {
                continue;
            }

            let top_up_result: Result<bool> = (|| {
                let needed = product.min_stock_amount - current_stock;
                let pending = self.shopping_repo.open_amount_for_product(&product.id)?;
                let to_add = needed - pending;

                if to_add > 0.0 {
                    self.shopping_repo.upsert_open_item(
                        &product.id,
                        to_add,
                        Some(NOTE_BELOW_MINIMUM),
                    )?;
                    return Ok(true);
                }
                Ok(false)
            })();

            match top_up_result {
                Ok(true) => added_count += 1,
                Ok(false) => {}
                Err(e) => {
                    warn!("Minimum stock top-up skipped product {}: {}", product.id, e);
                }
            }
        }

        info!("Minimum stock top-up added {} shopping list items", added_count);
        Ok(TopUpOutcome { added_count })
    }

    async fn mark_done(&self, item_id: &str) -> Result<ShoppingListItem> {
        self.shopping_repo.mark_done(item_id)
    }

    async fn clear_done(&self) -> Result<usize> {
        self.shopping_repo.clear_done()
    }
}
