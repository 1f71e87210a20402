use async_trait::async_trait;
use chrono::{Duration, Local};
use log::debug;
use std::collections::HashMap;
use std::sync::Arc;

use crate::errors::Result;
use crate::products::ProductRepositoryTrait;
use crate::stock::stock_constants::{
    TRANSACTION_TYPE_CONSUME, TRANSACTION_TYPE_INVENTORY_CORRECTION, TRANSACTION_TYPE_PURCHASE,
};
use crate::stock::stock_errors::StockError;
use crate::stock::stock_model::{
    ConsumeResult, NewPurchase, NewStockLot, NewStockTransaction, StockLot,
};
use crate::stock::stock_traits::{StockRepositoryTrait, StockServiceTrait};

/// Keeps per-product stock non-negative and lot-granular, and appends every
/// movement to the stock transaction log.
pub struct StockService<T: StockRepositoryTrait, P: ProductRepositoryTrait> {
    stock_repo: Arc<T>,
    product_repo: Arc<P>,
}

impl<T: StockRepositoryTrait, P: ProductRepositoryTrait> StockService<T, P> {
    pub fn new(stock_repo: Arc<T>, product_repo: Arc<P>) -> Self {
        StockService {
            stock_repo,
            product_repo,
        }
    }

    fn new_lot_for_product(&self, product_id: &str, amount: f64) -> Result<NewStockLot> {
        let product = self.product_repo.get_product(product_id)?;

        // A zero default means the product declares no shelf life.
        let best_before_date = if product.default_best_before_days > 0 {
            Some(Local::now().date_naive() + Duration::days(product.default_best_before_days as i64))
        } else {
            None
        };

        Ok(NewStockLot {
            id: None,
            product_id: product_id.to_string(),
            amount,
            best_before_date,
            location_id: None,
        })
    }

    fn log_transaction(&self, product_id: &str, amount: f64, transaction_type: &str) -> Result<()> {
        self.stock_repo.insert_transaction(NewStockTransaction {
            id: None,
            product_id: product_id.to_string(),
            amount,
            transaction_type: transaction_type.to_string(),
        })?;
        Ok(())
    }
}

#[async_trait]
impl<T: StockRepositoryTrait, P: ProductRepositoryTrait> StockServiceTrait for StockService<T, P> {
    async fn purchase(&self, new_purchase: NewPurchase) -> Result<StockLot> {
        new_purchase.validate().map_err(crate::errors::Error::from)?;

        let mut new_lot =
            self.new_lot_for_product(&new_purchase.product_id, new_purchase.amount)?;
        new_lot.location_id = new_purchase.location_id.clone();

        let lot = self.stock_repo.insert_lot(new_lot)?;
        self.log_transaction(
            &new_purchase.product_id,
            new_purchase.amount,
            TRANSACTION_TYPE_PURCHASE,
        )?;

        Ok(lot)
    }

    async fn consume(&self, product_id: &str, amount: f64) -> Result<ConsumeResult> {
        if amount <= 0.0 {
            return Err(StockError::InvalidData(
                "Consume amount must be positive".to_string(),
            )
            .into());
        }

        let lots = self.stock_repo.load_lots_for_product(product_id)?;
        if lots.is_empty() {
            return Err(StockError::NoStockAvailable(product_id.to_string()).into());
        }

        // Drain soonest-expiring lots first; stop when satisfied or out of
        // lots. Under-delivery is reported through `consumed`, not raised.
        let mut remaining = amount;
        for lot in lots {
            if remaining <= 0.0 {
                break;
            }
            let take = remaining.min(lot.amount);
            if take >= lot.amount {
                self.stock_repo.delete_lot(&lot.id)?;
            } else {
                self.stock_repo.update_lot_amount(&lot.id, lot.amount - take)?;
            }
            remaining -= take;
        }

        let consumed = amount - remaining.max(0.0);
        if consumed > 0.0 {
            self.log_transaction(product_id, consumed, TRANSACTION_TYPE_CONSUME)?;
        }

        debug!(
            "Consumed {} of {} requested for product {}",
            consumed, amount, product_id
        );

        Ok(ConsumeResult { consumed })
    }

    async fn consume_all(&self, product_id: &str) -> Result<usize> {
        let total = self.stock_repo.total_stock(product_id)?;
        let deleted = self.stock_repo.delete_lots_for_product(product_id)?;

        if deleted > 0 {
            self.log_transaction(product_id, total, TRANSACTION_TYPE_INVENTORY_CORRECTION)?;
        }

        Ok(deleted)
    }

    async fn restock(&self, product_id: &str, amount: f64) -> Result<()> {
        let lots = self.stock_repo.load_lots_for_product(product_id)?;

        match lots.first() {
            Some(lot) => {
                self.stock_repo
                    .update_lot_amount(&lot.id, lot.amount + amount)?;
            }
            None => {
                let new_lot = self.new_lot_for_product(product_id, amount)?;
                self.stock_repo.insert_lot(new_lot)?;
            }
        }

        self.log_transaction(product_id, amount, TRANSACTION_TYPE_PURCHASE)?;
        Ok(())
    }

    fn current_stock(&self, product_id: &str) -> Result<f64> {
        self.stock_repo.total_stock(product_id)
    }

    fn aggregate_stock_by_product(&self, product_ids: &[String]) -> Result<HashMap<String, f64>> {
        self.stock_repo.aggregate_stock(product_ids)
    }
}
