use diesel::dsl::sum;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::SqliteConnection;

use crate::db::get_connection;
use crate::errors::Result;
use crate::schema::{stock_lots, stock_transactions};
use crate::stock::stock_model::{NewStockLot, NewStockTransaction, StockLot, StockTransaction};
use crate::stock::stock_traits::StockRepositoryTrait;

use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

pub struct StockRepository {
    pool: Arc<Pool<ConnectionManager<SqliteConnection>>>,
}

impl StockRepository {
    pub fn new(pool: Arc<Pool<ConnectionManager<SqliteConnection>>>) -> Self {
        StockRepository { pool }
    }
}

impl StockRepositoryTrait for StockRepository {
    /// Lots ordered soonest-expiring first; lots without a best-before date sort last.
    fn load_lots_for_product(&self, product: &str) -> Result<Vec<StockLot>> {
        let mut conn = get_connection(&self.pool)?;
        Ok(stock_lots::table
            .filter(stock_lots::product_id.eq(product))
            .order((
                stock_lots::best_before_date.is_null(),
                stock_lots::best_before_date,
                stock_lots::purchased_at,
            ))
            .load::<StockLot>(&mut conn)?)
    }

    fn insert_lot(&self, mut new_lot: NewStockLot) -> Result<StockLot> {
        let mut conn = get_connection(&self.pool)?;

        new_lot.id = Some(Uuid::new_v4().to_string());

        Ok(diesel::insert_into(stock_lots::table)
            .values(&new_lot)
            .returning(stock_lots::all_columns)
            .get_result(&mut conn)?)
    }

    fn update_lot_amount(&self, lot_id: &str, new_amount: f64) -> Result<StockLot> {
        let mut conn = get_connection(&self.pool)?;

        diesel::update(stock_lots::table.find(lot_id))
            .set(stock_lots::amount.eq(new_amount))
            .execute(&mut conn)?;

        Ok(stock_lots::table.find(lot_id).first(&mut conn)?)
    }

    fn delete_lot(&self, lot_id: &str) -> Result<usize> {
        let mut conn = get_connection(&self.pool)?;
        Ok(diesel::delete(stock_lots::table.find(lot_id)).execute(&mut conn)?)
    }

    fn delete_lots_for_product(&self, product: &str) -> Result<usize> {
        let mut conn = get_connection(&self.pool)?;
        Ok(
            diesel::delete(stock_lots::table.filter(stock_lots::product_id.eq(product)))
                .execute(&mut conn)?,
        )
    }

    fn total_stock(&self, product: &str) -> Result<f64> {
        let mut conn = get_connection(&self.pool)?;
        let total: Option<f64> = stock_lots::table
            .filter(stock_lots::product_id.eq(product))
            .select(sum(stock_lots::amount))
            .first(&mut conn)?;
        Ok(total.unwrap_or(0.0))
    }

    fn aggregate_stock(&self, product_ids: &[String]) -> Result<HashMap<String, f64>> {
        let mut conn = get_connection(&self.pool)?;
        let rows: Vec<(String, Option<f64>)> = stock_lots::table
            .filter(stock_lots::product_id.eq_any(product_ids))
            .group_by(stock_lots::product_id)
            .select((stock_lots::product_id, sum(stock_lots::amount)))
            .load(&mut conn)?;

        Ok(rows
            .into_iter()
            .map(|(product, total)| (product, total.unwrap_or(0.0)))
            .collect())
    }

    fn insert_transaction(&self, mut new_tx: NewStockTransaction) -> Result<StockTransaction> {
        let mut conn = get_connection(&self.pool)?;

        new_tx.id = Some(Uuid::new_v4().to_string());

        Ok(diesel::insert_into(stock_transactions::table)
            .values(&new_tx)
            .returning(stock_transactions::all_columns)
            .get_result(&mut conn)?)
    }
}
