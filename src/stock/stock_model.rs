use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;
use diesel::Queryable;
use diesel::Selectable;
use serde::{Deserialize, Serialize};

use crate::products::Product;

/// A single stock-addition event for a product. Distinct purchases stay
/// distinct lots so consumption can drain the soonest-expiring one first.
#[derive(
    Queryable,
    Identifiable,
    Associations,
    AsChangeset,
    Selectable,
    PartialEq,
    Serialize,
    Deserialize,
    Debug,
    Clone,
)]
#[diesel(table_name = crate::schema::stock_lots)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[diesel(belongs_to(Product))]
#[serde(rename_all = "camelCase")]
pub struct StockLot {
    pub id: String,
    pub product_id: String,
    pub amount: f64,
    pub best_before_date: Option<NaiveDate>,
    pub location_id: Option<String>,
    pub purchased_at: NaiveDateTime,
}

#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::stock_lots)]
#[serde(rename_all = "camelCase")]
pub struct NewStockLot {
    pub id: Option<String>,
    pub product_id: String,
    pub amount: f64,
    pub best_before_date: Option<NaiveDate>,
    pub location_id: Option<String>,
}

/// Input model for a purchase event
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewPurchase {
    pub product_id: String,
    pub amount: f64,
    pub location_id: Option<String>,
}

impl NewPurchase {
    pub fn validate(&self) -> crate::stock::Result<()> {
        if self.product_id.trim().is_empty() {
            return Err(crate::stock::StockError::InvalidData(
                "Product ID cannot be empty".to_string(),
            ));
        }
        if self.amount <= 0.0 {
            return Err(crate::stock::StockError::InvalidData(
                "Purchase amount must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// Outcome of a consume call. `consumed` may be less than requested when
/// stock ran out; that is reported, not raised.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ConsumeResult {
    pub consumed: f64,
}

/// Immutable record in the append-only stock movement log
#[derive(
    Queryable, Identifiable, Selectable, PartialEq, Serialize, Deserialize, Debug, Clone,
)]
#[diesel(table_name = crate::schema::stock_transactions)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct StockTransaction {
    pub id: String,
    pub product_id: String,
    pub amount: f64,
    pub transaction_type: String,
    pub logged_at: NaiveDateTime,
}

#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::stock_transactions)]
#[serde(rename_all = "camelCase")]
pub struct NewStockTransaction {
    pub id: Option<String>,
    pub product_id: String,
    pub amount: f64,
    pub transaction_type: String,
}
