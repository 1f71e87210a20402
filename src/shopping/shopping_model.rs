use chrono::NaiveDateTime;
use diesel::prelude::*;
use diesel::Queryable;
use diesel::Selectable;
use serde::{Deserialize, Serialize};

use crate::products::Product;

/// A pending purchase. `done` marks "in the cart, confirmed", not deletion;
/// at most one open row exists per product at any time.
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
#[diesel(table_name = crate::schema::shopping_list)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[diesel(belongs_to(Product))]
#[serde(rename_all = "camelCase")]
pub struct ShoppingListItem {
    pub id: String,
    /// None for free-text placeholder rows.
    pub product_id: Option<String>,
    pub note: Option<String>,
    pub amount: f64,
    pub done: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::shopping_list)]
#[serde(rename_all = "camelCase")]
pub struct NewShoppingListItem {
    pub id: Option<String>,
    pub product_id: Option<String>,
    pub note: Option<String>,
    pub amount: f64,
    pub done: bool,
}

/// Summary counts returned by the batch reconciliation operations
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SyncOutcome {
    pub added: usize,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ImportOutcome {
    pub imported: usize,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TopUpOutcome {
    pub added_count: usize,
}
