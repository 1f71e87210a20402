use chrono::NaiveDateTime;
use diesel::prelude::*;
use diesel::Queryable;
use diesel::Selectable;
use serde::{Deserialize, Serialize};

/// Catalog entry for anything the household stocks, plans, or shops for.
#[derive(
    Queryable,
    Identifiable,
    AsChangeset,
    Selectable,
    PartialEq,
    Serialize,
    Deserialize,
    Debug,
    Clone,
)]
#[diesel(table_name = crate::schema::products)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub servings_per_container: f64,
    pub min_stock_amount: f64,
    /// 0 means the product declares no default shelf life.
    pub default_best_before_days: i32,
    /// Output of a recipe; excluded from demand to avoid double counting.
    pub is_meal_product: bool,
    /// Manually added shopping item with no real catalog backing.
    pub is_placeholder: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::products)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub id: Option<String>,
    pub name: String,
    pub servings_per_container: f64,
    pub min_stock_amount: f64,
    pub default_best_before_days: i32,
    pub is_meal_product: bool,
    pub is_placeholder: bool,
}

impl NewProduct {
    pub fn validate(&self) -> crate::products::Result<()> {
        if self.name.trim().is_empty() {
            return Err(crate::products::ProductError::InvalidData(
                "Product name cannot be empty".to_string(),
            ));
        }
        if self.servings_per_container < 1.0 {
            return Err(crate::products::ProductError::InvalidData(
                "Servings per container must be at least 1".to_string(),
            ));
        }
        if self.min_stock_amount < 0.0 {
            return Err(crate::products::ProductError::InvalidData(
                "Minimum stock amount cannot be negative".to_string(),
            ));
        }
        if self.default_best_before_days < 0 {
            return Err(crate::products::ProductError::InvalidData(
                "Default best-before days cannot be negative".to_string(),
            ));
        }
        Ok(())
    }
}
