use diesel::dsl::sum;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::SqliteConnection;

use crate::db::get_connection;
use crate::errors::Result;
use crate::schema::shopping_list;
use crate::shopping::shopping_errors::ShoppingError;
use crate::shopping::shopping_model::{NewShoppingListItem, ShoppingListItem};
use crate::shopping::shopping_traits::ShoppingRepositoryTrait;

use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

pub struct ShoppingRepository {
    pool: Arc<Pool<ConnectionManager<SqliteConnection>>>,
}

impl ShoppingRepository {
    pub fn new(pool: Arc<Pool<ConnectionManager<SqliteConnection>>>) -> Self {
        ShoppingRepository { pool }
    }
}

impl ShoppingRepositoryTrait for ShoppingRepository {
    fn load_open_items(&self) -> Result<Vec<ShoppingListItem>> {
        let mut conn = get_connection(&self.pool)?;
        Ok(shopping_list::table
            .filter(shopping_list::done.eq(false))
            .order(shopping_list::created_at.asc())
            .load::<ShoppingListItem>(&mut conn)?)
    }

    fn open_amount_for_product(&self, product: &str) -> Result<f64> {
        let mut conn = get_connection(&self.pool)?;
        let total: Option<f64> = shopping_list::table
            .filter(shopping_list::product_id.eq(product))
            .filter(shopping_list::done.eq(false))
            .select(sum(shopping_list::amount))
            .first(&mut conn)?;
        Ok(total.unwrap_or(0.0))
    }

    fn upsert_open_item(
        &self,
        product: &str,
        delta: f64,
        note: Option<&str>,
    ) -> Result<ShoppingListItem> {
        let mut conn = get_connection(&self.pool)?;

        let existing = shopping_list::table
            .filter(shopping_list::product_id.eq(product))
            .filter(shopping_list::done.eq(false))
            .first::<ShoppingListItem>(&mut conn)
            .optional()?;

        match existing {
            Some(item) => {
                diesel::update(shopping_list::table.find(&item.id))
                    .set((
                        shopping_list::amount.eq(item.amount + delta),
                        shopping_list::updated_at.eq(Utc::now().naive_utc()),
                    ))
                    .execute(&mut conn)?;

                Ok(shopping_list::table.find(item.id).first(&mut conn)?)
            }
            None => {
                let new_item = NewShoppingListItem {
                    id: Some(Uuid::new_v4().to_string()),
                    product_id: Some(product.to_string()),
                    note: note.map(|n| n.to_string()),
                    amount: delta,
                    done: false,
                };

                Ok(diesel::insert_into(shopping_list::table)
                    .values(&new_item)
                    .returning(shopping_list::all_columns)
                    .get_result(&mut conn)?)
            }
        }
    }

    fn delete_item(&self, item_id: &str) -> Result<usize> {
        let mut conn = get_connection(&self.pool)?;
        Ok(diesel::delete(shopping_list::table.find(item_id)).execute(&mut conn)?)
    }

    fn mark_done(&self, item_id: &str) -> Result<ShoppingListItem> {
        let mut conn = get_connection(&self.pool)?;

        let updated = diesel::update(shopping_list::table.find(item_id))
            .set((
                shopping_list::done.eq(true),
                shopping_list::updated_at.eq(Utc::now().naive_utc()),
            ))
            .execute(&mut conn)?;

        if updated == 0 {
            return Err(ShoppingError::NotFound(format!(
                "Shopping list item not found: {}",
                item_id
            ))
            .into());
        }

        Ok(shopping_list::table.find(item_id).first(&mut conn)?)
    }

    fn clear_done(&self) -> Result<usize> {
        let mut conn = get_connection(&self.pool)?;
        Ok(
            diesel::delete(shopping_list::table.filter(shopping_list::done.eq(true)))
                .execute(&mut conn)?,
        )
    }
}
