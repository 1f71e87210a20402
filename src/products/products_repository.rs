use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::SqliteConnection;

use crate::db::get_connection;
use crate::errors::Result;
use crate::products::products_errors::ProductError;
use crate::products::products_model::{NewProduct, Product};
use crate::products::products_traits::ProductRepositoryTrait;
use crate::schema::products;
use crate::schema::products::dsl::*;

use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

pub struct ProductRepository {
    pool: Arc<Pool<ConnectionManager<SqliteConnection>>>,
}

impl ProductRepository {
    pub fn new(pool: Arc<Pool<ConnectionManager<SqliteConnection>>>) -> Self {
        ProductRepository { pool }
    }
}

impl ProductRepositoryTrait for ProductRepository {
    fn get_product(&self, product_id: &str) -> Result<Product> {
        let mut conn = get_connection(&self.pool)?;
        products
            .find(product_id)
            .first::<Product>(&mut conn)
            .map_err(|e| ProductError::from(e).into())
    }

    fn load_products(&self) -> Result<Vec<Product>> {
        let mut conn = get_connection(&self.pool)?;
        Ok(products.order(name.asc()).load::<Product>(&mut conn)?)
    }

    fn insert_new_product(&self, mut new_product: NewProduct) -> Result<Product> {
        new_product.validate().map_err(crate::errors::Error::from)?;
        let mut conn = get_connection(&self.pool)?;

        new_product.id = Some(Uuid::new_v4().to_string());

        Ok(diesel::insert_into(products::table)
            .values(&new_product)
            .returning(products::all_columns)
            .get_result(&mut conn)?)
    }

    fn update_product(&self, mut product_update: Product) -> Result<Product> {
        let mut conn = get_connection(&self.pool)?;
        product_update.updated_at = Utc::now().naive_utc();
        let product_id = product_update.id.clone();

        diesel::update(products.find(&product_id))
            .set(&product_update)
            .execute(&mut conn)?;

        Ok(products.find(product_id).first(&mut conn)?)
    }
}
