use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;
use diesel::Queryable;
use diesel::Selectable;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::products::Product;

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
#[diesel(table_name = crate::schema::recipes)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: String,
    pub name: String,
    /// Ingredient amounts are per batch of this many servings.
    pub base_servings: f64,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(
    Queryable,
    Identifiable,
    Associations,
    Selectable,
    PartialEq,
    Serialize,
    Deserialize,
    Debug,
    Clone,
)]
#[diesel(table_name = crate::schema::recipe_ingredients)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[diesel(belongs_to(Recipe))]
#[diesel(belongs_to(Product))]
#[serde(rename_all = "camelCase")]
pub struct RecipeIngredient {
    pub id: String,
    pub recipe_id: String,
    pub product_id: String,
    pub amount: f64,
    pub note: Option<String>,
    pub position: i32,
}

/// What a meal plan row points at
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MealPlanEntryType {
    Recipe,
    Product,
}

impl MealPlanEntryType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MealPlanEntryType::Recipe => "recipe",
            MealPlanEntryType::Product => "product",
        }
    }
}

impl fmt::Display for MealPlanEntryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for MealPlanEntryType {
    type Err = crate::planner::PlannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "recipe" => Ok(MealPlanEntryType::Recipe),
            "product" => Ok(MealPlanEntryType::Product),
            other => Err(crate::planner::PlannerError::InvalidData(format!(
                "Unknown meal plan entry type: {}",
                other
            ))),
        }
    }
}

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
#[diesel(table_name = crate::schema::meal_plan)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct MealPlanEntry {
    pub id: String,
    pub day: NaiveDate,
    pub entry_type: String,
    pub recipe_id: Option<String>,
    pub product_id: Option<String>,
    /// Servings for recipe entries, container units for product entries.
    pub amount: f64,
    pub done: bool,
    /// Produces stock on this day (batch cooking) instead of consuming it.
    pub is_meal_prep: bool,
}
