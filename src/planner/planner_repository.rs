use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::SqliteConnection;

use crate::db::get_connection;
use crate::errors::Result;
use crate::planner::planner_errors::PlannerError;
use crate::planner::planner_model::{MealPlanEntry, Recipe, RecipeIngredient};
use crate::planner::planner_traits::PlannerRepositoryTrait;
use crate::schema::{meal_plan, recipe_ingredients, recipes};

use chrono::NaiveDate;
use std::sync::Arc;

pub struct PlannerRepository {
    pool: Arc<Pool<ConnectionManager<SqliteConnection>>>,
}

impl PlannerRepository {
    pub fn new(pool: Arc<Pool<ConnectionManager<SqliteConnection>>>) -> Self {
        PlannerRepository { pool }
    }
}

impl PlannerRepositoryTrait for PlannerRepository {
    fn load_entries_for_range(
        &self,
        start_day: NaiveDate,
        end_day: NaiveDate,
    ) -> Result<Vec<MealPlanEntry>> {
        let mut conn = get_connection(&self.pool)?;
        Ok(meal_plan::table
            .filter(meal_plan::day.ge(start_day))
            .filter(meal_plan::day.le(end_day))
            .order(meal_plan::day.asc())
            .load::<MealPlanEntry>(&mut conn)?)
    }

    fn get_recipe(&self, recipe_id: &str) -> Result<Recipe> {
        let mut conn = get_connection(&self.pool)?;
        recipes::table
            .find(recipe_id)
            .first::<Recipe>(&mut conn)
            .map_err(|e| PlannerError::from(e).into())
    }

    fn load_ingredients_for_recipe(&self, recipe: &str) -> Result<Vec<RecipeIngredient>> {
        let mut conn = get_connection(&self.pool)?;
        Ok(recipe_ingredients::table
            .filter(recipe_ingredients::recipe_id.eq(recipe))
            .order(recipe_ingredients::position.asc())
            .load::<RecipeIngredient>(&mut conn)?)
    }
}
