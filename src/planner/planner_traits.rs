use chrono::NaiveDate;
use std::collections::HashMap;

use crate::errors::Result;
use crate::planner::planner_model::{MealPlanEntry, Recipe, RecipeIngredient};

/// Trait for meal plan repository operations
pub trait PlannerRepositoryTrait: Send + Sync {
    fn load_entries_for_range(
        &self,
        start_day: NaiveDate,
        end_day: NaiveDate,
    ) -> Result<Vec<MealPlanEntry>>;
    fn get_recipe(&self, recipe_id: &str) -> Result<Recipe>;
    fn load_ingredients_for_recipe(&self, recipe: &str) -> Result<Vec<RecipeIngredient>>;
}

/// Trait for demand planning operations
pub trait PlannerServiceTrait: Send + Sync {
    /// Aggregated per-product requirement over the date window, with no
    /// provenance back to the originating entries.
    fn aggregate_requirements(
        &self,
        start_day: NaiveDate,
        end_day: NaiveDate,
    ) -> Result<HashMap<String, f64>>;
    fn entries_for_range(
        &self,
        start_day: NaiveDate,
        end_day: NaiveDate,
    ) -> Result<Vec<MealPlanEntry>>;
}
