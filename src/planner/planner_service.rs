use chrono::NaiveDate;
use log::warn;
use std::collections::HashMap;
use std::str::FromStr;
use std::sync::Arc;

use crate::errors::Result;
use crate::planner::planner_model::{MealPlanEntry, MealPlanEntryType};
use crate::planner::planner_traits::{PlannerRepositoryTrait, PlannerServiceTrait};
use crate::products::ProductRepositoryTrait;

/// Expands a window of meal plan entries into per-product demand totals.
pub struct PlannerService<T: PlannerRepositoryTrait, P: ProductRepositoryTrait> {
    planner_repo: Arc<T>,
    product_repo: Arc<P>,
}

impl<T: PlannerRepositoryTrait, P: ProductRepositoryTrait> PlannerService<T, P> {
    pub fn new(planner_repo: Arc<T>, product_repo: Arc<P>) -> Self {
        PlannerService {
            planner_repo,
            product_repo,
        }
    }

    fn add_product_demand(
        &self,
        requirements: &mut HashMap<String, f64>,
        entry: &MealPlanEntry,
    ) -> Result<()> {
        let product_id = match &entry.product_id {
            Some(product_id) => product_id,
            None => {
                warn!("Meal plan entry {} has no product reference", entry.id);
                return Ok(());
            }
        };

        // A meal product is itself a recipe's output; counting it here would
        // double the demand already carried by the recipe's ingredients.
        let product = self.product_repo.get_product(product_id)?;
        if product.is_meal_product {
            return Ok(());
        }

        *requirements.entry(product_id.clone()).or_insert(0.0) += entry.amount;
        Ok(())
    }

    fn add_recipe_demand(
        &self,
        requirements: &mut HashMap<String, f64>,
        entry: &MealPlanEntry,
    ) -> Result<()> {
        let recipe_id = match &entry.recipe_id {
            Some(recipe_id) => recipe_id,
            None => {
                warn!("Meal plan entry {} has no recipe reference", entry.id);
                return Ok(());
            }
        };

        let recipe = self.planner_repo.get_recipe(recipe_id)?;
        let ingredients = self.planner_repo.load_ingredients_for_recipe(recipe_id)?;

        let base_servings = if recipe.base_servings > 0.0 {
            recipe.base_servings
        } else {
            1.0
        };
        let scale = entry.amount / base_servings;

        for ingredient in ingredients {
            *requirements.entry(ingredient.product_id).or_insert(0.0) +=
                ingredient.amount * scale;
        }

        Ok(())
    }
}

impl<T: PlannerRepositoryTrait, P: ProductRepositoryTrait> PlannerServiceTrait
    for PlannerService<T, P>
{
    fn aggregate_requirements(
        &self,
        start_day: NaiveDate,
        end_day: NaiveDate,
    ) -> Result<HashMap<String, f64>> {
        let entries = self.planner_repo.load_entries_for_range(start_day, end_day)?;
        let mut requirements: HashMap<String, f64> = HashMap::new();

        for entry in &entries {
            // Done entries are no longer demand; meal-prep entries produce
            // rather than consume on their day.
            if entry.done || entry.is_meal_prep {
                continue;
            }

            let entry_type = match MealPlanEntryType::from_str(&entry.entry_type) {
                Ok(entry_type) => entry_type,
                Err(e) => {
                    warn!("Skipping meal plan entry {}: {}", entry.id, e);
                    continue;
                }
            };

            let result = match entry_type {
                MealPlanEntryType::Product => self.add_product_demand(&mut requirements, entry),
                MealPlanEntryType::Recipe => self.add_recipe_demand(&mut requirements, entry),
            };

            // One dangling reference must not sink the whole aggregation.
            if let Err(e) = result {
                warn!("Skipping meal plan entry {}: {}", entry.id, e);
            }
        }

        Ok(requirements)
    }

    fn entries_for_range(
        &self,
        start_day: NaiveDate,
        end_day: NaiveDate,
    ) -> Result<Vec<MealPlanEntry>> {
        self.planner_repo.load_entries_for_range(start_day, end_day)
    }
}
