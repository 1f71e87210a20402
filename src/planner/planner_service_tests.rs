use chrono::{NaiveDate, Utc};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::errors::Result as AppResult;
use crate::planner::{
    MealPlanEntry, PlannerError, PlannerRepositoryTrait, PlannerService, PlannerServiceTrait,
    Recipe, RecipeIngredient,
};
use crate::products::{NewProduct, Product, ProductError, ProductRepositoryTrait};

fn day(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn make_product(id: &str, is_meal_product: bool) -> Product {
    Product {
        id: id.to_string(),
        name: format!("Product {}", id),
        servings_per_container: 1.0,
        min_stock_amount: 0.0,
        default_best_before_days: 0,
        is_meal_product,
        is_placeholder: false,
        created_at: Utc::now().naive_utc(),
        updated_at: Utc::now().naive_utc(),
    }
}

fn make_recipe(id: &str, base_servings: f64) -> Recipe {
    Recipe {
        id: id.to_string(),
        name: format!("Recipe {}", id),
        base_servings,
        created_at: Utc::now().naive_utc(),
        updated_at: Utc::now().naive_utc(),
    }
}

fn ingredient(recipe: &str, product: &str, amount: f64) -> RecipeIngredient {
    RecipeIngredient {
        id: format!("{}-{}", recipe, product),
        recipe_id: recipe.to_string(),
        product_id: product.to_string(),
        amount,
        note: None,
        position: 0,
    }
}

fn product_entry(id: &str, day_str: &str, product: &str, amount: f64) -> MealPlanEntry {
    MealPlanEntry {
        id: id.to_string(),
        day: day(day_str),
        entry_type: "product".to_string(),
        recipe_id: None,
        product_id: Some(product.to_string()),
        amount,
        done: false,
        is_meal_prep: false,
    }
}

fn recipe_entry(id: &str, day_str: &str, recipe: &str, amount: f64) -> MealPlanEntry {
    MealPlanEntry {
        id: id.to_string(),
        day: day(day_str),
        entry_type: "recipe".to_string(),
        recipe_id: Some(recipe.to_string()),
        product_id: None,
        amount,
        done: false,
        is_meal_prep: false,
    }
}

#[derive(Default)]
struct MockPlannerRepository {
    entries: RwLock<Vec<MealPlanEntry>>,
    recipes: RwLock<HashMap<String, Recipe>>,
    ingredients: RwLock<Vec<RecipeIngredient>>,
}

impl PlannerRepositoryTrait for MockPlannerRepository {
    fn load_entries_for_range(
        &self,
        start_day: NaiveDate,
        end_day: NaiveDate,
    ) -> AppResult<Vec<MealPlanEntry>> {
        Ok(self
            .entries
            .read()
            .unwrap()
            .iter()
            .filter(|e| e.day >= start_day && e.day <= end_day)
            .cloned()
            .collect())
    }

    fn get_recipe(&self, recipe_id: &str) -> AppResult<Recipe> {
        self.recipes
            .read()
            .unwrap()
            .get(recipe_id)
            .cloned()
            .ok_or_else(|| PlannerError::NotFound(recipe_id.to_string()).into())
    }

    fn load_ingredients_for_recipe(&self, recipe: &str) -> AppResult<Vec<RecipeIngredient>> {
        Ok(self
            .ingredients
            .read()
            .unwrap()
            .iter()
            .filter(|i| i.recipe_id == recipe)
            .cloned()
            .collect())
    }
}

#[derive(Default)]
struct MockProductRepository {
    products: RwLock<HashMap<String, Product>>,
}

impl ProductRepositoryTrait for MockProductRepository {
    fn get_product(&self, product_id: &str) -> AppResult<Product> {
        self.products
            .read()
            .unwrap()
            .get(product_id)
            .cloned()
            .ok_or_else(|| ProductError::NotFound(product_id.to_string()).into())
    }

    fn load_products(&self) -> AppResult<Vec<Product>> {
        Ok(self.products.read().unwrap().values().cloned().collect())
    }

    fn insert_new_product(&self, _new_product: NewProduct) -> AppResult<Product> {
        unimplemented!()
    }

    fn update_product(&self, _product_update: Product) -> AppResult<Product> {
        unimplemented!()
    }
}

struct Fixture {
    planner_repo: Arc<MockPlannerRepository>,
    product_repo: Arc<MockProductRepository>,
}

impl Fixture {
    fn new() -> Self {
        Fixture {
            planner_repo: Arc::new(MockPlannerRepository::default()),
            product_repo: Arc::new(MockProductRepository::default()),
        }
    }

    fn with_entries(self, entries: Vec<MealPlanEntry>) -> Self {
        *self.planner_repo.entries.write().unwrap() = entries;
        self
    }

    fn with_recipe(self, recipe: Recipe, ingredients: Vec<RecipeIngredient>) -> Self {
        self.planner_repo
            .recipes
            .write()
            .unwrap()
            .insert(recipe.id.clone(), recipe);
        self.planner_repo
            .ingredients
            .write()
            .unwrap()
            .extend(ingredients);
        self
    }

    fn with_product(self, product: Product) -> Self {
        self.product_repo
            .products
            .write()
            .unwrap()
            .insert(product.id.clone(), product);
        self
    }

    fn service(&self) -> PlannerService<MockPlannerRepository, MockProductRepository> {
        PlannerService::new(self.planner_repo.clone(), self.product_repo.clone())
    }
}

#[test]
fn product_entries_add_their_amount() {
    let fixture = Fixture::new()
        .with_product(make_product("P", false))
        .with_entries(vec![product_entry("e1", "2025-06-02", "P", 2.0)]);

    let requirements = fixture
        .service()
        .aggregate_requirements(day("2025-06-01"), day("2025-06-07"))
        .unwrap();

    assert_eq!(requirements.get("P"), Some(&2.0));
}

#[test]
fn done_and_meal_prep_entries_are_not_demand() {
    let mut done = product_entry("e1", "2025-06-02", "P", 2.0);
    done.done = true;
    let mut prep = product_entry("e2", "2025-06-03", "P", 4.0);
    prep.is_meal_prep = true;

    let fixture = Fixture::new()
        .with_product(make_product("P", false))
        .with_entries(vec![done, prep]);

    let requirements = fixture
        .service()
        .aggregate_requirements(day("2025-06-01"), day("2025-06-07"))
        .unwrap();

    assert!(requirements.is_empty());
}

#[test]
fn meal_products_are_not_counted_twice() {
    let fixture = Fixture::new()
        .with_product(make_product("COOKED", true))
        .with_entries(vec![product_entry("e1", "2025-06-02", "COOKED", 1.0)]);

    let requirements = fixture
        .service()
        .aggregate_requirements(day("2025-06-01"), day("2025-06-07"))
        .unwrap();

    assert!(requirements.is_empty());
}

#[test]
fn recipe_entries_scale_ingredients_by_base_servings() {
    let fixture = Fixture::new()
        .with_recipe(
            make_recipe("R", 2.0),
            vec![ingredient("R", "FLOUR", 0.5), ingredient("R", "EGGS", 3.0)],
        )
        .with_entries(vec![recipe_entry("e1", "2025-06-02", "R", 4.0)]);

    let requirements = fixture
        .service()
        .aggregate_requirements(day("2025-06-01"), day("2025-06-07"))
        .unwrap();

    // 4 servings over a 2-serving base doubles every ingredient.
    assert_eq!(requirements.get("FLOUR"), Some(&1.0));
    assert_eq!(requirements.get("EGGS"), Some(&6.0));
}

#[test]
fn zero_base_servings_is_treated_as_one() {
    let fixture = Fixture::new()
        .with_recipe(make_recipe("R", 0.0), vec![ingredient("R", "FLOUR", 0.5)])
        .with_entries(vec![recipe_entry("e1", "2025-06-02", "R", 3.0)]);

    let requirements = fixture
        .service()
        .aggregate_requirements(day("2025-06-01"), day("2025-06-07"))
        .unwrap();

    assert_eq!(requirements.get("FLOUR"), Some(&1.5));
}

#[test]
fn demand_accumulates_across_entries_and_ingredients() {
    let fixture = Fixture::new()
        .with_product(make_product("FLOUR", false))
        .with_recipe(make_recipe("R", 1.0), vec![ingredient("R", "FLOUR", 1.0)])
        .with_entries(vec![
            product_entry("e1", "2025-06-02", "FLOUR", 2.0),
            recipe_entry("e2", "2025-06-03", "R", 3.0),
        ]);

    let requirements = fixture
        .service()
        .aggregate_requirements(day("2025-06-01"), day("2025-06-07"))
        .unwrap();

    assert_eq!(requirements.get("FLOUR"), Some(&5.0));
}

#[test]
fn entries_outside_the_window_are_ignored() {
    let fixture = Fixture::new()
        .with_product(make_product("P", false))
        .with_entries(vec![
            product_entry("e1", "2025-06-02", "P", 1.0),
            product_entry("e2", "2025-07-01", "P", 9.0),
        ]);

    let requirements = fixture
        .service()
        .aggregate_requirements(day("2025-06-01"), day("2025-06-07"))
        .unwrap();

    assert_eq!(requirements.get("P"), Some(&1.0));
}

#[test]
fn a_dangling_recipe_reference_does_not_sink_the_aggregation() {
    let fixture = Fixture::new()
        .with_product(make_product("P", false))
        .with_entries(vec![
            recipe_entry("e1", "2025-06-02", "MISSING", 2.0),
            product_entry("e2", "2025-06-03", "P", 1.0),
        ]);

    let requirements = fixture
        .service()
        .aggregate_requirements(day("2025-06-01"), day("2025-06-07"))
        .unwrap();

    assert_eq!(requirements.len(), 1);
    assert_eq!(requirements.get("P"), Some(&1.0));
}
