pub(crate) mod planner_errors;
pub(crate) mod planner_model;
pub(crate) mod planner_repository;
pub(crate) mod planner_service;
pub(crate) mod planner_traits;

#[cfg(test)]
mod planner_service_tests;

pub use planner_errors::PlannerError;
pub use planner_model::{MealPlanEntry, MealPlanEntryType, Recipe, RecipeIngredient};
pub use planner_repository::PlannerRepository;
pub use planner_service::PlannerService;
pub use planner_traits::{PlannerRepositoryTrait, PlannerServiceTrait};

pub type Result<T> = std::result::Result<T, PlannerError>;
