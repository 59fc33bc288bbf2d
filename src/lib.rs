pub mod cli;
pub mod error;
pub mod interface;
pub mod models;
pub mod planner;
pub mod state;

pub use error::{PlanError, Result};
pub use models::{MacroTarget, MealPlan, Pantry, Recipe};
pub use planner::{PlannerConfig, generate_plan, generate_plan_seeded};
