mod ingredient;
mod macros;
mod pantry;
mod plan;
mod recipe;
mod target;

pub use ingredient::Ingredient;
pub use macros::{Macro, MacroProfile};
pub use pantry::{Pantry, PantryEntry};
pub use plan::{Assignment, MacroAccuracy, MealPlan, MealSlot, ShortfallEntry};
pub use recipe::{IngredientRequirement, Recipe, RecipeStep};
pub use target::MacroTarget;
