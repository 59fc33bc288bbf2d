pub mod accuracy;
pub mod availability;
pub mod config;
pub mod constants;
pub mod gap_fill;
pub mod nutrition;
pub mod pipeline;
pub mod ranking;
pub mod shortfall;
pub mod tuning;

use std::collections::{HashMap, HashSet};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use crate::error::{PlanError, Result};
use crate::models::{MacroProfile, MacroTarget, MealPlan, Pantry, Recipe};

pub use accuracy::{accuracy_pct, macro_accuracy};
pub use availability::{Availability, PantryBudget, available_servings};
pub use config::{PantryMode, PlannerConfig};
pub use constants::*;
pub use gap_fill::fill_gaps;
pub use nutrition::{IngredientLookup, resolve_recipe_macros};
pub use pipeline::{PlanState, ResolvedRecipe};
pub use ranking::{protein_fill, rank_by_density};
pub use shortfall::report_shortfall;
pub use tuning::{calorie_deviation, fine_tune, weekly_totals};

/// Resolve macros and availability for every recipe.
///
/// Fails on a duplicate recipe id or an unknown ingredient reference.
pub fn resolve_recipes<'a, L>(
    recipes: &'a [Recipe],
    catalogue: &L,
    pantry: &Pantry,
) -> Result<Vec<ResolvedRecipe<'a>>>
where
    L: IngredientLookup + ?Sized,
{
    let mut seen = HashSet::new();
    for recipe in recipes {
        if !seen.insert(recipe.id.as_str()) {
            return Err(PlanError::DuplicateRecipe(recipe.id.clone()));
        }
    }

    recipes
        .iter()
        .map(|recipe| -> Result<ResolvedRecipe<'a>> {
            Ok(ResolvedRecipe {
                recipe,
                macros: resolve_recipe_macros(recipe, catalogue)?,
                availability: available_servings(recipe, pantry),
            })
        })
        .collect()
}

/// Build a weekly plan approximating `target` from what the pantry can make.
///
/// Stages run in order: protein fill, gap fill, one calorie fine-tuning pass,
/// then shortfall and accuracy reporting. Inputs are only read. When no
/// recipe can be made the plan is empty and reports no shortfall.
pub fn generate_plan<L, R>(
    target: &MacroTarget,
    recipes: &[Recipe],
    catalogue: &L,
    pantry: &Pantry,
    config: &PlannerConfig,
    rng: &mut R,
) -> Result<MealPlan>
where
    L: IngredientLookup + ?Sized,
    R: Rng + ?Sized,
{
    target.validate()?;
    let daily = target.daily_grams();

    info!(
        event = "plan_start",
        recipes = recipes.len(),
        pantry_items = pantry.len(),
        energy_kcal = target.energy_kcal,
    );

    let resolved = resolve_recipes(recipes, catalogue, pantry)?;
    let makeable = resolved
        .iter()
        .filter(|r| r.availability.is_available())
        .count();

    if makeable == 0 {
        info!(event = "empty_catalogue", recipes = recipes.len());
        return Ok(MealPlan {
            macro_accuracy: macro_accuracy(&MacroProfile::default(), &daily),
            ..Default::default()
        });
    }
    debug!(event = "resolved", makeable);

    let state = PlanState::new(PantryBudget::new(pantry, config.pantry_mode));
    let state = protein_fill(state, &resolved, &daily, config);
    debug!(
        event = "stage_end",
        stage = "protein_fill",
        assignments = state.assignments().len(),
    );

    let state = fill_gaps(state, &resolved, &daily, config, rng);
    debug!(
        event = "stage_end",
        stage = "gap_fill",
        assignments = state.assignments().len(),
    );

    let macros_by_recipe: HashMap<&str, MacroProfile> =
        resolved.iter().map(|r| (r.id(), r.macros)).collect();

    let assignments = fine_tune(state.assignments(), &macros_by_recipe, &daily, config);
    let weekly = weekly_totals(&assignments, &macros_by_recipe);
    let missing = report_shortfall(&assignments, recipes, pantry, catalogue);
    let accuracy = macro_accuracy(&weekly, &daily);

    info!(
        event = "plan_end",
        assignments = assignments.len(),
        missing_ingredients = missing.len(),
        calorie_accuracy = accuracy.calories,
    );

    Ok(MealPlan {
        assignments,
        weekly_totals: weekly,
        missing_ingredients: missing,
        macro_accuracy: accuracy,
    })
}

/// [`generate_plan`] with a `StdRng` seeded from `seed`.
pub fn generate_plan_seeded<L>(
    target: &MacroTarget,
    recipes: &[Recipe],
    catalogue: &L,
    pantry: &Pantry,
    config: &PlannerConfig,
    seed: u64,
) -> Result<MealPlan>
where
    L: IngredientLookup + ?Sized,
{
    let mut rng = StdRng::seed_from_u64(seed);
    generate_plan(target, recipes, catalogue, pantry, config, &mut rng)
}
