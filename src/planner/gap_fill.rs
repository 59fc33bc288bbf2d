use rand::Rng;
use tracing::debug;

use crate::models::{Macro, MacroProfile, MealSlot};
use crate::planner::config::PlannerConfig;
use crate::planner::pipeline::{PlanState, ResolvedRecipe};
use crate::planner::ranking::{rank_by_density, servings_to_cover};

/// Close the carbohydrate and fat gaps left by the protein fill.
///
/// Both gaps are measured once, before anything is added. Unused recipes with
/// stock are split into carb-leaning (carbs > fat) and fat-leaning (fat > carbs);
/// for each macro with a positive gap the densest recipe of its side is placed
/// once as a snack on a random day. At most one recipe per macro.
pub fn fill_gaps<R: Rng + ?Sized>(
    mut state: PlanState,
    recipes: &[ResolvedRecipe],
    daily_target: &MacroProfile,
    config: &PlannerConfig,
    rng: &mut R,
) -> PlanState {
    let carb_gap = state.daily_gap(daily_target, Macro::Carbs);
    let fat_gap = state.daily_gap(daily_target, Macro::Fat);

    let unused: Vec<&ResolvedRecipe> = recipes
        .iter()
        .filter(|r| !state.is_used(r.id()) && state.available(r).is_available())
        .collect();

    let carb_leaning = unused
        .iter()
        .copied()
        .filter(|r| r.macros.carbs > r.macros.fat);
    let fat_leaning = unused
        .iter()
        .copied()
        .filter(|r| r.macros.fat > r.macros.carbs);

    let picks = [
        (Macro::Carbs, carb_gap, rank_by_density(carb_leaning, Macro::Carbs)),
        (Macro::Fat, fat_gap, rank_by_density(fat_leaning, Macro::Fat)),
    ];

    for (which, gap, ranked) in picks {
        if gap <= 0.0 {
            continue;
        }
        let Some(best) = ranked.first().copied() else {
            debug!(event = "gap_fill_no_candidate", nutrient = which.as_str(), gap);
            continue;
        };

        let needed = servings_to_cover(gap, best.macros.get(which));
        let servings = needed.min(state.available(best).capped(config.gap_fill_max_servings));
        if servings == 0 {
            continue;
        }

        let day = state.pick_day(MealSlot::Snack, rng);
        debug!(
            event = "gap_fill_place",
            nutrient = which.as_str(),
            recipe = best.id(),
            servings,
            day,
            gap,
        );
        state = state.place(best, servings, day, MealSlot::Snack);
    }

    state
}
