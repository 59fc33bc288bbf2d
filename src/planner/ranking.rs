use std::cmp::Ordering;

use tracing::debug;

use crate::models::{Macro, MacroProfile};
use crate::planner::config::PlannerConfig;
use crate::planner::pipeline::{PlanState, ResolvedRecipe};

/// Sort recipes by `which` density (grams per kcal), highest first.
///
/// The sort is stable: equal densities keep their input order.
pub fn rank_by_density<'r, 'a, I>(recipes: I, which: Macro) -> Vec<&'r ResolvedRecipe<'a>>
where
    I: IntoIterator<Item = &'r ResolvedRecipe<'a>>,
    'a: 'r,
{
    let mut ranked: Vec<&ResolvedRecipe> = recipes.into_iter().collect();
    ranked.sort_by(|a, b| {
        b.macros
            .density(which)
            .partial_cmp(&a.macros.density(which))
            .unwrap_or(Ordering::Equal)
    });
    ranked
}

/// Servings needed to cover `gap` grams at `per_serving` grams each.
#[inline]
pub(crate) fn servings_to_cover(gap: f64, per_serving: f64) -> u32 {
    if per_serving <= 0.0 || gap <= 0.0 {
        return 0;
    }
    (gap / per_serving).ceil() as u32
}

/// Greedy protein fill.
///
/// Walks available recipes by protein density and places each once at the
/// main-meal cursor, sized to the remaining daily protein gap and capped by
/// availability and `protein_fill_max_servings`. Stops as soon as the daily
/// protein average reaches the target; otherwise ends when the list runs out.
pub fn protein_fill(
    mut state: PlanState,
    recipes: &[ResolvedRecipe],
    daily_target: &MacroProfile,
    config: &PlannerConfig,
) -> PlanState {
    let ranked = rank_by_density(
        recipes.iter().filter(|r| r.availability.is_available()),
        Macro::Protein,
    );

    for recipe in ranked {
        let gap = state.daily_gap(daily_target, Macro::Protein);
        if gap <= 0.0 {
            debug!(event = "protein_target_met", assignments = state.assignments().len());
            break;
        }

        // Cannot shrink the gap; left for the gap filler.
        if recipe.macros.protein <= 0.0 {
            continue;
        }

        let needed = servings_to_cover(gap, recipe.macros.protein);
        let servings = needed.min(
            state
                .available(recipe)
                .capped(config.protein_fill_max_servings),
        );

        if servings > 0 {
            debug!(
                event = "protein_fill_place",
                recipe = recipe.id(),
                servings,
                gap,
            );
            state = state.place_main(recipe, servings);
        }
    }

    state
}
