use std::collections::HashMap;

use crate::models::{Assignment, Pantry, Recipe, ShortfallEntry};
use crate::planner::nutrition::IngredientLookup;

/// Ingredients the plan needs more of than the pantry holds.
///
/// Requirements are summed per ingredient over every assignment
/// (servings x per-serving quantity) and compared with the original pantry.
/// Entries come out in order of first use. Ingredients of recipes that are
/// not in the plan are never reported.
pub fn report_shortfall<L>(
    assignments: &[Assignment],
    recipes: &[Recipe],
    pantry: &Pantry,
    catalogue: &L,
) -> Vec<ShortfallEntry>
where
    L: IngredientLookup + ?Sized,
{
    let by_id: HashMap<&str, &Recipe> = recipes.iter().map(|r| (r.id.as_str(), r)).collect();

    let mut order: Vec<&str> = Vec::new();
    let mut required: HashMap<&str, f64> = HashMap::new();

    for assignment in assignments {
        let Some(recipe) = by_id.get(assignment.recipe_id.as_str()) else {
            continue;
        };
        for req in &recipe.requirements {
            if req.quantity <= 0.0 {
                continue;
            }
            let id = req.ingredient_id.as_str();
            let total = required.entry(id).or_insert_with(|| {
                order.push(id);
                0.0
            });
            *total += req.quantity * assignment.servings as f64;
        }
    }

    order
        .into_iter()
        .filter_map(|id| {
            let needed = required[id];
            let available = pantry.quantity_of(id).unwrap_or(0.0);
            if needed <= available {
                return None;
            }

            let ingredient = catalogue.ingredient(id);
            let name = ingredient.map_or_else(|| id.to_string(), |i| i.name.clone());
            let unit = ingredient
                .map(|i| i.unit.clone())
                .or_else(|| pantry.get(id).map(|e| e.unit.clone()))
                .unwrap_or_default();

            Some(ShortfallEntry {
                ingredient_id: id.to_string(),
                name,
                needed_quantity: needed - available,
                unit,
                available_quantity: available,
            })
        })
        .collect()
}
