use std::collections::HashMap;

use crate::error::{PlanError, Result};
use crate::models::{Ingredient, MacroProfile, Recipe};

/// Read-only access to the ingredient catalogue.
pub trait IngredientLookup {
    fn ingredient(&self, id: &str) -> Option<&Ingredient>;
}

impl IngredientLookup for HashMap<String, Ingredient> {
    fn ingredient(&self, id: &str) -> Option<&Ingredient> {
        self.get(id)
    }
}

impl<T: IngredientLookup + ?Sized> IngredientLookup for &T {
    fn ingredient(&self, id: &str) -> Option<&Ingredient> {
        (**self).ingredient(id)
    }
}

/// Macros for one serving of `recipe`, unrounded.
///
/// Each requirement contributes its ingredient's per-100 profile scaled by
/// quantity / 100. Units are taken at face value. An unknown ingredient id
/// fails the whole resolution.
pub fn resolve_recipe_macros<L>(recipe: &Recipe, catalogue: &L) -> Result<MacroProfile>
where
    L: IngredientLookup + ?Sized,
{
    let mut total = MacroProfile::default();

    for req in &recipe.requirements {
        let ingredient = catalogue.ingredient(&req.ingredient_id).ok_or_else(|| {
            PlanError::MissingIngredientReference {
                recipe: recipe.id.clone(),
                ingredient: req.ingredient_id.clone(),
            }
        })?;
        total += ingredient.macros_for(req.quantity);
    }

    Ok(total.clamp_non_negative())
}
