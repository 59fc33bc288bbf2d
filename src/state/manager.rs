use std::collections::HashMap;

use rand::Rng;

use crate::error::{PlanError, Result};
use crate::models::{Ingredient, MacroTarget, MealPlan, Pantry, PantryEntry, Recipe};
use crate::planner::{self, Availability, IngredientLookup, PlannerConfig, available_servings};
use crate::state::KitchenData;

/// Manages the ingredient catalogue, recipes, pantry and target of one user.
pub struct KitchenStateManager {
    target: MacroTarget,
    /// All ingredients keyed by lowercase id.
    ingredients: HashMap<String, Ingredient>,
    recipes: Vec<Recipe>,
    pantry: Pantry,
}

impl KitchenStateManager {
    /// Create a manager from loaded kitchen data.
    pub fn new(data: KitchenData) -> Self {
        let data = data.normalized();
        let ingredients = data
            .ingredients
            .into_iter()
            .map(|i| (i.key(), i))
            .collect();
        Self {
            target: data.target,
            ingredients,
            recipes: data.recipes,
            pantry: data.pantry,
        }
    }

    /// Get an ingredient by id (case-insensitive).
    pub fn get_ingredient(&self, id: &str) -> Option<&Ingredient> {
        self.ingredients.get(&id.to_lowercase())
    }

    /// Find an ingredient by id or display name (case-insensitive).
    pub fn find_ingredient(&self, query: &str) -> Option<&Ingredient> {
        self.get_ingredient(query).or_else(|| {
            let query = query.to_lowercase();
            self.ingredients
                .values()
                .find(|i| i.name.to_lowercase() == query)
        })
    }

    /// All ingredients sorted by name.
    pub fn all_ingredients(&self) -> Vec<&Ingredient> {
        let mut all: Vec<&Ingredient> = self.ingredients.values().collect();
        all.sort_by(|a, b| a.name.cmp(&b.name));
        all
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn pantry(&self) -> &Pantry {
        &self.pantry
    }

    pub fn target(&self) -> &MacroTarget {
        &self.target
    }

    /// Replace the target after validating it.
    pub fn set_target(&mut self, target: MacroTarget) -> Result<()> {
        target.validate()?;
        self.target = target;
        Ok(())
    }

    /// Set the on-hand quantity of an ingredient. Zero removes the entry.
    pub fn set_stock(&mut self, ingredient_id: &str, quantity: f64) -> Result<()> {
        if !(quantity.is_finite() && quantity >= 0.0) {
            return Err(PlanError::InvalidInput(format!(
                "quantity must be a non-negative number, got {}",
                quantity
            )));
        }

        let ingredient = self
            .get_ingredient(ingredient_id)
            .ok_or_else(|| PlanError::IngredientNotFound(ingredient_id.to_string()))?;
        let id = ingredient.id.clone();
        let unit = ingredient.unit.clone();

        if quantity == 0.0 {
            self.pantry.remove(&id);
        } else {
            self.pantry.insert(PantryEntry {
                ingredient_id: id,
                quantity,
                unit,
            });
        }
        Ok(())
    }

    /// Add `delta` (may be negative) to the on-hand quantity, never below zero.
    ///
    /// Returns the new quantity.
    pub fn add_stock(&mut self, ingredient_id: &str, delta: f64) -> Result<f64> {
        let id = ingredient_id.to_lowercase();
        let current = self.pantry.quantity_of(&id).unwrap_or(0.0);
        let updated = (current + delta).max(0.0);
        self.set_stock(&id, updated)?;
        Ok(updated)
    }

    /// Empty the pantry.
    pub fn reset_pantry(&mut self) {
        self.pantry.clear();
    }

    /// Recipes the pantry can make at least one serving of, with availability.
    pub fn makeable_recipes(&self) -> Vec<(&Recipe, Availability)> {
        self.recipes
            .iter()
            .map(|r| (r, available_servings(r, &self.pantry)))
            .filter(|(_, a)| a.is_available())
            .collect()
    }

    /// Run the planner over the current state.
    pub fn plan<R: Rng + ?Sized>(&self, config: &PlannerConfig, rng: &mut R) -> Result<MealPlan> {
        planner::generate_plan(&self.target, &self.recipes, self, &self.pantry, config, rng)
    }

    /// Convert state back to kitchen data for saving.
    pub fn to_data(&self) -> KitchenData {
        let mut ingredients: Vec<Ingredient> = self.ingredients.values().cloned().collect();
        ingredients.sort_by(|a, b| a.id.cmp(&b.id));
        KitchenData {
            target: self.target,
            ingredients,
            recipes: self.recipes.clone(),
            pantry: self.pantry.clone(),
        }
    }

    /// Count of ingredients in the catalogue.
    pub fn len(&self) -> usize {
        self.ingredients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ingredients.is_empty()
    }
}

impl IngredientLookup for KitchenStateManager {
    fn ingredient(&self, id: &str) -> Option<&Ingredient> {
        self.get_ingredient(id)
    }
}
