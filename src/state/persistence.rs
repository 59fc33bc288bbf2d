use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{PlanError, Result};
use crate::models::{Ingredient, MacroTarget, MealPlan, Pantry, PantryEntry, Recipe};

/// Everything the planner needs, as stored on disk.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KitchenData {
    #[serde(default)]
    pub target: MacroTarget,

    #[serde(default)]
    pub ingredients: Vec<Ingredient>,

    #[serde(default)]
    pub recipes: Vec<Recipe>,

    #[serde(default)]
    pub pantry: Pantry,
}

impl KitchenData {
    /// Reject ingredients with an empty id or negative nutrition.
    pub fn validate(&self) -> Result<()> {
        match self.ingredients.iter().find(|i| !i.is_valid()) {
            Some(bad) => Err(PlanError::InvalidInput(format!(
                "ingredient '{}' has an empty id or negative nutrition values",
                bad.id
            ))),
            None => Ok(()),
        }
    }

    /// Lowercase every ingredient id and drop duplicate ingredients
    /// (last occurrence wins).
    pub fn normalized(self) -> Self {
        let mut seen: BTreeMap<String, Ingredient> = BTreeMap::new();
        for mut ingredient in self.ingredients {
            ingredient.id = ingredient.key();
            seen.insert(ingredient.id.clone(), ingredient);
        }

        let recipes = self
            .recipes
            .into_iter()
            .map(|mut recipe| {
                for req in &mut recipe.requirements {
                    req.ingredient_id = req.ingredient_id.to_lowercase();
                }
                recipe
            })
            .collect();

        let pantry = Vec::<PantryEntry>::from(self.pantry)
            .into_iter()
            .map(|mut entry| {
                entry.ingredient_id = entry.ingredient_id.to_lowercase();
                entry
            })
            .collect();

        Self {
            target: self.target,
            ingredients: seen.into_values().collect(),
            recipes,
            pantry,
        }
    }
}

/// Load kitchen data from a JSON file, normalized.
pub fn load_kitchen<P: AsRef<Path>>(path: P) -> Result<KitchenData> {
    let content = fs::read_to_string(path)?;
    let data: KitchenData = serde_json::from_str(&content)?;
    data.validate()?;
    Ok(data.normalized())
}

/// Save kitchen data to a JSON file.
pub fn save_kitchen<P: AsRef<Path>>(path: P, data: &KitchenData) -> Result<()> {
    let json = serde_json::to_string_pretty(data)?;
    fs::write(path, json)?;
    Ok(())
}

/// Write a plan as pretty JSON.
pub fn save_plan<P: AsRef<Path>>(path: P, plan: &MealPlan) -> Result<()> {
    let json = serde_json::to_string_pretty(plan)?;
    fs::write(path, json)?;
    Ok(())
}

/// Write the plan's assignments as CSV, ordered by day then slot.
pub fn export_plan_csv<P: AsRef<Path>>(path: P, plan: &MealPlan, recipes: &[Recipe]) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record(["day", "slot", "recipe_id", "recipe_name", "servings"])?;

    let mut rows: Vec<_> = plan.assignments.iter().collect();
    rows.sort_by_key(|a| (a.day, a.slot));

    for a in rows {
        let name = recipes
            .iter()
            .find(|r| r.id == a.recipe_id)
            .map_or(a.recipe_id.as_str(), |r| r.name.as_str());
        wtr.write_record([
            (a.day + 1).to_string(),
            a.slot.to_string(),
            a.recipe_id.clone(),
            name.to_string(),
            a.servings.to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
