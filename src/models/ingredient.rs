use serde::{Deserialize, Serialize};

use crate::models::MacroProfile;

/// Reference nutrition data for one ingredient, per 100 units of `unit`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub id: String,

    pub name: String,

    /// Canonical unit (e.g. "g", "ml"). Requirements are assumed to use it.
    pub unit: String,

    pub per_100: MacroProfile,
}

impl Ingredient {
    /// Non-negative macro values and a non-empty id.
    pub fn is_valid(&self) -> bool {
        !self.id.trim().is_empty()
            && self.per_100.energy >= 0.0
            && self.per_100.protein >= 0.0
            && self.per_100.carbs >= 0.0
            && self.per_100.fat >= 0.0
    }

    /// Canonical key for lookups (lowercase id).
    pub fn key(&self) -> String {
        self.id.to_lowercase()
    }

    /// Macros contributed by `quantity` units of this ingredient.
    #[inline]
    pub fn macros_for(&self, quantity: f64) -> MacroProfile {
        self.per_100.scale(quantity / 100.0)
    }
}
