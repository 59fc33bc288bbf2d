use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Quantity of one ingredient on hand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PantryEntry {
    pub ingredient_id: String,
    pub quantity: f64,
    pub unit: String,
}

/// A user's pantry: at most one entry per ingredient id.
///
/// Serialized as a list of entries; duplicates on input collapse to the last one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<PantryEntry>", into = "Vec<PantryEntry>")]
pub struct Pantry {
    entries: BTreeMap<String, PantryEntry>,
}

impl Pantry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the entry for its ingredient.
    pub fn insert(&mut self, entry: PantryEntry) {
        self.entries.insert(entry.ingredient_id.clone(), entry);
    }

    pub fn remove(&mut self, ingredient_id: &str) -> Option<PantryEntry> {
        self.entries.remove(ingredient_id)
    }

    pub fn get(&self, ingredient_id: &str) -> Option<&PantryEntry> {
        self.entries.get(ingredient_id)
    }

    /// Quantity on hand, `None` when the ingredient is absent.
    pub fn quantity_of(&self, ingredient_id: &str) -> Option<f64> {
        self.entries.get(ingredient_id).map(|e| e.quantity)
    }

    pub fn entries(&self) -> impl Iterator<Item = &PantryEntry> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl From<Vec<PantryEntry>> for Pantry {
    fn from(entries: Vec<PantryEntry>) -> Self {
        let mut pantry = Pantry::new();
        for entry in entries {
            pantry.insert(entry);
        }
        pantry
    }
}

impl From<Pantry> for Vec<PantryEntry> {
    fn from(pantry: Pantry) -> Self {
        pantry.entries.into_values().collect()
    }
}

impl FromIterator<PantryEntry> for Pantry {
    fn from_iter<I: IntoIterator<Item = PantryEntry>>(iter: I) -> Self {
        iter.into_iter().collect::<Vec<_>>().into()
    }
}
