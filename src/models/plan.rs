use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::MacroProfile;

/// Meal slots within a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealSlot {
    pub const ALL: [MealSlot; 4] = [
        MealSlot::Breakfast,
        MealSlot::Lunch,
        MealSlot::Dinner,
        MealSlot::Snack,
    ];

    /// Slots the main-meal cursor rotates through.
    pub const MAIN_MEALS: [MealSlot; 3] = [MealSlot::Breakfast, MealSlot::Lunch, MealSlot::Dinner];

    pub fn as_str(&self) -> &'static str {
        match self {
            MealSlot::Breakfast => "breakfast",
            MealSlot::Lunch => "lunch",
            MealSlot::Dinner => "dinner",
            MealSlot::Snack => "snack",
        }
    }
}

impl fmt::Display for MealSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One placement of a recipe in the weekly plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    pub recipe_id: String,

    /// Always at least 1.
    pub servings: u32,

    /// 0 (first day) through 6.
    #[serde(rename = "dayOfWeek")]
    pub day: u8,

    #[serde(rename = "mealSlot")]
    pub slot: MealSlot,
}

impl Assignment {
    pub fn new(recipe_id: impl Into<String>, servings: u32, day: u8, slot: MealSlot) -> Self {
        Self {
            recipe_id: recipe_id.into(),
            servings,
            day,
            slot,
        }
    }
}

/// An ingredient the plan needs more of than the pantry holds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortfallEntry {
    pub ingredient_id: String,
    pub name: String,
    pub needed_quantity: f64,
    pub unit: String,
    pub available_quantity: f64,
}

/// Signed per-macro accuracy in percent. 100 means exact; not clamped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroAccuracy {
    pub calories: i64,
    pub protein: i64,
    pub carbs: i64,
    pub fat: i64,
}

/// Result of one planning run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealPlan {
    pub assignments: Vec<Assignment>,

    /// Sum over all assignments, not averaged per day.
    pub weekly_totals: MacroProfile,

    pub missing_ingredients: Vec<ShortfallEntry>,

    pub macro_accuracy: MacroAccuracy,
}

impl MealPlan {
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    pub fn total_servings(&self) -> u32 {
        self.assignments.iter().map(|a| a.servings).sum()
    }

    /// Assignments for one day, in plan order.
    pub fn for_day(&self, day: u8) -> Vec<&Assignment> {
        self.assignments.iter().filter(|a| a.day == day).collect()
    }

    /// (day, slot) pairs holding more than one assignment, with their counts.
    pub fn slot_collisions(&self) -> Vec<((u8, MealSlot), usize)> {
        let mut counts: BTreeMap<(u8, MealSlot), usize> = BTreeMap::new();
        for a in &self.assignments {
            *counts.entry((a.day, a.slot)).or_default() += 1;
        }
        counts.into_iter().filter(|(_, n)| *n > 1).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_order() {
        let mut sorted = MealSlot::ALL;
        sorted.sort();
        assert_eq!(sorted, MealSlot::ALL);
        assert_eq!(&MealSlot::ALL[..3], &MealSlot::MAIN_MEALS[..]);
        assert_eq!(MealSlot::ALL[3], MealSlot::Snack);
    }

    #[test]
    fn test_slot_collisions() {
        let plan = MealPlan {
            assignments: vec![
                Assignment::new("a", 1, 0, MealSlot::Snack),
                Assignment::new("b", 2, 0, MealSlot::Snack),
                Assignment::new("c", 1, 1, MealSlot::Lunch),
            ],
            ..Default::default()
        };
        assert_eq!(plan.slot_collisions(), vec![((0, MealSlot::Snack), 2)]);
        assert_eq!(plan.total_servings(), 4);
    }

    #[test]
    fn test_assignment_serializes_camel_case() {
        let a = Assignment::new("oats", 2, 3, MealSlot::Breakfast);
        let json = serde_json::to_value(&a).unwrap();
        assert_eq!(json["recipeId"], "oats");
        assert_eq!(json["dayOfWeek"], 3);
        assert_eq!(json["mealSlot"], "breakfast");
    }
}
