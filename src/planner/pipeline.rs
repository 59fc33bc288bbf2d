use std::collections::HashSet;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::models::{Assignment, Macro, MacroProfile, MealSlot, Recipe};
use crate::planner::availability::{Availability, PantryBudget};
use crate::planner::constants::DAYS_PER_WEEK;

/// A recipe with its per-serving macros and initial availability.
#[derive(Debug, Clone)]
pub struct ResolvedRecipe<'a> {
    pub recipe: &'a Recipe,
    pub macros: MacroProfile,
    pub availability: Availability,
}

impl ResolvedRecipe<'_> {
    pub fn id(&self) -> &str {
        &self.recipe.id
    }
}

/// Accumulated plan passed by value from one stage to the next.
#[derive(Debug, Clone)]
pub struct PlanState {
    assignments: Vec<Assignment>,
    totals: MacroProfile,
    used: HashSet<String>,
    budget: PantryBudget,
    cursor: usize,
}

impl PlanState {
    pub fn new(budget: PantryBudget) -> Self {
        Self {
            assignments: Vec::new(),
            totals: MacroProfile::default(),
            used: HashSet::new(),
            budget,
            cursor: 0,
        }
    }

    pub fn assignments(&self) -> &[Assignment] {
        &self.assignments
    }

    /// Weekly totals so far.
    pub fn totals(&self) -> MacroProfile {
        self.totals
    }

    pub fn daily_average(&self) -> MacroProfile {
        self.totals.div(DAYS_PER_WEEK as f64)
    }

    /// Daily shortfall of `which` against `daily_target`, never negative.
    pub fn daily_gap(&self, daily_target: &MacroProfile, which: Macro) -> f64 {
        (daily_target.get(which) - self.daily_average().get(which)).max(0.0)
    }

    pub fn is_used(&self, recipe_id: &str) -> bool {
        self.used.contains(recipe_id)
    }

    /// Servings the working pantry still allows for `recipe`.
    pub fn available(&self, recipe: &ResolvedRecipe) -> Availability {
        self.budget.servings(recipe.recipe)
    }

    /// Next main-meal position: breakfast, lunch, dinner, then the next day.
    ///
    /// Wraps back to day 0 after a full week.
    pub fn next_main_slot(&self) -> (u8, MealSlot) {
        let day = ((self.cursor / MealSlot::MAIN_MEALS.len()) % DAYS_PER_WEEK as usize) as u8;
        let slot = MealSlot::MAIN_MEALS[self.cursor % MealSlot::MAIN_MEALS.len()];
        (day, slot)
    }

    /// Place `servings` at the main-meal cursor and advance it.
    pub fn place_main(mut self, recipe: &ResolvedRecipe, servings: u32) -> Self {
        let (day, slot) = self.next_main_slot();
        self.cursor += 1;
        self.place(recipe, servings, day, slot)
    }

    /// Place `servings` at an explicit position.
    pub fn place(mut self, recipe: &ResolvedRecipe, servings: u32, day: u8, slot: MealSlot) -> Self {
        self.totals += recipe.macros.scale(servings as f64);
        self.budget.commit(recipe.recipe, servings);
        self.used.insert(recipe.id().to_string());
        self.assignments
            .push(Assignment::new(recipe.id(), servings, day, slot));
        self
    }

    /// Uniformly random day, preferring days whose `slot` is still empty.
    pub fn pick_day<R: Rng + ?Sized>(&self, slot: MealSlot, rng: &mut R) -> u8 {
        let free: Vec<u8> = (0..DAYS_PER_WEEK)
            .filter(|d| {
                !self
                    .assignments
                    .iter()
                    .any(|a| a.day == *d && a.slot == slot)
            })
            .collect();

        match free.choose(rng) {
            Some(day) => *day,
            None => rng.gen_range(0..DAYS_PER_WEEK),
        }
    }

    pub fn into_assignments(self) -> Vec<Assignment> {
        self.assignments
    }
}
