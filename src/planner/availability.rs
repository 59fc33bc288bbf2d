use std::collections::HashMap;

use crate::models::{Pantry, Recipe};
use crate::planner::config::PantryMode;

/// Servings of a recipe the pantry can supply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Availability {
    Limited(u32),
    /// No constraining requirement; callers must apply their own cap.
    Unbounded,
}

impl Availability {
    /// Servings after applying `cap`.
    #[inline]
    pub fn capped(&self, cap: u32) -> u32 {
        match self {
            Availability::Limited(n) => (*n).min(cap),
            Availability::Unbounded => cap,
        }
    }

    pub fn is_available(&self) -> bool {
        !matches!(self, Availability::Limited(0))
    }
}

/// Max whole servings given `quantity_of` for each ingredient.
fn servings_from<F>(recipe: &Recipe, quantity_of: F) -> Availability
where
    F: Fn(&str) -> Option<f64>,
{
    let mut limit: Option<u32> = None;

    for req in &recipe.requirements {
        if req.quantity <= 0.0 {
            continue;
        }

        let on_hand = match quantity_of(&req.ingredient_id) {
            Some(q) => q.max(0.0),
            None => return Availability::Limited(0),
        };

        // Division can round up to the next whole serving; step back so
        // servings x requirement never exceeds what is on hand.
        let mut whole = (on_hand / req.quantity).floor();
        if whole > 0.0 && whole * req.quantity > on_hand {
            whole -= 1.0;
        }
        // `as` saturates at u32::MAX
        let servings = whole as u32;

        limit = Some(limit.map_or(servings, |l| l.min(servings)));
    }

    match limit {
        Some(n) => Availability::Limited(n),
        None => Availability::Unbounded,
    }
}

/// Maximum whole servings of `recipe` the pantry supports.
///
/// Zero if any required ingredient is missing from the pantry; unbounded for a
/// recipe with no (positive) requirements.
pub fn available_servings(recipe: &Recipe, pantry: &Pantry) -> Availability {
    servings_from(recipe, |id| pantry.quantity_of(id))
}

/// Working view of the pantry threaded through the planning stages.
///
/// Under [`PantryMode::Ceiling`] commits are ignored and every recipe sees the
/// original quantities.
#[derive(Debug, Clone)]
pub struct PantryBudget {
    mode: PantryMode,
    remaining: HashMap<String, f64>,
}

impl PantryBudget {
    pub fn new(pantry: &Pantry, mode: PantryMode) -> Self {
        let remaining = pantry
            .entries()
            .map(|e| (e.ingredient_id.clone(), e.quantity))
            .collect();
        Self { mode, remaining }
    }

    pub fn remaining(&self, ingredient_id: &str) -> Option<f64> {
        self.remaining.get(ingredient_id).copied()
    }

    pub fn servings(&self, recipe: &Recipe) -> Availability {
        servings_from(recipe, |id| self.remaining(id))
    }

    /// Record that `servings` of `recipe` were planned.
    pub fn commit(&mut self, recipe: &Recipe, servings: u32) {
        if self.mode == PantryMode::Ceiling {
            return;
        }
        for req in &recipe.requirements {
            if let Some(q) = self.remaining.get_mut(&req.ingredient_id) {
                *q = (*q - req.quantity * servings as f64).max(0.0);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{IngredientRequirement, PantryEntry};

    fn recipe(reqs: &[(&str, f64)]) -> Recipe {
        Recipe {
            id: "r".to_string(),
            name: "R".to_string(),
            steps: vec![],
            requirements: reqs
                .iter()
                .map(|(id, q)| IngredientRequirement {
                    ingredient_id: id.to_string(),
                    quantity: *q,
                    unit: "g".to_string(),
                })
                .collect(),
            default_servings: 1,
        }
    }

    fn pantry(items: &[(&str, f64)]) -> Pantry {
        items
            .iter()
            .map(|(id, q)| PantryEntry {
                ingredient_id: id.to_string(),
                quantity: *q,
                unit: "g".to_string(),
            })
            .collect()
    }

    #[test]
    fn test_floor_over_requirements() {
        let r = recipe(&[("chicken", 150.0), ("rice", 100.0)]);
        let p = pantry(&[("chicken", 1000.0), ("rice", 250.0)]);
        assert_eq!(available_servings(&r, &p), Availability::Limited(2));
    }

    #[test]
    fn test_insufficient_is_zero() {
        let r = recipe(&[("chicken", 150.0)]);
        let p = pantry(&[("chicken", 100.0)]);
        assert_eq!(available_servings(&r, &p), Availability::Limited(0));
        assert!(!available_servings(&r, &p).is_available());
    }

    #[test]
    fn test_absent_ingredient_is_zero() {
        let r = recipe(&[("chicken", 10.0), ("saffron", 0.1)]);
        let p = pantry(&[("chicken", 1000.0)]);
        assert_eq!(available_servings(&r, &p), Availability::Limited(0));
    }

    #[test]
    fn test_no_requirements_is_unbounded() {
        let r = recipe(&[]);
        let avail = available_servings(&r, &pantry(&[]));
        assert_eq!(avail, Availability::Unbounded);
        assert_eq!(avail.capped(3), 3);
    }

    #[test]
    fn test_floor_property_holds() {
        let p = pantry(&[("a", 1000.0), ("b", 333.0)]);
        for qa in [1.0, 7.0, 150.0, 999.0, 1001.0] {
            for qb in [1.0, 33.0, 100.0, 334.0] {
                let r = recipe(&[("a", qa), ("b", qb)]);
                if let Availability::Limited(n) = available_servings(&r, &p) {
                    assert!(n as f64 * qa <= 1000.0);
                    assert!(n as f64 * qb <= 333.0);
                }
            }
        }
    }

    #[test]
    fn test_fractional_stock_rounds_down() {
        let r = recipe(&[("a", 100.0)]);
        let p = pantry(&[("a", 299.99999995)]);
        assert_eq!(available_servings(&r, &p), Availability::Limited(2));

        for on_hand in [0.3, 0.7, 2.9999999999, 99.99999999, 1000.0 - 1e-7] {
            for q in [0.1, 0.3, 1.0 / 3.0, 7.0, 100.0] {
                let r = recipe(&[("a", q)]);
                let n = available_servings(&r, &pantry(&[("a", on_hand)])).capped(u32::MAX);
                assert!(n as f64 * q <= on_hand, "{} x {} > {}", n, q, on_hand);
                assert!((n + 1) as f64 * q > on_hand);
            }
        }
    }

    #[test]
    fn test_larger_requirement_never_increases_servings() {
        let p = pantry(&[("a", 500.0)]);
        let mut previous = u32::MAX;
        for q in [10.0, 20.0, 45.0, 100.0, 250.0, 600.0] {
            let n = available_servings(&recipe(&[("a", q)]), &p).capped(u32::MAX);
            assert!(n <= previous);
            previous = n;
        }
    }

    #[test]
    fn test_ceiling_budget_ignores_commits() {
        let r = recipe(&[("a", 100.0)]);
        let mut budget = PantryBudget::new(&pantry(&[("a", 300.0)]), PantryMode::Ceiling);
        budget.commit(&r, 2);
        assert_eq!(budget.servings(&r), Availability::Limited(3));
    }

    #[test]
    fn test_deplete_budget_reduces_stock() {
        let r = recipe(&[("a", 100.0)]);
        let mut budget = PantryBudget::new(&pantry(&[("a", 300.0)]), PantryMode::Deplete);
        budget.commit(&r, 2);
        assert_eq!(budget.remaining("a"), Some(100.0));
        assert_eq!(budget.servings(&r), Availability::Limited(1));
    }
}
