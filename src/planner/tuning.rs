use std::collections::HashMap;

use tracing::debug;

use crate::models::{Assignment, MacroProfile};
use crate::planner::config::PlannerConfig;
use crate::planner::constants::{DAYS_PER_WEEK, MIN_SERVINGS};

/// Sum of servings x per-serving macros over all assignments.
///
/// Assignments whose recipe is not in `macros_by_recipe` contribute nothing.
pub fn weekly_totals(
    assignments: &[Assignment],
    macros_by_recipe: &HashMap<&str, MacroProfile>,
) -> MacroProfile {
    assignments
        .iter()
        .filter_map(|a| {
            macros_by_recipe
                .get(a.recipe_id.as_str())
                .map(|m| m.scale(a.servings as f64))
        })
        .sum()
}

/// Relative deviation of the daily calorie average from the target.
pub fn calorie_deviation(weekly: &MacroProfile, daily_target: &MacroProfile) -> f64 {
    let daily_kcal = weekly.energy / DAYS_PER_WEEK as f64;
    (daily_kcal - daily_target.energy).abs() / daily_target.energy
}

/// One calorie correction pass.
///
/// Within `calorie_tolerance` the assignments come back unchanged. Otherwise
/// every serving count is multiplied by `severe_scale` (deviation above
/// `severe_deviation`) or `mild_scale`, rounded, and floored at one serving.
/// The same factor applies whether the plan is over or under target.
pub fn fine_tune(
    assignments: &[Assignment],
    macros_by_recipe: &HashMap<&str, MacroProfile>,
    daily_target: &MacroProfile,
    config: &PlannerConfig,
) -> Vec<Assignment> {
    let weekly = weekly_totals(assignments, macros_by_recipe);
    let deviation = calorie_deviation(&weekly, daily_target);

    if deviation <= config.calorie_tolerance {
        debug!(event = "fine_tune_skip", deviation);
        return assignments.to_vec();
    }

    let factor = if deviation > config.severe_deviation {
        config.severe_scale
    } else {
        config.mild_scale
    };
    debug!(event = "fine_tune_scale", deviation, factor);

    assignments
        .iter()
        .map(|a| Assignment {
            servings: ((a.servings as f64 * factor).round() as u32).max(MIN_SERVINGS),
            ..a.clone()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MealSlot;

    fn setup(kcal_per_serving: f64) -> HashMap<&'static str, MacroProfile> {
        let mut map = HashMap::new();
        map.insert("a", MacroProfile::new(kcal_per_serving, 10.0, 10.0, 10.0));
        map
    }

    fn target() -> MacroProfile {
        MacroProfile::new(2000.0, 150.0, 200.0, 66.7)
    }

    #[test]
    fn test_within_tolerance_unchanged() {
        // 7 x 2100 kcal weekly -> 2100/day, 5% over
        let macros = setup(2100.0);
        let plan = vec![Assignment::new("a", 7, 0, MealSlot::Lunch)];
        let out = fine_tune(&plan, &macros, &target(), &PlannerConfig::default());
        assert_eq!(out, plan);
    }

    #[test]
    fn test_mild_deviation_scales_by_point_nine() {
        // 10 x 1750 = 17500 weekly -> 2500/day, 25% over
        let macros = setup(1750.0);
        let plan = vec![Assignment::new("a", 10, 0, MealSlot::Lunch)];
        let out = fine_tune(&plan, &macros, &target(), &PlannerConfig::default());
        assert_eq!(out[0].servings, 9);
    }

    #[test]
    fn test_severe_deviation_scales_by_point_eight() {
        // 10 x 2800 = 28000 weekly -> 4000/day, 100% over
        let macros = setup(2800.0);
        let plan = vec![Assignment::new("a", 10, 0, MealSlot::Lunch)];
        let out = fine_tune(&plan, &macros, &target(), &PlannerConfig::default());
        assert_eq!(out[0].servings, 8);
    }

    #[test]
    fn test_under_target_also_scales_down() {
        // 5 x 100 kcal weekly -> ~71/day, far under
        let macros = setup(100.0);
        let plan = vec![Assignment::new("a", 5, 2, MealSlot::Dinner)];
        let out = fine_tune(&plan, &macros, &target(), &PlannerConfig::default());
        assert_eq!(out[0].servings, 4);
        assert_eq!(out[0].day, 2);
        assert_eq!(out[0].slot, MealSlot::Dinner);
    }

    #[test]
    fn test_floor_of_one_serving() {
        let macros = setup(100.0);
        let plan = vec![Assignment::new("a", 1, 0, MealSlot::Breakfast)];
        let out = fine_tune(&plan, &macros, &target(), &PlannerConfig::default());
        assert_eq!(out[0].servings, 1);
    }

    #[test]
    fn test_weekly_totals_skips_unknown() {
        let macros = setup(500.0);
        let plan = vec![
            Assignment::new("a", 2, 0, MealSlot::Breakfast),
            Assignment::new("ghost", 3, 0, MealSlot::Lunch),
        ];
        let totals = weekly_totals(&plan, &macros);
        assert_eq!(totals, MacroProfile::new(1000.0, 20.0, 20.0, 20.0));
    }
}
