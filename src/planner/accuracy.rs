use crate::models::{Macro, MacroAccuracy, MacroProfile};
use crate::planner::constants::DAYS_PER_WEEK;

/// round((1 - |actual - target| / target) * 100), unclamped.
///
/// A zero target scores 100 when actual is also zero and 0 otherwise.
pub fn accuracy_pct(actual: f64, target: f64) -> i64 {
    if target <= 0.0 {
        return if actual == 0.0 { 100 } else { 0 };
    }
    ((1.0 - (actual - target).abs() / target) * 100.0).round() as i64
}

/// Per-macro accuracy of the daily average of `weekly` against `daily_target`.
pub fn macro_accuracy(weekly: &MacroProfile, daily_target: &MacroProfile) -> MacroAccuracy {
    let daily = weekly.div(DAYS_PER_WEEK as f64);
    let score = |which| accuracy_pct(daily.get(which), daily_target.get(which));

    MacroAccuracy {
        calories: score(Macro::Energy),
        protein: score(Macro::Protein),
        carbs: score(Macro::Carbs),
        fat: score(Macro::Fat),
    }
}
