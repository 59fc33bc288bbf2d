use crate::models::{MacroAccuracy, MacroTarget, MealPlan, MealSlot, Recipe};
use crate::planner::{Availability, DAYS_PER_WEEK};
use crate::state::KitchenStateManager;

/// Accuracy below which a macro is flagged in the summary.
const ACCURACY_WARN_PCT: i64 = 85;

fn recipe_name<'a>(recipes: &'a [Recipe], id: &'a str) -> &'a str {
    recipes
        .iter()
        .find(|r| r.id == id)
        .map_or(id, |r| r.name.as_str())
}

/// Clamp signed accuracy for display.
fn display_pct(pct: i64) -> i64 {
    pct.clamp(0, 100)
}

/// Display a weekly plan: per-day slots, totals, accuracy and shortfall.
pub fn display_meal_plan(plan: &MealPlan, recipes: &[Recipe], target: &MacroTarget) {
    if plan.is_empty() {
        println!("No meal plan generated (no recipe can be made from the pantry).");
        return;
    }

    println!();
    println!("=== Weekly Plan ===");

    let name_width = plan
        .assignments
        .iter()
        .map(|a| recipe_name(recipes, &a.recipe_id).len())
        .max()
        .unwrap_or(10);

    for day in 0..DAYS_PER_WEEK {
        let items = plan.for_day(day);
        if items.is_empty() {
            continue;
        }

        println!();
        println!("Day {}", day + 1);
        for a in MealSlot::ALL
            .iter()
            .flat_map(|slot| items.iter().filter(move |a| a.slot == *slot))
        {
            println!(
                "  {:<9} {:<width$}  x{}",
                a.slot.as_str(),
                recipe_name(recipes, &a.recipe_id),
                a.servings,
                width = name_width
            );
        }
    }

    let daily = plan.weekly_totals.div(DAYS_PER_WEEK as f64).rounded();
    let goal = target.daily_grams().rounded();

    println!();
    println!("--- Summary ---");
    println!("Total servings: {}", plan.total_servings());
    println!(
        "Weekly totals: {:.0} kcal | P {:.0} g | C {:.0} g | F {:.0} g",
        plan.weekly_totals.energy,
        plan.weekly_totals.protein,
        plan.weekly_totals.carbs,
        plan.weekly_totals.fat
    );
    println!(
        "Daily average: {:.0} kcal | P {:.0} g | C {:.0} g | F {:.0} g",
        daily.energy, daily.protein, daily.carbs, daily.fat
    );
    println!(
        "Daily target:  {:.0} kcal | P {:.0} g | C {:.0} g | F {:.0} g",
        goal.energy, goal.protein, goal.carbs, goal.fat
    );

    display_accuracy(&plan.macro_accuracy);

    let collisions = plan.slot_collisions();
    if !collisions.is_empty() {
        println!();
        for ((day, slot), count) in collisions {
            println!("Note: day {} {} holds {} recipes", day + 1, slot, count);
        }
    }

    println!();
    if plan.missing_ingredients.is_empty() {
        println!("Pantry covers the whole plan.");
    } else {
        println!("--- Shopping List ---");
        for s in &plan.missing_ingredients {
            println!(
                "  {} - need {:.1} {} more (have {:.1})",
                s.name, s.needed_quantity, s.unit, s.available_quantity
            );
        }
    }
    println!();
}

/// Display accuracy per macro, clamped to 0..=100.
pub fn display_accuracy(accuracy: &MacroAccuracy) {
    println!();
    println!("--- Accuracy ---");
    for (label, pct) in [
        ("calories", accuracy.calories),
        ("protein", accuracy.protein),
        ("carbs", accuracy.carbs),
        ("fat", accuracy.fat),
    ] {
        let flag = if pct < ACCURACY_WARN_PCT { "  (!)" } else { "" };
        println!("  {:<8} {:>3}%{}", label, display_pct(pct), flag);
    }
}

/// Display pantry contents and which recipes they allow.
pub fn display_pantry(manager: &KitchenStateManager) {
    let pantry = manager.pantry();
    if pantry.is_empty() {
        println!("Pantry: (empty)");
        return;
    }

    println!();
    println!("=== Pantry ({} items) ===", pantry.len());
    println!();
    for entry in pantry.entries() {
        let name = manager
            .get_ingredient(&entry.ingredient_id)
            .map_or(entry.ingredient_id.as_str(), |i| i.name.as_str());
        println!("  {} - {} {}", name, entry.quantity, entry.unit);
    }

    let makeable = manager.makeable_recipes();
    println!();
    println!("Recipes available: {}", makeable.len());
    for (recipe, availability) in makeable {
        match availability {
            Availability::Limited(n) => {
                println!("  {} - up to {} servings", recipe.name, n)
            }
            Availability::Unbounded => println!("  {} - unlimited", recipe.name),
        }
    }
    println!();
}

/// Display the current macro target.
pub fn display_target(target: &MacroTarget) {
    let grams = target.daily_grams();
    println!(
        "Target: {:.0} kcal/day | protein {:.0}% ({:.0} g) | carbs {:.0}% ({:.0} g) | fat {:.0}% ({:.0} g)",
        target.energy_kcal,
        target.protein_pct,
        grams.protein,
        target.carb_pct,
        grams.carbs,
        target.fat_pct,
        grams.fat
    );
}
