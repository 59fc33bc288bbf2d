use dialoguer::{Confirm, Input, Select};
use strsim::jaro_winkler;

use crate::error::{PlanError, Result};
use crate::models::{Ingredient, MacroTarget};
use crate::state::KitchenStateManager;

/// Minimum Jaro-Winkler similarity for a fuzzy ingredient match.
const FUZZY_MATCH_THRESHOLD: f64 = 0.7;

/// Largest allowed distance of the macro percentages from 100.
const PCT_SUM_TOLERANCE: f64 = 0.5;

/// Prompt for a number, offering `default`.
pub fn prompt_number(prompt: &str, default: f64) -> Result<f64> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .default(format!("{}", default))
        .interact_text()?;

    input
        .trim()
        .parse()
        .map_err(|_| PlanError::InvalidInput(format!("Invalid number: {}", input)))
}

/// Prompt for a daily macro target, starting from `current`.
///
/// Rejects percentages that do not add up to 100.
pub fn prompt_target(current: &MacroTarget) -> Result<MacroTarget> {
    let energy_kcal = prompt_number("Daily energy target (kcal)", current.energy_kcal)?;
    let protein_pct = prompt_number("Protein (% of energy)", current.protein_pct)?;
    let carb_pct = prompt_number("Carbohydrate (% of energy)", current.carb_pct)?;
    let fat_pct = prompt_number("Fat (% of energy)", current.fat_pct)?;

    let sum = protein_pct + carb_pct + fat_pct;
    if (sum - 100.0).abs() > PCT_SUM_TOLERANCE {
        return Err(PlanError::InvalidInput(format!(
            "Macro percentages must add up to 100 (got {:.1})",
            sum
        )));
    }

    let target = MacroTarget {
        energy_kcal,
        protein_pct,
        carb_pct,
        fat_pct,
    };
    target.validate()?;
    Ok(target)
}

/// Prompt for one ingredient with fuzzy matching.
///
/// Returns `None` when the user enters nothing.
pub fn prompt_ingredient(manager: &KitchenStateManager) -> Result<Option<String>> {
    loop {
        let input: String = Input::new()
            .with_prompt("Ingredient (or press Enter to finish)")
            .allow_empty(true)
            .interact_text()?;

        let input = input.trim();
        if input.is_empty() {
            return Ok(None);
        }

        if let Some(ingredient) = manager.find_ingredient(input) {
            return Ok(Some(ingredient.id.clone()));
        }

        let query = input.to_lowercase();
        let mut candidates: Vec<(&Ingredient, f64)> = manager
            .all_ingredients()
            .into_iter()
            .map(|i| (i, jaro_winkler(&i.name.to_lowercase(), &query)))
            .filter(|(_, score)| *score > FUZZY_MATCH_THRESHOLD)
            .collect();

        candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

        if candidates.is_empty() {
            println!("No matching ingredient found for '{}'", input);
            continue;
        }

        if candidates.len() == 1 {
            let ingredient = candidates[0].0;
            let confirm = Confirm::new()
                .with_prompt(format!("Did you mean '{}'?", ingredient.name))
                .default(true)
                .interact()?;

            if confirm {
                return Ok(Some(ingredient.id.clone()));
            }
            continue;
        }

        let options: Vec<&Ingredient> = candidates.iter().take(5).map(|(i, _)| *i).collect();
        let mut labels: Vec<String> = options.iter().map(|i| i.name.clone()).collect();
        labels.push("None of these".to_string());

        let selection = Select::new()
            .with_prompt("Which did you mean?")
            .items(&labels)
            .default(0)
            .interact()?;

        if selection < options.len() {
            return Ok(Some(options[selection].id.clone()));
        }
    }
}

/// Interactively update pantry quantities. Returns the number of updates.
pub fn prompt_stock_updates(manager: &mut KitchenStateManager) -> Result<usize> {
    let mut updated = 0;

    while let Some(id) = prompt_ingredient(manager)? {
        let (name, unit) = match manager.get_ingredient(&id) {
            Some(i) => (i.name.clone(), i.unit.clone()),
            None => continue,
        };
        let current = manager.pantry().quantity_of(&id).unwrap_or(0.0);

        let quantity = prompt_number(&format!("Quantity of {} on hand ({})", name, unit), current)?;
        match manager.set_stock(&id, quantity) {
            Ok(()) => {
                updated += 1;
                println!("{}: {} {}", name, quantity, unit);
            }
            Err(e) => println!("{}", e),
        }
    }

    Ok(updated)
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
