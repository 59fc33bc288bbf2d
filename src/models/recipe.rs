use serde::{Deserialize, Serialize};

/// One preparation step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeStep {
    pub text: String,

    #[serde(default)]
    pub duration_minutes: Option<u32>,
}

/// Quantity of an ingredient needed for a single serving.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientRequirement {
    pub ingredient_id: String,
    pub quantity: f64,
    pub unit: String,
}

/// A recipe. Nutrition is derived from `requirements` on every planning run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: String,

    pub name: String,

    #[serde(default)]
    pub steps: Vec<RecipeStep>,

    #[serde(default)]
    pub requirements: Vec<IngredientRequirement>,

    /// Display hint only; requirement quantities are always per single serving.
    #[serde(default = "default_servings")]
    pub default_servings: u32,
}

fn default_servings() -> u32 {
    1
}

impl Recipe {
    /// Sum of the timed steps.
    pub fn total_duration_minutes(&self) -> u32 {
        self.steps.iter().filter_map(|s| s.duration_minutes).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_defaults() {
        let json = r#"{"id": "toast", "name": "Toast"}"#;
        let recipe: Recipe = serde_json::from_str(json).unwrap();
        assert_eq!(recipe.default_servings, 1);
        assert!(recipe.steps.is_empty());
        assert!(recipe.requirements.is_empty());
    }

    #[test]
    fn test_total_duration() {
        let recipe = Recipe {
            id: "rice".to_string(),
            name: "Rice".to_string(),
            steps: vec![
                RecipeStep {
                    text: "Rinse".to_string(),
                    duration_minutes: None,
                },
                RecipeStep {
                    text: "Simmer".to_string(),
                    duration_minutes: Some(18),
                },
                RecipeStep {
                    text: "Rest".to_string(),
                    duration_minutes: Some(5),
                },
            ],
            requirements: vec![],
            default_servings: 2,
        };
        assert_eq!(recipe.total_duration_minutes(), 23);
    }
}
