use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlanError {
    #[error("Invalid macro target: {0}")]
    InvalidTarget(String),

    #[error("Recipe '{recipe}' references unknown ingredient '{ingredient}'")]
    MissingIngredientReference { recipe: String, ingredient: String },

    #[error("Duplicate recipe id: {0}")]
    DuplicateRecipe(String),

    #[error("Ingredient not found: {0}")]
    IngredientNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, PlanError>;
