pub mod prompts;
pub mod render;

pub use prompts::{
    prompt_ingredient, prompt_number, prompt_stock_updates, prompt_target, prompt_yes_no,
};
pub use render::{display_accuracy, display_meal_plan, display_pantry, display_target};
