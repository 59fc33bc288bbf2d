mod manager;
mod persistence;

pub use manager::KitchenStateManager;
pub use persistence::{KitchenData, export_plan_csv, load_kitchen, save_kitchen, save_plan};
