use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{PlanError, Result};
use crate::planner::constants::*;

/// How the pantry is treated across recipes within one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PantryMode {
    /// Each recipe sees the full pantry; recipes sharing an ingredient can
    /// each assume all of it.
    #[default]
    Ceiling,

    /// A working copy of the pantry is reduced after every committed assignment.
    Deplete,
}

/// Tunable planner settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    pub protein_fill_max_servings: u32,
    pub gap_fill_max_servings: u32,
    pub calorie_tolerance: f64,
    pub severe_deviation: f64,
    pub severe_scale: f64,
    pub mild_scale: f64,
    pub pantry_mode: PantryMode,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            protein_fill_max_servings: PROTEIN_FILL_MAX_SERVINGS,
            gap_fill_max_servings: GAP_FILL_MAX_SERVINGS,
            calorie_tolerance: CALORIE_TOLERANCE,
            severe_deviation: SEVERE_DEVIATION,
            severe_scale: SEVERE_SCALE,
            mild_scale: MILD_SCALE,
            pantry_mode: PantryMode::default(),
        }
    }
}

impl PlannerConfig {
    /// Load from a JSON file; missing fields keep their defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: PlannerConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.protein_fill_max_servings == 0 || self.gap_fill_max_servings == 0 {
            return Err(PlanError::InvalidInput(
                "serving caps must be at least 1".to_string(),
            ));
        }
        if !(self.calorie_tolerance >= 0.0 && self.severe_deviation >= self.calorie_tolerance) {
            return Err(PlanError::InvalidInput(
                "severe_deviation must be >= calorie_tolerance >= 0".to_string(),
            ));
        }
        for scale in [self.severe_scale, self.mild_scale] {
            if !(scale > 0.0 && scale <= 1.0) {
                return Err(PlanError::InvalidInput(format!(
                    "scale factors must be within (0, 1], got {}",
                    scale
                )));
            }
        }
        Ok(())
    }
}
