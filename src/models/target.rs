use serde::{Deserialize, Serialize};

use crate::error::{PlanError, Result};
use crate::models::MacroProfile;
use crate::planner::constants::{KCAL_PER_G_CARBS, KCAL_PER_G_FAT, KCAL_PER_G_PROTEIN};

/// Daily energy target with the share of energy each macro should supply.
///
/// Percentages are expected to sum to 100; that is the caller's concern.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroTarget {
    pub energy_kcal: f64,
    pub protein_pct: f64,
    pub carb_pct: f64,
    pub fat_pct: f64,
}

impl Default for MacroTarget {
    fn default() -> Self {
        Self {
            energy_kcal: 2000.0,
            protein_pct: 30.0,
            carb_pct: 40.0,
            fat_pct: 30.0,
        }
    }
}

impl MacroTarget {
    /// Reject non-positive energy and percentages outside [0, 100].
    pub fn validate(&self) -> Result<()> {
        if !(self.energy_kcal.is_finite() && self.energy_kcal > 0.0) {
            return Err(PlanError::InvalidTarget(format!(
                "energy target must be positive, got {}",
                self.energy_kcal
            )));
        }

        let pcts = [
            ("protein", self.protein_pct),
            ("carb", self.carb_pct),
            ("fat", self.fat_pct),
        ];
        for (label, pct) in pcts {
            if !(0.0..=100.0).contains(&pct) {
                return Err(PlanError::InvalidTarget(format!(
                    "{} percentage must be within 0..=100, got {}",
                    label, pct
                )));
            }
        }

        Ok(())
    }

    /// Daily target in absolute units: kcal and grams of each macro.
    pub fn daily_grams(&self) -> MacroProfile {
        MacroProfile {
            energy: self.energy_kcal,
            protein: self.energy_kcal * self.protein_pct / 100.0 / KCAL_PER_G_PROTEIN,
            carbs: self.energy_kcal * self.carb_pct / 100.0 / KCAL_PER_G_CARBS,
            fat: self.energy_kcal * self.fat_pct / 100.0 / KCAL_PER_G_FAT,
        }
    }
}
