use std::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

/// One of the tracked macros.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Macro {
    Energy,
    Protein,
    Carbs,
    Fat,
}

impl Macro {
    pub const ALL: [Macro; 4] = [Macro::Energy, Macro::Protein, Macro::Carbs, Macro::Fat];

    pub fn as_str(&self) -> &'static str {
        match self {
            Macro::Energy => "calories",
            Macro::Protein => "protein",
            Macro::Carbs => "carbs",
            Macro::Fat => "fat",
        }
    }
}

/// Energy (kcal) plus protein, carbohydrate and fat (g).
///
/// Values are kept unrounded; call [`MacroProfile::rounded`] only for display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MacroProfile {
    #[serde(rename = "kcal", alias = "energy")]
    pub energy: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl MacroProfile {
    pub fn new(energy: f64, protein: f64, carbs: f64, fat: f64) -> Self {
        Self {
            energy,
            protein,
            carbs,
            fat,
        }
    }

    pub fn get(&self, which: Macro) -> f64 {
        match which {
            Macro::Energy => self.energy,
            Macro::Protein => self.protein,
            Macro::Carbs => self.carbs,
            Macro::Fat => self.fat,
        }
    }

    /// Multiply every field by `factor`.
    pub fn scale(&self, factor: f64) -> Self {
        Self {
            energy: self.energy * factor,
            protein: self.protein * factor,
            carbs: self.carbs * factor,
            fat: self.fat * factor,
        }
    }

    /// Divide every field by `divisor` (e.g. weekly totals to a daily average).
    pub fn div(&self, divisor: f64) -> Self {
        Self {
            energy: self.energy / divisor,
            protein: self.protein / divisor,
            carbs: self.carbs / divisor,
            fat: self.fat / divisor,
        }
    }

    /// Grams of `which` per kcal; 0 when the profile has no energy.
    #[inline]
    pub fn density(&self, which: Macro) -> f64 {
        if self.energy > 0.0 {
            self.get(which) / self.energy
        } else {
            0.0
        }
    }

    pub fn clamp_non_negative(&self) -> Self {
        Self {
            energy: self.energy.max(0.0),
            protein: self.protein.max(0.0),
            carbs: self.carbs.max(0.0),
            fat: self.fat.max(0.0),
        }
    }

    /// Nearest whole unit for each field.
    pub fn rounded(&self) -> Self {
        Self {
            energy: self.energy.round(),
            protein: self.protein.round(),
            carbs: self.carbs.round(),
            fat: self.fat.round(),
        }
    }
}

impl Add for MacroProfile {
    type Output = MacroProfile;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            energy: self.energy + rhs.energy,
            protein: self.protein + rhs.protein,
            carbs: self.carbs + rhs.carbs,
            fat: self.fat + rhs.fat,
        }
    }
}

impl AddAssign for MacroProfile {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl std::iter::Sum for MacroProfile {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(MacroProfile::default(), Add::add)
    }
}
