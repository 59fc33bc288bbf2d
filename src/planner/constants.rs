/// Energy density of protein (kcal per gram).
pub const KCAL_PER_G_PROTEIN: f64 = 4.0;

/// Energy density of carbohydrate (kcal per gram).
pub const KCAL_PER_G_CARBS: f64 = 4.0;

/// Energy density of fat (kcal per gram).
pub const KCAL_PER_G_FAT: f64 = 9.0;

/// Days in a planning week; day indices run 0..DAYS_PER_WEEK.
pub const DAYS_PER_WEEK: u8 = 7;

// ─────────────────────────────────────────────────────────────────────────────
// Stage caps
// ─────────────────────────────────────────────────────────────────────────────

/// Maximum servings of one recipe emitted by the protein fill.
pub const PROTEIN_FILL_MAX_SERVINGS: u32 = 3;

/// Maximum servings of one recipe emitted by the gap filler.
pub const GAP_FILL_MAX_SERVINGS: u32 = 2;

// ─────────────────────────────────────────────────────────────────────────────
// Fine-tuning
// ─────────────────────────────────────────────────────────────────────────────

/// Relative calorie deviation tolerated before servings are scaled.
pub const CALORIE_TOLERANCE: f64 = 0.15;

/// Deviation above which the stronger scale factor applies.
pub const SEVERE_DEVIATION: f64 = 0.50;

/// Serving multiplier for deviations above SEVERE_DEVIATION.
pub const SEVERE_SCALE: f64 = 0.8;

/// Serving multiplier for deviations between the tolerance and SEVERE_DEVIATION.
pub const MILD_SCALE: f64 = 0.9;

/// Servings never drop below this after scaling.
pub const MIN_SERVINGS: u32 = 1;
