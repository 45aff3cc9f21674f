/// Default activity multiplier applied to BMR (moderately active).
pub const DEFAULT_ACTIVITY_FACTOR: f64 = 1.55;

/// Default fractional slack around a target before a value counts as off-target.
pub const DEFAULT_TOLERANCE_RATIO: f64 = 0.10;

// ─────────────────────────────────────────────────────────────────────────────
// Mifflin–St Jeor coefficients (single, sex-unaware variant)
// ─────────────────────────────────────────────────────────────────────────────

pub const BMR_WEIGHT_COEFF: f64 = 10.0;
pub const BMR_HEIGHT_COEFF: f64 = 6.25;
pub const BMR_AGE_COEFF: f64 = 5.0;
pub const BMR_OFFSET: f64 = 5.0;

// ─────────────────────────────────────────────────────────────────────────────
// Energy densities (kcal per gram)
// ─────────────────────────────────────────────────────────────────────────────

pub const KCAL_PER_GRAM_CARBS: f64 = 4.0;
pub const KCAL_PER_GRAM_FAT: f64 = 9.0;

/// Protein band in grams. Flat for every day type and every person.
pub const PROTEIN_MIN_GRAMS: f64 = 100.0;
pub const PROTEIN_MAX_GRAMS: f64 = 150.0;

/// Per-day-type split of TDEE.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DaySplit {
    /// Calorie band as fractions of TDEE.
    pub calories_min_ratio: f64,
    pub calories_max_ratio: f64,
    /// Share of TDEE taken from carbohydrate.
    pub carbs_energy_share: f64,
    /// Share of TDEE taken from fat.
    pub fat_energy_share: f64,
}

pub const LOW_DAY_SPLIT: DaySplit = DaySplit {
    calories_min_ratio: 0.68,
    calories_max_ratio: 0.72,
    carbs_energy_share: 0.15,
    fat_energy_share: 0.35,
};

pub const MEDIUM_DAY_SPLIT: DaySplit = DaySplit {
    calories_min_ratio: 0.80,
    calories_max_ratio: 0.90,
    carbs_energy_share: 0.30,
    fat_energy_share: 0.25,
};

pub const HIGH_DAY_SPLIT: DaySplit = DaySplit {
    calories_min_ratio: 0.95,
    calories_max_ratio: 1.05,
    carbs_energy_share: 0.45,
    fat_energy_share: 0.20,
};

// ─────────────────────────────────────────────────────────────────────────────
// History display
// ─────────────────────────────────────────────────────────────────────────────

/// Records shown per history page.
pub const PAGE_SIZE: usize = 10;

/// Minimum Jaro-Winkler score for accepting a fuzzy diet type match.
pub const DIET_MATCH_THRESHOLD: f64 = 0.8;
