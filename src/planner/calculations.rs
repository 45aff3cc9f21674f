use chrono::{Datelike, Local, NaiveDate};
use tracing::debug;

use crate::error::{Result, TrackerError};
use crate::models::{DietDayType, MacroPlan, MacroTarget, NutrientRange, PersonMetrics};
use crate::planner::constants::*;

/// Tunables for plan computation and grading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlannerConfig {
    pub activity_factor: f64,
    pub tolerance_ratio: f64,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            activity_factor: DEFAULT_ACTIVITY_FACTOR,
            tolerance_ratio: DEFAULT_TOLERANCE_RATIO,
        }
    }
}

impl PlannerConfig {
    /// Config with caller-supplied tunables.
    ///
    /// Activity factor must be positive, tolerance in `[0, 1)`.
    pub fn new(activity_factor: f64, tolerance_ratio: f64) -> Result<Self> {
        if !(activity_factor.is_finite() && activity_factor > 0.0) {
            return Err(TrackerError::InvalidInput(format!(
                "activity factor must be positive, got {}",
                activity_factor
            )));
        }
        if !(0.0..1.0).contains(&tolerance_ratio) {
            return Err(TrackerError::InvalidInput(format!(
                "tolerance must be in [0, 1), got {}",
                tolerance_ratio
            )));
        }

        Ok(Self {
            activity_factor,
            tolerance_ratio,
        })
    }
}

/// Full years between `birth_date` and `reference_date`.
///
/// One less than the year difference if the birthday has not yet come
/// around in the reference year.
pub fn compute_age(birth_date: NaiveDate, reference_date: NaiveDate) -> i32 {
    let mut age = reference_date.year() - birth_date.year();
    if (reference_date.month(), reference_date.day()) < (birth_date.month(), birth_date.day()) {
        age -= 1;
    }
    age
}

/// Age as of the local current date.
pub fn compute_age_today(birth_date: NaiveDate) -> i32 {
    compute_age(birth_date, Local::now().date_naive())
}

/// Basal metabolic rate (Mifflin–St Jeor, +5 offset for everyone).
pub fn compute_bmr(weight_kg: f64, height_cm: f64, age: i32) -> f64 {
    BMR_WEIGHT_COEFF * weight_kg + BMR_HEIGHT_COEFF * height_cm - BMR_AGE_COEFF * f64::from(age)
        + BMR_OFFSET
}

/// Total daily energy expenditure, rounded to whole kcal.
///
/// No bounds checks: non-positive inputs give meaningless output.
pub fn compute_tdee(weight_kg: f64, height_cm: f64, age: i32, activity_factor: f64) -> f64 {
    round_half_up(compute_bmr(weight_kg, height_cm, age) * activity_factor)
}

/// Round to nearest integer, ties toward +infinity.
fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Targets for one day type given TDEE.
pub fn compute_day_target(tdee: f64, split: &DaySplit) -> MacroTarget {
    MacroTarget {
        carbs_grams: split.carbs_energy_share * tdee / KCAL_PER_GRAM_CARBS,
        fat_grams: split.fat_energy_share * tdee / KCAL_PER_GRAM_FAT,
        protein_grams: NutrientRange::new(PROTEIN_MIN_GRAMS, PROTEIN_MAX_GRAMS),
        calories_kcal: NutrientRange::new(
            tdee * split.calories_min_ratio,
            tdee * split.calories_max_ratio,
        ),
    }
}

/// Split table entry for a day type.
pub fn day_split(day: DietDayType) -> &'static DaySplit {
    match day {
        DietDayType::Low => &LOW_DAY_SPLIT,
        DietDayType::Medium => &MEDIUM_DAY_SPLIT,
        DietDayType::High => &HIGH_DAY_SPLIT,
    }
}

/// Compute the per-day-type targets for a person as of `reference_date`.
pub fn compute_macro_plan(
    weight_kg: f64,
    height_cm: f64,
    birth_date: NaiveDate,
    reference_date: NaiveDate,
    config: &PlannerConfig,
) -> MacroPlan {
    let age = compute_age(birth_date, reference_date);
    let bmr = compute_bmr(weight_kg, height_cm, age);
    let tdee = compute_tdee(weight_kg, height_cm, age, config.activity_factor);

    debug!(age, bmr, tdee, activity = config.activity_factor, "computed macro plan");

    MacroPlan {
        age,
        bmr,
        tdee,
        low: compute_day_target(tdee, day_split(DietDayType::Low)),
        medium: compute_day_target(tdee, day_split(DietDayType::Medium)),
        high: compute_day_target(tdee, day_split(DietDayType::High)),
    }
}

impl MacroPlan {
    /// Plan for a set of metrics as of `reference_date`.
    pub fn for_metrics(
        metrics: &PersonMetrics,
        reference_date: NaiveDate,
        config: &PlannerConfig,
    ) -> Self {
        compute_macro_plan(
            metrics.weight_kg,
            metrics.height_cm,
            metrics.birth_date,
            reference_date,
            config,
        )
    }
}
