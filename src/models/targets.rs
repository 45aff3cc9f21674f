use std::ops::Index;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::DietDayType;

/// Body metrics the planner works from.
///
/// Weight and height must be positive; the planner itself does not check.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PersonMetrics {
    pub weight_kg: f64,
    pub height_cm: f64,
    pub birth_date: NaiveDate,
}

/// Inclusive band of acceptable values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NutrientRange {
    pub min: f64,
    pub max: f64,
}

impl NutrientRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }
}

/// Daily targets for one diet day type.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroTarget {
    /// Point target; tolerance is applied at evaluation time.
    pub carbs_grams: f64,

    /// Point target; tolerance is applied at evaluation time.
    pub fat_grams: f64,

    pub protein_grams: NutrientRange,

    pub calories_kcal: NutrientRange,
}

/// Targets for every diet day type, derived from one set of metrics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroPlan {
    pub age: i32,
    pub bmr: f64,
    pub tdee: f64,
    pub low: MacroTarget,
    pub medium: MacroTarget,
    pub high: MacroTarget,
}

impl MacroPlan {
    /// Target for a given day type.
    pub fn target(&self, day: DietDayType) -> &MacroTarget {
        match day {
            DietDayType::Low => &self.low,
            DietDayType::Medium => &self.medium,
            DietDayType::High => &self.high,
        }
    }

    /// Iterate day types in Low, Medium, High order.
    pub fn iter(&self) -> impl Iterator<Item = (DietDayType, &MacroTarget)> {
        DietDayType::ALL.into_iter().map(|day| (day, self.target(day)))
    }
}

impl Index<DietDayType> for MacroPlan {
    type Output = MacroTarget;

    fn index(&self, day: DietDayType) -> &Self::Output {
        self.target(day)
    }
}
