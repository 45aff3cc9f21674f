use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::{DailyRecord, MacroPlan, NutrientRange};

/// How an observed value compares to its target band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ToleranceVerdict {
    OnTarget,
    TooLow,
    TooHigh,
}

impl ToleranceVerdict {
    /// Short tag for table cells.
    pub fn tag(self) -> &'static str {
        match self {
            ToleranceVerdict::OnTarget => "ok",
            ToleranceVerdict::TooLow => "low",
            ToleranceVerdict::TooHigh => "high",
        }
    }
}

impl fmt::Display for ToleranceVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

fn classify(observed: f64, lower: f64, upper: f64) -> ToleranceVerdict {
    if observed < lower {
        ToleranceVerdict::TooLow
    } else if observed > upper {
        ToleranceVerdict::TooHigh
    } else {
        ToleranceVerdict::OnTarget
    }
}

/// Compare against a single target widened by `tolerance_ratio` on both sides.
pub fn classify_against_point(observed: f64, target: f64, tolerance_ratio: f64) -> ToleranceVerdict {
    classify(
        observed,
        target * (1.0 - tolerance_ratio),
        target * (1.0 + tolerance_ratio),
    )
}

/// Compare against `[range_min, range_max]`, widening the low end down and the
/// high end up by `tolerance_ratio`.
pub fn classify_against_range(
    observed: f64,
    range_min: f64,
    range_max: f64,
    tolerance_ratio: f64,
) -> ToleranceVerdict {
    classify(
        observed,
        range_min * (1.0 - tolerance_ratio),
        range_max * (1.0 + tolerance_ratio),
    )
}

/// `classify_against_range` over a [`NutrientRange`].
pub fn classify_against(observed: f64, range: &NutrientRange, tolerance_ratio: f64) -> ToleranceVerdict {
    classify_against_range(observed, range.min, range.max, tolerance_ratio)
}

/// Verdicts for each nutrient of one record. `None` means nothing was logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RecordAssessment {
    pub carbs: Option<ToleranceVerdict>,
    pub fat: Option<ToleranceVerdict>,
    pub protein: Option<ToleranceVerdict>,
    pub calories: Option<ToleranceVerdict>,
}

impl RecordAssessment {
    /// True when every logged nutrient is on target.
    pub fn all_logged_on_target(&self) -> bool {
        [self.carbs, self.fat, self.protein, self.calories]
            .into_iter()
            .flatten()
            .all(|v| v == ToleranceVerdict::OnTarget)
    }
}

/// Grade a record against the target for its own diet day type.
pub fn assess_record(record: &DailyRecord, plan: &MacroPlan, tolerance_ratio: f64) -> RecordAssessment {
    let target = plan.target(record.diet_type);

    RecordAssessment {
        carbs: record
            .carbs
            .map(|v| classify_against_point(v, target.carbs_grams, tolerance_ratio)),
        fat: record
            .fat
            .map(|v| classify_against_point(v, target.fat_grams, tolerance_ratio)),
        protein: record
            .protein
            .map(|v| classify_against(v, &target.protein_grams, tolerance_ratio)),
        calories: record
            .calories
            .map(|v| classify_against(v, &target.calories_kcal, tolerance_ratio)),
    }
}
