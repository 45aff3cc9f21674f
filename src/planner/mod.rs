pub mod calculations;
pub mod constants;
pub mod tolerance;

pub use calculations::{
    compute_age, compute_age_today, compute_bmr, compute_day_target, compute_macro_plan,
    compute_tdee, day_split, PlannerConfig,
};
pub use constants::*;
pub use tolerance::{
    assess_record, classify_against, classify_against_point, classify_against_range,
    RecordAssessment, ToleranceVerdict,
};
