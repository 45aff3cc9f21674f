mod diet;
mod profile;
mod record;
mod targets;

pub use diet::DietDayType;
pub use profile::UserProfile;
pub use record::{parse_date, parse_optional_number, DailyRecord};
pub use targets::{MacroPlan, MacroTarget, NutrientRange, PersonMetrics};
