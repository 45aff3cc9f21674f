pub mod cli;
pub mod error;
pub mod export;
pub mod interface;
pub mod models;
pub mod planner;
pub mod state;

pub use error::{Result, TrackerError};
pub use models::{DailyRecord, DietDayType, MacroPlan, MacroTarget, PersonMetrics, UserProfile};
pub use planner::{PlannerConfig, ToleranceVerdict};
