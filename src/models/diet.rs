use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TrackerError;

/// Carbohydrate level of a logged day.
///
/// Serialized with the labels the record store has always used
/// (低碳日 / 中碳日 / 高碳日); English names are accepted on input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DietDayType {
    #[default]
    #[serde(rename = "低碳日", alias = "Low", alias = "low")]
    Low,

    #[serde(rename = "中碳日", alias = "Medium", alias = "medium")]
    Medium,

    #[serde(rename = "高碳日", alias = "High", alias = "high")]
    High,
}

impl DietDayType {
    pub const ALL: [DietDayType; 3] = [DietDayType::Low, DietDayType::Medium, DietDayType::High];

    /// Stored label.
    pub fn label(self) -> &'static str {
        match self {
            DietDayType::Low => "低碳日",
            DietDayType::Medium => "中碳日",
            DietDayType::High => "高碳日",
        }
    }

    /// English name used on the command line and in tables.
    pub fn name(self) -> &'static str {
        match self {
            DietDayType::Low => "low",
            DietDayType::Medium => "medium",
            DietDayType::High => "high",
        }
    }

    /// All strings that parse to this variant exactly.
    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            DietDayType::Low => &["低碳日", "low", "low-carb", "l"],
            DietDayType::Medium => &["中碳日", "medium", "mid", "medium-carb", "m"],
            DietDayType::High => &["高碳日", "high", "high-carb", "h"],
        }
    }
}

impl fmt::Display for DietDayType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.label())
    }
}

impl FromStr for DietDayType {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        DietDayType::ALL
            .into_iter()
            .find(|day| day.aliases().contains(&needle.as_str()))
            .ok_or_else(|| TrackerError::UnknownDietType(s.to_string()))
    }
}
