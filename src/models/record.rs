use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{Result, TrackerError};
use crate::models::DietDayType;

/// One logged day.
///
/// Nutrient values are optional: a blank form field is stored as `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyRecord {
    pub date: NaiveDate,

    #[serde(default)]
    pub workout_plan: String,

    #[serde(default)]
    pub diet_type: DietDayType,

    #[serde(default, deserialize_with = "lenient_number")]
    pub carbs: Option<f64>,

    #[serde(default, deserialize_with = "lenient_number")]
    pub fat: Option<f64>,

    #[serde(default, deserialize_with = "lenient_number")]
    pub protein: Option<f64>,

    #[serde(default, deserialize_with = "lenient_number")]
    pub calories: Option<f64>,

    #[serde(default)]
    pub goal_status: String,
}

impl DailyRecord {
    /// Empty record for a date and diet type.
    pub fn new(date: NaiveDate, diet_type: DietDayType) -> Self {
        Self {
            date,
            workout_plan: String::new(),
            diet_type,
            carbs: None,
            fat: None,
            protein: None,
            calories: None,
            goal_status: String::new(),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawNumber {
    Number(f64),
    Text(String),
}

/// Accept numbers, numeric strings, blank strings and null.
fn lenient_number<'de, D>(deserializer: D) -> std::result::Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<RawNumber> = Option::deserialize(deserializer)?;
    Ok(match raw {
        Some(RawNumber::Number(value)) => Some(value),
        Some(RawNumber::Text(text)) => parse_optional_number(&text),
        None => None,
    })
}

/// Parse a user-entered number; blank or non-numeric text is `None`.
pub fn parse_optional_number(text: &str) -> Option<f64> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Parse a calendar date written as `YYYY-MM-DD` or `YYYY/MM/DD`.
pub fn parse_date(text: &str) -> Result<NaiveDate> {
    let trimmed = text.trim();
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(trimmed, "%Y/%m/%d"))
        .map_err(|_| TrackerError::InvalidDate(text.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lenient_nutrient_decoding() {
        let json = r#"{
            "date": "2025-11-16",
            "workoutPlan": "legs",
            "dietType": "高碳日",
            "carbs": "210",
            "fat": "",
            "protein": 130,
            "calories": null,
            "goalStatus": "good"
        }"#;

        let record: DailyRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.diet_type, DietDayType::High);
        assert_eq!(record.carbs, Some(210.0));
        assert_eq!(record.fat, None);
        assert_eq!(record.protein, Some(130.0));
        assert_eq!(record.calories, None);
        assert_eq!(record.workout_plan, "legs");
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let record: DailyRecord = serde_json::from_str(r#"{"date": "2025-01-02"}"#).unwrap();
        assert_eq!(record.diet_type, DietDayType::Low);
        assert_eq!(record.carbs, None);
        assert!(record.goal_status.is_empty());
    }

    #[test]
    fn test_non_numeric_text_is_missing() {
        assert_eq!(parse_optional_number("abc"), None);
        assert_eq!(parse_optional_number("  "), None);
        assert_eq!(parse_optional_number("NaN"), None);
        assert_eq!(parse_optional_number(" 95.5 "), Some(95.5));
    }

    #[test]
    fn test_parse_date_formats() {
        let expected = NaiveDate::from_ymd_opt(2025, 11, 16).unwrap();
        assert_eq!(parse_date("2025-11-16").unwrap(), expected);
        assert_eq!(parse_date("2025/11/16").unwrap(), expected);
        assert!(parse_date("2025-02-30").is_err());
        assert!(parse_date("16.11.2025").is_err());
    }
}
