use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TrackerError};
use crate::models::PersonMetrics;

/// The single user this state file belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub username: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    pub weight_kg: f64,

    pub height_cm: f64,

    pub birth_date: NaiveDate,
}

impl UserProfile {
    /// Validated metrics for the planner.
    ///
    /// Rejects non-positive body measurements and birth dates after `today`.
    pub fn metrics(&self, today: NaiveDate) -> Result<PersonMetrics> {
        validate_positive("weight", self.weight_kg)?;
        validate_positive("height", self.height_cm)?;

        if self.birth_date > today {
            return Err(TrackerError::InvalidInput(format!(
                "birth date {} is in the future",
                self.birth_date
            )));
        }

        Ok(PersonMetrics {
            weight_kg: self.weight_kg,
            height_cm: self.height_cm,
            birth_date: self.birth_date,
        })
    }
}

fn validate_positive(field: &str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(TrackerError::InvalidInput(format!(
            "{} must be a positive number, got {}",
            field, value
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(weight: f64, height: f64) -> UserProfile {
        UserProfile {
            username: "mei".to_string(),
            email: None,
            weight_kg: weight,
            height_cm: height,
            birth_date: NaiveDate::from_ymd_opt(1995, 3, 1).unwrap(),
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
    }

    #[test]
    fn test_valid_profile_yields_metrics() {
        let metrics = profile(60.0, 165.0).metrics(today()).unwrap();
        assert_eq!(metrics.weight_kg, 60.0);
        assert_eq!(metrics.height_cm, 165.0);
    }

    #[test]
    fn test_rejects_non_positive_measurements() {
        assert!(matches!(
            profile(0.0, 165.0).metrics(today()),
            Err(TrackerError::InvalidInput(_))
        ));
        assert!(profile(60.0, -1.0).metrics(today()).is_err());
        assert!(profile(f64::NAN, 165.0).metrics(today()).is_err());
    }

    #[test]
    fn test_rejects_future_birth_date() {
        let mut p = profile(60.0, 165.0);
        p.birth_date = NaiveDate::from_ymd_opt(2030, 1, 1).unwrap();
        assert!(p.metrics(today()).is_err());
    }
}
