use chrono::NaiveDate;
use dialoguer::{Confirm, Input, Select};
use strsim::jaro_winkler;

use crate::error::{Result, TrackerError};
use crate::models::{parse_date, parse_optional_number, DailyRecord, DietDayType};
use crate::planner::constants::DIET_MATCH_THRESHOLD;

/// Resolve user-entered diet type text.
///
/// Tries the exact labels and names first, then the closest alias by
/// Jaro-Winkler similarity.
pub fn resolve_diet_type(input: &str) -> Result<DietDayType> {
    if let Ok(day) = input.parse::<DietDayType>() {
        return Ok(day);
    }

    let lowered = input.trim().to_lowercase();
    let needle = lowered.as_str();
    let best = DietDayType::ALL
        .into_iter()
        .flat_map(|day| day.aliases().iter().map(move |alias| (day, jaro_winkler(alias, needle))))
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));

    match best {
        Some((day, score)) if score > DIET_MATCH_THRESHOLD => Ok(day),
        _ => Err(TrackerError::UnknownDietType(input.to_string())),
    }
}

/// Prompt for a date, defaulting to `default`.
pub fn prompt_date(prompt: &str, default: NaiveDate) -> Result<NaiveDate> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .default(default.to_string())
        .interact_text()?;

    parse_date(&input)
}

/// Prompt for a positive number.
pub fn prompt_positive(prompt: &str) -> Result<f64> {
    let input: String = Input::new().with_prompt(prompt).interact_text()?;

    match parse_optional_number(&input) {
        Some(value) if value > 0.0 => Ok(value),
        _ => Err(TrackerError::InvalidInput(format!(
            "'{}' is not a positive number",
            input
        ))),
    }
}

/// Prompt for free text, empty allowed.
pub fn prompt_text(prompt: &str) -> Result<String> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()?;

    Ok(input.trim().to_string())
}

/// Prompt for an optional nutrient amount; blank means not logged.
pub fn prompt_nutrient(prompt: &str) -> Result<Option<f64>> {
    let input = prompt_text(prompt)?;
    if input.is_empty() {
        return Ok(None);
    }

    parse_optional_number(&input)
        .map(Some)
        .ok_or_else(|| TrackerError::InvalidInput(format!("'{}' is not a number", input)))
}

/// Prompt for a diet day type.
pub fn prompt_diet_type() -> Result<DietDayType> {
    let options: Vec<String> = DietDayType::ALL.iter().map(|d| d.to_string()).collect();

    let selection = Select::new()
        .with_prompt("Diet type")
        .items(&options)
        .default(0)
        .interact()?;

    Ok(DietDayType::ALL[selection.min(DietDayType::ALL.len() - 1)])
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Collect a full daily record interactively.
pub fn collect_daily_record(today: NaiveDate) -> Result<DailyRecord> {
    let date = prompt_date("Date", today)?;
    let diet_type = prompt_diet_type()?;

    let mut record = DailyRecord::new(date, diet_type);
    record.workout_plan = prompt_text("Workout plan")?;
    record.carbs = prompt_nutrient("Carbs (g)")?;
    record.fat = prompt_nutrient("Fat (g)")?;
    record.protein = prompt_nutrient("Protein (g)")?;
    record.calories = prompt_nutrient("Calories (kcal)")?;
    record.goal_status = prompt_text("Goal status")?;

    Ok(record)
}
