use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::models::{DailyRecord, MacroPlan};
use crate::planner::{assess_record, ToleranceVerdict};

const HEADER: [&str; 12] = [
    "date",
    "diet_type",
    "workout_plan",
    "carbs",
    "fat",
    "protein",
    "calories",
    "goal_status",
    "carbs_verdict",
    "fat_verdict",
    "protein_verdict",
    "calories_verdict",
];

fn number_cell(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

fn verdict_cell(verdict: Option<ToleranceVerdict>) -> String {
    verdict.map(|v| v.tag().to_string()).unwrap_or_default()
}

/// Write records with their verdicts as CSV to any writer.
///
/// Without a plan the verdict columns are left blank.
pub fn write_records_csv<W: Write>(
    writer: W,
    records: &[DailyRecord],
    plan: Option<&MacroPlan>,
    tolerance_ratio: f64,
) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(HEADER)?;

    for record in records {
        let assessment = plan
            .map(|p| assess_record(record, p, tolerance_ratio))
            .unwrap_or_default();

        wtr.write_record([
            record.date.to_string(),
            record.diet_type.name().to_string(),
            record.workout_plan.clone(),
            number_cell(record.carbs),
            number_cell(record.fat),
            number_cell(record.protein),
            number_cell(record.calories),
            record.goal_status.clone(),
            verdict_cell(assessment.carbs),
            verdict_cell(assessment.fat),
            verdict_cell(assessment.protein),
            verdict_cell(assessment.calories),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Write records with their verdicts to a CSV file.
pub fn export_csv(
    path: &Path,
    records: &[DailyRecord],
    plan: Option<&MacroPlan>,
    tolerance_ratio: f64,
) -> Result<()> {
    let file = std::fs::File::create(path)?;
    write_records_csv(file, records, plan, tolerance_ratio)
}
