use crate::models::{MacroPlan, UserProfile};
use crate::planner::{assess_record, ToleranceVerdict};
use crate::state::HistoryPage;

/// Format a nutrient cell as `value[tag]`, or `-` when nothing was logged.
fn nutrient_cell(value: Option<f64>, verdict: Option<ToleranceVerdict>) -> String {
    match (value, verdict) {
        (None, _) => "-".to_string(),
        (Some(v), None) => format!("{:.0}", v),
        (Some(v), Some(verdict)) => format!("{:.0} [{}]", v, verdict.tag()),
    }
}

/// Display the target table for every diet day type.
pub fn display_macro_plan(plan: &MacroPlan, profile: &UserProfile) {
    println!();
    println!("=== Macro Targets for {} ===", profile.username);
    println!();
    println!(
        "Weight {:.1} kg | Height {:.1} cm | Age {}",
        profile.weight_kg, profile.height_cm, plan.age
    );
    println!("BMR {:.0} kcal | TDEE {:.0} kcal", plan.bmr, plan.tdee);
    println!();
    println!(
        "{:<8} {:>10} {:>10} {:>12} {:>19}",
        "Day", "Carbs (g)", "Fat (g)", "Protein (g)", "Calories (kcal)"
    );

    for (day, target) in plan.iter() {
        println!(
            "{:<8} {:>10.1} {:>10.1} {:>12} {:>19}",
            day.name(),
            target.carbs_grams,
            target.fat_grams,
            format!("{:.0}-{:.0}", target.protein_grams.min, target.protein_grams.max),
            format!("{:.0}-{:.0}", target.calories_kcal.min, target.calories_kcal.max),
        );
    }

    println!();
}

/// Display one page of history, grading each nutrient when a plan is available.
pub fn display_history(page: &HistoryPage<'_>, plan: Option<&MacroPlan>, tolerance_ratio: f64) {
    if page.records.is_empty() {
        println!("No records logged yet. Use 'add' to log a day.");
        return;
    }

    println!();
    println!("=== Daily Records ===");
    println!();

    let workout_width = page
        .records
        .iter()
        .map(|r| r.workout_plan.chars().count())
        .max()
        .unwrap_or(0)
        .clamp(7, 30);

    println!(
        "{:<10}  {:<width$}  {:<6}  {:>11}  {:>11}  {:>11}  {:>11}  Status",
        "Date",
        "Workout",
        "Diet",
        "Carbs",
        "Fat",
        "Protein",
        "Calories",
        width = workout_width
    );

    for record in page.records {
        let assessment = plan
            .map(|p| assess_record(record, p, tolerance_ratio))
            .unwrap_or_default();

        let workout = if record.workout_plan.is_empty() {
            "-".to_string()
        } else {
            record.workout_plan.chars().take(workout_width).collect()
        };
        let status = if record.goal_status.is_empty() {
            "-"
        } else {
            record.goal_status.as_str()
        };

        println!(
            "{:<10}  {:<width$}  {:<6}  {:>11}  {:>11}  {:>11}  {:>11}  {}",
            record.date,
            workout,
            record.diet_type.name(),
            nutrient_cell(record.carbs, assessment.carbs),
            nutrient_cell(record.fat, assessment.fat),
            nutrient_cell(record.protein, assessment.protein),
            nutrient_cell(record.calories, assessment.calories),
            status,
            width = workout_width
        );
    }

    println!();
    println!("Page {} / {}", page.page, page.total_pages);
    if plan.is_none() {
        println!("(Save a profile to grade records against your targets.)");
    }
    println!();
}
