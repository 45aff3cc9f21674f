use std::path::Path;

use chrono::{Local, NaiveDate};
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

use carb_cycle_tracker_rs::cli::{Cli, Command, TuningArgs};
use carb_cycle_tracker_rs::error::{Result, TrackerError};
use carb_cycle_tracker_rs::export::export_csv;
use carb_cycle_tracker_rs::interface::{
    collect_daily_record, display_history, display_macro_plan, prompt_positive, prompt_text,
    prompt_yes_no, resolve_diet_type,
};
use carb_cycle_tracker_rs::models::{parse_date, DailyRecord, UserProfile};
use carb_cycle_tracker_rs::planner::{assess_record, PlannerConfig, ToleranceVerdict};
use carb_cycle_tracker_rs::state::{load_state, save_state, RecordBook};

fn main() {
    init_logging();

    if let Err(e) = run() {
        error!("command failed: {e}");
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Log to stderr; `RUST_LOG` overrides the default `warn` level.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();
    let path = Path::new(&cli.file);
    let today = Local::now().date_naive();

    match command {
        Command::Profile {
            username,
            email,
            weight,
            height,
            birth,
        } => cmd_profile(path, today, username, email, weight, height, birth),
        Command::Plan { tuning, today: at } => {
            let reference = match at {
                Some(text) => parse_date(&text)?,
                None => today,
            };
            cmd_plan(path, reference, tuning)
        }
        Command::Add {
            date,
            diet,
            workout,
            carbs,
            fat,
            protein,
            calories,
            status,
        } => {
            let record = match diet {
                Some(diet) => {
                    let date = match date {
                        Some(text) => parse_date(&text)?,
                        None => today,
                    };
                    let mut record = DailyRecord::new(date, resolve_diet_type(&diet)?);
                    record.workout_plan = workout.unwrap_or_default();
                    record.carbs = carbs;
                    record.fat = fat;
                    record.protein = protein;
                    record.calories = calories;
                    record.goal_status = status.unwrap_or_default();
                    record
                }
                None => {
                    let record = collect_daily_record(today)?;
                    if !prompt_yes_no("Save this record?", true)? {
                        println!("Record discarded.");
                        return Ok(());
                    }
                    record
                }
            };
            cmd_add(path, today, record)
        }
        Command::History { page, tuning } => cmd_history(path, today, page, tuning),
        Command::Export { out, tuning } => cmd_export(path, today, &out, tuning),
    }
}

/// Save body metrics, prompting for anything not passed as a flag.
fn cmd_profile(
    path: &Path,
    today: NaiveDate,
    username: Option<String>,
    email: Option<String>,
    weight: Option<f64>,
    height: Option<f64>,
    birth: Option<String>,
) -> Result<()> {
    let username = match username {
        Some(name) => name,
        None => prompt_text("Username")?,
    };
    if username.trim().is_empty() {
        return Err(TrackerError::InvalidInput(
            "username must not be empty".to_string(),
        ));
    }

    let weight_kg = match weight {
        Some(w) => w,
        None => prompt_positive("Weight (kg)")?,
    };
    let height_cm = match height {
        Some(h) => h,
        None => prompt_positive("Height (cm)")?,
    };
    let birth_date = match birth {
        Some(text) => parse_date(&text)?,
        None => parse_date(&prompt_text("Birth date (YYYY-MM-DD)")?)?,
    };

    let profile = UserProfile {
        username: username.trim().to_string(),
        email: email.filter(|e| !e.trim().is_empty()),
        weight_kg,
        height_cm,
        birth_date,
    };
    // Reject bad metrics before anything is written.
    profile.metrics(today)?;

    let mut book = RecordBook::new(load_state(path)?);
    book.set_profile(profile);
    save_state(path, &book.to_state())?;
    info!(path = %path.display(), "profile saved");

    println!("Profile saved.");
    cmd_plan(path, today, TuningArgs::default())
}

/// Print targets for the stored profile.
fn cmd_plan(path: &Path, reference: NaiveDate, tuning: TuningArgs) -> Result<()> {
    let config = tuning.config()?;
    let book = RecordBook::new(load_state(path)?);
    let plan = book.plan(reference, &config)?;

    if let Some(profile) = book.profile() {
        display_macro_plan(&plan, profile);
    }

    Ok(())
}

/// Log a record and show how it grades.
fn cmd_add(path: &Path, today: NaiveDate, record: DailyRecord) -> Result<()> {
    let mut book = RecordBook::new(load_state(path)?);

    if book.profile().is_some() {
        let config = PlannerConfig::default();
        let plan = book.plan(today, &config)?;
        let assessment = assess_record(&record, &plan, config.tolerance_ratio);
        println!(
            "{} {}: carbs {} | fat {} | protein {} | calories {}",
            record.date,
            record.diet_type.name(),
            grade(assessment.carbs),
            grade(assessment.fat),
            grade(assessment.protein),
            grade(assessment.calories),
        );
        if assessment.all_logged_on_target() {
            println!("Everything logged is on target.");
        }
    }

    book.add_record(record);
    save_state(path, &book.to_state())?;
    info!(path = %path.display(), records = book.len(), "record added");

    println!("Record saved ({} total).", book.len());
    Ok(())
}

/// Show one page of history.
fn cmd_history(path: &Path, today: NaiveDate, page: usize, tuning: TuningArgs) -> Result<()> {
    let config = tuning.config()?;
    let book = RecordBook::new(load_state(path)?);
    let plan = book
        .profile()
        .map(|_| book.plan(today, &config))
        .transpose()?;

    let history = book.page(page)?;
    display_history(&history, plan.as_ref(), config.tolerance_ratio);
    Ok(())
}

/// Export all records to CSV.
fn cmd_export(path: &Path, today: NaiveDate, out: &Path, tuning: TuningArgs) -> Result<()> {
    let config = tuning.config()?;
    let book = RecordBook::new(load_state(path)?);

    if book.is_empty() {
        println!("No records to export.");
        return Ok(());
    }

    let plan = book
        .profile()
        .map(|_| book.plan(today, &config))
        .transpose()?;

    export_csv(out, book.records(), plan.as_ref(), config.tolerance_ratio)?;
    println!("Exported {} records to {}", book.len(), out.display());
    Ok(())
}

fn grade(verdict: Option<ToleranceVerdict>) -> &'static str {
    verdict.map(ToleranceVerdict::tag).unwrap_or("-")
}
