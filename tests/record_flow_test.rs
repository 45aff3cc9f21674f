use chrono::NaiveDate;
use tempfile::tempdir;

use carb_cycle_tracker_rs::export::export_csv;
use carb_cycle_tracker_rs::models::{DailyRecord, DietDayType, UserProfile};
use carb_cycle_tracker_rs::planner::{PlannerConfig, ToleranceVerdict, PAGE_SIZE};
use carb_cycle_tracker_rs::state::{load_state, save_state, RecordBook, TrackerState};
use carb_cycle_tracker_rs::TrackerError;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
}

fn sample_profile() -> UserProfile {
    UserProfile {
        username: "mei".to_string(),
        email: Some("mei@example.com".to_string()),
        weight_kg: 60.0,
        height_cm: 165.0,
        birth_date: NaiveDate::from_ymd_opt(1995, 6, 1).unwrap(),
    }
}

fn logged_day(day: u32, diet: DietDayType, carbs: f64, calories: f64) -> DailyRecord {
    let mut record = DailyRecord::new(NaiveDate::from_ymd_opt(2025, 5, day).unwrap(), diet);
    record.carbs = Some(carbs);
    record.calories = Some(calories);
    record
}

#[test]
fn test_profile_and_records_survive_reload() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("tracker_state.json");

    let mut book = RecordBook::new(load_state(&path).unwrap());
    assert!(book.is_empty());
    assert!(book.profile().is_none());

    book.set_profile(sample_profile());
    book.add_record(logged_day(1, DietDayType::Low, 95.0, 1400.0));
    book.add_record(logged_day(2, DietDayType::High, 300.0, 2300.0));
    save_state(&path, &book.to_state()).unwrap();

    let reloaded = RecordBook::new(load_state(&path).unwrap());
    assert_eq!(reloaded.len(), 2);
    assert_eq!(reloaded.profile(), Some(&sample_profile()));
    // Newest first
    assert_eq!(reloaded.records()[0].diet_type, DietDayType::High);
}

#[test]
fn test_assessments_follow_each_record_day_type() {
    let mut book = RecordBook::new(TrackerState::default());
    book.set_profile(sample_profile());
    book.add_record(logged_day(1, DietDayType::Low, 95.0, 1400.0));
    book.add_record(logged_day(2, DietDayType::High, 300.0, 2300.0));

    let config = PlannerConfig::default();
    let plan = book.plan(today(), &config).unwrap();
    let assessments = book.assessments(&plan, config.tolerance_ratio);

    // High day: carbs target 259.2 -> upper 285.12
    assert_eq!(assessments[0].carbs, Some(ToleranceVerdict::TooHigh));
    assert_eq!(assessments[0].calories, Some(ToleranceVerdict::OnTarget));

    // Low day: carbs 95 vs 86.4 ok, calories 1400 below 1410.05
    assert_eq!(assessments[1].carbs, Some(ToleranceVerdict::OnTarget));
    assert_eq!(assessments[1].calories, Some(ToleranceVerdict::TooLow));
    assert_eq!(assessments[1].protein, None);
}

#[test]
fn test_pagination_over_many_records() {
    let mut book = RecordBook::new(TrackerState::default());
    for day in 1..=23 {
        book.add_record(logged_day(day, DietDayType::Medium, 150.0, 1900.0));
    }

    assert_eq!(book.total_pages(), 3);
    assert_eq!(book.page(1).unwrap().records.len(), PAGE_SIZE);
    assert_eq!(book.page(3).unwrap().records.len(), 3);
    assert!(matches!(
        book.page(4),
        Err(TrackerError::PageOutOfRange { page: 4, total: 3 })
    ));
}

#[test]
fn test_invalid_profile_blocks_plan() {
    let mut profile = sample_profile();
    profile.weight_kg = -5.0;

    let mut book = RecordBook::new(TrackerState::default());
    book.set_profile(profile);

    assert!(matches!(
        book.plan(today(), &PlannerConfig::default()),
        Err(TrackerError::InvalidInput(_))
    ));
}

#[test]
fn test_export_writes_one_row_per_record() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("export.csv");

    let mut book = RecordBook::new(TrackerState::default());
    book.set_profile(sample_profile());
    book.add_record(logged_day(1, DietDayType::Low, 95.0, 1400.0));
    book.add_record(logged_day(2, DietDayType::Medium, 172.0, 1950.0));

    let config = PlannerConfig::default();
    let plan = book.plan(today(), &config).unwrap();
    export_csv(&out, book.records(), Some(&plan), config.tolerance_ratio).unwrap();

    let text = std::fs::read_to_string(&out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[1].starts_with("2025-05-02,medium"));
    assert!(lines[2].ends_with("ok,,,low"));
}
