use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TrackerError};
use crate::models::{DailyRecord, MacroPlan, UserProfile};
use crate::planner::constants::PAGE_SIZE;
use crate::planner::{assess_record, PlannerConfig, RecordAssessment};

/// Everything persisted in the state file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrackerState {
    #[serde(default)]
    pub profile: Option<UserProfile>,

    /// Newest first.
    #[serde(default)]
    pub records: Vec<DailyRecord>,
}

/// One page of history.
#[derive(Debug, Clone)]
pub struct HistoryPage<'a> {
    /// 1-based page number.
    pub page: usize,
    pub total_pages: usize,
    pub records: &'a [DailyRecord],
}

/// Manages the profile and the logged records.
pub struct RecordBook {
    profile: Option<UserProfile>,
    /// Newest first.
    records: Vec<DailyRecord>,
}

impl RecordBook {
    /// Create a record book from loaded state.
    pub fn new(state: TrackerState) -> Self {
        Self {
            profile: state.profile,
            records: state.records,
        }
    }

    pub fn profile(&self) -> Option<&UserProfile> {
        self.profile.as_ref()
    }

    /// Replace the stored profile.
    pub fn set_profile(&mut self, profile: UserProfile) {
        self.profile = Some(profile);
    }

    /// Compute the plan for the stored profile as of `today`.
    pub fn plan(&self, today: NaiveDate, config: &PlannerConfig) -> Result<MacroPlan> {
        let profile = self.profile.as_ref().ok_or(TrackerError::MissingProfile)?;
        let metrics = profile.metrics(today)?;
        Ok(MacroPlan::for_metrics(&metrics, today, config))
    }

    /// Add a record at the front of the history.
    pub fn add_record(&mut self, record: DailyRecord) {
        self.records.insert(0, record);
    }

    /// All records, newest first.
    pub fn records(&self) -> &[DailyRecord] {
        &self.records
    }

    /// Number of pages; an empty history still has one (empty) page.
    pub fn total_pages(&self) -> usize {
        self.records.len().div_ceil(PAGE_SIZE).max(1)
    }

    /// Records on a 1-based page.
    pub fn page(&self, page: usize) -> Result<HistoryPage<'_>> {
        let total_pages = self.total_pages();
        if page == 0 || page > total_pages {
            return Err(TrackerError::PageOutOfRange {
                page,
                total: total_pages,
            });
        }

        let start = (page - 1) * PAGE_SIZE;
        let end = (start + PAGE_SIZE).min(self.records.len());

        Ok(HistoryPage {
            page,
            total_pages,
            records: &self.records[start..end],
        })
    }

    /// Grade every record against `plan`, in history order.
    pub fn assessments(&self, plan: &MacroPlan, tolerance_ratio: f64) -> Vec<RecordAssessment> {
        self.records
            .iter()
            .map(|r| assess_record(r, plan, tolerance_ratio))
            .collect()
    }

    /// Convert back to persisted state.
    pub fn to_state(&self) -> TrackerState {
        TrackerState {
            profile: self.profile.clone(),
            records: self.records.clone(),
        }
    }

    /// Count of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if no records are logged.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
