mod manager;
mod persistence;

pub use manager::{HistoryPage, RecordBook, TrackerState};
pub use persistence::{load_state, save_state};
