use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::error::Result;
use crate::planner::constants::{DEFAULT_ACTIVITY_FACTOR, DEFAULT_TOLERANCE_RATIO};
use crate::planner::PlannerConfig;

/// Carb cycle tracker: daily macro targets and a graded food log.
#[derive(Parser, Debug)]
#[command(name = "carb_cycle_tracker")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the tracker state JSON file.
    #[arg(
        short,
        long,
        global = true,
        env = "CARB_TRACKER_FILE",
        default_value = "tracker_state.json"
    )]
    pub file: String,
}

/// Planner tunables shared by commands that compute targets.
#[derive(Args, Debug, Clone, Copy)]
pub struct TuningArgs {
    /// Activity multiplier applied to BMR.
    #[arg(long, default_value_t = DEFAULT_ACTIVITY_FACTOR)]
    pub activity: f64,

    /// Fractional slack around each target (0.1 = 10%).
    #[arg(long, default_value_t = DEFAULT_TOLERANCE_RATIO)]
    pub tolerance: f64,
}

impl Default for TuningArgs {
    fn default() -> Self {
        Self {
            activity: DEFAULT_ACTIVITY_FACTOR,
            tolerance: DEFAULT_TOLERANCE_RATIO,
        }
    }
}

impl TuningArgs {
    /// Validated planner config.
    pub fn config(&self) -> Result<PlannerConfig> {
        PlannerConfig::new(self.activity, self.tolerance)
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Save body metrics. Missing values are prompted for.
    Profile {
        #[arg(long)]
        username: Option<String>,

        #[arg(long)]
        email: Option<String>,

        /// Weight in kilograms.
        #[arg(long)]
        weight: Option<f64>,

        /// Height in centimeters.
        #[arg(long)]
        height: Option<f64>,

        /// Birth date (YYYY-MM-DD).
        #[arg(long)]
        birth: Option<String>,
    },

    /// Show daily targets for each diet day type.
    Plan {
        #[command(flatten)]
        tuning: TuningArgs,

        /// Evaluate as of this date instead of today (YYYY-MM-DD).
        #[arg(long)]
        today: Option<String>,
    },

    /// Log a day. Without --diet, every field is prompted for.
    Add {
        /// Date of the record (YYYY-MM-DD), defaults to today.
        #[arg(long)]
        date: Option<String>,

        /// Diet type: low, medium, high (or 低碳日 / 中碳日 / 高碳日).
        #[arg(long)]
        diet: Option<String>,

        #[arg(long)]
        workout: Option<String>,

        #[arg(long)]
        carbs: Option<f64>,

        #[arg(long)]
        fat: Option<f64>,

        #[arg(long)]
        protein: Option<f64>,

        #[arg(long)]
        calories: Option<f64>,

        /// Free-form note on how the day went.
        #[arg(long)]
        status: Option<String>,
    },

    /// Show logged days, graded against the targets.
    History {
        /// Page number, starting at 1.
        #[arg(long, default_value_t = 1)]
        page: usize,

        #[command(flatten)]
        tuning: TuningArgs,
    },

    /// Export all logged days with their grades to CSV.
    Export {
        /// Output CSV path.
        #[arg(long, default_value = "tracker_export.csv")]
        out: PathBuf,

        #[command(flatten)]
        tuning: TuningArgs,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::History {
            page: 1,
            tuning: TuningArgs::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_add_with_flags() {
        let cli = Cli::try_parse_from([
            "carb_cycle_tracker",
            "--file",
            "state.json",
            "add",
            "--diet",
            "high",
            "--carbs",
            "250",
        ])
        .unwrap();

        assert_eq!(cli.file, "state.json");
        match cli.command {
            Some(Command::Add { diet, carbs, fat, .. }) => {
                assert_eq!(diet.as_deref(), Some("high"));
                assert_eq!(carbs, Some(250.0));
                assert_eq!(fat, None);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_history_defaults() {
        let cli = Cli::try_parse_from(["carb_cycle_tracker", "history"]).unwrap();
        match cli.command {
            Some(Command::History { page, tuning }) => {
                assert_eq!(page, 1);
                assert_eq!(tuning.activity, DEFAULT_ACTIVITY_FACTOR);
                assert_eq!(tuning.tolerance, DEFAULT_TOLERANCE_RATIO);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_cli_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
