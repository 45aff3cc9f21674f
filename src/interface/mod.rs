pub mod prompts;
pub mod render;

pub use prompts::{
    collect_daily_record, prompt_date, prompt_diet_type, prompt_nutrient, prompt_positive,
    prompt_text, prompt_yes_no, resolve_diet_type,
};
pub use render::{display_history, display_macro_plan};
