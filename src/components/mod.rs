//! UI Components
//!
//! Leptos components for the study planner.

mod filter_bar;
mod progress_header;
mod study_form;
mod task_item;
mod theme_toggle;

pub use filter_bar::FilterBar;
pub use progress_header::ProgressHeader;
pub use study_form::StudyForm;
pub use task_item::TaskItem;
pub use theme_toggle::ThemeToggle;
