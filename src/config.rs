//! Application Configuration
//!
//! Compile-time defaults for storage keys and new-task form fields.

use crate::models::Priority;

/// Names of the two persisted local storage entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageKeys {
    pub tasks: String,
    pub theme: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            tasks: "focusflow_tasks".to_string(),
            theme: "focusflow_theme".to_string(),
        }
    }
}

/// Initial values of the creation form's scheduling fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormDefaults {
    pub start_time: &'static str,
    pub end_time: &'static str,
    pub priority: Priority,
}

impl Default for FormDefaults {
    fn default() -> Self {
        Self {
            start_time: "09:00",
            end_time: "10:00",
            priority: Priority::Medium,
        }
    }
}
