//! Frontend Models
//!
//! Data structures persisted in local storage and shared by the components.

use serde::{Deserialize, Serialize};

/// Task priority, ordered Low < Medium < High
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }

    /// Parse a `<select>` value; anything unknown falls back to Medium
    pub fn from_str(s: &str) -> Self {
        match s {
            "Low" => Priority::Low,
            "High" => Priority::High,
            _ => Priority::Medium,
        }
    }

    /// CSS class for the priority badge
    pub fn badge_class(&self) -> &'static str {
        match self {
            Priority::Low => "badge badge-low",
            Priority::Medium => "badge badge-medium",
            Priority::High => "badge badge-high",
        }
    }
}

/// A single study task
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    pub subject: String,
    /// `YYYY-MM-DD`
    pub date: String,
    /// `HH:MM`, 24-hour
    pub start_time: String,
    pub end_time: String,
    pub priority: Priority,
    pub completed: bool,
    /// Milliseconds since epoch
    pub created_at: i64,
}

impl Task {
    pub fn new(id: String, data: NewTask, created_at: i64) -> Self {
        Self {
            id,
            title: data.title,
            subject: data.subject,
            date: data.date,
            start_time: data.start_time,
            end_time: data.end_time,
            priority: data.priority,
            completed: false,
            created_at,
        }
    }
}

/// User-supplied fields for a task that does not exist yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    pub title: String,
    pub subject: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub priority: Priority,
}

/// Visual theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Only the exact text `dark` selects the dark theme
    pub fn from_stored(s: &str) -> Self {
        if s == "dark" { Theme::Dark } else { Theme::Light }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Which subset of tasks the list shows (not persisted)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterMode {
    #[default]
    All,
    Pending,
    Completed,
}

impl FilterMode {
    pub const ALL: [FilterMode; 3] = [FilterMode::All, FilterMode::Pending, FilterMode::Completed];

    pub fn matches(&self, task: &Task) -> bool {
        match self {
            FilterMode::All => true,
            FilterMode::Pending => !task.completed,
            FilterMode::Completed => task.completed,
        }
    }

    /// Filter button label
    pub fn label(&self) -> &'static str {
        match self {
            FilterMode::All => "All",
            FilterMode::Pending => "Pending",
            FilterMode::Completed => "Completed",
        }
    }

    /// List header shown above the tasks
    pub fn heading(&self) -> &'static str {
        match self {
            FilterMode::All => "All Tasks",
            FilterMode::Pending => "To Do",
            FilterMode::Completed => "Finished",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_json_uses_camel_case_fields() {
        let task = Task {
            id: "a".to_string(),
            title: "Read".to_string(),
            subject: "CS".to_string(),
            date: "2024-05-01".to_string(),
            start_time: "09:00".to_string(),
            end_time: "10:00".to_string(),
            priority: Priority::High,
            completed: false,
            created_at: 1714554000000,
        };
        let json = serde_json::to_value(&task).unwrap();
        assert_eq!(json["startTime"], "09:00");
        assert_eq!(json["endTime"], "10:00");
        assert_eq!(json["createdAt"], 1714554000000i64);
        assert_eq!(json["priority"], "High");
    }

    #[test]
    fn test_theme_from_stored() {
        assert_eq!(Theme::from_stored("dark"), Theme::Dark);
        assert_eq!(Theme::from_stored("light"), Theme::Light);
        assert_eq!(Theme::from_stored("Dark"), Theme::Light);
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
    }

    #[test]
    fn test_filter_labels() {
        assert_eq!(FilterMode::Pending.heading(), "To Do");
        assert_eq!(FilterMode::Completed.label(), "Completed");
        assert_eq!(Priority::from_str("bogus"), Priority::Medium);
    }
}
