//! Creation Form State
//!
//! Uncommitted input for a new task. Kept in a `reactive_stores::Store` so each
//! input binds to its own field.

use reactive_stores::Store;

use crate::config::FormDefaults;
use crate::models::{NewTask, Priority};

#[derive(Clone, Debug, PartialEq, Eq, Store)]
pub struct TaskForm {
    pub title: String,
    pub subject: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub priority: Priority,
    /// Collapsed forms show only the "add" button
    pub expanded: bool,
}

impl TaskForm {
    pub fn new(today: String, defaults: &FormDefaults) -> Self {
        Self {
            title: String::new(),
            subject: String::new(),
            date: today,
            start_time: defaults.start_time.to_string(),
            end_time: defaults.end_time.to_string(),
            priority: defaults.priority,
            expanded: false,
        }
    }

    /// Take the entered task if title and subject are non-empty.
    ///
    /// Accepting clears title and subject and collapses the form; date, times
    /// and priority carry over to the next entry. A rejected submit leaves
    /// everything as it was.
    pub fn submit(&mut self) -> Option<NewTask> {
        // Presence check only: "   " is a valid title
        if self.title.is_empty() || self.subject.is_empty() {
            return None;
        }
        let task = NewTask {
            title: std::mem::take(&mut self.title),
            subject: std::mem::take(&mut self.subject),
            date: self.date.clone(),
            start_time: self.start_time.clone(),
            end_time: self.end_time.clone(),
            priority: self.priority,
        };
        self.expanded = false;
        Some(task)
    }
}
