//! Progress Summary
//!
//! Completion counts over the full, unfiltered task list.

use crate::models::Task;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub total: usize,
    pub completed: usize,
    /// 0..=100, rounded half up; 0 for an empty list
    pub percentage: u32,
}

/// Message shown under the progress bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encouragement {
    Empty,
    Starting,
    Halfway,
    Done,
}

impl Encouragement {
    pub fn message(&self) -> &'static str {
        match self {
            Encouragement::Empty => "Add a task to start tracking your progress.",
            Encouragement::Starting => "Starting is the hardest part. You got this!",
            Encouragement::Halfway => "Keep going! You're more than halfway there.",
            Encouragement::Done => "Great job! You've crushed all your goals today.",
        }
    }
}

impl Progress {
    pub fn of(tasks: &[Task]) -> Self {
        let total = tasks.len();
        let completed = tasks.iter().filter(|t| t.completed).count();
        Self { total, completed, percentage: percentage(completed, total) }
    }

    /// Strictly more than 50% counts as halfway
    pub fn encouragement(&self) -> Encouragement {
        if self.total == 0 {
            Encouragement::Empty
        } else if self.percentage == 100 {
            Encouragement::Done
        } else if self.percentage > 50 {
            Encouragement::Halfway
        } else {
            Encouragement::Starting
        }
    }
}

/// round(100 * completed / total) with halves rounded up, in integer math
fn percentage(completed: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((200 * completed + total) / (2 * total)) as u32
}
