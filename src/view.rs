//! Derived View
//!
//! Sorted, filtered projection of the task list for display.

use std::cmp::Ordering;

use crate::models::{FilterMode, Priority, Task};

/// Sort weight per priority; larger sorts first
pub fn priority_rank(priority: Priority) -> u8 {
    match priority {
        Priority::Low => 1,
        Priority::Medium => 2,
        Priority::High => 3,
    }
}

/// Incomplete first, then higher priority, then earlier start time.
/// `HH:MM` is fixed width, so string order is time order.
pub fn compare_tasks(a: &Task, b: &Task) -> Ordering {
    a.completed
        .cmp(&b.completed)
        .then_with(|| priority_rank(b.priority).cmp(&priority_rank(a.priority)))
        .then_with(|| a.start_time.cmp(&b.start_time))
}

/// Stable sort, then filter. Filtering keeps the sorted order.
pub fn compute_view(tasks: &[Task], filter: FilterMode) -> Vec<Task> {
    let mut sorted = tasks.to_vec();
    sorted.sort_by(compare_tasks);
    sorted.retain(|t| filter.matches(t));
    sorted
}
