//! Application Context
//!
//! Reactive handle around the task store, provided via the Leptos Context API.

use leptos::prelude::*;

use crate::models::{FilterMode, NewTask, Task, Theme};
use crate::progress::Progress;
use crate::task_store::TaskStore;
use crate::view::compute_view;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// The only copy of the task collection and theme
    store: RwSignal<TaskStore>,
    /// Current list filter, reset on reload
    pub filter: RwSignal<FilterMode>,
}

impl AppContext {
    pub fn new(store: TaskStore) -> Self {
        Self {
            store: RwSignal::new(store),
            filter: RwSignal::new(FilterMode::default()),
        }
    }

    /// Sorted and filtered tasks for the list
    pub fn visible_tasks(&self) -> Vec<Task> {
        let filter = self.filter.get();
        self.store.with(|s| compute_view(s.tasks(), filter))
    }

    /// Progress over every task, ignoring the filter
    pub fn progress(&self) -> Progress {
        self.store.with(|s| Progress::of(s.tasks()))
    }

    pub fn theme(&self) -> Theme {
        self.store.with(|s| s.theme())
    }

    pub fn now_millis(&self) -> i64 {
        self.store.with_untracked(|s| s.now_millis())
    }

    pub fn add_task(&self, data: NewTask) {
        self.store.update(|s| {
            s.add_task(data);
        });
    }

    /// Subscribers are only notified when a task actually changed
    pub fn toggle_task(&self, id: &str) {
        self.store.maybe_update(|s| s.toggle_task(id));
    }

    pub fn delete_task(&self, id: &str) {
        self.store.maybe_update(|s| s.delete_task(id));
    }

    pub fn toggle_theme(&self) {
        self.store.update(|s| {
            let next = s.theme().toggled();
            s.set_theme(next);
        });
    }
}

/// Get the app context provided by `App`
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
