//! Task Store
//!
//! Single owner of the task collection and theme preference. Every mutation
//! is written straight through to persistence; storage problems are logged
//! and never reach the caller.

use crate::models::{NewTask, Task, Theme};
use crate::platform::Services;
use crate::storage::Persistence;

pub struct TaskStore {
    tasks: Vec<Task>,
    theme: Theme,
    persistence: Persistence,
    services: Services,
}

impl TaskStore {
    /// Read persisted state. A missing or corrupt collection starts empty;
    /// a stored `dark` theme is applied immediately.
    pub fn load(persistence: Persistence, services: Services) -> Self {
        let tasks = match persistence.load_tasks() {
            Ok(tasks) => tasks,
            Err(err) => {
                tracing::warn!(error = %err, "could not load tasks, starting empty");
                Vec::new()
            }
        };

        let theme = match persistence.load_theme() {
            Ok(theme) => theme.unwrap_or_default(),
            Err(err) => {
                tracing::warn!(error = %err, "could not load theme");
                Theme::default()
            }
        };
        if theme == Theme::Dark {
            services.theme_sink.apply(theme);
        }

        tracing::info!(count = tasks.len(), theme = theme.as_str(), "task store loaded");
        Self { tasks, theme, persistence, services }
    }

    /// Tasks in stored order, newest first
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn now_millis(&self) -> i64 {
        self.services.clock.now_millis()
    }

    /// Prepend a new incomplete task and return its id
    pub fn add_task(&mut self, data: NewTask) -> String {
        let id = self.services.ids.next_id();
        let task = Task::new(id.clone(), data, self.services.clock.now_millis());
        tracing::debug!(task_id = %id, "task added");
        self.tasks.insert(0, task);
        self.save_tasks();
        id
    }

    /// Flip `completed`. Returns false when no task has this id.
    pub fn toggle_task(&mut self, id: &str) -> bool {
        let found = match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.completed = !task.completed;
                tracing::debug!(task_id = %id, completed = task.completed, "task toggled");
                true
            }
            None => {
                tracing::debug!(task_id = %id, "toggle for unknown task ignored");
                false
            }
        };
        self.save_tasks();
        found
    }

    /// Returns false when no task has this id.
    pub fn delete_task(&mut self, id: &str) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        let removed = self.tasks.len() != before;
        tracing::debug!(task_id = %id, removed, "task delete");
        self.save_tasks();
        removed
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        self.services.theme_sink.apply(theme);
        if let Err(err) = self.persistence.save_theme(theme) {
            tracing::error!(error = %err, "failed to save theme");
        }
        tracing::debug!(theme = theme.as_str(), "theme set");
    }

    fn save_tasks(&self) {
        if let Err(err) = self.persistence.save_tasks(&self.tasks) {
            tracing::error!(error = %err, count = self.tasks.len(), "failed to save tasks");
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::config::StorageKeys;
    use crate::models::{FilterMode, Priority};
    use crate::platform::testing::{services, RecordingSink};
    use crate::progress::{Encouragement, Progress};
    use crate::storage::{KeyValueStore, MemoryStorage};
    use crate::view::compute_view;

    fn setup_with(backend: MemoryStorage) -> (TaskStore, Arc<MemoryStorage>, Arc<RecordingSink>) {
        let backend = Arc::new(backend);
        let sink = Arc::new(RecordingSink::default());
        let persistence = Persistence::new(backend.clone(), StorageKeys::default());
        let store = TaskStore::load(persistence, services(sink.clone()));
        (store, backend, sink)
    }

    fn setup() -> (TaskStore, Arc<MemoryStorage>, Arc<RecordingSink>) {
        setup_with(MemoryStorage::new())
    }

    fn new_task(title: &str, start: &str, priority: Priority) -> NewTask {
        NewTask {
            title: title.to_string(),
            subject: "CS".to_string(),
            date: "2024-05-01".to_string(),
            start_time: start.to_string(),
            end_time: "10:00".to_string(),
            priority,
        }
    }

    fn stored_tasks(backend: &MemoryStorage) -> Vec<Task> {
        let raw = backend.get("focusflow_tasks").unwrap().expect("tasks persisted");
        serde_json::from_str(&raw).unwrap()
    }

    #[test]
    fn test_add_task_to_empty_store() {
        let (mut store, backend, _) = setup();

        let id = store.add_task(new_task("Review Neural Networks", "09:00", Priority::High));

        assert_eq!(store.tasks().len(), 1);
        let task = &store.tasks()[0];
        assert_eq!(task.id, id);
        assert_eq!(task.title, "Review Neural Networks");
        assert!(!task.completed);
        assert_eq!(stored_tasks(&backend), store.tasks());

        let progress = Progress::of(store.tasks());
        assert_eq!((progress.completed, progress.total, progress.percentage), (0, 1, 0));
        assert_eq!(progress.encouragement(), Encouragement::Starting);
        assert!(progress.encouragement().message().starts_with("Starting is the hardest part"));
    }

    #[test]
    fn test_add_task_prepends_and_stamps() {
        let (mut store, _, _) = setup();

        let first = store.add_task(new_task("First", "09:00", Priority::Low));
        let second = store.add_task(new_task("Second", "09:00", Priority::Low));

        assert_eq!(store.tasks()[0].id, second);
        assert_eq!(store.tasks()[1].id, first);
        assert_ne!(first, second);
        assert!(store.tasks()[0].created_at >= store.tasks()[1].created_at);
    }

    #[test]
    fn test_high_priority_listed_before_low_at_same_time() {
        let (mut store, _, _) = setup();
        store.add_task(new_task("Low one", "09:00", Priority::Low));
        store.add_task(new_task("High one", "09:00", Priority::High));
        store.add_task(new_task("Another low", "09:00", Priority::Low));

        let view = compute_view(store.tasks(), FilterMode::All);

        assert_eq!(view[0].title, "High one");
        assert_eq!(view[1].priority, Priority::Low);
    }

    #[test]
    fn test_toggle_completes_single_task() {
        let (mut store, backend, _) = setup();
        let id = store.add_task(new_task("Review Neural Networks", "09:00", Priority::High));

        assert!(store.toggle_task(&id));

        let progress = Progress::of(store.tasks());
        assert_eq!((progress.completed, progress.total, progress.percentage), (1, 1, 100));
        assert_eq!(progress.encouragement(), Encouragement::Done);
        assert!(compute_view(store.tasks(), FilterMode::Pending).is_empty());
        assert!(stored_tasks(&backend)[0].completed);
    }

    #[test]
    fn test_toggle_twice_restores_state() {
        let (mut store, _, _) = setup();
        let id = store.add_task(new_task("Essay", "13:00", Priority::Medium));

        store.toggle_task(&id);
        store.toggle_task(&id);

        assert!(!store.tasks()[0].completed);
    }

    #[test]
    fn test_unknown_ids_are_ignored() {
        let (mut store, _, _) = setup();
        store.add_task(new_task("Keep me", "09:00", Priority::Low));
        let before = store.tasks().to_vec();

        assert!(!store.delete_task("no-such-id"));
        assert!(!store.toggle_task("no-such-id"));

        assert_eq!(store.tasks(), before.as_slice());
    }

    #[test]
    fn test_delete_removes_only_matching_task() {
        let (mut store, backend, _) = setup();
        let keep = store.add_task(new_task("Keep", "09:00", Priority::Low));
        let gone = store.add_task(new_task("Gone", "09:00", Priority::Low));

        assert!(store.delete_task(&gone));

        assert_eq!(store.tasks().len(), 1);
        assert_eq!(store.tasks()[0].id, keep);
        assert_eq!(stored_tasks(&backend).len(), 1);
    }

    #[test]
    fn test_dark_theme_applied_on_load() {
        let (store, _, sink) = setup_with(MemoryStorage::new().with_entry("focusflow_theme", "dark"));

        assert_eq!(store.theme(), Theme::Dark);
        assert_eq!(sink.applied(), vec![Theme::Dark]);
    }

    #[test]
    fn test_light_or_missing_theme_leaves_document_alone() {
        let (store, _, sink) = setup_with(MemoryStorage::new().with_entry("focusflow_theme", "light"));
        assert_eq!(store.theme(), Theme::Light);
        assert!(sink.applied().is_empty());

        let (store, _, sink) = setup();
        assert_eq!(store.theme(), Theme::Light);
        assert!(sink.applied().is_empty());
    }

    #[test]
    fn test_set_theme_applies_and_persists() {
        let (mut store, backend, sink) = setup();

        store.set_theme(Theme::Dark);
        store.set_theme(Theme::Light);

        assert_eq!(store.theme(), Theme::Light);
        assert_eq!(sink.applied(), vec![Theme::Dark, Theme::Light]);
        assert_eq!(backend.get("focusflow_theme").unwrap().as_deref(), Some("light"));
    }

    #[test]
    fn test_corrupt_tasks_load_as_empty() {
        let (store, _, _) = setup_with(MemoryStorage::new().with_entry("focusflow_tasks", "[{\"id\":"));
        assert!(store.tasks().is_empty());
    }

    #[test]
    fn test_reload_sees_previous_session() {
        let backend = Arc::new(MemoryStorage::new());
        let sink = Arc::new(RecordingSink::default());
        let persistence = Persistence::new(backend.clone(), StorageKeys::default());

        let mut first = TaskStore::load(persistence.clone(), services(sink.clone()));
        let id = first.add_task(new_task("Physics", "11:00", Priority::High));
        first.toggle_task(&id);
        first.set_theme(Theme::Dark);

        let second = TaskStore::load(persistence, services(sink));
        assert_eq!(second.tasks(), first.tasks());
        assert_eq!(second.theme(), Theme::Dark);
    }

    #[test]
    fn test_write_failures_do_not_block_mutations() {
        let (mut store, _, _) = setup_with(MemoryStorage::rejecting_writes());

        let id = store.add_task(new_task("Offline", "09:00", Priority::Low));
        store.set_theme(Theme::Dark);

        assert_eq!(store.tasks()[0].id, id);
        assert_eq!(store.theme(), Theme::Dark);
    }
}
