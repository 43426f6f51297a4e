//! Platform Services
//!
//! Clock, id generation and the document theme flag, each behind a trait so
//! the task store can run outside a browser.

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use crate::models::Theme;

/// Millisecond wall clock that never goes backwards
pub trait Clock: Send + Sync {
    fn now_millis(&self) -> i64;
}

/// Collision-resistant task identifiers
pub trait IdSource: Send + Sync {
    fn next_id(&self) -> String;
}

/// Write-only side channel for the global light/dark flag
pub trait ThemeSink: Send + Sync {
    fn apply(&self, theme: Theme);
}

/// `Date.now()`, clamped to the largest value seen so far
#[derive(Debug, Default)]
pub struct BrowserClock {
    last: AtomicI64,
}

impl Clock for BrowserClock {
    fn now_millis(&self) -> i64 {
        clamp_forward(&self.last, js_sys::Date::now() as i64)
    }
}

/// Record `now` and return the largest timestamp seen so far
fn clamp_forward(last: &AtomicI64, now: i64) -> i64 {
    last.fetch_max(now, Ordering::Relaxed).max(now)
}

#[derive(Debug, Clone, Copy, Default)]
pub struct UuidSource;

impl IdSource for UuidSource {
    fn next_id(&self) -> String {
        uuid::Uuid::new_v4().to_string()
    }
}

/// Toggles the `dark` class on `<html>`
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentThemeSink;

impl ThemeSink for DocumentThemeSink {
    fn apply(&self, theme: Theme) {
        let Some(root) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        else {
            tracing::warn!("no document element, theme not applied");
            return;
        };
        if let Err(e) = root.class_list().toggle_with_force("dark", theme == Theme::Dark) {
            tracing::warn!(error = ?e, "failed to toggle dark class");
        }
    }
}

/// Collaborators injected into the task store
#[derive(Clone)]
pub struct Services {
    pub clock: Arc<dyn Clock>,
    pub ids: Arc<dyn IdSource>,
    pub theme_sink: Arc<dyn ThemeSink>,
}

impl Services {
    pub fn browser() -> Self {
        Self {
            clock: Arc::new(BrowserClock::default()),
            ids: Arc::new(UuidSource),
            theme_sink: Arc::new(DocumentThemeSink),
        }
    }
}
