//! Navigator without a browser: tracks the current path and records every
//! navigation so hosts and tests can see where the client tried to go.

use parking_lot::RwLock;

use iga_core::ports::Navigator;

pub struct HeadlessNavigator {
    origin: String,
    current: RwLock<String>,
    history: RwLock<Vec<String>>,
}

impl HeadlessNavigator {
    pub fn new(origin: impl Into<String>) -> Self {
        Self {
            origin: origin.into().trim_end_matches('/').to_string(),
            current: RwLock::new("/".to_string()),
            history: RwLock::new(Vec::new()),
        }
    }

    /// Start at `path` without recording a navigation.
    pub fn at(self, path: impl Into<String>) -> Self {
        *self.current.write() = path.into();
        self
    }

    /// Every target passed to [`Navigator::navigate`], oldest first.
    pub fn history(&self) -> Vec<String> {
        self.history.read().clone()
    }

    pub fn last_target(&self) -> Option<String> {
        self.history.read().last().cloned()
    }
}

impl Navigator for HeadlessNavigator {
    fn origin(&self) -> String {
        self.origin.clone()
    }

    fn current_path(&self) -> String {
        self.current.read().clone()
    }

    fn navigate(&self, target: &str) {
        tracing::info!(target = %target, "Navigating");

        let path = target
            .strip_prefix(self.origin.as_str())
            .filter(|rest| rest.starts_with('/'))
            .unwrap_or(target);
        if path.starts_with('/') {
            *self.current.write() = path.to_string();
        }
        self.history.write().push(target.to_string());
    }
}
