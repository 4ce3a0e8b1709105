//! Page navigation.

use std::sync::{Arc, RwLock};

/// Something that can move the host page to a new location.
pub trait Navigator: Send + Sync {
    fn navigate(&self, url: &str);
}

/// Navigator that records the current location instead of loading anything.
///
/// Used by the terminal host, which has no page to load.
#[derive(Debug, Clone, Default)]
pub struct PageLocation {
    current: Arc<RwLock<Option<String>>>,
}

impl PageLocation {
    pub fn new() -> Self {
        Self::default()
    }

    /// The last location navigated to, if any.
    pub fn current(&self) -> Option<String> {
        self.current.read().ok().and_then(|c| c.clone())
    }
}

impl Navigator for PageLocation {
    fn navigate(&self, url: &str) {
        tracing::info!(url, "Navigating");
        if let Ok(mut current) = self.current.write() {
            *current = Some(url.to_string());
        }
    }
}
