use contact_form::{Navigator, Notifier, Severity};
use std::sync::{Arc, Mutex};

/// Notifier that records every notification it is handed.
#[derive(Clone, Default)]
pub struct RecordingNotifier {
    notifications: Arc<Mutex<Vec<(Severity, String)>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notifications(&self) -> Vec<(Severity, String)> {
        self.notifications.lock().unwrap().clone()
    }

    pub fn count(&self) -> usize {
        self.notifications.lock().unwrap().len()
    }

    pub fn messages(&self, severity: Severity) -> Vec<String> {
        self.notifications
            .lock()
            .unwrap()
            .iter()
            .filter(|(s, _)| *s == severity)
            .map(|(_, m)| m.clone())
            .collect()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str, severity: Severity) {
        self.notifications
            .lock()
            .unwrap()
            .push((severity, message.to_string()));
    }
}

/// Navigator that records every location it is sent to.
#[derive(Clone, Default)]
pub struct RecordingNavigator {
    visits: Arc<Mutex<Vec<String>>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visits(&self) -> Vec<String> {
        self.visits.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, url: &str) {
        self.visits.lock().unwrap().push(url.to_string());
    }
}
