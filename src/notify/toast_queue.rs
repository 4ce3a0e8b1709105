//! Shared toast queue with auto-dismiss.
//!
//! One queue is created per host page and handed to every component that
//! raises notifications. Toasts raised while the queue is unmounted are dropped.

use super::{Notifier, Severity};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};
use tokio::sync::broadcast;

/// Capacity of the broadcast channel feeding subscribers.
const EVENT_CAPACITY: usize = 64;

/// A single raised notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub severity: Severity,
    pub raised_at: Instant,
}

#[derive(Debug, Default)]
struct QueueState {
    mounted: bool,
    next_id: u64,
    raised_total: u64,
    toasts: Vec<Toast>,
}

/// A cheaply clonable, thread-safe toast queue.
///
/// Toasts expire after the configured TTL and disappear from `visible()`.
#[derive(Clone)]
pub struct ToastQueue {
    state: Arc<Mutex<QueueState>>,
    events: broadcast::Sender<Toast>,
    ttl: Duration,
}

impl ToastQueue {
    /// Create an unmounted queue whose toasts auto-dismiss after `ttl`.
    pub fn new(ttl: Duration) -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            state: Arc::new(Mutex::new(QueueState::default())),
            events,
            ttl,
        }
    }

    /// Attach the queue to its host page.
    pub fn mount(&self) {
        if let Ok(mut state) = self.state.lock() {
            state.mounted = true;
        }
        tracing::debug!("Toast queue mounted");
    }

    /// Detach the queue; pending toasts are discarded.
    pub fn unmount(&self) {
        if let Ok(mut state) = self.state.lock() {
            state.mounted = false;
            state.toasts.clear();
        }
        tracing::debug!("Toast queue unmounted");
    }

    pub fn is_mounted(&self) -> bool {
        self.state.lock().map(|s| s.mounted).unwrap_or(false)
    }

    /// Receive every toast as it is raised.
    pub fn subscribe(&self) -> broadcast::Receiver<Toast> {
        self.events.subscribe()
    }

    /// Toasts that have not expired or been dismissed, oldest first.
    pub fn visible(&self) -> Vec<Toast> {
        match self.state.lock() {
            Ok(mut state) => {
                self.prune_expired(&mut state);
                state.toasts.clone()
            }
            Err(_) => Vec::new(),
        }
    }

    /// Dismiss a toast before its TTL runs out.
    pub fn dismiss(&self, id: u64) {
        if let Ok(mut state) = self.state.lock() {
            state.toasts.retain(|toast| toast.id != id);
        }
    }

    fn prune_expired(&self, state: &mut QueueState) {
        let now = Instant::now();
        state
            .toasts
            .retain(|toast| now.duration_since(toast.raised_at) < self.ttl);
    }

    /// Toasts currently held, expired or not.
    #[cfg(test)]
    fn len(&self) -> usize {
        self.state.lock().map(|s| s.toasts.len()).unwrap_or(0)
    }

    /// Number of toasts shown since creation, expired ones included.
    pub fn raised_total(&self) -> u64 {
        self.state.lock().map(|s| s.raised_total).unwrap_or(0)
    }
}

impl Notifier for ToastQueue {
    fn notify(&self, message: &str, severity: Severity) {
        let toast = match self.state.lock() {
            Ok(mut state) => {
                if !state.mounted {
                    tracing::debug!(
                        %severity,
                        text = message,
                        "Toast dropped, queue not mounted"
                    );
                    return;
                }
                self.prune_expired(&mut state);
                state.next_id += 1;
                state.raised_total += 1;
                let toast = Toast {
                    id: state.next_id,
                    message: message.to_string(),
                    severity,
                    raised_at: Instant::now(),
                };
                state.toasts.push(toast.clone());
                toast
            }
            Err(_) => return,
        };

        tracing::debug!(id = toast.id, %severity, text = message, "Toast raised");
        // No subscribers is fine; the toast is still visible
        let _ = self.events.send(toast);
    }
}
