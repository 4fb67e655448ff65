//! Notification queue
//!
//! Transient messages reporting the outcome of mutating operations. Each
//! pushed notification gets its own expiry task; the task's abort handle is
//! tracked so an early `dismiss` cancels it. Reads also filter on the
//! expiry instant, so a notification is visible for exactly its lifetime
//! even if the expiry task has not run yet.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use std::time::Duration;

use serde::Serialize;
use tokio::task::AbortHandle;
use tokio::time::Instant;

use crate::config::DEFAULT_NOTIFICATION_TTL;

/// Monotonic notification id, derived from the creation time in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct NotificationId(i64);

impl NotificationId {
    pub fn value(&self) -> i64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationVariant {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub id: NotificationId,
    pub message: String,
    pub variant: NotificationVariant,
}

struct Entry {
    notification: Notification,
    expires_at: Instant,
    timer: AbortHandle,
}

#[derive(Default)]
struct Inner {
    entries: Vec<Entry>,
    last_id: i64,
}

impl Inner {
    fn next_id(&mut self) -> NotificationId {
        let now = chrono::Utc::now().timestamp_millis();
        self.last_id = now.max(self.last_id + 1);
        NotificationId(self.last_id)
    }

    fn remove(&mut self, id: NotificationId) -> Option<Entry> {
        let pos = self.entries.iter().position(|e| e.notification.id == id)?;
        Some(self.entries.remove(pos))
    }
}

impl Drop for Inner {
    fn drop(&mut self) {
        for entry in &self.entries {
            entry.timer.abort();
        }
    }
}

/// Append-only, self-expiring notification list
///
/// Cloning yields another handle to the same queue. `push` spawns onto the
/// current tokio runtime and must be called from within one.
#[derive(Clone)]
pub struct NotificationQueue {
    inner: Arc<Mutex<Inner>>,
    ttl: Duration,
}

impl NotificationQueue {
    pub fn new(ttl: Duration) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner::default())),
            ttl,
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Append a notification and schedule its removal after the ttl
    pub fn push(&self, message: impl Into<String>, variant: NotificationVariant) -> NotificationId {
        let message = message.into();
        let expires_at = Instant::now() + self.ttl;

        // Held across the spawn so the expiry task cannot observe the queue
        // before the entry exists.
        let mut inner = self.lock();
        let id = inner.next_id();
        let timer = tokio::spawn(expire(Arc::downgrade(&self.inner), id, expires_at)).abort_handle();

        tracing::debug!(id = id.value(), ?variant, %message, "Notification pushed");
        inner.entries.push(Entry {
            notification: Notification {
                id,
                message,
                variant,
            },
            expires_at,
            timer,
        });
        id
    }

    pub fn success(&self, message: impl Into<String>) -> NotificationId {
        self.push(message, NotificationVariant::Success)
    }

    pub fn error(&self, message: impl Into<String>) -> NotificationId {
        self.push(message, NotificationVariant::Error)
    }

    /// Remove a notification now. Unknown or already expired ids are a no-op.
    ///
    /// Returns whether a live notification was removed.
    pub fn dismiss(&self, id: NotificationId) -> bool {
        match self.lock().remove(id) {
            Some(entry) => {
                entry.timer.abort();
                entry.expires_at > Instant::now()
            }
            None => false,
        }
    }

    /// Live notifications in insertion order
    pub fn snapshot(&self) -> Vec<Notification> {
        let now = Instant::now();
        self.lock()
            .entries
            .iter()
            .filter(|e| e.expires_at > now)
            .map(|e| e.notification.clone())
            .collect()
    }

    pub fn contains(&self, id: NotificationId) -> bool {
        let now = Instant::now();
        self.lock()
            .entries
            .iter()
            .any(|e| e.notification.id == id && e.expires_at > now)
    }

    pub fn len(&self) -> usize {
        self.snapshot().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Entries still stored, including ones past expiry whose task has not run
    #[cfg(test)]
    fn stored(&self) -> usize {
        self.lock().entries.len()
    }
}

impl Default for NotificationQueue {
    fn default() -> Self {
        Self::new(DEFAULT_NOTIFICATION_TTL)
    }
}

impl std::fmt::Debug for NotificationQueue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotificationQueue")
            .field("ttl", &self.ttl)
            .field("live", &self.len())
            .finish()
    }
}

async fn expire(inner: Weak<Mutex<Inner>>, id: NotificationId, at: Instant) {
    tokio::time::sleep_until(at).await;
    if let Some(inner) = inner.upgrade() {
        let removed = inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(id);
        if removed.is_some() {
            tracing::trace!(id = id.value(), "Notification expired");
        }
    }
}
