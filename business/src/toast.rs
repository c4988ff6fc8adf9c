//! Transient notifications.
//!
//! Time is always passed in, so the queue never reads a clock itself.

use chrono::{DateTime, Duration, Utc};
use log::debug;

/// Default lifetime of a toast.
pub const DEFAULT_TOAST_DURATION: Duration = Duration::milliseconds(3000);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Severity {
    Success,
    Error,
    Warning,
    #[default]
    Info,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub severity: Severity,
    /// Zero means the toast stays until dismissed.
    pub duration: Duration,
    pub created_at: DateTime<Utc>,
}

impl Toast {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        !self.duration.is_zero() && now - self.created_at >= self.duration
    }
}

/// Toasts in creation order.
#[derive(Debug, Clone)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
    next_id: u64,
    default_duration: Duration,
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::new(DEFAULT_TOAST_DURATION)
    }
}

impl ToastQueue {
    pub fn new(default_duration: Duration) -> Self {
        Self {
            toasts: Vec::new(),
            next_id: 0,
            default_duration,
        }
    }

    pub fn default_duration(&self) -> Duration {
        self.default_duration
    }

    /// Adds a toast and returns its id.
    pub fn show(
        &mut self,
        message: impl Into<String>,
        severity: Severity,
        duration: Duration,
        now: DateTime<Utc>,
    ) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        let message = message.into();
        debug!("Toast {id} ({severity:?}): {message}");
        self.toasts.push(Toast {
            id,
            message,
            severity,
            duration,
            created_at: now,
        });
        id
    }

    pub fn success(&mut self, message: impl Into<String>, now: DateTime<Utc>) -> u64 {
        self.show(message, Severity::Success, self.default_duration, now)
    }

    pub fn error(&mut self, message: impl Into<String>, now: DateTime<Utc>) -> u64 {
        self.show(message, Severity::Error, self.default_duration, now)
    }

    pub fn warning(&mut self, message: impl Into<String>, now: DateTime<Utc>) -> u64 {
        self.show(message, Severity::Warning, self.default_duration, now)
    }

    pub fn info(&mut self, message: impl Into<String>, now: DateTime<Utc>) -> u64 {
        self.show(message, Severity::Info, self.default_duration, now)
    }

    /// Removes a toast; unknown ids are ignored.
    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|toast| toast.id != id);
    }

    /// Drops every toast whose duration has elapsed at `now`.
    pub fn expire(&mut self, now: DateTime<Utc>) {
        self.toasts.retain(|toast| !toast.is_expired(now));
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}
