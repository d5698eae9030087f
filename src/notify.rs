//! Toast Notifications
//!
//! An injected notification service instead of a module-global callback
//! slot: the pure [`ToastQueue`] holds the entries, a [`Toaster`] handle
//! lives in context, and `ToastHost` renders whatever the queue holds.
//! Entries auto-dismiss after a few seconds.

use leptos::prelude::*;
use leptos::task::spawn_local;

/// How long a toast stays visible
const TOAST_MS: u32 = 4_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
}

impl ToastLevel {
    pub fn css_class(&self) -> &'static str {
        match self {
            ToastLevel::Success => "toast success",
            ToastLevel::Error => "toast error",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub level: ToastLevel,
    pub message: String,
}

/// Pure toast queue: push assigns monotonically increasing ids,
/// dismiss removes by id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastQueue {
    next_id: u32,
    entries: Vec<Toast>,
}

impl ToastQueue {
    pub fn push(&mut self, level: ToastLevel, message: String) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(Toast { id, level, message });
        id
    }

    pub fn dismiss(&mut self, id: u32) {
        self.entries.retain(|toast| toast.id != id);
    }

    pub fn entries(&self) -> &[Toast] {
        &self.entries
    }
}

/// Clonable handle to the toast queue, provided via context
#[derive(Clone, Copy)]
pub struct Toaster {
    queue: RwSignal<ToastQueue>,
}

impl Toaster {
    pub fn new() -> Self {
        Self {
            queue: RwSignal::new(ToastQueue::default()),
        }
    }

    pub fn success(&self, message: impl Into<String>) {
        self.show(ToastLevel::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show(ToastLevel::Error, message.into());
    }

    fn show(&self, level: ToastLevel, message: String) {
        let queue = self.queue;
        let mut id = 0;
        queue.update(|q| id = q.push(level, message));
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(TOAST_MS).await;
            // the queue may be disposed if the app unmounted
            let _ = queue.try_update(|q| q.dismiss(id));
        });
    }

    pub fn dismiss(&self, id: u32) {
        self.queue.update(|q| q.dismiss(id));
    }

    pub fn toasts(&self) -> Vec<Toast> {
        self.queue.with(|q| q.entries().to_vec())
    }
}

impl Default for Toaster {
    fn default() -> Self {
        Self::new()
    }
}

/// Get the toaster from context
pub fn use_toaster() -> Toaster {
    expect_context::<Toaster>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_assigns_increasing_ids() {
        let mut queue = ToastQueue::default();
        let a = queue.push(ToastLevel::Success, "satu".to_string());
        let b = queue.push(ToastLevel::Error, "dua".to_string());
        assert!(b > a);
        assert_eq!(queue.entries().len(), 2);
    }

    #[test]
    fn test_dismiss_removes_only_target() {
        let mut queue = ToastQueue::default();
        let a = queue.push(ToastLevel::Success, "satu".to_string());
        let b = queue.push(ToastLevel::Success, "dua".to_string());
        queue.dismiss(a);
        assert_eq!(queue.entries().len(), 1);
        assert_eq!(queue.entries()[0].id, b);
        // dismissing an unknown id is a no-op
        queue.dismiss(99);
        assert_eq!(queue.entries().len(), 1);
    }
}
