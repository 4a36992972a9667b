use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::icons::icon;

const DISMISS_AFTER_MS: u32 = 4_000;
const MAX_VISIBLE: usize = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    Info,
}

impl NotificationKind {
    fn class(&self) -> &'static str {
        match self {
            NotificationKind::Success => "toast toast--success",
            NotificationKind::Error => "toast toast--error",
            NotificationKind::Info => "toast toast--info",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub kind: NotificationKind,
    pub message: String,
}

/// Visible notifications, oldest first; at most `MAX_VISIBLE` are kept
#[derive(Clone, Debug, Default)]
pub struct NotificationQueue {
    next_id: u64,
    items: Vec<Notification>,
}

impl NotificationQueue {
    pub fn push(&mut self, kind: NotificationKind, message: String) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Notification { id, kind, message });
        if self.items.len() > MAX_VISIBLE {
            let overflow = self.items.len() - MAX_VISIBLE;
            self.items.drain(..overflow);
        }
        id
    }

    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|n| n.id != id);
        self.items.len() != before
    }

    /// Drop every notification of `kind`, returning how many were removed
    pub fn clear_kind(&mut self, kind: NotificationKind) -> usize {
        let before = self.items.len();
        self.items.retain(|n| n.kind != kind);
        before - self.items.len()
    }

    pub fn items(&self) -> &[Notification] {
        &self.items
    }
}

/// Transient notifications shared by every view
#[derive(Clone, Copy)]
pub struct NotificationService {
    queue: RwSignal<NotificationQueue>,
}

impl NotificationService {
    pub fn new() -> Self {
        Self {
            queue: RwSignal::new(NotificationQueue::default()),
        }
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(NotificationKind::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(NotificationKind::Error, message.into());
    }

    pub fn info(&self, message: impl Into<String>) {
        self.push(NotificationKind::Info, message.into());
    }

    pub fn dismiss(&self, id: u64) {
        self.queue.update(|q| {
            q.dismiss(id);
        });
    }

    /// Errors from an earlier attempt no longer apply once an action succeeds
    pub fn clear_errors(&self) {
        self.queue.update(|q| {
            q.clear_kind(NotificationKind::Error);
        });
    }

    fn push(&self, kind: NotificationKind, message: String) {
        let Some(id) = self.queue.try_update(|q| q.push(kind, message)) else {
            return;
        };
        let queue = self.queue;
        spawn_local(async move {
            TimeoutFuture::new(DISMISS_AFTER_MS).await;
            queue.try_update(|q| q.dismiss(id));
        });
    }
}

impl Default for NotificationService {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_notifications() -> NotificationService {
    use_context::<NotificationService>().expect("NotificationService not provided in context")
}

/// Renders the notification stack in the top-right corner
#[component]
pub fn NotificationHost() -> impl IntoView {
    let service = use_notifications();

    view! {
        <div class="toast-stack" role="status" aria-live="polite">
            <For
                each=move || service.queue.with(|q| q.items().to_vec())
                key=|n| n.id
                children=move |n: Notification| {
                    let id = n.id;
                    view! {
                        <div class=n.kind.class()>
                            <span class="toast__message">{n.message}</span>
                            <button class="toast__close" on:click=move |_| service.dismiss(id)>
                                {icon("x")}
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_dismiss() {
        let mut q = NotificationQueue::default();
        let a = q.push(NotificationKind::Success, "Logged in".into());
        let b = q.push(NotificationKind::Error, "Failed".into());
        assert_ne!(a, b);
        assert_eq!(q.items().len(), 2);

        assert!(q.dismiss(a));
        assert!(!q.dismiss(a));
        assert_eq!(q.items()[0].id, b);
    }

    #[test]
    fn test_oldest_dropped_when_full() {
        let mut q = NotificationQueue::default();
        let first = q.push(NotificationKind::Info, "1".into());
        for i in 2..=5 {
            q.push(NotificationKind::Info, i.to_string());
        }
        assert_eq!(q.items().len(), MAX_VISIBLE);
        assert!(q.items().iter().all(|n| n.id != first));
        assert_eq!(q.items().last().map(|n| n.message.as_str()), Some("5"));
    }

    #[test]
    fn test_clear_errors_keeps_other_kinds() {
        let mut q = NotificationQueue::default();
        q.push(NotificationKind::Error, "Invalid credentials".into());
        q.push(NotificationKind::Info, "Signed out".into());
        q.push(NotificationKind::Error, "Invalid credentials".into());

        assert_eq!(q.clear_kind(NotificationKind::Error), 2);
        assert_eq!(q.clear_kind(NotificationKind::Error), 0);
        let kinds: Vec<_> = q.items().iter().map(|n| n.kind).collect();
        assert_eq!(kinds, vec![NotificationKind::Info]);
    }
}
