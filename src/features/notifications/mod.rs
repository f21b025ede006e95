//! Non-blocking toast notifications.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use uuid::Uuid;

const DISMISS_AFTER_MS: u32 = 4_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

impl NoticeKind {
    fn class(&self) -> &'static str {
        match self {
            NoticeKind::Info => "notice notice-info",
            NoticeKind::Error => "notice notice-error",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub id: String,
    pub kind: NoticeKind,
    pub message: String,
}

/// Ordered list of visible notices, newest last.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NoticeQueue {
    notices: Vec<Notice>,
}

impl NoticeQueue {
    pub fn push(&mut self, kind: NoticeKind, message: impl Into<String>) -> String {
        let id = Uuid::new_v4().to_string();
        self.notices.push(Notice {
            id: id.clone(),
            kind,
            message: message.into(),
        });
        id
    }

    pub fn dismiss(&mut self, id: &str) {
        self.notices.retain(|n| n.id != id);
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }
}

/// Context handle used by any component to raise a notice.
#[derive(Clone, Copy)]
pub struct Notifier {
    queue: RwSignal<NoticeQueue>,
}

impl Notifier {
    pub fn new() -> Self {
        Self {
            queue: RwSignal::new(NoticeQueue::default()),
        }
    }

    pub fn info(&self, message: impl Into<String>) {
        self.notify(NoticeKind::Info, message);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.notify(NoticeKind::Error, message);
    }

    fn notify(&self, kind: NoticeKind, message: impl Into<String>) {
        let mut id = String::new();
        self.queue.update(|q| id = q.push(kind, message));
        let queue = self.queue;
        spawn_local(async move {
            TimeoutFuture::new(DISMISS_AFTER_MS).await;
            // The owner may be gone by now
            let _ = queue.try_update(|q| q.dismiss(&id));
        });
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_notifier() -> Notifier {
    use_context::<Notifier>().expect("Notifier context")
}

#[component]
pub fn NoticeList() -> impl IntoView {
    let notifier = use_notifier();
    let queue = notifier.queue;

    view! {
        <div class="notices" aria-live="polite">
            <For
                each=move || queue.with(|q| q.notices().to_vec())
                key=|notice| notice.id.clone()
                children=move |notice| {
                    let id = notice.id.clone();
                    view! {
                        <div class=notice.kind.class()>
                            <span>{notice.message.clone()}</span>
                            <button
                                class="notice-close"
                                on:click=move |_| queue.update(|q| q.dismiss(&id))
                            >"×"</button>
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
    fn push_and_dismiss_keep_order() {
        let mut queue = NoticeQueue::default();
        let a = queue.push(NoticeKind::Info, "primeiro");
        let b = queue.push(NoticeKind::Error, "segundo");
        assert_ne!(a, b);
        assert_eq!(queue.notices().len(), 2);

        queue.dismiss(&a);
        assert_eq!(queue.notices().len(), 1);
        assert_eq!(queue.notices()[0].message, "segundo");
        assert_eq!(queue.notices()[0].kind, NoticeKind::Error);

        queue.dismiss("missing");
        assert_eq!(queue.notices().len(), 1);
    }
}
