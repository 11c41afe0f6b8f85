//! Transient notifications shown in the corner of the shell.
//!
//! Pages push toasts through [`ToastService`]; [`ToastHost`] renders them and
//! each toast removes itself after `[notifications] duration_ms`.

use crate::shared::config::config;
use crate::shared::icons::icon;
use contracts::shared::api_error::ApiError;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::time::Duration;
use uuid::Uuid;

/// Toasts beyond this count push the oldest ones out
const MAX_VISIBLE: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Info,
    Destructive,
}

impl ToastKind {
    fn class(&self) -> &'static str {
        match self {
            ToastKind::Success => "toast toast--success",
            ToastKind::Info => "toast toast--info",
            ToastKind::Destructive => "toast toast--destructive",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: Uuid,
    pub kind: ToastKind,
    pub title: String,
    pub description: Option<String>,
}

/// Ordered toast queue, newest last
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastQueue {
    items: Vec<Toast>,
}

impl ToastQueue {
    pub fn push(&mut self, toast: Toast) {
        self.items.push(toast);
        if self.items.len() > MAX_VISIBLE {
            let overflow = self.items.len() - MAX_VISIBLE;
            self.items.drain(..overflow);
        }
    }

    /// Returns `false` when the toast was already gone
    pub fn dismiss(&mut self, id: Uuid) -> bool {
        let before = self.items.len();
        self.items.retain(|t| t.id != id);
        self.items.len() != before
    }

    pub fn items(&self) -> &[Toast] {
        &self.items
    }
}

#[derive(Clone, Copy)]
pub struct ToastService {
    queue: RwSignal<ToastQueue>,
}

impl ToastService {
    pub fn new() -> Self {
        Self {
            queue: RwSignal::new(ToastQueue::default()),
        }
    }

    pub fn push(&self, kind: ToastKind, title: impl Into<String>, description: Option<String>) {
        let toast = Toast {
            id: Uuid::new_v4(),
            kind,
            title: title.into(),
            description,
        };
        let id = toast.id;
        self.queue.update(|q| q.push(toast));

        let this = *self;
        let duration = Duration::from_millis(config().notifications.duration_ms);
        spawn_local(async move {
            gloo_timers::future::sleep(duration).await;
            this.dismiss(id);
        });
    }

    pub fn success(&self, title: impl Into<String>, description: impl Into<String>) {
        self.push(ToastKind::Success, title, Some(description.into()));
    }

    pub fn info(&self, title: impl Into<String>, description: impl Into<String>) {
        self.push(ToastKind::Info, title, Some(description.into()));
    }

    /// Destructive toast for a failed backend call
    pub fn api_error(&self, title: impl Into<String>, error: &ApiError) {
        log::warn!("{}", error);
        let description = match error {
            ApiError::Unauthorized => "Your session is not authorized for this action.".to_string(),
            _ => "Please try again later.".to_string(),
        };
        self.push(ToastKind::Destructive, title, Some(description));
    }

    pub fn dismiss(&self, id: Uuid) {
        self.queue.try_update(|q| q.dismiss(id));
    }
}

impl Default for ToastService {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_toasts() -> ToastService {
    use_context::<ToastService>().expect("ToastService not provided in context")
}

#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = use_toasts();

    view! {
        <div class="toast-host">
            <For
                each=move || toasts.queue.with(|q| q.items().to_vec())
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    view! {
                        <div class=toast.kind.class() role="status">
                            <div class="toast__body">
                                <div class="toast__title">{toast.title}</div>
                                {toast.description.map(|d| view! {
                                    <div class="toast__description">{d}</div>
                                })}
                            </div>
                            <button
                                class="button button--icon toast__close"
                                on:click=move |_| toasts.dismiss(id)
                            >
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

    fn toast(title: &str) -> Toast {
        Toast {
            id: Uuid::new_v4(),
            kind: ToastKind::Info,
            title: title.to_string(),
            description: None,
        }
    }

    #[test]
    fn test_queue_keeps_newest() {
        let mut queue = ToastQueue::default();
        for title in ["a", "b", "c", "d"] {
            queue.push(toast(title));
        }
        let titles: Vec<&str> = queue.items().iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["b", "c", "d"]);
    }

    #[test]
    fn test_dismiss_twice() {
        let mut queue = ToastQueue::default();
        let first = toast("a");
        let id = first.id;
        queue.push(first);
        assert!(queue.dismiss(id));
        assert!(!queue.dismiss(id));
        assert!(queue.items().is_empty());
    }
}
