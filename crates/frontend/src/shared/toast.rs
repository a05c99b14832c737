//! Short-lived notifications shown in the bottom-right corner.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use uuid::Uuid;

const TOAST_LIFETIME_MS: u32 = 3000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    fn class(&self) -> &'static str {
        match self {
            ToastKind::Success => "toast success",
            ToastKind::Error => "toast error",
            ToastKind::Info => "toast info",
        }
    }

    fn symbol(&self) -> &'static str {
        match self {
            ToastKind::Success => "✅",
            ToastKind::Error => "❌",
            ToastKind::Info => "ℹ️",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
struct Toast {
    id: Uuid,
    kind: ToastKind,
    message: String,
}

#[derive(Clone, Copy)]
pub struct ToastService {
    toasts: RwSignal<Vec<Toast>>,
}

impl ToastService {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
        }
    }

    pub fn show(&self, kind: ToastKind, message: impl Into<String>) {
        let toast = Toast {
            id: Uuid::new_v4(),
            kind,
            message: message.into(),
        };
        let id = toast.id;
        self.toasts.update(|list| list.push(toast));

        let toasts = self.toasts;
        leptos::task::spawn_local(async move {
            TimeoutFuture::new(TOAST_LIFETIME_MS).await;
            toasts.update(|list| list.retain(|t| t.id != id));
        });
    }

    pub fn success(&self, message: impl Into<String>) {
        self.show(ToastKind::Success, message);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show(ToastKind::Error, message);
    }

    pub fn info(&self, message: impl Into<String>) {
        self.show(ToastKind::Info, message);
    }
}

pub fn use_toast() -> ToastService {
    use_context::<ToastService>().expect("ToastService not found")
}

#[component]
#[allow(non_snake_case)]
pub fn ToastHost() -> impl IntoView {
    let svc = use_toast();

    view! {
        <div class="toast-container">
            <For each=move || svc.toasts.get() key=|t| t.id let:toast>
                <div class=toast.kind.class()>
                    <span>{toast.kind.symbol()}</span>
                    <span>{toast.message.clone()}</span>
                </div>
            </For>
        </div>
    }
}
