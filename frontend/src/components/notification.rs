use yew::prelude::*;
use gloo_timers::callback::Timeout;

use crate::config;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub kind: ToastKind,
    pub title: String,
    pub description: String,
}

impl Toast {
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Toast { kind: ToastKind::Success, title: title.into(), description: description.into() }
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Toast { kind: ToastKind::Error, title: title.into(), description: description.into() }
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastViewProps {
    pub toast: Option<Toast>,
    pub on_dismiss: Callback<()>,
}

/// Transient notification in the corner of the screen. Dismisses itself after
/// `TOAST_DURATION_MS`; a new toast restarts the countdown.
#[function_component(ToastView)]
pub fn toast_view(props: &ToastViewProps) -> Html {
    {
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with_deps(
            move |toast: &Option<Toast>| {
                let timeout = toast.as_ref().map(|_| {
                    Timeout::new(config::TOAST_DURATION_MS, move || on_dismiss.emit(()))
                });
                // Dropping the Timeout cancels it.
                move || drop(timeout)
            },
            props.toast.clone(),
        );
    }

    let Some(toast) = props.toast.as_ref() else {
        return html! {};
    };

    let onclick = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(()))
    };

    let kind_class = match toast.kind {
        ToastKind::Success => "toast-success",
        ToastKind::Error => "toast-error",
    };

    html! {
        <div class={classes!("toast", kind_class)} role="status" aria-live="polite" {onclick}>
            <style>
                {r#"
                    @keyframes toastSlideIn {
                        from { transform: translateY(100%); opacity: 0; }
                        to { transform: translateY(0); opacity: 1; }
                    }
                    .toast {
                        position: fixed;
                        right: 24px;
                        bottom: 24px;
                        max-width: 380px;
                        padding: 16px 20px;
                        border-radius: 16px;
                        background: var(--background);
                        box-shadow: 0 16px 32px rgba(0,0,0,0.15);
                        animation: toastSlideIn 0.4s ease-out forwards;
                        cursor: pointer;
                        z-index: 100;
                    }
                    .toast-success { border-left: 4px solid var(--primary); }
                    .toast-error { border-left: 4px solid var(--destructive); }
                    .toast-title { font-weight: 600; margin-bottom: 4px; }
                    .toast-description { color: var(--foreground-muted); font-size: 14px; }
                "#}
            </style>
            <div class="toast-title">{&toast.title}</div>
            <div class="toast-description">{&toast.description}</div>
        </div>
    }
}
