use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config;

pub const MAX_VISIBLE_TOASTS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// What a section wants to tell the visitor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: ToastKind,
    pub text: String,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Error,
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u32,
    pub notice: Notice,
}

pub enum ToastAction {
    Push(Notice),
    Dismiss(u32),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Toasts {
    next_id: u32,
    items: Vec<Toast>,
}

impl Toasts {
    pub fn items(&self) -> &[Toast] {
        &self.items
    }
}

impl Reducible for Toasts {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ToastAction::Push(notice) => {
                next.items.push(Toast {
                    id: next.next_id,
                    notice,
                });
                next.next_id = next.next_id.wrapping_add(1);
                if next.items.len() > MAX_VISIBLE_TOASTS {
                    let overflow = next.items.len() - MAX_VISIBLE_TOASTS;
                    next.items.drain(..overflow);
                }
            }
            ToastAction::Dismiss(id) => {
                if !next.items.iter().any(|t| t.id == id) {
                    return self;
                }
                next.items.retain(|t| t.id != id);
            }
        }
        Rc::new(next)
    }
}

pub type ToastContext = UseReducerDispatcher<Toasts>;

pub fn notify(toasts: &ToastContext, notice: Notice) {
    toasts.dispatch(ToastAction::Push(notice));
}

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    pub children: Children,
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let toasts = use_reducer(Toasts::default);
    let dispatcher = toasts.dispatcher();

    html! {
        <ContextProvider<ToastContext> context={dispatcher.clone()}>
            { for props.children.iter() }
            <div class="toast-viewport">
                <style>
                    {r#"
                    .toast-viewport {
                        position: fixed;
                        bottom: 1.5rem;
                        right: 1.5rem;
                        display: flex;
                        flex-direction: column;
                        gap: 0.75rem;
                        z-index: 100;
                    }
                    .toast {
                        min-width: 280px;
                        max-width: 380px;
                        padding: 1rem 1.25rem;
                        border-radius: 12px;
                        background: rgba(20, 24, 38, 0.95);
                        backdrop-filter: blur(10px);
                        color: #fff;
                        box-shadow: 0 8px 32px rgba(0, 0, 0, 0.3);
                        cursor: pointer;
                        animation: toastIn 0.3s ease-out;
                    }
                    .toast.success { border-left: 4px solid #22c55e; }
                    .toast.error { border-left: 4px solid #ef4444; }
                    @keyframes toastIn {
                        from { transform: translateY(20px); opacity: 0; }
                        to { transform: translateY(0); opacity: 1; }
                    }
                    "#}
                </style>
                { for toasts.items().iter().map(|toast| html! {
                    <ToastItem key={toast.id} toast={toast.clone()} dispatch={dispatcher.clone()} />
                }) }
            </div>
        </ContextProvider<ToastContext>>
    }
}

#[derive(Properties, PartialEq)]
struct ToastItemProps {
    toast: Toast,
    dispatch: ToastContext,
}

#[function_component(ToastItem)]
fn toast_item(props: &ToastItemProps) -> Html {
    let id = props.toast.id;

    {
        let dispatch = props.dispatch.clone();
        use_effect_with_deps(
            move |id| {
                let id = *id;
                let timeout = Timeout::new(config::TOAST_DURATION_MS, move || {
                    dispatch.dispatch(ToastAction::Dismiss(id));
                });
                move || drop(timeout)
            },
            id,
        );
    }

    let dismiss = {
        let dispatch = props.dispatch.clone();
        Callback::from(move |_: MouseEvent| dispatch.dispatch(ToastAction::Dismiss(id)))
    };

    let kind_class = match props.toast.notice.kind {
        ToastKind::Success => "success",
        ToastKind::Error => "error",
    };

    html! {
        <div class={classes!("toast", kind_class)} role="status" onclick={dismiss}>
            {&props.toast.notice.text}
        </div>
    }
}
