use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::{info, warn};
use yew::prelude::*;

use crate::config;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Success,
    Error,
}

impl ToastLevel {
    fn class(self) -> &'static str {
        match self {
            ToastLevel::Info => "toast-info",
            ToastLevel::Success => "toast-success",
            ToastLevel::Error => "toast-error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u32,
    pub level: ToastLevel,
    pub title: String,
    pub body: String,
}

/// Toasts currently on screen, oldest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastQueue {
    next_id: u32,
    capacity: usize,
    toasts: Vec<Toast>,
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::with_capacity(config::MAX_VISIBLE_TOASTS)
    }
}

impl ToastQueue {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            next_id: 1,
            capacity,
            toasts: Vec::new(),
        }
    }

    /// Adds a toast and evicts the oldest ones beyond capacity.
    pub fn push(&mut self, level: ToastLevel, title: String, body: String) -> u32 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        self.toasts.push(Toast { id, level, title, body });
        if self.toasts.len() > self.capacity {
            let overflow = self.toasts.len() - self.capacity;
            self.toasts.drain(..overflow);
        }
        id
    }

    pub fn dismiss(&mut self, id: u32) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|toast| toast.id != id);
        self.toasts.len() != before
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }
}

pub enum ToastAction {
    Push {
        level: ToastLevel,
        title: String,
        body: String,
    },
    Dismiss(u32),
}

impl Reducible for ToastQueue {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ToastAction::Push { level, title, body } => {
                next.push(level, title, body);
            }
            ToastAction::Dismiss(id) => {
                if !next.dismiss(id) {
                    return self;
                }
            }
        }
        next.into()
    }
}

/// Handle for raising toasts from anywhere below `NotificationProvider`.
#[derive(Clone, PartialEq)]
pub struct Notifier {
    dispatch: Callback<ToastAction>,
}

impl Notifier {
    fn detached() -> Self {
        Self {
            dispatch: Callback::from(|action: ToastAction| {
                if let ToastAction::Push { title, body, .. } = action {
                    warn!("No notification service mounted, dropping toast: {} - {}", title, body);
                }
            }),
        }
    }

    pub fn notify(&self, level: ToastLevel, title: impl Into<String>, body: impl Into<String>) {
        self.dispatch.emit(ToastAction::Push {
            level,
            title: title.into(),
            body: body.into(),
        });
    }

    pub fn info(&self, title: impl Into<String>, body: impl Into<String>) {
        self.notify(ToastLevel::Info, title, body);
    }

    pub fn success(&self, title: impl Into<String>, body: impl Into<String>) {
        self.notify(ToastLevel::Success, title, body);
    }

    pub fn error(&self, title: impl Into<String>, body: impl Into<String>) {
        self.notify(ToastLevel::Error, title, body);
    }
}

#[hook]
pub fn use_notifier() -> Notifier {
    use_context::<Notifier>().unwrap_or_else(Notifier::detached)
}

#[derive(Properties, PartialEq)]
pub struct NotificationProviderProps {
    pub children: Children,
}

#[function_component(NotificationProvider)]
pub fn notification_provider(props: &NotificationProviderProps) -> Html {
    let queue = use_reducer(ToastQueue::default);
    let notifier = {
        let dispatcher = queue.dispatcher();
        use_memo(
            move |_| Notifier {
                dispatch: Callback::from(move |action| dispatcher.dispatch(action)),
            },
            (),
        )
    };

    use_effect_with_deps(
        |_| {
            info!("Notification service registered");
            || info!("Notification service torn down")
        },
        (),
    );

    let on_dismiss = {
        let dispatcher = queue.dispatcher();
        Callback::from(move |id: u32| dispatcher.dispatch(ToastAction::Dismiss(id)))
    };

    html! {
        <ContextProvider<Notifier> context={(*notifier).clone()}>
            { for props.children.iter() }
            <div class="toast-stack" aria-live="polite">
                <style>
                    {r#"
                    .toast-stack {
                        position: fixed;
                        bottom: 1.5rem;
                        right: 1.5rem;
                        display: flex;
                        flex-direction: column;
                        gap: 0.75rem;
                        z-index: 50;
                        max-width: 360px;
                    }
                    .toast {
                        background: var(--card-bg);
                        color: var(--text);
                        border-left: 4px solid var(--brand-purple);
                        border-radius: 8px;
                        box-shadow: 0 8px 24px rgba(0, 0, 0, 0.15);
                        padding: 0.9rem 1rem;
                        display: flex;
                        justify-content: space-between;
                        gap: 1rem;
                        animation: toastIn 0.3s ease-out;
                    }
                    .toast-info { border-left-color: var(--brand-purple); }
                    .toast-success { border-left-color: #16a34a; }
                    .toast-error { border-left-color: #dc2626; }
                    .toast-title { font-weight: 600; margin: 0 0 0.25rem; }
                    .toast-body { margin: 0; font-size: 0.9rem; color: var(--muted); }
                    .toast-close {
                        background: none;
                        border: none;
                        color: var(--muted);
                        cursor: pointer;
                        font-size: 1rem;
                    }
                    @keyframes toastIn {
                        from { transform: translateY(20px); opacity: 0; }
                        to { transform: translateY(0); opacity: 1; }
                    }
                    "#}
                </style>
                { for queue.toasts().iter().map(|toast| html! {
                    <ToastCard key={toast.id} toast={toast.clone()} on_dismiss={on_dismiss.clone()} />
                }) }
            </div>
        </ContextProvider<Notifier>>
    }
}

#[derive(Properties, PartialEq)]
struct ToastCardProps {
    toast: Toast,
    on_dismiss: Callback<u32>,
}

#[function_component(ToastCard)]
fn toast_card(props: &ToastCardProps) -> Html {
    {
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with_deps(
            move |id| {
                let id = *id;
                let timeout = Timeout::new(config::TOAST_TIMEOUT_MS, move || on_dismiss.emit(id));
                move || drop(timeout)
            },
            props.toast.id,
        );
    }

    let close = {
        let on_dismiss = props.on_dismiss.clone();
        let id = props.toast.id;
        Callback::from(move |_: MouseEvent| on_dismiss.emit(id))
    };

    html! {
        <div class={classes!("toast", props.toast.level.class())} role="status">
            <div>
                <p class="toast-title">{&props.toast.title}</p>
                <p class="toast-body">{&props.toast.body}</p>
            </div>
            <button class="toast-close" onclick={close} aria-label="Dismiss">{"✕"}</button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use pretty_assertions::assert_eq;

    fn titles(queue: &ToastQueue) -> Vec<&str> {
        queue.toasts().iter().map(|toast| toast.title.as_str()).collect()
    }

    #[test]
    fn oldest_toast_is_evicted_past_capacity() {
        let mut queue = ToastQueue::with_capacity(2);
        queue.push(ToastLevel::Info, "one".into(), String::new());
        queue.push(ToastLevel::Info, "two".into(), String::new());
        queue.push(ToastLevel::Error, "three".into(), String::new());
        assert_eq!(titles(&queue), vec!["two", "three"]);
    }

    #[test]
    fn dismiss_removes_only_the_matching_toast() {
        let mut queue = ToastQueue::default();
        let first = queue.push(ToastLevel::Success, "saved".into(), String::new());
        let second = queue.push(ToastLevel::Error, "failed".into(), String::new());
        assert_ne!(first, second);

        assert!(queue.dismiss(first));
        assert!(!queue.dismiss(first));
        assert_eq!(titles(&queue), vec!["failed"]);
    }

    #[test]
    fn reducer_keeps_state_when_dismissing_unknown_id() {
        let queue = Rc::new(ToastQueue::default());
        let after = queue.clone().reduce(ToastAction::Dismiss(42));
        assert!(Rc::ptr_eq(&queue, &after));

        let after = after.reduce(ToastAction::Push {
            level: ToastLevel::Info,
            title: "hello".into(),
            body: "world".into(),
        });
        assert_eq!(titles(&after), vec!["hello"]);
    }

    #[test]
    fn info_pushes_an_info_toast() {
        let pushed = Rc::new(RefCell::new(Vec::new()));
        let notifier = Notifier {
            dispatch: {
                let pushed = pushed.clone();
                Callback::from(move |action: ToastAction| {
                    if let ToastAction::Push { level, title, .. } = action {
                        pushed.borrow_mut().push((level, title));
                    }
                })
            },
        };
        notifier.info("Files attached", "2 of 5 files selected.");
        assert_eq!(*pushed.borrow(), vec![(ToastLevel::Info, "Files attached".to_string())]);
    }
}
