use std::rc::Rc;

use gloo::timers::callback::Timeout;
use shared::Notification;
use yew::prelude::*;

#[derive(Clone, Default, PartialEq)]
pub struct ToastState {
    pub toasts: Vec<Notification>,
}

pub enum ToastAction {
    Push(Notification),
    Dismiss(u64),
}

impl Reducible for ToastState {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut toasts = self.toasts.clone();
        match action {
            ToastAction::Push(notification) => toasts.push(notification),
            ToastAction::Dismiss(id) => toasts.retain(|t| t.id != id),
        }
        Rc::new(ToastState { toasts })
    }
}

#[derive(Clone, PartialEq)]
pub struct UseToastsResult {
    pub toasts: Vec<Notification>,
    pub notify: Callback<Notification>,
    pub dismiss: Callback<u64>,
}

/// Hook for a self-clearing toast stack
#[hook]
pub fn use_toasts(duration_ms: u32) -> UseToastsResult {
    let state = use_reducer(ToastState::default);

    let dismiss = {
        let dispatcher = state.dispatcher();
        use_callback((), move |id: u64, _| dispatcher.dispatch(ToastAction::Dismiss(id)))
    };

    let notify = {
        let dispatcher = state.dispatcher();
        use_callback(duration_ms, move |notification: Notification, duration_ms| {
            let id = notification.id;
            dispatcher.dispatch(ToastAction::Push(notification));

            let dispatcher = dispatcher.clone();
            Timeout::new(*duration_ms, move || dispatcher.dispatch(ToastAction::Dismiss(id))).forget();
        })
    };

    UseToastsResult {
        toasts: state.toasts.clone(),
        notify,
        dismiss,
    }
}
