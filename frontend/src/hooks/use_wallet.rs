use std::rc::Rc;

use gloo::timers::callback::Timeout;
use shared::{WalletConnection, WalletSession};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::logging::Logger;
use crate::services::{clipboard, wallet};

const COMPONENT: &str = "connect-wallet";

#[derive(Clone, Default, PartialEq)]
pub struct WalletState {
    pub session: WalletSession,
}

pub enum WalletAction {
    ConnectStarted,
    ConnectFinished(WalletConnection),
    Disconnected,
    ToggleMenu,
    CloseMenu,
    Copied(bool),
}

impl Reducible for WalletState {
    type Action = WalletAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut session = self.session.clone();
        match action {
            WalletAction::ConnectStarted => session.connect_started(),
            WalletAction::ConnectFinished(connection) => session.connect_finished(connection),
            WalletAction::Disconnected => session.disconnect(),
            WalletAction::ToggleMenu => session.toggle_menu(),
            WalletAction::CloseMenu => session.close_menu(),
            WalletAction::Copied(copied) => session.copied = copied,
        }
        Rc::new(WalletState { session })
    }
}

#[derive(Clone, PartialEq)]
pub struct UseWalletActions {
    pub connect: Callback<()>,
    pub disconnect: Callback<()>,
    pub toggle_menu: Callback<()>,
    pub close_menu: Callback<()>,
    pub copy_address: Callback<()>,
}

pub struct UseWalletResult {
    pub session: WalletSession,
    pub actions: UseWalletActions,
}

/// Hook for the wallet-connect widget's session
#[hook]
pub fn use_wallet(copied_feedback_ms: u32) -> UseWalletResult {
    let state = use_reducer(WalletState::default);

    let connect = {
        let dispatcher = state.dispatcher();
        use_callback((), move |_: (), _| {
            let dispatcher = dispatcher.clone();
            dispatcher.dispatch(WalletAction::ConnectStarted);
            spawn_local(async move {
                let connection = wallet::connect().await;
                if let WalletConnection::Failed { reason } = &connection {
                    Logger::error_with_component(COMPONENT, &format!("connect error: {}", reason));
                }
                dispatcher.dispatch(WalletAction::ConnectFinished(connection));
            });
        })
    };

    let disconnect = {
        let dispatcher = state.dispatcher();
        use_callback((), move |_: (), _| {
            let dispatcher = dispatcher.clone();
            spawn_local(async move {
                if let Err(e) = wallet::disconnect().await {
                    Logger::error_with_component(COMPONENT, &format!("disconnect error: {}", e));
                }
                // Local state is cleared either way
                dispatcher.dispatch(WalletAction::Disconnected);
            });
        })
    };

    let toggle_menu = {
        let dispatcher = state.dispatcher();
        use_callback((), move |_: (), _| dispatcher.dispatch(WalletAction::ToggleMenu))
    };

    let close_menu = {
        let dispatcher = state.dispatcher();
        use_callback((), move |_: (), _| dispatcher.dispatch(WalletAction::CloseMenu))
    };

    let copy_address = {
        let dispatcher = state.dispatcher();
        let address = state.session.address.clone();
        use_callback((address, copied_feedback_ms), move |_: (), (address, feedback_ms)| {
            let Some(address) = address.clone() else {
                return;
            };
            let dispatcher = dispatcher.clone();
            let feedback_ms = *feedback_ms;
            spawn_local(async move {
                match clipboard::copy_text(&address).await {
                    Ok(()) => {
                        dispatcher.dispatch(WalletAction::Copied(true));
                        let dispatcher = dispatcher.clone();
                        Timeout::new(feedback_ms, move || dispatcher.dispatch(WalletAction::Copied(false))).forget();
                    }
                    Err(e) => Logger::error_with_component(COMPONENT, &format!("copy failed: {}", e)),
                }
            });
        })
    };

    UseWalletResult {
        session: state.session.clone(),
        actions: UseWalletActions {
            connect,
            disconnect,
            toggle_menu,
            close_menu,
            copy_address,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::WalletError;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_connect_then_disconnect() {
        let state = Rc::new(WalletState::default());

        let state = state.reduce(WalletAction::ConnectStarted);
        assert!(state.session.loading);

        let state = state.reduce(WalletAction::ConnectFinished(WalletConnection::Connected {
            address: "ST1ABC".to_string(),
        }));
        assert_eq!(state.session.address.as_deref(), Some("ST1ABC"));

        let state = state.reduce(WalletAction::ToggleMenu);
        assert!(state.session.menu_open);

        let state = state.reduce(WalletAction::Disconnected);
        assert!(!state.session.is_connected());
        assert!(!state.session.menu_open);
    }

    #[wasm_bindgen_test]
    fn test_failed_connect() {
        let state = Rc::new(WalletState::default()).reduce(WalletAction::ConnectFinished(
            WalletConnection::Failed { reason: WalletError::Unavailable },
        ));
        assert!(!state.session.is_connected());
        assert_eq!(state.session.last_error, Some(WalletError::Unavailable));
    }
}
