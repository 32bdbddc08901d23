use gloo::events::EventListener;
use shared::format::{address_gradient, avatar_initials};
use shared::{truncate_address, DashboardConfig, WalletError};
use wasm_bindgen::JsCast;
use web_sys::{Element, Node};
use yew::prelude::*;

use crate::hooks::use_wallet::use_wallet;

fn error_hint(error: &WalletError) -> &'static str {
    match error {
        WalletError::Unavailable => "Wallet not found",
        WalletError::NoAddress => "No address returned",
        WalletError::Rejected(_) | WalletError::Malformed(_) => "Connection failed",
    }
}

/// Wallet connect button with an address dropdown once connected
#[function_component(ConnectWallet)]
pub fn connect_wallet() -> Html {
    let config = use_context::<DashboardConfig>().unwrap_or_default();
    let wallet = use_wallet(config.copied_feedback_ms);
    let session = wallet.session.clone();
    let container_ref = use_node_ref();

    // Close the dropdown on any press outside of it
    {
        let container_ref = container_ref.clone();
        let close_menu = wallet.actions.close_menu.clone();
        use_effect_with(session.menu_open, move |open| {
            let listener = if *open {
                web_sys::window().and_then(|w| w.document()).map(|document| {
                    EventListener::new(&document, "mousedown", move |e| {
                        let target = e.target().and_then(|t| t.dyn_into::<Node>().ok());
                        let inside = container_ref
                            .cast::<Element>()
                            .map(|container| container.contains(target.as_ref()))
                            .unwrap_or(false);
                        if !inside {
                            close_menu.emit(());
                        }
                    })
                })
            } else {
                None
            };
            move || drop(listener)
        });
    }

    let on_connect = {
        let connect = wallet.actions.connect.clone();
        Callback::from(move |_: MouseEvent| connect.emit(()))
    };
    let on_toggle = {
        let toggle_menu = wallet.actions.toggle_menu.clone();
        Callback::from(move |_: MouseEvent| toggle_menu.emit(()))
    };
    let on_copy = {
        let copy_address = wallet.actions.copy_address.clone();
        Callback::from(move |_: MouseEvent| copy_address.emit(()))
    };
    let on_disconnect = {
        let disconnect = wallet.actions.disconnect.clone();
        Callback::from(move |_: MouseEvent| disconnect.emit(()))
    };

    let Some(address) = session.address.clone() else {
        return html! {
            <div class="wallet" ref={container_ref}>
                <button class="btn btn-wallet" onclick={on_connect} disabled={session.loading}>
                    {if session.loading { "Connecting..." } else { "Connect Wallet" }}
                </button>
                if let Some(error) = &session.last_error {
                    <span class="wallet-error" title={error.to_string()}>{error_hint(error)}</span>
                }
            </div>
        };
    };

    let gradient = address_gradient(Some(address.as_str()));
    let explorer = config.explorer_url(&address);

    html! {
        <div class="wallet" ref={container_ref}>
            <button class="btn btn-wallet-connected" onclick={on_toggle} title={address.clone()}>
                <span class="wallet-avatar" style={format!("background: {}", gradient)}>
                    {avatar_initials(&address)}
                </span>
                <span class="wallet-address">{truncate_address(&address)}</span>
                <span class="wallet-caret">{if session.menu_open { "▴" } else { "▾" }}</span>
            </button>

            if session.menu_open {
                <div class="wallet-menu" role="menu">
                    <div class="wallet-menu-header">
                        <span class="wallet-avatar wallet-avatar-lg" style={format!("background: {}", gradient)} />
                        <div>
                            <div class="wallet-menu-label">{"Connected"}</div>
                            <div class="wallet-menu-address">{&address}</div>
                        </div>
                    </div>
                    <button class="wallet-menu-item" onclick={on_copy}>
                        {if session.copied { "Copied" } else { "Copy address" }}
                    </button>
                    <a class="wallet-menu-item" href={explorer} target="_blank" rel="noopener noreferrer">
                        {"View on Explorer"}
                    </a>
                    <button class="wallet-menu-item wallet-menu-danger" onclick={on_disconnect}>
                        {"Disconnect"}
                    </button>
                </div>
            }
        </div>
    }
}
