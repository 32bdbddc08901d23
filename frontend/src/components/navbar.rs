use shared::{is_active, NAV_ITEMS};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::connect_wallet::ConnectWallet;
use crate::app::Route;

/// Sticky top navigation with route highlighting and a mobile menu
#[function_component(Navbar)]
pub fn navbar() -> Html {
    let open = use_state(|| false);
    let location = use_location();
    let path = location.map(|l| l.path().to_string()).unwrap_or_else(|| "/".to_string());

    let toggle = {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| open.set(!*open))
    };

    let close = {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| open.set(false))
    };

    let links = |mobile: bool| -> Html {
        NAV_ITEMS
            .iter()
            .map(|item| {
                let route = Route::recognize(item.href).unwrap_or(Route::NotFound);
                let active = is_active(&path, item.href);
                let classes = match (mobile, active) {
                    (false, true) => "nav-link nav-link-active",
                    (false, false) => "nav-link",
                    (true, true) => "nav-mobile-link nav-link-active",
                    (true, false) => "nav-mobile-link",
                };
                let link = html! {
                    <Link<Route> to={route} classes={classes!(classes)}>
                        {item.name}
                        if active && !mobile {
                            <span class="nav-underline" />
                        }
                    </Link<Route>>
                };
                if mobile {
                    html! { <div key={item.href} onclick={close.clone()}>{link}</div> }
                } else {
                    html! { <div key={item.href}>{link}</div> }
                }
            })
            .collect()
    };

    html! {
        <header class="navbar">
            <div class="navbar-inner">
                <Link<Route> to={Route::Home} classes="nav-brand">
                    <span class="brand-text">{"EduFunds"}</span>
                </Link<Route>>

                <nav class="nav-desktop">
                    {links(false)}
                </nav>

                <div class="navbar-actions">
                    <ConnectWallet />
                    <button class="nav-toggle" aria-label="Toggle menu" onclick={toggle}>
                        {if *open { "✕" } else { "☰" }}
                    </button>
                </div>
            </div>

            if *open {
                <div class="nav-mobile">
                    {links(true)}
                </div>
            }
        </header>
    }
}
