//! Root component and routes.

use shared::DashboardConfig;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::navbar::Navbar;
use crate::pages::{LandingPage, ParentDashboardPage, StudentDashboardPage};

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/parent")]
    Parent,
    #[at("/student")]
    Student,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <LandingPage /> },
        Route::Parent => html! { <ParentDashboardPage /> },
        Route::Student => html! { <StudentDashboardPage /> },
        Route::NotFound => html! {
            <div class="container">
                <div class="card empty-state">
                    <h1>{"404 - Page Not Found"}</h1>
                    <p>{"The page you're looking for doesn't exist."}</p>
                    <Link<Route> to={Route::Home} classes="btn btn-primary">{"Back home"}</Link<Route>>
                </div>
            </div>
        },
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let config = use_memo((), |_| DashboardConfig::default());

    html! {
        <ContextProvider<DashboardConfig> context={(*config).clone()}>
            <BrowserRouter>
                <Navbar />
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ContextProvider<DashboardConfig>>
    }
}
