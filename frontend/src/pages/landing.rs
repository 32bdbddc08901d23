use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;

#[function_component(LandingPage)]
pub fn landing_page() -> Html {
    html! {
        <section class="hero">
            <div class="hero-inner">
                <h1 class="hero-title">
                    <span class="gradient-text">{"Welcome to EduFunds"}</span>
                </h1>
                <p class="hero-lead">
                    {"A Stacks-powered platform for managing student stipends, with smart spending controls, \
                      automated savings, real-time withdrawal tracking and transparent fund allocation \
                      between parents and students."}
                </p>
                <div class="hero-actions">
                    <Link<Route> to={Route::Parent} classes="btn btn-hero btn-hero-parent">
                        {"I'm a Parent"}
                    </Link<Route>>
                    <Link<Route> to={Route::Student} classes="btn btn-hero btn-hero-student">
                        {"I'm a Student"}
                    </Link<Route>>
                </div>
                <div class="hero-footer">
                    {"Built on "}
                    <a href="https://www.stacks.co" target="_blank" rel="noopener noreferrer">{"Stacks"}</a>
                </div>
            </div>
        </section>
    }
}
