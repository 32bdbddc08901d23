mod app;
mod components;
mod hooks;
mod pages;
mod services;

use log::LevelFilter;

use crate::app::App;
use crate::services::logging::Logger;

fn main() {
    Logger::init(LevelFilter::Info);
    yew::Renderer::<App>::new().render();
}
