use chrono::{DateTime, Utc};
use shared::{DashboardConfig, ProgressLabel, ProgressReading};
use yew::prelude::*;

use crate::services::date_utils;

#[derive(Properties, PartialEq)]
pub struct ProgressBarProps {
    pub unlock_date: DateTime<Utc>,
    pub now: DateTime<Utc>,
    pub withdrawn: bool,
}

#[function_component(ProgressBar)]
pub fn progress_bar(props: &ProgressBarProps) -> Html {
    let config = use_context::<DashboardConfig>().unwrap_or_default();
    let reading = ProgressReading::compute_with_config(
        props.unlock_date,
        props.now,
        date_utils::now(),
        props.withdrawn,
        &config,
    );

    let fill_class = match reading.label {
        ProgressLabel::Completed => "progress-fill progress-fill-done",
        ProgressLabel::Unlocked => "progress-fill progress-fill-unlocked",
        ProgressLabel::InProgress => "progress-fill",
    };

    html! {
        <div class="progress">
            <div class="progress-track">
                <div class={fill_class} style={format!("width: {}%", reading.bar_width)} />
            </div>
            <div class="progress-caption">
                <span>{reading.label.text()}</span>
                <span>{format!("{}%", reading.rounded_percent())}</span>
            </div>
        </div>
    }
}
