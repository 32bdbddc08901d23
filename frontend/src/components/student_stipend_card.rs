use chrono::{DateTime, Utc};
use shared::{format_amount, format_relative, StipendRecord, StipendStatus};
use yew::prelude::*;

use super::progress_bar::ProgressBar;

#[derive(Properties, PartialEq)]
pub struct StudentStipendCardProps {
    pub record: StipendRecord,
    pub now: DateTime<Utc>,
    pub currency: String,
    /// Id of the withdrawal currently pending, if any
    pub withdrawing: Option<String>,
    pub on_withdraw: Callback<String>,
    pub on_details: Callback<StipendRecord>,
}

/// Whether a withdraw control for `record` can be pressed right now.
///
/// Any pending withdrawal disables every control, not just its own.
pub fn can_withdraw(record: &StipendRecord, now: DateTime<Utc>, withdrawing: Option<&str>) -> bool {
    record.is_available(now) && withdrawing.is_none()
}

pub fn withdraw_button_content(record: &StipendRecord, now: DateTime<Utc>, withdrawing: Option<&str>) -> Html {
    if withdrawing == Some(record.id.as_str()) {
        return html! {
            <>
                <span class="spinner" />
                <span>{"Withdrawing..."}</span>
            </>
        };
    }
    match record.status(now) {
        StipendStatus::Available => html! { {"Withdraw"} },
        status => html! { {status.label()} },
    }
}

fn unlock_label(record: &StipendRecord, now: DateTime<Utc>) -> String {
    match record.status(now) {
        StipendStatus::Locked => format_relative(record.unlock_date, now),
        status => status.label().to_string(),
    }
}

#[function_component(StudentStipendCard)]
pub fn student_stipend_card(props: &StudentStipendCardProps) -> Html {
    let record = &props.record;
    let status = record.status(props.now);
    let withdrawing = props.withdrawing.as_deref();

    let on_withdraw = {
        let on_withdraw = props.on_withdraw.clone();
        let id = record.id.clone();
        Callback::from(move |_: MouseEvent| on_withdraw.emit(id.clone()))
    };
    let on_details = {
        let on_details = props.on_details.clone();
        let record = record.clone();
        Callback::from(move |_: MouseEvent| on_details.emit(record.clone()))
    };

    html! {
        <article class="card stipend-card">
            <div class="stipend-card-head">
                <div>
                    <h3 class="stipend-category">{&record.category}</h3>
                    if let Some(description) = &record.description {
                        <p class="muted small">{description}</p>
                    }
                </div>
                <div class="stipend-card-amount">
                    <div class="amount">{format_amount(record.amount, &props.currency)}</div>
                    <div class={classes!("small", status.css_class())}>{unlock_label(record, props.now)}</div>
                </div>
            </div>

            <ProgressBar unlock_date={record.unlock_date} now={props.now} withdrawn={record.withdrawn} />

            <div class="stipend-card-actions">
                <button
                    class={classes!("btn", "btn-withdraw", status.css_class())}
                    onclick={on_withdraw}
                    disabled={!can_withdraw(record, props.now, withdrawing)}
                    aria-disabled={(!record.is_available(props.now)).to_string()}
                >
                    {withdraw_button_content(record, props.now, withdrawing)}
                </button>
                <button class="btn btn-outline" onclick={on_details}>{"Details"}</button>
            </div>
        </article>
    }
}

/// Placeholder card shown while the board loads
#[function_component(SkeletonCard)]
pub fn skeleton_card() -> Html {
    html! { <div class="card stipend-card skeleton" /> }
}
