use chrono::{DateTime, Utc};
use shared::{format_amount, format_date_time, format_relative, StipendRecord};
use web_sys::HtmlElement;
use yew::prelude::*;

use super::progress_bar::ProgressBar;
use super::student_stipend_card::{can_withdraw, withdraw_button_content};
use crate::services::js::describe_js_error;
use crate::services::logging::Logger;

/// Which dashboard opened the modal, with that dashboard's actions
#[derive(Clone, PartialEq)]
pub enum DetailsActions {
    Parent { on_copy_student: Callback<String> },
    Student {
        withdrawing: Option<String>,
        on_withdraw: Callback<String>,
    },
}

#[derive(Properties, PartialEq)]
pub struct StipendDetailsModalProps {
    pub record: StipendRecord,
    pub now: DateTime<Utc>,
    pub currency: String,
    pub actions: DetailsActions,
    pub on_close: Callback<()>,
}

#[function_component(StipendDetailsModal)]
pub fn stipend_details_modal(props: &StipendDetailsModalProps) -> Html {
    let record = &props.record;
    let now = props.now;
    let status = record.status(now);
    let close_ref = use_node_ref();

    {
        let close_ref = close_ref.clone();
        use_effect_with(record.id.clone(), move |_| {
            if let Some(button) = close_ref.cast::<HtmlElement>() {
                if let Err(e) = button.focus() {
                    Logger::warn_with_component(
                        "stipend-details",
                        &format!("Could not focus close button: {}", describe_js_error(e)),
                    );
                }
            }
            || ()
        });
    }

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    // Keep clicks inside the dialog from reaching the backdrop
    let on_dialog_click = Callback::from(|e: MouseEvent| e.stop_propagation());

    let (subtitle, corner, status_text, extra, primary) = match &props.actions {
        DetailsActions::Parent { on_copy_student } => {
            let student = record.student.clone().unwrap_or_default();
            let on_copy = {
                let on_copy_student = on_copy_student.clone();
                let student = student.clone();
                Callback::from(move |_: MouseEvent| on_copy_student.emit(student.clone()))
            };
            let corner = record
                .created_at
                .map(|created_at| format!("Created {}", format_relative(created_at, now)))
                .unwrap_or_default();
            let status_text = if record.unlock_date <= now { "Unlocked" } else { "Locked" };
            (
                format!("Allocated to {}", student),
                corner,
                status_text,
                html! {},
                html! { <button class="btn btn-primary" onclick={on_copy}>{"Copy student"}</button> },
            )
        }
        DetailsActions::Student { withdrawing, on_withdraw } => {
            let withdrawing = withdrawing.as_deref();
            let on_click = {
                let on_withdraw = on_withdraw.clone();
                let on_close = props.on_close.clone();
                let id = record.id.clone();
                Callback::from(move |_: MouseEvent| {
                    on_withdraw.emit(id.clone());
                    on_close.emit(());
                })
            };
            (
                record.description.clone().unwrap_or_default(),
                status.label().to_string(),
                status.label(),
                html! {
                    <div class="modal-progress">
                        <ProgressBar unlock_date={record.unlock_date} now={now} withdrawn={record.withdrawn} />
                    </div>
                },
                html! {
                    <button
                        class={classes!("btn", "btn-withdraw", status.css_class())}
                        onclick={on_click}
                        disabled={!can_withdraw(record, now, withdrawing)}
                    >
                        {withdraw_button_content(record, now, withdrawing)}
                    </button>
                },
            )
        }
    };

    html! {
        <div class="modal-backdrop" onclick={close.clone()}>
            <div class="modal" role="dialog" aria-modal="true" onclick={on_dialog_click}>
                <div class="modal-head">
                    <div>
                        <h3>{&record.category}</h3>
                        <p class="muted">{subtitle}</p>
                    </div>
                    <div class="stipend-card-amount">
                        <div class="amount">{format_amount(record.amount, &props.currency)}</div>
                        <div class={classes!("small", status.css_class())}>{corner}</div>
                    </div>
                </div>

                {extra}

                <div class="modal-grid">
                    <div class="modal-field">
                        <div class="muted small">{"Unlock date"}</div>
                        <div>{format_date_time(record.unlock_date)}</div>
                    </div>
                    <div class="modal-field">
                        <div class="muted small">{"Status"}</div>
                        <div>{status_text}</div>
                    </div>
                </div>

                <div class="modal-actions">
                    <button class="btn btn-outline" ref={close_ref} onclick={close}>{"Close"}</button>
                    {primary}
                </div>
            </div>
        </div>
    }
}
