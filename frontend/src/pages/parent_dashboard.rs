use shared::{format_amount, DashboardConfig, Notification, StipendRecord};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::forms::assign_stipend_form::AssignStipendForm;
use crate::components::parent_stipend_card::ParentStipendCard;
use crate::components::stipend_details_modal::{DetailsActions, StipendDetailsModal};
use crate::components::summary_card::SummaryCard;
use crate::components::toast_stack::ToastStack;
use crate::hooks::use_assign_form::use_assign_form;
use crate::hooks::use_clock::{use_clock, ClockConfig};
use crate::hooks::use_stipend_board::use_stipend_board;
use crate::hooks::use_toasts::use_toasts;
use crate::services::clipboard;
use crate::services::gateway::BoardKind;
use crate::services::logging::Logger;

/// Parent view: assign stipends and review what has been handed out
#[function_component(ParentDashboardPage)]
pub fn parent_dashboard_page() -> Html {
    let config = use_context::<DashboardConfig>().unwrap_or_default();
    let currency = config.parent_currency.clone();

    let now = use_clock(ClockConfig { tick_ms: config.clock_tick_ms });
    let toasts = use_toasts(config.toast_duration_ms);
    let board = use_stipend_board(BoardKind::Parent, config.clone(), now, toasts.notify.clone());
    let form = use_assign_form(board.actions.assign.clone(), toasts.notify.clone());
    let selected = use_state(|| None::<String>);

    let totals = board.state.totals(now);
    let records = board.state.records();

    let on_details = {
        let selected = selected.clone();
        Callback::from(move |record: StipendRecord| selected.set(Some(record.id)))
    };

    let on_close = {
        let selected = selected.clone();
        Callback::from(move |_: ()| selected.set(None))
    };

    let on_remove = {
        let remove = board.actions.remove.clone();
        let selected = selected.clone();
        Callback::from(move |id: String| {
            if (*selected).as_deref() == Some(id.as_str()) {
                selected.set(None);
            }
            remove.emit(id);
        })
    };

    let on_copy_student = {
        let notify = toasts.notify.clone();
        Callback::from(move |student: String| {
            let notify = notify.clone();
            spawn_local(async move {
                match clipboard::copy_text(&student).await {
                    Ok(()) => notify.emit(Notification::success("Student address copied")),
                    Err(e) => Logger::warn_with_component("parent-dashboard", &format!("Copy failed: {}", e)),
                }
            });
        })
    };

    let selected_record = (*selected)
        .as_ref()
        .and_then(|id| records.iter().find(|r| &r.id == id))
        .cloned();
    let details_actions = DetailsActions::Parent { on_copy_student };

    html! {
        <div class="page page-parent">
            <main class="container">
                <div class="page-header">
                    <div>
                        <h1>{"Parent Dashboard"}</h1>
                        <p class="muted">{format!("Manage and assign stipends to students. Design-only view ({} balance).", currency)}</p>
                    </div>
                    <div class="header-cards">
                        <SummaryCard
                            label={"Balance".to_string()}
                            value={format_amount(config.parent_balance, &currency)}
                            icon={Some(currency.clone())}
                        />
                        <SummaryCard
                            label={"Assigned Total".to_string()}
                            value={format_amount(totals.total_assigned, &currency)}
                            caption={Some(format!("{} upcoming", totals.upcoming_count))}
                            icon={Some("AL".to_string())}
                        />
                    </div>
                </div>

                <div class="parent-grid">
                    <div>
                        <AssignStipendForm
                            student={form.state.form.student.clone()}
                            amount={form.state.form.amount.clone()}
                            category={form.state.form.category.clone()}
                            unlock_date={form.state.form.unlock_date.clone()}
                            currency={currency.clone()}
                            assigning={form.state.assigning}
                            on_student_input={form.actions.on_student_input.clone()}
                            on_amount_input={form.actions.on_amount_input.clone()}
                            on_category_input={form.actions.on_category_input.clone()}
                            on_unlock_date_input={form.actions.on_unlock_date_input.clone()}
                            on_submit={form.actions.on_submit.clone()}
                        />
                        <p class="muted small">{"This view is design-only. Nothing is sent to a contract or backend."}</p>
                    </div>

                    <section class="stipend-list">
                        if records.is_empty() {
                            <div class="card empty-state">{"No stipends assigned yet."}</div>
                        } else {
                            {for records.iter().map(|record| html! {
                                <ParentStipendCard
                                    key={record.id.clone()}
                                    record={record.clone()}
                                    now={now}
                                    currency={currency.clone()}
                                    on_details={on_details.clone()}
                                    on_remove={on_remove.clone()}
                                />
                            })}
                        }
                    </section>
                </div>

                <footer class="page-footer">{"Tip: this is a mock UI. Contract and wallet interactions are intentionally left out."}</footer>
            </main>

            if let Some(record) = selected_record {
                <StipendDetailsModal
                    record={record}
                    now={now}
                    currency={currency.clone()}
                    actions={details_actions}
                    on_close={on_close}
                />
            }

            <ToastStack toasts={toasts.toasts.clone()} on_dismiss={toasts.dismiss.clone()} />
        </div>
    }
}
