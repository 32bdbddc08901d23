use shared::{format_amount, format_relative, DashboardConfig, StipendRecord};
use yew::prelude::*;

use crate::components::stipend_details_modal::{DetailsActions, StipendDetailsModal};
use crate::components::student_stipend_card::{SkeletonCard, StudentStipendCard};
use crate::components::summary_card::SummaryCard;
use crate::components::toast_stack::ToastStack;
use crate::hooks::use_clock::{use_clock, ClockConfig};
use crate::hooks::use_stipend_board::use_stipend_board;
use crate::hooks::use_toasts::use_toasts;
use crate::services::date_utils;
use crate::services::gateway::BoardKind;

const DEMO_USER: &str = "Demo Student";
const SKELETON_CARDS: usize = 3;

#[function_component(StudentDashboardPage)]
pub fn student_dashboard_page() -> Html {
    let config = use_context::<DashboardConfig>().unwrap_or_default();
    let currency = config.student_currency.clone();

    let now = use_clock(ClockConfig { tick_ms: config.clock_tick_ms });
    let toasts = use_toasts(config.toast_duration_ms);
    let board = use_stipend_board(BoardKind::Student, config.clone(), now, toasts.notify.clone());
    let connected = use_state(|| true);
    let selected = use_state(|| None::<String>);

    let totals = board.state.totals(now);
    let records = board.state.records();
    let withdrawing = board.state.withdrawing().map(str::to_string);

    let on_connect = {
        let connected = connected.clone();
        Callback::from(move |_: MouseEvent| connected.set(true))
    };
    let on_disconnect = {
        let connected = connected.clone();
        Callback::from(move |_: MouseEvent| connected.set(false))
    };
    let on_refresh = {
        let refresh = board.actions.refresh.clone();
        Callback::from(move |_: MouseEvent| refresh.emit(()))
    };
    let on_details = {
        let selected = selected.clone();
        Callback::from(move |record: StipendRecord| selected.set(Some(record.id)))
    };
    let on_close = {
        let selected = selected.clone();
        Callback::from(move |_: ()| selected.set(None))
    };

    let selected_record = (*selected)
        .as_ref()
        .and_then(|id| records.iter().find(|r| &r.id == id))
        .cloned();
    let details_actions = DetailsActions::Student {
        withdrawing: withdrawing.clone(),
        on_withdraw: board.actions.withdraw.clone(),
    };

    let list = if board.state.loading {
        (0..SKELETON_CARDS).map(|i| html! { <SkeletonCard key={i.to_string()} /> }).collect::<Html>()
    } else if records.is_empty() {
        html! { <div class="card empty-state span-all">{"No stipends assigned yet."}</div> }
    } else {
        records
            .iter()
            .map(|record| {
                html! {
                    <StudentStipendCard
                        key={record.id.clone()}
                        record={record.clone()}
                        now={now}
                        currency={currency.clone()}
                        withdrawing={withdrawing.clone()}
                        on_withdraw={board.actions.withdraw.clone()}
                        on_details={on_details.clone()}
                    />
                }
            })
            .collect::<Html>()
    };

    html! {
        <div class="page page-student">
            <main class="container">
                <header class="page-header">
                    <div>
                        <h1>{"Student Dashboard"}</h1>
                        <p class="muted">{"Overview of your stipends and upcoming unlocks."}</p>
                    </div>
                    if *connected {
                        <div class="identity card">
                            <div class="identity-avatar">{"DS"}</div>
                            <div>
                                <div class="identity-name">{DEMO_USER}</div>
                                <div class="muted small">{"Demo account"}</div>
                            </div>
                            <div class="identity-actions">
                                <button class="btn btn-outline btn-sm" aria-label="Refresh stipends" onclick={on_refresh}>
                                    {"Refresh"}
                                </button>
                                <button class="btn btn-danger-soft btn-sm" onclick={on_disconnect}>{"Disconnect"}</button>
                            </div>
                        </div>
                    } else {
                        <button class="btn btn-primary" onclick={on_connect}>{"Connect (demo)"}</button>
                    }
                </header>

                <section class="summary-grid">
                    <SummaryCard
                        label={"Total Balance".to_string()}
                        value={format_amount(totals.total_assigned, &currency)}
                        caption={Some("All stipends (withdrawn and pending)".to_string())}
                    />
                    <SummaryCard
                        label={"Available".to_string()}
                        value={format_amount(totals.available, &currency)}
                        caption={Some("Ready to withdraw".to_string())}
                        badge={Some(format!("{} available", totals.available_count))}
                        accent={Some("text-available".to_string())}
                    />
                    <SummaryCard
                        label={"Locked".to_string()}
                        value={format_amount(totals.locked, &currency)}
                        caption={Some("Pending unlock".to_string())}
                        badge={Some(format!("{} locked", totals.locked_count))}
                        accent={Some("text-locked".to_string())}
                    />
                </section>

                <section>
                    <div class="section-header">
                        <h2>{"Your Stipends"}</h2>
                        <div class="muted small">{format!("Updated {}", format_relative(now, date_utils::now()))}</div>
                    </div>
                    <div class="stipend-grid">
                        {list}
                    </div>
                </section>

                <footer class="page-footer">{"Tip: this is a design-only view. Withdrawals are simulated locally."}</footer>
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
