use std::rc::Rc;

use chrono::{DateTime, Utc};
use shared::{
    format_amount, AssignRequest, DashboardConfig, InMemoryStipendRepository, Notification,
    StipendBoard, StipendGateway, StipendRecord, StipendTotals, StipendWorkflow, WorkflowError,
};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::gateway::{BoardKind, SimulatedGateway};
use crate::services::logging::Logger;

const COMPONENT: &str = "stipend-board";

/// One dashboard's board plus its loading flag
#[derive(Clone, PartialEq)]
pub struct BoardState {
    pub workflow: StipendBoard,
    pub loading: bool,
}

pub enum BoardAction {
    LoadStarted,
    Loaded(Vec<StipendRecord>),
    LoadFailed,
    Assigned(StipendRecord),
    BeginWithdraw { id: String, now: DateTime<Utc> },
    CompleteWithdraw(String),
    AbortWithdraw(String),
    Remove(String),
}

impl BoardState {
    pub fn new(records: Vec<StipendRecord>, loading: bool) -> Self {
        Self {
            workflow: StipendWorkflow::new(InMemoryStipendRepository::with_records(records)),
            loading,
        }
    }

    pub fn records(&self) -> &[StipendRecord] {
        self.workflow.repository().records()
    }

    pub fn totals(&self, now: DateTime<Utc>) -> StipendTotals {
        StipendTotals::calculate(self.records(), now)
    }

    pub fn withdrawing(&self) -> Option<&str> {
        self.workflow.withdrawing()
    }
}

impl Reducible for BoardState {
    type Action = BoardAction;

    // Timer callbacks dispatch here, so every action applies to the board as
    // it is when the timer fires.
    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        let result = match action {
            BoardAction::LoadStarted => {
                next.loading = true;
                Ok(())
            }
            BoardAction::Loaded(records) => {
                next.loading = false;
                next.workflow.replace_all(records)
            }
            BoardAction::LoadFailed => {
                next.loading = false;
                Ok(())
            }
            BoardAction::Assigned(record) => next.workflow.assign(record).map(|_| ()),
            BoardAction::BeginWithdraw { id, now } => next.workflow.begin_withdraw(&id, now).map(|_| ()),
            BoardAction::CompleteWithdraw(id) => next.workflow.complete_withdraw(&id).map(|_| ()),
            BoardAction::AbortWithdraw(id) => {
                next.workflow.abort_withdraw(&id);
                Ok(())
            }
            BoardAction::Remove(id) => next.workflow.remove(&id).map(|_| ()),
        };

        match result {
            Ok(()) => Rc::new(next),
            Err(e) => {
                Logger::warn_with_component(COMPONENT, &format!("Board action rejected: {}", e));
                self
            }
        }
    }
}

/// An assign request plus a callback told whether it was stored
#[derive(Clone, PartialEq)]
pub struct AssignSubmission {
    pub request: AssignRequest,
    pub on_done: Callback<bool>,
}

#[derive(Clone, PartialEq)]
pub struct UseStipendBoardActions {
    pub assign: Callback<AssignSubmission>,
    pub withdraw: Callback<String>,
    pub remove: Callback<String>,
    pub refresh: Callback<()>,
}

pub struct UseStipendBoardResult {
    pub state: Rc<BoardState>,
    pub actions: UseStipendBoardActions,
}

/// Hook owning a dashboard's stipend board.
///
/// The parent board starts from its sample data; the student board starts
/// empty and loads through the gateway on mount.
#[hook]
pub fn use_stipend_board(
    kind: BoardKind,
    config: DashboardConfig,
    now: DateTime<Utc>,
    notify: Callback<Notification>,
) -> UseStipendBoardResult {
    let gateway = SimulatedGateway::with_config(kind, config.clone());
    let currency = kind.currency(&config).to_string();

    let board = use_reducer(|| match kind {
        BoardKind::Parent => BoardState::new(kind.sample_stipends(), false),
        BoardKind::Student => BoardState::new(Vec::new(), true),
    });

    // Initial load for boards backed by the gateway
    {
        let dispatcher = board.dispatcher();
        let gateway = gateway.clone();
        use_effect_with(kind, move |kind| {
            if *kind == BoardKind::Student {
                spawn_local(async move {
                    match gateway.load().await {
                        Ok(records) => {
                            Logger::info_with_component(COMPONENT, &format!("Loaded {} stipends", records.len()));
                            dispatcher.dispatch(BoardAction::Loaded(records));
                        }
                        Err(e) => {
                            Logger::error_with_component(COMPONENT, &format!("Failed to load stipends: {}", e));
                            dispatcher.dispatch(BoardAction::LoadFailed);
                        }
                    }
                });
            }
            || ()
        });
    }

    let assign = {
        let dispatcher = board.dispatcher();
        let gateway = gateway.clone();
        let notify = notify.clone();
        Callback::from(move |submission: AssignSubmission| {
            let dispatcher = dispatcher.clone();
            let gateway = gateway.clone();
            let notify = notify.clone();
            spawn_local(async move {
                match gateway.submit_assign(submission.request).await {
                    Ok(record) => {
                        dispatcher.dispatch(BoardAction::Assigned(record));
                        notify.emit(Notification::success("Stipend assigned (design-only)"));
                        submission.on_done.emit(true);
                    }
                    Err(e) => {
                        Logger::error_with_component(COMPONENT, &format!("Assign failed: {}", e));
                        notify.emit(Notification::error(e.to_string()));
                        submission.on_done.emit(false);
                    }
                }
            });
        })
    };

    // Claimed synchronously so a second click before the next render is refused
    let in_flight = use_mut_ref(|| None::<String>);

    let withdraw = {
        let board = board.clone();
        let gateway = gateway.clone();
        let notify = notify.clone();
        let currency = currency.clone();
        let in_flight = in_flight.clone();
        Callback::from(move |id: String| {
            if in_flight.borrow().is_some() {
                notify.emit(Notification::error(WorkflowError::WithdrawInFlight.to_string()));
                return;
            }

            // Eligibility is checked against the board as currently rendered
            let mut candidate = board.workflow.clone();
            let record = match candidate.begin_withdraw(&id, now) {
                Ok(record) => record,
                Err(e) => {
                    notify.emit(Notification::error(e.to_string()));
                    return;
                }
            };

            *in_flight.borrow_mut() = Some(id.clone());
            let dispatcher = board.dispatcher();
            dispatcher.dispatch(BoardAction::BeginWithdraw { id: id.clone(), now });

            let gateway = gateway.clone();
            let notify = notify.clone();
            let currency = currency.clone();
            let in_flight = in_flight.clone();
            spawn_local(async move {
                let amount = record.amount;
                let result = gateway.submit_withdraw(record).await;
                in_flight.borrow_mut().take();
                match result {
                    Ok(_) => {
                        dispatcher.dispatch(BoardAction::CompleteWithdraw(id));
                        notify.emit(Notification::success(format!(
                            "Withdrawn {} ✅",
                            format_amount(amount, &currency)
                        )));
                    }
                    Err(e) => {
                        Logger::error_with_component(COMPONENT, &format!("Withdraw of {} failed: {}", id, e));
                        dispatcher.dispatch(BoardAction::AbortWithdraw(id));
                        notify.emit(Notification::error(e.to_string()));
                    }
                }
            });
        })
    };

    let remove = {
        let dispatcher = board.dispatcher();
        let notify = notify.clone();
        Callback::from(move |id: String| {
            dispatcher.dispatch(BoardAction::Remove(id));
            notify.emit(Notification::info("Removed stipend (demo)"));
        })
    };

    let refresh = {
        let board = board.clone();
        let gateway = gateway.clone();
        let notify = notify.clone();
        Callback::from(move |_: ()| {
            let current = board.records().to_vec();
            let dispatcher = board.dispatcher();
            let gateway = gateway.clone();
            let notify = notify.clone();
            dispatcher.dispatch(BoardAction::LoadStarted);
            spawn_local(async move {
                match gateway.refresh(current).await {
                    Ok(records) => {
                        dispatcher.dispatch(BoardAction::Loaded(records));
                        notify.emit(Notification::info("Refreshed stipends."));
                    }
                    Err(e) => {
                        dispatcher.dispatch(BoardAction::LoadFailed);
                        notify.emit(Notification::error(e.to_string()));
                    }
                }
            });
        })
    };

    let state = Rc::new((*board).clone());

    UseStipendBoardResult {
        state,
        actions: UseStipendBoardActions {
            assign,
            withdraw,
            remove,
            refresh,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use shared::samples;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn student_board(now: DateTime<Utc>) -> Rc<BoardState> {
        Rc::new(BoardState::new(samples::student_stipends(now), false))
    }

    #[wasm_bindgen_test]
    fn test_withdraw_actions() {
        let now = Utc::now();
        let state = student_board(now);

        let state = state.reduce(BoardAction::BeginWithdraw { id: "s1".to_string(), now });
        assert_eq!(state.withdrawing(), Some("s1"));

        let state = state.reduce(BoardAction::CompleteWithdraw("s1".to_string()));
        assert_eq!(state.withdrawing(), None);
        assert!(state.records().iter().find(|r| r.id == "s1").unwrap().withdrawn);
        assert_eq!(state.totals(now).available, 0.0);
    }

    #[wasm_bindgen_test]
    fn test_completion_without_begin_is_rejected() {
        let now = Utc::now();
        let state = student_board(now);

        let next = state.clone().reduce(BoardAction::CompleteWithdraw("s1".to_string()));
        assert!(Rc::ptr_eq(&state, &next));
        assert!(!next.records().iter().any(|r| r.id == "s1" && r.withdrawn));
    }

    #[wasm_bindgen_test]
    fn test_rejected_action_keeps_state() {
        let now = Utc::now();
        let state = student_board(now);

        let next = state.clone().reduce(BoardAction::BeginWithdraw { id: "s2".to_string(), now });
        assert!(Rc::ptr_eq(&state, &next));
    }

    #[wasm_bindgen_test]
    fn test_assign_and_remove() {
        let now = Utc::now();
        let state = Rc::new(BoardState::new(samples::parent_stipends(now), false));
        let mut record = samples::parent_stipends(now).remove(0);
        record.id = "p9".to_string();
        record.unlock_date = now + Duration::days(1);

        let state = state.reduce(BoardAction::Assigned(record));
        assert_eq!(state.records()[0].id, "p9");
        assert_eq!(state.totals(now).upcoming_count, 3);

        let state = state.reduce(BoardAction::Remove("p1".to_string()));
        assert_eq!(state.records().len(), 2);
    }

    #[wasm_bindgen_test]
    fn test_load_clears_loading_flag() {
        let now = Utc::now();
        let state = Rc::new(BoardState::new(Vec::new(), true));

        let state = state.reduce(BoardAction::Loaded(samples::student_stipends(now)));
        assert!(!state.loading);
        assert_eq!(state.records().len(), 4);
    }
}
