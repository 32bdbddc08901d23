use shared::{AssignForm, Notification};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::hooks::use_stipend_board::AssignSubmission;

#[derive(Clone, PartialEq)]
pub struct AssignFormState {
    pub form: AssignForm,
    pub assigning: bool,
}

#[derive(Clone, PartialEq)]
pub struct UseAssignFormActions {
    pub on_student_input: Callback<InputEvent>,
    pub on_amount_input: Callback<InputEvent>,
    pub on_category_input: Callback<InputEvent>,
    pub on_unlock_date_input: Callback<InputEvent>,
    pub on_submit: Callback<()>,
}

pub struct UseAssignFormResult {
    pub state: AssignFormState,
    pub actions: UseAssignFormActions,
}

fn input_value(e: &InputEvent) -> String {
    let input: HtmlInputElement = e.target_unchecked_into();
    input.value()
}

/// Hook for the parent dashboard's assign form.
///
/// Validation failures are reported through `notify` and leave the board
/// untouched. A second submit while one is in flight is not blocked here.
#[hook]
pub fn use_assign_form(assign: Callback<AssignSubmission>, notify: Callback<Notification>) -> UseAssignFormResult {
    let form = use_state(AssignForm::default);
    let assigning = use_state(|| false);

    let on_student_input = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            form.set(AssignForm { student: input_value(&e), ..(*form).clone() });
        })
    };

    let on_amount_input = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            form.set(AssignForm { amount: input_value(&e), ..(*form).clone() });
        })
    };

    let on_category_input = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            form.set(AssignForm { category: input_value(&e), ..(*form).clone() });
        })
    };

    let on_unlock_date_input = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            form.set(AssignForm { unlock_date: input_value(&e), ..(*form).clone() });
        })
    };

    let on_submit = {
        let form = form.clone();
        let assigning = assigning.clone();
        Callback::from(move |_: ()| {
            let request = match form.validate() {
                Ok(request) => request,
                Err(e) => {
                    notify.emit(Notification::error(e.to_string()));
                    return;
                }
            };

            assigning.set(true);
            let on_done = {
                let form = form.clone();
                let assigning = assigning.clone();
                Callback::from(move |stored: bool| {
                    if stored {
                        form.set(AssignForm::default());
                    }
                    assigning.set(false);
                })
            };
            assign.emit(AssignSubmission { request, on_done });
        })
    };

    UseAssignFormResult {
        state: AssignFormState {
            form: (*form).clone(),
            assigning: *assigning,
        },
        actions: UseAssignFormActions {
            on_student_input,
            on_amount_input,
            on_category_input,
            on_unlock_date_input,
            on_submit,
        },
    }
}
