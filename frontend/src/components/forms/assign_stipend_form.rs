use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AssignStipendFormProps {
    // Form state
    pub student: String,
    pub amount: String,
    pub category: String,
    pub unlock_date: String,
    pub currency: String,
    pub assigning: bool,

    // Event handlers
    pub on_student_input: Callback<InputEvent>,
    pub on_amount_input: Callback<InputEvent>,
    pub on_category_input: Callback<InputEvent>,
    pub on_unlock_date_input: Callback<InputEvent>,
    pub on_submit: Callback<()>,
}

#[function_component(AssignStipendForm)]
pub fn assign_stipend_form(props: &AssignStipendFormProps) -> Html {
    html! {
        <section class="card assign-section">
            <h2>{"Assign stipend"}</h2>
            <p class="muted">{"Set an amount and unlock date for a student."}</p>

            <form class="assign-form" onsubmit={
                let on_submit = props.on_submit.clone();
                Callback::from(move |e: SubmitEvent| {
                    e.prevent_default();
                    on_submit.emit(());
                })
            }>
                <div class="form-group">
                    <label for="student">{"Student address"}</label>
                    <input
                        type="text"
                        id="student"
                        placeholder="ST..."
                        value={props.student.clone()}
                        oninput={props.on_student_input.clone()}
                        disabled={props.assigning}
                    />
                </div>

                <div class="form-row">
                    <div class="form-group">
                        <label for="amount">{format!("Amount ({})", props.currency)}</label>
                        <input
                            type="number"
                            id="amount"
                            placeholder="100"
                            step="0.01"
                            min="0"
                            value={props.amount.clone()}
                            oninput={props.on_amount_input.clone()}
                            disabled={props.assigning}
                        />
                    </div>

                    <div class="form-group">
                        <label for="category">{"Category"}</label>
                        <input
                            type="text"
                            id="category"
                            placeholder="Books, Tuition..."
                            value={props.category.clone()}
                            oninput={props.on_category_input.clone()}
                            disabled={props.assigning}
                        />
                    </div>
                </div>

                <div class="form-group">
                    <label for="unlock-date">{"Unlock date"}</label>
                    <input
                        type="datetime-local"
                        id="unlock-date"
                        value={props.unlock_date.clone()}
                        oninput={props.on_unlock_date_input.clone()}
                        disabled={props.assigning}
                    />
                </div>

                <button type="submit" class="btn btn-primary" disabled={props.assigning}>
                    {if props.assigning { "Assigning..." } else { "Assign stipend" }}
                </button>
            </form>
        </section>
    }
}
