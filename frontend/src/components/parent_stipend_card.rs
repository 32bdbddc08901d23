use chrono::{DateTime, Utc};
use shared::{format_amount, format_relative, StipendRecord};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ParentStipendCardProps {
    pub record: StipendRecord,
    pub now: DateTime<Utc>,
    pub currency: String,
    pub on_details: Callback<StipendRecord>,
    pub on_remove: Callback<String>,
}

#[function_component(ParentStipendCard)]
pub fn parent_stipend_card(props: &ParentStipendCardProps) -> Html {
    let record = &props.record;

    let on_details = {
        let on_details = props.on_details.clone();
        let record = record.clone();
        Callback::from(move |_: MouseEvent| on_details.emit(record.clone()))
    };
    let on_remove = {
        let on_remove = props.on_remove.clone();
        let id = record.id.clone();
        Callback::from(move |_: MouseEvent| on_remove.emit(id.clone()))
    };

    html! {
        <div class="card stipend-row">
            <div class="stipend-row-info">
                <div class="category-badge">{record.category_initial()}</div>
                <div>
                    <div class="stipend-category">{&record.category}</div>
                    if let Some(student) = &record.student {
                        <div class="muted small">{format!("For: {}", student)}</div>
                    }
                    if let Some(created_at) = record.created_at {
                        <div class="muted small">{format!("Created {}", format_relative(created_at, props.now))}</div>
                    }
                </div>
            </div>

            <div class="stipend-row-side">
                <div class="stipend-card-amount">
                    <div class="amount">{format_amount(record.amount, &props.currency)}</div>
                    <div class="muted small">{format!("Unlocks {}", format_relative(record.unlock_date, props.now))}</div>
                </div>
                <div class="stipend-row-actions">
                    <button class="btn btn-outline btn-sm" onclick={on_details}>{"Details"}</button>
                    <button class="btn btn-danger-soft btn-sm" onclick={on_remove}>{"Remove"}</button>
                </div>
            </div>
        </div>
    }
}
