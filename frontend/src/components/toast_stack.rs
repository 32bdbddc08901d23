use shared::Notification;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ToastStackProps {
    pub toasts: Vec<Notification>,
    pub on_dismiss: Callback<u64>,
}

/// Bottom-right stack of transient notifications
#[function_component(ToastStack)]
pub fn toast_stack(props: &ToastStackProps) -> Html {
    html! {
        <div class="toast-stack" role="status" aria-live="polite">
            {for props.toasts.iter().map(|toast| {
                let on_click = {
                    let on_dismiss = props.on_dismiss.clone();
                    let id = toast.id;
                    Callback::from(move |_: MouseEvent| on_dismiss.emit(id))
                };
                html! {
                    <div key={toast.id.to_string()} class={toast.css_class()} onclick={on_click}>
                        {&toast.message}
                    </div>
                }
            })}
        </div>
    }
}
