use yew::prelude::*;

/// Properties for SummaryCard component.
#[derive(Properties, PartialEq)]
pub struct SummaryCardProps {
    pub label: String,
    pub value: String,
    #[prop_or_default]
    pub caption: Option<String>,
    /// Small text in the top-right corner, e.g. "2 locked"
    #[prop_or_default]
    pub badge: Option<String>,
    /// Extra class for the value, e.g. "text-available"
    #[prop_or_default]
    pub accent: Option<String>,
    /// Short tag shown in a colored square before the text
    #[prop_or_default]
    pub icon: Option<String>,
}

/// Summary card component.
#[function_component(SummaryCard)]
pub fn summary_card(props: &SummaryCardProps) -> Html {
    html! {
        <div class="card summary-card">
            if let Some(icon) = &props.icon {
                <div class="summary-icon">{ icon }</div>
            }
            <div class="summary-body">
                <div class="summary-label">{ &props.label }</div>
                <div class={classes!("summary-value", props.accent.clone())}>{ &props.value }</div>
                if let Some(caption) = &props.caption {
                    <div class="summary-caption">{ caption }</div>
                }
            </div>
            if let Some(badge) = &props.badge {
                <div class="summary-badge">{ badge }</div>
            }
        </div>
    }
}
