use leptos::prelude::*;

/// Small summary card used on the overview tab.
#[component]
pub fn StatCard(
    /// Caption above the value
    label: String,
    /// Already-formatted value text
    value: String,
    /// Optional (background, foreground) tint pair
    #[prop(optional)]
    tint: Option<(String, String)>,
) -> impl IntoView {
    let style = tint
        .map(|(bg, fg)| format!("background-color: {}; color: {};", bg, fg))
        .unwrap_or_default();

    view! {
        <div class="stat-card" style=style>
            <div class="stat-card__label">{label}</div>
            <div class="stat-card__value">{value}</div>
        </div>
    }
}
