mod dashboard;
mod inventory_tab;
mod overview_tab;
mod products_tab;
mod reorder_tab;

pub use dashboard::InventoryDashboard;

use leptos::prelude::*;

/// Shown in a tab before any dataset has been analyzed.
fn placeholder(text: &'static str) -> AnyView {
    view! { <p class="dashboard__placeholder">{text}</p> }.into_any()
}
