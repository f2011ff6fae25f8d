use crate::dashboards::d100_inventory_overview::controller::DashboardController;
use crate::dashboards::d100_inventory_overview::session::BrowserSession;
use crate::dashboards::d100_inventory_overview::ui::InventoryDashboard;
use leptos::prelude::*;
use std::sync::Arc;

#[component]
pub fn App() -> impl IntoView {
    // One controller instance for the whole app, provided via context.
    let controller = DashboardController::new(Arc::new(BrowserSession));
    provide_context(controller);

    controller.init_url_sync();
    controller.restore_last_session();

    view! {
        <InventoryDashboard />
    }
}
