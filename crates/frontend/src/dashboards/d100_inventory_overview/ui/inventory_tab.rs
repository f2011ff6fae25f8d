use leptos::prelude::*;

use super::placeholder;
use crate::dashboards::d100_inventory_overview::controller::DashboardController;
use crate::shared::date_utils::format_date;
use crate::shared::number_format::format_days;

#[component]
pub fn InventoryTab() -> impl IntoView {
    let ctrl = DashboardController::expect_context();

    move || {
        let fields = ctrl.payload.with(|p| {
            p.as_ref()
                .map(|p| (p.days_to_stockout, p.stockout_date.clone()))
        });
        let Some((days_to_stockout, stockout_date)) = fields else {
            return placeholder("Upload CSV to see inventory health.");
        };

        view! {
            <div class="detail-panel">
                <h3>"\u{1f9fe} Inventory Health"</h3>
                <p>
                    "Days to stockout: "
                    <strong>{format_days(days_to_stockout)}</strong>
                </p>
                <p>
                    "Estimated stockout date: "
                    <strong>{format_date(&stockout_date)}</strong>
                </p>
            </div>
        }
        .into_any()
    }
}
