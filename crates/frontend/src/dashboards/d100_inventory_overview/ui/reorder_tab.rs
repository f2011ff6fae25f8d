use leptos::prelude::*;

use super::placeholder;
use crate::dashboards::d100_inventory_overview::controller::DashboardController;
use crate::shared::date_utils::format_date;
use crate::shared::number_format::format_int;

#[component]
pub fn ReorderTab() -> impl IntoView {
    let ctrl = DashboardController::expect_context();

    move || {
        let fields = ctrl.payload.with(|p| {
            p.as_ref()
                .map(|p| (p.reorder_by_date.clone(), p.reorder_qty))
        });
        let Some((reorder_by_date, reorder_qty)) = fields else {
            return placeholder("Upload CSV to see reorder recommendations.");
        };

        view! {
            <div class="detail-panel">
                <h3>"\u{1f504} Reorder Recommendations"</h3>
                <p>
                    "Reorder by date: "
                    <strong>{format_date(&reorder_by_date)}</strong>
                </p>
                <p>
                    "Recommended reorder quantity: "
                    <strong>{format!("{} units", format_int(reorder_qty))}</strong>
                </p>
            </div>
        }
        .into_any()
    }
}
