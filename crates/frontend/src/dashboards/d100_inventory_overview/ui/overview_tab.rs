use leptos::prelude::*;

use super::placeholder;
use crate::dashboards::d100_inventory_overview::controller::DashboardController;
use crate::shared::components::line_chart::OverlayLineChart;
use crate::shared::components::stat_card::StatCard;
use crate::shared::number_format::format_int;

#[component]
pub fn OverviewTab() -> impl IntoView {
    let ctrl = DashboardController::expect_context();

    move || {
        let Some(vm) = ctrl.view.get() else {
            return placeholder("Upload CSV to see overview.");
        };
        let scalars = ctrl.payload.with(|p| {
            p.as_ref()
                .map(|p| (p.current_stock_total, p.reorder_qty, p.stock_status.clone()))
        });
        let Some((stock_total, reorder_qty, status_label)) = scalars else {
            return placeholder("Upload CSV to see overview.");
        };

        let horizon_days = ctrl.horizon.get().as_days();
        let tint = (
            vm.stock_band.background().to_string(),
            vm.stock_band.foreground().to_string(),
        );

        view! {
            <div class="stat-grid">
                <StatCard
                    label=format!("\u{1f4e6} Forecast ({}d)", horizon_days)
                    value=format!("{} units", format_int(vm.forecast_total))
                />
                <StatCard
                    label="\u{1f9fe} Current Stock (approx)".to_string()
                    value=format!("{} units", format_int(stock_total))
                />
                <StatCard
                    label="\u{1f504} Recommended Reorder".to_string()
                    value=format!("{} units", format_int(reorder_qty))
                />
                <StatCard
                    label="\u{1f4c9} Stock Status".to_string()
                    value=status_label
                    tint=tint
                />
            </div>
            <section class="overview-chart">
                <h3>"\u{1f4c8} Sales Trend & Forecast (last 30 days)"</h3>
                <OverlayLineChart series=vm.overview.clone() />
            </section>
        }
        .into_any()
    }
}
