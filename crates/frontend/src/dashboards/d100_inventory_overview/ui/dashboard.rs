use contracts::dashboards::d100_inventory_overview::ForecastHorizon;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;

use super::inventory_tab::InventoryTab;
use super::overview_tab::OverviewTab;
use super::products_tab::ProductsTab;
use super::reorder_tab::ReorderTab;
use crate::dashboards::d100_inventory_overview::controller::{
    ActiveTab, DashboardController, LoadPhase,
};

/// Page shell: header with upload and horizon controls, error banner, and
/// the four tab panels.
#[component]
pub fn InventoryDashboard() -> impl IntoView {
    let ctrl = DashboardController::expect_context();

    view! {
        <div class="dashboard">
            <header class="dashboard__header">
                <h1>"Smart Inventory Management"</h1>
                <p class="dashboard__subtitle">
                    "Upload CSV to analyze sales, forecasts and reorder recommendations."
                </p>
                <UploadPanel />
                <Show when=move || ctrl.payload.with(|p| p.is_some())>
                    <HorizonSelect />
                </Show>
            </header>

            {move || {
                ctrl.error
                    .get()
                    .map(|message| view! { <div class="dashboard__error">{message}</div> })
            }}

            <nav class="dashboard__tabs">
                {ActiveTab::ALL
                    .into_iter()
                    .map(|tab| {
                        view! {
                            <button
                                class=move || {
                                    if ctrl.active_tab.get() == tab {
                                        "dashboard__tab dashboard__tab--active"
                                    } else {
                                        "dashboard__tab"
                                    }
                                }
                                on:click=move |_| ctrl.active_tab.set(tab)
                            >
                                {tab.title()}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </nav>

            <main class="dashboard__panel">
                {move || match ctrl.active_tab.get() {
                    ActiveTab::Overview => view! { <OverviewTab /> }.into_any(),
                    ActiveTab::Inventory => view! { <InventoryTab /> }.into_any(),
                    ActiveTab::Reorder => view! { <ReorderTab /> }.into_any(),
                    ActiveTab::Products => view! { <ProductsTab /> }.into_any(),
                }}
            </main>
        </div>
    }
}

#[component]
fn UploadPanel() -> impl IntoView {
    let ctrl = DashboardController::expect_context();
    // web_sys::File is not Send+Sync, keep it thread-local.
    let selected_file = StoredValue::new_local(None::<web_sys::File>);
    let (selected_name, set_selected_name) = signal(None::<String>);
    let loading = move || ctrl.phase.get() == LoadPhase::Loading;

    view! {
        <div class="upload-panel">
            <label class="upload-panel__picker">
                {move || selected_name.get().unwrap_or_else(|| "Select CSV File".to_string())}
                <input
                    type="file"
                    accept=".csv"
                    style="display: none;"
                    on:change=move |ev| {
                        let Some(input) = ev
                            .target()
                            .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
                        else {
                            return;
                        };
                        let file = input.files().and_then(|files| files.get(0));
                        set_selected_name.set(file.as_ref().map(|f| f.name()));
                        selected_file.set_value(file);
                    }
                />
            </label>
            <button
                class="upload-panel__analyze"
                disabled=move || loading() || selected_name.get().is_none()
                on:click=move |_| {
                    if let Some(file) = selected_file.get_value() {
                        ctrl.upload(file);
                    }
                }
            >
                {move || if loading() { "Analyzing..." } else { "Analyze Data" }}
            </button>
        </div>
    }
}

#[component]
fn HorizonSelect() -> impl IntoView {
    let ctrl = DashboardController::expect_context();

    view! {
        <label class="horizon-select">
            "Forecast Length"
            <select on:change=move |ev| {
                let raw = event_target_value(&ev);
                let parsed = raw
                    .parse::<u32>()
                    .map_err(|e| e.to_string())
                    .and_then(|days| {
                        ForecastHorizon::try_from_days(days).map_err(|e| e.to_string())
                    });
                match parsed {
                    Ok(horizon) => ctrl.set_horizon(horizon),
                    Err(err) => log::error!("rejected forecast horizon {:?}: {}", raw, err),
                }
            }>
                {ForecastHorizon::ALL
                    .into_iter()
                    .map(|horizon| {
                        view! {
                            <option
                                value=horizon.as_days()
                                selected=move || ctrl.horizon.get() == horizon
                            >
                                {horizon.to_string()}
                            </option>
                        }
                    })
                    .collect::<Vec<_>>()}
            </select>
        </label>
    }
}
