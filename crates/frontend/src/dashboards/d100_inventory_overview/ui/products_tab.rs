use contracts::dashboards::d100_inventory_overview::ProductCardModel;
use leptos::prelude::*;

use super::placeholder;
use crate::dashboards::d100_inventory_overview::controller::DashboardController;
use crate::shared::components::line_chart::OverlayLineChart;
use crate::shared::number_format::format_int;

#[component]
pub fn ProductsTab() -> impl IntoView {
    let ctrl = DashboardController::expect_context();

    move || {
        let Some(vm) = ctrl.view.get() else {
            return placeholder("Upload CSV to see product trends.");
        };

        view! {
            <section class="products">
                <h3>"\u{1f4e6} What is selling fast?"</h3>
                <div class="product-grid">
                    {vm.fast_selling
                        .iter()
                        .map(|card| view! { <ProductCard card=card.clone() /> })
                        .collect::<Vec<_>>()}
                </div>

                <h3>"\u{1f422} What is not selling?"</h3>
                <div class="product-grid">
                    {vm.slow_selling
                        .iter()
                        .map(|card| view! { <ProductCard card=card.clone() /> })
                        .collect::<Vec<_>>()}
                </div>
            </section>
        }
        .into_any()
    }
}

#[component]
fn ProductCard(card: ProductCardModel) -> impl IntoView {
    // Hide the image on load failure instead of breaking the card layout.
    let (image_failed, set_image_failed) = signal(false);

    let image = card.image_url.clone().map(|url| {
        let alt = card.product.clone();
        view! {
            <img
                class="product-card__image"
                src=url
                alt=alt
                style=move || {
                    if image_failed.get() {
                        "display: none;".to_string()
                    } else {
                        String::new()
                    }
                }
                on:error=move |_| set_image_failed.set(true)
            />
        }
    });

    view! {
        <div class="product-card">
            {image}
            <div class="product-card__name">{card.product.clone()}</div>
            <div class="product-card__units">
                {format!("{} pcs", format_int(card.units_sold))}
            </div>
            <div class="product-card__chart">
                <OverlayLineChart series=card.chart.clone() compact=true />
            </div>
        </div>
    }
}
