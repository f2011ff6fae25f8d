//! Dashboard controller: the only mutable state in the app.
//!
//! Holds the current payload, the selected horizon and the derived view
//! model in signals, and owns every transition that talks to the analytics
//! service. All fetches go through a request ticket so that a response
//! arriving for a superseded request can never overwrite a newer one.

use leptos::prelude::*;
use leptos::task::spawn_local;
use std::collections::HashMap;
use std::sync::Arc;
use wasm_bindgen::JsValue;
use web_sys::window;

use contracts::dashboards::d100_inventory_overview::{
    build_view_model, DashboardPayload, DashboardViewModel, ForecastHorizon,
};

use super::api;
use super::session::SessionStore;

// ---------------------------------------------------------------------------
// Pure state pieces
// ---------------------------------------------------------------------------

/// Where the controller is in its `Empty -> Loading -> Ready` cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPhase {
    /// No dataset loaded yet.
    Empty,
    /// A request is in flight; previously loaded data, if any, stays visible.
    Loading,
    /// A payload is held and composed.
    Ready,
}

/// The four dashboard tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveTab {
    Overview,
    Inventory,
    Reorder,
    Products,
}

impl ActiveTab {
    pub const ALL: [ActiveTab; 4] = [
        ActiveTab::Overview,
        ActiveTab::Inventory,
        ActiveTab::Reorder,
        ActiveTab::Products,
    ];

    pub fn title(self) -> &'static str {
        match self {
            ActiveTab::Overview => "Sales Overview",
            ActiveTab::Inventory => "Inventory Health",
            ActiveTab::Reorder => "Reorder Recommendations",
            ActiveTab::Products => "Product Trends",
        }
    }

    /// Stable key used in the `?tab=` URL parameter.
    pub fn slug(self) -> &'static str {
        match self {
            ActiveTab::Overview => "overview",
            ActiveTab::Inventory => "inventory",
            ActiveTab::Reorder => "reorder",
            ActiveTab::Products => "products",
        }
    }

    pub fn from_slug(slug: &str) -> Option<ActiveTab> {
        ActiveTab::ALL.into_iter().find(|tab| tab.slug() == slug)
    }
}

/// Monotonically increasing fetch tickets.
///
/// Every issued request holds the ticket it was started with; a completion
/// only applies while its ticket is still the newest one. A superseded
/// request is not aborted, merely ignored when it lands.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestSeq {
    issued: u64,
}

impl RequestSeq {
    pub fn issue(&mut self) -> u64 {
        self.issued += 1;
        self.issued
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        ticket == self.issued
    }
}

// ---------------------------------------------------------------------------
// Controller
// ---------------------------------------------------------------------------

#[derive(Clone, Copy)]
pub struct DashboardController {
    pub phase: RwSignal<LoadPhase>,
    pub horizon: RwSignal<ForecastHorizon>,
    pub payload: RwSignal<Option<DashboardPayload>>,
    /// Composed from the held payload; replaced atomically with it.
    pub view: RwSignal<Option<DashboardViewModel>>,
    /// User-visible notice of the last failed request, cleared on the next one.
    pub error: RwSignal<Option<String>>,
    pub active_tab: RwSignal<ActiveTab>,
    session: StoredValue<Arc<dyn SessionStore>>,
    requests: StoredValue<RequestSeq>,
}

impl DashboardController {
    pub fn new(session: Arc<dyn SessionStore>) -> Self {
        Self {
            phase: RwSignal::new(LoadPhase::Empty),
            horizon: RwSignal::new(ForecastHorizon::default()),
            payload: RwSignal::new(None),
            view: RwSignal::new(None),
            error: RwSignal::new(None),
            active_tab: RwSignal::new(ActiveTab::Overview),
            session: StoredValue::new(session),
            requests: StoredValue::new(RequestSeq::default()),
        }
    }

    pub fn expect_context() -> Self {
        use_context::<DashboardController>().expect("DashboardController context not found")
    }

    /// Upload a dataset, then analyze it with the current horizon.
    pub fn upload(&self, file: web_sys::File) {
        let this = *self;
        let ticket = this.begin_request();
        spawn_local(async move {
            let uploaded = match api::upload_dataset(&file).await {
                Ok(response) => response,
                Err(err) => {
                    this.conclude_error(ticket, format!("Upload failed: {}", err));
                    return;
                }
            };
            let horizon = this.horizon.get_untracked();
            match api::get_dashboard(&uploaded.filename, horizon).await {
                Ok(payload) => {
                    if this.apply_payload(ticket, payload, horizon) {
                        this.active_tab.set(ActiveTab::Overview);
                    }
                }
                Err(err) => this.conclude_error(ticket, format!("Analysis failed: {}", err)),
            }
        });
    }

    /// Change the forecast horizon; refreshes the payload when one is held.
    pub fn set_horizon(&self, horizon: ForecastHorizon) {
        self.horizon.set(horizon);
        let Some(file_name) = self
            .payload
            .with_untracked(|p| p.as_ref().map(|p| p.file_name.clone()))
        else {
            return;
        };

        let this = *self;
        let ticket = this.begin_request();
        spawn_local(async move {
            match api::get_dashboard(&file_name, horizon).await {
                Ok(payload) => {
                    this.apply_payload(ticket, payload, horizon);
                }
                Err(err) => this.conclude_error(ticket, format!("Refresh failed: {}", err)),
            }
        });
    }

    /// Reload the dashboard for the dataset remembered by the session store.
    pub fn restore_last_session(&self) {
        let Some(file_name) = self.session.with_value(|s| s.last_file()) else {
            return;
        };

        let this = *self;
        let horizon = this.horizon.get_untracked();
        let ticket = this.begin_request();
        spawn_local(async move {
            match api::get_dashboard(&file_name, horizon).await {
                Ok(payload) => {
                    this.apply_payload(ticket, payload, horizon);
                }
                Err(err) => {
                    this.conclude_error(ticket, format!("Failed to load last dataset: {}", err))
                }
            }
        });
    }

    /// Mirror the active tab into the `?tab=` URL parameter and back.
    pub fn init_url_sync(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let params: HashMap<String, String> =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        if let Some(tab) = params.get("tab").and_then(|slug| ActiveTab::from_slug(slug)) {
            self.active_tab.set(tab);
        }

        let this = *self;
        Effect::new(move |_| {
            let tab = this.active_tab.get();
            let query = serde_qs::to_string(&HashMap::from([(
                "tab".to_string(),
                tab.slug().to_string(),
            )]))
            .unwrap_or_default();
            let new_search = format!("?{}", query);

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();
            if current_search != new_search {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &JsValue::NULL,
                            "",
                            Some(&new_search),
                        );
                    }
                }
            }
        });
    }

    fn begin_request(&self) -> u64 {
        self.phase.set(LoadPhase::Loading);
        self.error.set(None);
        let mut seq = self.requests.get_value();
        let ticket = seq.issue();
        self.requests.set_value(seq);
        ticket
    }

    fn is_current(&self, ticket: u64) -> bool {
        self.requests.get_value().is_current(ticket)
    }

    /// Hold a fresh payload and its composition. Returns false when the
    /// response belonged to a superseded request and was dropped.
    fn apply_payload(
        &self,
        ticket: u64,
        payload: DashboardPayload,
        horizon: ForecastHorizon,
    ) -> bool {
        if !self.is_current(ticket) {
            log::debug!("dropping superseded dashboard response (ticket {})", ticket);
            return false;
        }

        let view = build_view_model(&payload, horizon);
        for issue in &view.order_issues {
            log::warn!("data quality: {}", issue);
        }

        self.session.with_value(|s| s.set_last_file(&payload.file_name));
        self.payload.set(Some(payload));
        self.view.set(Some(view));
        self.phase.set(LoadPhase::Ready);
        true
    }

    /// Surface a failure; previously held data stays visible.
    fn conclude_error(&self, ticket: u64, message: String) {
        if !self.is_current(ticket) {
            log::debug!("dropping superseded fetch error (ticket {})", ticket);
            return;
        }

        log::error!("{}", message);
        self.error.set(Some(message));
        let phase = if self.payload.with_untracked(|p| p.is_some()) {
            LoadPhase::Ready
        } else {
            LoadPhase::Empty
        };
        self.phase.set(phase);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn later_ticket_wins_regardless_of_completion_order() {
        let mut seq = RequestSeq::default();
        // Request A (horizon 60) issued, then request B (horizon 5) issued
        // before A resolves.
        let ticket_a = seq.issue();
        let ticket_b = seq.issue();
        // A resolves after B: its result must be dropped, B's applied.
        assert!(!seq.is_current(ticket_a));
        assert!(seq.is_current(ticket_b));
    }

    #[test]
    fn a_ticket_is_current_until_superseded() {
        let mut seq = RequestSeq::default();
        let ticket = seq.issue();
        assert!(seq.is_current(ticket));
        seq.issue();
        assert!(!seq.is_current(ticket));
    }

    #[test]
    fn tab_slugs_round_trip() {
        for tab in ActiveTab::ALL {
            assert_eq!(ActiveTab::from_slug(tab.slug()), Some(tab));
        }
        assert_eq!(ActiveTab::from_slug("unknown"), None);
    }
}
