use contracts::dashboards::d100_inventory_overview::{
    DashboardPayload, ForecastHorizon, UploadResponse,
};
use gloo_net::http::Request;
use wasm_bindgen::JsCast;

use crate::shared::api_utils::api_url;

/// Fetch the full dashboard payload for an uploaded dataset.
pub async fn get_dashboard(
    file_name: &str,
    horizon: ForecastHorizon,
) -> Result<DashboardPayload, String> {
    let url = api_url(&format!(
        "/dashboard_data?file_name={}&forecast_days={}",
        urlencoding::encode(file_name),
        horizon.as_days()
    ));

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let data: DashboardPayload = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    Ok(data)
}

/// Upload a CSV dataset; the returned filename is the handle for
/// [`get_dashboard`] calls.
pub async fn upload_dataset(file: &web_sys::File) -> Result<UploadResponse, String> {
    use web_sys::{FormData, Request as WebRequest, RequestInit, RequestMode, Response};

    let form_data = FormData::new().map_err(|e| format!("{e:?}"))?;
    form_data
        .append_with_blob("file", file)
        .map_err(|e| format!("{e:?}"))?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&form_data);

    let request = WebRequest::new_with_str_and_init(&api_url("/upload"), &opts)
        .map_err(|e| format!("{e:?}"))?;

    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let resp_value = wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("{e:?}"))?;
    let resp: Response = resp_value.dyn_into().map_err(|e| format!("{e:?}"))?;

    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }

    let text = wasm_bindgen_futures::JsFuture::from(resp.text().map_err(|e| format!("{e:?}"))?)
        .await
        .map_err(|e| format!("{e:?}"))?;
    let body = text
        .as_string()
        .ok_or_else(|| "upload response was not text".to_string())?;

    serde_json::from_str(&body).map_err(|e| format!("Failed to parse response: {}", e))
}
