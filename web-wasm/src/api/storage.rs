//! 共起確率データの取得（匿名GETのみ）

use super::{js_error, window};
use leptos::logging;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};
use trademark_search_common::{AnalyticsState, CoOccurrenceTable, ObjectLocation};

/// データを取得して分析ページの状態にする（失敗は警告状態）
pub async fn load_dataset(location: &str, region: &str) -> AnalyticsState {
    if location.trim().is_empty() {
        return AnalyticsState::not_configured();
    }

    let url = match ObjectLocation::parse(location) {
        Ok(location) => location.resolve(region).url,
        Err(e) => return AnalyticsState::load_failed(e),
    };

    let text = match fetch_text(&url).await {
        Ok(text) => text,
        Err(message) => {
            logging::warn!("failed to fetch {}: {}", url, message);
            return AnalyticsState::load_failed(message);
        }
    };

    match CoOccurrenceTable::from_csv_str(&text) {
        Ok(table) => {
            logging::log!("loaded {} co-occurrence rows", table.len());
            AnalyticsState::Ready(table)
        }
        Err(e) => AnalyticsState::load_failed(e),
    }
}

async fn get(url: &str) -> Result<Response, JsValue> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let request = Request::new_with_str_and_init(url, &opts)?;
    JsFuture::from(window()?.fetch_with_request(&request))
        .await?
        .dyn_into()
}

async fn fetch_text(url: &str) -> Result<String, String> {
    let resp = get(url).await.map_err(|e| js_error(&e))?;
    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }

    let promise = resp.text().map_err(|e| js_error(&e))?;
    let text = JsFuture::from(promise).await.map_err(|e| js_error(&e))?;
    Ok(text.as_string().unwrap_or_default())
}
