//! 検索結果（カード3列 + デザインコード欄）

use leptos::prelude::*;
use trademark_search_common::outcome::SUCCESS_MESSAGE;
use trademark_search_common::{MarkCard, ResultsView, SearchOutcome, ServiceEndpoints, NOT_AVAILABLE};
use super::design_codes::DesignCodes;

#[component]
fn MarkCardView(card: MarkCard) -> impl IntoView {
    let image = match card.image_url.clone() {
        Some(url) => view! { <img src=url alt=card.serial_no.clone() loading="lazy" /> }.into_any(),
        None => view! { <div class="image-placeholder">{NOT_AVAILABLE}</div> }.into_any(),
    };
    let fields = card
        .fields()
        .into_iter()
        .map(|(label, value)| {
            let value = value.to_string();
            view! { <p><strong>{label}": "</strong>{value}</p> }
        })
        .collect_view();

    view! {
        <div class="mark-card">
            {image}
            <div class="mark-info">{fields}</div>
        </div>
    }
}

#[component]
pub fn ResultsGrid(results: ResultsView) -> impl IntoView {
    let design_codes = results.design_code_lines();
    let rows = results
        .rows
        .into_iter()
        .map(|row| {
            let cards = row.into_iter().map(|card| view! { <MarkCardView card=card /> }).collect_view();
            view! { <div class="card-row">{cards}</div> }
        })
        .collect_view();

    view! {
        <div class="results-layout">
            <div class="results-main">
                <h3>{results.header}</h3>
                {rows}
            </div>
            <DesignCodes lines=design_codes />
        </div>
    }
}

/// 1回の検索結果の表示（成功・結果なし・エラー）
#[component]
pub fn OutcomePanel(outcome: SearchOutcome, endpoints: ServiceEndpoints) -> impl IntoView {
    let success = outcome
        .is_success()
        .then(|| view! { <div class="alert alert-success">{SUCCESS_MESSAGE}</div> });

    let body = match &outcome {
        SearchOutcome::Found(result) => {
            view! { <ResultsGrid results=ResultsView::build(result, &endpoints) /> }.into_any()
        }
        SearchOutcome::NoResults => {
            view! { <div class="alert alert-info">{outcome.message()}</div> }.into_any()
        }
        SearchOutcome::ServiceError { .. } | SearchOutcome::TransportError(_) => {
            view! { <div class="alert alert-error">{outcome.message()}</div> }.into_any()
        }
    };

    view! {
        {success}
        {body}
    }
}
