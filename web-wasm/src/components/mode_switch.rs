//! 検索モード切り替え

use leptos::prelude::*;
use trademark_search_common::SearchMode;

#[component]
pub fn ModeSwitch(mode: RwSignal<SearchMode>) -> impl IntoView {
    let options = SearchMode::ALL
        .into_iter()
        .map(|m| {
            view! {
                <label class="mode-option">
                    <input
                        type="radio"
                        name="search-mode"
                        prop:checked=move || mode.get() == m
                        on:change=move |_| mode.set(m)
                    />
                    {m.label()}
                </label>
            }
        })
        .collect_view();

    view! { <div class="mode-switch">{options}</div> }
}
