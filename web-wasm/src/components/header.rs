//! ヘッダーとページ切り替え

use leptos::prelude::*;
use trademark_search_common::DISCLAIMER;
use crate::app::Page;

#[component]
pub fn Header(page: ReadSignal<Page>, set_page: WriteSignal<Page>) -> impl IntoView {
    let tab = move |target: Page| {
        view! {
            <button
                class=move || if page.get() == target { "tab active" } else { "tab" }
                on:click=move |_| set_page.set(target)
            >
                {target.title()}
            </button>
        }
    };

    view! {
        <header class="header">
            <h1>"Trademark / Logo Similarity Search"</h1>
            <nav class="tabs">
                {tab(Page::Search)}
                {tab(Page::Analytics)}
            </nav>
            <p class="disclaimer">{DISCLAIMER}</p>
        </header>
    }
}
