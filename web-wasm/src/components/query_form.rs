//! 入力フォーム（説明文・商品役務・送信ボタン）

use leptos::prelude::*;
use trademark_search_common::SearchMode;

#[component]
pub fn SearchForm<F>(
    mode: RwSignal<SearchMode>,
    description: RwSignal<String>,
    goods_services: RwSignal<String>,
    is_searching: ReadSignal<bool>,
    on_search: F,
) -> impl IntoView
where
    F: Fn(()) + 'static + Clone,
{
    view! {
        <div class="query-form">
            <Show when=move || mode.get() == SearchMode::Description>
                <div class="form-group">
                    <label for="description">"Describe the trademark image"</label>
                    <textarea
                        id="description"
                        placeholder="e.g. A chef in an apron holding a spoon"
                        prop:value=move || description.get()
                        on:input=move |ev| description.set(event_target_value(&ev))
                    />
                </div>
            </Show>

            <div class="form-group">
                <label for="goods-services">"Goods and services (optional)"</label>
                <input
                    type="text"
                    id="goods-services"
                    prop:value=move || goods_services.get()
                    on:input=move |ev| goods_services.set(event_target_value(&ev))
                />
            </div>

            <button
                class="btn btn-primary"
                disabled=move || is_searching.get()
                on:click={
                    let on_search = on_search.clone();
                    move |_| on_search(())
                }
            >
                "Search"
            </button>
        </div>
    }
}
