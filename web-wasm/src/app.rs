//! メインアプリケーションコンポーネント
//!
//! 2ページ構成: 類似検索 / クラス共起分析。
//! 入力・結果はページを切り替えても保持し、共起データは最初に開いたときだけ取得する。

use leptos::prelude::*;
use leptos::task::spawn_local;
use trademark_search_common::outcome::SEARCHING_MESSAGE;
use trademark_search_common::{AnalyticsState, QueryForm, SearchMode, SearchOutcome};
use crate::api::{similarity, storage};
use crate::components::{
    crop_area::{CropArea, CropSliders},
    data_table::DataTable,
    header::Header,
    heatmap::Heatmap,
    mode_switch::ModeSwitch,
    query_form::SearchForm,
    results_grid::OutcomePanel,
    settings_panel::SettingsPanel,
    spinner::Spinner,
    threshold_filter::ThresholdFilter,
    upload_area::{LoadedImage, UploadArea},
};
use crate::settings::WebSettings;

const MISSING_SERVICE_URL: &str = "Similarity search service URL is not configured. Set it in Settings.";

/// ページ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Search,
    Analytics,
}

impl Page {
    pub fn title(&self) -> &'static str {
        match self {
            Page::Search => "Trademark Search",
            Page::Analytics => "Class Co-occurrence",
        }
    }
}

#[component]
pub fn App() -> impl IntoView {
    let settings = RwSignal::new(WebSettings::from_build_env());
    let (page, set_page) = signal(Page::Search);

    view! {
        <div class="container">
            <Header page=page set_page=set_page />
            <SettingsPanel settings=settings />

            // 非表示のページも状態を保つため、両方描画して切り替える
            <div class:hidden=move || page.get() != Page::Search>
                <SearchPage settings=settings />
            </div>
            <div class:hidden=move || page.get() != Page::Analytics>
                <AnalyticsPage settings=settings active=Signal::derive(move || page.get() == Page::Analytics) />
            </div>
        </div>
    }
}

#[component]
fn SearchPage(settings: RwSignal<WebSettings>) -> impl IntoView {
    let mode = RwSignal::new(SearchMode::Image);
    let (source, set_source) = signal(None::<LoadedImage>);
    let cropped_png = RwSignal::new(None::<Vec<u8>>);
    let sliders = CropSliders::new();
    let description = RwSignal::new(String::new());
    let goods_services = RwSignal::new(String::new());
    let (warning, set_warning) = signal(None::<String>);
    let (is_searching, set_is_searching) = signal(false);
    let (outcome, set_outcome) = signal(None::<SearchOutcome>);

    let on_image_loaded = move |image: LoadedImage| {
        sliders.reset();
        set_source.set(Some(image));
    };

    let on_search = move |_| {
        let form = QueryForm {
            mode: mode.get_untracked(),
            cropped_png: cropped_png.get_untracked(),
            description: description.get_untracked(),
            goods_services: goods_services.get_untracked(),
        };

        // 入力不足はリクエストを送らない
        let query = match form.into_query() {
            Ok(query) => query,
            Err(e) => {
                set_warning.set(Some(e.to_string()));
                return;
            }
        };
        let Some(endpoints) = settings.get_untracked().endpoints() else {
            set_warning.set(Some(MISSING_SERVICE_URL.to_string()));
            return;
        };

        set_warning.set(None);
        set_outcome.set(None);
        set_is_searching.set(true);

        spawn_local(async move {
            let result = similarity::search(&query, &endpoints).await;
            set_outcome.set(Some(result));
            set_is_searching.set(false);
        });
    };

    view! {
        <section class="page search-page">
            <ModeSwitch mode=mode />

            // 説明文モードでも画像と切り抜きは保持する
            <div class:hidden=move || mode.get() != SearchMode::Image>
                <UploadArea image=source on_image_loaded=on_image_loaded />
                <Show when=move || source.get().is_some()>
                    <CropArea source=source cropped_png=cropped_png sliders=sliders />
                </Show>
            </div>

            <SearchForm
                mode=mode
                description=description
                goods_services=goods_services
                is_searching=is_searching
                on_search=on_search
            />

            {move || warning.get().map(|message| view! { <div class="alert alert-warning">{message}</div> })}

            <Show when=move || is_searching.get()>
                <Spinner message=SEARCHING_MESSAGE />
            </Show>

            {move || {
                outcome.get().map(|outcome| {
                    let endpoints = settings.get().endpoints().unwrap_or_default();
                    view! { <OutcomePanel outcome=outcome endpoints=endpoints /> }
                })
            }}
        </section>
    }
}

#[component]
fn AnalyticsPage(settings: RwSignal<WebSettings>, active: Signal<bool>) -> impl IntoView {
    let (state, set_state) = signal(None::<AnalyticsState>);
    let (is_loading, set_is_loading) = signal(false);

    // 初めて開いたときに一度だけ取得
    Effect::new(move |_| {
        if !active.get() || state.with_untracked(Option::is_some) || is_loading.get_untracked() {
            return;
        }
        set_is_loading.set(true);
        let (location, region) = settings.with_untracked(|s| (s.cooccurrence_url.clone(), s.region.clone()));
        spawn_local(async move {
            let loaded = storage::load_dataset(&location, &region).await;
            set_state.set(Some(loaded));
            set_is_loading.set(false);
        });
    });

    view! {
        <section class="page analytics-page">
            <Show when=move || is_loading.get()>
                <Spinner message="Loading co-occurrence data..." />
            </Show>

            {move || {
                state.get().map(|state| match state {
                    AnalyticsState::Ready(table) => view! {
                        <Heatmap table=table.clone() />
                        <ThresholdFilter table=table.clone() />
                        <DataTable table=table />
                    }
                    .into_any(),
                    AnalyticsState::ConfigurationMissing(message) => view! {
                        <div class="alert alert-warning">{message}</div>
                    }
                    .into_any(),
                })
            }}
        </section>
    }
}
