//! 設定パネルコンポーネント

use leptos::prelude::*;
use trademark_search_common::ImageUrlTemplate;
use crate::settings::WebSettings;

#[component]
pub fn SettingsPanel(settings: RwSignal<WebSettings>) -> impl IntoView {
    view! {
        <details class="settings-panel">
            <summary>"Settings"</summary>
            <div class="settings-grid">
                <div class="form-group">
                    <label for="similarity-url">"Similarity search service URL"</label>
                    <input
                        type="url"
                        id="similarity-url"
                        prop:value=move || settings.with(|s| s.similarity_url.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            settings.update(|s| s.similarity_url = value);
                        }
                    />
                </div>

                <div class="form-group">
                    <label for="image-url">"Image service URL"</label>
                    <input
                        type="url"
                        id="image-url"
                        prop:value=move || settings.with(|s| s.image_url.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            settings.update(|s| s.image_url = value);
                        }
                    />
                </div>

                <div class="form-group">
                    <label for="image-template">"Image URL template"</label>
                    <select
                        id="image-template"
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            settings.update(|s| s.image_template = ImageUrlTemplate::parse(&value));
                        }
                    >
                        <option
                            value="large"
                            selected=move || settings.with(|s| s.image_template.as_str() == ImageUrlTemplate::LARGE)
                        >
                            {ImageUrlTemplate::LARGE}
                        </option>
                        <option
                            value="legacy"
                            selected=move || settings.with(|s| s.image_template.as_str() == ImageUrlTemplate::LEGACY)
                        >
                            {ImageUrlTemplate::LEGACY}
                        </option>
                    </select>
                </div>

                <div class="form-group">
                    <label for="api-key">"API Key (optional)"</label>
                    <input
                        type="password"
                        id="api-key"
                        prop:value=move || settings.with(|s| s.api_key.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            settings.update(|s| s.api_key = value);
                        }
                    />
                </div>

                <div class="form-group">
                    <label for="cooccurrence-url">"Co-occurrence data (https:// or public s3://)"</label>
                    <input
                        type="text"
                        id="cooccurrence-url"
                        prop:value=move || settings.with(|s| s.cooccurrence_url.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            settings.update(|s| s.cooccurrence_url = value);
                        }
                    />
                </div>
            </div>
        </details>
    }
}
