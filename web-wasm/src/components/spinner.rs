use leptos::prelude::*;

#[component]
pub fn Spinner(message: &'static str) -> impl IntoView {
    view! {
        <div class="spinner-container">
            <div class="spinner" />
            <p class="spinner-text">{message}</p>
        </div>
    }
}
