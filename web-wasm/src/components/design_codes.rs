use leptos::prelude::*;

#[component]
pub fn DesignCodes(lines: Vec<String>) -> impl IntoView {
    view! {
        <aside class="design-codes">
            <h4>"Design Codes"</h4>
            {lines.into_iter().map(|line| view! { <p>{line}</p> }).collect_view()}
        </aside>
    }
}
