//! 単一クラスの閾値フィルタ

use leptos::prelude::*;
use trademark_search_common::cooccurrence::empty_filter_message;
use trademark_search_common::{filter_by_class, CoOccurrenceTable, Threshold};

#[component]
pub fn ThresholdFilter(table: CoOccurrenceTable) -> impl IntoView {
    let classes = table.classes_a();
    let (class_a, set_class_a) = signal(classes.first().cloned().unwrap_or_default());
    let (threshold, set_threshold) = signal(Threshold::default());
    let (input_error, set_input_error) = signal(None::<String>);

    let options = classes
        .into_iter()
        .map(|class| {
            let value = class.clone();
            view! {
                <option value=value.clone() selected=move || class_a.get() == value>
                    {class}
                </option>
            }
        })
        .collect_view();

    let results = move || {
        let class = class_a.get();
        let threshold = threshold.get();
        let rows = filter_by_class(&table, &class, threshold);

        if rows.is_empty() {
            return view! { <p class="text-muted">{empty_filter_message(&class, threshold)}</p> }.into_any();
        }

        let body = rows
            .into_iter()
            .map(|row| {
                view! {
                    <tr>
                        <td>{row.class_b}</td>
                        <td class="number">{format!("{:.2}", row.probability)}</td>
                    </tr>
                }
            })
            .collect_view();
        view! {
            <table class="filter-table">
                <thead>
                    <tr>
                        <th>"Class B"</th>
                        <th>"Probability (%)"</th>
                    </tr>
                </thead>
                <tbody>{body}</tbody>
            </table>
        }
        .into_any()
    };

    view! {
        <div class="threshold-filter">
            <h3>"Classes above threshold"</h3>
            <div class="filter-controls">
                <div class="form-group">
                    <label for="class-a">"Class A"</label>
                    <select id="class-a" on:change=move |ev| set_class_a.set(event_target_value(&ev))>
                        {options}
                    </select>
                </div>
                <div class="form-group">
                    <label for="threshold">"Threshold (%)"</label>
                    <input
                        type="number"
                        id="threshold"
                        min="0"
                        max="100"
                        step="1"
                        prop:value=move || threshold.get().to_string()
                        on:change=move |ev| {
                            match event_target_value(&ev).parse::<Threshold>() {
                                Ok(value) => {
                                    set_input_error.set(None);
                                    set_threshold.set(value);
                                }
                                Err(message) => set_input_error.set(Some(message)),
                            }
                        }
                    />
                </div>
            </div>
            {move || input_error.get().map(|message| view! { <div class="alert alert-warning">{message}</div> })}
            {results}
        </div>
    }
}
