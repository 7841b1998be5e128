use leptos::prelude::*;
use trademark_search_common::CoOccurrenceTable;

/// 全データ（折りたたみ）
#[component]
pub fn DataTable(table: CoOccurrenceTable) -> impl IntoView {
    let rows = table
        .rows()
        .iter()
        .map(|row| {
            view! {
                <tr>
                    <td>{row.class_a.clone()}</td>
                    <td>{row.class_b.clone()}</td>
                    <td class="number">{format!("{:.2}", row.probability)}</td>
                </tr>
            }
        })
        .collect_view();

    view! {
        <details class="data-table">
            <summary>{format!("Show full data ({} rows)", table.len())}</summary>
            <table>
                <thead>
                    <tr>
                        <th>"Class A"</th>
                        <th>"Class B"</th>
                        <th>"Probability (%)"</th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
        </details>
    }
}
