//! 共起確率ヒートマップ
//!
//! 固定の区間（0,5,10,15,20,25,50,100）で色分けした表として描く

use leptos::prelude::*;
use trademark_search_common::cooccurrence::{color_for, legend};
use trademark_search_common::{CoOccurrenceTable, ProbabilityMatrix};

#[component]
pub fn Heatmap(table: CoOccurrenceTable) -> impl IntoView {
    let matrix = ProbabilityMatrix::from_table(&table);

    let header = matrix
        .columns
        .iter()
        .map(|column| view! { <th class="heatmap-column">{column.clone()}</th> })
        .collect_view();

    let rows = matrix
        .rows
        .iter()
        .zip(&matrix.cells)
        .map(|(label, cells)| {
            let cells = cells
                .iter()
                .zip(&matrix.columns)
                .map(|(cell, column)| match cell {
                    Some(value) => {
                        let style = format!("background-color: {}", color_for(*value).unwrap_or("transparent"));
                        let title = format!("{} → {}: {:.2}%", label, column, value);
                        view! { <td style=style title=title>{format!("{:.1}", value)}</td> }.into_any()
                    }
                    None => view! { <td class="empty" /> }.into_any(),
                })
                .collect_view();
            view! {
                <tr>
                    <th class="heatmap-row">{label.clone()}</th>
                    {cells}
                </tr>
            }
        })
        .collect_view();

    let legend = legend()
        .into_iter()
        .map(|(label, color)| {
            view! {
                <span class="legend-item">
                    <span class="legend-swatch" style=format!("background-color: {}", color) />
                    {label}
                </span>
            }
        })
        .collect_view();

    view! {
        <div class="heatmap">
            <h3>"Class Co-occurrence Heatmap"</h3>
            <div class="heatmap-scroll">
                <table>
                    <thead>
                        <tr>
                            <th>"Class A \\ Class B"</th>
                            {header}
                        </tr>
                    </thead>
                    <tbody>{rows}</tbody>
                </table>
            </div>
            <div class="legend">{legend}</div>
        </div>
    }
}
