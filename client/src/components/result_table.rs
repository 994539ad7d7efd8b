//! Tabular result renderer.

use leptos::prelude::*;
use stats::StatsResponse;
use stats::table::TableView;

#[component]
pub fn ResultTable(response: StatsResponse) -> impl IntoView {
    let table = TableView::from_response(&response);
    if table.is_empty() {
        return ().into_any();
    }
    let transposed = table.transposed;

    view! {
        <div class="result-table">
            <table class="result-table__table" class:result-table__table--transposed=transposed>
                <thead>
                    <tr>{table.headers.into_iter().map(|h| view! { <th>{h}</th> }).collect::<Vec<_>>()}</tr>
                </thead>
                <tbody>
                    {table
                        .rows
                        .into_iter()
                        .map(|row| {
                            view! {
                                <tr>
                                    {row
                                        .into_iter()
                                        .enumerate()
                                        .map(|(i, cell)| {
                                            view! {
                                                <td class:result-table__label={transposed && i == 0}>{cell}</td>
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </tr>
                            }
                        })
                        .collect::<Vec<_>>()}
                </tbody>
            </table>
        </div>
    }
    .into_any()
}
