use crate::shared::icons::icon;
use contracts::shared::list_query::{PageItem, PaginationWindow};
use leptos::prelude::*;

/// PaginationControls component - Previous, page window with anchors, Next
///
/// Pages are 1-based. The window itself is computed by
/// [`PaginationWindow::compute`]; this component only renders it.
#[component]
pub fn PaginationControls(
    #[prop(into)]
    window: Signal<PaginationWindow>,

    /// "Showing a - b of N" caption
    #[prop(into)]
    caption: Signal<String>,

    /// Callback with the requested 1-based page
    on_page_change: Callback<u32>,
) -> impl IntoView {
    view! {
        <div class="pagination-controls">
            <span class="pagination-info">{move || caption.get()}</span>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let w = window.get_untracked();
                    if w.previous_enabled {
                        on_page_change.run(w.current_page - 1);
                    }
                }
                disabled=move || !window.get().previous_enabled
                title="Previous page"
            >
                {icon("chevron-left")}
                <span>"Previous"</span>
            </button>
            {move || {
                window
                    .get()
                    .items
                    .into_iter()
                    .map(|item| match item {
                        PageItem::Page { number, current } => view! {
                            <button
                                class="pagination-btn pagination-btn--page"
                                class:pagination-btn--current=current
                                on:click=move |_| {
                                    if !current {
                                        on_page_change.run(number);
                                    }
                                }
                            >
                                {number.to_string()}
                            </button>
                        }
                        .into_any(),
                        PageItem::Ellipsis => view! {
                            <span class="pagination-ellipsis">"…"</span>
                        }
                        .into_any(),
                    })
                    .collect_view()
            }}
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let w = window.get_untracked();
                    if w.next_enabled {
                        on_page_change.run(w.current_page + 1);
                    }
                }
                disabled=move || !window.get().next_enabled
                title="Next page"
            >
                <span>"Next"</span>
                {icon("chevron-right")}
            </button>
        </div>
    }
}
