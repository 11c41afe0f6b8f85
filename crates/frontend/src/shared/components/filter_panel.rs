use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::*;

/// Collapsible filter panel of a list page: header with the active-filter
/// badge, the pagination strip and a refresh button; body with the fields.
#[component]
pub fn FilterPanel(
    #[prop(into)]
    is_expanded: RwSignal<bool>,

    /// Number of active filters (for badge display)
    #[prop(into)]
    active_filters_count: Signal<usize>,

    #[prop(into)]
    loading: Signal<bool>,

    /// Manual refresh, bypassing the debounce
    on_refresh: Callback<()>,

    /// Pagination controls slot
    #[prop(into)]
    pagination_controls: ViewFn,

    /// Filter content (form fields)
    #[prop(into)]
    filter_content: ViewFn,
) -> impl IntoView {
    view! {
        <div class="filter-panel">
            <div class="filter-panel-header">
                <div
                    class="filter-panel-header__left"
                    on:click=move |_| is_expanded.update(|e| *e = !*e)
                >
                    <span class=move || {
                        if is_expanded.get() {
                            "filter-panel__chevron filter-panel__chevron--expanded"
                        } else {
                            "filter-panel__chevron"
                        }
                    }>
                        {icon("chevron-down")}
                    </span>
                    {icon("filter")}
                    <span class="filter-panel__title">"Filters"</span>
                    {move || {
                        let count = active_filters_count.get();
                        (count > 0).then(|| view! {
                            <span class="badge badge--primary">{count}</span>
                        })
                    }}
                </div>
                <div class="filter-panel-header__center">
                    {pagination_controls.run()}
                </div>
                <div class="filter-panel-header__right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| on_refresh.run(())
                        disabled=Signal::derive(move || loading.get())
                    >
                        {move || if loading.get() { "Loading..." } else { "Refresh" }}
                    </Button>
                </div>
            </div>

            <div class=move || {
                if is_expanded.get() {
                    "filter-panel__collapsible filter-panel__collapsible--expanded"
                } else {
                    "filter-panel__collapsible filter-panel__collapsible--collapsed"
                }
            }>
                <div class="filter-panel-content">
                    {filter_content.run()}
                </div>
            </div>
        </div>
    }
}
