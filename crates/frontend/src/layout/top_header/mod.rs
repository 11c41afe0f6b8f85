//! Top bar: sidebar toggle and the title of the active section.

use crate::layout::global_context::AppGlobalContext;
use crate::layout::sections::section_label;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let is_sidebar_visible = move || ctx.left_open.get();
    let title = move || ctx.active.with(|key| section_label(key));

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if is_sidebar_visible() { "Hide navigation" } else { "Show navigation" }
                >
                    {move || if is_sidebar_visible() {
                        icon("panel-left-close")
                    } else {
                        icon("panel-left-open")
                    }}
                </button>
                <span class="top-header__title">{title}</span>
            </div>
        </div>
    }
}
