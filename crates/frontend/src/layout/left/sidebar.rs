//! Sidebar navigation, one entry per console section

use crate::layout::global_context::AppGlobalContext;
use crate::layout::sections::SECTIONS;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    view! {
        <div class="app-sidebar__content">
            <div class="app-sidebar__brand">"Marketplace Admin"</div>
            {SECTIONS.iter().map(|section| {
                let key = section.key;
                view! {
                    <div
                        class="app-sidebar__item"
                        class:app-sidebar__item--active=move || ctx.active.with(|a| a == key)
                        on:click=move |_| ctx.activate(key)
                    >
                        <div class="app-sidebar__item-content">
                            {icon(section.icon)}
                            <span>{section.label}</span>
                        </div>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}
