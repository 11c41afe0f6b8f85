//! Application shell: sidebar plus the page of the active section.

use crate::layout::global_context::AppGlobalContext;
use crate::layout::left::sidebar::Sidebar;
use crate::layout::sections::render_section;
use crate::layout::Shell;
use leptos::prelude::*;

#[component]
pub fn AppShell() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    // Initialize router integration. This runs once when the component is created.
    ctx.init_router_integration();

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=move || {
                // one page at a time: switching sections unmounts the previous page
                view! {
                    {move || {
                        let key = ctx.active.get();
                        render_section(&key)
                    }}
                }.into_any()
            }
        />
    }
}
