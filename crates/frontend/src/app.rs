use crate::app_shell::AppShell;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::toast::{ToastHost, ToastService};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    provide_context(AppGlobalContext::new());
    provide_context(ToastService::new());

    view! {
        <AppShell />
        <ToastHost />
    }
}
