use crate::shared::icons::icon;
use leptos::ev;
use leptos::prelude::*;

/// Dialog over a dimmed overlay. Closes on Escape, on overlay click and on
/// the close button; the owner decides whether it is rendered at all.
#[component]
pub fn Modal(
    /// Title of the modal
    #[prop(into)]
    title: String,
    /// Callback when modal should close
    on_close: Callback<()>,
    /// Optional action buttons (Save, Cancel, etc.) shown under the body
    #[prop(optional, into)]
    footer: Option<ViewFn>,
    /// Modal content
    children: Children,
) -> impl IntoView {
    let escape = window_event_listener(ev::keydown, move |event| {
        if event.key() == "Escape" {
            on_close.run(());
        }
    });
    on_cleanup(move || escape.remove());

    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <div class="modal" on:click=|e: ev::MouseEvent| e.stop_propagation()>
                <div class="modal-header">
                    <h2 class="modal-title">{title}</h2>
                    <button class="button button--icon modal__close" on:click=move |_| on_close.run(())>
                        {icon("x")}
                    </button>
                </div>
                <div class="modal-body">
                    {children()}
                </div>
                {footer.map(|footer| view! {
                    <div class="modal-footer">{footer.run()}</div>
                })}
            </div>
        </div>
    }
}
