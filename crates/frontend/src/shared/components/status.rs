use contracts::enums::ListStatus;
use leptos::prelude::*;

/// Value of the "all statuses" option
const ALL: &str = "all";

#[component]
pub fn StatusBadge<S: ListStatus>(status: S) -> impl IntoView {
    view! {
        <span class=format!("badge {}", status.badge_class())>{status.label()}</span>
    }
}

/// Native status select with an "All" entry mapped to `None`
#[component]
pub fn StatusSelect<S: ListStatus>(
    #[prop(into)]
    value: Signal<Option<S>>,
    on_change: Callback<Option<S>>,
) -> impl IntoView {
    view! {
        <select
            class="form__select"
            on:change=move |ev| {
                let raw = event_target_value(&ev);
                on_change.run(status_from_option(&raw));
            }
            prop:value=move || option_value(value.get())
        >
            <option value=ALL>"All statuses"</option>
            {S::all().iter().map(|status| view! {
                <option value=status.wire_value()>{status.label()}</option>
            }).collect_view()}
        </select>
    }
}

fn option_value<S: ListStatus>(status: Option<S>) -> &'static str {
    status.map(|s| s.wire_value()).unwrap_or(ALL)
}

fn status_from_option<S: ListStatus>(raw: &str) -> Option<S> {
    if raw == ALL {
        None
    } else {
        S::from_wire(raw)
    }
}

/// Status count cards shown above a list
#[component]
pub fn StatusCounts<S: ListStatus>(#[prop(into)] counts: Signal<Vec<(S, usize)>>) -> impl IntoView {
    view! {
        <div class="status-counts">
            {move || counts.get().into_iter().map(|(status, count)| view! {
                <div class=format!("status-count {}", status.badge_class())>
                    <div class="status-count__value">{count}</div>
                    <div class="status-count__label">{status.label()}</div>
                </div>
            }).collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::enums::VendorStatus;

    #[test]
    fn test_all_option_maps_to_none() {
        assert_eq!(status_from_option::<VendorStatus>("all"), None);
        assert_eq!(
            status_from_option::<VendorStatus>("APPROVED"),
            Some(VendorStatus::Approved)
        );
        assert_eq!(option_value::<VendorStatus>(None), "all");
        assert_eq!(option_value(Some(VendorStatus::Disabled)), "DISABLED");
    }
}
