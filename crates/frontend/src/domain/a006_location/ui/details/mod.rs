use crate::shared::http_source::HttpOptionSource;
use crate::shared::modal::Modal;
use crate::shared::toast::{use_toasts, ToastService};
use contracts::domain::a006_location::{LocationLevel, LocationOption};
use contracts::shared::selector_chain::{DependentSelector, SelectionOutcome, SelectorChain};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::sync::Arc;
use thaw::*;

type Selector = DependentSelector<HttpOptionSource>;

fn find_option(options: &[LocationOption], id: &str) -> Option<LocationOption> {
    options.iter().find(|o| o.id == id).cloned()
}

fn report(toasts: ToastService, outcome: &SelectionOutcome) {
    if let SelectionOutcome::Failed { level, error } = outcome {
        toasts.api_error(format!("Failed to fetch {} options", level.label()), error);
    }
}

/// One select of the cascade. Disabled until its parent level is chosen.
#[component]
fn LevelSelect(
    level: LocationLevel,
    chain: RwSignal<SelectorChain>,
    on_select: Callback<(LocationLevel, LocationOption)>,
) -> impl IntoView {
    let placeholder = format!("Select {}", level.label());

    view! {
        <Flex vertical=true gap=FlexGap::Small>
            <Label>{level.label()}</Label>
            <select
                class="form__select"
                prop:disabled=move || chain.with(|c| !c.is_enabled(level))
                prop:value=move || {
                    chain.with(|c| c.selected(level).map(|o| o.id.clone()).unwrap_or_default())
                }
                on:change=move |ev| {
                    let id = event_target_value(&ev);
                    let picked = chain.with_untracked(|c| find_option(c.options(level).options(), &id));
                    if let Some(option) = picked {
                        on_select.run((level, option));
                    }
                }
            >
                <option value="">
                    {move || {
                        if chain.with(|c| c.options(level).is_loading()) {
                            "Loading...".to_string()
                        } else {
                            placeholder.clone()
                        }
                    }}
                </option>
                {move || chain.with(|c| {
                    c.options(level).options().iter().map(|o| view! {
                        <option value=o.id.clone()>{o.name.clone()}</option>
                    }).collect_view()
                })}
            </select>
        </Flex>
    }
}

/// Cascade state shared by the selects of one location picker
#[derive(Clone, Copy)]
pub struct LocationCascade {
    pub chain: RwSignal<SelectorChain>,
    pub on_select: Callback<(LocationLevel, LocationOption)>,
    /// Clear every level and load the countries again
    pub on_reset: Callback<()>,
}

/// Start a fresh cascade and load the countries
pub fn use_location_cascade() -> LocationCascade {
    let toasts = use_toasts();
    let selector = StoredValue::new(Arc::new(Selector::new(HttpOptionSource)));
    let chain = RwSignal::new(SelectorChain::new());

    let sync = move || {
        if let Some(selector) = selector.try_get_value() {
            chain.try_set(selector.snapshot());
        }
    };

    let load_root = move || {
        let selector = selector.get_value();
        spawn_local(async move {
            let outcome = selector.load_root().await;
            report(toasts, &outcome);
            sync();
        });
    };
    load_root();

    let on_select = Callback::new(move |(level, option): (LocationLevel, LocationOption)| {
        // local preview until the selector's own snapshot replaces it
        chain.update(|c| {
            c.select(level, option.clone());
        });
        let selector = selector.get_value();
        spawn_local(async move {
            let outcome = selector.select_parent(level, option).await;
            report(toasts, &outcome);
            sync();
        });
    });

    let on_reset = Callback::new(move |_| {
        selector.get_value().reset();
        sync();
        load_root();
    });

    LocationCascade {
        chain,
        on_select,
        on_reset,
    }
}

#[component]
pub fn CascadeSelects(cascade: LocationCascade) -> impl IntoView {
    view! {
        <Flex vertical=true gap=FlexGap::Medium>
            {LocationLevel::ALL.into_iter().map(|level| view! {
                <LevelSelect level=level chain=cascade.chain on_select=cascade.on_select />
            }).collect_view()}
        </Flex>
    }
}

/// "Add City" dialog
#[component]
pub fn AddCityDialog(on_close: Callback<()>) -> impl IntoView {
    let toasts = use_toasts();
    let cascade = use_location_cascade();
    let chain = cascade.chain;

    let can_create = Signal::derive(move || chain.with(|c| c.is_complete_to(LocationLevel::City)));
    let create = move |_| {
        let city = chain.with_untracked(|c| c.selected(LocationLevel::City).cloned());
        if let Some(city) = city {
            log::info!("city {} ({}) added", city.name, city.id);
            toasts.success("City Added", "New city has been successfully added to the platform.");
            on_close.run(());
        }
    };

    view! {
        <Modal
            title="Add New City"
            on_close=on_close
            footer=move || view! {
                <Flex gap=FlexGap::Small>
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>
                        "Cancel"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        disabled=Signal::derive(move || !can_create.get())
                        on_click=create
                    >
                        "Add City"
                    </Button>
                </Flex>
            }
        >
            <CascadeSelects cascade=cascade />
        </Modal>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_option_by_id() {
        let options = vec![LocationOption::new("1", "India"), LocationOption::new("2", "Nepal")];
        assert_eq!(find_option(&options, "2"), Some(LocationOption::new("2", "Nepal")));
        assert_eq!(find_option(&options, ""), None);
    }
}
