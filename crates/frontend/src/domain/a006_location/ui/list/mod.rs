use crate::domain::a006_location::ui::details::{use_location_cascade, AddCityDialog, CascadeSelects};
use crate::shared::components::stat_card::StatCard;
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use contracts::domain::a006_location::LocationLevel;
use contracts::shared::selector_chain::{OptionsState, SelectorChain};
use leptos::prelude::*;
use thaw::*;

/// Option count of `level`, `None` while it is not loaded
fn loaded_count(chain: &SelectorChain, level: LocationLevel) -> Option<u64> {
    match chain.options(level) {
        OptionsState::Loaded(options) => Some(options.len() as u64),
        _ => None,
    }
}

/// Location hierarchy browser with the "Add City" dialog
#[component]
pub fn LocationList() -> impl IntoView {
    let browser = use_location_cascade();
    let chain = browser.chain;
    let is_dialog_open = RwSignal::new(false);

    let count = move |level: LocationLevel| {
        Signal::derive(move || chain.with(|c| loaded_count(c, level)))
    };

    let path = move || {
        chain.with(|c| {
            LocationLevel::ALL
                .iter()
                .filter_map(|l| c.selected(*l).map(|o| o.name.clone()))
                .collect::<Vec<_>>()
                .join(" / ")
        })
    };

    view! {
        <PageFrame page_id="a006_location--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Location Management"</h1>
                </div>
                <div class="page__header-right">
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| is_dialog_open.set(true)>
                        {icon("plus")}
                        " Add City"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <div class="stat-grid">
                    <StatCard label="Countries" icon_name="map-pin" accent="blue" value=count(LocationLevel::Country) />
                    <StatCard label="States" icon_name="map-pin" accent="green" value=count(LocationLevel::State) />
                    <StatCard label="Cities" icon_name="building" accent="purple" value=count(LocationLevel::City) />
                    <StatCard label="Areas" icon_name="building" accent="orange" value=count(LocationLevel::Area) />
                </div>

                <div class="card">
                    <div class="card__header">
                        <h2 class="card__title">"Browse"</h2>
                        <span class="card__subtitle">{path}</span>
                        <Button
                            appearance=ButtonAppearance::Subtle
                            disabled=Signal::derive(move || {
                                chain.with(|c| c.selected(LocationLevel::Country).is_none())
                            })
                            on_click=move |_| browser.on_reset.run(())
                        >
                            "Clear"
                        </Button>
                    </div>
                    <div class="card__body">
                        <CascadeSelects cascade=browser />
                    </div>
                </div>
            </div>

            <Show when=move || is_dialog_open.get()>
                <AddCityDialog on_close=Callback::new(move |_| is_dialog_open.set(false)) />
            </Show>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a006_location::LocationOption;

    #[test]
    fn test_counts_only_loaded_levels() {
        let mut chain = SelectorChain::new();
        let fetch = chain.begin_fetch(LocationLevel::Country);
        assert_eq!(loaded_count(&chain, LocationLevel::Country), None);

        let countries = vec![LocationOption::new("in", "India"), LocationOption::new("np", "Nepal")];
        assert!(chain.resolve(&fetch, Ok(countries)));
        assert_eq!(loaded_count(&chain, LocationLevel::Country), Some(2));
        assert_eq!(loaded_count(&chain, LocationLevel::State), None);
    }
}
