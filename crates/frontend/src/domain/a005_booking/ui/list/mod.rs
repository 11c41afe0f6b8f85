use crate::domain::a005_booking::ui::details::BookingDetails;
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::status::{StatusBadge, StatusCounts, StatusSelect};
use crate::shared::config::config;
use crate::shared::icons::icon;
use crate::shared::list_view::use_list_view;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use chrono::{Local, NaiveDate};
use contracts::domain::a005_booking::Booking;
use contracts::enums::{count_by_status, BookingStatus};
use contracts::shared::date_format::{format_input_date, parse_input_date};
use contracts::shared::list_query::{DateRange, FilterState};
use leptos::prelude::*;
use thaw::*;

const ENDPOINT: &str = "booking/all";

/// Range described by the two date inputs.
///
/// Both inputs empty clears the range; a single unparsable or missing end
/// leaves the current range alone.
fn range_from_inputs(from: &str, to: &str) -> Option<Option<DateRange>> {
    if from.trim().is_empty() && to.trim().is_empty() {
        return Some(None);
    }
    let from = parse_input_date(from)?;
    let to = parse_input_date(to)?;
    Some(Some(DateRange::new(from, to)))
}

fn initial_filter(page_size: u32, today: NaiveDate) -> FilterState<BookingStatus> {
    FilterState::new(page_size).with_date_range(DateRange::current_month(today))
}

#[component]
pub fn BookingList() -> impl IntoView {
    let lists = &config().lists;
    let today = Local::now().date_naive();
    let list = use_list_view::<Booking, BookingStatus>(
        ENDPOINT,
        lists.booking_controller(),
        initial_filter(lists.booking_page_size, today),
        "Failed to fetch bookings",
    );

    let is_filter_expanded = RwSignal::new(true);
    let selected = RwSignal::new(None::<Booking>);

    let search = RwSignal::new(String::new());
    Effect::new(move || {
        let v = search.get();
        untrack(move || list.set_search(&v));
    });

    let initial_range = list.filter.with_untracked(|f| f.date_range);
    let date_from = RwSignal::new(
        initial_range
            .map(|r| format_input_date(r.from))
            .unwrap_or_default(),
    );
    let date_to = RwSignal::new(
        initial_range
            .map(|r| format_input_date(r.to))
            .unwrap_or_default(),
    );
    let apply_dates = move || {
        let (from, to) = (date_from.get_untracked(), date_to.get_untracked());
        if let Some(range) = range_from_inputs(&from, &to) {
            list.set_date_range(range);
        }
    };

    let status_counts = Signal::derive(move || {
        list.page
            .with(|p| count_by_status(&p.items, |b: &Booking| b.status))
    });
    let window = list.window();
    let caption = list.showing_caption();

    view! {
        <PageFrame page_id="a005_booking--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Booking Management"</h1>
                    <span class="badge badge--primary">
                        {move || list.total_count().get().to_string()}
                    </span>
                </div>
            </div>

            <div class="page__content">
                <StatusCounts counts=status_counts />

                <FilterPanel
                    is_expanded=is_filter_expanded
                    active_filters_count=list.active_filters_count()
                    loading=list.loading
                    on_refresh=Callback::new(move |_| list.refresh())
                    pagination_controls=move || view! {
                        <PaginationControls
                            window=window
                            caption=caption
                            on_page_change=Callback::new(move |page| list.go_to_page(page))
                        />
                    }
                    filter_content=move || view! {
                        <Flex gap=FlexGap::Small align=FlexAlign::End>
                            <div style="flex: 1; max-width: 320px;">
                                <Flex vertical=true gap=FlexGap::Small>
                                    <Label>"Search:"</Label>
                                    <Input value=search placeholder="Booking, user, vendor..." />
                                </Flex>
                            </div>
                            <Flex vertical=true gap=FlexGap::Small>
                                <Label>"Status:"</Label>
                                <StatusSelect
                                    value=Signal::derive(move || list.filter.with(|f| f.status))
                                    on_change=Callback::new(move |status| list.set_status(status))
                                />
                            </Flex>
                            <Flex vertical=true gap=FlexGap::Small>
                                <Label>"From:"</Label>
                                <input
                                    type="date"
                                    class="form__input"
                                    prop:value=move || date_from.get()
                                    on:change=move |ev| {
                                        date_from.set(event_target_value(&ev));
                                        apply_dates();
                                    }
                                />
                            </Flex>
                            <Flex vertical=true gap=FlexGap::Small>
                                <Label>"To:"</Label>
                                <input
                                    type="date"
                                    class="form__input"
                                    prop:value=move || date_to.get()
                                    on:change=move |ev| {
                                        date_to.set(event_target_value(&ev));
                                        apply_dates();
                                    }
                                />
                            </Flex>
                        </Flex>
                    }
                />

                <div class="timeline">
                    {move || {
                        list.page.with(|p| p.items.clone()).into_iter().map(|booking| {
                            let row = booking.clone();
                            view! {
                                <div class="timeline__item">
                                    <div class="timeline__time">
                                        <div class="timeline__date">{booking.date_caption()}</div>
                                        <div class="timeline__hour">{booking.time_caption()}</div>
                                    </div>
                                    <div class="timeline__card">
                                        <div class="timeline__card-header">
                                            <span class="timeline__title">
                                                {booking.product_name().to_string()}
                                            </span>
                                            <StatusBadge status=booking.status />
                                        </div>
                                        <div class="timeline__meta">
                                            <span>{icon("users")} {booking.user_name().to_string()}</span>
                                            <span>{icon("building")} {booking.vendor_name().to_string()}</span>
                                            <span>{icon("map-pin")} {booking.location_name().to_string()}</span>
                                        </div>
                                        <button
                                            class="button button--icon"
                                            title="View details"
                                            on:click=move |_| selected.set(Some(row.clone()))
                                        >
                                            {icon("eye")}
                                        </button>
                                    </div>
                                </div>
                            }
                        }).collect_view()
                    }}
                    <Show when=move || !list.loading.get() && list.page.with(|p| p.is_empty())>
                        <div class="table__empty">"No bookings in this period"</div>
                    </Show>
                </div>
            </div>

            {move || selected.get().map(|booking| view! {
                <BookingDetails
                    booking=booking
                    on_close=Callback::new(move |_| selected.set(None))
                />
            })}
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_bookings_start_on_current_month() {
        let filter = initial_filter(10000, date(2025, 2, 14));
        assert_eq!(
            filter.date_range,
            Some(DateRange::new(date(2025, 2, 1), date(2025, 2, 28)))
        );
        let request = filter.to_request();
        assert_eq!(request.start_date.as_deref(), Some("01-02-2025"));
        assert_eq!(request.end_date.as_deref(), Some("28-02-2025"));
    }

    #[test]
    fn test_range_from_inputs() {
        assert_eq!(range_from_inputs("", " "), Some(None));
        assert_eq!(range_from_inputs("2025-03-01", ""), None);
        assert_eq!(
            range_from_inputs("2025-03-31", "2025-03-01"),
            Some(Some(DateRange::new(date(2025, 3, 1), date(2025, 3, 31))))
        );
    }
}
