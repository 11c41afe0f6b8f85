use crate::domain::a002_vendor::ui::details::VendorDetails;
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::status::{StatusBadge, StatusCounts, StatusSelect};
use crate::shared::config::config;
use crate::shared::date_utils::date_cell;
use crate::shared::icons::icon;
use crate::shared::list_view::use_list_view;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use contracts::domain::a002_vendor::Vendor;
use contracts::enums::{count_by_status, VendorStatus};
use contracts::shared::list_query::FilterState;
use leptos::prelude::*;
use thaw::*;

const ENDPOINT: &str = "vendor/all";

#[component]
pub fn VendorList() -> impl IntoView {
    let lists = &config().lists;
    let list = use_list_view::<Vendor, VendorStatus>(
        ENDPOINT,
        lists.controller(),
        FilterState::new(lists.page_size),
        "Failed to fetch vendors",
    );

    let is_filter_expanded = RwSignal::new(true);
    let selected = RwSignal::new(None::<Vendor>);

    let search = RwSignal::new(String::new());
    Effect::new(move || {
        let v = search.get();
        untrack(move || list.set_search(&v));
    });

    let status_counts = Signal::derive(move || {
        list.page
            .with(|p| count_by_status(&p.items, |v: &Vendor| v.status))
    });
    let window = list.window();
    let caption = list.showing_caption();

    view! {
        <PageFrame page_id="a002_vendor--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Vendor Management"</h1>
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
                            <div style="flex: 1; max-width: 360px;">
                                <Flex vertical=true gap=FlexGap::Small>
                                    <Label>"Search:"</Label>
                                    <Input value=search placeholder="Business name, email..." />
                                </Flex>
                            </div>
                            <Flex vertical=true gap=FlexGap::Small>
                                <Label>"Status:"</Label>
                                <StatusSelect
                                    value=Signal::derive(move || list.filter.with(|f| f.status))
                                    on_change=Callback::new(move |status| list.set_status(status))
                                />
                            </Flex>
                        </Flex>
                    }
                />

                <div class="table-wrapper">
                    <Table attr:style="width: 100%; min-width: 800px;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"Business"</TableHeaderCell>
                                <TableHeaderCell>"Contact"</TableHeaderCell>
                                <TableHeaderCell>"Email"</TableHeaderCell>
                                <TableHeaderCell>"Status"</TableHeaderCell>
                                <TableHeaderCell>"Products"</TableHeaderCell>
                                <TableHeaderCell>"Joined"</TableHeaderCell>
                                <TableHeaderCell>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || {
                                list.page.with(|p| p.items.clone()).into_iter().map(|vendor| {
                                    let row = vendor.clone();
                                    let name = vendor.display_name().to_string();
                                    let contact = vendor.contact_details.display_name().to_string();
                                    let email = vendor.contact_details.email.clone().unwrap_or_default();
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {name}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {contact}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {email}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <StatusBadge status=vendor.status />
                                            </TableCell>
                                            <TableCell>
                                                {vendor.total_products.unwrap_or(0).to_string()}
                                            </TableCell>
                                            <TableCell>
                                                {date_cell(vendor.created_time_stamp.as_deref())}
                                            </TableCell>
                                            <TableCell>
                                                <button
                                                    class="button button--icon"
                                                    title="View details"
                                                    on:click=move |_| selected.set(Some(row.clone()))
                                                >
                                                    {icon("eye")}
                                                </button>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }).collect_view()
                            }}
                        </TableBody>
                    </Table>
                    <Show when=move || !list.loading.get() && list.page.with(|p| p.is_empty())>
                        <div class="table__empty">"No vendors found"</div>
                    </Show>
                </div>
            </div>

            {move || selected.get().map(|vendor| view! {
                <VendorDetails
                    vendor=vendor
                    on_close=Callback::new(move |_| selected.set(None))
                />
            })}
        </PageFrame>
    }
}
