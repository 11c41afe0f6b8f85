use crate::domain::a001_category::api::fetch_categories;
use crate::domain::a004_product::api::save_product;
use crate::domain::a004_product::ui::details::{ProductDetails, RejectDialog};
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::status::{StatusBadge, StatusSelect};
use crate::shared::config::config;
use crate::shared::date_utils::format_price;
use crate::shared::icons::icon;
use crate::shared::list_view::use_list_view;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use crate::shared::toast::use_toasts;
use contracts::domain::a001_category::Category;
use contracts::domain::a004_product::Product;
use contracts::enums::{ListStatus, ProductStatus};
use contracts::shared::list_query::FilterState;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

const ENDPOINT: &str = "product/all";

/// What a moderation call reports back to the moderator
struct Moderation {
    done_title: &'static str,
    done_text: &'static str,
    failed_title: &'static str,
}

const APPROVE: Moderation = Moderation {
    done_title: "Product Approved",
    done_text: "Product has been approved and is now visible to users.",
    failed_title: "Approval Failed",
};

const REJECT: Moderation = Moderation {
    done_title: "Product Rejected",
    done_text: "The product has been rejected and the vendor will be notified.",
    failed_title: "Rejection Failed",
};

#[component]
pub fn ProductList() -> impl IntoView {
    let toasts = use_toasts();
    let lists = &config().lists;
    let list = use_list_view::<Product, ProductStatus>(
        ENDPOINT,
        lists.controller(),
        FilterState::new(lists.page_size),
        "Failed to load products",
    );

    let is_filter_expanded = RwSignal::new(true);
    let selected = RwSignal::new(None::<Product>);
    let reject_target = RwSignal::new(None::<Product>);
    let categories = RwSignal::new(Vec::<Category>::new());

    spawn_local(async move {
        match fetch_categories().await {
            Ok(loaded) => {
                categories.try_set(loaded);
            }
            Err(err) => toasts.api_error("Failed to load categories", &err),
        }
    });

    let search = RwSignal::new(String::new());
    Effect::new(move || {
        let v = search.get();
        untrack(move || list.set_search(&v));
    });

    let moderate = move |updated: Product, outcome: &'static Moderation| {
        spawn_local(async move {
            match save_product(&updated).await {
                Ok(()) => {
                    log::info!(
                        "product {} is now {}",
                        updated.id,
                        updated.product_status.wire_value()
                    );
                    toasts.success(outcome.done_title, outcome.done_text);
                    list.refresh();
                }
                Err(err) => toasts.api_error(outcome.failed_title, &err),
            }
        });
    };

    let approve = Callback::new(move |product: Product| {
        selected.set(None);
        moderate(product.approved(), &APPROVE);
    });
    let open_reject = Callback::new(move |product: Product| {
        selected.set(None);
        reject_target.set(Some(product));
    });
    let confirm_reject = Callback::new(move |(product, reason): (Product, String)| {
        reject_target.set(None);
        moderate(product.rejected(&reason), &REJECT);
    });

    let window = list.window();
    let caption = list.showing_caption();

    view! {
        <PageFrame page_id="a004_product--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Product Management"</h1>
                    <span class="badge badge--primary">
                        {move || list.total_count().get().to_string()}
                    </span>
                </div>
            </div>

            <div class="page__content">
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
                                    <Input value=search placeholder="Title, vendor..." />
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
                                <Label>"Category:"</Label>
                                <select
                                    class="form__select"
                                    on:change=move |ev| list.set_category(Some(event_target_value(&ev)))
                                    prop:value=move || {
                                        list.filter.with(|f| f.category_id.clone().unwrap_or_else(|| "all".to_string()))
                                    }
                                >
                                    <option value="all">"All categories"</option>
                                    {move || categories.get().into_iter().map(|c| view! {
                                        <option value=c.id.clone()>{c.name.clone()}</option>
                                    }).collect_view()}
                                </select>
                            </Flex>
                        </Flex>
                    }
                />

                <div class="table-wrapper">
                    <Table attr:style="width: 100%; min-width: 900px;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"Product"</TableHeaderCell>
                                <TableHeaderCell>"Category"</TableHeaderCell>
                                <TableHeaderCell>"Vendor"</TableHeaderCell>
                                <TableHeaderCell>"Price"</TableHeaderCell>
                                <TableHeaderCell>"Status"</TableHeaderCell>
                                <TableHeaderCell>"Views / Likes / Sold"</TableHeaderCell>
                                <TableHeaderCell>"Actions"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || {
                                list.page.with(|p| p.items.clone()).into_iter().map(|product| {
                                    let stats = format!(
                                        "{} / {} / {}",
                                        product.views.unwrap_or(0),
                                        product.likes.unwrap_or(0),
                                        product.sold.unwrap_or(0)
                                    );
                                    let pending = product.product_status == ProductStatus::Pending;
                                    let (for_view, for_approve, for_reject) =
                                        (product.clone(), product.clone(), product.clone());
                                    let title = product.display_title().to_string();
                                    let category = product.category_name().to_string();
                                    let vendor_name = product.vendor_name().to_string();
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {title}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {category}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {vendor_name}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>{format_price(product.price)}</TableCell>
                                            <TableCell>
                                                <StatusBadge status=product.product_status />
                                            </TableCell>
                                            <TableCell>{stats}</TableCell>
                                            <TableCell>
                                                <Flex gap=FlexGap::Small>
                                                    <button
                                                        class="button button--icon"
                                                        title="View details"
                                                        on:click=move |_| selected.set(Some(for_view.clone()))
                                                    >
                                                        {icon("eye")}
                                                    </button>
                                                    <Show when=move || pending>
                                                        <button
                                                            class="button button--icon button--success"
                                                            title="Approve"
                                                            on:click={
                                                                let product = for_approve.clone();
                                                                move |_| approve.run(product.clone())
                                                            }
                                                        >
                                                            {icon("check")}
                                                        </button>
                                                        <button
                                                            class="button button--icon button--danger"
                                                            title="Reject"
                                                            on:click={
                                                                let product = for_reject.clone();
                                                                move |_| open_reject.run(product.clone())
                                                            }
                                                        >
                                                            {icon("x")}
                                                        </button>
                                                    </Show>
                                                </Flex>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }).collect_view()
                            }}
                        </TableBody>
                    </Table>
                    <Show when=move || !list.loading.get() && list.page.with(|p| p.is_empty())>
                        <div class="table__empty">"No products found"</div>
                    </Show>
                </div>
            </div>

            {move || selected.get().map(|product| view! {
                <ProductDetails
                    product=product
                    on_approve=approve
                    on_reject=open_reject
                    on_close=Callback::new(move |_| selected.set(None))
                />
            })}
            {move || reject_target.get().map(|product| view! {
                <RejectDialog
                    product=product
                    on_confirm=confirm_reject
                    on_close=Callback::new(move |_| reject_target.set(None))
                />
            })}
        </PageFrame>
    }
}
