use crate::domain::a003_user::ui::details::UserDetails;
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::status::{StatusBadge, StatusSelect};
use crate::shared::config::config;
use crate::shared::date_utils::date_cell;
use crate::shared::icons::icon;
use crate::shared::list_view::use_list_view;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use contracts::domain::a003_user::User;
use contracts::enums::UserStatus;
use contracts::shared::list_query::FilterState;
use leptos::prelude::*;
use thaw::*;

const ENDPOINT: &str = "user/all";

/// Users open on every status
fn initial_filter(page_size: u32) -> FilterState<UserStatus> {
    FilterState::new(page_size)
}

#[component]
pub fn UserList() -> impl IntoView {
    let lists = &config().lists;
    // searches shorter than `min_search_len` are not sent
    let list = use_list_view::<User, UserStatus>(
        ENDPOINT,
        lists.controller_with_min_search(),
        initial_filter(lists.page_size),
        "Failed to fetch users",
    );
    let min_search_len = lists.min_search_len;

    let is_filter_expanded = RwSignal::new(true);
    let selected = RwSignal::new(None::<User>);

    let search = RwSignal::new(String::new());
    Effect::new(move || {
        let v = search.get();
        untrack(move || list.set_search(&v));
    });

    let search_hint = Signal::derive(move || {
        let len = search.with(|s| s.trim().chars().count());
        (len > 0 && len < min_search_len)
            .then(|| format!("Type at least {} characters to search", min_search_len))
    });
    let window = list.window();
    let caption = list.showing_caption();

    view! {
        <PageFrame page_id="a003_user--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"User Management"</h1>
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
                                    <Input value=search placeholder="Name, email, phone..." />
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
                        {move || search_hint.get().map(|hint| view! {
                            <div class="filter-panel__hint">{hint}</div>
                        })}
                    }
                />

                <div class="table-wrapper">
                    <Table attr:style="width: 100%; min-width: 800px;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"User"</TableHeaderCell>
                                <TableHeaderCell>"Email"</TableHeaderCell>
                                <TableHeaderCell>"Phone"</TableHeaderCell>
                                <TableHeaderCell>"Status"</TableHeaderCell>
                                <TableHeaderCell>"Bookings"</TableHeaderCell>
                                <TableHeaderCell>"Joined"</TableHeaderCell>
                                <TableHeaderCell>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || {
                                list.page.with(|p| p.items.clone()).into_iter().map(|user| {
                                    let row = user.clone();
                                    let bookings = format!(
                                        "{} / {}",
                                        user.completed_bookings.unwrap_or(0),
                                        user.total_bookings.unwrap_or(0)
                                    );
                                    let initial = user.initial();
                                    let name = user.contact_details.display_name().to_string();
                                    let email = user.contact_details.email.clone().unwrap_or_default();
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <span class="avatar">{initial}</span>
                                                    {name}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {email}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                {user.contact_details.phone().unwrap_or_default()}
                                            </TableCell>
                                            <TableCell>
                                                <StatusBadge status=user.status />
                                            </TableCell>
                                            <TableCell>{bookings}</TableCell>
                                            <TableCell>
                                                {date_cell(user.created_time_stamp.as_deref())}
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
                        <div class="table__empty">"No users found"</div>
                    </Show>
                </div>
            </div>

            {move || selected.get().map(|user| view! {
                <UserDetails
                    user=user
                    on_close=Callback::new(move |_| selected.set(None))
                />
            })}
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_users_start_unfiltered() {
        let filter = initial_filter(10);
        assert_eq!(filter.status, None);
        assert_eq!(filter.page_no(), 1);
        let body = serde_json::to_value(filter.to_request()).unwrap();
        assert!(body.get("status").is_none());
    }
}
