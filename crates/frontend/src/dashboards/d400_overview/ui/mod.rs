use crate::dashboards::d400_overview::api::{fetch_recent_activity, fetch_total};
use crate::shared::components::stat_card::StatCard;
use crate::shared::config::config;
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_DASHBOARD};
use crate::shared::toast::{use_toasts, ToastService};
use chrono::Utc;
use contracts::domain::a007_notification::Notification;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Stat card label, icon, accent and the list endpoint it counts
const STATS: [(&str, &str, &str, &str); 4] = [
    ("Vendors", "building", "blue", "vendor/all"),
    ("Products", "package", "green", "product/all"),
    ("Bookings", "calendar", "orange", "booking/all"),
    ("Users", "users", "purple", "user/all"),
];

fn load_total(
    endpoint: &'static str,
    label: &'static str,
    toasts: ToastService,
) -> RwSignal<Option<u64>> {
    let total = RwSignal::new(None);
    spawn_local(async move {
        match fetch_total(endpoint).await {
            Ok(n) => {
                total.try_set(Some(n));
            }
            Err(err) => {
                toasts.api_error(format!("Failed to load {} count", label.to_lowercase()), &err)
            }
        }
    });
    total
}

#[component]
fn ActivityItem(entry: Notification) -> impl IntoView {
    let kind = entry.kind();
    let when = entry.relative_time(Utc::now());

    view! {
        <div class="activity__item" class:activity__item--unread=!entry.read>
            <div class=format!("activity__icon activity__icon--{}", kind.color())>
                {icon(kind.icon())}
            </div>
            <div class="activity__body">
                <div class="activity__title">{entry.title}</div>
                <div class="activity__description">{entry.description}</div>
            </div>
            <div class="activity__time">{when}</div>
        </div>
    }
}

#[component]
pub fn OverviewDashboard() -> impl IntoView {
    let toasts = use_toasts();
    let activity = RwSignal::new(Vec::<Notification>::new());
    let activity_loading = RwSignal::new(true);

    let size = config().notifications.recent_activity_size;
    spawn_local(async move {
        match fetch_recent_activity(size).await {
            Ok(entries) => {
                activity.try_set(entries);
            }
            Err(err) => toasts.api_error("Failed to fetch recent activity", &err),
        }
        activity_loading.try_set(false);
    });

    view! {
        <PageFrame page_id="d400_overview--dashboard" category=PAGE_CAT_DASHBOARD>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Overview"</h1>
                </div>
            </div>

            <div class="page__content">
                <div class="stat-grid">
                    {STATS.into_iter().map(|(label, icon_name, accent, endpoint)| {
                        let value = load_total(endpoint, label, toasts);
                        view! {
                            <StatCard label=label icon_name=icon_name accent=accent value=value />
                        }
                    }).collect_view()}
                </div>

                <div class="card">
                    <div class="card__header">
                        <h2 class="card__title">"Recent Activity"</h2>
                    </div>
                    <div class="card__body activity">
                        <Show when=move || activity_loading.get()>
                            <div class="activity__placeholder">"Loading..."</div>
                        </Show>
                        <Show when=move || !activity_loading.get() && activity.with(|a| a.is_empty())>
                            <div class="activity__placeholder">"No recent activity"</div>
                        </Show>
                        <For
                            each=move || activity.get()
                            key=|entry| entry.id.clone()
                            children=move |entry: Notification| view! { <ActivityItem entry=entry /> }
                        />
                    </div>
                </div>
            </div>
        </PageFrame>
    }
}
