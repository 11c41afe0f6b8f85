use crate::shared::components::detail_row::DetailRow;
use crate::shared::components::status::StatusBadge;
use crate::shared::date_utils::date_cell;
use crate::shared::modal::Modal;
use crate::shared::toast::use_toasts;
use contracts::domain::a003_user::User;
use leptos::prelude::*;
use thaw::*;

/// User profile dialog. Activate and suspend only confirm with a toast:
/// the backend has no endpoint for them yet.
#[component]
pub fn UserDetails(user: User, on_close: Callback<()>) -> impl IntoView {
    let toasts = use_toasts();
    let contact = user.contact_details.clone();
    let is_active = user.is_active();

    let activate = move |_| {
        toasts.success("User Activated", "User account has been activated successfully.");
        on_close.run(());
    };
    let suspend = move |_| {
        toasts.success("User Suspended", "User account has been suspended.");
        on_close.run(());
    };

    let count = |n: Option<u64>| Some(n.unwrap_or(0).to_string());

    view! {
        <Modal
            title=format!("User: {}", contact.display_name())
            on_close=on_close
            footer=move || view! {
                <Flex gap=FlexGap::Small>
                    {if is_active {
                        view! {
                            <Button appearance=ButtonAppearance::Secondary on_click=suspend>
                                "Suspend"
                            </Button>
                        }.into_any()
                    } else {
                        view! {
                            <Button appearance=ButtonAppearance::Primary on_click=activate>
                                "Activate"
                            </Button>
                        }.into_any()
                    }}
                </Flex>
            }
        >
            <div class="details-grid">
                <DetailRow label="Name" value=contact.name.clone() />
                <DetailRow label="Email" value=contact.email.clone() />
                <DetailRow label="Phone" value=contact.phone() />
                <DetailRow label="Join date" value=Some(date_cell(user.created_time_stamp.as_deref())) />
                <DetailRow label="Total bookings" value=count(user.total_bookings) />
                <DetailRow label="Completed bookings" value=count(user.completed_bookings) />
                <DetailRow label="Favorites" value=count(user.favorites_count) />
                <DetailRow label="Reviews" value=count(user.reviews_count) />
                <div class="detail-row">
                    <span class="detail-row__label">"Status:"</span>
                    <StatusBadge status=user.status />
                </div>
            </div>
        </Modal>
    }
}
