use crate::shared::components::detail_row::DetailRow;
use crate::shared::components::status::StatusBadge;
use crate::shared::date_utils::date_cell;
use crate::shared::modal::Modal;
use contracts::domain::a005_booking::Booking;
use contracts::domain::common::ContactDetails;
use leptos::prelude::*;

#[component]
fn ContactBlock(title: &'static str, contact: Option<ContactDetails>) -> impl IntoView {
    let contact = contact.unwrap_or_default();
    view! {
        <div class="details-section">
            <h3 class="details-section__title">{title}</h3>
            <DetailRow label="Name" value=contact.name.clone() />
            <DetailRow label="Email" value=contact.email.clone() />
            <DetailRow label="Phone" value=contact.phone() />
        </div>
    }
}

#[component]
pub fn BookingDetails(booking: Booking, on_close: Callback<()>) -> impl IntoView {
    view! {
        <Modal title=format!("Booking #{}", booking.id) on_close=on_close>
            <div class="details-grid">
                <div class="detail-row">
                    <span class="detail-row__label">"Status:"</span>
                    <StatusBadge status=booking.status />
                </div>
                <DetailRow label="Product" value=Some(booking.product_name().to_string()) />
                <DetailRow label="Location" value=Some(booking.location_name().to_string()) />
                <DetailRow label="Date" value=Some(booking.date_caption()) />
                <DetailRow label="Time" value=Some(booking.time_caption()) />
                <DetailRow label="Booking day" value=booking.booking_day.clone() />
                <DetailRow label="Rescheduled to" value=booking.reschedule_time.clone() />
                <DetailRow label="Created" value=Some(date_cell(booking.created_time_stamp.as_deref())) />
            </div>

            <ContactBlock title="User" contact=booking.user_contact_details.clone() />
            <ContactBlock title="Vendor" contact=booking.vendor_contact_details.clone() />

            <div class="details-section">
                <h3 class="details-section__title">"Comments"</h3>
                <DetailRow label="User" value=booking.user_comment.clone() />
                <DetailRow label="Vendor" value=booking.vendor_comment.clone() />
                <DetailRow label="Admin" value=booking.admin_comment.clone() />
            </div>
        </Modal>
    }
}
