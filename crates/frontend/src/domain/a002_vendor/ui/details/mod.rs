use crate::shared::components::detail_row::DetailRow;
use crate::shared::components::status::StatusBadge;
use crate::shared::date_utils::date_cell;
use crate::shared::modal::Modal;
use contracts::domain::a002_vendor::Vendor;
use leptos::prelude::*;

#[component]
pub fn VendorDetails(vendor: Vendor, on_close: Callback<()>) -> impl IntoView {
    let contact = vendor.contact_details.clone();

    view! {
        <Modal title=format!("Vendor: {}", vendor.display_name()) on_close=on_close>
            <div class="details-grid">
                <DetailRow label="Business name" value=vendor.business_name.clone() />
                <DetailRow label="Contact person" value=contact.name.clone() />
                <DetailRow label="Email" value=contact.email.clone() />
                <DetailRow label="Phone" value=contact.phone() />
                <DetailRow label="Total products" value=vendor.total_products.map(|n| n.to_string()) />
                <DetailRow label="Joined" value=Some(date_cell(vendor.created_time_stamp.as_deref())) />
                <div class="detail-row">
                    <span class="detail-row__label">"Status:"</span>
                    <StatusBadge status=vendor.status />
                </div>
            </div>
        </Modal>
    }
}
