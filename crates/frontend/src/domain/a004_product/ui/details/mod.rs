use crate::shared::components::detail_row::DetailRow;
use crate::shared::components::status::StatusBadge;
use crate::shared::date_utils::{date_cell, format_price};
use crate::shared::modal::Modal;
use contracts::domain::a004_product::Product;
use contracts::domain::common::NamedRef;
use contracts::enums::ProductStatus;
use leptos::prelude::*;
use thaw::*;

fn ref_name(value: &Option<NamedRef>) -> Option<String> {
    value.as_ref().and_then(|r| r.name.clone())
}

#[component]
pub fn ProductDetails(
    product: Product,
    on_approve: Callback<Product>,
    on_reject: Callback<Product>,
    on_close: Callback<()>,
) -> impl IntoView {
    let pending = product.product_status == ProductStatus::Pending;
    let vendor = product.vendor_contact_details.clone().unwrap_or_default();
    let action_target = StoredValue::new(product.clone());

    view! {
        <Modal
            title=product.display_title().to_string()
            on_close=on_close
            footer=move || pending.then(|| view! {
                <Flex gap=FlexGap::Small>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| on_approve.run(action_target.get_value())
                    >
                        "Approve"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| on_reject.run(action_target.get_value())
                    >
                        "Reject"
                    </Button>
                </Flex>
            })
        >
            <div class="details-grid">
                <DetailRow label="Category" value=ref_name(&product.category) />
                <DetailRow label="Subcategory" value=ref_name(&product.sub_category) />
                <DetailRow label="Location" value=ref_name(&product.location) />
                <DetailRow label="Price" value=Some(format_price(product.price)) />
                <DetailRow label="Vendor" value=vendor.name.clone() />
                <DetailRow label="Vendor email" value=vendor.email.clone() />
                <DetailRow label="Vendor phone" value=vendor.phone() />
                <DetailRow label="Upload date" value=Some(date_cell(product.created_time_stamp.as_deref())) />
                <DetailRow label="Images" value=Some(product.images.len().to_string()) />
                <DetailRow label="Rejection reason" value=product.rejection_reason.clone() />
                <div class="detail-row">
                    <span class="detail-row__label">"Status:"</span>
                    <StatusBadge status=product.product_status />
                </div>
            </div>
        </Modal>
    }
}

/// Asks for an optional reason, then hands product and reason to `on_confirm`
#[component]
pub fn RejectDialog(
    product: Product,
    on_confirm: Callback<(Product, String)>,
    on_close: Callback<()>,
) -> impl IntoView {
    let reason = RwSignal::new(String::new());
    let target = StoredValue::new(product.clone());

    view! {
        <Modal
            title=format!("Reject \"{}\"", product.display_title())
            on_close=on_close
            footer=move || view! {
                <Flex gap=FlexGap::Small>
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>
                        "Cancel"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| on_confirm.run((target.get_value(), reason.get_untracked()))
                    >
                        "Reject"
                    </Button>
                </Flex>
            }
        >
            <Flex vertical=true gap=FlexGap::Small>
                <Label>"Reason for rejection (sent to the vendor):"</Label>
                <Textarea value=reason placeholder="Optional" />
            </Flex>
        </Modal>
    }
}
