use leptos::prelude::*;

/// "Label: value" line of a details dialog; empty values show "N/A"
#[component]
pub fn DetailRow(label: &'static str, #[prop(into)] value: Option<String>) -> impl IntoView {
    let value = value
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| "N/A".to_string());
    view! {
        <div class="detail-row">
            <span class="detail-row__label">{label}":"</span>
            <span class="detail-row__value">{value}</span>
        </div>
    }
}
