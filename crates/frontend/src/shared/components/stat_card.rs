use crate::shared::icons::icon;
use leptos::prelude::*;

/// Thousands separated with a non-breaking space: 12345 -> "12 345"
fn format_count(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push('\u{00a0}');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

#[component]
pub fn StatCard(
    /// Label displayed under the value
    label: &'static str,
    /// Icon name from the icon() helper
    icon_name: &'static str,
    /// Accent modifier: blue, green, orange, purple
    accent: &'static str,
    /// Value (None = loading/error)
    #[prop(into)]
    value: Signal<Option<u64>>,
) -> impl IntoView {
    let formatted = move || match value.get() {
        Some(v) => format_count(v),
        None => "—".to_string(),
    };

    view! {
        <div class=format!("stat-card stat-card--{}", accent)>
            <div class="stat-card__icon">
                {icon(icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__value">{formatted}</div>
                <div class="stat-card__label">{label}</div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(12345), "12\u{00a0}345");
        assert_eq!(format_count(1_000_000), "1\u{00a0}000\u{00a0}000");
    }
}
