use crate::shared::icons::icon;
use crate::shared::number_format::format_currency;
use leptos::prelude::*;

/// Dashboard figure card. `value` is `None` until its fetch resolves (or
/// after it fails), which renders as a dash rather than a misleading zero.
#[component]
pub fn StatCard(
    /// Label above the value
    label: String,
    /// Icon name for the icon() helper
    icon_name: String,
    /// Accent color for the icon block
    accent: &'static str,
    /// Amount to display
    #[prop(into)]
    value: Signal<Option<f64>>,
    /// ISO currency code ("" = MYR)
    #[prop(optional, into)]
    currency: Signal<String>,
) -> impl IntoView {
    let formatted = move || match value.get() {
        Some(v) => format_currency(v, &currency.get()),
        None => "—".to_string(),
    };

    view! {
        <div style="background: #fff; border: 1px solid #e9ecef; border-radius: 8px; padding: 14px 16px; display: flex; align-items: center; gap: 12px; min-width: 200px; box-shadow: 0 1px 3px rgba(0,0,0,0.06);">
            <div style=format!("width: 40px; height: 40px; border-radius: 8px; display: flex; align-items: center; justify-content: center; color: #fff; background: {};", accent)>
                {icon(&icon_name)}
            </div>
            <div>
                <div style="font-size: 0.75rem; color: #6c757d; text-transform: uppercase; letter-spacing: 0.4px;">
                    {label}
                </div>
                <div style="font-size: 1.15rem; font-weight: 600; color: #212529;">
                    {formatted}
                </div>
            </div>
        </div>
    }
}
