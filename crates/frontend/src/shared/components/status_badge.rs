use contracts::domain::document::DocStatus;
use leptos::prelude::*;

/// Colored status chip. The label comes from `DocStatus::label`, the one
/// place where status wording is defined.
#[component]
pub fn StatusBadge(status: DocStatus) -> impl IntoView {
    let colors = match status {
        DocStatus::Open => "background: #fff3e0; color: #e65100;",
        DocStatus::InTransit => "background: #e3f2fd; color: #1565c0;",
        DocStatus::Closed => "background: #e8f5e9; color: #2e7d32;",
        DocStatus::Other(_) => "background: #f5f5f5; color: #666;",
    };
    let label = status.label().to_string();

    view! {
        <span style=format!(
            "padding: 3px 10px; border-radius: 4px; font-size: 0.85em; font-weight: 500; white-space: nowrap; {}",
            colors
        )>
            {label}
        </span>
    }
}
