use leptos::*;

use crate::models::Labeled;

/// Page title row with optional actions on the right
#[component]
pub fn PageHeader(
    title: &'static str,
    #[prop(optional)] subtitle: Option<&'static str>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class="page-header">
            <div>
                <h2>{title}</h2>
                {subtitle.map(|s| view! { <p class="subtitle">{s}</p> })}
            </div>
            <div class="page-actions">{children.map(|c| c())}</div>
        </div>
    }
}

#[component]
pub fn StatGrid(children: Children) -> impl IntoView {
    view! { <div class="stat-grid">{children()}</div> }
}

/// One headline number
#[component]
pub fn StatCard(
    label: &'static str,
    #[prop(into)] value: TextProp,
    #[prop(optional, into)] hint: Option<TextProp>,
    /// Extra class for colouring: "good", "warn" or "bad"
    #[prop(optional)]
    tone: &'static str,
) -> impl IntoView {
    view! {
        <div class=format!("card stat-card {}", tone)>
            <h3>{label}</h3>
            <div class="stat-value">{move || value.get().to_string()}</div>
            {hint.map(|hint| view! { <div class="subtitle">{move || hint.get().to_string()}</div> })}
        </div>
    }
}

/// Coloured pill for any status enum
#[component]
pub fn StatusBadge<T: Labeled>(value: T) -> impl IntoView {
    view! {
        <span class=format!("badge badge-{}", value.key())>{value.label()}</span>
    }
}

#[component]
pub fn EmptyState(#[prop(default = "No records found")] message: &'static str) -> impl IntoView {
    view! { <div class="no-data">{message}</div> }
}

/// Table with a fixed header; falls back to [`EmptyState`] when there are no rows
#[component]
pub fn DataTable(headers: &'static [&'static str], rows: Vec<View>) -> impl IntoView {
    if rows.is_empty() {
        return view! { <EmptyState /> }.into_view();
    }

    view! {
        <div class="table-wrap">
            <table class="data-table">
                <thead>
                    <tr>{headers.iter().map(|h| view! { <th>{*h}</th> }).collect_view()}</tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
        </div>
    }
    .into_view()
}

/// Stand-in for a feature that needs a service the dashboard does not have
#[component]
pub fn PlaceholderCard(title: &'static str, message: &'static str) -> impl IntoView {
    view! {
        <div class="card placeholder-card">
            <h3>{title}</h3>
            <div class="info-box">{message}</div>
        </div>
    }
}

/// Export actions are shown but disabled
#[component]
pub fn ExportButton(label: &'static str) -> impl IntoView {
    view! {
        <button class="button secondary" disabled=true title="Export is not available in the demo">
            {label}
        </button>
    }
}
