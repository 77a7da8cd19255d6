use leptos::*;

use super::fmt_date;
use crate::components::*;
use crate::models::*;
use crate::state::use_store;
use crate::views::format_currency;
use crate::views::packages::*;

#[component]
pub fn ReturnToStationPage() -> impl IntoView {
    let store = use_store();
    let search = create_rw_signal(String::new());
    let reason = create_rw_signal(None::<RtsReason>);
    let status = create_rw_signal(None::<RtsStatus>);

    let stats = create_memo(move |_| store.with(|s| rts_stats(s.rts.all())));
    let by_reason = create_memo(move |_| store.with(|s| rts_by_reason(s.rts.all())));

    let rows = move || {
        let filter = RtsFilter {
            search: search.get(),
            reason: reason.get(),
            status: status.get(),
        };
        store.with(|s| {
            filter_rts(s.rts.all(), &filter)
                .into_iter()
                .map(|package| {
                    view! {
                        <tr>
                            <td class="mono">{package.tracking_id.clone()}</td>
                            <td>{fmt_date(package.date)}</td>
                            <td>{s.driver_name(&package.driver_id)}</td>
                            <td>{s.route_code(&package.route_id)}</td>
                            <td>{package.reason.label()}</td>
                            <td><StatusBadge value=package.status /></td>
                        </tr>
                    }
                    .into_view()
                })
                .collect::<Vec<_>>()
        })
    };

    view! {
        <div class="page">
            <PageHeader title="Return to Station" subtitle="Undelivered packages brought back by drivers" />

            <StatGrid>
                <StatCard label="Total RTS" value=move || stats.with(|s| s.total.to_string()) />
                <StatCard label="Pending" tone="warn" value=move || stats.with(|s| s.pending.to_string()) />
                <StatCard label="Reattempts" value=move || stats.with(|s| s.reattempts.to_string()) />
                <StatCard label="Resolved" tone="good" value=move || stats.with(|s| s.resolved.to_string()) />
            </StatGrid>

            <div class="card">
                <h3>"By Reason"</h3>
                <ul class="breakdown">
                    {move || {
                        by_reason
                            .get()
                            .into_iter()
                            .map(|(reason, count)| view! {
                                <li>
                                    <span>{reason.label()}</span>
                                    <strong>{count}</strong>
                                </li>
                            })
                            .collect_view()
                    }}
                </ul>
            </div>

            <FilterBar>
                <SearchInput value=search placeholder="Search tracking ID or driver" />
                <FilterSelect label="Reason" selected=reason />
                <FilterSelect label="Status" selected=status />
            </FilterBar>

            {move || view! {
                <DataTable headers=&["Tracking ID", "Date", "Driver", "Route", "Reason", "Status"] rows=rows() />
            }}
        </div>
    }
}

#[component]
pub fn LostPackagesPage() -> impl IntoView {
    let store = use_store();
    let status = create_rw_signal(None::<LostStatus>);

    let stats = create_memo(move |_| store.with(|s| lost_stats(s.lost.all())));

    let rows = move || {
        let status = status.get();
        store.with(|s| {
            filter_lost(s.lost.all(), status)
                .into_iter()
                .map(|package| {
                    view! {
                        <tr>
                            <td class="mono">{package.tracking_id.clone()}</td>
                            <td>{fmt_date(package.date)}</td>
                            <td>{s.driver_name(&package.driver_id)}</td>
                            <td>{s.route_code(&package.route_id)}</td>
                            <td>{format_currency(package.value)}</td>
                            <td><StatusBadge value=package.status /></td>
                        </tr>
                    }
                    .into_view()
                })
                .collect::<Vec<_>>()
        })
    };

    view! {
        <div class="page">
            <PageHeader title="Lost Packages" subtitle="Investigations and claims" />

            <StatGrid>
                <StatCard label="Open Investigations" tone="warn" value=move || stats.with(|s| s.open_cases.to_string()) />
                <StatCard
                    label="Value at Risk"
                    tone="bad"
                    value=move || stats.with(|s| format_currency(s.value_at_risk))
                    hint="Packages not yet found"
                />
                <StatCard label="Recovered" tone="good" value=move || stats.with(|s| s.recovered.to_string()) />
            </StatGrid>

            <FilterBar>
                <FilterSelect label="Status" selected=status />
            </FilterBar>

            {move || view! {
                <DataTable headers=&["Tracking ID", "Date", "Driver", "Route", "Value", "Status"] rows=rows() />
            }}
        </div>
    }
}
