use leptos::*;
use leptos_router::*;

use super::{fmt_date, fmt_time};
use crate::components::*;
use crate::data;
use crate::state::use_store;
use crate::views::analytics::{alert_feed, overview_kpis};
use crate::views::scheduling::{filter_shifts, ShiftFilter};

const ALERT_FEED_LIMIT: usize = 6;

#[component]
pub fn OverviewPage() -> impl IntoView {
    let store = use_store();
    let today = data::today();

    let kpis = create_memo(move |_| store.with(|s| overview_kpis(s, today)));
    let alerts = create_memo(move |_| store.with(|s| alert_feed(s, ALERT_FEED_LIMIT)));

    let todays_shifts = move || {
        let filter = ShiftFilter {
            date: Some(today),
            ..Default::default()
        };
        store.with(|s| {
            filter_shifts(s.shifts.all(), &filter)
                .into_iter()
                .map(|shift| {
                    let route = shift
                        .route_id
                        .as_deref()
                        .map(|id| s.route_code(id))
                        .unwrap_or_else(|| "Unassigned".to_string());
                    view! {
                        <tr>
                            <td>{s.driver_name(&shift.driver_id)}</td>
                            <td>{format!("{} – {}", fmt_time(shift.start), fmt_time(shift.end))}</td>
                            <td><StatusBadge value=shift.wave /></td>
                            <td>{route}</td>
                            <td><StatusBadge value=shift.status /></td>
                        </tr>
                    }
                    .into_view()
                })
                .collect::<Vec<_>>()
        })
    };

    view! {
        <div class="page">
            <PageHeader title="Station Overview" subtitle="Today at a glance" />

            <StatGrid>
                <StatCard
                    label="Active Vehicles"
                    value=move || kpis.with(|k| format!("{} / {}", k.active_vehicles, k.total_vehicles))
                />
                <StatCard label="Active Drivers" value=move || kpis.with(|k| k.active_drivers.to_string()) />
                <StatCard label="Shifts Today" value=move || kpis.with(|k| k.shifts_today.to_string()) />
                <StatCard label="Routes In Progress" value=move || kpis.with(|k| k.routes_in_progress.to_string()) />
                <StatCard label="Open Incidents" tone="bad" value=move || kpis.with(|k| k.open_incidents.to_string()) />
                <StatCard
                    label="Urgent Alerts"
                    tone="warn"
                    value=move || kpis.with(|k| k.urgent_alerts.to_string())
                    hint="High or critical, vehicles and drivers"
                />
                <StatCard label="Pending Payroll" value=move || kpis.with(|k| k.pending_payroll.to_string()) />
                <StatCard label="RTS Today" value=move || kpis.with(|k| k.rts_today.to_string()) />
            </StatGrid>

            <div class="overview-grid">
                <section class="card">
                    <div class="card-header">
                        <h3>"Open Alerts"</h3>
                        <A href="/fleet/alerts" class="card-link">"View all"</A>
                    </div>
                    {move || {
                        let items = alerts.get();
                        if items.is_empty() {
                            view! { <EmptyState message="No open alerts" /> }.into_view()
                        } else {
                            view! {
                                <ul class="alert-feed">
                                    {items
                                        .into_iter()
                                        .map(|item| view! {
                                            <li class="alert-item">
                                                <StatusBadge value=item.severity />
                                                <div>
                                                    <strong>{item.subject}</strong>
                                                    <div class="subtitle">{item.message}</div>
                                                </div>
                                                <span class="alert-date">{fmt_date(item.date)}</span>
                                            </li>
                                        })
                                        .collect_view()}
                                </ul>
                            }
                            .into_view()
                        }
                    }}
                </section>

                <section class="card">
                    <div class="card-header">
                        <h3>"Today's Shifts"</h3>
                        <A href="/scheduling" class="card-link">"Schedule"</A>
                    </div>
                    {move || view! {
                        <DataTable headers=&["Driver", "Hours", "Wave", "Route", "Status"] rows=todays_shifts() />
                    }}
                </section>
            </div>
        </div>
    }
}
