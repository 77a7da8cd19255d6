use leptos::*;

use super::fmt_date;
use crate::components::modals::ReportIncidentModal;
use crate::components::*;
use crate::data;
use crate::models::*;
use crate::state::{use_store, Command};
use crate::views::format_percent;
use crate::views::safety::*;

#[component]
pub fn IncidentsPage() -> impl IntoView {
    let store = use_store();
    let search = create_rw_signal(String::new());
    let kind = create_rw_signal(None::<IncidentKind>);
    let status = create_rw_signal(None::<IncidentStatus>);
    let show_report = create_rw_signal(false);

    let stats = create_memo(move |_| store.with(|s| incident_stats(s.incidents.all())));
    let drivers = Signal::derive(move || store.with(|s| s.driver_choices()));
    let vehicles = Signal::derive(move || store.with(|s| s.vehicle_choices()));

    let rows = move || {
        let filter = IncidentFilter {
            search: search.get(),
            kind: kind.get(),
            status: status.get(),
        };
        store.with(|s| {
            filter_incidents(s.incidents.all(), &filter)
                .into_iter()
                .map(|incident| {
                    let vehicle = incident
                        .vehicle_id
                        .as_deref()
                        .map(|id| s.vehicle_label(id))
                        .unwrap_or_else(|| "—".to_string());
                    view! {
                        <tr>
                            <td>{fmt_date(incident.date)}</td>
                            <td>{s.driver_name(&incident.driver_id)}</td>
                            <td>{vehicle}</td>
                            <td><StatusBadge value=incident.kind /></td>
                            <td><StatusBadge value=incident.severity /></td>
                            <td>
                                <strong>{incident.location.clone()}</strong>
                                <div class="subtitle">{incident.description.clone()}</div>
                            </td>
                            <td><StatusBadge value=incident.status /></td>
                        </tr>
                    }
                    .into_view()
                })
                .collect::<Vec<_>>()
        })
    };

    view! {
        <div class="page">
            <PageHeader title="Safety Incidents" subtitle="Accidents, near misses and violations">
                <button class="button primary" on:click=move |_| show_report.set(true)>"Report Incident"</button>
            </PageHeader>

            <StatGrid>
                <StatCard label="Total Incidents" value=move || stats.with(|s| s.total.to_string()) />
                <StatCard label="Open" tone="bad" value=move || stats.with(|s| s.open.to_string()) />
                <StatCard label="Under Review" tone="warn" value=move || stats.with(|s| s.under_review.to_string()) />
                <StatCard label="Resolved" tone="good" value=move || stats.with(|s| s.resolved.to_string()) />
                <StatCard label="High Severity" value=move || stats.with(|s| s.serious.to_string()) hint="High or critical" />
            </StatGrid>

            <FilterBar>
                <SearchInput value=search placeholder="Search location or description" />
                <FilterSelect label="Type" selected=kind />
                <FilterSelect label="Status" selected=status />
            </FilterBar>

            {move || view! {
                <DataTable
                    headers=&["Date", "Driver", "Vehicle", "Type", "Severity", "Details", "Status"]
                    rows=rows()
                />
            }}

            <ReportIncidentModal
                open=show_report
                drivers=drivers
                vehicles=vehicles
                on_create=move |new| store.dispatch(Command::ReportIncident(new))
            />
        </div>
    }
}

#[component]
pub fn CoachingPage() -> impl IntoView {
    let store = use_store();
    let status = create_rw_signal(None::<CoachingStatus>);

    let stats = create_memo(move |_| store.with(|s| coaching_stats(s.coaching.all())));

    let rows = move || {
        let status = status.get();
        store.with(|s| {
            filter_coaching(s.coaching.all(), status)
                .into_iter()
                .map(|session| {
                    view! {
                        <tr>
                            <td>{fmt_date(session.date)}</td>
                            <td>{s.driver_name(&session.driver_id)}</td>
                            <td>{session.topic.clone()}</td>
                            <td>{session.coach.clone()}</td>
                            <td class="notes">{session.notes.clone()}</td>
                            <td><StatusBadge value=session.status /></td>
                        </tr>
                    }
                    .into_view()
                })
                .collect::<Vec<_>>()
        })
    };

    view! {
        <div class="page">
            <PageHeader title="Safety Coaching" subtitle="One-on-one sessions with drivers" />

            <StatGrid>
                <StatCard label="Scheduled" value=move || stats.with(|s| s.scheduled.to_string()) />
                <StatCard label="Completed" tone="good" value=move || stats.with(|s| s.completed.to_string()) />
                <StatCard label="Follow-Up Required" tone="warn" value=move || stats.with(|s| s.follow_up.to_string()) />
            </StatGrid>

            <FilterBar>
                <FilterSelect label="Status" selected=status />
            </FilterBar>

            {move || view! {
                <DataTable headers=&["Date", "Driver", "Topic", "Coach", "Notes", "Status"] rows=rows() />
            }}
        </div>
    }
}

#[component]
pub fn CompliancePage() -> impl IntoView {
    let store = use_store();
    let status = create_rw_signal(None::<ComplianceStatus>);

    let stats = create_memo(move |_| store.with(|s| compliance_stats(s.compliance.all())));

    let rows = move || {
        let status = status.get();
        let today = data::today();
        store.with(|s| {
            filter_compliance(s.compliance.all(), status)
                .into_iter()
                .map(|item| {
                    let overdue = item.due < today && item.status != ComplianceStatus::Compliant;
                    view! {
                        <tr class:overdue=overdue>
                            <td>{item.category.clone()}</td>
                            <td>{item.requirement.clone()}</td>
                            <td>{fmt_date(item.due)}</td>
                            <td><StatusBadge value=item.status /></td>
                        </tr>
                    }
                    .into_view()
                })
                .collect::<Vec<_>>()
        })
    };

    view! {
        <div class="page">
            <PageHeader title="Compliance" subtitle="DOT and program requirements" />

            <StatGrid>
                <StatCard label="Compliance Rate" value=move || stats.with(|s| format_percent(s.compliance_rate)) />
                <StatCard label="Compliant" tone="good" value=move || stats.with(|s| s.compliant.to_string()) />
                <StatCard label="At Risk" tone="warn" value=move || stats.with(|s| s.at_risk.to_string()) />
                <StatCard label="Non-Compliant" tone="bad" value=move || stats.with(|s| s.non_compliant.to_string()) />
            </StatGrid>

            <FilterBar>
                <FilterSelect label="Status" selected=status />
            </FilterBar>

            {move || view! {
                <DataTable headers=&["Category", "Requirement", "Due", "Status"] rows=rows() />
            }}
        </div>
    }
}
