use leptos::*;

use super::fmt_date;
use crate::components::modals::{AddVehicleModal, ScheduleMaintenanceModal};
use crate::components::*;
use crate::data;
use crate::models::*;
use crate::state::{use_store, Command};
use crate::views::fleet::*;
use crate::views::{format_count, format_currency, format_percent};

#[component]
pub fn VehiclesPage() -> impl IntoView {
    let store = use_store();
    let search = create_rw_signal(String::new());
    let status = create_rw_signal(None::<VehicleStatus>);
    let show_add = create_rw_signal(false);

    let stats = create_memo(move |_| store.with(|s| fleet_stats(s.vehicles.all(), data::today())));

    let rows = move || {
        let filter = VehicleFilter {
            search: search.get(),
            status: status.get(),
        };
        store.with(|s| {
            filter_vehicles(s.vehicles.all(), &filter)
                .into_iter()
                .map(vehicle_row)
                .collect::<Vec<_>>()
        })
    };

    view! {
        <div class="page">
            <PageHeader title="Fleet Vehicles" subtitle="Vans assigned to the station">
                <ExportButton label="Export to Excel" />
                <button class="button primary" on:click=move |_| show_add.set(true)>"Add Vehicle"</button>
            </PageHeader>

            <StatGrid>
                <StatCard label="Total Vehicles" value=move || stats.with(|s| s.total.to_string()) />
                <StatCard label="Active" tone="good" value=move || stats.with(|s| s.active.to_string()) />
                <StatCard label="In Maintenance" tone="warn" value=move || stats.with(|s| s.in_maintenance.to_string()) />
                <StatCard label="Grounded" tone="bad" value=move || stats.with(|s| s.grounded.to_string()) />
                <StatCard
                    label="Renewals Due"
                    value=move || stats.with(|s| s.renewals_due.to_string())
                    hint=format!("Registration or insurance within {} days", RENEWAL_WINDOW_DAYS)
                />
                <StatCard
                    label="Average Mileage"
                    value=move || stats.with(|s| format_count(s.average_mileage.round() as u64))
                />
            </StatGrid>

            <FilterBar>
                <SearchInput value=search placeholder="Search VIN, plate or model" />
                <FilterSelect label="Status" selected=status />
            </FilterBar>

            {move || view! {
                <DataTable
                    headers=&["Vehicle", "VIN", "Plate", "Mileage", "Branding", "Registration", "Insurance", "Status"]
                    rows=rows()
                />
            }}

            <AddVehicleModal
                open=show_add
                on_create=move |new| store.dispatch(Command::AddVehicle(new))
            />
        </div>
    }
}

fn vehicle_row(vehicle: &Vehicle) -> View {
    view! {
        <tr>
            <td>
                <strong>{vehicle.id.clone()}</strong>
                <div class="subtitle">{vehicle.model.clone()}</div>
            </td>
            <td class="mono">{vehicle.vin.clone()}</td>
            <td>{vehicle.plate.clone()}</td>
            <td>{format_count(vehicle.mileage as u64)}</td>
            <td><StatusBadge value=vehicle.branding /></td>
            <td>{fmt_date(vehicle.registration_expiry)}</td>
            <td>{fmt_date(vehicle.insurance_expiry)}</td>
            <td><StatusBadge value=vehicle.status /></td>
        </tr>
    }
    .into_view()
}

#[component]
pub fn MaintenancePage() -> impl IntoView {
    let store = use_store();
    let search = create_rw_signal(String::new());
    let status = create_rw_signal(None::<MaintenanceStatus>);
    let show_schedule = create_rw_signal(false);

    let stats = create_memo(move |_| store.with(|s| maintenance_stats(s.maintenance.all())));
    let vehicles = Signal::derive(move || store.with(|s| s.vehicle_choices()));

    let rows = move || {
        let filter = MaintenanceFilter {
            search: search.get(),
            status: status.get(),
        };
        store.with(|s| {
            filter_maintenance(s.maintenance.all(), &filter)
                .into_iter()
                .map(|record| {
                    view! {
                        <tr>
                            <td>{s.vehicle_label(&record.vehicle_id)}</td>
                            <td>
                                <strong>{record.service_type.clone()}</strong>
                                <div class="subtitle">{record.description.clone()}</div>
                            </td>
                            <td>{fmt_date(record.scheduled_date)}</td>
                            <td>{record.completed_date.map(fmt_date).unwrap_or_else(|| "—".to_string())}</td>
                            <td>{record.vendor.clone()}</td>
                            <td>{record.cost.map(format_currency).unwrap_or_else(|| "—".to_string())}</td>
                            <td><StatusBadge value=record.status /></td>
                        </tr>
                    }
                    .into_view()
                })
                .collect::<Vec<_>>()
        })
    };

    view! {
        <div class="page">
            <PageHeader title="Maintenance" subtitle="Service history and upcoming work">
                <button class="button primary" on:click=move |_| show_schedule.set(true)>"Schedule Service"</button>
            </PageHeader>

            <StatGrid>
                <StatCard label="Total Cost" value=move || stats.with(|s| format_currency(s.total_cost)) hint="Completed services" />
                <StatCard label="Scheduled" value=move || stats.with(|s| s.scheduled.to_string()) />
                <StatCard label="In Progress" tone="warn" value=move || stats.with(|s| s.in_progress.to_string()) />
                <StatCard label="Completed" tone="good" value=move || stats.with(|s| s.completed.to_string()) />
                <StatCard label="Overdue" tone="bad" value=move || stats.with(|s| s.overdue.to_string()) />
            </StatGrid>

            <FilterBar>
                <SearchInput value=search placeholder="Search service, vendor or vehicle" />
                <FilterSelect label="Status" selected=status />
            </FilterBar>

            {move || view! {
                <DataTable
                    headers=&["Vehicle", "Service", "Scheduled", "Completed", "Vendor", "Cost", "Status"]
                    rows=rows()
                />
            }}

            <ScheduleMaintenanceModal
                open=show_schedule
                vehicles=vehicles
                on_create=move |new| store.dispatch(Command::ScheduleMaintenance(new))
            />
        </div>
    }
}

#[component]
pub fn InspectionsPage() -> impl IntoView {
    let store = use_store();
    let result = create_rw_signal(None::<InspectionResult>);

    let stats = create_memo(move |_| store.with(|s| inspection_stats(s.inspections.all())));

    let rows = move || {
        let result = result.get();
        store.with(|s| {
            filter_inspections(s.inspections.all(), result)
                .into_iter()
                .map(|inspection| {
                    let defects = if inspection.defects.is_empty() {
                        "None".to_string()
                    } else {
                        inspection.defects.join(", ")
                    };
                    view! {
                        <tr>
                            <td>{fmt_date(inspection.date)}</td>
                            <td>{s.vehicle_label(&inspection.vehicle_id)}</td>
                            <td>{s.driver_name(&inspection.driver_id)}</td>
                            <td><StatusBadge value=inspection.kind /></td>
                            <td>{defects}</td>
                            <td><StatusBadge value=inspection.result /></td>
                        </tr>
                    }
                    .into_view()
                })
                .collect::<Vec<_>>()
        })
    };

    view! {
        <div class="page">
            <PageHeader title="Inspections" subtitle="DVIR pre-trip, post-trip and DOT inspections">
                <ExportButton label="Download PDF" />
            </PageHeader>

            <StatGrid>
                <StatCard label="Inspections" value=move || stats.with(|s| s.total.to_string()) />
                <StatCard label="Pass Rate" tone="good" value=move || stats.with(|s| format_percent(s.pass_rate)) />
                <StatCard label="Needs Attention" tone="warn" value=move || stats.with(|s| s.needs_attention.to_string()) />
                <StatCard label="Failed" tone="bad" value=move || stats.with(|s| s.failed.to_string()) />
                <StatCard label="Defects Logged" value=move || stats.with(|s| s.defects.to_string()) />
            </StatGrid>

            <FilterBar>
                <FilterSelect label="Result" selected=result />
            </FilterBar>

            {move || view! {
                <DataTable headers=&["Date", "Vehicle", "Driver", "Type", "Defects", "Result"] rows=rows() />
            }}
        </div>
    }
}

#[component]
pub fn UtilizationPage() -> impl IntoView {
    let store = use_store();

    let summary = create_memo(move |_| store.with(|s| utilization_summary(s.utilization.all())));

    let rows = move || {
        store.with(|s| {
            ranked_utilization(s.utilization.all())
                .into_iter()
                .map(|entry| {
                    let rate = entry.utilization_rate();
                    view! {
                        <tr>
                            <td>{s.vehicle_label(&entry.vehicle_id)}</td>
                            <td>{format!("{} / {}", entry.days_used, entry.days_available)}</td>
                            <td>
                                <div class="progress">
                                    <div class="progress-bar" style=format!("width: {:.0}%", rate)></div>
                                </div>
                                {format_percent(rate)}
                            </td>
                            <td>{format_count(entry.miles_driven as u64)}</td>
                            <td>{entry.routes_completed}</td>
                        </tr>
                    }
                    .into_view()
                })
                .collect::<Vec<_>>()
        })
    };

    view! {
        <div class="page">
            <PageHeader title="Fleet Utilization" subtitle="Month to date" />

            <StatGrid>
                <StatCard label="Average Utilization" value=move || summary.with(|s| format_percent(s.average_rate)) />
                <StatCard label="Miles Driven" value=move || summary.with(|s| format_count(s.total_miles as u64)) />
                <StatCard label="Routes Completed" value=move || summary.with(|s| s.total_routes.to_string()) />
                <StatCard label="Idle Vehicles" tone="warn" value=move || summary.with(|s| s.idle_vehicles.to_string()) />
            </StatGrid>

            {move || view! {
                <DataTable headers=&["Vehicle", "Days Used", "Utilization", "Miles", "Routes"] rows=rows() />
            }}
        </div>
    }
}

#[component]
pub fn VehicleAlertsPage() -> impl IntoView {
    let store = use_store();
    let severity = create_rw_signal(None::<Severity>);

    let counts = create_memo(move |_| {
        store.with(|s| {
            Severity::all()
                .iter()
                .map(|level| {
                    let count = s.vehicle_alerts.all().iter().filter(|a| a.severity == *level).count();
                    (*level, count)
                })
                .collect::<Vec<_>>()
        })
    });

    let rows = move || {
        let severity = severity.get();
        store.with(|s| {
            filter_vehicle_alerts(s.vehicle_alerts.all(), severity)
                .into_iter()
                .map(|alert| {
                    view! {
                        <tr>
                            <td><StatusBadge value=alert.severity /></td>
                            <td>{s.vehicle_label(&alert.vehicle_id)}</td>
                            <td>{alert.kind.label()}</td>
                            <td>{alert.message.clone()}</td>
                            <td>{fmt_date(alert.date)}</td>
                        </tr>
                    }
                    .into_view()
                })
                .collect::<Vec<_>>()
        })
    };

    view! {
        <div class="page">
            <PageHeader title="Vehicle Alerts" subtitle="Expiring paperwork, recalls and failed inspections" />

            <StatGrid>
                {move || {
                    counts
                        .get()
                        .into_iter()
                        .map(|(level, count)| view! { <StatCard label=level.label() value=count.to_string() /> })
                        .collect_view()
                }}
            </StatGrid>

            <FilterBar>
                <FilterSelect label="Severity" selected=severity />
            </FilterBar>

            {move || view! {
                <DataTable headers=&["Severity", "Vehicle", "Type", "Message", "Date"] rows=rows() />
            }}
        </div>
    }
}
