use chrono::{NaiveDate, Weekday};
use leptos::*;

use super::{fmt_date, fmt_time};
use crate::components::modals::ScheduleShiftModal;
use crate::components::*;
use crate::data;
use crate::models::*;
use crate::state::{use_store, Command};
use crate::views::format_count;
use crate::views::scheduling::*;

#[component]
pub fn ShiftsPage() -> impl IntoView {
    let store = use_store();
    let day = create_rw_signal(Some(data::today()));
    let wave = create_rw_signal(None::<Wave>);
    let status = create_rw_signal(None::<ShiftStatus>);
    let show_schedule = create_rw_signal(false);

    let dates = create_memo(move |_| store.with(|s| shift_dates(s.shifts.all())));
    let stats = create_memo(move |_| {
        let day = day.get().unwrap_or_else(data::today);
        store.with(|s| shift_stats(s.shifts.all(), day))
    });
    let drivers = Signal::derive(move || store.with(|s| s.driver_choices()));
    let routes = Signal::derive(move || store.with(|s| s.route_choices()));

    let rows = move || {
        let filter = ShiftFilter {
            date: day.get(),
            wave: wave.get(),
            status: status.get(),
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
                    let backup = shift
                        .backup_driver_id
                        .as_deref()
                        .map(|id| s.driver_name(id))
                        .unwrap_or_else(|| "—".to_string());
                    view! {
                        <tr>
                            <td>{fmt_date(shift.date)}</td>
                            <td>{s.driver_name(&shift.driver_id)}</td>
                            <td>{shift.wave.label()}</td>
                            <td>{format!("{} – {}", fmt_time(shift.start), fmt_time(shift.end))}</td>
                            <td>{route}</td>
                            <td>{backup}</td>
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
            <PageHeader title="Shift Schedule" subtitle="Waves, routes and backup coverage">
                <button class="button primary" on:click=move |_| show_schedule.set(true)>"Schedule Shift"</button>
            </PageHeader>

            <StatGrid>
                <StatCard label="Shifts" value=move || stats.with(|s| s.shifts.to_string()) />
                <StatCard label="Scheduled Hours" value=move || stats.with(|s| format!("{:.1}", s.scheduled_hours)) />
                <StatCard label="With Backup" tone="good" value=move || stats.with(|s| s.with_backup.to_string()) />
                <StatCard label="No-Shows" tone="bad" value=move || stats.with(|s| s.no_shows.to_string()) />
                <StatCard label="Cancelled" value=move || stats.with(|s| s.cancelled.to_string()) />
            </StatGrid>

            <FilterBar>
                <label class="filter-select">
                    <span>"Date"</span>
                    <select
                        prop:value=move || day.get().map(|d| d.to_string()).unwrap_or_default()
                        on:change=move |ev| day.set(event_target_value(&ev).parse::<NaiveDate>().ok())
                    >
                        <option value="">"All dates"</option>
                        {move || {
                            dates
                                .get()
                                .into_iter()
                                .map(|d| view! { <option value=d.to_string()>{fmt_date(d)}</option> })
                                .collect_view()
                        }}
                    </select>
                </label>
                <FilterSelect label="Wave" selected=wave />
                <FilterSelect label="Status" selected=status />
            </FilterBar>

            {move || view! {
                <DataTable
                    headers=&["Date", "Driver", "Wave", "Hours", "Route", "Backup", "Status"]
                    rows=rows()
                />
            }}

            <ScheduleShiftModal
                open=show_schedule
                drivers=drivers
                routes=routes
                on_create=move |new| store.dispatch(Command::ScheduleShift(new))
            />
        </div>
    }
}

#[component]
pub fn RoutesPage() -> impl IntoView {
    let store = use_store();
    let status = create_rw_signal(None::<RouteStatus>);

    let stats = create_memo(move |_| store.with(|s| route_stats(s.routes.all())));

    let rows = move || {
        let status = status.get();
        store.with(|s| {
            filter_routes(s.routes.all(), status)
                .into_iter()
                .map(|route| {
                    view! {
                        <tr>
                            <td><strong>{route.code.clone()}</strong></td>
                            <td>{route.zone.clone()}</td>
                            <td>{route.stops}</td>
                            <td>{route.packages}</td>
                            <td>{format!("{:.1} h", route.estimated_hours)}</td>
                            <td><StatusBadge value=route.status /></td>
                        </tr>
                    }
                    .into_view()
                })
                .collect::<Vec<_>>()
        })
    };

    view! {
        <div class="page">
            <PageHeader title="Routes" subtitle="Today's delivery routes">
                <ExportButton label="Export to Excel" />
            </PageHeader>

            <StatGrid>
                <StatCard label="Routes" value=move || stats.with(|s| s.routes.to_string()) />
                <StatCard label="Total Stops" value=move || stats.with(|s| format_count(s.total_stops as u64)) />
                <StatCard label="Total Packages" value=move || stats.with(|s| format_count(s.total_packages as u64)) />
                <StatCard label="Packages per Stop" value=move || stats.with(|s| format!("{:.2}", s.packages_per_stop)) />
                <StatCard label="Unassigned" tone="warn" value=move || stats.with(|s| s.unassigned.to_string()) />
            </StatGrid>

            <FilterBar>
                <FilterSelect label="Status" selected=status />
            </FilterBar>

            {move || view! {
                <DataTable headers=&["Route", "Zone", "Stops", "Packages", "Est. Time", "Status"] rows=rows() />
            }}

            <PlaceholderCard
                title="Route Optimization"
                message="Sequencing comes from the delivery network's routing system and is not computed here."
            />
        </div>
    }
}

fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

#[component]
pub fn AvailabilityPage() -> impl IntoView {
    let store = use_store();

    let per_day = create_memo(move |_| store.with(|s| availability_by_weekday(s.availability.all())));

    let rows = move || {
        store.with(|s| {
            s.availability
                .all()
                .iter()
                .map(|entry| {
                    let cells = WEEK
                        .iter()
                        .map(|day| {
                            let available = entry.days.contains(day);
                            view! {
                                <td class=if available { "available" } else { "unavailable" }>
                                    {if available { "✓" } else { "" }}
                                </td>
                            }
                        })
                        .collect_view();
                    view! {
                        <tr>
                            <td>{s.driver_name(&entry.driver_id)}</td>
                            {cells}
                            <td>{entry.preferred_wave.label()}</td>
                        </tr>
                    }
                    .into_view()
                })
                .collect::<Vec<_>>()
        })
    };

    view! {
        <div class="page">
            <PageHeader title="Availability" subtitle="Which drivers can work each day" />

            <StatGrid>
                {move || {
                    per_day
                        .get()
                        .into_iter()
                        .map(|(day, count)| {
                            view! { <StatCard label=weekday_name(day) value=count.to_string() hint="drivers available" /> }
                        })
                        .collect_view()
                }}
            </StatGrid>

            {move || view! {
                <DataTable
                    headers=&["Driver", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun", "Preferred Wave"]
                    rows=rows()
                />
            }}
        </div>
    }
}
