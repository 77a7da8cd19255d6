use leptos::*;

use super::fmt_timestamp;
use crate::components::modals::RequestRescueModal;
use crate::components::*;
use crate::models::*;
use crate::state::{use_store, Command};
use crate::views::dispatch::*;
use crate::views::format_percent;

#[component]
pub fn DispatchPage() -> impl IntoView {
    let store = use_store();
    let activity = create_rw_signal(None::<DriverActivity>);

    let summary = create_memo(move |_| store.with(|s| dispatch_summary(s.locations.all())));

    let rows = move || {
        let activity = activity.get();
        store.with(|s| {
            filter_locations(s.locations.all(), activity)
                .into_iter()
                .map(|location| {
                    let progress = location.progress();
                    let row_class = if is_behind_pace(location) { "behind-pace" } else { "" };
                    view! {
                        <tr class=row_class>
                            <td>{s.driver_name(&location.driver_id)}</td>
                            <td>{s.route_code(&location.route_id)}</td>
                            <td><StatusBadge value=location.activity /></td>
                            <td>
                                <div class="progress">
                                    <div class="progress-bar" style=format!("width: {:.0}%", progress)></div>
                                </div>
                                {format!(
                                    "{}/{} stops ({})",
                                    location.stops_completed,
                                    location.stops_total,
                                    format_percent(progress),
                                )}
                            </td>
                            <td class="mono">{format!("{:.4}, {:.4}", location.lat, location.lng)}</td>
                            <td>{location.last_update.format("%-I:%M %p").to_string()}</td>
                        </tr>
                    }
                    .into_view()
                })
                .collect::<Vec<_>>()
        })
    };

    view! {
        <div class="page">
            <PageHeader title="Live Dispatch" subtitle="Driver progress on today's routes" />

            <StatGrid>
                <StatCard label="On Route" value=move || summary.with(|s| s.on_route.to_string()) />
                <StatCard label="At Station" value=move || summary.with(|s| s.at_station.to_string()) />
                <StatCard label="Average Progress" value=move || summary.with(|s| format_percent(s.average_progress)) />
                <StatCard
                    label="Behind Pace"
                    tone="bad"
                    value=move || summary.with(|s| s.behind_pace.to_string())
                    hint=format!("Under {:.0}% of stops", BEHIND_PACE_PERCENT)
                />
                <StatCard label="Stops Remaining" value=move || summary.with(|s| s.stops_remaining.to_string()) />
            </StatGrid>

            <PlaceholderCard
                title="Live Map"
                message="GPS positions are shown as coordinates. A map view needs a tile provider the dashboard does not connect to."
            />

            <FilterBar>
                <FilterSelect label="Activity" selected=activity />
            </FilterBar>

            {move || view! {
                <DataTable
                    headers=&["Driver", "Route", "Activity", "Progress", "Position", "Last Update"]
                    rows=rows()
                />
            }}
        </div>
    }
}

#[component]
pub fn RescuePage() -> impl IntoView {
    let store = use_store();
    let status = create_rw_signal(None::<RescueStatus>);
    let show_request = create_rw_signal(false);
    let action_error = create_rw_signal(None::<String>);

    let stats = create_memo(move |_| store.with(|s| rescue_stats(s.rescues.all())));
    let routes = Signal::derive(move || store.with(|s| s.route_choices()));
    let drivers = Signal::derive(move || store.with(|s| s.driver_choices()));

    let advance = move |id: String| match store.dispatch(Command::AdvanceRescue { id }) {
        Ok(_) => action_error.set(None),
        Err(e) => action_error.set(Some(e.to_string())),
    };

    let rows = move || {
        let status = status.get();
        store.with(|s| {
            filter_rescues(s.rescues.all(), status)
                .into_iter()
                .map(|rescue| {
                    let rescuer = rescue
                        .rescuer_id
                        .as_deref()
                        .map(|id| s.driver_name(id))
                        .unwrap_or_else(|| "Unassigned".to_string());
                    let next = rescue.status.next();
                    let id = rescue.id.clone();
                    view! {
                        <tr>
                            <td>{fmt_timestamp(rescue.requested_at)}</td>
                            <td>{s.route_code(&rescue.route_id)}</td>
                            <td>{s.driver_name(&rescue.driver_id)}</td>
                            <td>{rescuer}</td>
                            <td>{rescue.packages}</td>
                            <td>{rescue.reason.clone()}</td>
                            <td><StatusBadge value=rescue.status /></td>
                            <td>
                                {next.map(|next| {
                                    let id = id.clone();
                                    view! {
                                        <button class="button small" on:click=move |_| advance(id.clone())>
                                            {format!("Mark {}", next.label())}
                                        </button>
                                    }
                                })}
                            </td>
                        </tr>
                    }
                    .into_view()
                })
                .collect::<Vec<_>>()
        })
    };

    view! {
        <div class="page">
            <PageHeader title="Rescue Operations" subtitle="Moving packages off routes that are behind">
                <button class="button primary" on:click=move |_| show_request.set(true)>"Request Rescue"</button>
            </PageHeader>

            <StatGrid>
                <StatCard label="Active Rescues" tone="warn" value=move || stats.with(|s| s.active.to_string()) />
                <StatCard label="Awaiting Rescuer" tone="bad" value=move || stats.with(|s| s.awaiting_rescuer.to_string()) />
                <StatCard label="Completed" tone="good" value=move || stats.with(|s| s.completed.to_string()) />
                <StatCard label="Packages Rescued" value=move || stats.with(|s| s.packages_rescued.to_string()) />
            </StatGrid>

            <FilterBar>
                <FilterSelect label="Status" selected=status />
            </FilterBar>

            {move || action_error.get().map(|e| view! { <div class="error-banner">{e}</div> })}

            {move || view! {
                <DataTable
                    headers=&["Requested", "Route", "Driver", "Rescuer", "Packages", "Reason", "Status", ""]
                    rows=rows()
                />
            }}

            <RequestRescueModal
                open=show_request
                routes=routes
                drivers=drivers
                on_create=move |new| store.dispatch(Command::RequestRescue(new))
            />
        </div>
    }
}
