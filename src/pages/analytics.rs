use leptos::*;

use super::fmt_score;
use crate::components::*;
use crate::data;
use crate::state::use_store;
use crate::views::analytics::{analytics_report, AnalyticsPeriod};
use crate::views::{format_currency, format_percent};

#[component]
pub fn AnalyticsPage() -> impl IntoView {
    let store = use_store();
    let (period, set_period) = create_signal(AnalyticsPeriod::Month);

    let report = create_memo(move |_| {
        let period = period.get();
        store.with(|s| analytics_report(s, period, data::today()))
    });

    view! {
        <div class="page">
            <PageHeader title="Analytics" subtitle="Cross-domain trends for the station">
                <ExportButton label="Download PDF" />
            </PageHeader>

            <FilterBar>
                <EnumSelect label="Period" value=Signal::from(period) set_value=SignalSetter::from(set_period) />
            </FilterBar>

            <h3 class="section-title">"Safety"</h3>
            <StatGrid>
                <StatCard label="Incidents" value=move || report.with(|r| r.incidents.to_string()) />
                <StatCard label="High Severity" tone="bad" value=move || report.with(|r| r.serious_incidents.to_string()) />
                <StatCard label="Inspection Pass Rate" value=move || report.with(|r| format_percent(r.inspection_pass_rate)) />
                <StatCard label="Avg Safety Score" value=move || report.with(|r| fmt_score(r.average_safety_score)) />
            </StatGrid>

            <h3 class="section-title">"Delivery"</h3>
            <StatGrid>
                <StatCard label="Avg Delivery Score" value=move || report.with(|r| fmt_score(r.average_delivery_score)) />
                <StatCard label="RTS Packages" tone="warn" value=move || report.with(|r| r.rts_packages.to_string()) />
                <StatCard label="Lost Package Value" tone="bad" value=move || report.with(|r| format_currency(r.lost_value)) />
            </StatGrid>

            <h3 class="section-title">"Attendance"</h3>
            <StatGrid>
                <StatCard label="Shifts Completed" tone="good" value=move || report.with(|r| r.shifts_completed.to_string()) />
                <StatCard label="No-Shows" tone="bad" value=move || report.with(|r| r.no_shows.to_string()) />
                <StatCard label="Attendance Rate" value=move || report.with(|r| format_percent(r.attendance_rate)) />
            </StatGrid>

            <h3 class="section-title">"Costs"</h3>
            <StatGrid>
                <StatCard label="Maintenance Spend" value=move || report.with(|r| format_currency(r.maintenance_spend)) />
                <StatCard label="Equipment Damage" value=move || report.with(|r| format_currency(r.damage_cost)) />
            </StatGrid>

            <PlaceholderCard
                title="Trend Charts"
                message="Week-over-week charts need a charting library the dashboard does not bundle."
            />
        </div>
    }
}
