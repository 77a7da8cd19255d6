use chrono::NaiveDate;
use leptos::*;

use super::{fmt_date, fmt_time};
use crate::components::*;
use crate::models::payroll::OVERTIME_MULTIPLIER;
use crate::models::*;
use crate::state::use_store;
use crate::views::format_currency;
use crate::views::payroll::*;

#[component]
pub fn PayrollPage() -> impl IntoView {
    let store = use_store();
    let periods = create_memo(move |_| store.with(|s| pay_periods(s.payroll.all())));
    // Latest period first
    let period = create_rw_signal(periods.get_untracked().first().map(|p| p.start));
    let status = create_rw_signal(None::<PayStatus>);

    let filter = move || PayrollFilter {
        period: period.get(),
        status: status.get(),
    };
    let totals = create_memo(move |_| {
        let filter = filter();
        store.with(|s| payroll_totals(&filter_payroll(s.payroll.all(), &filter)))
    });

    let rows = move || {
        let filter = filter();
        store.with(|s| {
            filter_payroll(s.payroll.all(), &filter)
                .into_iter()
                .map(|entry| {
                    view! {
                        <tr>
                            <td>{s.driver_name(&entry.driver_id)}</td>
                            <td>{format!("{} – {}", fmt_date(entry.period_start), fmt_date(entry.period_end))}</td>
                            <td>{format!("{:.1}", entry.regular_hours)}</td>
                            <td>{format!("{:.1}", entry.overtime_hours)}</td>
                            <td>{format_currency(entry.hourly_rate)}</td>
                            <td>{format_currency(entry.bonuses)}</td>
                            <td>{format_currency(entry.gross())}</td>
                            <td>{format_currency(-entry.deductions)}</td>
                            <td><strong>{format_currency(entry.net())}</strong></td>
                            <td><StatusBadge value=entry.status /></td>
                        </tr>
                    }
                    .into_view()
                })
                .collect::<Vec<_>>()
        })
    };

    view! {
        <div class="page">
            <PageHeader title="Payroll" subtitle="Bi-weekly pay periods">
                <ExportButton label="Export to Excel" />
                <ExportButton label="Download PDF" />
            </PageHeader>

            <StatGrid>
                <StatCard label="Gross Pay" value=move || totals.with(|t| format_currency(t.gross)) />
                <StatCard label="Net Pay" tone="good" value=move || totals.with(|t| format_currency(t.net)) />
                <StatCard label="Hours" value=move || totals.with(|t| format!("{:.1}", t.hours)) />
                <StatCard
                    label="Overtime Hours"
                    tone="warn"
                    value=move || totals.with(|t| format!("{:.1}", t.overtime_hours))
                    hint=format!("Paid at {}x", OVERTIME_MULTIPLIER)
                />
                <StatCard label="Pending Approval" value=move || totals.with(|t| t.pending.to_string()) />
            </StatGrid>

            <FilterBar>
                <label class="filter-select">
                    <span>"Pay period"</span>
                    <select
                        prop:value=move || period.get().map(|d| d.to_string()).unwrap_or_default()
                        on:change=move |ev| period.set(event_target_value(&ev).parse::<NaiveDate>().ok())
                    >
                        <option value="">"All periods"</option>
                        {move || {
                            periods
                                .get()
                                .into_iter()
                                .map(|p| view! { <option value=p.start.to_string()>{p.label()}</option> })
                                .collect_view()
                        }}
                    </select>
                </label>
                <FilterSelect label="Status" selected=status />
            </FilterBar>

            {move || view! {
                <DataTable
                    headers=&["Driver", "Period", "Regular", "Overtime", "Rate", "Bonuses", "Gross", "Deductions", "Net", "Status"]
                    rows=rows()
                />
            }}
        </div>
    }
}

#[component]
pub fn TimesheetsPage() -> impl IntoView {
    let store = use_store();
    let approved = create_rw_signal(None::<bool>);

    let stats = create_memo(move |_| store.with(|s| timesheet_stats(s.timesheets.all())));

    let rows = move || {
        let approved = approved.get();
        store.with(|s| {
            filter_timesheets(s.timesheets.all(), approved)
                .into_iter()
                .map(|sheet| {
                    view! {
                        <tr>
                            <td>{fmt_date(sheet.date)}</td>
                            <td>{s.driver_name(&sheet.driver_id)}</td>
                            <td>{fmt_time(sheet.clock_in)}</td>
                            <td>{fmt_time(sheet.clock_out)}</td>
                            <td>{format!("{} min", sheet.break_minutes)}</td>
                            <td>{format!("{:.2}", sheet.worked_hours())}</td>
                            <td>
                                <span class=if sheet.approved { "badge badge-approved" } else { "badge badge-pending" }>
                                    {if sheet.approved { "Approved" } else { "Pending" }}
                                </span>
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
            <PageHeader title="Timesheets" subtitle="Clock-in and clock-out punches" />

            <StatGrid>
                <StatCard label="Hours Worked" value=move || stats.with(|s| format!("{:.1}", s.worked_hours)) />
                <StatCard label="Approved" tone="good" value=move || stats.with(|s| s.approved.to_string()) />
                <StatCard label="Awaiting Approval" tone="warn" value=move || stats.with(|s| s.pending_approval.to_string()) />
            </StatGrid>

            <FilterBar>
                <label class="filter-select">
                    <span>"Approval"</span>
                    <select on:change=move |ev| {
                        approved.set(match event_target_value(&ev).as_str() {
                            "approved" => Some(true),
                            "pending" => Some(false),
                            _ => None,
                        })
                    }>
                        <option value="">"All"</option>
                        <option value="approved">"Approved"</option>
                        <option value="pending">"Pending"</option>
                    </select>
                </label>
            </FilterBar>

            {move || view! {
                <DataTable
                    headers=&["Date", "Driver", "Clock In", "Clock Out", "Break", "Hours", "Approval"]
                    rows=rows()
                />
            }}
        </div>
    }
}
