use leptos::*;

use super::{fmt_date, fmt_score};
use crate::components::modals::AddDriverModal;
use crate::components::*;
use crate::data;
use crate::models::*;
use crate::state::{use_store, Command};
use crate::views::drivers::*;
use crate::views::format_percent;

#[component]
pub fn DriversPage() -> impl IntoView {
    let store = use_store();
    let search = create_rw_signal(String::new());
    let status = create_rw_signal(None::<DriverStatus>);
    let show_add = create_rw_signal(false);

    let stats = create_memo(move |_| store.with(|s| driver_stats(s.drivers.all())));

    let rows = move || {
        let filter = DriverFilter {
            search: search.get(),
            status: status.get(),
        };
        store.with(|s| {
            filter_drivers(s.drivers.all(), &filter)
                .into_iter()
                .map(|driver| {
                    view! {
                        <tr>
                            <td>
                                <strong>{driver.name.clone()}</strong>
                                <div class="subtitle">{driver.id.clone()}</div>
                            </td>
                            <td>
                                {driver.email.clone()}
                                <div class="subtitle">{driver.phone.clone()}</div>
                            </td>
                            <td>
                                {format!("{} ({})", driver.license_number, driver.license_state)}
                                <div class="subtitle">"Exp. " {fmt_date(driver.license_expiry)}</div>
                            </td>
                            <td><StatusBadge value=driver.background_check /></td>
                            <td><StatusBadge value=driver.mentor_status /></td>
                            <td>{fmt_score(driver.delivery_score)}</td>
                            <td>{fmt_score(driver.safety_score)}</td>
                            <td><StatusBadge value=driver.status /></td>
                        </tr>
                    }
                    .into_view()
                })
                .collect::<Vec<_>>()
        })
    };

    view! {
        <div class="page">
            <PageHeader title="Driver Roster" subtitle="Delivery associates and their standing">
                <ExportButton label="Export to Excel" />
                <button class="button primary" on:click=move |_| show_add.set(true)>"Add Driver"</button>
            </PageHeader>

            <StatGrid>
                <StatCard label="Total Drivers" value=move || stats.with(|s| s.total.to_string()) />
                <StatCard label="Active" tone="good" value=move || stats.with(|s| s.active.to_string()) />
                <StatCard label="Onboarding" value=move || stats.with(|s| s.onboarding.to_string()) />
                <StatCard label="On Leave" tone="warn" value=move || stats.with(|s| s.on_leave.to_string()) />
                <StatCard label="Avg Delivery Score" value=move || stats.with(|s| fmt_score(s.average_delivery_score)) />
                <StatCard label="Avg Safety Score" value=move || stats.with(|s| fmt_score(s.average_safety_score)) />
            </StatGrid>

            <FilterBar>
                <SearchInput value=search placeholder="Search name, email or license" />
                <FilterSelect label="Status" selected=status />
            </FilterBar>

            {move || view! {
                <DataTable
                    headers=&["Driver", "Contact", "License", "Background", "Mentor", "Delivery", "Safety", "Status"]
                    rows=rows()
                />
            }}

            <AddDriverModal
                open=show_add
                on_create=move |new| store.dispatch(Command::AddDriver(new))
            />
        </div>
    }
}

#[component]
pub fn DocumentsPage() -> impl IntoView {
    let store = use_store();
    let status = create_rw_signal(None::<DocumentStatus>);
    let doc_type = create_rw_signal(None::<DocumentType>);
    let today = data::today();

    let stats = create_memo(move |_| store.with(|s| document_stats(s.documents.all(), today)));

    let rows = move || {
        let filter = DocumentFilter {
            status: status.get(),
            doc_type: doc_type.get(),
        };
        store.with(|s| {
            filter_documents(s.documents.all(), &filter, today)
                .into_iter()
                .map(|doc| {
                    view! {
                        <tr>
                            <td>{s.driver_name(&doc.driver_id)}</td>
                            <td>{doc.doc_type.label()}</td>
                            <td>{fmt_date(doc.issued)}</td>
                            <td>{doc.expiry.map(fmt_date).unwrap_or_else(|| "No expiry".to_string())}</td>
                            <td><StatusBadge value=doc.status(today) /></td>
                        </tr>
                    }
                    .into_view()
                })
                .collect::<Vec<_>>()
        })
    };

    view! {
        <div class="page">
            <PageHeader title="Driver Documents" subtitle="Licenses, medical cards and certifications" />

            <StatGrid>
                <StatCard label="Valid" tone="good" value=move || stats.with(|s| s.valid.to_string()) />
                <StatCard
                    label="Expiring Soon"
                    tone="warn"
                    value=move || stats.with(|s| s.expiring_soon.to_string())
                    hint=format!("Within {} days", EXPIRY_WARNING_DAYS)
                />
                <StatCard label="Expired" tone="bad" value=move || stats.with(|s| s.expired.to_string()) />
            </StatGrid>

            <FilterBar>
                <FilterSelect label="Status" selected=status />
                <FilterSelect label="Document" selected=doc_type />
            </FilterBar>

            {move || view! {
                <DataTable headers=&["Driver", "Document", "Issued", "Expires", "Status"] rows=rows() />
            }}
        </div>
    }
}

#[component]
pub fn TrainingPage() -> impl IntoView {
    let store = use_store();
    let status = create_rw_signal(None::<TrainingStatus>);
    let today = data::today();

    let stats = create_memo(move |_| store.with(|s| training_stats(s.training.all(), today)));

    let rows = move || {
        let status = status.get();
        store.with(|s| {
            filter_training(s.training.all(), status, today)
                .into_iter()
                .map(|training| {
                    view! {
                        <tr>
                            <td>{s.driver_name(&training.driver_id)}</td>
                            <td>{training.course.clone()}</td>
                            <td>{fmt_date(training.assigned)}</td>
                            <td>{fmt_date(training.due)}</td>
                            <td>{training.completed.map(fmt_date).unwrap_or_else(|| "—".to_string())}</td>
                            <td>{training.score.map(fmt_score).unwrap_or_else(|| "—".to_string())}</td>
                            <td><StatusBadge value=training.status(today) /></td>
                        </tr>
                    }
                    .into_view()
                })
                .collect::<Vec<_>>()
        })
    };

    view! {
        <div class="page">
            <PageHeader title="Training" subtitle="Assigned courses and completion" />

            <StatGrid>
                <StatCard label="Assigned" value=move || stats.with(|s| s.assigned.to_string()) />
                <StatCard label="Completed" tone="good" value=move || stats.with(|s| s.completed.to_string()) />
                <StatCard label="Overdue" tone="bad" value=move || stats.with(|s| s.overdue.to_string()) />
                <StatCard label="Completion Rate" value=move || stats.with(|s| format_percent(s.completion_rate)) />
                <StatCard label="Average Score" value=move || stats.with(|s| fmt_score(s.average_score)) />
            </StatGrid>

            <FilterBar>
                <FilterSelect label="Status" selected=status />
            </FilterBar>

            {move || view! {
                <DataTable
                    headers=&["Driver", "Course", "Assigned", "Due", "Completed", "Score", "Status"]
                    rows=rows()
                />
            }}
        </div>
    }
}

#[component]
pub fn PerformancePage() -> impl IntoView {
    let store = use_store();
    let tier = create_rw_signal(None::<PerformanceTier>);

    let tier_counts = create_memo(move |_| {
        store.with(|s| {
            let ranked = ranked_drivers(s.drivers.all());
            PerformanceTier::all()
                .iter()
                .map(|t| (*t, ranked.iter().filter(|(_, _, tier)| tier == t).count()))
                .collect::<Vec<_>>()
        })
    });

    let rows = move || {
        let wanted = tier.get();
        store.with(|s| {
            ranked_drivers(s.drivers.all())
                .into_iter()
                .filter(|(_, _, t)| wanted.map_or(true, |w| w == *t))
                .map(|(rank, driver, tier)| {
                    view! {
                        <tr>
                            <td>{format!("#{}", rank)}</td>
                            <td>{driver.name.clone()}</td>
                            <td>{fmt_score(driver.delivery_score)}</td>
                            <td>{fmt_score(driver.safety_score)}</td>
                            <td><StatusBadge value=tier /></td>
                        </tr>
                    }
                    .into_view()
                })
                .collect::<Vec<_>>()
        })
    };

    view! {
        <div class="page">
            <PageHeader title="Driver Performance" subtitle="Active drivers ranked by delivery score" />

            <StatGrid>
                {move || {
                    tier_counts
                        .get()
                        .into_iter()
                        .map(|(tier, count)| view! { <StatCard label=tier.label() value=count.to_string() /> })
                        .collect_view()
                }}
            </StatGrid>

            <FilterBar>
                <FilterSelect label="Tier" selected=tier />
            </FilterBar>

            {move || view! {
                <DataTable headers=&["Rank", "Driver", "Delivery", "Safety", "Tier"] rows=rows() />
            }}
        </div>
    }
}

#[component]
pub fn DriverAlertsPage() -> impl IntoView {
    let store = use_store();
    let severity = create_rw_signal(None::<Severity>);

    let rows = move || {
        let severity = severity.get();
        store.with(|s| {
            filter_driver_alerts(s.driver_alerts.all(), severity)
                .into_iter()
                .map(|alert| {
                    view! {
                        <tr>
                            <td><StatusBadge value=alert.severity /></td>
                            <td>{s.driver_name(&alert.driver_id)}</td>
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
    let count = move || store.with(|s| s.driver_alerts.len().to_string());

    view! {
        <div class="page">
            <PageHeader title="Driver Alerts" subtitle="Expiring credentials, scores and overdue training" />

            <StatGrid>
                <StatCard label="Open Alerts" value=count />
            </StatGrid>

            <FilterBar>
                <FilterSelect label="Severity" selected=severity />
            </FilterBar>

            {move || view! {
                <DataTable headers=&["Severity", "Driver", "Type", "Message", "Date"] rows=rows() />
            }}
        </div>
    }
}
