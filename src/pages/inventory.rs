use leptos::*;

use super::fmt_date;
use crate::components::modals::ReportDamageModal;
use crate::components::*;
use crate::models::*;
use crate::state::{use_store, Command};
use crate::views::format_currency;
use crate::views::inventory::*;

#[component]
pub fn AssetsPage() -> impl IntoView {
    let store = use_store();
    let search = create_rw_signal(String::new());
    let category = create_rw_signal(None::<AssetCategory>);
    let status = create_rw_signal(None::<AssetStatus>);

    let stats = create_memo(move |_| store.with(|s| asset_stats(s.assets.all())));

    let rows = move || {
        let filter = AssetFilter {
            search: search.get(),
            category: category.get(),
            status: status.get(),
        };
        store.with(|s| {
            filter_assets(s.assets.all(), &filter)
                .into_iter()
                .map(|asset| {
                    let holder = asset
                        .assigned_to
                        .as_deref()
                        .map(|id| s.driver_name(id))
                        .unwrap_or_else(|| "—".to_string());
                    view! {
                        <tr>
                            <td>
                                <strong>{asset.name.clone()}</strong>
                                <div class="subtitle">{asset.id.clone()}</div>
                            </td>
                            <td>{asset.category.label()}</td>
                            <td class="mono">{asset.serial.clone()}</td>
                            <td>{holder}</td>
                            <td>{format_currency(asset.value)}</td>
                            <td>{fmt_date(asset.purchase_date)}</td>
                            <td><StatusBadge value=asset.status /></td>
                        </tr>
                    }
                    .into_view()
                })
                .collect::<Vec<_>>()
        })
    };

    view! {
        <div class="page">
            <PageHeader title="Station Assets" subtitle="Devices and equipment issued to drivers">
                <ExportButton label="Export to Excel" />
            </PageHeader>

            <StatGrid>
                <StatCard label="Total Assets" value=move || stats.with(|s| s.total.to_string()) />
                <StatCard label="Total Value" value=move || stats.with(|s| format_currency(s.total_value)) />
                <StatCard label="Assigned" value=move || stats.with(|s| s.assigned.to_string()) />
                <StatCard label="Available" tone="good" value=move || stats.with(|s| s.available.to_string()) />
                <StatCard label="Damaged" tone="bad" value=move || stats.with(|s| s.damaged.to_string()) />
            </StatGrid>

            <FilterBar>
                <SearchInput value=search placeholder="Search name or serial" />
                <FilterSelect label="Category" selected=category />
                <FilterSelect label="Status" selected=status />
            </FilterBar>

            {move || view! {
                <DataTable
                    headers=&["Asset", "Category", "Serial", "Assigned To", "Value", "Purchased", "Status"]
                    rows=rows()
                />
            }}
        </div>
    }
}

#[component]
pub fn DamageReportsPage() -> impl IntoView {
    let store = use_store();
    let status = create_rw_signal(None::<DamageStatus>);
    let show_report = create_rw_signal(false);

    let stats = create_memo(move |_| store.with(|s| damage_stats(s.damage.all())));
    let assets = Signal::derive(move || store.with(|s| s.asset_choices()));
    let drivers = Signal::derive(move || store.with(|s| s.driver_choices()));

    let rows = move || {
        let status = status.get();
        store.with(|s| {
            filter_damage(s.damage.all(), status)
                .into_iter()
                .map(|report| {
                    let asset = s
                        .assets
                        .get(&report.asset_id)
                        .map(|a| a.name.clone())
                        .unwrap_or_else(|| report.asset_id.clone());
                    view! {
                        <tr>
                            <td>{fmt_date(report.date)}</td>
                            <td>{asset}</td>
                            <td>{s.driver_name(&report.reported_by)}</td>
                            <td>{report.description.clone()}</td>
                            <td>{format_currency(report.repair_cost)}</td>
                            <td><StatusBadge value=report.status /></td>
                        </tr>
                    }
                    .into_view()
                })
                .collect::<Vec<_>>()
        })
    };

    view! {
        <div class="page">
            <PageHeader title="Damage Reports" subtitle="Broken or lost station equipment">
                <button class="button primary" on:click=move |_| show_report.set(true)>"Report Damage"</button>
            </PageHeader>

            <StatGrid>
                <StatCard label="Reports" value=move || stats.with(|s| s.reports.to_string()) />
                <StatCard label="Open" tone="warn" value=move || stats.with(|s| s.open.to_string()) />
                <StatCard label="Repair Cost" value=move || stats.with(|s| format_currency(s.total_repair_cost)) />
            </StatGrid>

            <FilterBar>
                <FilterSelect label="Status" selected=status />
            </FilterBar>

            {move || view! {
                <DataTable headers=&["Date", "Asset", "Reported By", "Description", "Repair Cost", "Status"] rows=rows() />
            }}

            <ReportDamageModal
                open=show_report
                assets=assets
                drivers=drivers
                on_create=move |new| store.dispatch(Command::ReportDamage(new))
            />
        </div>
    }
}
