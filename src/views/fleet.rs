use chrono::NaiveDate;

use super::{average, matches_option, matches_search, percentage, sum};
use crate::models::*;

/// Window for registration/insurance renewals to show up as due
pub const RENEWAL_WINDOW_DAYS: i64 = 30;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct VehicleFilter {
    pub search: String,
    pub status: Option<VehicleStatus>,
}

impl VehicleFilter {
    pub fn matches(&self, vehicle: &Vehicle) -> bool {
        matches_option(self.status, vehicle.status)
            && matches_search(
                &self.search,
                &[
                    vehicle.id.as_str(),
                    vehicle.vin.as_str(),
                    vehicle.model.as_str(),
                    vehicle.plate.as_str(),
                ],
            )
    }
}

pub fn filter_vehicles<'a>(vehicles: &'a [Vehicle], filter: &VehicleFilter) -> Vec<&'a Vehicle> {
    vehicles.iter().filter(|v| filter.matches(v)).collect()
}

fn due_within(date: NaiveDate, today: NaiveDate) -> bool {
    (date - today).num_days() <= RENEWAL_WINDOW_DAYS
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FleetStats {
    pub total: usize,
    pub active: usize,
    pub in_maintenance: usize,
    pub grounded: usize,
    pub inactive: usize,
    pub average_mileage: f64,
    /// Registration or insurance expired or due within [`RENEWAL_WINDOW_DAYS`]
    pub renewals_due: usize,
    pub unbranded: usize,
}

pub fn fleet_stats(vehicles: &[Vehicle], today: NaiveDate) -> FleetStats {
    let count = |status| vehicles.iter().filter(|v| v.status == status).count();

    FleetStats {
        total: vehicles.len(),
        active: count(VehicleStatus::Active),
        in_maintenance: count(VehicleStatus::Maintenance),
        grounded: count(VehicleStatus::Grounded),
        inactive: count(VehicleStatus::Inactive),
        average_mileage: average(vehicles.iter().map(|v| f64::from(v.mileage))),
        renewals_due: vehicles
            .iter()
            .filter(|v| {
                due_within(v.registration_expiry, today) || due_within(v.insurance_expiry, today)
            })
            .count(),
        unbranded: vehicles
            .iter()
            .filter(|v| v.branding != BrandingStatus::Branded)
            .count(),
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MaintenanceFilter {
    pub search: String,
    pub status: Option<MaintenanceStatus>,
}

impl MaintenanceFilter {
    pub fn matches(&self, record: &MaintenanceRecord) -> bool {
        matches_option(self.status, record.status)
            && matches_search(
                &self.search,
                &[
                    record.vehicle_id.as_str(),
                    record.service_type.as_str(),
                    record.vendor.as_str(),
                    record.description.as_str(),
                ],
            )
    }
}

/// Matching records, most recently scheduled first
pub fn filter_maintenance<'a>(
    records: &'a [MaintenanceRecord],
    filter: &MaintenanceFilter,
) -> Vec<&'a MaintenanceRecord> {
    let mut rows: Vec<_> = records.iter().filter(|r| filter.matches(r)).collect();
    rows.sort_by(|a, b| b.scheduled_date.cmp(&a.scheduled_date));
    rows
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MaintenanceStats {
    /// Invoiced cost of completed work only
    pub total_cost: f64,
    pub scheduled: usize,
    pub in_progress: usize,
    pub completed: usize,
    pub overdue: usize,
}

pub fn maintenance_stats(records: &[MaintenanceRecord]) -> MaintenanceStats {
    let count = |status| records.iter().filter(|r| r.status == status).count();

    MaintenanceStats {
        total_cost: sum(records
            .iter()
            .filter(|r| r.status == MaintenanceStatus::Completed)
            .filter_map(|r| r.cost)),
        scheduled: count(MaintenanceStatus::Scheduled),
        in_progress: count(MaintenanceStatus::InProgress),
        completed: count(MaintenanceStatus::Completed),
        overdue: count(MaintenanceStatus::Overdue),
    }
}

pub fn filter_inspections(
    inspections: &[InspectionRecord],
    result: Option<InspectionResult>,
) -> Vec<&InspectionRecord> {
    let mut rows: Vec<_> = inspections
        .iter()
        .filter(|i| matches_option(result, i.result))
        .collect();
    rows.sort_by(|a, b| b.date.cmp(&a.date));
    rows
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct InspectionStats {
    pub total: usize,
    pub passed: usize,
    pub needs_attention: usize,
    pub failed: usize,
    pub pass_rate: f64,
    pub defects: usize,
}

pub fn inspection_stats(inspections: &[InspectionRecord]) -> InspectionStats {
    let count = |result| inspections.iter().filter(|i| i.result == result).count();
    let passed = count(InspectionResult::Pass);

    InspectionStats {
        total: inspections.len(),
        passed,
        needs_attention: count(InspectionResult::NeedsAttention),
        failed: count(InspectionResult::Fail),
        pass_rate: percentage(passed, inspections.len()),
        defects: inspections.iter().map(|i| i.defects.len()).sum(),
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UtilizationSummary {
    pub average_rate: f64,
    pub total_miles: u32,
    pub total_routes: u32,
    pub idle_vehicles: usize,
}

pub fn utilization_summary(entries: &[FleetUtilization]) -> UtilizationSummary {
    UtilizationSummary {
        average_rate: average(entries.iter().map(FleetUtilization::utilization_rate)),
        total_miles: entries.iter().map(|e| e.miles_driven).sum(),
        total_routes: entries.iter().map(|e| e.routes_completed).sum(),
        idle_vehicles: entries.iter().filter(|e| e.days_used == 0).count(),
    }
}

/// Utilization rows sorted busiest first
pub fn ranked_utilization(entries: &[FleetUtilization]) -> Vec<&FleetUtilization> {
    let mut rows: Vec<_> = entries.iter().collect();
    rows.sort_by(|a, b| b.utilization_rate().total_cmp(&a.utilization_rate()));
    rows
}

/// Alerts matching `severity`, most severe first then newest
pub fn filter_vehicle_alerts(
    alerts: &[VehicleAlert],
    severity: Option<Severity>,
) -> Vec<&VehicleAlert> {
    let mut rows: Vec<_> = alerts
        .iter()
        .filter(|a| matches_option(severity, a.severity))
        .collect();
    rows.sort_by(|a, b| b.severity.cmp(&a.severity).then(b.date.cmp(&a.date)));
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data;
    use crate::models::Labeled;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_status_filter_count_matches_stat_card() {
        let vehicles = data::vehicles();
        let stats = fleet_stats(&vehicles, data::today());

        for status in VehicleStatus::all() {
            let filter = VehicleFilter {
                status: Some(*status),
                ..Default::default()
            };
            let rows = filter_vehicles(&vehicles, &filter);
            let expected = vehicles.iter().filter(|v| v.status == *status).count();
            assert_eq!(rows.len(), expected, "{}", status.label());
        }

        let active = VehicleFilter {
            status: Some(VehicleStatus::Active),
            ..Default::default()
        };
        assert_eq!(filter_vehicles(&vehicles, &active).len(), stats.active);
        assert_eq!(stats.active, 5);
        assert_eq!(
            stats.active + stats.in_maintenance + stats.grounded + stats.inactive,
            stats.total
        );
    }

    #[test]
    fn test_search_combines_with_status() {
        let vehicles = data::vehicles();
        let filter = VehicleFilter {
            search: "sprinter".into(),
            status: Some(VehicleStatus::Active),
        };
        let ids: Vec<_> = filter_vehicles(&vehicles, &filter)
            .into_iter()
            .map(|v| v.id.as_str())
            .collect();
        assert_eq!(ids, vec!["VEH-004", "VEH-005"]);

        let nothing = VehicleFilter {
            search: "cybertruck".into(),
            status: None,
        };
        assert!(filter_vehicles(&vehicles, &nothing).is_empty());
    }

    #[test]
    fn test_total_maintenance_cost_counts_completed_with_cost_only() {
        let records = data::maintenance();
        let stats = maintenance_stats(&records);

        let expected: f64 = records
            .iter()
            .filter(|r| r.status == MaintenanceStatus::Completed)
            .filter_map(|r| r.cost)
            .sum();
        assert_eq!(stats.total_cost, expected);
        assert!((stats.total_cost - 567.49).abs() < 1e-9);
        assert_eq!(stats.completed, 4);
        assert_eq!(stats.overdue, 1);
    }

    #[test]
    fn test_maintenance_rows_newest_first() {
        let records = data::maintenance();
        let rows = filter_maintenance(&records, &MaintenanceFilter::default());
        assert_eq!(rows.len(), records.len());
        assert!(rows.windows(2).all(|w| w[0].scheduled_date >= w[1].scheduled_date));
    }

    #[test]
    fn test_renewals_due_window() {
        let vehicles = data::vehicles();
        let stats = fleet_stats(&vehicles, data::today());
        // VEH-003 registration 6/30, VEH-004 insurance 7/1, VEH-006 registration expired 5/31
        assert_eq!(stats.renewals_due, 3);
    }

    #[test]
    fn test_inspection_pass_rate() {
        let stats = inspection_stats(&data::inspections());
        assert_eq!(stats.total, 8);
        assert_eq!(stats.passed, 5);
        assert_eq!(stats.failed, 2);
        assert_eq!(stats.pass_rate, 62.5);
        assert_eq!(stats.defects, 4);
    }

    #[test]
    fn test_utilization_summary() {
        let summary = utilization_summary(&data::utilization());
        assert_eq!(summary.idle_vehicles, 1);
        assert_eq!(summary.total_routes, 46);
        let ranked = ranked_utilization(&data::utilization())
            .into_iter()
            .map(|u| u.utilization_rate())
            .collect::<Vec<_>>();
        assert!(ranked.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn test_alerts_sorted_by_severity() {
        let alerts = data::vehicle_alerts();
        let rows = filter_vehicle_alerts(&alerts, None);
        assert_eq!(rows[0].severity, Severity::Critical);

        let high = filter_vehicle_alerts(&alerts, Some(Severity::High));
        assert_eq!(high.len(), 2);
    }
}
