use chrono::{Duration, NaiveDate};

use super::{average, percentage, sum};
use crate::models::labeled_enum;
use crate::models::*;
use crate::state::DspStore;

labeled_enum! {
    /// Trailing window the analytics page aggregates over
    pub enum AnalyticsPeriod {
        Week => ("week", "Last 7 Days"),
        Month => ("month", "Last 30 Days"),
        Quarter => ("quarter", "Last 90 Days"),
    }
}

impl AnalyticsPeriod {
    pub fn days(self) -> i64 {
        match self {
            AnalyticsPeriod::Week => 7,
            AnalyticsPeriod::Month => 30,
            AnalyticsPeriod::Quarter => 90,
        }
    }

    /// True when `date` falls in the window ending on (and including) `today`
    pub fn contains(self, date: NaiveDate, today: NaiveDate) -> bool {
        date <= today && date > today - Duration::days(self.days())
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnalyticsReport {
    pub incidents: usize,
    pub serious_incidents: usize,
    pub rts_packages: usize,
    pub lost_value: f64,
    pub maintenance_spend: f64,
    pub damage_cost: f64,
    pub inspection_pass_rate: f64,
    pub shifts_completed: usize,
    pub no_shows: usize,
    pub attendance_rate: f64,
    pub average_delivery_score: f64,
    pub average_safety_score: f64,
}

pub fn analytics_report(store: &DspStore, period: AnalyticsPeriod, today: NaiveDate) -> AnalyticsReport {
    let within = |date: NaiveDate| period.contains(date, today);

    let incidents: Vec<_> = store.incidents.all().iter().filter(|i| within(i.date)).collect();
    let inspections: Vec<_> = store
        .inspections
        .all()
        .iter()
        .filter(|i| within(i.date))
        .collect();
    let past_shifts: Vec<_> = store
        .shifts
        .all()
        .iter()
        .filter(|s| within(s.date))
        .filter(|s| matches!(s.status, ShiftStatus::Completed | ShiftStatus::NoShow))
        .collect();
    let completed = past_shifts
        .iter()
        .filter(|s| s.status == ShiftStatus::Completed)
        .count();
    let active_drivers = || {
        store
            .drivers
            .all()
            .iter()
            .filter(|d| d.status == DriverStatus::Active)
    };

    AnalyticsReport {
        incidents: incidents.len(),
        serious_incidents: incidents
            .iter()
            .filter(|i| i.severity >= Severity::High)
            .count(),
        rts_packages: store.rts.all().iter().filter(|p| within(p.date)).count(),
        lost_value: sum(store
            .lost
            .all()
            .iter()
            .filter(|p| within(p.date) && p.status != LostStatus::Found)
            .map(|p| p.value)),
        maintenance_spend: sum(store
            .maintenance
            .all()
            .iter()
            .filter(|r| r.status == MaintenanceStatus::Completed)
            .filter(|r| r.completed_date.is_some_and(within))
            .filter_map(|r| r.cost)),
        damage_cost: sum(store
            .damage
            .all()
            .iter()
            .filter(|r| within(r.date))
            .map(|r| r.repair_cost)),
        inspection_pass_rate: percentage(
            inspections
                .iter()
                .filter(|i| i.result == InspectionResult::Pass)
                .count(),
            inspections.len(),
        ),
        shifts_completed: completed,
        no_shows: past_shifts.len() - completed,
        attendance_rate: percentage(completed, past_shifts.len()),
        average_delivery_score: average(active_drivers().map(|d| d.delivery_score)),
        average_safety_score: average(active_drivers().map(|d| d.safety_score)),
    }
}

/// Headline numbers for the landing page
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OverviewKpis {
    pub active_vehicles: usize,
    pub total_vehicles: usize,
    pub active_drivers: usize,
    pub shifts_today: usize,
    pub routes_in_progress: usize,
    pub open_incidents: usize,
    pub urgent_alerts: usize,
    pub pending_payroll: usize,
    pub rts_today: usize,
}

pub fn overview_kpis(store: &DspStore, today: NaiveDate) -> OverviewKpis {
    OverviewKpis {
        active_vehicles: store
            .vehicles
            .all()
            .iter()
            .filter(|v| v.status == VehicleStatus::Active)
            .count(),
        total_vehicles: store.vehicles.len(),
        active_drivers: store
            .drivers
            .all()
            .iter()
            .filter(|d| d.status == DriverStatus::Active)
            .count(),
        shifts_today: store
            .shifts
            .all()
            .iter()
            .filter(|s| s.date == today && s.status != ShiftStatus::Cancelled)
            .count(),
        routes_in_progress: store
            .routes
            .all()
            .iter()
            .filter(|r| r.status == RouteStatus::InProgress)
            .count(),
        open_incidents: store
            .incidents
            .all()
            .iter()
            .filter(|i| i.status != IncidentStatus::Resolved)
            .count(),
        urgent_alerts: store
            .vehicle_alerts
            .all()
            .iter()
            .filter(|a| a.severity >= Severity::High)
            .count()
            + store
                .driver_alerts
                .all()
                .iter()
                .filter(|a| a.severity >= Severity::High)
                .count(),
        pending_payroll: store
            .payroll
            .all()
            .iter()
            .filter(|p| p.status == PayStatus::Pending)
            .count(),
        rts_today: store.rts.all().iter().filter(|p| p.date == today).count(),
    }
}

/// One line in the overview's combined alert feed
#[derive(Debug, Clone, PartialEq)]
pub struct AlertFeedItem {
    pub subject: String,
    pub message: String,
    pub severity: Severity,
    pub date: NaiveDate,
}

/// Vehicle and driver alerts merged, most severe first then newest
pub fn alert_feed(store: &DspStore, limit: usize) -> Vec<AlertFeedItem> {
    let vehicles = store.vehicle_alerts.all().iter().map(|a| AlertFeedItem {
        subject: store.vehicle_label(&a.vehicle_id),
        message: a.message.clone(),
        severity: a.severity,
        date: a.date,
    });
    let drivers = store.driver_alerts.all().iter().map(|a| AlertFeedItem {
        subject: store.driver_name(&a.driver_id),
        message: a.message.clone(),
        severity: a.severity,
        date: a.date,
    });

    let mut feed: Vec<_> = vehicles.chain(drivers).collect();
    feed.sort_by(|a, b| b.severity.cmp(&a.severity).then(b.date.cmp(&a.date)));
    feed.truncate(limit);
    feed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_period_window_is_inclusive_of_today() {
        let today = data::today();
        assert!(AnalyticsPeriod::Week.contains(today, today));
        assert!(AnalyticsPeriod::Week.contains(today - Duration::days(6), today));
        assert!(!AnalyticsPeriod::Week.contains(today - Duration::days(7), today));
        assert!(!AnalyticsPeriod::Week.contains(today + Duration::days(1), today));
    }

    #[test]
    fn test_report_widens_with_period() {
        let store = DspStore::seeded();
        let today = data::today();

        let week = analytics_report(&store, AnalyticsPeriod::Week, today);
        let month = analytics_report(&store, AnalyticsPeriod::Month, today);
        let quarter = analytics_report(&store, AnalyticsPeriod::Quarter, today);

        assert_eq!(week.incidents, 4);
        assert_eq!(month.incidents, 6);
        assert_eq!(week.rts_packages, 8);
        assert_eq!(week.maintenance_spend, 0.0);
        assert_eq!(month.maintenance_spend, 477.5);
        assert!((quarter.maintenance_spend - 567.49).abs() < 1e-9);
        assert_eq!(week.shifts_completed, 1);
        assert_eq!(week.no_shows, 1);
        assert_eq!(week.attendance_rate, 50.0);
    }

    #[test]
    fn test_overview_kpis() {
        let store = DspStore::seeded();
        let kpis = overview_kpis(&store, data::today());
        assert_eq!(kpis.active_vehicles, 5);
        assert_eq!(kpis.total_vehicles, 8);
        assert_eq!(kpis.active_drivers, 7);
        assert_eq!(kpis.shifts_today, 6);
        assert_eq!(kpis.routes_in_progress, 5);
        assert_eq!(kpis.open_incidents, 3);
        assert_eq!(kpis.urgent_alerts, 4);
        assert_eq!(kpis.pending_payroll, 4);
        assert_eq!(kpis.rts_today, 0);
    }

    #[test]
    fn test_alert_feed_merges_and_limits() {
        let store = DspStore::seeded();
        let feed = alert_feed(&store, 3);
        assert_eq!(feed.len(), 3);
        assert_eq!(feed[0].severity, Severity::Critical);
        assert!(feed[0].subject.starts_with("DSP-4106"));
    }
}
