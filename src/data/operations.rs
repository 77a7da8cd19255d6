use chrono::Weekday;

use super::{at, date, time, today};
use crate::models::*;

pub fn routes() -> Vec<DeliveryRoute> {
    use RouteStatus::*;

    let route = |id: &str, code: &str, zone: &str, stops: u32, packages: u32, estimated_hours: f64, status| DeliveryRoute {
        id: id.into(),
        code: code.into(),
        zone: zone.into(),
        stops,
        packages,
        estimated_hours,
        status,
    };

    vec![
        route("RTE-001", "CX101", "North Hills", 162, 241, 9.5, InProgress),
        route("RTE-002", "CX102", "North Hills", 148, 219, 9.0, InProgress),
        route("RTE-003", "CX103", "Riverside", 175, 268, 10.0, InProgress),
        route("RTE-004", "CX104", "Riverside", 139, 204, 8.5, InProgress),
        route("RTE-005", "CX105", "Downtown", 121, 310, 9.0, InProgress),
        route("RTE-006", "CX106", "Lakeview", 156, 230, 9.5, Assigned),
        route("RTE-007", "CX107", "Lakeview", 144, 212, 9.0, Planned),
        route("RTE-008", "CX108", "Downtown", 98, 265, 8.0, Completed),
    ]
}

pub fn shifts() -> Vec<Shift> {
    use ShiftStatus::*;
    use Wave::*;

    let day = today();
    let shift = |id: &str, driver_id: &str, offset: i64, start: (u32, u32), wave, route_id: Option<&str>, backup: Option<&str>, status| {
        Shift {
            id: id.into(),
            driver_id: driver_id.into(),
            date: day + chrono::Duration::days(offset),
            start: time(start.0, start.1),
            end: time(start.0 + 10, start.1),
            wave,
            route_id: route_id.map(Into::into),
            backup_driver_id: backup.map(Into::into),
            status,
        }
    };

    vec![
        shift("SHF-001", "DRV-001", 0, (7, 0), First, Some("RTE-001"), Some("DRV-007"), InProgress),
        shift("SHF-002", "DRV-002", 0, (7, 0), First, Some("RTE-002"), None, InProgress),
        shift("SHF-003", "DRV-003", 0, (7, 20), Second, Some("RTE-003"), None, InProgress),
        shift("SHF-004", "DRV-004", 0, (7, 20), Second, Some("RTE-004"), None, InProgress),
        shift("SHF-005", "DRV-005", 0, (7, 40), Third, Some("RTE-005"), Some("DRV-006"), InProgress),
        shift("SHF-006", "DRV-006", 0, (7, 40), Third, Some("RTE-006"), None, Confirmed),
        shift("SHF-007", "DRV-007", -1, (7, 0), First, Some("RTE-008"), None, Completed),
        shift("SHF-008", "DRV-009", -1, (7, 20), Second, None, None, NoShow),
        shift("SHF-009", "DRV-001", 1, (7, 0), First, Some("RTE-001"), None, Scheduled),
        shift("SHF-010", "DRV-004", 1, (7, 20), Second, Some("RTE-004"), None, Scheduled),
        shift("SHF-011", "DRV-007", 1, (7, 40), Third, Some("RTE-007"), Some("DRV-002"), Scheduled),
        shift("SHF-012", "DRV-008", 2, (7, 0), First, None, None, Cancelled),
    ]
}

pub fn availability() -> Vec<Availability> {
    use Weekday::*;

    let entry = |driver_id: &str, days: &[Weekday], preferred_wave| Availability {
        driver_id: driver_id.into(),
        days: days.to_vec(),
        preferred_wave,
    };

    vec![
        entry("DRV-001", &[Mon, Tue, Wed, Thu, Fri], Wave::First),
        entry("DRV-002", &[Mon, Tue, Wed, Sat], Wave::First),
        entry("DRV-003", &[Mon, Wed, Thu, Fri, Sat], Wave::Second),
        entry("DRV-004", &[Mon, Tue, Thu, Fri], Wave::Second),
        entry("DRV-005", &[Mon, Tue, Wed, Thu], Wave::Third),
        entry("DRV-006", &[Mon, Fri, Sat, Sun], Wave::Third),
        entry("DRV-007", &[Sun, Mon, Tue, Wed], Wave::First),
        entry("DRV-008", &[Wed, Thu, Fri, Sat, Sun], Wave::Second),
    ]
}

pub fn payroll() -> Vec<PayrollEntry> {
    use PayStatus::*;

    let entry = |id: &str, driver_id: &str, period: u8, hours: (f64, f64), rate: f64, bonuses: f64, deductions: f64, status| {
        let (period_start, period_end) = match period {
            1 => (date(2024, 5, 12), date(2024, 5, 25)),
            _ => (date(2024, 5, 26), date(2024, 6, 8)),
        };
        PayrollEntry {
            id: id.into(),
            driver_id: driver_id.into(),
            period_start,
            period_end,
            regular_hours: hours.0,
            overtime_hours: hours.1,
            hourly_rate: rate,
            bonuses,
            deductions,
            status,
        }
    };

    vec![
        entry("PAY-001", "DRV-001", 1, (80.0, 6.5), 22.0, 150.0, 312.4, Paid),
        entry("PAY-002", "DRV-002", 1, (80.0, 4.0), 22.0, 150.0, 298.1, Paid),
        entry("PAY-003", "DRV-003", 1, (78.5, 0.0), 20.5, 0.0, 241.7, Paid),
        entry("PAY-004", "DRV-004", 1, (80.0, 2.0), 21.0, 75.0, 276.0, Paid),
        entry("PAY-005", "DRV-001", 2, (80.0, 5.0), 22.0, 150.0, 309.9, Approved),
        entry("PAY-006", "DRV-002", 2, (76.0, 0.0), 22.0, 150.0, 270.3, Approved),
        entry("PAY-007", "DRV-003", 2, (80.0, 3.5), 20.5, 0.0, 262.2, Pending),
        entry("PAY-008", "DRV-004", 2, (80.0, 1.0), 21.0, 75.0, 272.8, Pending),
        entry("PAY-009", "DRV-005", 2, (72.0, 0.0), 20.0, 0.0, 216.0, Pending),
        entry("PAY-010", "DRV-006", 2, (80.0, 8.0), 20.0, 50.0, 284.5, Pending),
    ]
}

pub fn timesheets() -> Vec<Timesheet> {
    let sheet = |id: &str, driver_id: &str, day: u32, clock_in: (u32, u32), clock_out: (u32, u32), break_minutes: u32, approved: bool| Timesheet {
        id: id.into(),
        driver_id: driver_id.into(),
        date: date(2024, 6, day),
        clock_in: time(clock_in.0, clock_in.1),
        clock_out: time(clock_out.0, clock_out.1),
        break_minutes,
        approved,
    };

    vec![
        sheet("TS-001", "DRV-001", 8, (6, 55), (17, 20), 30, true),
        sheet("TS-002", "DRV-002", 8, (6, 58), (16, 45), 30, true),
        sheet("TS-003", "DRV-003", 8, (7, 15), (18, 5), 30, true),
        sheet("TS-004", "DRV-004", 8, (7, 18), (17, 10), 45, false),
        sheet("TS-005", "DRV-005", 8, (7, 38), (18, 40), 30, false),
        sheet("TS-006", "DRV-007", 9, (6, 57), (16, 30), 30, false),
        sheet("TS-007", "DRV-006", 9, (7, 41), (17, 55), 0, false),
    ]
}

pub fn locations() -> Vec<DriverLocation> {
    use DriverActivity::*;

    let day = today();
    let location = |driver_id: &str, route_id: &str, lat: f64, lng: f64, updated: (u32, u32), activity, stops: (u32, u32)| {
        DriverLocation {
            driver_id: driver_id.into(),
            route_id: route_id.into(),
            lat,
            lng,
            last_update: at(day, updated.0, updated.1),
            activity,
            stops_completed: stops.0,
            stops_total: stops.1,
        }
    };

    vec![
        location("DRV-001", "RTE-001", 32.8412, -96.7703, (13, 42), OnRoute, (118, 162)),
        location("DRV-002", "RTE-002", 32.8520, -96.7581, (13, 40), OnRoute, (97, 148)),
        location("DRV-003", "RTE-003", 32.7791, -96.8302, (13, 41), Break, (71, 175)),
        location("DRV-004", "RTE-004", 32.7703, -96.8177, (13, 38), OnRoute, (102, 139)),
        location("DRV-005", "RTE-005", 32.7820, -96.7985, (13, 43), OnRoute, (45, 121)),
        location("DRV-006", "RTE-006", 32.8101, -96.7312, (12, 5), AtStation, (0, 156)),
    ]
}

pub fn rescues() -> Vec<RescueOperation> {
    use RescueStatus::*;

    let day = today();
    let rescue = |id: &str, route_id: &str, driver_id: &str, rescuer_id: Option<&str>, packages: u32, reason: &str, status, requested: (u32, u32)| {
        RescueOperation {
            id: id.into(),
            route_id: route_id.into(),
            driver_id: driver_id.into(),
            rescuer_id: rescuer_id.map(Into::into),
            packages,
            reason: reason.into(),
            status,
            requested_at: at(day, requested.0, requested.1),
        }
    };

    vec![
        rescue("RSC-001", "RTE-005", "DRV-005", Some("DRV-007"), 60, "Behind pace: 37% at midday", InProgress, (12, 30)),
        rescue("RSC-002", "RTE-003", "DRV-003", None, 45, "Van issue, limping back", Requested, (13, 35)),
        rescue("RSC-003", "RTE-008", "DRV-007", Some("DRV-002"), 30, "Heavy apartment complex", Completed, (11, 0)),
    ]
}
