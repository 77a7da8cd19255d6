//! Mock dataset for the station.
//!
//! Every page reads from a [`crate::state::DspStore`] seeded from these
//! functions. The dataset is pinned to [`today`] so derived statuses
//! (expiring documents, overdue training) stay stable across runs.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

mod drivers;
mod fleet;
mod operations;
mod safety;

pub use drivers::{coaching, documents, driver_alerts, drivers, training};
pub use fleet::{inspections, maintenance, utilization, vehicle_alerts, vehicles};
pub use operations::{availability, locations, payroll, rescues, routes, shifts, timesheets};
pub use safety::{assets, compliance, damage_reports, incidents, lost_packages, rts_packages};

/// The operating day the mock dataset describes
pub fn today() -> NaiveDate {
    date(2024, 6, 10)
}

pub(crate) fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

pub(crate) fn time(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap_or_default()
}

pub(crate) fn at(day: NaiveDate, h: u32, m: u32) -> NaiveDateTime {
    day.and_time(time(h, m))
}
