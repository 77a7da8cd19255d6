//! One component per route. Pages own their filter and modal signals, read
//! the shared store and render through the pure functions in [`crate::views`].

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

mod analytics;
mod dispatch;
mod drivers;
mod fleet;
mod inventory;
mod login;
mod not_found;
mod overview;
mod packages;
mod payroll;
mod safety;
mod scheduling;

pub use analytics::AnalyticsPage;
pub use dispatch::{DispatchPage, RescuePage};
pub use drivers::{DocumentsPage, DriverAlertsPage, DriversPage, PerformancePage, TrainingPage};
pub use fleet::{InspectionsPage, MaintenancePage, UtilizationPage, VehicleAlertsPage, VehiclesPage};
pub use inventory::{AssetsPage, DamageReportsPage};
pub use login::LoginPage;
pub use not_found::NotFound;
pub use overview::OverviewPage;
pub use packages::{LostPackagesPage, ReturnToStationPage};
pub use payroll::{PayrollPage, TimesheetsPage};
pub use safety::{CoachingPage, CompliancePage, IncidentsPage};
pub use scheduling::{AvailabilityPage, RoutesPage, ShiftsPage};

pub(crate) fn fmt_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

pub(crate) fn fmt_time(time: NaiveTime) -> String {
    time.format("%-I:%M %p").to_string()
}

pub(crate) fn fmt_timestamp(at: NaiveDateTime) -> String {
    at.format("%b %-d, %-I:%M %p").to_string()
}

pub(crate) fn fmt_score(score: f64) -> String {
    format!("{:.1}", score)
}
