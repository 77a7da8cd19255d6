use chrono::{NaiveDate, Weekday};

use super::{matches_option, sum};
use crate::models::*;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShiftFilter {
    pub date: Option<NaiveDate>,
    pub wave: Option<Wave>,
    pub status: Option<ShiftStatus>,
}

impl ShiftFilter {
    pub fn matches(&self, shift: &Shift) -> bool {
        matches_option(self.date, shift.date)
            && matches_option(self.wave, shift.wave)
            && matches_option(self.status, shift.status)
    }
}

/// Matching shifts in chronological order
pub fn filter_shifts<'a>(shifts: &'a [Shift], filter: &ShiftFilter) -> Vec<&'a Shift> {
    let mut rows: Vec<_> = shifts.iter().filter(|s| filter.matches(s)).collect();
    rows.sort_by_key(|s| (s.date, s.start));
    rows
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShiftStats {
    pub shifts: usize,
    pub scheduled_hours: f64,
    pub with_backup: usize,
    pub no_shows: usize,
    pub cancelled: usize,
}

/// Stats for one day's shifts; cancelled shifts contribute no hours
pub fn shift_stats(shifts: &[Shift], day: NaiveDate) -> ShiftStats {
    let on_day = || shifts.iter().filter(|s| s.date == day);

    ShiftStats {
        shifts: on_day().count(),
        scheduled_hours: sum(on_day()
            .filter(|s| s.status != ShiftStatus::Cancelled)
            .map(Shift::hours)),
        with_backup: on_day().filter(|s| s.backup_driver_id.is_some()).count(),
        no_shows: on_day().filter(|s| s.status == ShiftStatus::NoShow).count(),
        cancelled: on_day().filter(|s| s.status == ShiftStatus::Cancelled).count(),
    }
}

/// Distinct shift dates, ascending, for the date picker
pub fn shift_dates(shifts: &[Shift]) -> Vec<NaiveDate> {
    let mut dates: Vec<_> = shifts.iter().map(|s| s.date).collect();
    dates.sort();
    dates.dedup();
    dates
}

pub fn filter_routes(routes: &[DeliveryRoute], status: Option<RouteStatus>) -> Vec<&DeliveryRoute> {
    routes
        .iter()
        .filter(|r| matches_option(status, r.status))
        .collect()
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RouteStats {
    pub routes: usize,
    pub total_stops: u32,
    pub total_packages: u32,
    pub packages_per_stop: f64,
    /// Routes with no driver yet
    pub unassigned: usize,
}

pub fn route_stats(routes: &[DeliveryRoute]) -> RouteStats {
    let total_stops = routes.iter().map(|r| r.stops).sum();
    let total_packages = routes.iter().map(|r| r.packages).sum();

    RouteStats {
        routes: routes.len(),
        total_stops,
        total_packages,
        packages_per_stop: if total_stops == 0 {
            0.0
        } else {
            f64::from(total_packages) / f64::from(total_stops)
        },
        unassigned: routes
            .iter()
            .filter(|r| r.status == RouteStatus::Planned)
            .count(),
    }
}

pub const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Number of drivers available on each day of the week, Monday first
pub fn availability_by_weekday(entries: &[Availability]) -> Vec<(Weekday, usize)> {
    WEEK.iter()
        .map(|day| (*day, entries.iter().filter(|e| e.days.contains(day)).count()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_today_shift_stats() {
        let shifts = data::shifts();
        let stats = shift_stats(&shifts, data::today());
        assert_eq!(stats.shifts, 6);
        assert_eq!(stats.scheduled_hours, 60.0);
        assert_eq!(stats.with_backup, 2);
        assert_eq!(stats.no_shows, 0);
    }

    #[test]
    fn test_filter_by_date_and_wave() {
        let shifts = data::shifts();
        let filter = ShiftFilter {
            date: Some(data::today()),
            wave: Some(Wave::Third),
            status: None,
        };
        let rows = filter_shifts(&shifts, &filter);
        let ids: Vec<_> = rows.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["SHF-005", "SHF-006"]);
    }

    #[test]
    fn test_rows_are_chronological() {
        let shifts = data::shifts();
        let rows = filter_shifts(&shifts, &ShiftFilter::default());
        assert_eq!(rows.len(), shifts.len());
        assert!(rows
            .windows(2)
            .all(|w| (w[0].date, w[0].start) <= (w[1].date, w[1].start)));
        assert_eq!(shift_dates(&shifts).len(), 4);
    }

    #[test]
    fn test_route_stats() {
        let stats = route_stats(&data::routes());
        assert_eq!(stats.total_packages, 1949);
        assert_eq!(stats.total_stops, 1143);
        assert_eq!(stats.unassigned, 1);
    }

    #[test]
    fn test_availability_by_weekday() {
        let counts = availability_by_weekday(&data::availability());
        assert_eq!(counts[0], (Weekday::Mon, 7));
        assert_eq!(counts[6], (Weekday::Sun, 3));
    }
}
