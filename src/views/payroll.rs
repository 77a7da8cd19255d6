use chrono::NaiveDate;

use super::{matches_option, sum};
use crate::models::*;

/// A pay period, identified by its first day
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct PayPeriod {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl PayPeriod {
    pub fn label(&self) -> String {
        format!("{} – {}", self.start.format("%b %-d"), self.end.format("%b %-d, %Y"))
    }
}

/// Distinct pay periods, most recent first
pub fn pay_periods(entries: &[PayrollEntry]) -> Vec<PayPeriod> {
    let mut periods: Vec<_> = entries
        .iter()
        .map(|e| PayPeriod {
            start: e.period_start,
            end: e.period_end,
        })
        .collect();
    periods.sort_by(|a, b| b.cmp(a));
    periods.dedup();
    periods
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PayrollFilter {
    /// Start date of the selected period
    pub period: Option<NaiveDate>,
    pub status: Option<PayStatus>,
}

pub fn filter_payroll<'a>(entries: &'a [PayrollEntry], filter: &PayrollFilter) -> Vec<&'a PayrollEntry> {
    entries
        .iter()
        .filter(|e| matches_option(filter.period, e.period_start))
        .filter(|e| matches_option(filter.status, e.status))
        .collect()
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PayrollTotals {
    pub gross: f64,
    pub net: f64,
    pub hours: f64,
    pub overtime_hours: f64,
    pub pending: usize,
}

pub fn payroll_totals(entries: &[&PayrollEntry]) -> PayrollTotals {
    PayrollTotals {
        gross: sum(entries.iter().map(|e| e.gross())),
        net: sum(entries.iter().map(|e| e.net())),
        hours: sum(entries.iter().map(|e| e.total_hours())),
        overtime_hours: sum(entries.iter().map(|e| e.overtime_hours)),
        pending: entries
            .iter()
            .filter(|e| e.status == PayStatus::Pending)
            .count(),
    }
}

pub fn filter_timesheets(sheets: &[Timesheet], approved: Option<bool>) -> Vec<&Timesheet> {
    let mut rows: Vec<_> = sheets
        .iter()
        .filter(|s| matches_option(approved, s.approved))
        .collect();
    rows.sort_by(|a, b| b.date.cmp(&a.date).then(a.clock_in.cmp(&b.clock_in)));
    rows
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimesheetStats {
    pub worked_hours: f64,
    pub approved: usize,
    pub pending_approval: usize,
}

pub fn timesheet_stats(sheets: &[Timesheet]) -> TimesheetStats {
    let approved = sheets.iter().filter(|s| s.approved).count();

    TimesheetStats {
        worked_hours: sum(sheets.iter().map(Timesheet::worked_hours)),
        approved,
        pending_approval: sheets.len() - approved,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_periods_newest_first() {
        let periods = pay_periods(&data::payroll());
        assert_eq!(periods.len(), 2);
        assert!(periods[0].start > periods[1].start);
        assert_eq!(periods[0].label(), "May 26 – Jun 8, 2024");
    }

    #[test]
    fn test_totals_for_current_period() {
        let entries = data::payroll();
        let period = pay_periods(&entries)[0];
        let filter = PayrollFilter {
            period: Some(period.start),
            status: None,
        };
        let rows = filter_payroll(&entries, &filter);
        assert_eq!(rows.len(), 6);

        let totals = payroll_totals(&rows);
        assert!((totals.gross - 10_761.125).abs() < 1e-6);
        assert!((totals.gross - totals.net - 1_615.7).abs() < 1e-6);
        assert_eq!(totals.hours, 485.5);
        assert_eq!(totals.overtime_hours, 17.5);
        assert_eq!(totals.pending, 4);
    }

    #[test]
    fn test_timesheet_approval_filter() {
        let sheets = data::timesheets();
        let stats = timesheet_stats(&sheets);
        assert_eq!(filter_timesheets(&sheets, Some(false)).len(), stats.pending_approval);
        assert_eq!(filter_timesheets(&sheets, Some(true)).len(), stats.approved);
        assert_eq!(stats.approved, 3);
    }
}
