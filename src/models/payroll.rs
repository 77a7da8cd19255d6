use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Multiplier applied to the hourly rate for overtime hours
pub const OVERTIME_MULTIPLIER: f64 = 1.5;

labeled_enum! {
    pub enum PayStatus {
        Pending => ("pending", "Pending"),
        Approved => ("approved", "Approved"),
        Paid => ("paid", "Paid"),
    }
}

/// Pay for one driver over one pay period.
///
/// Only gross/net arithmetic is modeled; withholding is out of scope and
/// `deductions` is whatever flat amount the record carries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayrollEntry {
    pub id: String,
    pub driver_id: String,
    pub period_start: NaiveDate,
    pub period_end: NaiveDate,
    pub regular_hours: f64,
    pub overtime_hours: f64,
    pub hourly_rate: f64,
    pub bonuses: f64,
    pub deductions: f64,
    pub status: PayStatus,
}

impl PayrollEntry {
    pub fn gross(&self) -> f64 {
        self.regular_hours * self.hourly_rate
            + self.overtime_hours * self.hourly_rate * OVERTIME_MULTIPLIER
            + self.bonuses
    }

    pub fn net(&self) -> f64 {
        self.gross() - self.deductions
    }

    pub fn total_hours(&self) -> f64 {
        self.regular_hours + self.overtime_hours
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Timesheet {
    pub id: String,
    pub driver_id: String,
    pub date: NaiveDate,
    pub clock_in: NaiveTime,
    pub clock_out: NaiveTime,
    pub break_minutes: u32,
    pub approved: bool,
}

impl Timesheet {
    /// Hours on the clock minus unpaid break
    pub fn worked_hours(&self) -> f64 {
        let minutes = (self.clock_out - self.clock_in).num_minutes() - i64::from(self.break_minutes);
        minutes.max(0) as f64 / 60.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gross_and_net() {
        let entry = PayrollEntry {
            id: "PAY-001".into(),
            driver_id: "DRV-001".into(),
            period_start: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            period_end: NaiveDate::from_ymd_opt(2024, 6, 14).unwrap(),
            regular_hours: 80.0,
            overtime_hours: 4.0,
            hourly_rate: 20.0,
            bonuses: 50.0,
            deductions: 100.0,
            status: PayStatus::Pending,
        };

        assert_eq!(entry.gross(), 1600.0 + 120.0 + 50.0);
        assert_eq!(entry.net(), 1670.0);
        assert_eq!(entry.total_hours(), 84.0);
    }

    #[test]
    fn test_worked_hours_subtracts_break() {
        let sheet = Timesheet {
            id: "TS-001".into(),
            driver_id: "DRV-001".into(),
            date: NaiveDate::from_ymd_opt(2024, 6, 3).unwrap(),
            clock_in: NaiveTime::from_hms_opt(7, 0, 0).unwrap(),
            clock_out: NaiveTime::from_hms_opt(17, 30, 0).unwrap(),
            break_minutes: 30,
            approved: false,
        };

        assert_eq!(sheet.worked_hours(), 10.0);
    }
}
