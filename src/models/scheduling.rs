use chrono::{NaiveDate, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

labeled_enum! {
    /// Station load-out wave a shift departs with
    pub enum Wave {
        First => ("wave_1", "Wave 1"),
        Second => ("wave_2", "Wave 2"),
        Third => ("wave_3", "Wave 3"),
    }
}

labeled_enum! {
    pub enum ShiftStatus {
        Scheduled => ("scheduled", "Scheduled"),
        Confirmed => ("confirmed", "Confirmed"),
        InProgress => ("in_progress", "In Progress"),
        Completed => ("completed", "Completed"),
        Cancelled => ("cancelled", "Cancelled"),
        NoShow => ("no_show", "No Show"),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shift {
    pub id: String,
    pub driver_id: String,
    pub date: NaiveDate,
    pub start: NaiveTime,
    pub end: NaiveTime,
    pub wave: Wave,
    pub route_id: Option<String>,
    pub backup_driver_id: Option<String>,
    pub status: ShiftStatus,
}

impl Shift {
    /// Scheduled length in hours; overnight shifts wrap past midnight
    pub fn hours(&self) -> f64 {
        let minutes = (self.end - self.start).num_minutes();
        let minutes = if minutes < 0 { minutes + 24 * 60 } else { minutes };
        minutes as f64 / 60.0
    }
}

/// Payload produced by the schedule-shift form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewShift {
    pub driver_id: String,
    pub date: NaiveDate,
    pub start: NaiveTime,
    pub end: NaiveTime,
    pub wave: Wave,
    pub route_id: Option<String>,
    pub backup_driver_id: Option<String>,
}

labeled_enum! {
    pub enum RouteStatus {
        Planned => ("planned", "Planned"),
        Assigned => ("assigned", "Assigned"),
        InProgress => ("in_progress", "In Progress"),
        Completed => ("completed", "Completed"),
    }
}

/// A delivery route as issued by the station for the day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryRoute {
    pub id: String,
    pub code: String,
    pub zone: String,
    pub stops: u32,
    pub packages: u32,
    pub estimated_hours: f64,
    pub status: RouteStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Availability {
    pub driver_id: String,
    pub days: Vec<Weekday>,
    pub preferred_wave: Wave,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shift(start: (u32, u32), end: (u32, u32)) -> Shift {
        Shift {
            id: "SHF-001".into(),
            driver_id: "DRV-001".into(),
            date: NaiveDate::from_ymd_opt(2024, 6, 3).unwrap(),
            start: NaiveTime::from_hms_opt(start.0, start.1, 0).unwrap(),
            end: NaiveTime::from_hms_opt(end.0, end.1, 0).unwrap(),
            wave: Wave::First,
            route_id: None,
            backup_driver_id: None,
            status: ShiftStatus::Scheduled,
        }
    }

    #[test]
    fn test_shift_hours() {
        assert_eq!(shift((7, 0), (17, 30)).hours(), 10.5);
    }

    #[test]
    fn test_shift_hours_wraps_midnight() {
        assert_eq!(shift((22, 0), (2, 0)).hours(), 4.0);
    }
}
