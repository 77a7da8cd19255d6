use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

labeled_enum! {
    pub enum DriverActivity {
        AtStation => ("at_station", "At Station"),
        OnRoute => ("on_route", "On Route"),
        Break => ("break", "On Break"),
        Returning => ("returning", "Returning"),
        Offline => ("offline", "Offline"),
    }
}

/// Last reported position of a driver on the road
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriverLocation {
    pub driver_id: String,
    pub route_id: String,
    pub lat: f64,
    pub lng: f64,
    pub last_update: NaiveDateTime,
    pub activity: DriverActivity,
    pub stops_completed: u32,
    pub stops_total: u32,
}

impl DriverLocation {
    pub fn progress(&self) -> f64 {
        if self.stops_total == 0 {
            return 0.0;
        }
        f64::from(self.stops_completed) / f64::from(self.stops_total) * 100.0
    }
}

labeled_enum! {
    pub enum RescueStatus {
        Requested => ("requested", "Requested"),
        Dispatched => ("dispatched", "Dispatched"),
        InProgress => ("in_progress", "In Progress"),
        Completed => ("completed", "Completed"),
    }
}

impl RescueStatus {
    /// Next step of a rescue; `None` once completed
    pub fn next(self) -> Option<Self> {
        match self {
            RescueStatus::Requested => Some(RescueStatus::Dispatched),
            RescueStatus::Dispatched => Some(RescueStatus::InProgress),
            RescueStatus::InProgress => Some(RescueStatus::Completed),
            RescueStatus::Completed => None,
        }
    }
}

/// A second driver taking packages off a struggling route
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RescueOperation {
    pub id: String,
    pub route_id: String,
    pub driver_id: String,
    pub rescuer_id: Option<String>,
    pub packages: u32,
    pub reason: String,
    pub status: RescueStatus,
    pub requested_at: NaiveDateTime,
}

/// Payload produced by the request-rescue form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewRescue {
    pub route_id: String,
    pub driver_id: String,
    pub rescuer_id: Option<String>,
    pub packages: u32,
    pub reason: String,
    pub requested_at: NaiveDateTime,
}
