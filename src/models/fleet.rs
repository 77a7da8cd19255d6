use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Severity;

labeled_enum! {
    pub enum VehicleStatus {
        Active => ("active", "Active"),
        Maintenance => ("maintenance", "In Maintenance"),
        Grounded => ("grounded", "Grounded"),
        Inactive => ("inactive", "Inactive"),
    }
}

labeled_enum! {
    pub enum BrandingStatus {
        Branded => ("branded", "Branded"),
        Unbranded => ("unbranded", "Unbranded"),
        Pending => ("pending", "Branding Pending"),
    }
}

/// A delivery van in the fleet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: String,
    pub vin: String,
    pub model: String,
    pub plate: String,
    pub mileage: u32,
    pub branding: BrandingStatus,
    pub registration_expiry: NaiveDate,
    pub insurance_expiry: NaiveDate,
    pub status: VehicleStatus,
}

/// Payload produced by the add-vehicle form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewVehicle {
    pub vin: String,
    pub model: String,
    pub plate: String,
    pub mileage: u32,
    pub branding: BrandingStatus,
    pub registration_expiry: NaiveDate,
    pub insurance_expiry: NaiveDate,
}

labeled_enum! {
    pub enum VehicleAlertKind {
        RegistrationExpiry => ("registration_expiry", "Registration Expiry"),
        InsuranceExpiry => ("insurance_expiry", "Insurance Expiry"),
        MaintenanceDue => ("maintenance_due", "Maintenance Due"),
        InspectionFailed => ("inspection_failed", "Inspection Failed"),
        Recall => ("recall", "Recall"),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleAlert {
    pub id: String,
    pub vehicle_id: String,
    pub kind: VehicleAlertKind,
    pub message: String,
    pub severity: Severity,
    pub date: NaiveDate,
}

labeled_enum! {
    pub enum MaintenanceStatus {
        Scheduled => ("scheduled", "Scheduled"),
        InProgress => ("in_progress", "In Progress"),
        Completed => ("completed", "Completed"),
        Overdue => ("overdue", "Overdue"),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaintenanceRecord {
    pub id: String,
    pub vehicle_id: String,
    pub service_type: String,
    pub description: String,
    pub scheduled_date: NaiveDate,
    pub completed_date: Option<NaiveDate>,
    /// Only known once the work has been invoiced
    pub cost: Option<f64>,
    pub vendor: String,
    pub status: MaintenanceStatus,
}

/// Payload produced by the schedule-maintenance form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewMaintenance {
    pub vehicle_id: String,
    pub service_type: String,
    pub description: String,
    pub scheduled_date: NaiveDate,
    pub vendor: String,
    pub estimated_cost: Option<f64>,
}

labeled_enum! {
    pub enum InspectionKind {
        PreTrip => ("pre_trip", "Pre-Trip"),
        PostTrip => ("post_trip", "Post-Trip"),
        Dot => ("dot", "DOT Annual"),
    }
}

labeled_enum! {
    pub enum InspectionResult {
        Pass => ("pass", "Pass"),
        NeedsAttention => ("needs_attention", "Needs Attention"),
        Fail => ("fail", "Fail"),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InspectionRecord {
    pub id: String,
    pub vehicle_id: String,
    pub driver_id: String,
    pub date: NaiveDate,
    pub kind: InspectionKind,
    pub result: InspectionResult,
    pub defects: Vec<String>,
}

/// Usage of a single vehicle over the current reporting month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FleetUtilization {
    pub vehicle_id: String,
    pub days_used: u32,
    pub days_available: u32,
    pub miles_driven: u32,
    pub routes_completed: u32,
}

impl FleetUtilization {
    /// Share of available days the vehicle was on the road, in percent
    pub fn utilization_rate(&self) -> f64 {
        if self.days_available == 0 {
            return 0.0;
        }
        f64::from(self.days_used) / f64::from(self.days_available) * 100.0
    }
}
