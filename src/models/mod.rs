//! Record types for every dashboard domain.
//!
//! Records are plain values identified by a string id. Status fields are
//! closed enums generated by [`labeled_enum!`] so that filter dropdowns can
//! enumerate them and round-trip a `<select>` value through [`Labeled`].

/// A closed set of values with a stable key (used in `<select>` values and
/// serde) and a human readable label.
pub trait Labeled: Copy + PartialEq + 'static {
    fn all() -> &'static [Self];
    fn key(&self) -> &'static str;
    fn label(&self) -> &'static str;
    fn from_key(key: &str) -> Option<Self>;
}

macro_rules! labeled_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($variant:ident => ($key:literal, $label:literal)),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, ::serde::Serialize, ::serde::Deserialize)]
        pub enum $name {
            $(#[serde(rename = $key)] $variant),+
        }

        impl $crate::models::Labeled for $name {
            fn all() -> &'static [Self] {
                &[$($name::$variant),+]
            }

            fn key(&self) -> &'static str {
                match self {
                    $($name::$variant => $key),+
                }
            }

            fn label(&self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }

            fn from_key(key: &str) -> Option<Self> {
                match key {
                    $($key => Some($name::$variant),)+
                    _ => None,
                }
            }
        }
    };
}

pub(crate) use labeled_enum;

pub mod dispatch;
pub mod drivers;
pub mod fleet;
pub mod inventory;
pub mod packages;
pub mod payroll;
pub mod safety;
pub mod scheduling;

pub use dispatch::{DriverActivity, DriverLocation, NewRescue, RescueOperation, RescueStatus};
pub use drivers::{
    BackgroundCheck, CoachingStatus, DocumentStatus, DocumentType, Driver, DriverAlert,
    DriverAlertKind, DriverDocument, DriverStatus, DriverTraining, MentorStatus, NewDriver,
    SafetyCoaching, TrainingStatus, EXPIRY_WARNING_DAYS,
};
pub use fleet::{
    BrandingStatus, FleetUtilization, InspectionKind, InspectionRecord, InspectionResult,
    MaintenanceRecord, MaintenanceStatus, NewMaintenance, NewVehicle, Vehicle, VehicleAlert,
    VehicleAlertKind, VehicleStatus,
};
pub use inventory::{Asset, AssetCategory, AssetStatus, DamageReport, DamageStatus, NewDamageReport};
pub use packages::{LostPackage, LostStatus, RtsPackage, RtsReason, RtsStatus};
pub use payroll::{PayStatus, PayrollEntry, Timesheet};
pub use safety::{
    ComplianceItem, ComplianceStatus, Incident, IncidentKind, IncidentStatus, NewIncident,
};
pub use scheduling::{Availability, DeliveryRoute, NewShift, RouteStatus, Shift, ShiftStatus, Wave};

labeled_enum! {
    /// Severity shared by vehicle alerts, driver alerts and incidents.
    pub enum Severity {
        Low => ("low", "Low"),
        Medium => ("medium", "Medium"),
        High => ("high", "High"),
        Critical => ("critical", "Critical"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_from_key_round_trips_every_variant() {
        for severity in Severity::all() {
            assert_eq!(Severity::from_key(severity.key()), Some(*severity));
        }
        assert_eq!(Severity::from_key("unknown"), None);
    }

    #[test]
    fn test_serde_uses_key() {
        let json = serde_json::to_string(&Severity::Critical).unwrap();
        assert_eq!(json, r#""critical""#);

        let parsed: Severity = serde_json::from_str(r#""medium""#).unwrap();
        assert_eq!(parsed, Severity::Medium);
    }

    #[test]
    fn test_expiry_warning_window() {
        assert_eq!(EXPIRY_WARNING_DAYS, 30);
    }
}
