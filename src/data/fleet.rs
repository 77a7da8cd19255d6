use chrono::Datelike;

use super::{date, today};
use crate::models::*;

#[allow(clippy::too_many_arguments)]
fn vehicle(
    id: &str,
    vin: &str,
    model: &str,
    plate: &str,
    mileage: u32,
    branding: BrandingStatus,
    registration_expiry: (i32, u32, u32),
    insurance_expiry: (i32, u32, u32),
    status: VehicleStatus,
) -> Vehicle {
    Vehicle {
        id: id.into(),
        vin: vin.into(),
        model: model.into(),
        plate: plate.into(),
        mileage,
        branding,
        registration_expiry: date(registration_expiry.0, registration_expiry.1, registration_expiry.2),
        insurance_expiry: date(insurance_expiry.0, insurance_expiry.1, insurance_expiry.2),
        status,
    }
}

pub fn vehicles() -> Vec<Vehicle> {
    use BrandingStatus::*;
    use VehicleStatus::*;

    vec![
        vehicle("VEH-001", "1FTBW3XM5HKA10001", "Ford Transit 250", "DSP-4101", 48_210, Branded, (2025, 3, 31), (2024, 12, 31), Active),
        vehicle("VEH-002", "1FTBW3XM5HKA10002", "Ford Transit 250", "DSP-4102", 51_930, Branded, (2025, 3, 31), (2024, 12, 31), Active),
        vehicle("VEH-003", "3C6LRVDG2KE510003", "Ram ProMaster 2500", "DSP-4103", 72_480, Branded, (2024, 6, 30), (2024, 12, 31), Maintenance),
        vehicle("VEH-004", "W1Y4ECHY1MT510004", "Mercedes Sprinter 2500", "DSP-4104", 33_015, Branded, (2025, 1, 15), (2024, 7, 1), Active),
        vehicle("VEH-005", "W1Y4ECHY1MT510005", "Mercedes Sprinter 2500", "DSP-4105", 29_870, Pending, (2025, 1, 15), (2024, 12, 31), Active),
        vehicle("VEH-006", "3C6LRVDG2KE510006", "Ram ProMaster 2500", "DSP-4106", 91_260, Branded, (2024, 5, 31), (2024, 12, 31), Grounded),
        vehicle("VEH-007", "1FTBW3XM5HKA10007", "Ford Transit 250", "DSP-4107", 12_440, Unbranded, (2025, 5, 31), (2025, 5, 31), Active),
        vehicle("VEH-008", "1FTBW3XM5HKA10008", "Ford Transit 250", "DSP-4108", 64_105, Branded, (2024, 11, 30), (2024, 12, 31), Inactive),
    ]
}

pub fn vehicle_alerts() -> Vec<VehicleAlert> {
    let alert = |id: &str, vehicle_id: &str, kind, message: &str, severity, day: u32| VehicleAlert {
        id: id.into(),
        vehicle_id: vehicle_id.into(),
        kind,
        message: message.into(),
        severity,
        date: date(2024, 6, day),
    };

    vec![
        alert("VAL-001", "VEH-003", VehicleAlertKind::RegistrationExpiry, "Registration expires June 30", Severity::Medium, 1),
        alert("VAL-002", "VEH-004", VehicleAlertKind::InsuranceExpiry, "Insurance policy renews July 1", Severity::High, 3),
        alert("VAL-003", "VEH-006", VehicleAlertKind::RegistrationExpiry, "Registration expired, vehicle grounded", Severity::Critical, 1),
        alert("VAL-004", "VEH-002", VehicleAlertKind::MaintenanceDue, "Oil change due at 52,000 mi", Severity::Low, 7),
        alert("VAL-005", "VEH-006", VehicleAlertKind::InspectionFailed, "Brake pads below minimum", Severity::High, 5),
        alert("VAL-006", "VEH-001", VehicleAlertKind::Recall, "Manufacturer recall: seat belt buckle", Severity::Medium, 9),
    ]
}

pub fn maintenance() -> Vec<MaintenanceRecord> {
    use MaintenanceStatus::*;

    #[allow(clippy::too_many_arguments)]
    fn record(
        id: &str,
        vehicle_id: &str,
        service_type: &str,
        description: &str,
        scheduled: (u32, u32),
        completed: Option<(u32, u32)>,
        cost: Option<f64>,
        vendor: &str,
        status: MaintenanceStatus,
    ) -> MaintenanceRecord {
        MaintenanceRecord {
            id: id.into(),
            vehicle_id: vehicle_id.into(),
            service_type: service_type.into(),
            description: description.into(),
            scheduled_date: date(2024, scheduled.0, scheduled.1),
            completed_date: completed.map(|(m, d)| date(2024, m, d)),
            cost,
            vendor: vendor.into(),
            status,
        }
    }

    vec![
        record("MNT-001", "VEH-001", "Oil Change", "Synthetic oil and filter", (5, 2), Some((5, 2)), Some(89.99), "Fleet Lube Express", Completed),
        record("MNT-002", "VEH-002", "Tire Rotation", "Rotate and balance all four", (5, 14), Some((5, 15)), Some(65.0), "Discount Tire Fleet", Completed),
        record("MNT-003", "VEH-003", "Transmission Service", "Slipping in 3rd gear", (6, 6), None, Some(1_850.0), "ProMaster Service Center", InProgress),
        record("MNT-004", "VEH-006", "Brake Replacement", "Front pads and rotors", (6, 5), None, None, "Brake Masters", Scheduled),
        record("MNT-005", "VEH-004", "Preventive Maintenance", "30k mile service", (5, 20), Some((5, 21)), Some(412.5), "Sprinter Dealer", Completed),
        record("MNT-006", "VEH-005", "Windshield", "Chip repair", (5, 28), Some((5, 28)), None, "Safelite Fleet", Completed),
        record("MNT-007", "VEH-008", "Battery", "Battery failed load test", (5, 30), None, None, "Fleet Lube Express", Overdue),
        record("MNT-008", "VEH-002", "Oil Change", "Due at 52,000 mi", (6, 14), None, Some(89.99), "Fleet Lube Express", Scheduled),
    ]
}

pub fn inspections() -> Vec<InspectionRecord> {
    use InspectionKind::*;
    use InspectionResult::*;

    let inspection = |id: &str, vehicle_id: &str, driver_id: &str, day: u32, kind, result, defects: &[&str]| {
        InspectionRecord {
            id: id.into(),
            vehicle_id: vehicle_id.into(),
            driver_id: driver_id.into(),
            date: date(2024, 6, day),
            kind,
            result,
            defects: defects.iter().map(|d| d.to_string()).collect(),
        }
    };

    vec![
        inspection("INS-001", "VEH-001", "DRV-001", 10, PreTrip, Pass, &[]),
        inspection("INS-002", "VEH-002", "DRV-002", 10, PreTrip, Pass, &[]),
        inspection("INS-003", "VEH-004", "DRV-003", 10, PreTrip, NeedsAttention, &["Low washer fluid"]),
        inspection("INS-004", "VEH-005", "DRV-005", 10, PreTrip, Pass, &[]),
        inspection("INS-005", "VEH-006", "DRV-006", 5, PostTrip, Fail, &["Brake pads worn", "Grinding noise"]),
        inspection("INS-006", "VEH-007", "DRV-007", 9, PostTrip, Pass, &[]),
        inspection("INS-007", "VEH-003", "DRV-004", 3, Dot, Fail, &["Transmission slipping"]),
        inspection("INS-008", "VEH-001", "DRV-001", 9, PostTrip, Pass, &[]),
    ]
}

pub fn utilization() -> Vec<FleetUtilization> {
    // month to date
    let days_available = today().day();
    let usage = |vehicle_id: &str, days_used: u32, miles_driven: u32, routes_completed: u32| FleetUtilization {
        vehicle_id: vehicle_id.into(),
        days_used,
        days_available,
        miles_driven,
        routes_completed,
    };

    vec![
        usage("VEH-001", 9, 1_142, 9),
        usage("VEH-002", 8, 1_018, 8),
        usage("VEH-003", 4, 466, 4),
        usage("VEH-004", 9, 1_205, 9),
        usage("VEH-005", 7, 874, 7),
        usage("VEH-006", 3, 352, 3),
        usage("VEH-007", 6, 731, 6),
        usage("VEH-008", 0, 0, 0),
    ]
}
