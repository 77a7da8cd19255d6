use super::date;
use crate::models::*;

pub fn incidents() -> Vec<Incident> {
    use IncidentKind::*;
    use IncidentStatus::*;

    #[allow(clippy::too_many_arguments)]
    fn incident(
        id: &str,
        driver_id: &str,
        vehicle_id: Option<&str>,
        day: (u32, u32),
        kind: IncidentKind,
        severity: Severity,
        location: &str,
        description: &str,
        status: IncidentStatus,
    ) -> Incident {
        Incident {
            id: id.into(),
            driver_id: driver_id.into(),
            vehicle_id: vehicle_id.map(Into::into),
            date: date(2024, day.0, day.1),
            kind,
            severity,
            location: location.into(),
            description: description.into(),
            status,
        }
    }

    vec![
        incident("INC-001", "DRV-005", Some("VEH-005"), (6, 4), Accident, Severity::Medium, "Elm St & 3rd Ave", "Backed into mailbox at customer drop-off", UnderReview),
        incident("INC-002", "DRV-006", Some("VEH-006"), (6, 5), PropertyDamage, Severity::Low, "Lakeview Apartments", "Side mirror clipped gate", Resolved),
        incident("INC-003", "DRV-003", None, (6, 7), Injury, Severity::High, "1450 River Rd", "Dog bite on left forearm", Open),
        incident("INC-004", "DRV-001", Some("VEH-001"), (5, 28), NearMiss, Severity::Low, "Highway 75 on-ramp", "Hard brake to avoid merging car", Resolved),
        incident("INC-005", "DRV-010", Some("VEH-008"), (5, 19), TrafficViolation, Severity::Medium, "Main St school zone", "Speeding citation", Resolved),
        incident("INC-006", "DRV-007", Some("VEH-007"), (6, 9), Accident, Severity::Critical, "Oak Blvd & 9th St", "Rear-ended at red light, van towed", Open),
    ]
}

pub fn compliance() -> Vec<ComplianceItem> {
    use ComplianceStatus::*;

    let item = |id: &str, category: &str, requirement: &str, due: (i32, u32, u32), status| ComplianceItem {
        id: id.into(),
        category: category.into(),
        requirement: requirement.into(),
        due: date(due.0, due.1, due.2),
        status,
    };

    vec![
        item("CMP-001", "DOT", "Annual vehicle inspections filed", (2024, 12, 31), Compliant),
        item("CMP-002", "DOT", "Driver qualification files complete", (2024, 6, 30), AtRisk),
        item("CMP-003", "OSHA", "Heat illness prevention plan posted", (2024, 6, 1), Compliant),
        item("CMP-004", "OSHA", "Injury log (Form 300) up to date", (2024, 6, 15), AtRisk),
        item("CMP-005", "Insurance", "Certificates of insurance on file for all vans", (2024, 7, 1), NonCompliant),
        item("CMP-006", "HR", "I-9 verification for new hires", (2024, 6, 6), Compliant),
        item("CMP-007", "Drug & Alcohol", "Random testing pool quarterly draw", (2024, 6, 30), Compliant),
        item("CMP-008", "Fleet", "Registrations current for all active vans", (2024, 6, 30), NonCompliant),
    ]
}

pub fn rts_packages() -> Vec<RtsPackage> {
    use RtsReason::*;
    use RtsStatus::*;

    let package = |id: &str, tracking_id: &str, driver_id: &str, route_id: &str, reason, day: u32, status| RtsPackage {
        id: id.into(),
        tracking_id: tracking_id.into(),
        driver_id: driver_id.into(),
        route_id: route_id.into(),
        reason,
        date: date(2024, 6, day),
        status,
    };

    vec![
        package("RTS-001", "TBA304918271000", "DRV-001", "RTE-001", BusinessClosed, 9, ReturnedToStation),
        package("RTS-002", "TBA304918271001", "DRV-001", "RTE-001", CustomerUnavailable, 9, Reattempt),
        package("RTS-003", "TBA304918271002", "DRV-003", "RTE-003", NoAccess, 9, Pending),
        package("RTS-004", "TBA304918271003", "DRV-005", "RTE-005", AddressIssue, 8, Resolved),
        package("RTS-005", "TBA304918271004", "DRV-005", "RTE-005", OutOfTime, 9, ReturnedToStation),
        package("RTS-006", "TBA304918271005", "DRV-004", "RTE-004", Damaged, 8, Resolved),
        package("RTS-007", "TBA304918271006", "DRV-002", "RTE-002", BusinessClosed, 9, Pending),
        package("RTS-008", "TBA304918271007", "DRV-007", "RTE-008", NoAccess, 9, Reattempt),
    ]
}

pub fn lost_packages() -> Vec<LostPackage> {
    use LostStatus::*;

    let package = |id: &str, tracking_id: &str, driver_id: &str, route_id: &str, value: f64, day: u32, status| LostPackage {
        id: id.into(),
        tracking_id: tracking_id.into(),
        driver_id: driver_id.into(),
        route_id: route_id.into(),
        value,
        date: date(2024, 6, day),
        status,
    };

    vec![
        package("LST-001", "TBA304918260110", "DRV-005", "RTE-005", 129.99, 3, ConfirmedLost),
        package("LST-002", "TBA304918260111", "DRV-003", "RTE-003", 24.5, 6, Found),
        package("LST-003", "TBA304918260112", "DRV-006", "RTE-006", 349.0, 7, Investigating),
        package("LST-004", "TBA304918260113", "DRV-002", "RTE-002", 58.75, 8, Claimed),
        package("LST-005", "TBA304918260114", "DRV-005", "RTE-005", 17.99, 9, Investigating),
    ]
}

pub fn assets() -> Vec<Asset> {
    use AssetCategory::*;
    use AssetStatus::*;

    #[allow(clippy::too_many_arguments)]
    fn asset(
        id: &str,
        name: &str,
        category: AssetCategory,
        serial: &str,
        assigned_to: Option<&str>,
        value: f64,
        purchased: (i32, u32, u32),
        status: AssetStatus,
    ) -> Asset {
        Asset {
            id: id.into(),
            name: name.into(),
            category,
            serial: serial.into(),
            assigned_to: assigned_to.map(Into::into),
            value,
            purchase_date: date(purchased.0, purchased.1, purchased.2),
            status,
        }
    }

    vec![
        asset("AST-001", "Rabbit Phone #1", Phone, "RB-88410", Some("DRV-001"), 299.0, (2023, 2, 1), Assigned),
        asset("AST-002", "Rabbit Phone #2", Phone, "RB-88411", Some("DRV-002"), 299.0, (2023, 2, 1), Assigned),
        asset("AST-003", "Rabbit Phone #3", Phone, "RB-88412", None, 299.0, (2023, 2, 1), Damaged),
        asset("AST-004", "Rabbit Phone #4", Phone, "RB-88413", Some("DRV-004"), 299.0, (2023, 9, 15), Assigned),
        asset("AST-005", "Zebra Scanner", Scanner, "ZB-20114", None, 849.0, (2022, 11, 3), Available),
        asset("AST-006", "Power Bank 20k", PowerBank, "PB-3341", Some("DRV-003"), 45.0, (2024, 1, 10), Assigned),
        asset("AST-007", "Power Bank 20k", PowerBank, "PB-3342", None, 45.0, (2024, 1, 10), Available),
        asset("AST-008", "Folding Dolly", Dolly, "DL-0912", Some("DRV-005"), 129.0, (2023, 5, 22), Assigned),
        asset("AST-009", "Hi-Vis Vest (L)", SafetyVest, "VS-L-114", None, 18.0, (2024, 3, 1), Available),
        asset("AST-010", "Van Key Set VEH-006", Keys, "KY-4106", None, 220.0, (2022, 6, 30), Retired),
    ]
}

pub fn damage_reports() -> Vec<DamageReport> {
    use DamageStatus::*;

    let report = |id: &str, asset_id: &str, reported_by: &str, day: (u32, u32), description: &str, repair_cost: f64, status| DamageReport {
        id: id.into(),
        asset_id: asset_id.into(),
        reported_by: reported_by.into(),
        date: date(2024, day.0, day.1),
        description: description.into(),
        repair_cost,
        status,
    };

    vec![
        report("DMG-001", "AST-003", "DRV-006", (6, 5), "Screen shattered after drop", 149.0, Assessed),
        report("DMG-002", "AST-008", "DRV-005", (5, 21), "Wheel bracket bent", 35.0, Repaired),
        report("DMG-003", "AST-010", "DRV-010", (5, 18), "Key fob lost", 220.0, WrittenOff),
    ]
}
