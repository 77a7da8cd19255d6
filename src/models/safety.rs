use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Severity;

labeled_enum! {
    pub enum IncidentKind {
        Accident => ("accident", "Accident"),
        NearMiss => ("near_miss", "Near Miss"),
        Injury => ("injury", "Injury"),
        PropertyDamage => ("property_damage", "Property Damage"),
        TrafficViolation => ("traffic_violation", "Traffic Violation"),
    }
}

labeled_enum! {
    pub enum IncidentStatus {
        Open => ("open", "Open"),
        UnderReview => ("under_review", "Under Review"),
        Resolved => ("resolved", "Resolved"),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Incident {
    pub id: String,
    pub driver_id: String,
    pub vehicle_id: Option<String>,
    pub date: NaiveDate,
    pub kind: IncidentKind,
    pub severity: Severity,
    pub location: String,
    pub description: String,
    pub status: IncidentStatus,
}

/// Payload produced by the report-incident form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewIncident {
    pub driver_id: String,
    pub vehicle_id: Option<String>,
    pub date: NaiveDate,
    pub kind: IncidentKind,
    pub severity: Severity,
    pub location: String,
    pub description: String,
}

labeled_enum! {
    pub enum ComplianceStatus {
        Compliant => ("compliant", "Compliant"),
        AtRisk => ("at_risk", "At Risk"),
        NonCompliant => ("non_compliant", "Non-Compliant"),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceItem {
    pub id: String,
    pub category: String,
    pub requirement: String,
    pub due: NaiveDate,
    pub status: ComplianceStatus,
}
