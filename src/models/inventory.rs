use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

labeled_enum! {
    pub enum AssetCategory {
        Phone => ("phone", "Phone"),
        Scanner => ("scanner", "Scanner"),
        PowerBank => ("power_bank", "Power Bank"),
        Dolly => ("dolly", "Dolly"),
        SafetyVest => ("safety_vest", "Safety Vest"),
        Keys => ("keys", "Key Set"),
    }
}

labeled_enum! {
    pub enum AssetStatus {
        Available => ("available", "Available"),
        Assigned => ("assigned", "Assigned"),
        Damaged => ("damaged", "Damaged"),
        Retired => ("retired", "Retired"),
    }
}

/// Station equipment issued to drivers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    pub id: String,
    pub name: String,
    pub category: AssetCategory,
    pub serial: String,
    pub assigned_to: Option<String>,
    pub value: f64,
    pub purchase_date: NaiveDate,
    pub status: AssetStatus,
}

labeled_enum! {
    pub enum DamageStatus {
        Reported => ("reported", "Reported"),
        Assessed => ("assessed", "Assessed"),
        Repaired => ("repaired", "Repaired"),
        WrittenOff => ("written_off", "Written Off"),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DamageReport {
    pub id: String,
    pub asset_id: String,
    pub reported_by: String,
    pub date: NaiveDate,
    pub description: String,
    pub repair_cost: f64,
    pub status: DamageStatus,
}

/// Payload produced by the report-damage form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewDamageReport {
    pub asset_id: String,
    pub reported_by: String,
    pub date: NaiveDate,
    pub description: String,
    pub repair_cost: f64,
}
