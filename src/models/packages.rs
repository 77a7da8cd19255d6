use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

labeled_enum! {
    pub enum RtsReason {
        BusinessClosed => ("business_closed", "Business Closed"),
        NoAccess => ("no_access", "No Secure Location / Access"),
        CustomerUnavailable => ("customer_unavailable", "Customer Unavailable"),
        AddressIssue => ("address_issue", "Bad Address"),
        Damaged => ("damaged", "Damaged"),
        OutOfTime => ("out_of_time", "Out of Drive Time"),
    }
}

labeled_enum! {
    pub enum RtsStatus {
        Pending => ("pending", "Pending"),
        Reattempt => ("reattempt", "Reattempt Scheduled"),
        ReturnedToStation => ("returned", "Returned to Station"),
        Resolved => ("resolved", "Resolved"),
    }
}

/// A package brought back to the station undelivered
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RtsPackage {
    pub id: String,
    pub tracking_id: String,
    pub driver_id: String,
    pub route_id: String,
    pub reason: RtsReason,
    pub date: NaiveDate,
    pub status: RtsStatus,
}

labeled_enum! {
    pub enum LostStatus {
        Investigating => ("investigating", "Investigating"),
        Found => ("found", "Found"),
        ConfirmedLost => ("confirmed_lost", "Confirmed Lost"),
        Claimed => ("claimed", "Claim Filed"),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LostPackage {
    pub id: String,
    pub tracking_id: String,
    pub driver_id: String,
    pub route_id: String,
    pub value: f64,
    pub date: NaiveDate,
    pub status: LostStatus,
}
