use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Severity;

labeled_enum! {
    pub enum DriverStatus {
        Active => ("active", "Active"),
        Onboarding => ("onboarding", "Onboarding"),
        OnLeave => ("on_leave", "On Leave"),
        Terminated => ("terminated", "Terminated"),
    }
}

labeled_enum! {
    pub enum BackgroundCheck {
        Clear => ("clear", "Clear"),
        Pending => ("pending", "Pending"),
        Flagged => ("flagged", "Flagged"),
    }
}

labeled_enum! {
    pub enum MentorStatus {
        NotEnrolled => ("not_enrolled", "Not Enrolled"),
        Enrolled => ("enrolled", "Enrolled"),
        Graduated => ("graduated", "Graduated"),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Driver {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub license_number: String,
    pub license_state: String,
    pub license_expiry: NaiveDate,
    pub background_check: BackgroundCheck,
    pub mentor_status: MentorStatus,
    /// Delivery completion score, 0-100
    pub delivery_score: f64,
    /// Mentor safety score, 0-100
    pub safety_score: f64,
    pub hire_date: NaiveDate,
    pub status: DriverStatus,
}

/// Payload produced by the add-driver form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewDriver {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub license_number: String,
    pub license_state: String,
    pub license_expiry: NaiveDate,
    pub hire_date: NaiveDate,
}

labeled_enum! {
    pub enum DriverAlertKind {
        LicenseExpiry => ("license_expiry", "License Expiry"),
        MedicalCardExpiry => ("medical_card_expiry", "Medical Card Expiry"),
        TrainingOverdue => ("training_overdue", "Training Overdue"),
        LowScore => ("low_score", "Low Score"),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriverAlert {
    pub id: String,
    pub driver_id: String,
    pub kind: DriverAlertKind,
    pub message: String,
    pub severity: Severity,
    pub date: NaiveDate,
}

labeled_enum! {
    pub enum DocumentType {
        License => ("license", "Driver License"),
        MedicalCard => ("medical_card", "DOT Medical Card"),
        BackgroundCheck => ("background_check", "Background Check"),
        DrugTest => ("drug_test", "Drug Test"),
        I9 => ("i9", "I-9"),
    }
}

labeled_enum! {
    /// Validity of a document relative to a reference date
    pub enum DocumentStatus {
        Valid => ("valid", "Valid"),
        ExpiringSoon => ("expiring_soon", "Expiring Soon"),
        Expired => ("expired", "Expired"),
    }
}

/// Window in which a document is flagged as expiring soon
pub const EXPIRY_WARNING_DAYS: i64 = 30;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriverDocument {
    pub id: String,
    pub driver_id: String,
    pub doc_type: DocumentType,
    pub issued: NaiveDate,
    /// `None` for documents that never expire (e.g. I-9)
    pub expiry: Option<NaiveDate>,
}

impl DriverDocument {
    pub fn status(&self, today: NaiveDate) -> DocumentStatus {
        match self.expiry {
            None => DocumentStatus::Valid,
            Some(expiry) if expiry < today => DocumentStatus::Expired,
            Some(expiry) if (expiry - today).num_days() <= EXPIRY_WARNING_DAYS => {
                DocumentStatus::ExpiringSoon
            }
            Some(_) => DocumentStatus::Valid,
        }
    }
}

labeled_enum! {
    pub enum TrainingStatus {
        NotStarted => ("not_started", "Not Started"),
        InProgress => ("in_progress", "In Progress"),
        Completed => ("completed", "Completed"),
        Overdue => ("overdue", "Overdue"),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriverTraining {
    pub id: String,
    pub driver_id: String,
    pub course: String,
    pub assigned: NaiveDate,
    pub due: NaiveDate,
    pub started: bool,
    pub completed: Option<NaiveDate>,
    pub score: Option<f64>,
}

impl DriverTraining {
    pub fn status(&self, today: NaiveDate) -> TrainingStatus {
        if self.completed.is_some() {
            TrainingStatus::Completed
        } else if self.due < today {
            TrainingStatus::Overdue
        } else if self.started {
            TrainingStatus::InProgress
        } else {
            TrainingStatus::NotStarted
        }
    }
}

labeled_enum! {
    pub enum CoachingStatus {
        Scheduled => ("scheduled", "Scheduled"),
        Completed => ("completed", "Completed"),
        FollowUp => ("follow_up", "Follow-Up Required"),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SafetyCoaching {
    pub id: String,
    pub driver_id: String,
    pub topic: String,
    pub coach: String,
    pub date: NaiveDate,
    pub status: CoachingStatus,
    pub notes: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, d).unwrap()
    }

    fn document(expiry: Option<NaiveDate>) -> DriverDocument {
        DriverDocument {
            id: "DOC-001".into(),
            driver_id: "DRV-001".into(),
            doc_type: DocumentType::License,
            issued: day(1),
            expiry,
        }
    }

    #[test]
    fn test_document_status_boundaries() {
        let today = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();

        assert_eq!(document(None).status(today), DocumentStatus::Valid);
        assert_eq!(document(Some(day(30))).status(today), DocumentStatus::Valid);
        // exactly 30 days out still warns
        assert_eq!(document(Some(day(1).pred_opt().unwrap())).status(today), DocumentStatus::ExpiringSoon);
        assert_eq!(document(Some(today)).status(today), DocumentStatus::ExpiringSoon);
        assert_eq!(document(Some(today.pred_opt().unwrap())).status(today), DocumentStatus::Expired);
    }

    #[test]
    fn test_training_status_precedence() {
        let mut training = DriverTraining {
            id: "TRN-001".into(),
            driver_id: "DRV-001".into(),
            course: "Defensive Driving".into(),
            assigned: day(1),
            due: day(10),
            started: true,
            completed: None,
            score: None,
        };

        assert_eq!(training.status(day(5)), TrainingStatus::InProgress);
        assert_eq!(training.status(day(11)), TrainingStatus::Overdue);

        training.completed = Some(day(12));
        assert_eq!(training.status(day(20)), TrainingStatus::Completed);

        training.completed = None;
        training.started = false;
        assert_eq!(training.status(day(5)), TrainingStatus::NotStarted);
    }
}
