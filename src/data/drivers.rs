use super::date;
use crate::models::*;

#[allow(clippy::too_many_arguments)]
fn driver(
    id: &str,
    name: &str,
    phone: &str,
    license: (&str, &str, (i32, u32, u32)),
    background_check: BackgroundCheck,
    mentor_status: MentorStatus,
    scores: (f64, f64),
    hire_date: (i32, u32, u32),
    status: DriverStatus,
) -> Driver {
    let email = format!("{}@dsp-example.com", name.to_lowercase().replace(' ', "."));
    Driver {
        id: id.into(),
        name: name.into(),
        email,
        phone: phone.into(),
        license_number: license.0.into(),
        license_state: license.1.into(),
        license_expiry: date(license.2 .0, license.2 .1, license.2 .2),
        background_check,
        mentor_status,
        delivery_score: scores.0,
        safety_score: scores.1,
        hire_date: date(hire_date.0, hire_date.1, hire_date.2),
        status,
    }
}

pub fn drivers() -> Vec<Driver> {
    use BackgroundCheck::*;
    use DriverStatus::*;
    use MentorStatus::*;

    vec![
        driver("DRV-001", "Marcus Johnson", "(555) 201-0001", ("D1234501", "TX", (2026, 4, 12)), Clear, Graduated, (98.2, 94.5), (2022, 3, 14), Active),
        driver("DRV-002", "Aisha Patel", "(555) 201-0002", ("D1234502", "TX", (2025, 9, 3)), Clear, Graduated, (96.7, 97.1), (2022, 8, 1), Active),
        driver("DRV-003", "Carlos Ramirez", "(555) 201-0003", ("D1234503", "TX", (2024, 6, 28)), Clear, Enrolled, (91.4, 88.0), (2023, 1, 9), Active),
        driver("DRV-004", "Emily Chen", "(555) 201-0004", ("D1234504", "OK", (2027, 1, 30)), Clear, Graduated, (94.8, 92.3), (2023, 4, 17), Active),
        driver("DRV-005", "Darnell Brooks", "(555) 201-0005", ("D1234505", "TX", (2025, 11, 19)), Clear, Enrolled, (87.5, 79.6), (2023, 7, 24), Active),
        driver("DRV-006", "Sofia Nguyen", "(555) 201-0006", ("D1234506", "TX", (2026, 2, 7)), Clear, Graduated, (89.9, 83.2), (2023, 10, 2), Active),
        driver("DRV-007", "Tyler Washington", "(555) 201-0007", ("D1234507", "LA", (2025, 5, 22)), Clear, Enrolled, (93.1, 90.4), (2024, 1, 8), Active),
        driver("DRV-008", "Priya Singh", "(555) 201-0008", ("D1234508", "TX", (2028, 8, 15)), Pending, NotEnrolled, (0.0, 0.0), (2024, 6, 3), Onboarding),
        driver("DRV-009", "Jamal Carter", "(555) 201-0009", ("D1234509", "TX", (2025, 3, 11)), Clear, Graduated, (92.0, 95.8), (2022, 11, 28), OnLeave),
        driver("DRV-010", "Hannah Miller", "(555) 201-0010", ("D1234510", "TX", (2024, 9, 1)), Flagged, NotEnrolled, (78.3, 71.9), (2023, 2, 20), Terminated),
    ]
}

pub fn driver_alerts() -> Vec<DriverAlert> {
    let alert = |id: &str, driver_id: &str, kind, message: &str, severity, day: u32| DriverAlert {
        id: id.into(),
        driver_id: driver_id.into(),
        kind,
        message: message.into(),
        severity,
        date: date(2024, 6, day),
    };

    vec![
        alert("DAL-001", "DRV-003", DriverAlertKind::LicenseExpiry, "License expires June 28", Severity::High, 1),
        alert("DAL-002", "DRV-005", DriverAlertKind::LowScore, "Safety score below 80", Severity::Medium, 7),
        alert("DAL-003", "DRV-006", DriverAlertKind::MedicalCardExpiry, "DOT medical card expires in 3 weeks", Severity::Medium, 8),
        alert("DAL-004", "DRV-007", DriverAlertKind::TrainingOverdue, "Hazmat awareness overdue", Severity::Low, 9),
    ]
}

pub fn documents() -> Vec<DriverDocument> {
    use DocumentType::*;

    let doc = |id: &str, driver_id: &str, doc_type, issued: (i32, u32, u32), expiry: Option<(i32, u32, u32)>| {
        DriverDocument {
            id: id.into(),
            driver_id: driver_id.into(),
            doc_type,
            issued: date(issued.0, issued.1, issued.2),
            expiry: expiry.map(|(y, m, d)| date(y, m, d)),
        }
    };

    vec![
        doc("DOC-001", "DRV-001", License, (2022, 4, 12), Some((2026, 4, 12))),
        doc("DOC-002", "DRV-001", MedicalCard, (2023, 3, 1), Some((2025, 3, 1))),
        doc("DOC-003", "DRV-002", License, (2021, 9, 3), Some((2025, 9, 3))),
        doc("DOC-004", "DRV-003", License, (2020, 6, 28), Some((2024, 6, 28))),
        doc("DOC-005", "DRV-003", I9, (2023, 1, 9), None),
        doc("DOC-006", "DRV-004", MedicalCard, (2022, 5, 30), Some((2024, 5, 30))),
        doc("DOC-007", "DRV-005", DrugTest, (2023, 7, 20), Some((2024, 7, 20))),
        doc("DOC-008", "DRV-006", MedicalCard, (2022, 7, 1), Some((2024, 7, 1))),
        doc("DOC-009", "DRV-007", BackgroundCheck, (2024, 1, 2), Some((2025, 1, 2))),
        doc("DOC-010", "DRV-008", BackgroundCheck, (2024, 6, 1), Some((2025, 6, 1))),
        doc("DOC-011", "DRV-008", I9, (2024, 6, 3), None),
    ]
}

pub fn training() -> Vec<DriverTraining> {
    #[allow(clippy::too_many_arguments)]
    fn course(
        id: &str,
        driver_id: &str,
        course: &str,
        assigned: (u32, u32),
        due: (u32, u32),
        started: bool,
        completed: Option<(u32, u32)>,
        score: Option<f64>,
    ) -> DriverTraining {
        DriverTraining {
            id: id.into(),
            driver_id: driver_id.into(),
            course: course.into(),
            assigned: date(2024, assigned.0, assigned.1),
            due: date(2024, due.0, due.1),
            started,
            completed: completed.map(|(m, d)| date(2024, m, d)),
            score,
        }
    }

    vec![
        course("TRN-001", "DRV-001", "Defensive Driving", (5, 1), (5, 31), true, Some((5, 12)), Some(96.0)),
        course("TRN-002", "DRV-002", "Defensive Driving", (5, 1), (5, 31), true, Some((5, 20)), Some(92.0)),
        course("TRN-003", "DRV-003", "Dog Awareness", (5, 15), (6, 15), true, None, None),
        course("TRN-004", "DRV-005", "Backing Safety", (5, 15), (6, 15), false, None, None),
        course("TRN-005", "DRV-007", "Hazmat Awareness", (5, 1), (6, 1), true, None, None),
        course("TRN-006", "DRV-008", "New Hire Orientation", (6, 3), (6, 14), true, None, None),
        course("TRN-007", "DRV-004", "Heat Illness Prevention", (5, 20), (6, 5), true, Some((6, 4)), Some(88.0)),
        course("TRN-008", "DRV-006", "Distracted Driving", (5, 10), (6, 7), false, None, None),
    ]
}

pub fn coaching() -> Vec<SafetyCoaching> {
    use CoachingStatus::*;

    let session = |id: &str, driver_id: &str, topic: &str, coach: &str, day: u32, status, notes: &str| SafetyCoaching {
        id: id.into(),
        driver_id: driver_id.into(),
        topic: topic.into(),
        coach: coach.into(),
        date: date(2024, 6, day),
        status,
        notes: notes.into(),
    };

    vec![
        session("CCH-001", "DRV-005", "Following distance", "Rachel Adams", 4, Completed, "Reviewed Netradyne events from last week"),
        session("CCH-002", "DRV-006", "Seatbelt compliance", "Rachel Adams", 6, FollowUp, "Two more events since session"),
        session("CCH-003", "DRV-003", "Speeding in school zones", "Kevin Ortiz", 11, Scheduled, ""),
        session("CCH-004", "DRV-007", "Stop sign violations", "Kevin Ortiz", 3, Completed, "Acknowledged, no further events"),
        session("CCH-005", "DRV-005", "Hard braking", "Rachel Adams", 12, Scheduled, ""),
    ]
}
