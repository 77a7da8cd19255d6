use super::{date, optional, required, FormState};
use crate::error::FormError;
use crate::models::{IncidentKind, NewIncident, Severity};

#[derive(Debug, Clone, PartialEq)]
pub struct IncidentForm {
    pub driver_id: String,
    pub vehicle_id: String,
    pub date: String,
    pub kind: IncidentKind,
    pub severity: Severity,
    pub location: String,
    pub description: String,
}

impl Default for IncidentForm {
    fn default() -> Self {
        Self {
            driver_id: String::new(),
            vehicle_id: String::new(),
            date: String::new(),
            kind: IncidentKind::Accident,
            severity: Severity::Low,
            location: String::new(),
            description: String::new(),
        }
    }
}

impl FormState for IncidentForm {
    type Output = NewIncident;

    fn validate(&self) -> Result<NewIncident, FormError> {
        Ok(NewIncident {
            driver_id: required(&self.driver_id, "Driver")?,
            vehicle_id: optional(&self.vehicle_id),
            date: date(&self.date, "Date")?,
            kind: self.kind,
            severity: self.severity,
            location: required(&self.location, "Location")?,
            description: required(&self.description, "Description")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::submit;
    use crate::models::IncidentStatus;
    use crate::state::{Command, DspStore};
    use pretty_assertions::assert_eq;

    fn filled() -> IncidentForm {
        IncidentForm {
            driver_id: "DRV-002".into(),
            vehicle_id: "VEH-002".into(),
            date: "2024-06-10".into(),
            kind: IncidentKind::NearMiss,
            severity: Severity::Medium,
            location: "Pine St loading dock".into(),
            description: "Pedestrian stepped out behind van".into(),
        }
    }

    #[test]
    fn test_reported_incident_opens() {
        let mut store = DspStore::seeded();
        let mut form = filled();
        let mut id = None;

        submit(&mut form, |new| id = store.dispatch(Command::ReportIncident(new)).ok()).unwrap();

        let incident = store.incidents.get(&id.unwrap()).cloned().unwrap();
        assert_eq!(incident.status, IncidentStatus::Open);
        assert_eq!(incident.kind, IncidentKind::NearMiss);
        assert_eq!(form, IncidentForm::default());
    }

    #[test]
    fn test_description_required() {
        let mut form = IncidentForm {
            description: "\n".into(),
            ..filled()
        };
        let mut called = false;
        let result = submit(&mut form, |_| called = true);
        assert_eq!(result, Err(FormError::MissingField("Description")));
        assert!(!called);
    }
}
