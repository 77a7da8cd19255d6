use super::{number, optional, required, time, FormState};
use crate::data;
use crate::error::FormError;
use crate::models::NewRescue;

/// Rescues are always requested for the current operating day
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RescueForm {
    pub route_id: String,
    pub driver_id: String,
    pub rescuer_id: String,
    pub packages: String,
    pub reason: String,
    pub requested_time: String,
}

impl FormState for RescueForm {
    type Output = NewRescue;

    fn validate(&self) -> Result<NewRescue, FormError> {
        Ok(NewRescue {
            route_id: required(&self.route_id, "Route")?,
            driver_id: required(&self.driver_id, "Driver")?,
            rescuer_id: optional(&self.rescuer_id),
            packages: number(&self.packages, "Packages")?,
            reason: required(&self.reason, "Reason")?,
            requested_at: data::today().and_time(time(&self.requested_time, "Requested at")?),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::submit;
    use crate::models::RescueStatus;
    use crate::state::{Command, DspStore};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_requested_rescue_starts_requested() {
        let mut store = DspStore::seeded();
        let mut form = RescueForm {
            route_id: "RTE-004".into(),
            driver_id: "DRV-004".into(),
            rescuer_id: "DRV-007".into(),
            packages: "35".into(),
            reason: "Behind pace after van swap".into(),
            requested_time: "13:45".into(),
        };
        let mut id = None;

        submit(&mut form, |new| id = store.dispatch(Command::RequestRescue(new)).ok()).unwrap();

        let rescue = store.rescues.get(&id.unwrap()).cloned().unwrap();
        assert_eq!(rescue.status, RescueStatus::Requested);
        assert_eq!(rescue.packages, 35);
        assert_eq!(rescue.requested_at, data::at(data::today(), 13, 45));
        assert_eq!(form, RescueForm::default());
    }

    #[test]
    fn test_package_count_must_be_a_number() {
        let form = RescueForm {
            route_id: "RTE-004".into(),
            driver_id: "DRV-004".into(),
            packages: "a few".into(),
            reason: "Behind pace".into(),
            requested_time: "13:45".into(),
            ..Default::default()
        };
        assert_eq!(form.validate(), Err(FormError::InvalidNumber("Packages")));
    }
}
