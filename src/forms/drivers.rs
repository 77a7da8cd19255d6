use super::{date, required, FormState};
use crate::error::FormError;
use crate::models::NewDriver;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DriverForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub license_number: String,
    pub license_state: String,
    pub license_expiry: String,
    pub hire_date: String,
}

impl FormState for DriverForm {
    type Output = NewDriver;

    fn validate(&self) -> Result<NewDriver, FormError> {
        Ok(NewDriver {
            name: required(&self.name, "Full name")?,
            email: required(&self.email, "Email")?.to_lowercase(),
            phone: required(&self.phone, "Phone")?,
            license_number: required(&self.license_number, "License number")?.to_uppercase(),
            license_state: required(&self.license_state, "License state")?.to_uppercase(),
            license_expiry: date(&self.license_expiry, "License expiry")?,
            hire_date: date(&self.hire_date, "Hire date")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::submit;
    use crate::models::DriverStatus;
    use crate::state::{Command, DspStore};
    use pretty_assertions::assert_eq;

    fn filled() -> DriverForm {
        DriverForm {
            name: " Priya Natarajan ".into(),
            email: "Priya.Natarajan@dsp-example.com".into(),
            phone: "(555) 014-2231".into(),
            license_number: "d4417732".into(),
            license_state: "tx".into(),
            license_expiry: "2028-02-14".into(),
            hire_date: "2024-06-10".into(),
        }
    }

    #[test]
    fn test_new_driver_starts_onboarding() {
        let mut store = DspStore::seeded();
        let mut form = filled();
        let mut id = None;

        submit(&mut form, |new| id = store.dispatch(Command::AddDriver(new)).ok()).unwrap();

        let driver = store.drivers.get(&id.unwrap()).cloned().unwrap();
        assert_eq!(driver.name, "Priya Natarajan");
        assert_eq!(driver.email, "priya.natarajan@dsp-example.com");
        assert_eq!(driver.license_state, "TX");
        assert_eq!(driver.status, DriverStatus::Onboarding);
        assert_eq!(form, DriverForm::default());
    }

    #[test]
    fn test_blank_email_is_rejected() {
        let form = DriverForm {
            email: String::new(),
            ..filled()
        };
        assert_eq!(form.validate(), Err(FormError::MissingField("Email")));
    }
}
