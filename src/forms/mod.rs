//! Form state behind every creation modal.
//!
//! Inputs are kept as the raw strings the browser hands back; [`FormState::validate`]
//! turns them into the typed payload a [`crate::state::Command`] carries.
//! [`submit`] is the only way a modal hands a payload to its page: the callback
//! runs once on success and the form goes back to its defaults, or it does not
//! run at all.

use std::str::FromStr;

use chrono::{NaiveDate, NaiveTime};

use crate::error::{FormError, StoreError, SubmitError};

mod dispatch;
mod drivers;
mod fleet;
mod inventory;
mod login;
mod safety;
mod scheduling;

pub use dispatch::RescueForm;
pub use drivers::DriverForm;
pub use fleet::{MaintenanceForm, VehicleForm};
pub use inventory::DamageForm;
pub use login::LoginForm;
pub use safety::IncidentForm;
pub use scheduling::ShiftForm;

pub trait FormState: Clone + Default + PartialEq {
    type Output;

    fn validate(&self) -> Result<Self::Output, FormError>;
}

/// Validate, hand the payload to `on_valid` and reset. On error the form is left
/// as typed so the user can fix it.
pub fn submit<F: FormState>(form: &mut F, on_valid: impl FnOnce(F::Output)) -> Result<(), FormError> {
    let payload = form.validate()?;
    on_valid(payload);
    *form = F::default();
    Ok(())
}

/// Like [`submit`], for a callback that may still refuse the payload. The form
/// only resets once the payload is accepted.
pub fn submit_with<F: FormState, T>(
    form: &mut F,
    on_valid: impl FnOnce(F::Output) -> Result<T, StoreError>,
) -> Result<T, SubmitError> {
    let payload = form.validate()?;
    let accepted = on_valid(payload)?;
    *form = F::default();
    Ok(accepted)
}

pub(crate) fn required(value: &str, field: &'static str) -> Result<String, FormError> {
    let value = value.trim();
    if value.is_empty() {
        Err(FormError::MissingField(field))
    } else {
        Ok(value.to_string())
    }
}

pub(crate) fn optional(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

pub(crate) fn number<T: FromStr>(value: &str, field: &'static str) -> Result<T, FormError> {
    required(value, field)?
        .parse()
        .map_err(|_| FormError::InvalidNumber(field))
}

pub(crate) fn optional_number<T: FromStr>(value: &str, field: &'static str) -> Result<Option<T>, FormError> {
    match optional(value) {
        Some(raw) => raw.parse().map(Some).map_err(|_| FormError::InvalidNumber(field)),
        None => Ok(None),
    }
}

/// `<input type="date">` value
pub(crate) fn date(value: &str, field: &'static str) -> Result<NaiveDate, FormError> {
    NaiveDate::parse_from_str(&required(value, field)?, "%Y-%m-%d")
        .map_err(|_| FormError::InvalidDate(field))
}

/// `<input type="time">` value
pub(crate) fn time(value: &str, field: &'static str) -> Result<NaiveTime, FormError> {
    NaiveTime::parse_from_str(&required(value, field)?, "%H:%M")
        .map_err(|_| FormError::InvalidDate(field))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_required_trims() {
        assert_eq!(required("  CX101 ", "Route"), Ok("CX101".to_string()));
        assert_eq!(required("   ", "Route"), Err(FormError::MissingField("Route")));
    }

    #[test]
    fn test_number_parsing() {
        assert_eq!(number::<u32>("42", "Packages"), Ok(42));
        assert_eq!(number::<u32>("", "Packages"), Err(FormError::MissingField("Packages")));
        assert_eq!(number::<u32>("-3", "Packages"), Err(FormError::InvalidNumber("Packages")));
        assert_eq!(optional_number::<f64>(" ", "Cost"), Ok(None));
        assert_eq!(optional_number::<f64>("12.5", "Cost"), Ok(Some(12.5)));
    }

    #[test]
    fn test_rejected_payload_keeps_the_form() {
        use crate::state::{Command, DspStore};

        let mut store = DspStore::seeded();
        let mut form = MaintenanceForm {
            vehicle_id: "VEH-404".into(),
            service_type: "Oil Change".into(),
            scheduled_date: "2024-06-12".into(),
            vendor: "Fleet Lube Express".into(),
            ..Default::default()
        };
        let typed = form.clone();

        let result = submit_with(&mut form, |new| store.dispatch(Command::ScheduleMaintenance(new)));

        assert!(matches!(result, Err(SubmitError::Rejected(StoreError::UnknownReference { .. }))));
        assert_eq!(form, typed);

        form.vehicle_id = "VEH-002".into();
        let id = submit_with(&mut form, |new| store.dispatch(Command::ScheduleMaintenance(new)));
        assert_eq!(id, Ok("MNT-009".to_string()));
        assert_eq!(form, MaintenanceForm::default());
    }

    #[test]
    fn test_date_and_time_inputs() {
        assert_eq!(date("2024-06-10", "Date"), Ok(crate::data::today()));
        assert_eq!(date("06/10/2024", "Date"), Err(FormError::InvalidDate("Date")));
        assert_eq!(time("07:20", "Start"), Ok(crate::data::time(7, 20)));
    }
}
