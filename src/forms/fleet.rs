use super::{date, number, optional_number, required, FormState};
use crate::error::FormError;
use crate::models::{BrandingStatus, NewMaintenance, NewVehicle};

#[derive(Debug, Clone, PartialEq)]
pub struct VehicleForm {
    pub vin: String,
    pub model: String,
    pub plate: String,
    pub mileage: String,
    pub branding: BrandingStatus,
    pub registration_expiry: String,
    pub insurance_expiry: String,
}

impl Default for VehicleForm {
    fn default() -> Self {
        Self {
            vin: String::new(),
            model: String::new(),
            plate: String::new(),
            mileage: "0".to_string(),
            branding: BrandingStatus::Unbranded,
            registration_expiry: String::new(),
            insurance_expiry: String::new(),
        }
    }
}

impl FormState for VehicleForm {
    type Output = NewVehicle;

    fn validate(&self) -> Result<NewVehicle, FormError> {
        Ok(NewVehicle {
            vin: required(&self.vin, "VIN")?.to_uppercase(),
            model: required(&self.model, "Model")?,
            plate: required(&self.plate, "License plate")?.to_uppercase(),
            mileage: number(&self.mileage, "Mileage")?,
            branding: self.branding,
            registration_expiry: date(&self.registration_expiry, "Registration expiry")?,
            insurance_expiry: date(&self.insurance_expiry, "Insurance expiry")?,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MaintenanceForm {
    pub vehicle_id: String,
    pub service_type: String,
    pub description: String,
    pub scheduled_date: String,
    pub vendor: String,
    pub estimated_cost: String,
}

impl FormState for MaintenanceForm {
    type Output = NewMaintenance;

    fn validate(&self) -> Result<NewMaintenance, FormError> {
        Ok(NewMaintenance {
            vehicle_id: required(&self.vehicle_id, "Vehicle")?,
            service_type: required(&self.service_type, "Service type")?,
            description: self.description.trim().to_string(),
            scheduled_date: date(&self.scheduled_date, "Scheduled date")?,
            vendor: required(&self.vendor, "Vendor")?,
            estimated_cost: optional_number(&self.estimated_cost, "Estimated cost")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::submit;
    use crate::state::{Command, DspStore, Record};
    use pretty_assertions::assert_eq;

    fn filled_vehicle() -> VehicleForm {
        VehicleForm {
            vin: "1ftbw3xm5hka10009".into(),
            model: "Ford Transit 250".into(),
            plate: "dsp-4109".into(),
            mileage: "15".into(),
            branding: BrandingStatus::Branded,
            registration_expiry: "2025-06-30".into(),
            insurance_expiry: "2025-06-30".into(),
        }
    }

    #[test]
    fn test_add_vehicle_appends_one_record_and_resets() {
        let mut store = DspStore::seeded();
        let before = store.vehicles.len();
        let mut form = filled_vehicle();
        let mut calls = 0;
        let mut created = None;

        let result = submit(&mut form, |new| {
            calls += 1;
            created = store.dispatch(Command::AddVehicle(new)).ok();
        });

        assert_eq!(result, Ok(()));
        assert_eq!(calls, 1);
        assert_eq!(form, VehicleForm::default());
        assert_eq!(store.vehicles.len(), before + 1);

        let id = created.expect("vehicle id");
        assert_eq!(store.vehicles.all().iter().filter(|v| v.id() == id).count(), 1);
        let vehicle = store.vehicles.get(&id).expect("vehicle");
        assert_eq!(vehicle.plate, "DSP-4109");
        assert_eq!(vehicle.vin, "1FTBW3XM5HKA10009");
    }

    #[test]
    fn test_missing_field_blocks_callback() {
        let mut form = VehicleForm {
            plate: "  ".into(),
            ..filled_vehicle()
        };
        let untouched = form.clone();
        let mut called = false;

        let result = submit(&mut form, |_| called = true);

        assert_eq!(result, Err(FormError::MissingField("License plate")));
        assert!(!called);
        assert_eq!(form, untouched);
    }

    #[test]
    fn test_first_missing_field_is_reported() {
        assert_eq!(VehicleForm::default().validate(), Err(FormError::MissingField("VIN")));
    }

    #[test]
    fn test_maintenance_cost_is_optional_but_must_parse() {
        let form = MaintenanceForm {
            vehicle_id: "VEH-002".into(),
            service_type: "Brake Inspection".into(),
            scheduled_date: "2024-06-12".into(),
            vendor: "Brake Masters".into(),
            ..Default::default()
        };
        assert_eq!(form.validate().map(|m| m.estimated_cost), Ok(None));

        let bad = MaintenanceForm {
            estimated_cost: "about 200".into(),
            ..form
        };
        assert_eq!(bad.validate(), Err(FormError::InvalidNumber("Estimated cost")));
    }
}
