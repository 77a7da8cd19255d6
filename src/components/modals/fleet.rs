use leptos::*;

use crate::components::inputs::{ChoiceSelect, EnumSelect, TextField};
use crate::components::modal::{FormActions, InlineError, Modal, ModalForm};
use crate::error::StoreError;
use crate::forms::{MaintenanceForm, VehicleForm};
use crate::models::{BrandingStatus, NewMaintenance, NewVehicle};

#[component]
pub fn AddVehicleModal(
    open: RwSignal<bool>,
    #[prop(into)] on_create: Callback<NewVehicle, Result<String, StoreError>>,
) -> impl IntoView {
    let modal = ModalForm::<VehicleForm>::new(open);
    let close = Callback::new(move |()| modal.close());
    let (vin, set_vin) = modal.field(|f| &f.vin, |f, v| f.vin = v);
    let (model, set_model) = modal.field(|f| &f.model, |f, v| f.model = v);
    let (plate, set_plate) = modal.field(|f| &f.plate, |f, v| f.plate = v);
    let (mileage, set_mileage) = modal.field(|f| &f.mileage, |f, v| f.mileage = v);
    let (branding, set_branding) = modal.field(|f| &f.branding, |f, v: BrandingStatus| f.branding = v);
    let (registration, set_registration) =
        modal.field(|f| &f.registration_expiry, |f, v| f.registration_expiry = v);
    let (insurance, set_insurance) = modal.field(|f| &f.insurance_expiry, |f, v| f.insurance_expiry = v);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        modal.submit(on_create);
    };

    view! {
        <Modal open=open on_close=close title="Add Vehicle">
            <form class="modal-form" on:submit=on_submit>
                <TextField label="VIN" value=vin set_value=set_vin required=true />
                <TextField label="Model" value=model set_value=set_model placeholder="Ford Transit 250" required=true />
                <TextField label="License plate" value=plate set_value=set_plate required=true />
                <TextField label="Mileage" value=mileage set_value=set_mileage input_type="number" required=true />
                <EnumSelect label="Branding" value=branding set_value=set_branding />
                <TextField label="Registration expiry" value=registration set_value=set_registration input_type="date" required=true />
                <TextField label="Insurance expiry" value=insurance set_value=set_insurance input_type="date" required=true />
                <InlineError error=modal.error />
                <FormActions on_cancel=close submit_label="Add Vehicle" />
            </form>
        </Modal>
    }
}

#[component]
pub fn ScheduleMaintenanceModal(
    open: RwSignal<bool>,
    #[prop(into)] vehicles: Signal<Vec<(String, String)>>,
    #[prop(into)] on_create: Callback<NewMaintenance, Result<String, StoreError>>,
) -> impl IntoView {
    let modal = ModalForm::<MaintenanceForm>::new(open);
    let close = Callback::new(move |()| modal.close());
    let (vehicle, set_vehicle) = modal.field(|f| &f.vehicle_id, |f, v| f.vehicle_id = v);
    let (service, set_service) = modal.field(|f| &f.service_type, |f, v| f.service_type = v);
    let (description, set_description) = modal.field(|f| &f.description, |f, v| f.description = v);
    let (scheduled, set_scheduled) = modal.field(|f| &f.scheduled_date, |f, v| f.scheduled_date = v);
    let (vendor, set_vendor) = modal.field(|f| &f.vendor, |f, v| f.vendor = v);
    let (cost, set_cost) = modal.field(|f| &f.estimated_cost, |f, v| f.estimated_cost = v);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        modal.submit(on_create);
    };

    view! {
        <Modal open=open on_close=close title="Schedule Maintenance">
            <form class="modal-form" on:submit=on_submit>
                <ChoiceSelect label="Vehicle" choices=vehicles value=vehicle set_value=set_vehicle />
                <TextField label="Service type" value=service set_value=set_service placeholder="Oil Change" required=true />
                <TextField label="Description" value=description set_value=set_description />
                <TextField label="Scheduled date" value=scheduled set_value=set_scheduled input_type="date" required=true />
                <TextField label="Vendor" value=vendor set_value=set_vendor required=true />
                <TextField label="Estimated cost" value=cost set_value=set_cost input_type="number" step="0.01" />
                <InlineError error=modal.error />
                <FormActions on_cancel=close submit_label="Schedule" />
            </form>
        </Modal>
    }
}
