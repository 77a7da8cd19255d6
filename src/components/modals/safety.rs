use leptos::*;

use crate::components::inputs::{ChoiceSelect, EnumSelect, TextField};
use crate::components::modal::{FormActions, InlineError, Modal, ModalForm};
use crate::error::StoreError;
use crate::forms::IncidentForm;
use crate::models::{IncidentKind, NewIncident, Severity};

#[component]
pub fn ReportIncidentModal(
    open: RwSignal<bool>,
    #[prop(into)] drivers: Signal<Vec<(String, String)>>,
    #[prop(into)] vehicles: Signal<Vec<(String, String)>>,
    #[prop(into)] on_create: Callback<NewIncident, Result<String, StoreError>>,
) -> impl IntoView {
    let modal = ModalForm::<IncidentForm>::new(open);
    let close = Callback::new(move |()| modal.close());
    let (driver, set_driver) = modal.field(|f| &f.driver_id, |f, v| f.driver_id = v);
    let (vehicle, set_vehicle) = modal.field(|f| &f.vehicle_id, |f, v| f.vehicle_id = v);
    let (date, set_date) = modal.field(|f| &f.date, |f, v| f.date = v);
    let (kind, set_kind) = modal.field(|f| &f.kind, |f, v: IncidentKind| f.kind = v);
    let (severity, set_severity) = modal.field(|f| &f.severity, |f, v: Severity| f.severity = v);
    let (location, set_location) = modal.field(|f| &f.location, |f, v| f.location = v);
    let (description, set_description) = modal.field(|f| &f.description, |f, v| f.description = v);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        modal.submit(on_create);
    };

    view! {
        <Modal open=open on_close=close title="Report Incident">
            <form class="modal-form" on:submit=on_submit>
                <ChoiceSelect label="Driver" choices=drivers value=driver set_value=set_driver />
                <ChoiceSelect label="Vehicle" choices=vehicles value=vehicle set_value=set_vehicle optional=true />
                <TextField label="Date" value=date set_value=set_date input_type="date" required=true />
                <div class="form-row">
                    <EnumSelect label="Type" value=kind set_value=set_kind />
                    <EnumSelect label="Severity" value=severity set_value=set_severity />
                </div>
                <TextField label="Location" value=location set_value=set_location required=true />
                <TextField label="Description" value=description set_value=set_description required=true />
                <InlineError error=modal.error />
                <FormActions on_cancel=close submit_label="Submit Report" />
            </form>
        </Modal>
    }
}
