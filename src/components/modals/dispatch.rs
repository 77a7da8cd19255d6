use leptos::*;

use crate::components::inputs::{ChoiceSelect, TextField};
use crate::components::modal::{FormActions, InlineError, Modal, ModalForm};
use crate::error::StoreError;
use crate::forms::RescueForm;
use crate::models::NewRescue;

#[component]
pub fn RequestRescueModal(
    open: RwSignal<bool>,
    #[prop(into)] routes: Signal<Vec<(String, String)>>,
    #[prop(into)] drivers: Signal<Vec<(String, String)>>,
    #[prop(into)] on_create: Callback<NewRescue, Result<String, StoreError>>,
) -> impl IntoView {
    let modal = ModalForm::<RescueForm>::new(open);
    let close = Callback::new(move |()| modal.close());
    let (route, set_route) = modal.field(|f| &f.route_id, |f, v| f.route_id = v);
    let (driver, set_driver) = modal.field(|f| &f.driver_id, |f, v| f.driver_id = v);
    let (rescuer, set_rescuer) = modal.field(|f| &f.rescuer_id, |f, v| f.rescuer_id = v);
    let (packages, set_packages) = modal.field(|f| &f.packages, |f, v| f.packages = v);
    let (reason, set_reason) = modal.field(|f| &f.reason, |f, v| f.reason = v);
    let (requested, set_requested) = modal.field(|f| &f.requested_time, |f, v| f.requested_time = v);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        modal.submit(on_create);
    };

    view! {
        <Modal open=open on_close=close title="Request Rescue">
            <form class="modal-form" on:submit=on_submit>
                <ChoiceSelect label="Route" choices=routes value=route set_value=set_route />
                <ChoiceSelect label="Driver needing help" choices=drivers value=driver set_value=set_driver />
                <ChoiceSelect label="Rescuer" choices=drivers value=rescuer set_value=set_rescuer optional=true />
                <div class="form-row">
                    <TextField label="Packages" value=packages set_value=set_packages input_type="number" required=true />
                    <TextField label="Requested at" value=requested set_value=set_requested input_type="time" required=true />
                </div>
                <TextField label="Reason" value=reason set_value=set_reason required=true />
                <InlineError error=modal.error />
                <FormActions on_cancel=close submit_label="Request" />
            </form>
        </Modal>
    }
}
