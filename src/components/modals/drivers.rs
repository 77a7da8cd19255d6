use leptos::*;

use crate::components::inputs::TextField;
use crate::components::modal::{FormActions, InlineError, Modal, ModalForm};
use crate::error::StoreError;
use crate::forms::DriverForm;
use crate::models::NewDriver;

#[component]
pub fn AddDriverModal(
    open: RwSignal<bool>,
    #[prop(into)] on_create: Callback<NewDriver, Result<String, StoreError>>,
) -> impl IntoView {
    let modal = ModalForm::<DriverForm>::new(open);
    let close = Callback::new(move |()| modal.close());
    let (name, set_name) = modal.field(|f| &f.name, |f, v| f.name = v);
    let (email, set_email) = modal.field(|f| &f.email, |f, v| f.email = v);
    let (phone, set_phone) = modal.field(|f| &f.phone, |f, v| f.phone = v);
    let (license, set_license) = modal.field(|f| &f.license_number, |f, v| f.license_number = v);
    let (state, set_state) = modal.field(|f| &f.license_state, |f, v| f.license_state = v);
    let (expiry, set_expiry) = modal.field(|f| &f.license_expiry, |f, v| f.license_expiry = v);
    let (hired, set_hired) = modal.field(|f| &f.hire_date, |f, v| f.hire_date = v);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        modal.submit(on_create);
    };

    view! {
        <Modal open=open on_close=close title="Add Driver">
            <form class="modal-form" on:submit=on_submit>
                <TextField label="Full name" value=name set_value=set_name required=true />
                <TextField label="Email" value=email set_value=set_email input_type="email" required=true />
                <TextField label="Phone" value=phone set_value=set_phone input_type="tel" required=true />
                <div class="form-row">
                    <TextField label="License number" value=license set_value=set_license required=true />
                    <TextField label="State" value=state set_value=set_state placeholder="TX" required=true />
                </div>
                <TextField label="License expiry" value=expiry set_value=set_expiry input_type="date" required=true />
                <TextField label="Hire date" value=hired set_value=set_hired input_type="date" required=true />
                <InlineError error=modal.error />
                <FormActions on_cancel=close submit_label="Add Driver" />
            </form>
        </Modal>
    }
}
