use leptos::*;

use crate::components::inputs::{ChoiceSelect, TextField};
use crate::components::modal::{FormActions, InlineError, Modal, ModalForm};
use crate::error::StoreError;
use crate::forms::DamageForm;
use crate::models::NewDamageReport;

#[component]
pub fn ReportDamageModal(
    open: RwSignal<bool>,
    #[prop(into)] assets: Signal<Vec<(String, String)>>,
    #[prop(into)] drivers: Signal<Vec<(String, String)>>,
    #[prop(into)] on_create: Callback<NewDamageReport, Result<String, StoreError>>,
) -> impl IntoView {
    let modal = ModalForm::<DamageForm>::new(open);
    let close = Callback::new(move |()| modal.close());
    let (asset, set_asset) = modal.field(|f| &f.asset_id, |f, v| f.asset_id = v);
    let (reporter, set_reporter) = modal.field(|f| &f.reported_by, |f, v| f.reported_by = v);
    let (date, set_date) = modal.field(|f| &f.date, |f, v| f.date = v);
    let (description, set_description) = modal.field(|f| &f.description, |f, v| f.description = v);
    let (cost, set_cost) = modal.field(|f| &f.repair_cost, |f, v| f.repair_cost = v);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        modal.submit(on_create);
    };

    view! {
        <Modal open=open on_close=close title="Report Damage">
            <form class="modal-form" on:submit=on_submit>
                <ChoiceSelect label="Asset" choices=assets value=asset set_value=set_asset />
                <ChoiceSelect label="Reported by" choices=drivers value=reporter set_value=set_reporter />
                <TextField label="Date" value=date set_value=set_date input_type="date" required=true />
                <TextField label="Description" value=description set_value=set_description required=true />
                <TextField label="Repair cost" value=cost set_value=set_cost input_type="number" step="0.01" required=true />
                <InlineError error=modal.error />
                <FormActions on_cancel=close submit_label="Submit Report" />
            </form>
        </Modal>
    }
}
