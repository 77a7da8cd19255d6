use leptos::*;

use crate::components::inputs::{ChoiceSelect, EnumSelect, TextField};
use crate::components::modal::{FormActions, InlineError, Modal, ModalForm};
use crate::error::StoreError;
use crate::forms::ShiftForm;
use crate::models::{NewShift, Wave};

#[component]
pub fn ScheduleShiftModal(
    open: RwSignal<bool>,
    #[prop(into)] drivers: Signal<Vec<(String, String)>>,
    #[prop(into)] routes: Signal<Vec<(String, String)>>,
    #[prop(into)] on_create: Callback<NewShift, Result<String, StoreError>>,
) -> impl IntoView {
    let modal = ModalForm::<ShiftForm>::new(open);
    let close = Callback::new(move |()| modal.close());
    let (driver, set_driver) = modal.field(|f| &f.driver_id, |f, v| f.driver_id = v);
    let (date, set_date) = modal.field(|f| &f.date, |f, v| f.date = v);
    let (start, set_start) = modal.field(|f| &f.start, |f, v| f.start = v);
    let (end, set_end) = modal.field(|f| &f.end, |f, v| f.end = v);
    let (wave, set_wave) = modal.field(|f| &f.wave, |f, v: Wave| f.wave = v);
    let (route, set_route) = modal.field(|f| &f.route_id, |f, v| f.route_id = v);
    let (backup, set_backup) = modal.field(|f| &f.backup_driver_id, |f, v| f.backup_driver_id = v);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        modal.submit(on_create);
    };

    view! {
        <Modal open=open on_close=close title="Schedule Shift">
            <form class="modal-form" on:submit=on_submit>
                <ChoiceSelect label="Driver" choices=drivers value=driver set_value=set_driver />
                <TextField label="Date" value=date set_value=set_date input_type="date" required=true />
                <div class="form-row">
                    <TextField label="Start" value=start set_value=set_start input_type="time" required=true />
                    <TextField label="End" value=end set_value=set_end input_type="time" required=true />
                </div>
                <EnumSelect label="Wave" value=wave set_value=set_wave />
                <ChoiceSelect label="Route" choices=routes value=route set_value=set_route optional=true />
                <ChoiceSelect label="Backup driver" choices=drivers value=backup set_value=set_backup optional=true />
                <InlineError error=modal.error />
                <FormActions on_cancel=close submit_label="Schedule" />
            </form>
        </Modal>
    }
}
