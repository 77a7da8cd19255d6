use leptos::*;

use crate::error::StoreError;
use crate::forms::{submit_with, FormState};

/// Overlay dialog shown while `open` is set. Clicking the backdrop or the
/// close button calls `on_close`.
#[component]
pub fn Modal(
    open: RwSignal<bool>,
    #[prop(into)] on_close: Callback<()>,
    title: &'static str,
    children: ChildrenFn,
) -> impl IntoView {
    let close = move |_| on_close.call(());

    view! {
        <Show when=move || open.get()>
            <div class="modal-backdrop" on:click=close>
                <div class="modal" role="dialog" on:click=|ev| ev.stop_propagation()>
                    <div class="modal-header">
                        <h3>{title}</h3>
                        <button class="modal-close" aria-label="Close" on:click=close>"×"</button>
                    </div>
                    {children()}
                </div>
            </div>
        </Show>
    }
}

/// State shared by every creation modal: the form, its inline error and the
/// submit handler wired to the page's callback.
pub struct ModalForm<F: FormState + 'static> {
    pub form: RwSignal<F>,
    pub error: RwSignal<Option<String>>,
    open: RwSignal<bool>,
}

impl<F: FormState + 'static> Clone for ModalForm<F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F: FormState + 'static> Copy for ModalForm<F> {}

impl<F> ModalForm<F>
where
    F: FormState + 'static,
    F::Output: 'static,
{
    pub fn new(open: RwSignal<bool>) -> Self {
        Self {
            form: create_rw_signal(F::default()),
            error: create_rw_signal(None),
            open,
        }
    }

    /// Hide the modal. Typed input is kept, a stale error is not.
    pub fn close(&self) {
        self.error.set(None);
        self.open.set(false);
    }

    /// Validate, hand the payload to `on_create` once and close on success.
    /// Validation or store errors stay in the modal.
    pub fn submit(&self, on_create: Callback<F::Output, Result<String, StoreError>>) {
        let mut current = self.form.get_untracked();
        match submit_with(&mut current, |payload| on_create.call(payload)) {
            Ok(_) => {
                self.form.set(current);
                self.close();
            }
            Err(e) => self.error.set(Some(e.to_string())),
        }
    }

    /// Lens onto one field for the input components
    pub fn field<T: Clone + PartialEq + 'static>(
        &self,
        get: fn(&F) -> &T,
        set: fn(&mut F, T),
    ) -> (Signal<T>, SignalSetter<T>) {
        let form = self.form;
        create_slice(form, move |f| get(f).clone(), move |f, v| set(f, v))
    }
}

/// Error line under the form fields
#[component]
pub fn InlineError(error: RwSignal<Option<String>>) -> impl IntoView {
    view! {
        {move || error.get().map(|e| view! { <div class="error-message" role="alert">{e}</div> })}
    }
}

#[component]
pub fn FormActions(#[prop(into)] on_cancel: Callback<()>, submit_label: &'static str) -> impl IntoView {
    view! {
        <div class="modal-actions">
            <button type="button" class="button secondary" on:click=move |_| on_cancel.call(())>
                "Cancel"
            </button>
            <button type="submit" class="button primary">{submit_label}</button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;
    use crate::forms::VehicleForm;
    use crate::models::{BrandingStatus, NewVehicle};
    use pretty_assertions::assert_eq;

    fn filled() -> VehicleForm {
        VehicleForm {
            vin: "1FTBW3XM5HKA10009".into(),
            model: "Ford Transit 250".into(),
            plate: "DSP-4109".into(),
            mileage: "15".into(),
            branding: BrandingStatus::Branded,
            registration_expiry: "2025-06-30".into(),
            insurance_expiry: "2025-06-30".into(),
        }
    }

    fn counting(
        result: Result<String, StoreError>,
    ) -> (Rc<Cell<u32>>, Callback<NewVehicle, Result<String, StoreError>>) {
        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();
        let callback = Callback::new(move |_: NewVehicle| {
            counter.set(counter.get() + 1);
            result.clone()
        });
        (calls, callback)
    }

    #[test]
    fn test_accepted_submit_closes_and_resets() {
        let runtime = create_runtime();
        let open = create_rw_signal(true);
        let modal = ModalForm::<VehicleForm>::new(open);
        modal.form.set(filled());
        modal.error.set(Some("old".into()));
        let (calls, on_create) = counting(Ok("VEH-009".into()));

        modal.submit(on_create);

        assert_eq!(calls.get(), 1);
        assert!(!open.get_untracked());
        assert_eq!(modal.error.get_untracked(), None);
        assert_eq!(modal.form.get_untracked(), VehicleForm::default());

        runtime.dispose();
    }

    #[test]
    fn test_rejected_submit_stays_open_with_error() {
        let runtime = create_runtime();
        let open = create_rw_signal(true);
        let modal = ModalForm::<VehicleForm>::new(open);
        modal.form.set(filled());
        let (calls, on_create) = counting(Err(StoreError::NotFound {
            kind: "vehicle",
            id: "VEH-404".into(),
        }));

        modal.submit(on_create);

        assert_eq!(calls.get(), 1);
        assert!(open.get_untracked());
        assert!(modal.error.get_untracked().is_some());
        assert_eq!(modal.form.get_untracked(), filled());

        runtime.dispose();
    }

    #[test]
    fn test_invalid_form_never_calls_back() {
        let runtime = create_runtime();
        let open = create_rw_signal(true);
        let modal = ModalForm::<VehicleForm>::new(open);
        let (calls, on_create) = counting(Ok("VEH-009".into()));

        modal.submit(on_create);

        assert_eq!(calls.get(), 0);
        assert!(open.get_untracked());
        assert_eq!(modal.error.get_untracked(), Some("VIN is required".to_string()));

        runtime.dispose();
    }

    #[test]
    fn test_close_clears_stale_error() {
        let runtime = create_runtime();
        let open = create_rw_signal(true);
        let modal = ModalForm::<VehicleForm>::new(open);
        let (_, on_create) = counting(Ok("VEH-009".into()));
        modal.submit(on_create);
        assert!(modal.error.get_untracked().is_some());

        modal.close();
        open.set(true);

        assert_eq!(modal.error.get_untracked(), None);

        runtime.dispose();
    }
}
