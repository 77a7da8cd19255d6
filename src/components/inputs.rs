use leptos::*;

use crate::models::Labeled;

#[component]
pub fn FilterBar(children: Children) -> impl IntoView {
    view! { <div class="filter-bar">{children()}</div> }
}

#[component]
pub fn SearchInput(
    value: RwSignal<String>,
    #[prop(default = "Search...")] placeholder: &'static str,
) -> impl IntoView {
    view! {
        <input
            class="search-input"
            type="search"
            placeholder=placeholder
            prop:value=move || value.get()
            on:input=move |ev| value.set(event_target_value(&ev))
        />
    }
}

/// Dropdown over a status enum with an "All" entry mapped to `None`
#[component]
pub fn FilterSelect<T: Labeled>(
    label: &'static str,
    selected: RwSignal<Option<T>>,
) -> impl IntoView {
    view! {
        <label class="filter-select">
            <span>{label}</span>
            <select
                prop:value=move || selected.get().map(|v| v.key()).unwrap_or_default()
                on:change=move |ev| selected.set(T::from_key(&event_target_value(&ev)))
            >
                <option value="">"All"</option>
                {T::all()
                    .iter()
                    .map(|v| view! { <option value=v.key()>{v.label()}</option> })
                    .collect_view()}
            </select>
        </label>
    }
}

/// Required enum field inside a form
#[component]
pub fn EnumSelect<T: Labeled>(
    label: &'static str,
    value: Signal<T>,
    set_value: SignalSetter<T>,
) -> impl IntoView {
    view! {
        <label class="form-field">
            <span>{label}</span>
            <select
                prop:value=move || value.get().key()
                on:change=move |ev| {
                    if let Some(v) = T::from_key(&event_target_value(&ev)) {
                        set_value.set(v);
                    }
                }
            >
                {T::all()
                    .iter()
                    .map(|v| view! { <option value=v.key()>{v.label()}</option> })
                    .collect_view()}
            </select>
        </label>
    }
}

/// Picker over records from the store, as `(id, label)` pairs
#[component]
pub fn ChoiceSelect(
    label: &'static str,
    #[prop(into)] choices: Signal<Vec<(String, String)>>,
    value: Signal<String>,
    set_value: SignalSetter<String>,
    /// Offer an empty "None" entry instead of requiring a choice
    #[prop(optional)]
    optional: bool,
) -> impl IntoView {
    let empty_label = if optional { "None" } else { "Select..." };

    view! {
        <label class="form-field">
            <span>{label}</span>
            <select
                required=!optional
                prop:value=move || value.get()
                on:change=move |ev| set_value.set(event_target_value(&ev))
            >
                <option value="">{empty_label}</option>
                {move || {
                    choices
                        .get()
                        .into_iter()
                        .map(|(id, text)| view! { <option value=id>{text}</option> })
                        .collect_view()
                }}
            </select>
        </label>
    }
}

#[component]
pub fn TextField(
    label: &'static str,
    value: Signal<String>,
    set_value: SignalSetter<String>,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] placeholder: &'static str,
    #[prop(optional)] required: bool,
    /// Increment for number inputs, e.g. "0.01" for money
    #[prop(optional)]
    step: Option<&'static str>,
) -> impl IntoView {
    view! {
        <label class="form-field">
            <span>{label}</span>
            <input
                type=input_type
                placeholder=placeholder
                required=required
                step=number_step(input_type, step)
                prop:value=move || value.get()
                on:input=move |ev| set_value.set(event_target_value(&ev))
            />
        </label>
    }
}

/// Number inputs take whole steps unless told otherwise
fn number_step(input_type: &str, step: Option<&'static str>) -> Option<&'static str> {
    (input_type == "number").then(|| step.unwrap_or("1"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_number_step() {
        assert_eq!(number_step("number", None), Some("1"));
        assert_eq!(number_step("number", Some("0.01")), Some("0.01"));
        assert_eq!(number_step("text", None), None);
        assert_eq!(number_step("date", Some("0.01")), None);
    }
}
