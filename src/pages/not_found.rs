use leptos::*;
use leptos_router::*;

use crate::routes::HOME_PATH;

#[component]
pub fn NotFound() -> impl IntoView {
    let pathname = use_location().pathname;

    view! {
        <div class="page not-found">
            <h2>"Page not found"</h2>
            <p class="subtitle">{move || format!("Nothing lives at {}", pathname.get())}</p>
            <A href=HOME_PATH class="button primary">"Back to overview"</A>
        </div>
    }
}
