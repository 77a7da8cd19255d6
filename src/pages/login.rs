use std::time::Duration;

use leptos::*;
use leptos_router::*;

use crate::auth::use_auth;
use crate::components::TextField;
use crate::config::use_config;
use crate::forms::{submit, LoginForm};
use crate::routes::{guard, Access, HOME_PATH, LOGIN_PATH};

/// Demo sign-in: any email and password are accepted after a short spinner
#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let config = use_config();
    let navigate = use_navigate();

    let form = create_rw_signal(LoginForm::default());
    let error = create_rw_signal(None::<String>);
    let signing_in = create_rw_signal(false);

    let (email, set_email) = create_slice(form, |f| f.email.clone(), |f, v| f.email = v);
    let (password, set_password) = create_slice(form, |f| f.password.clone(), |f, v| f.password = v);

    let delay = Duration::from_millis(u64::from(config.login_delay_ms));
    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if signing_in.get_untracked() {
            return;
        }

        let navigate = navigate.clone();
        let mut current = form.get_untracked();
        let result = submit(&mut current, |email| {
            signing_in.set(true);
            set_timeout(
                move || {
                    auth.login(&email);
                    signing_in.set(false);
                    navigate(HOME_PATH, Default::default());
                },
                delay,
            );
        });

        match result {
            Ok(()) => {
                form.set(current);
                error.set(None);
            }
            Err(e) => error.set(Some(e.to_string())),
        }
    };

    let access = move || guard(LOGIN_PATH, auth.is_authenticated());

    move || match access() {
        Access::Redirect(to) => view! { <Redirect path=to /> }.into_view(),
        Access::Render => view! {
            <div class="login-page">
                <form class="login-card" on:submit=on_submit.clone()>
                    <h1>{config.company_name.clone()}</h1>
                    <p class="subtitle">{format!("Station {}", config.station_code)}</p>

                    <TextField
                        label="Email"
                        value=email
                        set_value=set_email
                        input_type="email"
                        placeholder="manager@example.com"
                        required=true
                    />
                    <TextField
                        label="Password"
                        value=password
                        set_value=set_password
                        input_type="password"
                        required=true
                    />

                    {move || error.get().map(|e| view! { <div class="error-message" role="alert">{e}</div> })}

                    <button type="submit" class="button primary wide" disabled=move || signing_in.get()>
                        <Show when=move || signing_in.get() fallback=|| "Sign in">
                            <span class="spinner" aria-hidden="true"></span>
                            "Signing in..."
                        </Show>
                    </button>
                </form>
            </div>
        }
        .into_view(),
    }
}
