use leptos::*;
use leptos_router::*;

use crate::auth::{display_name, use_auth};
use crate::config::use_config;
use crate::data;
use crate::nav::{active_link, active_section, SECTIONS};
use crate::routes::{document_title, guard, Access};

/// Signed-in shell: sidebar, header, section sub-nav and the page outlet.
/// Signed-out visitors are redirected before anything renders.
#[component]
pub fn Shell() -> impl IntoView {
    let auth = use_auth();
    let config = use_config();
    let pathname = use_location().pathname;

    let access = create_memo(move |_| guard(&pathname.get(), auth.is_authenticated()));

    // Keep the tab title in sync with the page
    create_effect(move |_| {
        let title = document_title(&pathname.get(), &config.company_name);
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            document.set_title(&title);
        }
    });

    move || match access.get() {
        Access::Render => view! {
            <div class="layout">
                <Sidebar />
                <div class="workspace">
                    <Header />
                    <SubNav />
                    <main class="main-content">
                        <Outlet />
                    </main>
                </div>
            </div>
        }
        .into_view(),
        Access::Redirect(to) => view! { <Redirect path=to /> }.into_view(),
    }
}

/// Top-level sections
#[component]
fn Sidebar() -> impl IntoView {
    let config = use_config();
    let pathname = use_location().pathname;
    let current = move || active_section(&pathname.get()).map(|s| s.href);

    view! {
        <nav class="sidebar">
            <div class="sidebar-brand">
                <h1 class="navbar-title">{config.company_name.clone()}</h1>
                <span class="station-code">{config.station_code.clone()}</span>
            </div>
            <ul class="sidebar-sections">
                {SECTIONS
                    .iter()
                    .map(|section| {
                        let href = section.href;
                        view! {
                            <li>
                                <A
                                    href=href
                                    class=move || {
                                        if current() == Some(href) { "nav-item active" } else { "nav-item" }
                                    }
                                >
                                    <span class="nav-icon">{section.icon}</span>
                                    <span class="nav-label">{section.label}</span>
                                </A>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </nav>
    }
}

/// Links of the active section; only the longest matching one is highlighted
#[component]
fn SubNav() -> impl IntoView {
    let pathname = use_location().pathname;

    move || {
        let path = pathname.get();
        let section = active_section(&path)?;
        if section.links.len() < 2 {
            return None;
        }
        let active = active_link(&path).map(|l| l.href);

        Some(view! {
            <div class="navbar-tabs subnav">
                {section
                    .links
                    .iter()
                    .map(|link| {
                        let class = if active == Some(link.href) { "tab active" } else { "tab" };
                        view! { <A href=link.href class=class>{link.label}</A> }
                    })
                    .collect_view()}
            </div>
        })
    }
}

#[component]
fn Header() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();

    let user = move || auth.user().map(|u| display_name(&u).to_string()).unwrap_or_default();
    let logout = move |_| {
        auth.logout();
        navigate(crate::routes::LOGIN_PATH, Default::default());
    };

    view! {
        <header class="navbar">
            <div class="navbar-content">
                <span class="operating-day">{data::today().format("%A, %B %-d, %Y").to_string()}</span>
                <div class="navbar-actions">
                    <CurrentTime />
                    <span class="user-name">{user}</span>
                    <button class="button secondary" on:click=logout>"Sign out"</button>
                </div>
            </div>
        </header>
    }
}

/// Wall clock that ticks every second
#[component]
fn CurrentTime() -> impl IntoView {
    let time = create_rw_signal(clock_text());

    #[cfg(target_arch = "wasm32")]
    {
        let tick = gloo_timers::callback::Interval::new(1000, move || time.set(clock_text()));
        on_cleanup(move || drop(tick));
    }

    view! { <span class="last-update">{move || time.get()}</span> }
}

/// Local time as `HH:MM:SS`; static off the browser
fn clock_text() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        let now = js_sys::Date::new_0();
        format!("{:02}:{:02}:{:02}", now.get_hours(), now.get_minutes(), now.get_seconds())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        "--:--:--".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_text_is_static_off_browser() {
        assert_eq!(clock_text(), "--:--:--");
    }
}
