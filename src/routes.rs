//! Route table and the sign-in guard

pub const HOME_PATH: &str = "/";
pub const LOGIN_PATH: &str = "/login";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Overview,
    Vehicles,
    Maintenance,
    Inspections,
    Utilization,
    VehicleAlerts,
    Drivers,
    Documents,
    Training,
    Performance,
    DriverAlerts,
    Shifts,
    Routes,
    Availability,
    Payroll,
    Timesheets,
    Dispatch,
    Rescue,
    Incidents,
    Coaching,
    Compliance,
    ReturnToStation,
    LostPackages,
    Assets,
    DamageReports,
    Analytics,
    Login,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteDef {
    pub path: &'static str,
    pub title: &'static str,
    pub page: Page,
}

const fn route(path: &'static str, title: &'static str, page: Page) -> RouteDef {
    RouteDef { path, title, page }
}

/// Every page behind the sign-in
pub static ROUTES: &[RouteDef] = &[
    route("/", "Overview", Page::Overview),
    route("/fleet", "Vehicles", Page::Vehicles),
    route("/fleet/maintenance", "Maintenance", Page::Maintenance),
    route("/fleet/inspections", "Inspections", Page::Inspections),
    route("/fleet/utilization", "Utilization", Page::Utilization),
    route("/fleet/alerts", "Vehicle Alerts", Page::VehicleAlerts),
    route("/drivers", "Driver Roster", Page::Drivers),
    route("/drivers/documents", "Documents", Page::Documents),
    route("/drivers/training", "Training", Page::Training),
    route("/drivers/performance", "Performance", Page::Performance),
    route("/drivers/alerts", "Driver Alerts", Page::DriverAlerts),
    route("/scheduling", "Shifts", Page::Shifts),
    route("/scheduling/routes", "Routes", Page::Routes),
    route("/scheduling/availability", "Availability", Page::Availability),
    route("/payroll", "Payroll", Page::Payroll),
    route("/payroll/timesheets", "Timesheets", Page::Timesheets),
    route("/dispatch", "Live Dispatch", Page::Dispatch),
    route("/dispatch/rescue", "Rescue Operations", Page::Rescue),
    route("/safety", "Incidents", Page::Incidents),
    route("/safety/coaching", "Coaching", Page::Coaching),
    route("/safety/compliance", "Compliance", Page::Compliance),
    route("/packages", "Return to Station", Page::ReturnToStation),
    route("/packages/lost", "Lost Packages", Page::LostPackages),
    route("/inventory", "Assets", Page::Assets),
    route("/inventory/damage", "Damage Reports", Page::DamageReports),
    route("/analytics", "Analytics", Page::Analytics),
];

static LOGIN_ROUTE: RouteDef = route(LOGIN_PATH, "Sign In", Page::Login);

/// Drop a trailing slash so `/fleet/` and `/fleet` are the same page
pub fn normalize(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        HOME_PATH
    } else {
        trimmed
    }
}

pub fn resolve(path: &str) -> Option<&'static RouteDef> {
    let path = normalize(path);
    if path == LOGIN_PATH {
        return Some(&LOGIN_ROUTE);
    }
    ROUTES.iter().find(|r| r.path == path)
}

/// What the guard decided for a navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Render,
    Redirect(&'static str),
}

/// Signed-out visitors only see the login page; signed-in users skip it.
/// Unknown paths render (as not-found) once signed in.
pub fn guard(path: &str, authenticated: bool) -> Access {
    let is_login = normalize(path) == LOGIN_PATH;
    let access = match (is_login, authenticated) {
        (true, true) => Access::Redirect(HOME_PATH),
        (true, false) | (false, true) => Access::Render,
        (false, false) => Access::Redirect(LOGIN_PATH),
    };

    if let Access::Redirect(to) = access {
        log::debug!("Guard redirecting {} -> {}", path, to);
    }
    access
}

/// Browser tab title for `path`
pub fn document_title(path: &str, company: &str) -> String {
    match resolve(path) {
        Some(route) => format!("{} | {}", route.title, company),
        None => format!("Not Found | {}", company),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    #[test]
    fn test_every_route_resolves_to_itself() {
        assert_eq!(ROUTES.len(), 26);
        for route in ROUTES {
            assert_eq!(resolve(route.path), Some(route), "{}", route.path);
            assert_eq!(guard(route.path, true), Access::Render, "{}", route.path);
        }
    }

    #[test]
    fn test_paths_and_pages_are_unique() {
        let paths: HashSet<_> = ROUTES.iter().map(|r| r.path).collect();
        let pages: HashSet<_> = ROUTES.iter().map(|r| r.page).collect();
        assert_eq!(paths.len(), ROUTES.len());
        assert_eq!(pages.len(), ROUTES.len());
    }

    #[test]
    fn test_trailing_slash_is_ignored() {
        assert_eq!(resolve("/fleet/").map(|r| r.page), Some(Page::Vehicles));
        assert_eq!(resolve("").map(|r| r.page), Some(Page::Overview));
        assert_eq!(resolve("/login/").map(|r| r.page), Some(Page::Login));
        assert_eq!(resolve("/fleet/trucks"), None);
    }

    #[test]
    fn test_signed_out_visitors_are_sent_to_login() {
        for route in ROUTES {
            assert_eq!(guard(route.path, false), Access::Redirect(LOGIN_PATH));
        }
        assert_eq!(guard("/no-such-page", false), Access::Redirect(LOGIN_PATH));
        assert_eq!(guard(LOGIN_PATH, false), Access::Render);
    }

    #[test]
    fn test_signed_in_users_skip_login() {
        assert_eq!(guard(LOGIN_PATH, true), Access::Redirect(HOME_PATH));
        assert_eq!(guard("/no-such-page", true), Access::Render);
    }

    #[test]
    fn test_document_title() {
        assert_eq!(document_title("/payroll/timesheets", "DSP Manager"), "Timesheets | DSP Manager");
        assert_eq!(document_title("/nope", "DSP Manager"), "Not Found | DSP Manager");
    }
}
