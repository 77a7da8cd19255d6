//! Sidebar sections and the per-section sub-navigation.
//!
//! Highlighting is derived from the current path only: a link is a candidate
//! when its `href` is a prefix of the path on a segment boundary, and the
//! longest candidate wins. `/fleet` therefore stays highlighted on
//! `/fleet/123` but not on `/fleetwood`, and `/fleet/maintenance` beats
//! `/fleet` on its own page.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavSection {
    pub href: &'static str,
    pub label: &'static str,
    /// Short glyph shown when the sidebar is collapsed
    pub icon: &'static str,
    pub links: &'static [NavLink],
}

const fn link(href: &'static str, label: &'static str) -> NavLink {
    NavLink { href, label }
}

pub static SECTIONS: &[NavSection] = &[
    NavSection {
        href: "/",
        label: "Overview",
        icon: "◉",
        links: &[link("/", "Overview")],
    },
    NavSection {
        href: "/fleet",
        label: "Fleet",
        icon: "🚐",
        links: &[
            link("/fleet", "Vehicles"),
            link("/fleet/maintenance", "Maintenance"),
            link("/fleet/inspections", "Inspections"),
            link("/fleet/utilization", "Utilization"),
            link("/fleet/alerts", "Alerts"),
        ],
    },
    NavSection {
        href: "/drivers",
        label: "Drivers",
        icon: "👤",
        links: &[
            link("/drivers", "Roster"),
            link("/drivers/documents", "Documents"),
            link("/drivers/training", "Training"),
            link("/drivers/performance", "Performance"),
            link("/drivers/alerts", "Alerts"),
        ],
    },
    NavSection {
        href: "/scheduling",
        label: "Scheduling",
        icon: "📅",
        links: &[
            link("/scheduling", "Shifts"),
            link("/scheduling/routes", "Routes"),
            link("/scheduling/availability", "Availability"),
        ],
    },
    NavSection {
        href: "/payroll",
        label: "Payroll",
        icon: "$",
        links: &[
            link("/payroll", "Pay Periods"),
            link("/payroll/timesheets", "Timesheets"),
        ],
    },
    NavSection {
        href: "/dispatch",
        label: "Dispatch",
        icon: "📡",
        links: &[
            link("/dispatch", "Live Map"),
            link("/dispatch/rescue", "Rescues"),
        ],
    },
    NavSection {
        href: "/safety",
        label: "Safety",
        icon: "⛑",
        links: &[
            link("/safety", "Incidents"),
            link("/safety/coaching", "Coaching"),
            link("/safety/compliance", "Compliance"),
        ],
    },
    NavSection {
        href: "/packages",
        label: "Packages",
        icon: "📦",
        links: &[
            link("/packages", "Return to Station"),
            link("/packages/lost", "Lost"),
        ],
    },
    NavSection {
        href: "/inventory",
        label: "Inventory",
        icon: "🗄",
        links: &[
            link("/inventory", "Assets"),
            link("/inventory/damage", "Damage"),
        ],
    },
    NavSection {
        href: "/analytics",
        label: "Analytics",
        icon: "📈",
        links: &[link("/analytics", "Analytics")],
    },
];

/// True when `href` covers `path` on a segment boundary. The root only
/// matches itself.
pub fn is_segment_prefix(href: &str, path: &str) -> bool {
    if href == "/" {
        return path == "/";
    }
    match path.strip_prefix(href) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}

fn longest_match<T>(items: &'static [T], path: &str, href: impl Fn(&T) -> &'static str) -> Option<&'static T> {
    items
        .iter()
        .filter(|item| is_segment_prefix(href(*item), path))
        .max_by_key(|item| href(*item).len())
}

pub fn active_section(path: &str) -> Option<&'static NavSection> {
    let path = crate::routes::normalize(path);
    longest_match(SECTIONS, path, |s| s.href)
}

/// The single sub-nav link to highlight for `path`
pub fn active_link(path: &str) -> Option<&'static NavLink> {
    let path = crate::routes::normalize(path);
    let section = active_section(path)?;
    longest_match(section.links, path, |l| l.href)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::ROUTES;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_segment_prefix() {
        assert!(is_segment_prefix("/fleet", "/fleet"));
        assert!(is_segment_prefix("/fleet", "/fleet/maintenance"));
        assert!(!is_segment_prefix("/fleet", "/fleetwood"));
        assert!(is_segment_prefix("/", "/"));
        assert!(!is_segment_prefix("/", "/fleet"));
    }

    #[test]
    fn test_exactly_one_link_active_on_every_route() {
        for route in ROUTES {
            let section = active_section(route.path).expect(route.path);
            let active: Vec<_> = section
                .links
                .iter()
                .filter(|l| active_link(route.path) == Some(*l))
                .collect();
            assert_eq!(active.len(), 1, "{}", route.path);
            assert_eq!(active[0].href, route.path);
        }
    }

    #[test]
    fn test_every_nav_link_is_a_route() {
        for section in SECTIONS {
            for link in section.links {
                assert!(crate::routes::resolve(link.href).is_some(), "{}", link.href);
            }
        }
    }

    #[test]
    fn test_longest_link_wins_on_nested_path() {
        assert_eq!(active_link("/fleet/maintenance/MNT-003").map(|l| l.href), Some("/fleet/maintenance"));
        assert_eq!(active_link("/fleet/VEH-001").map(|l| l.href), Some("/fleet"));
        assert_eq!(active_section("/drivers/").map(|s| s.label), Some("Drivers"));
    }

    #[test]
    fn test_unknown_path_highlights_nothing() {
        assert_eq!(active_section("/fleetwood"), None);
        assert_eq!(active_link("/settings"), None);
    }
}
